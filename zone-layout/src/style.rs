//! Style state and the directive interpreter.
//!
//! Style directives (`{+wvy}`, `{-wvy}`, `{clr=#ff0000}`) mutate an
//! ordered map that each laid-out glyph snapshots.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of one style key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Flag(bool),
    Text(String),
}

impl StyleValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            StyleValue::Flag(_) => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, StyleValue::Flag(false))
    }
}

/// Ordered style map, in insertion order.
pub type StyleState = IndexMap<String, StyleValue>;

/// Interprets one style directive against the running state.
pub trait StyleHandler {
    fn apply(&mut self, state: &mut StyleState, directive: &str);
}

/// `+name` sets a flag, `-name` removes a key, `key=value` sets text.
/// Anything else is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStyleHandler;

impl StyleHandler for DefaultStyleHandler {
    fn apply(&mut self, state: &mut StyleState, directive: &str) {
        if let Some(name) = directive.strip_prefix('+') {
            state.insert(name.to_string(), StyleValue::Flag(true));
        } else if let Some(name) = directive.strip_prefix('-') {
            state.shift_remove(name);
        } else if let Some((key, value)) = directive.split_once('=') {
            state.insert(key.trim().to_string(), StyleValue::Text(value.trim().to_string()));
        } else {
            log::trace!("Ignoring style directive '{directive}'");
        }
    }
}

impl<F> StyleHandler for F
where
    F: FnMut(&mut StyleState, &str),
{
    fn apply(&mut self, state: &mut StyleState, directive: &str) {
        self(state, directive)
    }
}
