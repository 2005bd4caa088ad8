//! Layout commands generated from script tokens.

use serde::Serialize;

use crate::script::{tokenize, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakTarget {
    Line,
    Page,
}

/// One step of the layout program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    /// Place one character. `breakable` glyphs are candidate line breaks.
    Glyph { ch: char, breakable: bool },
    /// Pass a directive to the style interpreter.
    Style { directive: String },
    Break { target: BreakTarget },
}

impl Command {
    pub fn glyph(ch: char) -> Self {
        Command::Glyph { ch, breakable: ch == ' ' }
    }

    /// Map one markup token's text to a command.
    pub fn parse_markup(markup: &str) -> Self {
        match markup {
            "ep" => Command::Break { target: BreakTarget::Page },
            "el" => Command::Break { target: BreakTarget::Line },
            _ => Command::Style { directive: markup.to_string() },
        }
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self, Command::Glyph { .. })
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Command::Break { .. })
    }

    pub fn is_breakable(&self) -> bool {
        matches!(self, Command::Glyph { breakable: true, .. })
    }
}

/// Expand tokens into commands: one glyph per text character, and one
/// break or style command per markup token.
pub fn tokens_to_commands(tokens: &[Token]) -> Vec<Command> {
    let mut commands = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::Text => commands.extend(token.text.chars().map(Command::glyph)),
            TokenKind::Markup => commands.push(Command::parse_markup(&token.text)),
        }
    }
    commands
}

/// Tokenize and expand a script in one step.
pub fn script_to_commands(script: &str) -> Vec<Command> {
    tokens_to_commands(&tokenize(script))
}
