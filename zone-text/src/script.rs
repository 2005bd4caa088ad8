//! Script tokenizer.
//!
//! Splits chat script into literal text and `{...}` markup spans. A
//! literal newline becomes the synthetic markup token `el`.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Markup,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn text(text: impl Into<String>) -> Self {
        Self { kind: TokenKind::Text, text: text.into() }
    }

    pub fn markup(text: impl Into<String>) -> Self {
        Self { kind: TokenKind::Markup, text: text.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text => f.write_str(&self.text),
            TokenKind::Markup => write!(f, "{{{}}}", self.text),
        }
    }
}

struct Tokenizer {
    tokens: Vec<Token>,
    buffer: String,
    depth: usize,
}

impl Tokenizer {
    fn open_brace(&mut self) {
        if self.depth == 0 {
            self.flush();
        }
        self.depth += 1;
    }

    fn close_brace(&mut self) {
        match self.depth {
            0 => {}
            1 => {
                self.flush();
                self.depth = 0;
            }
            _ => self.depth -= 1,
        }
    }

    fn new_line(&mut self) {
        self.flush();
        self.tokens.push(Token::markup("el"));
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        let kind = if self.depth > 0 { TokenKind::Markup } else { TokenKind::Text };
        self.tokens.push(Token { kind, text });
    }
}

/// Tokenize a script into text and markup tokens, in order.
///
/// Malformed input is handled leniently: a stray `}` is dropped, inner
/// braces only track depth, and an unclosed span is flushed as markup.
pub fn tokenize(script: &str) -> Vec<Token> {
    let mut state = Tokenizer { tokens: Vec::new(), buffer: String::new(), depth: 0 };
    for ch in script.chars() {
        match ch {
            '{' => state.open_brace(),
            '}' => state.close_brace(),
            '\n' => state.new_line(),
            _ => state.buffer.push(ch),
        }
    }
    state.flush();
    state.tokens
}
