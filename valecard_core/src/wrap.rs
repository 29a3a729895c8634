//! Greedy line wrapping of measured tokens.
//!
//! Single pass, no backtracking: a token joins the current line if it fits
//! (or the line is empty), otherwise it starts the next one. Tokens are never
//! split, so a token wider than the limit overflows on a line of its own.

use crate::surface::TextMeasure;
use crate::token::Token;

/// One wrapped row of tokens with their measured advances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    tokens: Vec<Token>,
    advances: Vec<f32>,
    width: f32,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, token: Token, advance: f32) {
        self.tokens.push(token);
        self.advances.push(advance);
        self.width += advance;
    }

    /// Drop trailing separators and re-sum the width.
    fn finish(mut self) -> Self {
        while self.tokens.last().is_some_and(Token::is_separator) {
            self.tokens.pop();
            self.advances.pop();
        }
        self.width = self.advances.iter().sum();
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens paired with their advances, left to right.
    pub fn items(&self) -> impl Iterator<Item = (&Token, f32)> {
        self.tokens.iter().zip(self.advances.iter().copied())
    }

    /// Total advance of all tokens.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Pack `tokens` into lines no wider than `max_width` at font size `size`.
///
/// Always returns at least one line; empty input yields a single empty line.
pub fn wrap(
    tokens: impl IntoIterator<Item = Token>,
    max_width: f32,
    measure: &dyn TextMeasure,
    size: f32,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::new();

    for token in tokens {
        let separator = token.is_separator();
        if current.is_empty() && separator {
            continue;
        }

        let advance = token.advance(measure, size);
        if current.is_empty() || current.width + advance <= max_width {
            current.push(token, advance);
            continue;
        }

        lines.push(std::mem::take(&mut current).finish());
        if !separator {
            current.push(token, advance);
        }
    }

    // A trailing overflowing separator leaves `current` empty; only keep an
    // empty line when it is the only one.
    if !current.is_empty() || lines.is_empty() {
        lines.push(current.finish());
    }
    lines
}
