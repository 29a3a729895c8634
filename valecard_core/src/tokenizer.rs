//! Bracket-aware word splitter for ability text.
//!
//! Whitespace separates words and is dropped. `{...}` and `(...)` spans
//! become single words including their delimiters, even when glued to
//! neighbouring text. An opener with no matching closer is plain text.

use std::ops::Range;

/// One raw word of ability text, not yet classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Whitespace separated this word from the previous one.
    /// Always `false` for the first word.
    pub spaced: bool,
}

impl<'a> Word<'a> {
    pub const fn new(text: &'a str, spaced: bool) -> Self {
        Self { text, spaced }
    }
}

fn closer_for(c: char) -> Option<char> {
    match c {
        '{' => Some('}'),
        '(' => Some(')'),
        _ => None,
    }
}

/// Output builder: tracks the literal run in progress and pending whitespace.
struct Splitter<'a> {
    text: &'a str,
    words: Vec<Word<'a>>,
    literal: Option<Range<usize>>,
    gap: bool,
}

impl<'a> Splitter<'a> {
    fn emit(&mut self, span: Range<usize>) {
        let spaced = self.gap && !self.words.is_empty();
        self.words.push(Word::new(&self.text[span], spaced));
        self.gap = false;
    }

    fn flush(&mut self) {
        if let Some(span) = self.literal.take() {
            self.emit(span);
        }
    }

    fn extend_literal(&mut self, at: usize, len: usize) {
        let span = self.literal.get_or_insert(at..at);
        span.end = at + len;
    }
}

/// Split `text` into words and bracket codes, left to right.
pub fn tokenize(text: &str) -> Vec<Word<'_>> {
    let mut s = Splitter {
        text,
        words: Vec::new(),
        literal: None,
        gap: false,
    };

    let mut i = 0;
    while let Some(c) = text[i..].chars().next() {
        let len = c.len_utf8();

        if c.is_whitespace() {
            s.flush();
            s.gap = true;
            i += len;
            continue;
        }

        if let Some(closer) = closer_for(c) {
            s.flush();
            if let Some(rel) = text[i + len..].find(closer) {
                let end = i + len + rel + closer.len_utf8();
                s.emit(i..end);
                i = end;
                continue;
            }
            // Unclosed: the opener is ordinary text.
        }

        s.extend_literal(i, len);
        i += len;
    }

    s.flush();
    s.words
}

#[cfg(test)]
mod tests;
