//! Splits a line into alternating runs of boundary bytes and word bytes.
//!
//! Classification is byte-oriented and locale-independent: ASCII whitespace
//! (including vertical tab), ASCII punctuation and NUL are boundaries, every
//! other byte, including all bytes of multi-byte UTF-8 sequences, is a word byte.

// std imports
use std::ops::Range;

// ---

/// Returns true if the byte delimits words.
#[inline]
pub fn is_boundary(b: u8) -> bool {
    matches!(b, b'\0' | b'\x0b') || b.is_ascii_whitespace() || b.is_ascii_punctuation()
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Boundary,
    Word,
}

/// A maximal run of bytes of the same kind within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Scans the token starting at `position`.
///
/// Returns `None` when `position` is at or past the end of the line.
/// The returned token's `end` is the position to continue scanning from.
pub fn next_token(line: &[u8], position: usize) -> Option<Token> {
    let first = *line.get(position)?;
    let boundary = is_boundary(first);
    let len = line[position + 1..]
        .iter()
        .position(|&b| is_boundary(b) != boundary)
        .unwrap_or(line.len() - position - 1);

    Some(Token {
        kind: if boundary { TokenKind::Boundary } else { TokenKind::Word },
        start: position,
        end: position + 1 + len,
    })
}

/// Returns an iterator over all tokens of the line.
pub fn tokens(line: &[u8]) -> Tokens<'_> {
    Tokens { line, position: 0 }
}

// ---

pub struct Tokens<'a> {
    line: &'a [u8],
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let token = next_token(self.line, self.position)?;
        self.position = token.end;
        Some(token)
    }
}
