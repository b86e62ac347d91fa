// third-party imports
use memchr::memmem::{self, Finder};
use wildcard::Affix;

// local imports
use crate::tokenize::tokens;

// ---

/// Rewrites a single line.
pub trait Replace {
    /// Appends `line` with replacements applied to `buf` and returns the number of replacements made.
    fn replace(&self, line: &[u8], buf: &mut Vec<u8>) -> usize;
}

// ---

/// Replaces every non-overlapping occurrence of a literal needle.
pub struct LiteralReplacer {
    finder: Finder<'static>,
    replacement: Vec<u8>,
}

impl LiteralReplacer {
    pub fn new(needle: impl AsRef<[u8]>, replacement: impl Into<Vec<u8>>) -> Self {
        Self {
            finder: Finder::new(needle.as_ref()).into_owned(),
            replacement: replacement.into(),
        }
    }
}

impl Replace for LiteralReplacer {
    #[inline]
    fn replace(&self, line: &[u8], buf: &mut Vec<u8>) -> usize {
        let needle = self.finder.needle();
        if needle.is_empty() {
            buf.extend_from_slice(line);
            return 0;
        }
        splice(line, self.finder.find_iter(line), needle.len(), &self.replacement, buf)
    }
}

/// Appends `line` to `buf` with each occurrence of `needle` replaced by `replacement`.
///
/// Occurrences are found left to right and the search resumes right after the
/// end of the previous occurrence, so the inserted replacement text is never
/// searched again. This terminates even when `replacement` contains `needle`.
/// An empty needle matches nothing.
pub fn replace_literal(line: &[u8], needle: &[u8], replacement: &[u8], buf: &mut Vec<u8>) -> usize {
    if needle.is_empty() {
        buf.extend_from_slice(line);
        return 0;
    }
    splice(line, memmem::find_iter(line, needle), needle.len(), replacement, buf)
}

fn splice(
    line: &[u8],
    matches: impl Iterator<Item = usize>,
    len: usize,
    replacement: &[u8],
    buf: &mut Vec<u8>,
) -> usize {
    let mut pos = 0;
    let mut count = 0;
    for i in matches {
        buf.extend_from_slice(&line[pos..i]);
        buf.extend_from_slice(replacement);
        pos = i + len;
        count += 1;
    }
    buf.extend_from_slice(&line[pos..]);
    count
}

// ---

/// Replaces whole words matching a prefix or suffix pattern.
pub struct WordReplacer {
    affix: Affix,
    replacement: Vec<u8>,
}

impl WordReplacer {
    pub fn new(affix: Affix, replacement: impl Into<Vec<u8>>) -> Self {
        Self {
            affix,
            replacement: replacement.into(),
        }
    }
}

impl Replace for WordReplacer {
    #[inline]
    fn replace(&self, line: &[u8], buf: &mut Vec<u8>) -> usize {
        replace_words(line, &self.affix, &self.replacement, buf)
    }
}

/// Appends `line` to `buf` with each word matching `affix` replaced by `replacement`.
///
/// Boundary runs and non-matching words are copied unchanged.
pub fn replace_words(line: &[u8], affix: &Affix, replacement: &[u8], buf: &mut Vec<u8>) -> usize {
    buf.reserve(line.len());

    let mut count = 0;
    for token in tokens(line) {
        let data = &line[token.range()];
        if token.is_word() && affix.matches(data) {
            buf.extend_from_slice(replacement);
            count += 1;
        } else {
            buf.extend_from_slice(data);
        }
    }
    count
}
