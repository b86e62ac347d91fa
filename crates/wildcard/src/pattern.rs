use std::fmt;

use thiserror::Error;

/// The wildcard character.
pub const WILDCARD: char = '*';

/// A search pattern.
///
/// Without wildcard mode every search string is a [`Pattern::Literal`] and a `*`
/// in it is an ordinary character. In wildcard mode the search string must
/// carry exactly one `*`, either at the start or at the end, and is classified
/// into an [`Affix`].
///
/// # Examples
///
/// ```
/// use wildcard::{Affix, Pattern};
///
/// let pattern = Pattern::wildcard("cat*").unwrap();
/// assert_eq!(pattern, Pattern::Affix(Affix::Prefix("cat".into())));
///
/// let pattern = Pattern::new("a*b", false).unwrap();
/// assert_eq!(pattern, Pattern::Literal("a*b".into()));
///
/// assert!(Pattern::wildcard("*a*").is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Pattern {
    Literal(String),
    Affix(Affix),
}

impl Pattern {
    /// Creates a pattern, classifying it as a wildcard pattern if `wildcard` is set.
    pub fn new(raw: impl Into<String>, wildcard: bool) -> Result<Self, Error> {
        let raw = raw.into();
        if wildcard {
            Self::wildcard(raw)
        } else {
            Ok(Self::literal(raw))
        }
    }

    /// Creates a literal pattern.
    pub fn literal(raw: impl Into<String>) -> Self {
        Self::Literal(raw.into())
    }

    /// Creates a wildcard pattern, validating its shape.
    pub fn wildcard(raw: impl AsRef<str>) -> Result<Self, Error> {
        Affix::parse(raw.as_ref()).map(Self::Affix)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Affix(affix) => affix.fmt(f),
        }
    }
}

// ---

/// A one-sided wildcard pattern matching whole words.
///
/// Holds the pattern text without the wildcard, which is never empty.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Affix {
    /// `text*`, matches words starting with `text`.
    Prefix(String),
    /// `*text`, matches words ending with `text`.
    Suffix(String),
}

impl Affix {
    /// Parses a wildcard pattern.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let leading = raw.starts_with(WILDCARD);
        let trailing = raw.ends_with(WILDCARD);

        let (affix, offset) = match (leading, trailing) {
            (true, true) => return Err(Error::BothEnds { pattern: raw.into() }),
            (false, false) => {
                return Err(match raw.find(WILDCARD) {
                    Some(position) => Error::Inner {
                        pattern: raw.into(),
                        position,
                    },
                    None => Error::Missing { pattern: raw.into() },
                });
            }
            (true, false) => (Self::Suffix(raw[1..].into()), 1),
            (false, true) => (Self::Prefix(raw[..raw.len() - 1].into()), 0),
        };

        if let Some(i) = affix.text().find(WILDCARD) {
            return Err(Error::Inner {
                pattern: raw.into(),
                position: offset + i,
            });
        }

        Ok(affix)
    }

    /// Returns the pattern text without the wildcard.
    pub fn text(&self) -> &str {
        match self {
            Self::Prefix(text) | Self::Suffix(text) => text,
        }
    }

    /// Tests whether the whole `word` matches the pattern.
    ///
    /// Words shorter than the pattern text never match.
    #[inline]
    pub fn matches(&self, word: &[u8]) -> bool {
        match self {
            Self::Prefix(text) => word.starts_with(text.as_bytes()),
            Self::Suffix(text) => word.ends_with(text.as_bytes()),
        }
    }
}

impl fmt::Display for Affix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(text) => write!(f, "{}{}", text, WILDCARD),
            Self::Suffix(text) => write!(f, "{}{}", WILDCARD, text),
        }
    }
}

// ---

/// Error is returned when a wildcard pattern has an invalid shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("wildcard pattern {pattern:?} has no leading or trailing '*'")]
    Missing { pattern: String },
    #[error("wildcard pattern {pattern:?} has '*' at both ends")]
    BothEnds { pattern: String },
    #[error("wildcard pattern {pattern:?} has '*' inside at position {position}")]
    Inner { pattern: String, position: usize },
}
