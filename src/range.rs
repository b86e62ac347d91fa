// std imports
use std::{fmt, num::ParseIntError, str::FromStr};

// third-party imports
use thiserror::Error;

// ---

/// Inclusive range of 1-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    min: u64,
    max: u64,
}

impl LineRange {
    /// Returns a range with the given bounds, which must satisfy `1 <= min <= max`.
    pub fn new(min: u64, max: u64) -> Result<Self, LineRangeError> {
        if min == 0 || max == 0 {
            return Err(LineRangeError::Zero);
        }
        if min > max {
            return Err(LineRangeError::Reversed { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns a range covering all lines.
    pub fn all() -> Self {
        Self { min: 1, max: u64::MAX }
    }

    #[inline]
    pub fn contains(&self, line: u64) -> bool {
        line >= self.min && line <= self.max
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn is_all(&self) -> bool {
        *self == Self::all()
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for LineRange {
    type Err = LineRangeError;

    /// Parses a range in `MIN,MAX` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('-') {
            return Err(LineRangeError::Negative { value: s.into() });
        }

        let parts: Vec<_> = s.split(',').collect();
        let [min, max] = parts[..] else {
            return Err(LineRangeError::WrongCount { count: parts.len() });
        };

        Self::new(parse_bound(min)?, parse_bound(max)?)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            write!(f, "all")
        } else {
            write!(f, "{},{}", self.min, self.max)
        }
    }
}

fn parse_bound(s: &str) -> Result<u64, LineRangeError> {
    s.trim().parse().map_err(|source| LineRangeError::InvalidNumber {
        value: s.into(),
        source,
    })
}

// ---

/// LineRangeError is an error which may occur when parsing a line range.
#[derive(Error, Debug)]
pub enum LineRangeError {
    #[error("line range {value:?} must not start with '-'")]
    Negative { value: String },
    #[error("line range must consist of exactly two numbers separated by ',', got {count} part(s)")]
    WrongCount { count: usize },
    #[error("invalid line number {value:?}: {source}")]
    InvalidNumber { value: String, source: ParseIntError },
    #[error("line numbers start from 1")]
    Zero,
    #[error("line range start {min} is greater than its end {max}")]
    Reversed { min: u64, max: u64 },
}
