//! Search patterns with an optional single leading or trailing `*`.
//!
//! A [`Pattern`] is either a plain literal or an [`Affix`] that matches whole
//! words by prefix or suffix. Wildcard patterns are validated once, when they
//! are built, so an [`Affix`] value always has a well-formed shape.

mod pattern;

pub use pattern::{Affix, Error, Pattern, WILDCARD};
