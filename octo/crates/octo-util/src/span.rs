//! Source locations.
//!
//! A [`Span`] is a half-open byte range into a single source text together
//! with the 1-based line on which the range begins. OctothorP reports errors
//! by line only, so there is no column or file tracking here.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A byte range in the source, tagged with its starting line.
///
/// # Examples
///
/// ```
/// use octo_util::Span;
///
/// let span = Span::new(4, 10, 1);
/// assert_eq!(span.len(), 6);
/// assert_eq!(span.slice("let answer"), "answer");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based) of `start`
    pub line: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span.
    ///
    /// `start` must not be greater than `end`.
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end, line }
    }

    /// Create an empty span at `offset`.
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self::new(offset, offset, line)
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether this is [`Span::DUMMY`].
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }

    /// The byte range covered by this span.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Extract the text covered by this span.
    ///
    /// Returns an empty string if the span does not lie on character
    /// boundaries within `source`.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range()).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} (line {})", self.start, self.end, self.line)
    }
}
