//! Per-row segment extraction.
//!
//! A segment is a maximal run of label/content characters (letters, digits,
//! underscore, space, parentheses) on one plan row. Wall glyphs (`+`, `-`,
//! `|`, `/` and anything else outside that set) break runs. Plans are ASCII,
//! so match offsets are column numbers.

use regex::Regex;
use serde::Serialize;

/// One contiguous run of non-wall characters on a single plan row.
///
/// `x_end` is exclusive. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub row: usize,
    pub x_start: usize,
    pub x_end: usize,
}

/// Extracts segments row by row. Holds the compiled run pattern.
pub struct SegmentExtractor {
    run: Regex,
}

impl Default for SegmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentExtractor {
    pub fn new() -> Self {
        Self {
            run: Regex::new(r"[\w ()]+").unwrap(),
        }
    }

    /// Segments of `row` at row index `y`, produced left to right.
    ///
    /// A row of pure wall glyphs (or an empty row) yields nothing.
    pub fn segments<'a>(&'a self, row: &'a str, y: usize) -> impl Iterator<Item = Segment> + 'a {
        self.run.find_iter(row).map(move |m| Segment {
            text: m.as_str().to_string(),
            row: y,
            x_start: m.start(),
            x_end: m.end(),
        })
    }
}
