//! Loc - Source location tracking for AST nodes and layout nodes
//!
//! A `Loc` represents a region of source code by start/end positions. It is
//! used for:
//! - Tracking the location of AST nodes
//! - Attaching source positions to layout nodes (source map anchors)
//! - Pointing to error locations in diagnostics
//!
//! Positions carry both a human-oriented line/column pair and a byte offset.

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// `line` is 1-based, `column` is 0-based, `offset` is a byte offset from the
/// start of the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

/// A region of source code: `[start, end)` by offset.
///
/// `source` names the originating file when known; synthetic nodes carry
/// `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loc {
    pub source: Option<String>,
    pub start: Position,
    pub end: Position,
}

impl Loc {
    /// Create a new location.
    #[inline]
    pub fn new(source: Option<String>, start: Position, end: Position) -> Self {
        Loc { source, start, end }
    }

    /// A synthetic location with no extent, used for generated nodes.
    #[inline]
    pub fn none() -> Self {
        Loc {
            source: None,
            start: Position::new(1, 0, 0),
            end: Position::new(1, 0, 0),
        }
    }

    /// The location spanning from the start of `self` to the end of `other`.
    ///
    /// Total over arbitrary inputs: no ordering between the two locations is
    /// assumed. The source name is taken from `self`.
    pub fn btwn(&self, other: &Loc) -> Loc {
        Loc {
            source: self.source.clone(),
            start: self.start,
            end: other.end,
        }
    }

    /// Check if this location contains a byte offset.
    #[inline]
    pub const fn contains_offset(&self, offset: u32) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Number of whole source lines strictly between the end of `self` and
    /// the start of `next`. Returns 0 when the regions touch, overlap, or
    /// are out of order.
    pub fn lines_between(&self, next: &Loc) -> u32 {
        next.start.line.saturating_sub(self.end.line + 1)
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(source) => write!(
                f,
                "{}:{}:{}",
                source, self.start.line, self.start.column
            ),
            None => write!(f, "{}:{}", self.start.line, self.start.column),
        }
    }
}
