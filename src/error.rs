//! Error taxonomy for map parsing and traversal.
//!
//! Every failure is terminal: malformed or ambiguous input aborts the walk
//! immediately, there is nothing to retry. Traversal-phase variants carry
//! the position of the offending cell.

use std::error;
use std::fmt;

/// Reasons a pipe map cannot be parsed or walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// More than one `@` in the map.
    MultipleStart,
    /// No `@` anywhere in the map.
    MissingStart,
    /// No `x` anywhere in the map.
    MissingEnd,
    /// The start marker has no adjacent path cell.
    NoStartNeighbour,
    /// The start marker has more than one adjacent path cell.
    MultipleStartPaths,
    /// A corner with no turn to take.
    FakeTurn { x: i32, y: i32 },
    /// More than one legal continuation at a corner.
    Fork { x: i32, y: i32 },
    /// A letter with exactly two undetermined directions.
    AmbiguousLetterIntersection { x: i32, y: i32 },
    /// A letter cell the walk cannot leave.
    DeadEnd { x: i32, y: i32 },
    /// A non-end cell with nowhere to go.
    BrokenPath { x: i32, y: i32 },
    /// A straight segment whose continuation is blank.
    InvalidCorner { x: i32, y: i32 },
    /// A character outside the recognized set.
    InvalidChar { value: char, x: i32, y: i32 },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleStart => write!(f, "map has more than one start marker"),
            Self::MissingStart => write!(f, "map has no start marker"),
            Self::MissingEnd => write!(f, "map has no end marker"),
            Self::NoStartNeighbour => write!(f, "start marker has no path next to it"),
            Self::MultipleStartPaths => {
                write!(f, "start marker has more than one path leading away")
            }
            Self::FakeTurn { x, y } => {
                write!(f, "fake turn at ({x}, {y}): corner has no turn to take")
            }
            Self::Fork { x, y } => {
                write!(f, "fork at ({x}, {y}): more than one way to continue")
            }
            Self::AmbiguousLetterIntersection { x, y } => {
                write!(f, "ambiguous letter intersection at ({x}, {y})")
            }
            Self::DeadEnd { x, y } => write!(f, "dead end at letter ({x}, {y})"),
            Self::BrokenPath { x, y } => write!(f, "broken path at ({x}, {y})"),
            Self::InvalidCorner { x, y } => {
                write!(f, "line at ({x}, {y}) runs into blank space")
            }
            Self::InvalidChar { value, x, y } => {
                write!(f, "unrecognized character '{value}' at ({x}, {y})")
            }
        }
    }
}

impl error::Error for TraceError {}
