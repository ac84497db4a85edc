//! Follow ASCII art pipe maps.
//!
//! A pipe map is a character grid: `@` marks the start, `x` the end, and
//! `-`, `|`, `+` and uppercase letters form the path between them. This
//! crate walks the path and reports the letters passed along the way,
//! together with the full trace of characters travelled.
//!
//! # Example
//!
//! ```rust
//! let map = "@---A---+\n        |\nx-B-+   C\n    |   |\n    +---+";
//! let trace = aatrace::trace(map).unwrap();
//! assert_eq!(trace.letters, "ACB");
//! assert_eq!(trace.path, "@---A---+|C|+---+|+-B-x");
//! ```

mod chars;
mod direction;
mod error;
mod grid;
mod trace;
mod walker;

pub use direction::Direction;
pub use error::TraceError;
pub use grid::{Cell, Grid};
pub use trace::Trace;
pub use walker::traverse;

/// Walk the map in `input` from `@` to `x`.
///
/// `input` is the raw map text; rows may have different lengths. Returns
/// the collected letters and the full path, or the first malformed-map
/// condition encountered.
pub fn trace(input: &str) -> Result<Trace, TraceError> {
    let (start, grid) = Grid::parse(input)?;
    let cells = traverse(start, &grid)?;
    Ok(Trace::from_cells(&cells))
}
