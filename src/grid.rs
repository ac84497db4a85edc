//! Sparse grid model for pipe maps.
//!
//! A map is a mapping from (x, y) to occupied cells; spaces are absent
//! rather than stored as blanks. Rows may be ragged: positions past the
//! end of a short row are simply not there.

use std::collections::HashMap;

use crate::chars;
use crate::direction::Direction;
use crate::error::TraceError;

/// A single occupied grid position.
///
/// Two cells are equal when their coordinates are; the value plays no
/// part in identity. The traversal driver's termination check and letter
/// deduplication both rely on this.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub value: char,
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(value: char, x: i32, y: i32) -> Self {
        Self { value, x, y }
    }

    /// Coordinate pair, for keying sets and maps.
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

/// The parsed map: occupied cells keyed by position.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: HashMap<(i32, i32), Cell>,
}

impl Grid {
    /// Parse a map from its text form.
    ///
    /// Returns the start cell alongside the grid. Space characters are
    /// skipped entirely; row `i`, column `j` lands at position `(j, i)`.
    /// The map must contain exactly one `@` and at least one `x`.
    pub fn parse(input: &str) -> Result<(Cell, Grid), TraceError> {
        let mut cells = HashMap::new();
        let mut start = None;
        let mut end_found = false;

        for (y, row) in input.lines().enumerate() {
            for (x, value) in row.chars().enumerate() {
                if value == ' ' {
                    continue;
                }
                let cell = Cell::new(value, x as i32, y as i32);
                cells.insert(cell.pos(), cell);
                if chars::is_start(value) {
                    if start.is_some() {
                        return Err(TraceError::MultipleStart);
                    }
                    start = Some(cell);
                } else if chars::is_end(value) {
                    end_found = true;
                }
            }
        }

        let start = start.ok_or(TraceError::MissingStart)?;
        if !end_found {
            return Err(TraceError::MissingEnd);
        }
        Ok((start, Grid { cells }))
    }

    /// Look up the cell at (x, y), if occupied.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells orthogonally adjacent to `current`, paired with the
    /// direction that reaches them, in left, right, up, down query order.
    ///
    /// The cell at `previous`'s coordinates is excluded. That exclusion
    /// is the only thing preventing an immediate 180° turn; it is not a
    /// visited set, and a cell reached again from another direction is
    /// returned as usual.
    pub fn neighbours(&self, previous: Cell, current: Cell) -> Vec<(Direction, Cell)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let (dx, dy) = direction.delta();
                self.get(current.x + dx, current.y + dy)
                    .filter(|n| *n != previous)
                    .map(|n| (direction, n))
            })
            .collect()
    }

    /// The single exit from the start marker.
    ///
    /// Expansion with the start as its own predecessor, so nothing is
    /// excluded. The start must have exactly one way out.
    pub fn start_exit(&self, start: Cell) -> Result<(Direction, Cell), TraceError> {
        let mut exits = self.neighbours(start, start);
        match exits.len() {
            0 => Err(TraceError::NoStartNeighbour),
            1 => Ok(exits.remove(0)),
            _ => Err(TraceError::MultipleStartPaths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASIC: &str = "@---A---+\n        |\nx-B-+   C\n    |   |\n    +---+";

    #[test]
    fn parse_skips_spaces_and_keeps_coordinates() {
        let (start, grid) = Grid::parse("@-x\n  |").unwrap();
        assert_eq!(start.value, '@');
        assert_eq!(start.pos(), (0, 0));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.get(2, 1).map(|c| c.value), Some('|'));
        assert_eq!(grid.get(1, 1), None);
    }

    #[test]
    fn parse_handles_ragged_rows() {
        let (_, grid) = Grid::parse("@-x\n|").unwrap();
        assert_eq!(grid.get(0, 1).map(|c| c.value), Some('|'));
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.get(2, 1), None);
    }

    #[test]
    fn parse_rejects_multiple_starts() {
        assert_eq!(Grid::parse("@-x-@").unwrap_err(), TraceError::MultipleStart);
    }

    #[test]
    fn parse_requires_a_start() {
        assert_eq!(Grid::parse("--x").unwrap_err(), TraceError::MissingStart);
    }

    #[test]
    fn parse_requires_an_end() {
        assert_eq!(Grid::parse("@--").unwrap_err(), TraceError::MissingEnd);
    }

    #[test]
    fn parse_allows_multiple_ends() {
        let (_, grid) = Grid::parse("@-x x").unwrap();
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn neighbours_query_left_right_up_down() {
        let (_, grid) = Grid::parse(" @ \n-+-\n x ").unwrap();
        let current = grid.get(1, 1).unwrap();
        let far_away = Cell::new('-', 9, 9);
        let dirs: Vec<Direction> = grid
            .neighbours(far_away, current)
            .iter()
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(
            dirs,
            vec![
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down
            ]
        );
    }

    #[test]
    fn neighbours_exclude_the_previous_cell() {
        let (_, grid) = Grid::parse(" @ \n-+-\n x ").unwrap();
        let current = grid.get(1, 1).unwrap();
        let previous = grid.get(0, 1).unwrap();
        let neighbours = grid.neighbours(previous, current);
        assert_eq!(neighbours.len(), 3);
        assert!(neighbours.iter().all(|(_, n)| n.pos() != previous.pos()));
    }

    #[test]
    fn start_exit_takes_the_single_path() {
        let (start, grid) = Grid::parse(BASIC).unwrap();
        let (direction, exit) = grid.start_exit(start).unwrap();
        assert_eq!(direction, Direction::Right);
        assert_eq!(exit.pos(), (1, 0));
    }

    #[test]
    fn start_exit_requires_a_neighbour() {
        let (start, grid) = Grid::parse("@ x").unwrap();
        assert_eq!(
            grid.start_exit(start).unwrap_err(),
            TraceError::NoStartNeighbour
        );
    }

    #[test]
    fn start_exit_rejects_multiple_paths() {
        let (start, grid) = Grid::parse("x-@-x").unwrap();
        assert_eq!(
            grid.start_exit(start).unwrap_err(),
            TraceError::MultipleStartPaths
        );
    }

    fn arb_map() -> impl Strategy<Value = String> {
        proptest::collection::vec("[ @x+|A-Z-]{0,24}", 0..8).prop_map(|rows| rows.join("\n"))
    }

    proptest! {
        #[test]
        fn parse_is_deterministic(input in arb_map()) {
            let first = Grid::parse(&input);
            let second = Grid::parse(&input);
            match (first, second) {
                (Ok((s1, g1)), Ok((s2, g2))) => {
                    prop_assert_eq!(s1.pos(), s2.pos());
                    prop_assert_eq!(s1.value, s2.value);
                    prop_assert_eq!(g1.len(), g2.len());
                    for y in 0..8 {
                        for x in 0..24 {
                            prop_assert_eq!(
                                g1.get(x, y).map(|c| c.value),
                                g2.get(x, y).map(|c| c.value)
                            );
                        }
                    }
                }
                (Err(e1), Err(e2)) => prop_assert_eq!(e1, e2),
                _ => prop_assert!(false, "parse outcomes diverged"),
            }
        }

        #[test]
        fn neighbours_are_bounded_and_adjacent(
            x in -1i32..12,
            y in -1i32..8,
            d in 0usize..4,
        ) {
            let (_, grid) = Grid::parse(BASIC).unwrap();
            let current = Cell::new('+', x, y);
            let (dx, dy) = Direction::ALL[d].delta();
            let previous = Cell::new('-', x + dx, y + dy);
            let neighbours = grid.neighbours(previous, current);
            prop_assert!(neighbours.len() <= 4);
            for (direction, n) in neighbours {
                prop_assert!(n.pos() != previous.pos());
                let (ex, ey) = direction.delta();
                prop_assert_eq!((n.x - current.x, n.y - current.y), (ex, ey));
            }
        }
    }
}
