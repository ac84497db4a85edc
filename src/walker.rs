//! The traversal state machine.
//!
//! Walks the map one cell at a time, dispatching on the current cell's
//! value: straight segments keep the direction, corners must turn, and
//! letters pass through but may sit on an intersection.

use crate::chars;
use crate::direction::Direction;
use crate::error::TraceError;
use crate::grid::{Cell, Grid};

/// Outcome of a single step: where to go and which way we are facing.
#[derive(Debug, Clone, Copy)]
struct Step {
    next: Cell,
    direction: Direction,
}

/// Walk the map from `start` until the end marker.
///
/// Returns every visited cell in order, the start cell first and the end
/// marker last. The walk aborts on the first malformed-map condition.
pub fn traverse(start: Cell, grid: &Grid) -> Result<Vec<Cell>, TraceError> {
    let (mut direction, mut current) = grid.start_exit(start)?;
    let mut visited = vec![start];
    let mut previous = start;

    loop {
        if current == previous {
            // No forward progress; the walk is done.
            break;
        }
        let neighbours = grid.neighbours(previous, current);
        visited.push(current);

        if chars::is_end(current.value) {
            return Ok(visited);
        }
        if neighbours.is_empty() {
            return Err(TraceError::BrokenPath {
                x: current.x,
                y: current.y,
            });
        }

        let step = if chars::is_letter(current.value) {
            letter_step(current, grid, &neighbours, direction)?
        } else if chars::is_corner(current.value) {
            corner_step(current, &neighbours, direction)?
        } else if chars::is_straight(current.value) {
            Step {
                next: straight_step(current, grid, direction)?,
                direction,
            }
        } else {
            return Err(TraceError::InvalidChar {
                value: current.value,
                x: current.x,
                y: current.y,
            });
        };

        previous = current;
        current = step.next;
        direction = step.direction;
    }

    Ok(visited)
}

/// `-` and `|` continue in the current direction. The map promises a
/// continuation; a blank there means the corner marker is missing.
fn straight_step(current: Cell, grid: &Grid, direction: Direction) -> Result<Cell, TraceError> {
    let (dx, dy) = direction.delta();
    grid.get(current.x + dx, current.y + dy)
        .ok_or(TraceError::InvalidCorner {
            x: current.x,
            y: current.y,
        })
}

/// `+` must turn 90°: going straight through a corner is not allowed.
fn corner_step(
    current: Cell,
    neighbours: &[(Direction, Cell)],
    direction: Direction,
) -> Result<Step, TraceError> {
    let turns: Vec<(Direction, Cell)> = neighbours
        .iter()
        .copied()
        .filter(|(d, _)| *d != direction)
        .collect();
    match turns.as_slice() {
        [] => Err(TraceError::FakeTurn {
            x: current.x,
            y: current.y,
        }),
        [(d, next)] => Ok(Step {
            next: *next,
            direction: *d,
        }),
        many => {
            // Apparent fork: drop candidates whose value cannot accept the
            // approach axis (`|` reached horizontally, `-` vertically).
            let valid: Vec<(Direction, Cell)> = many
                .iter()
                .copied()
                .filter(|(d, n)| {
                    !(d.is_horizontal() && n.value == chars::VERTICAL)
                        && !(d.is_vertical() && n.value == chars::HORIZONTAL)
                })
                .collect();
            match valid.as_slice() {
                [] => Err(TraceError::FakeTurn {
                    x: current.x,
                    y: current.y,
                }),
                [(d, next)] => Ok(Step {
                    next: *next,
                    direction: *d,
                }),
                _ => Err(TraceError::Fork {
                    x: current.x,
                    y: current.y,
                }),
            }
        }
    }
}

/// Letters are path segments that may sit on an intersection. At a
/// three-neighbour crossroad the walk keeps its direction; with a single
/// neighbour it follows it, turning if needed.
fn letter_step(
    current: Cell,
    grid: &Grid,
    neighbours: &[(Direction, Cell)],
    direction: Direction,
) -> Result<Step, TraceError> {
    match neighbours {
        [] => Err(TraceError::DeadEnd {
            x: current.x,
            y: current.y,
        }),
        [_, _] => Err(TraceError::AmbiguousLetterIntersection {
            x: current.x,
            y: current.y,
        }),
        [_, _, _] => {
            let (dx, dy) = direction.delta();
            grid.get(current.x + dx, current.y + dy)
                .map(|next| Step { next, direction })
                .ok_or(TraceError::BrokenPath {
                    x: current.x,
                    y: current.y,
                })
        }
        [(d, next), ..] => Ok(Step {
            next: *next,
            direction: *d,
        }),
    }
}
