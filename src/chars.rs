//! Character classification for pipe map cells.

/// Start marker
pub const START: char = '@';
/// End marker
pub const END: char = 'x';
/// Horizontal segment
pub const HORIZONTAL: char = '-';
/// Vertical segment
pub const VERTICAL: char = '|';
/// Corner marker
pub const CORNER: char = '+';

pub fn is_start(c: char) -> bool {
    c == START
}

pub fn is_end(c: char) -> bool {
    c == END
}

pub fn is_corner(c: char) -> bool {
    c == CORNER
}

/// `-` or `|`: segments that never change the walk direction
pub fn is_straight(c: char) -> bool {
    c == HORIZONTAL || c == VERTICAL
}

/// Letters double as path segments; only ASCII uppercase counts
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}
