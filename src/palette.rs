//! Colour palette and the direction-indexed orientation table.
//!
//! | Direction | Colour |
//! |-----------|--------|
//! | North     | white  |
//! | East      | blue   |
//! | South     | red    |
//! | West      | green  |
//! | Up        | purple |
//! | Down      | cyan   |

use smart_leds::RGB8;

/// 24-bit colour as sent to the strip.
pub type Rgb = RGB8;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    RGB8 { r, g, b }
}

// ── Named colours ─────────────────────────────────────────────

pub const WHITE: Rgb = rgb(255, 255, 255);
pub const BLACK: Rgb = rgb(0, 0, 0);
pub const RED: Rgb = rgb(255, 0, 0);
pub const GREEN: Rgb = rgb(0, 255, 0);
pub const BLUE: Rgb = rgb(0, 0, 255);
pub const CYAN: Rgb = rgb(0, 255, 255);
pub const YELLOW: Rgb = rgb(255, 255, 0);
pub const ORANGE: Rgb = rgb(255, 128, 0);
pub const PINK: Rgb = rgb(255, 0, 128);
pub const PURPLE: Rgb = rgb(192, 64, 255);

/// Cardinal and vertical directions an LED can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    Up = 4,
    Down = 5,
}

impl Direction {
    pub const COUNT: usize = 6;

    pub const ALL: [Direction; Self::COUNT] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];
}

/// Colour for each direction, indexed by [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationColours([Rgb; Direction::COUNT]);

impl OrientationColours {
    pub const fn new(colours: [Rgb; Direction::COUNT]) -> Self {
        Self(colours)
    }

    pub const fn get(&self, direction: Direction) -> Rgb {
        self.0[direction as usize]
    }
}

impl Default for OrientationColours {
    fn default() -> Self {
        ORIENTATION_COLOURS
    }
}

/// Stock orientation table.
pub const ORIENTATION_COLOURS: OrientationColours =
    OrientationColours::new([WHITE, BLUE, RED, GREEN, PURPLE, CYAN]);
