//! LED grid model: per-LED position and capability flags.
//!
//! Each LED on the strip is described by a [`LedConfig`] holding its
//! position on a 16 × 16 grid and a [`LedFlags`] bitset. Flags are checked
//! independently by every layer, so one LED can be both a mode LED and a
//! battery LED, or face north and east at the same time.
//!
//! ## Default frame layout (28 LEDs)
//!
//! ```text
//!  0..5   rear right cluster    0..2 rear,   3..5 right
//!  6..11  front right cluster   6..8 rear,   9..11 front
//!  12..15 front centre cluster
//!  16..21 front left cluster    16..18 front, 19..21 rear
//!  22..27 rear left cluster     22..24 left,  25..27 rear
//! ```

use log::info;

use crate::error::{Error, LayoutError, Result};
use crate::palette::Direction;

/// Number of LEDs on the stock frame.
pub const LED_STRIP_LENGTH: usize = 28;

/// Highest coordinate that fits in one nibble.
pub const GRID_MAX_COORD: u8 = 0x0F;

const X_BIT_OFFSET: u8 = 4;
const Y_BIT_OFFSET: u8 = 0;
const X_MASK: u8 = 0xF0;
const Y_MASK: u8 = 0x0F;

// ═══════════════════════════════════════════════════════════════
//  Flags
// ═══════════════════════════════════════════════════════════════

/// A single capability bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum LedFlag {
    DirectionNorth = 1 << 0,
    DirectionEast = 1 << 1,
    DirectionSouth = 1 << 2,
    DirectionWest = 1 << 3,
    DirectionUp = 1 << 4,
    DirectionDown = 1 << 5,
    FunctionIndicator = 1 << 6,
    FunctionBattery = 1 << 7,
    FunctionMode = 1 << 8,
}

impl LedFlag {
    /// Return the bitmask for this flag.
    pub const fn mask(self) -> u16 {
        self as u16
    }

    /// Flag representing `direction`.
    pub const fn direction(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::DirectionNorth,
            Direction::East => Self::DirectionEast,
            Direction::South => Self::DirectionSouth,
            Direction::West => Self::DirectionWest,
            Direction::Up => Self::DirectionUp,
            Direction::Down => Self::DirectionDown,
        }
    }
}

/// Direction pairs that cannot share one LED.
const OPPOSING_DIRECTIONS: [(LedFlag, LedFlag); 3] = [
    (LedFlag::DirectionNorth, LedFlag::DirectionSouth),
    (LedFlag::DirectionEast, LedFlag::DirectionWest),
    (LedFlag::DirectionUp, LedFlag::DirectionDown),
];

/// Set of [`LedFlag`]s. The empty set means the LED is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedFlags(u16);

impl LedFlags {
    pub const DISABLED: Self = Self(0);

    /// Build a set from a list of flags (usable in `const` tables).
    pub const fn of(flags: &[LedFlag]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < flags.len() {
            bits |= flags[i].mask();
            i += 1;
        }
        Self(bits)
    }

    pub const fn with(self, flag: LedFlag) -> Self {
        Self(self.0 | flag.mask())
    }

    pub const fn contains(self, flag: LedFlag) -> bool {
        self.0 & flag.mask() != 0
    }

    pub const fn has_direction(self, direction: Direction) -> bool {
        self.contains(LedFlag::direction(direction))
    }

    pub const fn is_disabled(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True if the set holds both directions of an opposing pair.
    pub fn has_opposing_directions(self) -> bool {
        OPPOSING_DIRECTIONS
            .iter()
            .any(|&(a, b)| self.contains(a) && self.contains(b))
    }
}

// ═══════════════════════════════════════════════════════════════
//  Position
// ═══════════════════════════════════════════════════════════════

/// Grid position packed into one byte: x in the high nibble, y in the low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition(u8);

impl GridPosition {
    /// Pack `(x, y)`. Both coordinates must be `<= 15`; in a `const`
    /// table an out-of-range coordinate fails the build.
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x <= GRID_MAX_COORD && y <= GRID_MAX_COORD, "grid coordinate out of range");
        Self(((x << X_BIT_OFFSET) & X_MASK) | ((y << Y_BIT_OFFSET) & Y_MASK))
    }

    pub const fn x(self) -> u8 {
        (self.0 & X_MASK) >> X_BIT_OFFSET
    }

    pub const fn y(self) -> u8 {
        (self.0 & Y_MASK) >> Y_BIT_OFFSET
    }

    pub const fn packed(self) -> u8 {
        self.0
    }
}

// ═══════════════════════════════════════════════════════════════
//  LED config and layout
// ═══════════════════════════════════════════════════════════════

/// Static description of one LED on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedConfig {
    pub position: GridPosition,
    pub flags: LedFlags,
}

impl LedConfig {
    pub const fn new(x: u8, y: u8, flags: &[LedFlag]) -> Self {
        Self {
            position: GridPosition::new(x, y),
            flags: LedFlags::of(flags),
        }
    }

    pub const fn has(&self, flag: LedFlag) -> bool {
        self.flags.contains(flag)
    }
}

/// A validated, immutable LED table, index-aligned with the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedLayout<const N: usize> {
    leds: [LedConfig; N],
}

impl<const N: usize> LedLayout<N> {
    /// Validate and wrap an LED table.
    pub fn new(leds: [LedConfig; N]) -> Result<Self> {
        if let Some(index) = leds
            .iter()
            .position(|led| led.flags.has_opposing_directions())
        {
            return Err(LayoutError::OpposingDirections { index }.into());
        }
        Ok(Self { leds })
    }

    pub fn leds(&self) -> &[LedConfig; N] {
        &self.leds
    }

    pub fn iter(&self) -> impl Iterator<Item = &LedConfig> {
        self.leds.iter()
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of LEDs carrying `flag`.
    pub fn count_with(&self, flag: LedFlag) -> usize {
        self.leds.iter().filter(|led| led.has(flag)).count()
    }
}

impl LedLayout<LED_STRIP_LENGTH> {
    /// The stock 28-LED frame layout, validated like any other.
    pub fn stock() -> Result<Self> {
        Self::new(DEFAULT_LAYOUT)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Grid dimensions
// ═══════════════════════════════════════════════════════════════

/// Width and height of the LED grid. Height is always at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    width: u8,
    height: u8,
}

/// Smallest height the orientation boundaries are defined for.
pub const GRID_MIN_HEIGHT: u8 = 2;

impl GridDimensions {
    /// Placeholder grid used until dimensions are derived from the layout.
    pub const PLACEHOLDER: Self = Self {
        width: 12,
        height: 12,
    };

    pub fn new(width: u8, height: u8) -> Result<Self> {
        if height < GRID_MIN_HEIGHT {
            return Err(Error::Config("grid height must be at least 2"));
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }
}

/// Determine the grid dimensions for a layout. Runs once at startup.
///
/// Always yields the [`GridDimensions::PLACEHOLDER`] size; the LED
/// positions are not consulted, so the orientation boundaries stay fixed
/// at 12 rows.
pub fn determine_dimensions<const N: usize>(_layout: &LedLayout<N>) -> Result<GridDimensions> {
    // TODO: derive width/height from the maximum x/y in the layout once the
    // boundary math has been re-checked against non-12-row frames.
    let placeholder = GridDimensions::PLACEHOLDER;
    let dims = GridDimensions::new(placeholder.width, placeholder.height)?;
    info!("LED grid: {}x{}", dims.width, dims.height);
    Ok(dims)
}

// ═══════════════════════════════════════════════════════════════
//  Default layout
// ═══════════════════════════════════════════════════════════════

use LedFlag::{
    DirectionEast as EAST, DirectionNorth as NORTH, DirectionSouth as SOUTH,
    DirectionWest as WEST, FunctionBattery as BAT, FunctionIndicator as IND,
    FunctionMode as MODE,
};

/// Stock frame layout. See the module docs for the cluster map.
pub const DEFAULT_LAYOUT: [LedConfig; LED_STRIP_LENGTH] = [
    LedConfig::new(9, 9, &[SOUTH, MODE, BAT]),
    LedConfig::new(10, 10, &[SOUTH, MODE, BAT]),
    LedConfig::new(11, 11, &[SOUTH, IND]),
    LedConfig::new(11, 11, &[EAST, IND]),
    LedConfig::new(10, 10, &[EAST, MODE]),
    LedConfig::new(9, 9, &[EAST, MODE]),
    //
    LedConfig::new(10, 5, &[SOUTH, MODE]),
    LedConfig::new(11, 4, &[SOUTH, MODE]),
    LedConfig::new(12, 3, &[SOUTH, IND]),
    LedConfig::new(12, 2, &[NORTH, IND]),
    LedConfig::new(11, 1, &[NORTH, MODE]),
    LedConfig::new(10, 0, &[NORTH, MODE]),
    //
    LedConfig::new(7, 0, &[NORTH, MODE, BAT]),
    LedConfig::new(6, 0, &[NORTH, MODE, BAT]),
    LedConfig::new(5, 0, &[NORTH, MODE, BAT]),
    LedConfig::new(4, 0, &[NORTH, MODE, BAT]),
    //
    LedConfig::new(2, 0, &[NORTH, MODE]),
    LedConfig::new(1, 1, &[NORTH, MODE]),
    LedConfig::new(0, 2, &[NORTH, IND]),
    LedConfig::new(0, 3, &[WEST, IND]),
    LedConfig::new(1, 4, &[WEST, MODE]),
    LedConfig::new(2, 5, &[WEST, MODE]),
    //
    LedConfig::new(2, 9, &[WEST, MODE]),
    LedConfig::new(1, 10, &[WEST, MODE]),
    LedConfig::new(0, 11, &[WEST, IND]),
    LedConfig::new(0, 11, &[SOUTH, IND]),
    LedConfig::new(1, 10, &[SOUTH, MODE, BAT]),
    LedConfig::new(2, 9, &[SOUTH, MODE, BAT]),
];
