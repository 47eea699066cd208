//! Layer compositing engine.
//!
//! A frame is built by running three passes over the render buffer, each
//! one either writing a slot or leaving the previous pass's colour:
//!
//! 1. **Mode / orientation** — every slot. Mode LEDs in the front rows
//!    facing north get the north colour, mode LEDs in the rear rows facing
//!    south get the south colour, everything else is black.
//! 2. **Battery alarm** — blanks the whole strip while the battery flash
//!    is in its on phase and the alarm is raised.
//! 3. **Stick indicators** — up to four fixed slots flash orange in the
//!    direction the sticks are deflected.

use crate::layout::{LedConfig, LedFlag, LedLayout};
use crate::palette::{BLACK, Direction, ORANGE, OrientationColours, Rgb};

/// Stick deflection (either sign) beyond which indicators light up and
/// the indicator flash rate scales.
pub const STICK_DEFLECTION_THRESHOLD: i16 = 50;

/// Highest strip index written by the indicator layer.
pub const INDICATOR_MAX_INDEX: usize = 9;

// ═══════════════════════════════════════════════════════════════
//  Pass 1 — mode / orientation
// ═══════════════════════════════════════════════════════════════

/// Row boundaries splitting the grid into north and south halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationBoundaries {
    /// Mode LEDs facing north light up when `y < north`.
    pub north: u8,
    /// Mode LEDs facing south light up when `y >= south`.
    pub south: u8,
}

impl OrientationBoundaries {
    /// Compute the boundaries for a grid `height` rows tall (`height >= 2`).
    pub fn for_height(height: u8) -> Self {
        debug_assert!(height >= 2, "grid height must be at least 2");
        let mid = (height / 2).saturating_sub(1);

        let north = mid & !1;
        let south = if mid & 1 == 1 {
            (mid + 1).min(height.saturating_sub(1))
        } else {
            mid
        };

        Self { north, south }
    }

    pub const fn is_north(&self, y: u8) -> bool {
        y < self.north
    }

    pub const fn is_south(&self, y: u8) -> bool {
        y >= self.south
    }
}

/// Colour pass 1 assigns to a single LED.
///
/// Only north and south have a rule; LEDs facing east, west, up or down
/// fall through to black even though the table has colours for them.
pub fn mode_colour(
    led: &LedConfig,
    bounds: &OrientationBoundaries,
    colours: &OrientationColours,
) -> Rgb {
    if !led.has(LedFlag::FunctionMode) {
        return BLACK;
    }

    let y = led.position.y();
    if led.flags.has_direction(Direction::North) && bounds.is_north(y) {
        return colours.get(Direction::North);
    }
    if led.flags.has_direction(Direction::South) && bounds.is_south(y) {
        return colours.get(Direction::South);
    }

    BLACK
}

/// Write every slot of `frame` from the orientation layer.
pub fn apply_mode_layer<const N: usize>(
    frame: &mut [Rgb; N],
    layout: &LedLayout<N>,
    bounds: &OrientationBoundaries,
    colours: &OrientationColours,
) {
    for (slot, led) in frame.iter_mut().zip(layout.iter()) {
        *slot = mode_colour(led, bounds, colours);
    }
}

// ═══════════════════════════════════════════════════════════════
//  Pass 2 — battery alarm
// ═══════════════════════════════════════════════════════════════

/// Whether the battery kill-flash blanks the strip this tick.
pub const fn battery_layer_active(vbat_enabled: bool, alarm: bool, flash_on: bool) -> bool {
    flash_on && vbat_enabled && alarm
}

/// Blank the whole strip. Applies to every slot, not only LEDs flagged
/// [`LedFlag::FunctionBattery`].
pub fn apply_battery_layer(frame: &mut [Rgb]) {
    frame.fill(BLACK);
}

// ═══════════════════════════════════════════════════════════════
//  Pass 3 — stick indicators
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deflection {
    RollNegative,
    RollPositive,
    PitchPositive,
    PitchNegative,
}

impl Deflection {
    const fn active(self, roll: i16, pitch: i16) -> bool {
        match self {
            Self::RollNegative => roll < -STICK_DEFLECTION_THRESHOLD,
            Self::RollPositive => roll > STICK_DEFLECTION_THRESHOLD,
            Self::PitchPositive => pitch > STICK_DEFLECTION_THRESHOLD,
            Self::PitchNegative => pitch < -STICK_DEFLECTION_THRESHOLD,
        }
    }
}

/// Indicator slots per deflection, in evaluation order. Later entries win
/// when two deflections share a slot.
const INDICATOR_SLOTS: [(Deflection, [usize; 2]); 4] = [
    (Deflection::RollNegative, [0, 9]),
    (Deflection::RollPositive, [4, 5]),
    (Deflection::PitchPositive, [0, 4]),
    (Deflection::PitchNegative, [5, 9]),
];

/// Indicator colour for the current flash phase: orange while the flash
/// state is off, black while it is on.
pub const fn indicator_colour(flash_on: bool) -> Rgb {
    if flash_on { BLACK } else { ORANGE }
}

/// Override the indicator slots for every active deflection.
/// `frame` must hold more than [`INDICATOR_MAX_INDEX`] slots.
pub fn apply_indicator_layer(frame: &mut [Rgb], roll: i16, pitch: i16, flash_on: bool) {
    let colour = indicator_colour(flash_on);
    for (deflection, slots) in INDICATOR_SLOTS {
        if deflection.active(roll, pitch) {
            for index in slots {
                frame[index] = colour;
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Full frame
// ═══════════════════════════════════════════════════════════════

/// Per-tick inputs to the override layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerInputs {
    pub roll: i16,
    pub pitch: i16,
    /// Battery kill-flash is active (see [`battery_layer_active`]).
    pub battery_blank: bool,
    /// Indicator flash state.
    pub indicator_on: bool,
}

/// Runs the three passes in order against a fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    bounds: OrientationBoundaries,
    colours: OrientationColours,
}

impl Compositor {
    pub fn new(bounds: OrientationBoundaries, colours: OrientationColours) -> Self {
        Self { bounds, colours }
    }

    pub fn bounds(&self) -> OrientationBoundaries {
        self.bounds
    }

    pub fn render<const N: usize>(
        &self,
        frame: &mut [Rgb; N],
        layout: &LedLayout<N>,
        inputs: &LayerInputs,
    ) {
        apply_mode_layer(frame, layout, &self.bounds, &self.colours);

        if inputs.battery_blank {
            apply_battery_layer(frame);
        }

        apply_indicator_layer(frame, inputs.roll, inputs.pitch, inputs.indicator_on);
    }
}
