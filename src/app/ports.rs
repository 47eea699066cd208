//! Port traits — the boundary between the compositor and the rest of the
//! flight controller.
//!
//! ```text
//!   FlightPort ──▶ LedStripService ──▶ StripPort
//! ```
//!
//! The flight side (stick commands, battery alarm, feature flags) and the
//! strip transmitter are both external. The
//! [`LedStripService`](super::service::LedStripService) consumes them via
//! generics, so the compositor never touches hardware directly.

use crate::palette::Rgb;

// ───────────────────────────────────────────────────────────────
// Flight port (driven adapter: flight controller → compositor)
// ───────────────────────────────────────────────────────────────

/// Flight state the layers depend on, sampled once per rendered tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightSnapshot {
    /// Roll stick command, same scale as the ±50 indicator threshold.
    pub roll: i16,
    /// Pitch stick command.
    pub pitch: i16,
    /// Battery voltage sensing feature is enabled.
    pub vbat_enabled: bool,
    /// The battery monitor wants the alarm raised.
    pub battery_alarm: bool,
}

/// Read-side port: the service calls this to obtain flight inputs.
pub trait FlightPort {
    fn read_flight(&self) -> FlightSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Strip port (driven adapter: compositor → LED transmitter)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the addressable strip.
pub trait StripPort {
    /// Whether a new frame can be transmitted now. When false the whole
    /// tick is skipped and retried on the next control-loop iteration.
    fn is_ready(&self) -> bool;

    /// Stage the colour of one slot.
    fn set_colour(&mut self, index: usize, colour: Rgb);

    /// Transmit the staged frame.
    fn commit(&mut self);
}
