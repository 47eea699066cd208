//! Strip service — the per-tick orchestrator.
//!
//! [`LedStripService`] owns the LED layout, the flash scheduler and the
//! render buffer. It exposes one hardware-agnostic call, [`update`],
//! which the flight controller runs inline from its control loop.
//!
//! ```text
//!  FlightPort ──▶ ┌─────────────────────────────┐ ──▶ StripPort
//!                 │       LedStripService        │
//!                 │  FlashScheduler · Compositor │
//!                 └─────────────────────────────┘
//! ```
//!
//! [`update`]: LedStripService::update

use log::{info, trace};

use crate::compositor::{
    Compositor, INDICATOR_MAX_INDEX, LayerInputs, OrientationBoundaries, battery_layer_active,
};
use crate::config::LedStripConfig;
use crate::error::{LayoutError, Result};
use crate::flash::{FlashFire, FlashScheduler};
use crate::layout::{GridDimensions, LED_STRIP_LENGTH, LedFlag, LedLayout, determine_dimensions};
use crate::palette::{BLACK, ORIENTATION_COLOURS, Rgb};

use super::ports::{FlightPort, StripPort};

/// What a call to [`LedStripService::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The strip was busy; nothing was read or changed.
    NotReady,
    /// No flash channel was due; the previous frame stays on the strip.
    Idle,
    /// A new frame was composed and committed.
    Rendered(FlashFire),
}

// ───────────────────────────────────────────────────────────────
// LedStripService
// ───────────────────────────────────────────────────────────────

/// Composes and transmits strip frames. `N` is the strip length.
pub struct LedStripService<const N: usize> {
    layout: LedLayout<N>,
    dimensions: GridDimensions,
    compositor: Compositor,
    flash: FlashScheduler,
    frame: [Rgb; N],
    frame_count: u64,
}

impl<const N: usize> LedStripService<N> {
    /// Construct the service for `layout`.
    ///
    /// Grid dimensions are determined here, once, and never recomputed.
    pub fn new(layout: LedLayout<N>, config: &LedStripConfig) -> Result<Self> {
        config.validate()?;

        if N <= INDICATOR_MAX_INDEX {
            return Err(LayoutError::StripTooShort {
                len: N,
                required: INDICATOR_MAX_INDEX + 1,
            }
            .into());
        }

        let dimensions = determine_dimensions(&layout)?;
        let bounds = OrientationBoundaries::for_height(dimensions.height());

        info!(
            "LedStrip: {} LEDs ({} mode, {} indicator, {} battery), north<{} south>={}",
            N,
            layout.count_with(LedFlag::FunctionMode),
            layout.count_with(LedFlag::FunctionIndicator),
            layout.count_with(LedFlag::FunctionBattery),
            bounds.north,
            bounds.south,
        );

        Ok(Self {
            layout,
            dimensions,
            compositor: Compositor::new(bounds, ORIENTATION_COLOURS),
            flash: FlashScheduler::new(config),
            frame: [BLACK; N],
            frame_count: 0,
        })
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one strip update at time `now_us` (wrapping microsecond clock).
    ///
    /// 1. Skip entirely if the strip is not ready.
    /// 2. Fire due flash channels; stop if none fired.
    /// 3. Orientation layer → battery layer → indicator layer.
    /// 4. Hand the frame to the strip and commit.
    pub fn update(
        &mut self,
        now_us: u32,
        flight: &impl FlightPort,
        strip: &mut impl StripPort,
    ) -> TickOutcome {
        if !strip.is_ready() {
            trace!("LedStrip: strip busy, tick skipped");
            return TickOutcome::NotReady;
        }

        let snapshot = flight.read_flight();
        let fired = self.flash.poll(now_us, snapshot.roll, snapshot.pitch);
        if !fired.any() {
            return TickOutcome::Idle;
        }

        let inputs = LayerInputs {
            roll: snapshot.roll,
            pitch: snapshot.pitch,
            battery_blank: battery_layer_active(
                snapshot.vbat_enabled,
                snapshot.battery_alarm,
                self.flash.battery().is_on(),
            ),
            indicator_on: self.flash.indicator().is_on(),
        };
        self.compositor
            .render(&mut self.frame, &self.layout, &inputs);

        for (index, colour) in self.frame.iter().enumerate() {
            strip.set_colour(index, *colour);
        }
        strip.commit();
        self.frame_count += 1;

        TickOutcome::Rendered(fired)
    }

    // ── Queries ───────────────────────────────────────────────

    /// The most recently composed frame.
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn layout(&self) -> &LedLayout<N> {
        &self.layout
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn boundaries(&self) -> OrientationBoundaries {
        self.compositor.bounds()
    }

    pub fn flash(&self) -> &FlashScheduler {
        &self.flash
    }

    /// Frames committed since startup.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl LedStripService<LED_STRIP_LENGTH> {
    /// Service for the stock 28-LED frame.
    pub fn with_default_layout(config: &LedStripConfig) -> Result<Self> {
        Self::new(LedLayout::stock()?, config)
    }
}
