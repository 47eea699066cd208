//! Strip adapter — bridges any `smart-leds` writer to [`StripPort`].
//!
//! The adapter keeps its own frame so `set_colour` calls only stage
//! colours; `commit` streams the whole frame to the writer. A failed
//! write is logged and counted, never retried: the next rendered tick
//! repaints the full strip anyway.
//!
//! Platforms whose writer transmits asynchronously (RMT/DMA) clear the
//! ready gate with [`SmartLedsStrip::set_ready`] while a transfer is in
//! flight, which makes the service skip those ticks.

use core::fmt::Debug;

use log::warn;
use smart_leds::SmartLedsWrite;

use crate::app::ports::StripPort;
use crate::palette::{BLACK, Rgb};

/// Concrete adapter over a `smart_leds::SmartLedsWrite` implementation.
pub struct SmartLedsStrip<W, const N: usize> {
    writer: W,
    frame: [Rgb; N],
    ready: bool,
    write_errors: u32,
}

impl<W, const N: usize> SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [BLACK; N],
            ready: true,
            write_errors: 0,
        }
    }

    /// Open or close the ready gate.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Number of commits the writer rejected.
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Staged frame.
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> StripPort for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_colour(&mut self, index: usize, colour: Rgb) {
        if let Some(slot) = self.frame.get_mut(index) {
            *slot = colour;
        }
    }

    fn commit(&mut self) {
        if let Err(e) = self.writer.write(self.frame.iter().copied()) {
            self.write_errors = self.write_errors.saturating_add(1);
            warn!("LedStrip: write failed ({:?}), {} total", e, self.write_errors);
        }
    }
}
