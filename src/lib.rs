//! LED strip compositor for flight controller frames.
//!
//! Renders orientation, battery alarm and stick deflection onto an
//! addressable strip by stacking three layers, gated by a two-channel
//! flash scheduler. The host firmware calls
//! [`LedStripService::update`](app::service::LedStripService::update)
//! once per control-loop tick.
//!
//! ```text
//!  layout ─┐
//!  palette ┼─▶ compositor ─▶ app::service ─▶ adapters::strip ─▶ WS2812
//!  flash ──┘
//! ```
//!
//! The crate is `no_std` and allocation-free; tests run on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod compositor;
pub mod config;
pub mod error;
pub mod flash;
pub mod layout;
pub mod palette;

pub use app::ports::{FlightPort, FlightSnapshot, StripPort};
pub use app::service::{LedStripService, TickOutcome};
pub use config::LedStripConfig;
pub use error::{Error, Result};
