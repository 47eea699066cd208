//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter | Implements | Connects to                         |
//! |---------|------------|-------------------------------------|
//! | `strip` | StripPort  | any `smart_leds::SmartLedsWrite`    |
//!
//! The flight side ([`FlightPort`](crate::app::ports::FlightPort)) is
//! implemented by the host firmware, which owns the receiver and the
//! battery monitor.

pub mod strip;
