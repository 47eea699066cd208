//! Application core — pure compositing logic, zero I/O.
//!
//! [`service::LedStripService`] glues the grid model, flash scheduler and
//! layer compositor into a single per-tick update. All interaction with
//! the flight controller and the strip happens through **port traits**
//! defined in [`ports`], keeping this layer testable without hardware.

pub mod ports;
pub mod service;
