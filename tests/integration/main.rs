//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the strip service
//! against mock adapters. All tests run on the host with no real strip.

mod mock_hw;
mod service_tests;
