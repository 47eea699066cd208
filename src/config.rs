//! LED strip configuration parameters
//!
//! Flash timing for the two scheduler channels. The stick deflection
//! threshold is part of the control-input scale and is not configurable.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flash::{BATTERY_FLASH_INTERVAL_US, INDICATOR_FLASH_INTERVAL_US};

/// Strip timing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedStripConfig {
    /// Battery alarm toggle interval (microseconds)
    pub battery_flash_interval_us: u32,
    /// Indicator toggle interval with sticks inside the threshold (microseconds)
    pub indicator_flash_interval_us: u32,
}

impl Default for LedStripConfig {
    fn default() -> Self {
        Self {
            battery_flash_interval_us: BATTERY_FLASH_INTERVAL_US, // 10 Hz
            indicator_flash_interval_us: INDICATOR_FLASH_INTERVAL_US, // 5 Hz
        }
    }
}

impl LedStripConfig {
    /// Reject zero intervals. Short indicator intervals are floored per
    /// tick by [`indicator_period`](crate::flash::indicator_period).
    pub fn validate(&self) -> Result<()> {
        if self.battery_flash_interval_us == 0 {
            return Err(Error::Config("battery flash interval must be non-zero"));
        }
        if self.indicator_flash_interval_us == 0 {
            return Err(Error::Config("indicator flash interval must be non-zero"));
        }
        Ok(())
    }
}
