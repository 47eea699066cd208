//! Time-gated flash scheduler.
//!
//! Two independent channels toggle a boolean flash state when their
//! deadline passes:
//!
//! | Channel   | Period                                  |
//! |-----------|-----------------------------------------|
//! | Battery   | 100 ms (10 Hz toggle, 5 Hz on/off)      |
//! | Indicator | 200 ms / max(1, stick scale)            |
//!
//! Time is a `u32` microsecond counter that wraps roughly every 71
//! minutes. Deadlines are compared through the signed difference
//! `now - deadline`, so a deadline scheduled just before the wrap still
//! fires just after it.

use log::debug;

use crate::compositor::STICK_DEFLECTION_THRESHOLD;
use crate::config::LedStripConfig;

/// 10 Hz in microseconds.
pub const BATTERY_FLASH_INTERVAL_US: u32 = 1_000_000 / 10;
/// 5 Hz in microseconds.
pub const INDICATOR_FLASH_INTERVAL_US: u32 = 1_000_000 / 5;

/// True once `now` has reached or passed `deadline`, across counter wrap.
pub const fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// How many multiples of the deflection threshold the larger stick axis
/// is pushed. Zero inside the threshold.
pub fn stick_scale(roll: i16, pitch: i16) -> u32 {
    let threshold = STICK_DEFLECTION_THRESHOLD.unsigned_abs();
    let roll_scale = roll.unsigned_abs() / threshold;
    let pitch_scale = pitch.unsigned_abs() / threshold;
    u32::from(roll_scale.max(pitch_scale))
}

/// Indicator period for the current stick deflection: harder deflection
/// flashes faster, never slower than `base_us`.
///
/// Floored at 1us so a short base period cannot reschedule the channel
/// at `now` and fire it again on the same tick.
pub fn indicator_period(base_us: u32, roll: i16, pitch: i16) -> u32 {
    (base_us / stick_scale(roll, pitch).max(1)).max(1)
}

// ═══════════════════════════════════════════════════════════════
//  Channel
// ═══════════════════════════════════════════════════════════════

/// Deadline and flash state of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashChannel {
    next_fire_at: u32,
    on: bool,
}

impl FlashChannel {
    /// Due at time zero, flash state off.
    pub const fn new() -> Self {
        Self {
            next_fire_at: 0,
            on: false,
        }
    }

    pub const fn is_due(&self, now: u32) -> bool {
        deadline_reached(now, self.next_fire_at)
    }

    /// Toggle the flash state and schedule the next fire `period_us` after `now`.
    pub fn fire(&mut self, now: u32, period_us: u32) {
        self.on = !self.on;
        self.next_fire_at = now.wrapping_add(period_us);
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }

    pub const fn next_fire_at(&self) -> u32 {
        self.next_fire_at
    }
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler
// ═══════════════════════════════════════════════════════════════

/// Which channels fired during one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashFire {
    pub battery: bool,
    pub indicator: bool,
}

impl FlashFire {
    pub const fn any(&self) -> bool {
        self.battery || self.indicator
    }
}

/// Battery and indicator flash channels.
#[derive(Debug, Clone)]
pub struct FlashScheduler {
    battery: FlashChannel,
    indicator: FlashChannel,
    battery_interval_us: u32,
    indicator_interval_us: u32,
}

impl FlashScheduler {
    pub fn new(config: &LedStripConfig) -> Self {
        Self {
            battery: FlashChannel::new(),
            indicator: FlashChannel::new(),
            battery_interval_us: config.battery_flash_interval_us,
            indicator_interval_us: config.indicator_flash_interval_us,
        }
    }

    /// Check both deadlines against `now` and fire the ones that are due.
    ///
    /// Both channels are evaluated before either is rescheduled. The
    /// indicator's next period is derived from the current stick position.
    pub fn poll(&mut self, now: u32, roll: i16, pitch: i16) -> FlashFire {
        let fired = FlashFire {
            battery: self.battery.is_due(now),
            indicator: self.indicator.is_due(now),
        };

        if fired.battery {
            self.battery.fire(now, self.battery_interval_us);
            debug!(
                "Flash: battery -> {} (next at {}us)",
                self.battery.is_on(),
                self.battery.next_fire_at()
            );
        }

        if fired.indicator {
            let period = indicator_period(self.indicator_interval_us, roll, pitch);
            self.indicator.fire(now, period);
            debug!(
                "Flash: indicator -> {} (period {}us)",
                self.indicator.is_on(),
                period
            );
        }

        fired
    }

    pub fn battery(&self) -> &FlashChannel {
        &self.battery
    }

    pub fn indicator(&self) -> &FlashChannel {
        &self.indicator
    }
}
