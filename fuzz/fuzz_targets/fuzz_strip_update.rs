//! Fuzz target: `LedStripService::update`
//!
//! Drives arbitrary sequences of (clock, sticks, battery, readiness)
//! through the service and asserts that it never panics, only commits
//! full frames, and never writes past the strip.
//!
//! cargo fuzz run fuzz_strip_update

#![no_main]

use ledstrip::layout::LED_STRIP_LENGTH;
use ledstrip::palette::Rgb;
use ledstrip::{FlightPort, FlightSnapshot, LedStripConfig, LedStripService, StripPort, TickOutcome};
use libfuzzer_sys::fuzz_target;

struct Flight(FlightSnapshot);

impl FlightPort for Flight {
    fn read_flight(&self) -> FlightSnapshot {
        self.0
    }
}

struct CountingStrip {
    ready: bool,
    writes: usize,
    commits: usize,
}

impl StripPort for CountingStrip {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_colour(&mut self, index: usize, _colour: Rgb) {
        assert!(index < LED_STRIP_LENGTH, "slot {index} past end of strip");
        self.writes += 1;
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}

/// One tick is 10 bytes: now (4), roll (2), pitch (2), flags (1), pad (1).
const TICK_BYTES: usize = 10;

fuzz_target!(|data: &[u8]| {
    let Ok(mut svc) = LedStripService::with_default_layout(&LedStripConfig::default()) else {
        return;
    };
    let mut strip = CountingStrip {
        ready: true,
        writes: 0,
        commits: 0,
    };

    for tick in data.chunks_exact(TICK_BYTES) {
        let now = u32::from_le_bytes([tick[0], tick[1], tick[2], tick[3]]);
        let roll = i16::from_le_bytes([tick[4], tick[5]]);
        let pitch = i16::from_le_bytes([tick[6], tick[7]]);
        let flags = tick[8];

        strip.ready = flags & 0b001 != 0;
        let flight = Flight(FlightSnapshot {
            roll,
            pitch,
            vbat_enabled: flags & 0b010 != 0,
            battery_alarm: flags & 0b100 != 0,
        });

        let commits_before = strip.commits;
        match svc.update(now, &flight, &mut strip) {
            TickOutcome::Rendered(fired) => {
                assert!(fired.any());
                assert_eq!(strip.commits, commits_before + 1);
            }
            TickOutcome::Idle | TickOutcome::NotReady => {
                assert_eq!(strip.commits, commits_before);
            }
        }
    }

    assert_eq!(strip.writes, strip.commits * LED_STRIP_LENGTH);
    assert_eq!(svc.frame_count(), strip.commits as u64);
});
