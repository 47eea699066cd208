//! Mock hardware for integration tests.
//!
//! Records every strip call so tests can assert on the committed frames
//! without a real transmitter, and serves a fixed flight snapshot.

use ledstrip::palette::{BLACK, Rgb};
use ledstrip::{FlightPort, FlightSnapshot, StripPort};

// ── MockStrip ─────────────────────────────────────────────────

pub struct MockStrip<const N: usize> {
    pub ready: bool,
    pub staged: [Rgb; N],
    pub commits: Vec<[Rgb; N]>,
    pub set_calls: usize,
}

#[allow(dead_code)]
impl<const N: usize> MockStrip<N> {
    pub fn new() -> Self {
        Self {
            ready: true,
            staged: [BLACK; N],
            commits: Vec::new(),
            set_calls: 0,
        }
    }

    pub fn last_frame(&self) -> Option<&[Rgb; N]> {
        self.commits.last()
    }
}

impl<const N: usize> Default for MockStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StripPort for MockStrip<N> {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_colour(&mut self, index: usize, colour: Rgb) {
        self.set_calls += 1;
        self.staged[index] = colour;
    }

    fn commit(&mut self) {
        self.commits.push(self.staged);
    }
}

// ── MockFlight ────────────────────────────────────────────────

#[derive(Default)]
pub struct MockFlight {
    pub snapshot: FlightSnapshot,
}

#[allow(dead_code)]
impl MockFlight {
    pub fn centred() -> Self {
        Self::default()
    }

    pub fn sticks(roll: i16, pitch: i16) -> Self {
        Self {
            snapshot: FlightSnapshot {
                roll,
                pitch,
                ..FlightSnapshot::default()
            },
        }
    }

    pub fn battery_alarm(vbat_enabled: bool) -> Self {
        Self {
            snapshot: FlightSnapshot {
                vbat_enabled,
                battery_alarm: true,
                ..FlightSnapshot::default()
            },
        }
    }
}

impl FlightPort for MockFlight {
    fn read_flight(&self) -> FlightSnapshot {
        self.snapshot
    }
}
