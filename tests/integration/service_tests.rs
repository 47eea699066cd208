//! Integration tests: LedStripService → compositor → StripPort.

use ledstrip::flash::FlashFire;
use ledstrip::layout::LED_STRIP_LENGTH;
use ledstrip::palette::{BLACK, ORANGE, RED, Rgb, WHITE};
use ledstrip::{LedStripConfig, LedStripService, TickOutcome};

use crate::mock_hw::{MockFlight, MockStrip};

type Frame = [Rgb; LED_STRIP_LENGTH];

const BOTH: TickOutcome = TickOutcome::Rendered(FlashFire {
    battery: true,
    indicator: true,
});
const BATTERY_ONLY: TickOutcome = TickOutcome::Rendered(FlashFire {
    battery: true,
    indicator: false,
});

fn service() -> LedStripService<LED_STRIP_LENGTH> {
    LedStripService::with_default_layout(&LedStripConfig::default()).unwrap()
}

/// Stock layout on a 12-row grid: rear mode LEDs red, front mode LEDs white.
fn orientation_frame() -> Frame {
    let mut frame = [BLACK; LED_STRIP_LENGTH];
    for i in [0, 1, 26, 27] {
        frame[i] = RED;
    }
    for slot in &mut frame[10..=17] {
        *slot = WHITE;
    }
    frame
}

// ── Orientation ───────────────────────────────────────────────

#[test]
fn first_tick_renders_orientation_frame() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();

    assert_eq!(svc.update(1_000, &MockFlight::centred(), &mut strip), BOTH);
    assert_eq!(strip.commits.len(), 1);
    assert_eq!(strip.set_calls, LED_STRIP_LENGTH);
    assert_eq!(strip.last_frame(), Some(&orientation_frame()));
    assert_eq!(svc.frame(), &orientation_frame());
    assert_eq!(svc.frame_count(), 1);
}

#[test]
fn tick_between_deadlines_is_idle() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::centred();

    svc.update(1_000, &flight, &mut strip);
    assert_eq!(svc.update(50_000, &flight, &mut strip), TickOutcome::Idle);
    assert_eq!(svc.update(100_999, &flight, &mut strip), TickOutcome::Idle);
    assert_eq!(strip.commits.len(), 1);
    assert_eq!(svc.frame_count(), 1);
}

#[test]
fn busy_strip_defers_until_ready() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::centred();

    strip.ready = false;
    assert_eq!(svc.update(0, &flight, &mut strip), TickOutcome::NotReady);
    assert!(strip.commits.is_empty());
    assert_eq!(strip.set_calls, 0);

    strip.ready = true;
    assert_eq!(svc.update(10, &flight, &mut strip), BOTH);
    assert_eq!(strip.commits.len(), 1);
}

// ── Battery layer ─────────────────────────────────────────────

#[test]
fn battery_alarm_flashes_whole_strip_black() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::battery_alarm(true);

    svc.update(0, &flight, &mut strip);
    svc.update(100_000, &flight, &mut strip);
    svc.update(200_000, &flight, &mut strip);

    assert_eq!(strip.commits.len(), 3);
    assert_eq!(strip.commits[0], [BLACK; LED_STRIP_LENGTH]);
    assert_eq!(strip.commits[1], orientation_frame());
    assert_eq!(strip.commits[2], [BLACK; LED_STRIP_LENGTH]);
}

#[test]
fn battery_alarm_ignored_without_vbat_feature() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();

    svc.update(0, &MockFlight::battery_alarm(false), &mut strip);
    assert_eq!(strip.last_frame(), Some(&orientation_frame()));
}

// ── Indicator layer ───────────────────────────────────────────

#[test]
fn roll_left_indicator_alternates_black_and_orange() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::sticks(-60, 0);

    // Indicator flash state goes on at the first fire: flash colour black.
    assert_eq!(svc.update(0, &flight, &mut strip), BOTH);
    // Battery only; indicator period stays 200ms at scale 1.
    assert_eq!(svc.update(100_000, &flight, &mut strip), BATTERY_ONLY);
    assert_eq!(svc.update(200_000, &flight, &mut strip), BOTH);

    let mut dark = orientation_frame();
    dark[0] = BLACK;
    dark[9] = BLACK;
    assert_eq!(strip.commits[0], dark);
    assert_eq!(strip.commits[1], dark);

    let mut lit = orientation_frame();
    lit[0] = ORANGE;
    lit[9] = ORANGE;
    assert_eq!(strip.commits[2], lit);
}

#[test]
fn roll_left_and_pitch_forward_overlap_on_slot_zero() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::sticks(-60, 60);

    svc.update(0, &flight, &mut strip);
    svc.update(200_000, &flight, &mut strip);

    let frame = strip.last_frame().unwrap();
    assert_eq!(frame[0], ORANGE);
    assert_eq!(frame[4], ORANGE);
    assert_eq!(frame[9], ORANGE);
    assert_eq!(frame[5], orientation_frame()[5]);
    assert_eq!(frame[1], RED);
}

#[test]
fn hard_deflection_doubles_indicator_rate() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::sticks(100, 0);

    svc.update(0, &flight, &mut strip);
    assert_eq!(svc.flash().indicator().next_fire_at(), 100_000);
    assert_eq!(svc.update(100_000, &flight, &mut strip), BOTH);

    let frame = strip.last_frame().unwrap();
    assert_eq!(frame[4], ORANGE);
    assert_eq!(frame[5], ORANGE);
}

#[test]
fn small_deflection_keeps_base_rate() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::sticks(20, 30);

    svc.update(0, &flight, &mut strip);
    assert_eq!(svc.update(100_000, &flight, &mut strip), BATTERY_ONLY);
    assert_eq!(strip.last_frame(), Some(&orientation_frame()));
}

// ── Clock wrap ────────────────────────────────────────────────

#[test]
fn flashes_continue_across_clock_wrap() {
    let mut svc = service();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::centred();

    assert_eq!(svc.update(2_000_000_000, &flight, &mut strip), BOTH);
    assert_eq!(svc.update(4_000_000_000, &flight, &mut strip), BOTH);
    assert_eq!(svc.update(4_294_900_000, &flight, &mut strip), BOTH);
    assert_eq!(svc.flash().battery().next_fire_at(), 32_704);

    // Counter wrapped: 20ms after the last fire is still early.
    assert_eq!(svc.update(20_000, &flight, &mut strip), TickOutcome::Idle);
    assert_eq!(svc.update(40_000, &flight, &mut strip), BATTERY_ONLY);
}

#[test]
fn short_indicator_interval_renders_once_per_instant() {
    let config = LedStripConfig {
        indicator_flash_interval_us: 1,
        ..LedStripConfig::default()
    };
    let mut svc = LedStripService::with_default_layout(&config).unwrap();
    let mut strip = MockStrip::<LED_STRIP_LENGTH>::new();
    let flight = MockFlight::sticks(500, 0);

    let rendered = (0..5)
        .filter(|_| matches!(svc.update(1_000, &flight, &mut strip), TickOutcome::Rendered(_)))
        .count();
    assert_eq!(rendered, 1);
    assert_eq!(strip.commits.len(), 1);

    assert!(matches!(
        svc.update(1_001, &flight, &mut strip),
        TickOutcome::Rendered(FlashFire { indicator: true, .. })
    ));
}
