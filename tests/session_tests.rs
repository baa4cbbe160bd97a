// Host-side tests for shrink, hold and dodge bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod session {
    include!("../src/core/session.rs");
}

use session::*;
use std::cell::Cell;
use std::rc::Rc;

// Stand-in for the browser interval: counts how often it was cancelled.
struct FakeTimer(Rc<Cell<u32>>);

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn repeated_shrink_converges_to_floor() {
    let mut scale = 1.0_f32;
    let mut prev = scale;
    for n in 1..=40 {
        scale = default_shrink_step(scale);
        let expected = 0.88_f32.powi(n).max(0.28);
        assert!(
            (scale - expected).abs() < 1e-5,
            "step {n}: got {scale}, expected {expected}"
        );
        assert!(scale <= prev);
        assert!(scale >= 0.28);
        prev = scale;
    }
    assert_eq!(scale, 0.28);
}

#[test]
fn shrink_step_never_exceeds_one() {
    assert_eq!(shrink_step(1.0, 1.5, 0.28), 1.0);
    assert_eq!(shrink_step(0.1, 0.5, 0.28), 0.28);
}

#[test]
fn shrink_is_throttled() {
    let mut s = InteractionSession::default();
    assert!(s.admit_shrink(1000.0, 60.0));
    assert!(!s.admit_shrink(1030.0, 60.0));
    assert!(s.admit_shrink(1060.0, 60.0));
    assert!(!s.admit_shrink(1100.0, 60.0));
    assert!(s.admit_shrink(1121.0, 60.0));
}

#[test]
fn first_shrink_is_always_admitted() {
    let mut s = InteractionSession::default();
    assert!(s.admit_shrink(0.0, 60.0));
}

#[test]
fn hold_start_then_many_stops_is_idempotent() {
    let cancelled = Rc::new(Cell::new(0));
    let mut hold: HoldState<FakeTimer> = HoldState::default();

    assert!(hold.start(|| Some(FakeTimer(cancelled.clone()))));
    assert!(hold.is_active());
    assert!(hold.has_timer());

    hold.stop();
    hold.stop();
    hold.stop();
    assert!(!hold.is_active());
    assert!(!hold.has_timer());
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn second_start_while_holding_keeps_one_timer() {
    let cancelled = Rc::new(Cell::new(0));
    let scheduled = Cell::new(0);
    let mut hold: HoldState<FakeTimer> = HoldState::default();

    let schedule = || {
        scheduled.set(scheduled.get() + 1);
        Some(FakeTimer(cancelled.clone()))
    };
    assert!(hold.start(schedule));
    assert!(!hold.start(|| {
        scheduled.set(scheduled.get() + 1);
        Some(FakeTimer(cancelled.clone()))
    }));
    assert_eq!(scheduled.get(), 1);
    assert_eq!(cancelled.get(), 0);

    hold.stop();
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn stop_without_start_is_harmless() {
    let mut hold: HoldState<FakeTimer> = HoldState::default();
    hold.stop();
    assert!(!hold.is_active());
    assert!(!hold.has_timer());
}

#[test]
fn hold_can_restart_after_stop() {
    let cancelled = Rc::new(Cell::new(0));
    let mut hold: HoldState<FakeTimer> = HoldState::default();
    assert!(hold.start(|| Some(FakeTimer(cancelled.clone()))));
    hold.stop();
    assert!(hold.start(|| Some(FakeTimer(cancelled.clone()))));
    assert!(hold.has_timer());
    hold.stop();
    assert_eq!(cancelled.get(), 2);
}

#[test]
fn hold_without_timer_still_tracks_active() {
    let mut hold: HoldState<FakeTimer> = HoldState::default();
    assert!(hold.start(|| None));
    assert!(hold.is_active());
    assert!(!hold.has_timer());
    hold.stop();
    assert!(!hold.is_active());
}

#[test]
fn dodge_requires_proximity_idle_and_cooldown() {
    let mut s = InteractionSession::default();
    assert!(!s.admit_dodge(0.0, 200.0, 140.0, false, 120.0));
    assert!(!s.admit_dodge(0.0, 50.0, 140.0, true, 120.0));
    assert!(s.admit_dodge(0.0, 50.0, 140.0, false, 120.0));
    assert!(!s.admit_dodge(100.0, 50.0, 140.0, false, 120.0));
    assert!(!s.admit_dodge(120.0, 50.0, 140.0, false, 120.0));
    assert!(s.admit_dodge(121.0, 50.0, 140.0, false, 120.0));
}

#[test]
fn rejected_dodges_do_not_reset_cooldown() {
    let mut s = InteractionSession::default();
    assert!(s.admit_dodge(0.0, 10.0, 140.0, false, 120.0));
    assert!(!s.admit_dodge(60.0, 10.0, 140.0, false, 120.0));
    assert!(s.admit_dodge(130.0, 10.0, 140.0, false, 120.0));
}

#[test]
fn avoider_allows_one_move_at_a_time() {
    let mut a = AvoiderState::default();
    assert_eq!(a.scale, 1.0);
    assert!(a.begin_move(10.0, 20.0));
    assert!(!a.begin_move(30.0, 40.0));
    assert_eq!((a.left, a.top), (10.0, 20.0));
    a.finish_move();
    assert!(!a.animating);
    assert!(a.begin_move(30.0, 40.0));
}

#[test]
fn dodge_mode_parses_attribute() {
    assert_eq!(DodgeMode::from_attr(None), DodgeMode::Shrink);
    assert_eq!(DodgeMode::from_attr(Some("")), DodgeMode::Shrink);
    assert_eq!(DodgeMode::from_attr(Some("shrink")), DodgeMode::Shrink);
    assert_eq!(DodgeMode::from_attr(Some("proximity")), DodgeMode::Proximity);
    assert_eq!(DodgeMode::from_attr(Some(" Proximity ")), DodgeMode::Proximity);
    assert_eq!(DodgeMode::from_attr(Some("bogus")), DodgeMode::Shrink);
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("a"));
    assert!(!is_activation_key("Escape"));
}

#[test]
fn shrink_with_floor_above_one_pins_to_floor() {
    assert_eq!(shrink_step(0.5, 0.88, 1.2), 1.2);
    assert_eq!(shrink_step(1.0, 1.5, 0.28), 1.0);
}
