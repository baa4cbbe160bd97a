// Host-side tests for the interaction controller end to end.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod session {
    include!("../src/core/session.rs");
}
mod controller {
    include!("../src/core/controller.rs");
}

use controller::*;
use geometry::{overlaps_with_margin, Rect};
use glam::Vec2;
use session::DodgeMode;

fn proximity() -> Controller {
    Controller::new(
        InteractionConfig {
            mode: DodgeMode::Proximity,
            ..InteractionConfig::default()
        },
        9,
    )
}

const CONTAINER: Rect = Rect::new(0.0, 0.0, 800.0, 400.0);
const AVOIDER: Rect = Rect::new(300.0, 180.0, 80.0, 40.0);
const CONFIRM: Rect = Rect::new(0.0, 0.0, 120.0, 50.0);

#[test]
fn defaults_match_tuning() {
    let cfg = InteractionConfig::default();
    assert_eq!(cfg.mode, DodgeMode::Shrink);
    assert_eq!(cfg.shrink_factor, 0.88);
    assert_eq!(cfg.min_scale, 0.28);
    assert_eq!(cfg.shrink_throttle_ms, 60.0);
    assert_eq!(cfg.dodge_radius, 140.0);
    assert_eq!(cfg.relocate_duration_ms, 360);
}

#[test]
fn confirmation_is_one_shot() {
    let mut c = Controller::new(InteractionConfig::default(), 1);
    assert!(!c.is_confirmed());

    let first = c.confirm(Vec2::new(100.0, 100.0)).expect("first activation");
    assert_eq!(first.label, CONFIRMED_LABEL);
    assert_eq!(first.burst_at, Vec2::new(100.0, 100.0));
    assert!(c.is_confirmed());
    assert_eq!(c.particles.len(), 20);

    assert_eq!(c.confirm(Vec2::new(5.0, 5.0)), None);
    assert!(c.is_confirmed());
    assert_eq!(c.particles.len(), 20);
}

#[test]
fn burst_decays_after_confirmation() {
    let mut c = Controller::new(InteractionConfig::default(), 2);
    c.confirm(Vec2::new(100.0, 100.0));
    for _ in 0..200 {
        c.particles.step(10_000.0, |_| {});
    }
    assert!(c.particles.is_empty());
}

#[test]
fn presses_shrink_with_throttle() {
    let mut c = Controller::new(InteractionConfig::default(), 3);
    assert_eq!(c.shrink_avoider(0.0), Some(0.88));
    assert_eq!(c.shrink_avoider(20.0), None);
    assert_eq!(c.avoider.scale, 0.88);
    let second = c.shrink_avoider(80.0).expect("throttle elapsed");
    assert!((second - 0.88 * 0.88).abs() < 1e-6);
}

#[test]
fn hold_ticks_reach_the_floor() {
    let mut c = Controller::new(InteractionConfig::default(), 4);
    let mut now = 0.0;
    for _ in 0..30 {
        c.shrink_avoider(now);
        now += 140.0;
    }
    assert_eq!(c.avoider.scale, 0.28);
}

#[test]
fn shrink_mode_never_dodges() {
    let mut c = Controller::new(InteractionConfig::default(), 5);
    let target = c.dodge_target(0.0, AVOIDER.center(), &CONTAINER, &AVOIDER, &CONFIRM);
    assert_eq!(target, None);
}

#[test]
fn proximity_mode_dodges_nearby_pointer_with_cooldown() {
    let mut c = proximity();
    let pointer = Vec2::new(320.0, 200.0);

    let target = c
        .dodge_target(1000.0, pointer, &CONTAINER, &AVOIDER, &CONFIRM)
        .expect("pointer is close");
    assert!(target.x > AVOIDER.left, "should move right, got {target:?}");

    assert_eq!(
        c.dodge_target(1050.0, pointer, &CONTAINER, &AVOIDER, &CONFIRM),
        None
    );
    assert!(c
        .dodge_target(1200.0, pointer, &CONTAINER, &AVOIDER, &CONFIRM)
        .is_some());
}

#[test]
fn proximity_mode_ignores_far_pointer_and_busy_avoider() {
    let mut c = proximity();
    let far = Vec2::new(790.0, 390.0);
    assert_eq!(c.dodge_target(0.0, far, &CONTAINER, &AVOIDER, &CONFIRM), None);

    assert!(c.avoider.begin_move(0.0, 0.0));
    let near = AVOIDER.center();
    assert_eq!(c.dodge_target(0.0, near, &CONTAINER, &AVOIDER, &CONFIRM), None);
    c.avoider.finish_move();
    assert!(c.dodge_target(0.0, near, &CONTAINER, &AVOIDER, &CONFIRM).is_some());
}

#[test]
fn relocation_keeps_clear_of_confirmation() {
    let mut c = proximity();
    let target = c.relocation_target(&CONTAINER, &AVOIDER, &CONFIRM);
    let landed = Rect::from_origin_size(CONTAINER.origin() + target, AVOIDER.size());
    assert!(!overlaps_with_margin(&landed, &CONFIRM, c.config.layout.margin));
}
