// Host-side tests for the fade-in ramp and playback outcome handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod playback {
    include!("../src/core/playback.rs");
}

use playback::*;

#[test]
fn fade_reaches_target_in_fixed_steps() {
    let steps: Vec<f64> = FadeIn::new(0.12).collect();
    assert_eq!(steps.len(), 6);
    let expected = [0.02, 0.04, 0.06, 0.08, 0.1, 0.12];
    for (got, want) in steps.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn fade_is_monotonic_and_bounded() {
    let mut ramp = FadeIn::new(0.28);
    assert_eq!(ramp.volume(), 0.0);
    let mut prev = 0.0;
    let mut count = 0;
    for v in ramp.by_ref() {
        assert!(v > prev);
        assert!(v <= 0.28);
        prev = v;
        count += 1;
    }
    assert_eq!(count, 14);
    assert!(ramp.is_done());
    assert_eq!(ramp.next(), None);
}

#[test]
fn fade_clamps_last_step_to_target() {
    let steps: Vec<f64> = FadeIn::new(0.13).collect();
    assert_eq!(steps.len(), 7);
    assert_eq!(*steps.last().unwrap(), 0.13);
}

#[test]
fn silent_target_needs_no_ticks() {
    assert_eq!(FadeIn::new(0.0).count(), 0);
}

#[test]
fn custom_step_size() {
    let steps: Vec<f64> = FadeIn::with_step(0.5, 0.25).collect();
    assert_eq!(steps, vec![0.25, 0.5]);
}

#[test]
fn dom_errors_are_classified() {
    assert_eq!(
        PlaybackError::from_dom("NotAllowedError", "x".into()),
        PlaybackError::Blocked("x".into())
    );
    assert_eq!(
        PlaybackError::from_dom("NotSupportedError", "y".into()),
        PlaybackError::Unsupported("y".into())
    );
    assert_eq!(
        PlaybackError::from_dom("AbortError", "z".into()),
        PlaybackError::Failed("z".into())
    );
    assert_eq!(
        PlaybackError::from_dom("", "w".into()),
        PlaybackError::Failed("w".into())
    );
}

#[test]
fn autoplay_notices() {
    assert_eq!(autoplay_notice(&Ok(())), None);
    assert_eq!(
        autoplay_notice(&Err(PlaybackError::Blocked("no gesture".into()))),
        Some(NOTICE_AUTOPLAY_BLOCKED)
    );
    assert_eq!(
        autoplay_notice(&Err(PlaybackError::Unsupported("404".into()))),
        None
    );
    assert_eq!(autoplay_notice(&Err(PlaybackError::Unavailable)), None);
}

#[test]
fn confirm_notices() {
    assert_eq!(confirm_notice(&Ok(())), NOTICE_MUSIC_ON);
    assert_eq!(
        confirm_notice(&Err(PlaybackError::Blocked("x".into()))),
        NOTICE_PLAY_FAILED
    );
    assert_eq!(
        confirm_notice(&Err(PlaybackError::Unavailable)),
        NOTICE_NO_TRACK
    );
}

#[test]
fn errors_display_their_cause() {
    let msg = PlaybackError::Blocked("NotAllowedError".into()).to_string();
    assert!(msg.contains("user gesture"));
    assert!(msg.contains("NotAllowedError"));
}
