use super::constants::FADE_STEP;
use thiserror::Error;

pub const NOTICE_AUTOPLAY_BLOCKED: &str = "Autoplay blocked by the browser, tap Yes";
pub const NOTICE_LOAD_FAILED: &str = "Could not load audio (see console)";
pub const NOTICE_MUSIC_ON: &str = "Music on";
pub const NOTICE_PLAY_FAILED: &str = "Could not play music (see console)";
pub const NOTICE_NO_TRACK: &str = "Music file not found";

/// Why the background track did not start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("playback blocked until a user gesture: {0}")]
    Blocked(String),
    #[error("audio source not supported or missing: {0}")]
    Unsupported(String),
    #[error("playback failed: {0}")]
    Failed(String),
    #[error("no background track")]
    Unavailable,
}

impl PlaybackError {
    /// Classify a rejected `play()` by its `DOMException` name.
    pub fn from_dom(name: &str, message: String) -> Self {
        match name {
            "NotAllowedError" => PlaybackError::Blocked(message),
            "NotSupportedError" => PlaybackError::Unsupported(message),
            _ => PlaybackError::Failed(message),
        }
    }
}

/// Toast text after the on-load autoplay attempt; `None` when nothing needs saying.
pub fn autoplay_notice(outcome: &Result<(), PlaybackError>) -> Option<&'static str> {
    match outcome {
        Ok(()) => None,
        // The element's `error` listener already reports a bad asset.
        Err(PlaybackError::Unavailable | PlaybackError::Unsupported(_)) => None,
        Err(_) => Some(NOTICE_AUTOPLAY_BLOCKED),
    }
}

/// Toast text after the retry on confirmation.
pub fn confirm_notice(outcome: &Result<(), PlaybackError>) -> &'static str {
    match outcome {
        Ok(()) => NOTICE_MUSIC_ON,
        Err(PlaybackError::Unavailable) => NOTICE_NO_TRACK,
        Err(_) => NOTICE_PLAY_FAILED,
    }
}

/// Linear volume ramp from silence to `target`, one value per timer tick.
#[derive(Clone, Copy, Debug)]
pub struct FadeIn {
    volume: f64,
    target: f64,
    step: f64,
}

impl FadeIn {
    pub fn new(target: f64) -> Self {
        Self::with_step(target, FADE_STEP)
    }

    pub fn with_step(target: f64, step: f64) -> Self {
        Self {
            volume: 0.0,
            target: target.clamp(0.0, 1.0),
            step,
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_done(&self) -> bool {
        self.volume >= self.target - 0.001
    }
}

impl Iterator for FadeIn {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.is_done() {
            return None;
        }
        // Rounded to 3 decimals so repeated steps land exactly on the target.
        let stepped = ((self.volume + self.step) * 1000.0).round() / 1000.0;
        self.volume = stepped.min(self.target);
        Some(self.volume)
    }
}
