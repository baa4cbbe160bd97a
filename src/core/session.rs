use super::constants::{SHRINK_FACTOR, SHRINK_MIN_SCALE};

/// How the avoider resists activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DodgeMode {
    /// Presses and holds shrink the avoider in place.
    #[default]
    Shrink,
    /// The avoider additionally jumps away when the pointer comes close.
    Proximity,
}

impl DodgeMode {
    /// Parse the container's `data-dodge` attribute; anything unknown keeps the default.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("proximity") => DodgeMode::Proximity,
            _ => DodgeMode::Shrink,
        }
    }
}

/// Layout and scale of the avoider element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoiderState {
    pub left: f32,
    pub top: f32,
    pub scale: f32,
    pub animating: bool,
}

impl Default for AvoiderState {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            scale: 1.0,
            animating: false,
        }
    }
}

impl AvoiderState {
    /// Claim the busy flag for a relocation. Returns false if one is already in flight.
    pub fn begin_move(&mut self, left: f32, top: f32) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        self.left = left;
        self.top = top;
        true
    }

    pub fn finish_move(&mut self) {
        self.animating = false;
    }
}

/// One multiplicative shrink, capped at 1.0 and never below `min_scale`.
#[inline]
pub fn shrink_step(scale: f32, factor: f32, min_scale: f32) -> f32 {
    (scale * factor).min(1.0).max(min_scale)
}

#[inline]
pub fn default_shrink_step(scale: f32) -> f32 {
    shrink_step(scale, SHRINK_FACTOR, SHRINK_MIN_SCALE)
}

/// Keys that activate a focused control.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Press-and-hold tracking. `T` is the repeating timer handle; dropping it
/// must cancel the timer.
#[derive(Debug)]
pub struct HoldState<T> {
    active: bool,
    timer: Option<T>,
}

impl<T> Default for HoldState<T> {
    fn default() -> Self {
        Self {
            active: false,
            timer: None,
        }
    }
}

impl<T> HoldState<T> {
    /// Begin a hold. A start while already holding is ignored and returns false,
    /// so only one timer ever exists.
    pub fn start<F: FnOnce() -> Option<T>>(&mut self, schedule: F) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.timer = schedule();
        true
    }

    /// End the hold and drop the timer. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.active = false;
        self.timer = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }
}

/// Throttle/cooldown timestamps (milliseconds) for one page session.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionSession {
    last_shrink_ms: Option<f64>,
    last_move_ms: Option<f64>,
}

impl InteractionSession {
    /// Returns true and records `now_ms` if at least `throttle_ms` passed since
    /// the last effective shrink.
    pub fn admit_shrink(&mut self, now_ms: f64, throttle_ms: f64) -> bool {
        if let Some(last) = self.last_shrink_ms {
            if now_ms - last < throttle_ms {
                return false;
            }
        }
        self.last_shrink_ms = Some(now_ms);
        true
    }

    /// Proximity-mode gate: pointer within `radius`, avoider idle, and cooldown elapsed.
    pub fn admit_dodge(
        &mut self,
        now_ms: f64,
        distance: f32,
        radius: f32,
        animating: bool,
        cooldown_ms: f64,
    ) -> bool {
        if distance >= radius || animating {
            return false;
        }
        if let Some(last) = self.last_move_ms {
            if now_ms - last <= cooldown_ms {
                return false;
            }
        }
        self.last_move_ms = Some(now_ms);
        true
    }
}
