use super::constants::{MIN_TRANSITION_MS, SETTLE_GRACE_MS};
use super::geometry::Rect;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Where a move ends and where it visually starts from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovePlan {
    /// Final `left`/`top` inside the container.
    pub target: Vec2,
    /// Initial `translate3d` offset so the element appears where it was.
    pub start_offset: Vec2,
}

/// Plan a move of `current` to `target` (relative to `container`), clamping the
/// target so the element stays inside.
pub fn plan_move(container: &Rect, current: &Rect, target: Vec2) -> MovePlan {
    let max = Vec2::new(
        (container.width - current.width).max(0.0),
        (container.height - current.height).max(0.0),
    );
    let target = target.clamp(Vec2::ZERO, max);
    let relative = current.origin() - container.origin();
    MovePlan {
        target,
        start_offset: relative - target,
    }
}

#[inline]
pub fn transition_ms(duration_ms: u32) -> u32 {
    duration_ms.max(MIN_TRANSITION_MS)
}

/// Deadline after which a move settles even without a transition event.
#[inline]
pub fn settle_deadline_ms(duration_ms: u32) -> u32 {
    duration_ms + SETTLE_GRACE_MS
}

#[inline]
pub fn translate3d(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", offset.x, offset.y)
}

/// Signals that may finish an in-flight move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleSignal<'a> {
    /// `transitionend` with the transitioned CSS property name.
    TransitionEnd(&'a str),
    Timeout,
}

/// Shared one-shot completion guard. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct SettleOnce(Rc<Cell<bool>>);

impl SettleOnce {
    /// Returns true exactly once: for the first relevant signal.
    /// Transitions of properties other than `transform` are ignored.
    pub fn settle(&self, signal: SettleSignal<'_>) -> bool {
        if let SettleSignal::TransitionEnd(prop) = signal {
            if prop != "transform" {
                return false;
            }
        }
        !self.0.replace(true)
    }

    pub fn is_settled(&self) -> bool {
        self.0.get()
    }
}

/// An in-flight move: its settle guard plus the handles (listener, fallback
/// timer) that must be released once it settles, whichever signal wins.
pub struct PendingSettle<H> {
    guard: SettleOnce,
    handles: RefCell<Option<H>>,
}

impl<H> Default for PendingSettle<H> {
    fn default() -> Self {
        Self {
            guard: SettleOnce::default(),
            handles: RefCell::new(None),
        }
    }
}

impl<H> PendingSettle<H> {
    /// Attach the handles. A move that already settled drops them right away.
    pub fn arm(&self, handles: H) {
        if self.guard.is_settled() {
            return;
        }
        *self.handles.borrow_mut() = Some(handles);
    }

    /// Settle on the first relevant signal and hand the handles to `release`.
    /// Returns false, without calling `release`, for every later or ignored signal.
    pub fn settle(&self, signal: SettleSignal<'_>, release: impl FnOnce(H)) -> bool {
        if !self.guard.settle(signal) {
            return false;
        }
        let handles = self.handles.borrow_mut().take();
        if let Some(handles) = handles {
            release(handles);
        }
        true
    }

    pub fn is_settled(&self) -> bool {
        self.guard.is_settled()
    }

    pub fn is_armed(&self) -> bool {
        self.handles.borrow().is_some()
    }
}
