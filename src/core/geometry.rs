use super::constants::{
    AVOID_MARGIN, CONTAINER_PADDING, DODGE_DISTANCE_FRACTION, DODGE_DISTANCE_MAX,
    DODGE_DISTANCE_MIN, FALLBACK_OFFSET, RANDOM_SAMPLE_ATTEMPTS,
};
use glam::Vec2;
use rand::Rng;

/// Axis-aligned rectangle in viewport pixels (same convention as `DOMRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Grow the rectangle by `margin` on every side.
    #[inline]
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(
            self.left - margin,
            self.top - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Open-interval overlap: rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.left
            || self.left >= other.right()
            || self.bottom() <= other.top
            || self.top >= other.bottom())
    }
}

#[inline]
pub fn overlaps_with_margin(a: &Rect, b: &Rect, margin: f32) -> bool {
    a.inflate(margin).intersects(b)
}

/// Tuning for the placement search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoidParams {
    pub margin: f32,
    pub padding: f32,
    pub random_samples: usize,
    pub fallback_offset: f32,
}

impl Default for AvoidParams {
    fn default() -> Self {
        Self {
            margin: AVOID_MARGIN,
            padding: CONTAINER_PADDING,
            random_samples: RANDOM_SAMPLE_ATTEMPTS,
            fallback_offset: FALLBACK_OFFSET,
        }
    }
}

/// Largest top-left offset that keeps `moving` inside `container` (minus padding).
/// Clamps to zero when the container is smaller than the moving rect.
#[inline]
pub fn max_offsets(container: &Rect, moving: Vec2, padding: f32) -> Vec2 {
    Vec2::new(
        (container.width - moving.x - padding).max(0.0),
        (container.height - moving.y - padding).max(0.0),
    )
}

/// Corner of the container opposite the avoided rect's center, relative to the container.
#[inline]
fn opposite_corner(container: &Rect, avoid: &Rect, max: Vec2) -> Vec2 {
    let c = avoid.center() - container.origin();
    Vec2::new(
        if c.x < container.width * 0.5 { max.x } else { 0.0 },
        if c.y < container.height * 0.5 { max.y } else { 0.0 },
    )
}

/// Find a top-left offset (relative to `container`) for a rect of `moving` size
/// that keeps `params.margin` clear of `avoid`.
///
/// Tries the eight anchor points, then the corner opposite `avoid`, then random
/// samples. If nothing fits, returns a clamped point near `avoid` which may
/// overlap it.
pub fn safe_position<R: Rng + ?Sized>(
    container: &Rect,
    moving: Vec2,
    avoid: &Rect,
    params: &AvoidParams,
    rng: &mut R,
) -> Vec2 {
    let max = max_offsets(container, moving, params.padding);
    let clear = |c: Vec2| {
        let candidate = Rect::from_origin_size(container.origin() + c, moving);
        !overlaps_with_margin(&candidate, avoid, params.margin)
    };

    let mid = (max * 0.5).floor();
    let anchors = [
        Vec2::new(0.0, 0.0),
        Vec2::new(max.x, 0.0),
        Vec2::new(0.0, max.y),
        Vec2::new(max.x, max.y),
        Vec2::new(mid.x, 0.0),
        Vec2::new(mid.x, max.y),
        Vec2::new(0.0, mid.y),
        Vec2::new(max.x, mid.y),
    ];
    if let Some(c) = anchors.into_iter().find(|c| clear(*c)) {
        return c;
    }

    let preferred = opposite_corner(container, avoid, max);
    if clear(preferred) {
        return preferred;
    }

    let span_x = max.x.floor() as u32;
    let span_y = max.y.floor() as u32;
    for _ in 0..params.random_samples {
        let c = Vec2::new(
            rng.gen_range(0..=span_x) as f32,
            rng.gen_range(0..=span_y) as f32,
        );
        if clear(c) {
            return c;
        }
    }

    let near = avoid.center() - container.origin() + Vec2::splat(params.fallback_offset);
    near.clamp(Vec2::ZERO, max).floor()
}

/// Distance the avoider jumps away from the pointer in proximity mode.
#[inline]
pub fn dodge_distance(container: &Rect) -> f32 {
    (container.width.max(container.height) * DODGE_DISTANCE_FRACTION)
        .clamp(DODGE_DISTANCE_MIN, DODGE_DISTANCE_MAX)
}

/// Top-left offset that pushes `moving` directly away from `pointer`.
///
/// Falls back to the corner opposite `avoid`, then to [`safe_position`], when
/// the straight push would land on `avoid`.
pub fn away_position<R: Rng + ?Sized>(
    container: &Rect,
    moving: &Rect,
    avoid: &Rect,
    pointer: Vec2,
    params: &AvoidParams,
    rng: &mut R,
) -> Vec2 {
    let center = moving.center();
    let delta = center - pointer;
    let len = delta.length();
    let dir = if len > 0.0 { delta / len } else { delta };

    let desired_center = center + dir * dodge_distance(container);
    let desired = (desired_center - moving.size() * 0.5 - container.origin()).round();
    let max = max_offsets(container, moving.size(), params.padding);
    let clamped = desired.clamp(Vec2::ZERO, max);

    let lands_clear =
        |c: Vec2| !Rect::from_origin_size(container.origin() + c, moving.size()).intersects(avoid);
    if lands_clear(clamped) {
        return clamped;
    }
    let preferred = opposite_corner(container, avoid, max);
    if lands_clear(preferred) {
        return preferred;
    }
    safe_position(container, moving.size(), avoid, params, rng)
}

/// Euclidean distance from `pointer` to the center of `rect`.
#[inline]
pub fn distance_to_center(rect: &Rect, pointer: Vec2) -> f32 {
    rect.center().distance(pointer)
}
