use super::Rect;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners are listed in outline order: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Returns radii that fit inside `rect`.
    ///
    /// Each radius is non-negative and at most half of the shorter side, so
    /// opposite arcs can touch but never overlap.
    pub fn fit(self, rect: Rect) -> Self {
        let r = rect.normalized();
        let max = (r.size.x.min(r.size.y) * 0.5).max(0.0);
        let fit = |v: f32| if v.is_finite() { v.clamp(0.0, max) } else { 0.0 };
        Self {
            top_left: fit(self.top_left),
            top_right: fit(self.top_right),
            bottom_right: fit(self.bottom_right),
            bottom_left: fit(self.bottom_left),
        }
    }
}
