use crate::coords::Vec2;

use super::{Color, Paint};

/// A single gradient stop at normalized position `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` are positions in the same coordinate space as geometry.
/// Stops are sorted by `t`. Outside `[0, 1]` the edge stops extend.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }
}

/// Builds the brush for a set of color stops spanning `orientation`.
///
/// The orientation segment (typically the control's diagonal) is rotated by
/// `angle` degrees around its midpoint. Stop positions are clamped to
/// `[0, 1]` and stably sorted. A single stop yields a solid paint, as does a
/// degenerate orientation (using the lowest-positioned stop). No stops yields
/// transparent.
///
/// Pure: identical inputs produce equal paints.
pub fn build_gradient(stops: &[ColorStop], orientation: [Vec2; 2], angle: f32) -> Paint {
    match stops {
        [] => return Paint::Solid(Color::transparent()),
        [only] => return Paint::Solid(only.color),
        _ => {}
    }

    let mut sorted: Vec<ColorStop> = stops
        .iter()
        .map(|s| ColorStop::new(if s.t.is_finite() { s.t.clamp(0.0, 1.0) } else { 0.0 }, s.color))
        .collect();
    // `sort_by` is stable, so equal positions keep their given order (hard edges).
    sorted.sort_by(|a, b| a.t.total_cmp(&b.t));

    let [p0, p1] = orientation;
    let mid = p0.lerp(p1, 0.5);
    let theta = angle.to_radians();
    let start = p0.rotate_around(mid, theta);
    let end = p1.rotate_around(mid, theta);

    if !start.is_finite() || !end.is_finite() || start.approx_eq(end, f32::EPSILON) {
        return Paint::Solid(sorted[0].color);
    }

    Paint::LinearGradient(LinearGradient::new(start, end, sorted))
}
