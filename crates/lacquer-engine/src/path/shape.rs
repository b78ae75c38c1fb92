use core::f32::consts::{FRAC_PI_2, PI};
use core::fmt;
use core::str::FromStr;

use crate::coords::{CornerRadii, Rect, Vec2};

use super::Path;

/// Outline family of a widget border.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Plain rectangle; any rounding is ignored.
    Rectangle,
    /// Rectangle with quarter-circle corners.
    #[default]
    Rounded,
}

/// Returned when parsing a [`ShapeKind`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown border shape '{}' (expected 'rectangle' or 'rounded')", self.0)
    }
}

impl std::error::Error for UnknownShape {}

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            "rounded" => Ok(ShapeKind::Rounded),
            other => Err(UnknownShape(other.to_owned())),
        }
    }
}

/// Resolves a widget outline.
///
/// - `Rectangle`: the rectangle boundary; `rounding` is ignored.
/// - `Rounded`: all four corners become quarter arcs of radius `rounding`,
///   reduced so that `2 * radius` never exceeds the shorter side. Corners are
///   emitted top-left, top-right, bottom-right, bottom-left as one closed contour.
///
/// Zero or negative width/height yields an empty path.
pub fn resolve(rect: Rect, shape: ShapeKind, rounding: u32) -> Path {
    match shape {
        ShapeKind::Rectangle => Path::rect(rect),
        ShapeKind::Rounded => rounded_rect(rect, CornerRadii::all(rounding as f32)),
    }
}

/// Closed rounded-rectangle outline with per-corner radii.
///
/// Radii are fitted to the rectangle (see [`CornerRadii::fit`]). Corners with
/// zero radius are sharp.
pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Path {
    if rect.is_empty() || !rect.is_finite() {
        return Path::new();
    }

    let radii = radii.fit(rect);
    if radii.is_zero() {
        return Path::rect(rect);
    }

    let min = rect.min();
    let max = rect.max();
    let mut path = Path::new();

    let tl = radii.top_left;
    path.move_to(Vec2::new(min.x, min.y + tl));
    path.arc(Vec2::new(min.x + tl, min.y + tl), tl, PI, FRAC_PI_2);

    let tr = radii.top_right;
    path.arc(Vec2::new(max.x - tr, min.y + tr), tr, -FRAC_PI_2, FRAC_PI_2);

    let br = radii.bottom_right;
    path.arc(Vec2::new(max.x - br, max.y - br), br, 0.0, FRAC_PI_2);

    let bl = radii.bottom_left;
    path.arc(Vec2::new(min.x + bl, max.y - bl), bl, FRAC_PI_2, FRAC_PI_2);

    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathEl;

    fn approx_rect(a: Rect, b: Rect) -> bool {
        a.origin.approx_eq(b.origin, 1e-3) && a.size.approx_eq(b.size, 1e-3)
    }

    fn arc_radii(path: &Path) -> Vec<f32> {
        path.elements()
            .iter()
            .filter_map(|e| match e {
                PathEl::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    // ── rectangle ─────────────────────────────────────────────────────────

    #[test]
    fn rectangle_ignores_rounding() {
        let rect = Rect::new(3.0, 4.0, 50.0, 20.0);
        for rounding in [0, 1, 7, 1000] {
            assert_eq!(resolve(rect, ShapeKind::Rectangle, rounding), Path::rect(rect));
        }
    }

    // ── rounded ───────────────────────────────────────────────────────────

    #[test]
    fn rounded_bounds_match_rect() {
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Rect::new(-5.0, 12.0, 7.0, 300.0),
            Rect::new(10.5, 0.25, 33.0, 33.0),
        ];
        for rect in rects {
            for rounding in [0, 1, 3, (rect.shorter_side() / 2.0) as u32] {
                let path = resolve(rect, ShapeKind::Rounded, rounding);
                assert!(path.is_closed());
                assert!(approx_rect(path.bounds().unwrap(), rect), "{rect:?} r={rounding}");
            }
        }
    }

    #[test]
    fn corners_in_outline_order() {
        let path = resolve(Rect::new(0.0, 0.0, 100.0, 50.0), ShapeKind::Rounded, 10);
        let starts: Vec<f32> = path
            .elements()
            .iter()
            .filter_map(|e| match e {
                PathEl::Arc { start_angle, .. } => Some(*start_angle),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![PI, -FRAC_PI_2, 0.0, FRAC_PI_2]);
    }

    #[test]
    fn oversized_rounding_becomes_pill() {
        let path = resolve(Rect::new(0.0, 0.0, 100.0, 40.0), ShapeKind::Rounded, 50);
        assert_eq!(arc_radii(&path), vec![20.0; 4]);

        // Only the long edges remain straight, and they are horizontal.
        let lines = path.line_segments();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(a, b)| (a.y - b.y).abs() < 1e-3));
        assert!(approx_rect(path.bounds().unwrap(), Rect::new(0.0, 0.0, 100.0, 40.0)));
    }

    #[test]
    fn zero_rounding_is_plain_rectangle() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(resolve(rect, ShapeKind::Rounded, 0), Path::rect(rect));
    }

    #[test]
    fn degenerate_rect_is_empty() {
        assert!(resolve(Rect::new(0.0, 0.0, 0.0, 40.0), ShapeKind::Rounded, 5).is_empty());
        assert!(resolve(Rect::new(0.0, 0.0, 10.0, -4.0), ShapeKind::Rectangle, 5).is_empty());
    }

    #[test]
    fn non_finite_rect_is_empty_for_both_shapes() {
        let nan_width = Rect::new(0.0, 0.0, f32::NAN, 10.0);
        assert!(resolve(nan_width, ShapeKind::Rectangle, 3).is_empty());
        assert!(resolve(nan_width, ShapeKind::Rounded, 3).is_empty());
        let infinite = Rect::new(f32::NEG_INFINITY, 0.0, f32::INFINITY, 10.0);
        assert!(resolve(infinite, ShapeKind::Rectangle, 3).is_empty());
    }

    #[test]
    fn resolve_is_deterministic() {
        let rect = Rect::new(1.0, 2.0, 30.0, 20.0);
        assert_eq!(
            resolve(rect, ShapeKind::Rounded, 6),
            resolve(rect, ShapeKind::Rounded, 6)
        );
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn shape_kind_from_str() {
        assert_eq!("Rounded".parse::<ShapeKind>(), Ok(ShapeKind::Rounded));
        assert_eq!(" rectangle ".parse::<ShapeKind>(), Ok(ShapeKind::Rectangle));
        assert!("oval".parse::<ShapeKind>().is_err());
    }
}
