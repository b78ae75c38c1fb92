use core::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::{Rect, Vec2};

/// Distance under which two points are considered coincident.
const POINT_EPS: f32 = 1e-4;

/// A single path element.
///
/// Arcs are circular with angles in radians. Coordinates are +Y down, so a
/// positive sweep turns clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32, start_angle: f32, sweep_angle: f32 },
    Close,
}

impl PathEl {
    /// Point at which this element leaves the pen, if any.
    fn end_point(self) -> Option<Vec2> {
        match self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            PathEl::Arc { center, radius, start_angle, sweep_angle } => {
                Some(center + Vec2::from_angle(start_angle + sweep_angle, radius))
            }
            PathEl::Close => None,
        }
    }
}

/// Closed (or open) 2D path made of lines and circular arcs.
///
/// The builder methods keep the element list tidy: an arc whose start does
/// not meet the pen gets an explicit connecting line, and zero-length lines
/// are dropped. This keeps the element list a faithful description of the
/// visible outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
    subpath_start: Option<Vec2>,
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed rectangle outline, clockwise from the top-left corner.
    ///
    /// Empty or non-finite rectangles produce an empty path.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        if rect.is_empty() || !rect.is_finite() {
            return path;
        }
        let min = rect.min();
        let max = rect.max();
        path.move_to(min);
        path.line_to(Vec2::new(max.x, min.y));
        path.line_to(max);
        path.line_to(Vec2::new(min.x, max.y));
        path.close();
        path
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.els.push(PathEl::MoveTo(p));
        self.subpath_start = Some(p);
        self.current = Some(p);
        self
    }

    /// Adds a straight segment. Starts a new subpath if the pen is up.
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        match self.current {
            None => return self.move_to(p),
            Some(cur) if cur.approx_eq(p, POINT_EPS) => return self,
            Some(_) => {}
        }
        self.els.push(PathEl::LineTo(p));
        self.current = Some(p);
        self
    }

    /// Adds a circular arc, connecting it to the pen with a line when needed.
    ///
    /// A non-positive radius degenerates to a line to the arc's start point.
    pub fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, sweep_angle: f32) -> &mut Self {
        let start = center + Vec2::from_angle(start_angle, radius.max(0.0));
        self.line_to(start);
        if radius <= 0.0 || sweep_angle == 0.0 {
            return self;
        }
        let el = PathEl::Arc { center, radius, start_angle, sweep_angle };
        self.els.push(el);
        self.current = el.end_point();
        self
    }

    /// Closes the current subpath back to its starting point.
    pub fn close(&mut self) -> &mut Self {
        if self.current.is_some() {
            self.els.push(PathEl::Close);
            self.current = self.subpath_start;
        }
        self
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// True when the path is non-empty and every subpath ends with `Close`.
    pub fn is_closed(&self) -> bool {
        if self.els.is_empty() {
            return false;
        }
        let mut open = false;
        for el in &self.els {
            match el {
                PathEl::MoveTo(_) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathEl::Close => open = false,
                _ => {}
            }
        }
        !open
    }

    /// Number of arc elements.
    pub fn arc_count(&self) -> usize {
        self.els.iter().filter(|e| matches!(e, PathEl::Arc { .. })).count()
    }

    /// Straight segments of the outline, including the implicit segment a
    /// `Close` draws back to the subpath start when it has non-zero length.
    pub fn line_segments(&self) -> Vec<(Vec2, Vec2)> {
        let mut out = Vec::new();
        let mut start = None;
        let mut pen: Option<Vec2> = None;
        for &el in &self.els {
            match el {
                PathEl::MoveTo(p) => {
                    start = Some(p);
                    pen = Some(p);
                }
                PathEl::LineTo(p) => {
                    if let Some(from) = pen {
                        out.push((from, p));
                    }
                    pen = Some(p);
                }
                PathEl::Arc { .. } => pen = el.end_point(),
                PathEl::Close => {
                    if let (Some(from), Some(to)) = (pen, start) {
                        if !from.approx_eq(to, POINT_EPS) {
                            out.push((from, to));
                        }
                    }
                    pen = start;
                }
            }
        }
        out
    }

    /// Exact axis-aligned bounds, including arc extrema. `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut include = |p: Vec2| {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        };

        for &el in &self.els {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => include(p),
                PathEl::Arc { center, radius, start_angle, sweep_angle } => {
                    include(center + Vec2::from_angle(start_angle, radius));
                    include(center + Vec2::from_angle(start_angle + sweep_angle, radius));
                    for angle in axis_crossings(start_angle, sweep_angle) {
                        include(center + Vec2::from_angle(angle, radius));
                    }
                }
                PathEl::Close => {}
            }
        }

        if min.x > max.x || min.y > max.y {
            None
        } else {
            Some(Rect::from_min_max(min, max))
        }
    }
}

/// Multiples of a quarter turn lying strictly inside the arc's sweep.
fn axis_crossings(start: f32, sweep: f32) -> impl Iterator<Item = f32> {
    let (lo, hi) = if sweep >= 0.0 { (start, start + sweep) } else { (start + sweep, start) };
    let sweep = sweep.abs().min(TAU);
    let first = (lo / FRAC_PI_2).floor() as i32 + 1;
    (first..)
        .map(|k| k as f32 * FRAC_PI_2)
        .take_while(move |&a| a < hi && a - lo < sweep)
}
