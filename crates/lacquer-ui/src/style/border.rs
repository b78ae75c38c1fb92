use lacquer_engine::paint::Color;
use lacquer_engine::path::ShapeKind;

/// Allowed ranges for border thickness and corner rounding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BorderLimits {
    pub min_thickness: u32,
    pub max_thickness: u32,
    pub min_rounding: u32,
    pub max_rounding: u32,
}

impl BorderLimits {
    pub const STANDARD: BorderLimits =
        BorderLimits { min_thickness: 1, max_thickness: 10, min_rounding: 1, max_rounding: 30 };

    #[inline]
    fn thickness(self, v: i64) -> u32 {
        clamp_into(v, self.min_thickness, self.max_thickness)
    }

    #[inline]
    fn rounding(self, v: i64) -> u32 {
        clamp_into(v, self.min_rounding, self.max_rounding)
    }
}

impl Default for BorderLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn clamp_into(v: i64, min: u32, max: u32) -> u32 {
    let (lo, hi) = (min.min(max) as i64, min.max(max) as i64);
    v.clamp(lo, hi) as u32
}

/// Border appearance of one outline.
///
/// Thickness and rounding are clamped to `limits` every time they are
/// written, so readers never see out-of-range values.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderDescriptor {
    color: Color,
    hover_color: Color,
    visible: bool,
    hover_visible: bool,
    thickness: u32,
    rounding: u32,
    shape: ShapeKind,
    limits: BorderLimits,
}

impl BorderDescriptor {
    pub fn new() -> Self {
        Self {
            color: Color::rgb8(180, 180, 180),
            hover_color: Color::rgb8(120, 183, 230),
            visible: true,
            hover_visible: true,
            thickness: 1,
            rounding: 6,
            shape: ShapeKind::Rounded,
            limits: BorderLimits::STANDARD,
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn with_color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn with_hover_color(mut self, v: Color) -> Self { self.hover_color = v; self }
    pub fn with_visible(mut self, v: bool) -> Self { self.visible = v; self }
    pub fn with_hover_visible(mut self, v: bool) -> Self { self.hover_visible = v; self }
    pub fn with_shape(mut self, v: ShapeKind) -> Self { self.shape = v; self }
    pub fn with_thickness(mut self, v: i64) -> Self { self.set_thickness(v); self }
    pub fn with_rounding(mut self, v: i64) -> Self { self.set_rounding(v); self }

    /// Replaces the limits and re-clamps the current values.
    pub fn with_limits(mut self, limits: BorderLimits) -> Self {
        self.limits = limits;
        self.set_thickness(self.thickness as i64);
        self.set_rounding(self.rounding as i64);
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn color(&self) -> Color { self.color }
    #[inline] pub fn hover_color(&self) -> Color { self.hover_color }
    #[inline] pub fn visible(&self) -> bool { self.visible }
    #[inline] pub fn hover_visible(&self) -> bool { self.hover_visible }
    #[inline] pub fn thickness(&self) -> u32 { self.thickness }
    #[inline] pub fn rounding(&self) -> u32 { self.rounding }
    #[inline] pub fn shape(&self) -> ShapeKind { self.shape }
    #[inline] pub fn limits(&self) -> BorderLimits { self.limits }

    // ── mutation ──────────────────────────────────────────────────────────

    pub fn set_color(&mut self, v: Color) { self.color = v; }
    pub fn set_hover_color(&mut self, v: Color) { self.hover_color = v; }
    pub fn set_visible(&mut self, v: bool) { self.visible = v; }
    pub fn set_hover_visible(&mut self, v: bool) { self.hover_visible = v; }
    pub fn set_shape(&mut self, v: ShapeKind) { self.shape = v; }

    /// Sets the thickness, clamped to the limits.
    pub fn set_thickness(&mut self, v: i64) {
        self.thickness = self.limits.thickness(v);
    }

    /// Sets the corner rounding, clamped to the limits.
    pub fn set_rounding(&mut self, v: i64) {
        self.rounding = self.limits.rounding(v);
    }
}

impl Default for BorderDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_to_standard_limits() {
        let mut b = BorderDescriptor::new();
        b.set_thickness(-4);
        assert_eq!(b.thickness(), 1);
        b.set_thickness(99);
        assert_eq!(b.thickness(), 10);
        b.set_rounding(-1);
        assert_eq!(b.rounding(), 1);
        b.set_rounding(500);
        assert_eq!(b.rounding(), 30);
    }

    #[test]
    fn builder_clamps_too() {
        let b = BorderDescriptor::new().with_thickness(0).with_rounding(i64::MAX);
        assert_eq!(b.thickness(), 1);
        assert_eq!(b.rounding(), 30);
    }

    #[test]
    fn narrowing_limits_reclamps_existing_values() {
        let limits = BorderLimits { min_thickness: 0, max_thickness: 2, min_rounding: 0, max_rounding: 4 };
        let b = BorderDescriptor::new().with_thickness(8).with_rounding(20).with_limits(limits);
        assert_eq!(b.thickness(), 2);
        assert_eq!(b.rounding(), 4);
    }

    #[test]
    fn inverted_limits_do_not_panic() {
        let limits = BorderLimits { min_thickness: 5, max_thickness: 2, min_rounding: 9, max_rounding: 3 };
        let b = BorderDescriptor::new().with_limits(limits).with_thickness(100).with_rounding(0);
        assert_eq!(b.thickness(), 5);
        assert_eq!(b.rounding(), 3);
    }
}
