use lacquer_engine::coords::Vec2;
use lacquer_engine::paint::{Color, ColorStop, Paint};
use lacquer_engine::scene::Surface;

use super::StyleError;

/// Ordered color stops plus a rotation angle in degrees.
///
/// Invariants, established at construction: at least one stop, positions in
/// `[0, 1]`, positions non-decreasing. Out-of-range positions are clamped and
/// stops are stably sorted rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescriptor {
    stops: Vec<ColorStop>,
    angle: f32,
}

impl GradientDescriptor {
    pub fn new(stops: Vec<ColorStop>, angle: f32) -> Result<Self, StyleError> {
        if stops.is_empty() {
            return Err(StyleError::EmptyGradient);
        }
        let mut stops: Vec<ColorStop> = stops
            .into_iter()
            .map(|s| ColorStop::new(if s.t.is_finite() { s.t.clamp(0.0, 1.0) } else { 0.0 }, s.color))
            .collect();
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Ok(Self { stops, angle: if angle.is_finite() { angle } else { 0.0 } })
    }

    /// Parallel color/position lists.
    ///
    /// `positions = None` spaces the colors evenly from 0 to 1.
    pub fn from_colors(colors: &[Color], positions: Option<&[f32]>, angle: f32) -> Result<Self, StyleError> {
        let stops = match positions {
            Some(p) if p.len() != colors.len() => {
                return Err(StyleError::GradientLengthMismatch { colors: colors.len(), positions: p.len() });
            }
            Some(p) => colors.iter().zip(p).map(|(&c, &t)| ColorStop::new(t, c)).collect(),
            None => {
                let last = colors.len().saturating_sub(1).max(1) as f32;
                colors.iter().enumerate().map(|(i, &c)| ColorStop::new(i as f32 / last, c)).collect()
            }
        };
        Self::new(stops, angle)
    }

    /// Single-stop gradient; renders as a solid fill.
    pub fn solid(color: Color) -> Self {
        Self { stops: vec![ColorStop::new(0.0, color)], angle: 0.0 }
    }

    /// Two stops at 0 and 1.
    pub fn two_tone(from: Color, to: Color, angle: f32) -> Self {
        Self {
            stops: vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            angle: if angle.is_finite() { angle } else { 0.0 },
        }
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Asks `surface` for the brush spanning `orientation`.
    pub fn brush<S: Surface + ?Sized>(&self, surface: &S, orientation: [Vec2; 2]) -> Paint {
        surface.linear_gradient(&self.stops, orientation, self.angle)
    }
}
