use crate::coords::{Rect, Vec2};
use crate::paint::{build_gradient, Color, ColorStop, Paint};
use crate::path::Path;
use crate::text::{Font, TextLayout};

use super::{DrawList, Stroke, ZIndex};

/// The 2D drawing context widgets paint against.
///
/// This is the whole contract a host backend must satisfy: fill a path,
/// stroke a path, draw a text run, and create a linear gradient brush.
/// Calls are immediate-mode; later calls paint over earlier ones.
pub trait Surface {
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    fn stroke_path(&mut self, path: &Path, stroke: Stroke);

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, bounds: Rect, layout: TextLayout);

    /// Creates a linear gradient brush; see [`build_gradient`].
    fn linear_gradient(&self, stops: &[ColorStop], orientation: [Vec2; 2], angle: f32) -> Paint {
        build_gradient(stops, orientation, angle)
    }
}

/// Records onto the base layer in call order.
impl Surface for DrawList {
    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.push_fill_path(ZIndex::default(), path, paint.clone());
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.push_stroke_path(ZIndex::default(), path, stroke);
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, bounds: Rect, layout: TextLayout) {
        self.push_text(ZIndex::default(), text, font, color, bounds, layout);
    }
}
