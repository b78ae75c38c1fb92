use lacquer_engine::coords::Rect;
use lacquer_engine::paint::{Color, Paint};
use lacquer_engine::path::Path;
use lacquer_engine::scene::{DrawList, Stroke, Surface, ZIndex};
use lacquer_engine::text::{Font, TextLayout};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Records onto a `DrawList`, giving every call its own layer so the replay
/// order matches the call order even after the list is sorted.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

impl Surface for Painter<'_> {
    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let z = self.next_z();
        self.draw_list.push_fill_path(z, path, paint.clone());
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_stroke_path(z, path, stroke);
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, bounds: Rect, layout: TextLayout) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, color, bounds, layout);
    }
}
