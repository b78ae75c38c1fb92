use lacquer_engine::paint::Color;
use lacquer_engine::path::Path;
use lacquer_engine::scene::{Stroke, Surface};

use crate::event::InteractionState;
use crate::style::BorderDescriptor;

/// Stroke color for `border` in `state`.
///
/// Hovered widgets use the hover color only when hover highlighting is on.
#[inline]
pub fn border_color(border: &BorderDescriptor, state: InteractionState) -> Color {
    if state == InteractionState::Hover && border.hover_visible() {
        border.hover_color()
    } else {
        border.color()
    }
}

/// Strokes `path` with `border`'s thickness and state color.
///
/// Does nothing when the border is hidden or the path is empty. Never fills.
pub fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    path: &Path,
    border: &BorderDescriptor,
    state: InteractionState,
) {
    if !border.visible() || path.is_empty() {
        return;
    }
    surface.stroke_path(path, Stroke::new(border.thickness() as f32, border_color(border, state)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacquer_engine::coords::Rect;
    use lacquer_engine::path::{resolve, ShapeKind};
    use lacquer_engine::scene::DrawList;

    fn hover_red() -> BorderDescriptor {
        BorderDescriptor::new().with_color(Color::black()).with_hover_color(Color::rgb8(255, 0, 0))
    }

    // ── color rule ────────────────────────────────────────────────────────

    #[test]
    fn hover_uses_hover_color() {
        assert_eq!(border_color(&hover_red(), InteractionState::Hover), Color::rgb8(255, 0, 0));
    }

    #[test]
    fn hover_without_hover_visible_uses_base_color() {
        let b = hover_red().with_hover_visible(false);
        assert_eq!(border_color(&b, InteractionState::Hover), Color::black());
    }

    #[test]
    fn normal_uses_base_color() {
        assert_eq!(border_color(&hover_red(), InteractionState::Normal), Color::black());
    }

    // ── stroking ──────────────────────────────────────────────────────────

    #[test]
    fn strokes_with_thickness() {
        let mut list = DrawList::new();
        let path = resolve(Rect::new(0.0, 0.0, 50.0, 20.0), ShapeKind::Rounded, 6);
        draw_border(&mut list, &path, &hover_red().with_thickness(3), InteractionState::Normal);

        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].stroke.width, 3.0);
        assert_eq!(strokes[0].stroke.color, Color::black());
        assert!(list.fills().next().is_none());
    }

    #[test]
    fn hidden_border_records_nothing() {
        let mut list = DrawList::new();
        let path = resolve(Rect::new(0.0, 0.0, 50.0, 20.0), ShapeKind::Rectangle, 0);
        draw_border(&mut list, &path, &hover_red().with_visible(false), InteractionState::Hover);
        assert!(list.is_empty());
    }

    #[test]
    fn empty_path_records_nothing() {
        let mut list = DrawList::new();
        let path = resolve(Rect::new(0.0, 0.0, 0.0, 20.0), ShapeKind::Rounded, 6);
        draw_border(&mut list, &path, &hover_red(), InteractionState::Normal);
        assert!(list.is_empty());
    }
}
