use lacquer_engine::coords::{Rect, Vec2};
use lacquer_engine::paint::{Color, Paint};
use lacquer_engine::path::{resolve, Path};
use lacquer_engine::scene::Surface;

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::event::{EventResult, InteractionState, UiEvent};
use crate::painter::Painter;
use crate::render::draw_border;
use crate::style::{BorderDescriptor, StyleBundle, Themed};
use crate::widget::{push_background, Element, HasBackground, Widget};

use super::{child_rect, route_to_child};

const DEFAULT_SIZE: Vec2 = Vec2::new(187.0, 117.0);
const PADDING: Edges = Edges::all(5.0);

/// A bordered surface with one optional child.
///
/// ```rust,ignore
/// Panel::new().background(Color::rgb8(240, 244, 248)).child(Toggle::new())
/// ```
pub struct Panel {
    border: BorderDescriptor,
    background: Color,
    background_disabled: Color,
    back_color: Color,
    enabled: bool,
    size: Vec2,
    state: InteractionState,
    child: Option<Element>,
}

impl Panel {
    pub fn new() -> Self {
        let bundle = StyleBundle::default();
        Self {
            border: bundle.border().clone(),
            background: bundle.background(0),
            background_disabled: bundle.background(0),
            back_color: Color::transparent(),
            enabled: true,
            size: DEFAULT_SIZE,
            state: InteractionState::Normal,
            child: None,
        }
    }

    /// Sets the child; it immediately receives this panel's background.
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        let mut child = child.into();
        push_background(&mut child, self.current_background());
        self.child = Some(child);
        self
    }

    pub fn border(mut self, border: BorderDescriptor) -> Self {
        self.border = border;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.set_panel_background(color);
        self
    }

    /// Fill used while the panel is disabled.
    pub fn background_disabled(mut self, color: Color) -> Self {
        self.background_disabled = color;
        self.propagate_background();
        self
    }

    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self.propagate_background();
        self
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Vec2::new(w, h);
        self
    }

    /// Sets the panel's own fill and pushes it to the child.
    pub fn set_panel_background(&mut self, color: Color) {
        self.background = color;
        self.propagate_background();
    }

    #[inline]
    pub fn border_descriptor(&self) -> &BorderDescriptor {
        &self.border
    }

    #[inline]
    pub fn border_mut(&mut self) -> &mut BorderDescriptor {
        &mut self.border
    }

    #[inline]
    pub fn panel_background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    fn current_background(&self) -> Color {
        if self.enabled { self.background } else { self.background_disabled }
    }

    fn propagate_background(&mut self) {
        let color = self.current_background();
        if let Some(child) = &mut self.child {
            push_background(child, color);
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.back_color.a > 0.0 {
            painter.fill_path(&Path::rect(rect), &Paint::solid(self.back_color));
        }

        let outline = resolve(rect, self.border.shape(), self.border.rounding());
        painter.fill_path(&outline, &Paint::solid(self.current_background()));
        draw_border(painter, &outline, &self.border, self.state);

        if let Some(child) = &self.child {
            child.paint(painter, child_rect(child, inset_rect(rect, PADDING)));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        if let UiEvent::Resize { rect: bounds } = event {
            self.size = bounds.size;
        }
        let changed = self.state.apply(event, rect);
        let inner = inset_rect(rect, PADDING);
        match route_to_child(self.child.as_mut(), event, inner) {
            EventResult::Consumed => EventResult::Consumed,
            EventResult::Ignored if changed => EventResult::Consumed,
            EventResult::Ignored => EventResult::Ignored,
        }
    }

    fn as_themed_mut(&mut self) -> Option<&mut dyn Themed> {
        Some(self)
    }

    fn as_background_mut(&mut self) -> Option<&mut dyn HasBackground> {
        Some(self)
    }

    fn for_each_child_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        if let Some(child) = &mut self.child {
            f(child);
        }
    }
}

impl Themed for Panel {
    fn apply_style(&mut self, bundle: &StyleBundle) {
        self.border = bundle.border().clone();
        self.background = bundle.background(0);
        self.background_disabled = bundle.background(0);
        self.propagate_background();
    }
}

/// The color behind the panel's outline (visible past rounded corners).
impl HasBackground for Panel {
    fn set_background(&mut self, color: Color) {
        self.back_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacquer_engine::scene::DrawList;

    use crate::widgets::Toggle;

    fn paint(panel: &Panel, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        panel.paint(&mut Painter::new(&mut list), rect);
        list
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn fills_then_strokes_outline() {
        let list = paint(&Panel::new(), Rect::new(0.0, 0.0, 100.0, 60.0));
        assert_eq!(list.fills().count(), 1);
        assert_eq!(list.strokes().count(), 1);
        assert!(list.items()[0].cmd.as_fill().is_some());
    }

    #[test]
    fn hover_switches_border_color() {
        let mut panel = Panel::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
        assert!(panel.on_event(&UiEvent::PointerEnter, rect).is_consumed());
        let list = paint(&panel, rect);
        let stroke = list.strokes().next().unwrap().stroke;
        assert_eq!(stroke.color, panel.border_descriptor().hover_color());
    }

    #[test]
    fn resize_records_size() {
        let mut panel = Panel::new();
        panel.on_event(&UiEvent::Resize { rect: Rect::new(0.0, 0.0, 40.0, 30.0) }, Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(panel.measure(Constraints::unbounded()), Vec2::new(40.0, 30.0));
    }

    // ── background propagation ────────────────────────────────────────────

    #[test]
    fn child_receives_background() {
        let color = Color::rgb8(10, 20, 30);
        let panel = Panel::new().background(color).child(Toggle::new());
        let list = paint(&panel, Rect::new(0.0, 0.0, 100.0, 60.0));
        let child_back = list.fills().nth(1).unwrap();
        assert_eq!(child_back.paint, Paint::solid(color));
    }

    #[test]
    fn disabled_panel_fills_and_propagates_disabled_background() {
        let enabled = Color::rgb8(240, 240, 240);
        let disabled = Color::rgb8(120, 120, 120);
        let rect = Rect::new(0.0, 0.0, 100.0, 60.0);

        let panel = Panel::new()
            .background(enabled)
            .background_disabled(disabled)
            .child(Toggle::new())
            .enabled(false);
        let list = paint(&panel, rect);
        let fills: Vec<&Paint> = list.fills().map(|f| &f.paint).collect();
        assert_eq!(fills[0], &Paint::solid(disabled));
        assert_eq!(fills[1], &Paint::solid(disabled));

        let list = paint(&panel.enabled(true), rect);
        assert_eq!(list.fills().next().unwrap().paint, Paint::solid(enabled));
    }
}
