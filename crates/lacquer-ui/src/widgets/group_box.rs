use lacquer_engine::coords::{CornerRadii, Rect, Vec2};
use lacquer_engine::paint::{Color, Paint};
use lacquer_engine::path::{resolve, rounded_rect, Path, ShapeKind};
use lacquer_engine::scene::Surface;
use lacquer_engine::text::TextLayout;

use crate::constraints::{inset_rect, Constraints, Edges};
use crate::event::{EventResult, InteractionState, UiEvent};
use crate::painter::Painter;
use crate::render::draw_border;
use crate::style::{BorderDescriptor, FontDescriptor, StyleBundle, Themed};
use crate::widget::{push_background, Element, HasBackground, Widget};

use super::{child_rect, route_to_child};

const DEFAULT_SIZE: Vec2 = Vec2::new(220.0, 180.0);
const MIN_SIZE: Vec2 = Vec2::new(136.0, 50.0);
const TITLE_HEIGHT: f32 = 25.0;
const PADDING: Edges = Edges::new(28.0, 5.0, 5.0, 5.0);

/// A titled frame around one child.
///
/// The body uses background 0 of its theme, the title box background 1.
/// The body color is pushed to the child whenever it changes.
pub struct GroupBox {
    title: String,
    border: BorderDescriptor,
    font: FontDescriptor,
    body_color: Color,
    title_box_color: Color,
    title_box_visible: bool,
    back_color: Color,
    enabled: bool,
    size: Vec2,
    state: InteractionState,
    child: Option<Element>,
}

impl GroupBox {
    pub fn new(title: impl Into<String>) -> Self {
        let bundle = StyleBundle::default();
        Self {
            title: title.into(),
            border: bundle.border().clone(),
            font: bundle.font().clone(),
            body_color: bundle.background(0),
            title_box_color: bundle.background(1),
            title_box_visible: true,
            back_color: Color::transparent(),
            enabled: true,
            size: DEFAULT_SIZE,
            state: InteractionState::Normal,
            child: None,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        let mut child = child.into();
        push_background(&mut child, self.body_color);
        self.child = Some(child);
        self
    }

    pub fn border(mut self, border: BorderDescriptor) -> Self {
        self.border = border;
        self
    }

    pub fn font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    pub fn body_color(mut self, color: Color) -> Self {
        self.set_body_color(color);
        self
    }

    pub fn title_box_color(mut self, color: Color) -> Self {
        self.title_box_color = color;
        self
    }

    pub fn title_box_visible(mut self, v: bool) -> Self {
        self.title_box_visible = v;
        self
    }

    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Vec2::new(w, h);
        self
    }

    pub fn set_body_color(&mut self, color: Color) {
        self.body_color = color;
        if let Some(child) = &mut self.child {
            push_background(child, color);
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
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
    pub fn body(&self) -> Color {
        self.body_color
    }

    #[inline]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Title strip along the top edge.
    fn title_box_path(&self, rect: Rect) -> Path {
        let title = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, TITLE_HEIGHT.min(rect.size.y));
        let rounding = match self.border.shape() {
            ShapeKind::Rounded => self.border.rounding(),
            ShapeKind::Rectangle => 1,
        };
        rounded_rect(title, CornerRadii::all(rounding as f32))
    }
}

impl Widget for GroupBox {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let size = Vec2::new(self.size.x.max(MIN_SIZE.x), self.size.y.max(MIN_SIZE.y));
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.back_color.a > 0.0 {
            painter.fill_path(&Path::rect(rect), &Paint::solid(self.back_color));
        }

        let outline = resolve(rect, self.border.shape(), self.border.rounding());
        painter.fill_path(&outline, &Paint::solid(self.body_color));
        draw_border(painter, &outline, &self.border, self.state);

        let title_box = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, TITLE_HEIGHT.min(rect.size.y));
        if self.title_box_visible {
            let path = self.title_box_path(rect);
            painter.fill_path(&path, &Paint::solid(self.title_box_color));
            draw_border(painter, &path, &self.border, self.state);
        }
        painter.draw_text(
            &self.title,
            &self.font.font,
            self.font.color_for(self.enabled),
            title_box,
            TextLayout::CENTERED,
        );

        if let Some(child) = &self.child {
            child.paint(painter, child_rect(child, inset_rect(rect, PADDING)));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        if let UiEvent::Resize { rect: bounds } = event {
            self.size = bounds.size;
        }
        let changed = self.state.apply(event, rect);
        match route_to_child(self.child.as_mut(), event, inset_rect(rect, PADDING)) {
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

impl Themed for GroupBox {
    fn apply_style(&mut self, bundle: &StyleBundle) {
        self.border = bundle.border().clone();
        self.font = bundle.font().clone();
        self.title_box_color = bundle.background(1);
        self.set_body_color(bundle.background(0));
    }
}

impl HasBackground for GroupBox {
    fn set_background(&mut self, color: Color) {
        self.back_color = color;
    }
}
