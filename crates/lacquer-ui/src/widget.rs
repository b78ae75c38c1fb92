use lacquer_engine::coords::{Rect, Vec2};
use lacquer_engine::paint::Color;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::style::Themed;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Widgets own their descriptors and interaction state. Optional abilities
/// (taking a theme, accepting a background from a parent) are exposed as
/// capability queries that return `None` unless the widget opts in.
///
/// ```rust,ignore
/// use lacquer_ui::prelude::*;
///
/// pub struct Swatch { color: Color }
///
/// impl Widget for Swatch {
///     fn measure(&self, constraints: Constraints) -> Vec2 {
///         constraints.constrain(Vec2::new(16.0, 16.0))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_path(&Path::rect(rect), &Paint::solid(self.color));
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Size this widget wants given the available space. Must be deterministic.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within `rect`.
    ///
    /// Called on every paint cycle; paths and brushes are rebuilt each time.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }

    /// Advances animations by one step. Returns `true` if a repaint is needed.
    ///
    /// The default forwards to the children, so hosts can tick the root.
    fn tick(&mut self) -> bool {
        let mut repaint = false;
        self.for_each_child_mut(&mut |child: &mut Element| repaint |= child.widget_mut().tick());
        repaint
    }

    // Capability queries

    /// Query if this widget takes its look from a theme.
    fn as_themed_mut(&mut self) -> Option<&mut dyn Themed> {
        None
    }

    /// Query if this widget accepts a background color from its parent.
    fn as_background_mut(&mut self) -> Option<&mut dyn HasBackground> {
        None
    }

    /// Visits direct children. Leaf widgets keep the default.
    fn for_each_child_mut(&mut self, _f: &mut dyn FnMut(&mut Element)) {}
}

/// Capability: widget whose background a container may set.
pub trait HasBackground {
    fn set_background(&mut self, color: Color);
}

/// Sets `color` on `element` if it supports background assignment.
pub(crate) fn push_background(element: &mut Element, color: Color) {
    if let Some(target) = element.widget_mut().as_background_mut() {
        target.set_background(color);
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget; the child type for container widgets.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }

    #[inline]
    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        &mut *self.0
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
