use lacquer_engine::coords::{Rect, Vec2};
use lacquer_engine::paint::{Color, Paint};
use lacquer_engine::path::{resolve, Path};
use lacquer_engine::scene::Surface;
use lacquer_engine::text::TextLayout;
use log::trace;

use crate::constraints::Constraints;
use crate::event::{EventResult, InteractionState, UiEvent};
use crate::painter::Painter;
use crate::render::draw_border;
use crate::style::{BorderDescriptor, ControlGradients, FontDescriptor, GradientDescriptor, StyleBundle, Themed};
use crate::widget::{HasBackground, Widget};

const DEFAULT_SIZE: Vec2 = Vec2::new(50.0, 25.0);
const BUTTON_SIZE: Vec2 = Vec2::new(20.0, 20.0);
const BUTTON_INSET: f32 = 2.0;
const LABEL_SIZE: f32 = 7.0;
const LABEL_X_ON: f32 = 5.0;
const LABEL_X_OFF: f32 = 7.0;

/// Animation offset bounds and step.
const OFFSET_MAX: u8 = 100;
const OFFSET_STEP: u8 = 10;

/// Label pair shown by a [`Toggle`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ToggleType {
    #[default]
    YesNo,
    OnOff,
    IO,
}

impl ToggleType {
    pub fn label(self, toggled: bool) -> &'static str {
        match (self, toggled) {
            (ToggleType::YesNo, true) => "Yes",
            (ToggleType::YesNo, false) => "No",
            (ToggleType::OnOff, true) => "On",
            (ToggleType::OnOff, false) => "Off",
            (ToggleType::IO, true) => "I",
            (ToggleType::IO, false) => "O",
        }
    }
}

/// A sliding on/off switch.
///
/// Clicking flips the state at once; the button then slides toward its new
/// end one step per [`Widget::tick`]. Hosts drive `tick` from a
/// `lacquer_engine::time::Ticker` and repaint when it returns `true`.
///
/// ```rust,ignore
/// Toggle::new()
///     .toggle_type(ToggleType::OnOff)
///     .on_change(|on| log::info!("toggle: {on}"))
/// ```
pub struct Toggle {
    toggled: bool,
    toggle_type: ToggleType,
    offset: u8,
    border: BorderDescriptor,
    button_border: BorderDescriptor,
    font: FontDescriptor,
    gradients: ControlGradients,
    back_color: Color,
    enabled: bool,
    size: Vec2,
    state: InteractionState,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Toggle {
    pub fn new() -> Self {
        let bundle = StyleBundle::default();
        Self {
            toggled: false,
            toggle_type: ToggleType::default(),
            offset: 0,
            border: bundle.border().clone().with_rounding(20),
            button_border: bundle.border().clone().with_rounding(18),
            font: bundle.font().clone(),
            gradients: bundle.gradients().clone(),
            back_color: Color::transparent(),
            enabled: true,
            size: DEFAULT_SIZE,
            state: InteractionState::Normal,
            on_change: None,
        }
    }

    /// Initial state; does not fire `on_change` and skips the animation.
    pub fn toggled(mut self, v: bool) -> Self {
        self.toggled = v;
        self.offset = if v { OFFSET_MAX } else { 0 };
        self
    }

    pub fn toggle_type(mut self, v: ToggleType) -> Self {
        self.toggle_type = v;
        self
    }

    pub fn border(mut self, v: BorderDescriptor) -> Self {
        self.border = v;
        self
    }

    pub fn button_border(mut self, v: BorderDescriptor) -> Self {
        self.button_border = v;
        self
    }

    pub fn gradients(mut self, v: ControlGradients) -> Self {
        self.gradients = v;
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

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Animation progress in `[0, 100]`; 0 is the off end.
    #[inline]
    pub fn offset(&self) -> u8 {
        self.offset
    }

    #[inline]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[inline]
    pub fn border_descriptor(&self) -> &BorderDescriptor {
        &self.border
    }

    /// Sets the state and fires `on_change`. The button animates toward the new end.
    pub fn set_toggled(&mut self, v: bool) {
        self.toggled = v;
        trace!("toggle -> {v}");
        if let Some(f) = &mut self.on_change {
            f(v);
        }
    }

    /// True while the button has not reached the end matching `toggled`.
    pub fn is_animating(&self) -> bool {
        self.offset != if self.toggled { OFFSET_MAX } else { 0 }
    }

    /// Button bounds for the current animation offset.
    pub fn button_rect(&self, rect: Rect) -> Rect {
        let y = rect.origin.y + rect.size.y / 2.0 - BUTTON_SIZE.y / 2.0;
        let start = Vec2::new(rect.origin.x + BUTTON_INSET, y);
        let end = Vec2::new(rect.origin.x + rect.size.x - BUTTON_SIZE.x - BUTTON_INSET, y);
        let t = f32::from(self.offset) / f32::from(OFFSET_MAX);
        Rect::from_origin_size(start.lerp(end, t), BUTTON_SIZE)
    }

    fn label_rect(&self, rect: Rect) -> Rect {
        let x = if self.toggled {
            LABEL_X_ON
        } else {
            rect.size.x - LABEL_SIZE - LABEL_X_OFF * 2.0
        };
        Rect::new(rect.origin.x + x, rect.origin.y, (rect.size.x - x).max(0.0), rect.size.y)
    }

    fn track_gradient(&self) -> &GradientDescriptor {
        if self.enabled { &self.gradients.progress } else { &self.gradients.control_disabled }
    }

    fn button_gradient(&self) -> &GradientDescriptor {
        if self.enabled { &self.gradients.control_enabled } else { &self.gradients.control_disabled }
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Toggle {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.back_color.a > 0.0 {
            painter.fill_path(&Path::rect(rect), &Paint::solid(self.back_color));
        }

        // Both brushes run down the right edge.
        let orientation = [
            Vec2::new(rect.origin.x + rect.size.x, rect.origin.y),
            Vec2::new(rect.origin.x + rect.size.x, rect.origin.y + rect.size.y),
        ];

        let track = resolve(rect, self.border.shape(), self.border.rounding());
        let track_paint = self.track_gradient().brush(&*painter, orientation);
        painter.fill_path(&track, &track_paint);
        draw_border(painter, &track, &self.border, self.state);

        painter.draw_text(
            self.toggle_type.label(self.toggled),
            &self.font.font.with_size(LABEL_SIZE),
            self.font.color_for(self.enabled),
            self.label_rect(rect),
            TextLayout::MIDDLE_LEFT,
        );

        let button = resolve(self.button_rect(rect), self.button_border.shape(), self.button_border.rounding());
        let button_paint = self.button_gradient().brush(&*painter, orientation);
        painter.fill_path(&button, &button_paint);
        draw_border(painter, &button, &self.button_border, self.state);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Resize { rect: bounds } => {
                self.size = bounds.size;
                EventResult::Consumed
            }
            UiEvent::PointerUp { pos } if self.enabled && rect.contains(*pos) => {
                self.set_toggled(!self.toggled);
                EventResult::Consumed
            }
            _ if self.state.apply(event, rect) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    /// Moves the button one step toward the end matching `toggled`.
    fn tick(&mut self) -> bool {
        let next = if self.toggled {
            self.offset.saturating_add(OFFSET_STEP).min(OFFSET_MAX)
        } else {
            self.offset.saturating_sub(OFFSET_STEP)
        };
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    fn as_themed_mut(&mut self) -> Option<&mut dyn Themed> {
        Some(self)
    }

    fn as_background_mut(&mut self) -> Option<&mut dyn HasBackground> {
        Some(self)
    }
}

impl Themed for Toggle {
    fn apply_style(&mut self, bundle: &StyleBundle) {
        self.border = bundle.border().clone();
        self.button_border = bundle.border().clone();
        self.font = bundle.font().clone();
        self.gradients = bundle.gradients().clone();
    }
}

impl HasBackground for Toggle {
    fn set_background(&mut self, color: Color) {
        self.back_color = color;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use lacquer_engine::scene::{DrawCmd, DrawList};
    use lacquer_engine::time::Ticker;

    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 50.0, 25.0);

    fn click(t: &mut Toggle) -> EventResult {
        t.on_event(&UiEvent::PointerUp { pos: Vec2::new(10.0, 10.0) }, RECT)
    }

    // ── interaction ───────────────────────────────────────────────────────

    #[test]
    fn click_inside_flips_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut t = Toggle::new().on_change(move |v| sink.borrow_mut().push(v));

        assert!(click(&mut t).is_consumed());
        assert!(t.is_toggled());
        click(&mut t);
        assert!(!t.is_toggled());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn click_outside_is_ignored() {
        let mut t = Toggle::new();
        let r = t.on_event(&UiEvent::PointerUp { pos: Vec2::new(80.0, 10.0) }, RECT);
        assert_eq!(r, EventResult::Ignored);
        assert!(!t.is_toggled());
    }

    #[test]
    fn disabled_toggle_ignores_clicks() {
        let mut t = Toggle::new().enabled(false);
        click(&mut t);
        assert!(!t.is_toggled());
    }

    // ── animation ─────────────────────────────────────────────────────────

    #[test]
    fn tick_steps_by_ten_and_stops_at_bounds() {
        let mut t = Toggle::new();
        t.set_toggled(true);
        let mut steps = 0;
        while t.tick() {
            steps += 1;
        }
        assert_eq!(steps, 10);
        assert_eq!(t.offset(), 100);
        assert!(!t.tick());

        t.set_toggled(false);
        assert!(t.tick());
        assert_eq!(t.offset(), 90);
    }

    #[test]
    fn button_slides_between_ends() {
        let mut t = Toggle::new();
        assert_eq!(t.button_rect(RECT).origin, Vec2::new(2.0, 2.5));
        t.set_toggled(true);
        for _ in 0..5 {
            t.tick();
        }
        assert_eq!(t.button_rect(RECT).origin, Vec2::new(15.0, 2.5));
        while t.tick() {}
        assert_eq!(t.button_rect(RECT).origin, Vec2::new(28.0, 2.5));
    }

    #[test]
    fn stopping_the_ticker_freezes_the_slide() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        let mut t = Toggle::new();
        t.set_toggled(true);
        ticker.start();

        for _ in 0..ticker.advance(Duration::from_millis(30)) {
            t.tick();
        }
        assert_eq!(t.offset(), 30);

        ticker.stop();
        let frozen = t.offset();
        for _ in 0..3 {
            for _ in 0..ticker.advance(Duration::from_millis(50)) {
                t.tick();
            }
        }
        assert_eq!(t.offset(), frozen);
        assert!(t.is_animating());

        ticker.start();
        for _ in 0..ticker.advance(Duration::from_millis(70)) {
            t.tick();
        }
        assert_eq!(t.offset(), 100);
        assert!(!t.is_animating());
    }

    #[test]
    fn initial_state_skips_animation() {
        let t = Toggle::new().toggled(true);
        assert!(!t.is_animating());
        assert_eq!(t.offset(), 100);
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_order_is_track_border_label_button() {
        let t = Toggle::new().toggle_type(ToggleType::OnOff);
        let mut list = DrawList::new();
        t.paint(&mut Painter::new(&mut list), RECT);

        let kinds: Vec<&str> = list
            .in_paint_order()
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::FillPath(_) => "fill",
                DrawCmd::StrokePath(_) => "stroke",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["fill", "stroke", "text", "fill", "stroke"]);
        assert_eq!(list.texts().next().unwrap().text, "Off");
    }

    #[test]
    fn disabled_track_uses_disabled_gradient() {
        let t = Toggle::new().enabled(false);
        let mut list = DrawList::new();
        t.paint(&mut Painter::new(&mut list), RECT);
        let track = list.fills().next().unwrap();
        let expected = t.gradients.control_disabled.brush(&list, [Vec2::new(50.0, 0.0), Vec2::new(50.0, 25.0)]);
        assert_eq!(track.paint, expected);
    }

    #[test]
    fn labels_by_type() {
        assert_eq!(ToggleType::YesNo.label(true), "Yes");
        assert_eq!(ToggleType::OnOff.label(false), "Off");
        assert_eq!(ToggleType::IO.label(true), "I");
    }
}
