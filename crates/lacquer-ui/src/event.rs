use lacquer_engine::coords::{Rect, Vec2};
use log::trace;

/// Input events the host delivers to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer entered the widget.
    PointerEnter,
    /// Pointer left the widget.
    PointerLeave,
    /// Pointer moved to `pos`. Hosts that do not track enter/leave send this instead.
    PointerMove { pos: Vec2 },
    /// Primary button released at `pos`.
    PointerUp { pos: Vec2 },
    /// The widget was given new bounds.
    Resize { rect: Rect },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Pointer interaction state of one widget. Drives border color selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Normal,
    Hover,
}

impl InteractionState {
    /// Updates the state for `event` over a widget at `rect`.
    ///
    /// Returns `true` when the state changed and the widget needs a repaint.
    pub fn apply(&mut self, event: &UiEvent, rect: Rect) -> bool {
        let next = match event {
            UiEvent::PointerEnter => InteractionState::Hover,
            UiEvent::PointerLeave => InteractionState::Normal,
            UiEvent::PointerMove { pos } if rect.contains(*pos) => InteractionState::Hover,
            UiEvent::PointerMove { .. } => InteractionState::Normal,
            UiEvent::PointerUp { .. } | UiEvent::Resize { .. } => return false,
        };
        if next == *self {
            return false;
        }
        trace!("interaction {:?} -> {:?}", self, next);
        *self = next;
        true
    }
}
