//! Built-in widgets. Each composes the shared pipeline: resolve the
//! outline, fill it, then stroke it through [`draw_border`](crate::render::draw_border).

pub mod group_box;
pub mod panel;
pub mod toggle;

pub use group_box::GroupBox;
pub use panel::Panel;
pub use toggle::{Toggle, ToggleType};

use lacquer_engine::coords::Rect;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::widget::Element;

/// Bounds of a container's child: its measured size at the top-left of `inner`.
pub(crate) fn child_rect(child: &Element, inner: Rect) -> Rect {
    Rect::from_origin_size(inner.origin, child.measure(Constraints::loose(inner.size)))
}

/// Forwards `event` from a container to its child laid out inside `inner`.
///
/// `PointerEnter` stays with the container: entering it does not mean the
/// pointer is over the child. Resizes are not forwarded; children keep
/// their own size.
pub(crate) fn route_to_child(child: Option<&mut Element>, event: &UiEvent, inner: Rect) -> EventResult {
    let Some(child) = child else {
        return EventResult::Ignored;
    };
    match event {
        UiEvent::PointerEnter | UiEvent::Resize { .. } => EventResult::Ignored,
        _ => {
            let rect = child_rect(child, inner);
            child.on_event(event, rect)
        }
    }
}
