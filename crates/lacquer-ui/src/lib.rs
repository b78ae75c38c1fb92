//! Lacquer UI: self-drawn, themeable widgets on top of `lacquer-engine`.
//!
//! Every widget owns copies of its descriptors (border, font, colors,
//! gradients) and repaints from them each cycle through one shared pipeline:
//!
//! ```text
//! StyleManager ─▶ widget descriptors ─▶ path::resolve ─▶ fill ─▶ render::draw_border ─▶ Surface
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lacquer_ui::prelude::*;
//!
//! let themes = StyleManager::new();
//! let mut root = GroupBox::new("Settings").child(Toggle::new());
//! StyleManager::apply_tree(&mut root, &themes.resolve_or_default("dark"));
//!
//! let mut list = DrawList::new();
//! root.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 220.0, 180.0));
//! // Replay `list.in_paint_order()` against the host's 2D API.
//! ```

pub mod constraints;
pub mod event;
pub mod painter;
pub mod render;
pub mod style;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI; import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::event::{EventResult, InteractionState, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::render::{border_color, build_gradient, draw_border};
    pub use crate::style::{
        BorderDescriptor, BorderLimits, ControlGradients, FontDescriptor, GradientDescriptor, StyleBundle,
        StyleError, StyleManager, ThemeError, Themed, DEFAULT_THEME,
    };
    pub use crate::widget::{Element, HasBackground, Widget};
    pub use crate::widgets::{GroupBox, Panel, Toggle, ToggleType};

    // Re-export the engine primitives everyone needs.
    pub use lacquer_engine::coords::{CornerRadii, Rect, Vec2};
    pub use lacquer_engine::paint::{Color, ColorStop, LinearGradient, Paint};
    pub use lacquer_engine::path::{resolve, Path, PathEl, ShapeKind};
    pub use lacquer_engine::scene::{DrawList, Stroke, Surface};
    pub use lacquer_engine::text::{Font, FontStyle, TextLayout};
}
