//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - define the [`Surface`] contract widgets paint against
//! - keep payload-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod list;
mod surface;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::path::{FillPathCmd, StrokePathCmd};
pub use shapes::text::TextCmd;
pub use shapes::Stroke;
pub use surface::Surface;
pub use z_index::ZIndex;
