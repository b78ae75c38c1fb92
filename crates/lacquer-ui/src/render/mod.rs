//! The paint pipeline shared by every widget: resolve an outline, fill it,
//! then stroke it with [`draw_border`].

mod border;

pub use border::{border_color, draw_border};
pub use lacquer_engine::paint::build_gradient;
