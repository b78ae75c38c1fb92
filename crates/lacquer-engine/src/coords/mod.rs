//! Coordinate and geometry types shared by the shape resolver, the draw stream and UI.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down (positive angles therefore turn clockwise on screen)

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
