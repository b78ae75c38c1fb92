pub(crate) mod path;
pub(crate) mod text;

use crate::paint::Color;

/// Pen used to outline a path.
///
/// The stroke is centered on the path. A width of zero records nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
