use lacquer_engine::paint::Color;
use lacquer_engine::text::{Font, FontStyle};

/// Font face plus the text colors for enabled and disabled widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub font: Font,
    pub fore_color: Color,
    pub fore_color_disabled: Color,
}

impl FontDescriptor {
    pub fn new(font: Font, fore_color: Color, fore_color_disabled: Color) -> Self {
        Self { font, fore_color, fore_color_disabled }
    }

    /// Text color for the given enabled state.
    #[inline]
    pub fn color_for(&self, enabled: bool) -> Color {
        if enabled { self.fore_color } else { self.fore_color_disabled }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            font: Font::new("Segoe UI", 8.25, FontStyle::REGULAR),
            fore_color: Color::rgb8(0, 0, 0),
            fore_color_disabled: Color::rgb8(131, 129, 129),
        }
    }
}
