//! Font and text-layout descriptions carried by text draw commands.
//!
//! The engine does not shape or rasterize text; the host backend resolves
//! `Font::family` against its own font database when replaying the stream.

/// Style flags for a font face.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle { bold: false, italic: false, underline: false };
    pub const BOLD: FontStyle = FontStyle { bold: true, italic: false, underline: false };
}

/// A font request: family name, size in points, and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub style: FontStyle,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle) -> Self {
        Self { family: family.into(), size, style }
    }

    /// Same face at a different size.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self { family: self.family.clone(), size, style: self.style }
    }
}

/// Alignment of text along one axis of its layout box.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Near,
    Center,
    Far,
}

/// Horizontal and vertical alignment of a text run inside its bounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextLayout {
    pub horizontal: TextAlign,
    pub vertical: TextAlign,
}

impl TextLayout {
    pub const CENTERED: TextLayout =
        TextLayout { horizontal: TextAlign::Center, vertical: TextAlign::Center };

    /// Left-aligned, vertically centered.
    pub const MIDDLE_LEFT: TextLayout =
        TextLayout { horizontal: TextAlign::Near, vertical: TextAlign::Center };
}
