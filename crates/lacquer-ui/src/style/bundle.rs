use lacquer_engine::paint::Color;

use super::{BorderDescriptor, FontDescriptor, GradientDescriptor};

/// Gradients shared by controls that paint a track and a thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlGradients {
    /// Thumb / button face on an enabled control.
    pub control_enabled: GradientDescriptor,
    /// Track and thumb on a disabled control.
    pub control_disabled: GradientDescriptor,
    /// Filled track on an enabled control.
    pub progress: GradientDescriptor,
}

impl Default for ControlGradients {
    fn default() -> Self {
        Self {
            control_enabled: GradientDescriptor::two_tone(Color::rgb8(226, 226, 226), Color::rgb8(250, 250, 250), 90.0),
            control_disabled: GradientDescriptor::two_tone(Color::rgb8(243, 243, 243), Color::rgb8(233, 233, 233), 90.0),
            progress: GradientDescriptor::two_tone(Color::rgb8(89, 169, 222), Color::rgb8(50, 138, 204), 90.0),
        }
    }
}

/// A named theme's descriptors, applied to widgets as one unit.
///
/// Backgrounds are indexed: 0 is the normal background, 1 the alternate
/// (title bars, headers). Once built a bundle is not changed in place;
/// widgets copy out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBundle {
    border: BorderDescriptor,
    font: FontDescriptor,
    backgrounds: Vec<Color>,
    gradients: ControlGradients,
}

impl StyleBundle {
    pub fn new(border: BorderDescriptor, font: FontDescriptor, backgrounds: Vec<Color>) -> Self {
        Self { border, font, backgrounds, gradients: ControlGradients::default() }
    }

    pub fn with_border(mut self, border: BorderDescriptor) -> Self {
        self.border = border;
        self
    }

    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    pub fn with_backgrounds(mut self, backgrounds: Vec<Color>) -> Self {
        self.backgrounds = backgrounds;
        self
    }

    pub fn with_gradients(mut self, gradients: ControlGradients) -> Self {
        self.gradients = gradients;
        self
    }

    #[inline]
    pub fn border(&self) -> &BorderDescriptor {
        &self.border
    }

    #[inline]
    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    #[inline]
    pub fn gradients(&self) -> &ControlGradients {
        &self.gradients
    }

    #[inline]
    pub fn backgrounds(&self) -> &[Color] {
        &self.backgrounds
    }

    /// Background at `index`, falling back to the last entry (transparent if none).
    pub fn background(&self, index: usize) -> Color {
        self.backgrounds
            .get(index)
            .or_else(|| self.backgrounds.last())
            .copied()
            .unwrap_or(Color::transparent())
    }
}

impl Default for StyleBundle {
    fn default() -> Self {
        Self::new(
            BorderDescriptor::default(),
            FontDescriptor::default(),
            vec![Color::rgb8(243, 243, 243), Color::rgb8(232, 232, 232)],
        )
    }
}
