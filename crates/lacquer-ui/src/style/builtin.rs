//! Themes available without any configuration.

use lacquer_engine::paint::Color;
use lacquer_engine::path::ShapeKind;
use lacquer_engine::text::{Font, FontStyle};

use super::{BorderDescriptor, ControlGradients, FontDescriptor, GradientDescriptor, StyleBundle};

pub(super) fn builtin_themes() -> Vec<(&'static str, StyleBundle)> {
    vec![("default", StyleBundle::default()), ("dark", dark()), ("neo", neo())]
}

fn dark() -> StyleBundle {
    let border = BorderDescriptor::new()
        .with_color(Color::rgb8(60, 60, 60))
        .with_hover_color(Color::rgb8(0, 122, 204));
    let font = FontDescriptor::new(
        Font::new("Segoe UI", 8.25, FontStyle::REGULAR),
        Color::rgb8(220, 220, 220),
        Color::rgb8(110, 110, 110),
    );
    let gradients = ControlGradients {
        control_enabled: GradientDescriptor::two_tone(Color::rgb8(80, 80, 84), Color::rgb8(62, 62, 66), 90.0),
        control_disabled: GradientDescriptor::two_tone(Color::rgb8(51, 51, 55), Color::rgb8(45, 45, 48), 90.0),
        progress: GradientDescriptor::two_tone(Color::rgb8(0, 122, 204), Color::rgb8(0, 96, 160), 90.0),
    };
    StyleBundle::new(border, font, vec![Color::rgb8(45, 45, 48), Color::rgb8(37, 37, 38)]).with_gradients(gradients)
}

fn neo() -> StyleBundle {
    let border = BorderDescriptor::new()
        .with_color(Color::rgb8(35, 35, 35))
        .with_hover_color(Color::rgb8(255, 128, 0))
        .with_thickness(2)
        .with_rounding(2)
        .with_shape(ShapeKind::Rectangle);
    let font = FontDescriptor::new(
        Font::new("Segoe UI", 9.0, FontStyle::BOLD),
        Color::rgb8(20, 20, 20),
        Color::rgb8(140, 140, 140),
    );
    let gradients = ControlGradients {
        control_enabled: GradientDescriptor::solid(Color::rgb8(255, 255, 255)),
        control_disabled: GradientDescriptor::solid(Color::rgb8(210, 210, 210)),
        progress: GradientDescriptor::two_tone(Color::rgb8(255, 160, 40), Color::rgb8(255, 128, 0), 0.0),
    };
    StyleBundle::new(border, font, vec![Color::rgb8(255, 255, 255), Color::rgb8(255, 214, 0)]).with_gradients(gradients)
}
