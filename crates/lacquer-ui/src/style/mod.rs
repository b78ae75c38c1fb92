//! Visual style: descriptors, theme bundles, and the style manager.
//!
//! Widgets own copies of descriptors. A [`StyleBundle`] is a snapshot;
//! applying it copies fields into the widget and keeps no link back, so
//! later changes to a bundle never reach widgets styled earlier.

mod border;
mod builtin;
mod bundle;
mod config;
mod error;
mod font;
mod gradient;
mod manager;

pub use border::{BorderDescriptor, BorderLimits};
pub use bundle::{ControlGradients, StyleBundle};
pub use error::{StyleError, ThemeError};
pub use font::FontDescriptor;
pub use gradient::GradientDescriptor;
pub use manager::{StyleManager, Themed, DEFAULT_THEME};
