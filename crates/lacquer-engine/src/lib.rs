//! Lacquer engine crate.
//!
//! Renderer-agnostic building blocks for custom-drawn widgets: geometry,
//! paint sources, closed outline paths, and the recorded draw stream that a
//! host graphics backend replays.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod scene;
pub mod text;
pub mod time;
