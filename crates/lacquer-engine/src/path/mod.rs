//! Closed outline paths and the shape resolver.
//!
//! A [`Path`] is a flat list of elements (move, line, circular arc, close)
//! in logical pixels. Paths are values: they are rebuilt from their inputs
//! whenever those change and are never edited in place.

mod element;
mod shape;

pub use element::{Path, PathEl};
pub use shape::{resolve, rounded_rect, ShapeKind, UnknownShape};
