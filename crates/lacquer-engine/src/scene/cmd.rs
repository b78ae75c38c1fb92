use crate::scene::shapes::path::{FillPathCmd, StrokePathCmd};
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add the matching method to [`Surface`](super::Surface)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(FillPathCmd),
    StrokePath(StrokePathCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// The stroke payload, if this is a stroke.
    #[inline]
    pub fn as_stroke(&self) -> Option<&StrokePathCmd> {
        match self {
            DrawCmd::StrokePath(s) => Some(s),
            _ => None,
        }
    }

    /// The fill payload, if this is a fill.
    #[inline]
    pub fn as_fill(&self) -> Option<&FillPathCmd> {
        match self {
            DrawCmd::FillPath(f) => Some(f),
            _ => None,
        }
    }

    /// The text payload, if this is text.
    #[inline]
    pub fn as_text(&self) -> Option<&TextCmd> {
        match self {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        }
    }
}
