use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::{Font, TextLayout};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: Font,
    pub color: Color,
    /// Layout box in logical pixels; `layout` positions the run inside it.
    pub bounds: Rect,
    pub layout: TextLayout,
}

impl DrawList {
    /// Records a text draw command. Empty strings record nothing.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: &Font,
        color: Color,
        bounds: Rect,
        layout: TextLayout,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Text(TextCmd { text, font: font.clone(), color, bounds, layout }));
    }
}
