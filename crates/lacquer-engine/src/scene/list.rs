use super::{DrawCmd, FillPathCmd, StrokePathCmd, TextCmd, ZIndex};

/// A single recorded draw item.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    /// Insertion index; breaks ties between items on the same layer.
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one paint pass.
///
/// Widgets paint into a `DrawList` (directly or through a painter) and the
/// host replays it in paint order against its native 2D API. Recording keeps
/// the widget layer independent of any particular backend and makes every
/// paint observable in tests.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { z, order, cmd });
    }

    /// Items in paint order (back-to-front): by layer, then insertion.
    pub fn in_paint_order(&self) -> Vec<&DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| (item.z, item.order));
        sorted
    }

    pub fn fills(&self) -> impl Iterator<Item = &FillPathCmd> {
        self.items.iter().filter_map(|i| i.cmd.as_fill())
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StrokePathCmd> {
        self.items.iter().filter_map(|i| i.cmd.as_stroke())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|i| i.cmd.as_text())
    }
}
