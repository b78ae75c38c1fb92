use crate::paint::Paint;
use crate::path::Path;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Filled path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPathCmd {
    pub path: Path,
    pub paint: Paint,
}

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub path: Path,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a path fill. Empty paths record nothing.
    pub fn push_fill_path(&mut self, z: ZIndex, path: &Path, paint: Paint) {
        if path.is_empty() {
            return;
        }
        self.push(z, DrawCmd::FillPath(FillPathCmd { path: path.clone(), paint }));
    }

    /// Records a path stroke. Empty paths and non-positive widths record nothing.
    pub fn push_stroke_path(&mut self, z: ZIndex, path: &Path, stroke: Stroke) {
        if path.is_empty() || stroke.width.is_nan() || stroke.width <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::StrokePath(StrokePathCmd { path: path.clone(), stroke }));
    }
}
