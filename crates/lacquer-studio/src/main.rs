//! Headless demo: themes a small widget tree, drives it with pointer events
//! and animation ticks, and logs the recorded draw stream.
//!
//! ```text
//! lacquer-studio [THEME_ID] [THEME_FILE.json]
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use lacquer_engine::logging::{init_logging, LoggingConfig};
use lacquer_engine::scene::DrawCmd;
use lacquer_engine::time::Ticker;
use lacquer_ui::prelude::*;
use log::info;

const WINDOW: Rect = Rect::new(0.0, 0.0, 220.0, 180.0);
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let theme_id = args.next().unwrap_or_else(|| DEFAULT_THEME.to_string());

    let mut themes = StyleManager::new();
    if let Some(path) = args.next() {
        let ids = themes.load_file(&path).with_context(|| format!("loading themes from {path}"))?;
        info!("registered themes from {path}: {}", ids.join(", "));
    }
    info!("available themes: {}", themes.theme_ids().join(", "));

    let bundle = themes.resolve_or_default(&theme_id);

    let mut root = GroupBox::new("Connection")
        .child(Panel::new().child(Toggle::new().toggle_type(ToggleType::OnOff).on_change(|on| info!("toggle -> {on}"))));
    StyleManager::apply_tree(&mut root, &bundle);
    root.on_event(&UiEvent::Resize { rect: WINDOW }, WINDOW);

    let mut list = DrawList::new();
    paint(&root, &mut list, "initial");

    // Hover over the toggle, then click it.
    let toggle_pos = Vec2::new(WINDOW.origin.x + 20.0, WINDOW.origin.y + 45.0);
    root.on_event(&UiEvent::PointerEnter, WINDOW);
    root.on_event(&UiEvent::PointerMove { pos: toggle_pos }, WINDOW);
    root.on_event(&UiEvent::PointerUp { pos: toggle_pos }, WINDOW);
    paint(&root, &mut list, "clicked");

    // Run the slide animation until the toggle settles.
    let mut ticker = Ticker::new(Duration::from_millis(15));
    ticker.start();
    let mut frames = 0;
    while animate(&mut root, ticker.advance(FRAME)) {
        frames += 1;
    }
    ticker.stop();
    info!("animation settled after {frames} frame(s)");
    paint(&root, &mut list, "settled");

    root.on_event(&UiEvent::PointerLeave, WINDOW);
    paint(&root, &mut list, "left");

    Ok(())
}

/// Runs `ticks` animation steps over the whole tree.
fn animate(root: &mut GroupBox, ticks: u32) -> bool {
    (0..ticks).fold(false, |repaint, _| root.tick() | repaint)
}

fn paint(root: &GroupBox, list: &mut DrawList, label: &str) {
    list.clear();
    root.paint(&mut Painter::new(list), WINDOW);

    info!("frame '{label}': {} command(s)", list.len());
    for item in list.in_paint_order() {
        match &item.cmd {
            DrawCmd::FillPath(cmd) => log::debug!("  z={:<3} fill   {:?}", item.z.0, cmd.path.bounds()),
            DrawCmd::StrokePath(cmd) => {
                log::debug!("  z={:<3} stroke {:?} w={}", item.z.0, cmd.path.bounds(), cmd.stroke.width)
            }
            DrawCmd::Text(cmd) => log::debug!("  z={:<3} text   {:?}", item.z.0, cmd.text),
        }
    }
}
