use lacquer_ui::prelude::*;

fn paint_into(widget: &dyn Widget, rect: Rect) -> DrawList {
    let mut list = DrawList::new();
    widget.paint(&mut Painter::new(&mut list), rect);
    list
}

// ── theme lookup ──────────────────────────────────────────────────────────

#[test]
fn unknown_theme_falls_back_to_default() {
    let themes = StyleManager::new();
    assert!(matches!(themes.resolve("unknown-theme"), Err(ThemeError::UnknownTheme(_))));
    assert!(themes.resolve(DEFAULT_THEME).is_ok());
    assert_eq!(themes.resolve_or_default("unknown-theme"), themes.default_bundle());
}

// ── applying themes ───────────────────────────────────────────────────────

#[test]
fn applying_twice_is_idempotent() {
    let themes = StyleManager::new();
    let dark = themes.resolve("dark").unwrap();
    let rect = Rect::new(0.0, 0.0, 220.0, 180.0);

    let mut once = GroupBox::new("Network").child(Toggle::new());
    StyleManager::apply_tree(&mut once, &dark);

    let mut twice = GroupBox::new("Network").child(Toggle::new());
    StyleManager::apply_tree(&mut twice, &dark);
    StyleManager::apply_tree(&mut twice, &dark);

    assert_eq!(paint_into(&once, rect).items(), paint_into(&twice, rect).items());
    assert_eq!(once.border_descriptor(), dark.border());
}

#[test]
fn styled_widgets_keep_their_copy() {
    let mut themes = StyleManager::new();
    let mut panel = Panel::new();
    StyleManager::apply_to(&mut panel, &themes.resolve("dark").unwrap());

    themes.register("dark", StyleBundle::default());
    assert_eq!(panel.panel_background(), Color::rgb8(45, 45, 48));
}

#[test]
fn tree_application_reaches_nested_children() {
    let themes = StyleManager::new();
    let neo = themes.resolve("neo").unwrap();
    let mut root = GroupBox::new("Outer").child(Panel::new().child(Toggle::new()));
    StyleManager::apply_tree(&mut root, &neo);

    let list = paint_into(&root, Rect::new(0.0, 0.0, 220.0, 180.0));
    // Every outline is stroked with the theme's border.
    assert!(list.strokes().all(|s| s.stroke.width == neo.border().thickness() as f32));
    assert!(list.strokes().all(|s| s.stroke.color == neo.border().color()));
}

// ── border rendering ──────────────────────────────────────────────────────

#[test]
fn invisible_border_records_no_stroke() {
    let mut panel = Panel::new();
    panel.border_mut().set_visible(false);
    let list = paint_into(&panel, Rect::new(0.0, 0.0, 100.0, 40.0));
    assert_eq!(list.strokes().count(), 0);
    assert_eq!(list.fills().count(), 1);
}

#[test]
fn hover_selects_hover_color() {
    let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    let mut panel = Panel::new();
    let normal = paint_into(&panel, rect).strokes().next().unwrap().stroke.color;
    assert_eq!(normal, panel.border_descriptor().color());

    panel.on_event(&UiEvent::PointerMove { pos: Vec2::new(50.0, 20.0) }, rect);
    let hovered = paint_into(&panel, rect).strokes().next().unwrap().stroke.color;
    assert_eq!(hovered, panel.border_descriptor().hover_color());

    panel.border_mut().set_hover_visible(false);
    let muted = paint_into(&panel, rect).strokes().next().unwrap().stroke.color;
    assert_eq!(muted, panel.border_descriptor().color());
}

// ── geometry ──────────────────────────────────────────────────────────────

#[test]
fn oversized_rounding_makes_a_pill() {
    let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    let path = resolve(rect, ShapeKind::Rounded, 50);

    assert!(path.is_closed());
    let b = path.bounds().unwrap();
    assert!(b.min().approx_eq(rect.min(), 1e-3) && b.max().approx_eq(rect.max(), 1e-3));
    assert!(path.elements().iter().any(|el| matches!(el, PathEl::Arc { radius, .. } if *radius == 20.0)));
    // Only the long sides have straight runs.
    let segments = path.line_segments();
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|(a, b)| (a.y - b.y).abs() < 1e-4));
}

#[test]
fn rectangle_shape_ignores_rounding() {
    let rect = Rect::new(5.0, 5.0, 30.0, 20.0);
    assert_eq!(resolve(rect, ShapeKind::Rectangle, 12), Path::rect(rect));
}
