use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use crate::widget::{Element, Widget};

use super::builtin::builtin_themes;
use super::config::ThemeFile;
use super::{StyleBundle, ThemeError};

/// Theme id every lookup falls back to.
pub const DEFAULT_THEME: &str = "default";

/// Capability of a widget that takes its look from a [`StyleBundle`].
///
/// Implementations copy what they need out of `bundle` into their own
/// descriptors. Applying the same bundle twice must leave the widget in the
/// same state as applying it once.
pub trait Themed {
    fn apply_style(&mut self, bundle: &StyleBundle);
}

/// Registry of named themes.
///
/// Starts with the built-in themes (`default`, `dark`, `neo`); more can be
/// registered in code or loaded from JSON. Lookups return owned copies, so
/// registering over an id never changes widgets styled before.
#[derive(Debug, Clone)]
pub struct StyleManager {
    themes: BTreeMap<String, StyleBundle>,
}

impl StyleManager {
    pub fn new() -> Self {
        let themes = builtin_themes().into_iter().map(|(id, b)| (id.to_string(), b)).collect();
        Self { themes }
    }

    /// Looks up a theme by id.
    pub fn resolve(&self, theme_id: &str) -> Result<StyleBundle, ThemeError> {
        self.themes
            .get(theme_id)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme(theme_id.to_string()))
    }

    /// Like [`resolve`](Self::resolve), but falls back to [`DEFAULT_THEME`].
    pub fn resolve_or_default(&self, theme_id: &str) -> StyleBundle {
        match self.resolve(theme_id) {
            Ok(bundle) => bundle,
            Err(e) => {
                warn!("{e}; falling back to '{DEFAULT_THEME}'");
                self.default_bundle()
            }
        }
    }

    /// The current `default` theme.
    pub fn default_bundle(&self) -> StyleBundle {
        self.themes.get(DEFAULT_THEME).cloned().unwrap_or_default()
    }

    /// Adds or replaces a theme. Returns the bundle previously under `id`.
    pub fn register(&mut self, id: impl Into<String>, bundle: StyleBundle) -> Option<StyleBundle> {
        let id = id.into();
        debug!("registering theme '{id}'");
        self.themes.insert(id, bundle)
    }

    pub fn contains(&self, theme_id: &str) -> bool {
        self.themes.contains_key(theme_id)
    }

    /// Registered ids in sorted order.
    pub fn theme_ids(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Registers every theme in a JSON theme document.
    ///
    /// All themes are validated before any is registered; on error the
    /// registry is unchanged. Returns the registered ids.
    pub fn register_json(&mut self, json: &str) -> Result<Vec<String>, ThemeError> {
        let file = ThemeFile::from_json(json)?;
        let base = self.default_bundle();

        let bundles = file
            .themes
            .into_iter()
            .map(|(id, def)| def.into_bundle(&id, &base).map(|b| (id, b)))
            .collect::<Result<Vec<_>, _>>()?;

        let ids = bundles.iter().map(|(id, _)| id.clone()).collect();
        for (id, bundle) in bundles {
            self.register(id, bundle);
        }
        Ok(ids)
    }

    /// Reads a JSON theme file and registers its themes.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>, ThemeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ThemeError::Io { path: path.to_path_buf(), source })?;
        let ids = self.register_json(&json)?;
        debug!("loaded {} theme(s) from {}", ids.len(), path.display());
        Ok(ids)
    }

    /// Copies `bundle` into `target`.
    pub fn apply_to<T: Themed + ?Sized>(target: &mut T, bundle: &StyleBundle) {
        target.apply_style(bundle);
    }

    /// Applies `bundle` to `root` and every themed descendant.
    ///
    /// Children are styled before their parent so container propagation
    /// (e.g. background color) has the last word.
    pub fn apply_tree(root: &mut dyn Widget, bundle: &StyleBundle) {
        root.for_each_child_mut(&mut |child: &mut Element| Self::apply_tree(child.widget_mut(), bundle));
        if let Some(themed) = root.as_themed_mut() {
            themed.apply_style(bundle);
        }
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacquer_engine::paint::Color;

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn builtins_are_registered() {
        let m = StyleManager::new();
        assert_eq!(m.theme_ids(), vec!["dark", "default", "neo"]);
        assert!(m.resolve(DEFAULT_THEME).is_ok());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let m = StyleManager::new();
        match m.resolve("unknown-theme") {
            Err(ThemeError::UnknownTheme(id)) => assert_eq!(id, "unknown-theme"),
            other => panic!("expected UnknownTheme, got {other:?}"),
        }
    }

    #[test]
    fn resolve_or_default_falls_back() {
        let m = StyleManager::new();
        assert_eq!(m.resolve_or_default("nope"), m.resolve(DEFAULT_THEME).unwrap());
    }

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut m = StyleManager::new();
        let custom = StyleBundle::default().with_backgrounds(vec![Color::black()]);
        assert!(m.register("custom", custom.clone()).is_none());
        assert_eq!(m.register("custom", StyleBundle::default()), Some(custom));
    }

    #[test]
    fn resolved_bundle_is_a_copy() {
        let mut m = StyleManager::new();
        let before = m.resolve("dark").unwrap();
        m.register("dark", StyleBundle::default());
        assert_ne!(before, m.resolve("dark").unwrap());
    }

    #[test]
    fn json_inherits_from_default() {
        let mut m = StyleManager::new();
        let ids = m.register_json(r##"{"themes":{"ocean":{"backgrounds":["#F0F4F8"]}}}"##).unwrap();
        assert_eq!(ids, vec!["ocean".to_string()]);
        let ocean = m.resolve("ocean").unwrap();
        assert_eq!(ocean.border(), m.default_bundle().border());
        assert_eq!(ocean.background(0), Color::rgb8(0xF0, 0xF4, 0xF8));
    }

    #[test]
    fn invalid_json_registers_nothing() {
        let mut m = StyleManager::new();
        let json = r##"{"themes":{"a":{"backgrounds":["#000000"]},"b":{"backgrounds":["nope"]}}}"##;
        assert!(m.register_json(json).is_err());
        assert!(!m.contains("a"));
        assert!(!m.contains("b"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut m = StyleManager::new();
        let err = m.load_file("/definitely/not/here/theme.json").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
