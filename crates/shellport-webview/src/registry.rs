//! Window registry keyed by the core's window identifiers.

use std::collections::HashMap;

use shellport_common::PortError;
use shellport_config::schema::WindowConfig;
use shellport_platform::TargetResolver;
use tracing::{info, warn};

use crate::window::{Window, WindowFactory, WindowSurface};

pub struct WindowRegistry<S> {
    windows: HashMap<String, Window<S>>,
    focused: Option<String>,
}

impl<S: WindowSurface> WindowRegistry<S> {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            focused: None,
        }
    }

    /// Create a window under a caller-chosen identifier.
    pub fn make<F>(
        &mut self,
        factory: &mut F,
        identifier: &str,
        config: &WindowConfig,
    ) -> Result<String, PortError>
    where
        F: WindowFactory<Surface = S>,
    {
        if self.windows.contains_key(identifier) {
            return Err(PortError::DuplicateWindow(identifier.to_string()));
        }
        let surface = factory.create(identifier, config)?;
        self.windows
            .insert(identifier.to_string(), Window::new(identifier, surface, config));
        info!(window_id = identifier, total = self.windows.len(), "new window created");
        Ok(identifier.to_string())
    }

    pub fn get(&self, window_id: &str) -> Result<&Window<S>, PortError> {
        self.windows
            .get(window_id)
            .ok_or_else(|| PortError::WindowNotFound(window_id.to_string()))
    }

    pub fn get_mut(&mut self, window_id: &str) -> Result<&mut Window<S>, PortError> {
        self.windows
            .get_mut(window_id)
            .ok_or_else(|| PortError::WindowNotFound(window_id.to_string()))
    }

    pub fn contains(&self, window_id: &str) -> bool {
        self.windows.contains_key(window_id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.windows.keys().cloned().collect()
    }

    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut Window<S>> {
        self.windows.values_mut()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Record a focus change reported by the native layer.
    pub fn set_focus(&mut self, window_id: &str, focused: bool) {
        if focused {
            self.focused = Some(window_id.to_string());
        } else if self.focused.as_deref() == Some(window_id) {
            self.focused = None;
        }
    }

    /// The focused window, if it is still registered.
    pub fn active(&self) -> Option<&str> {
        match self.focused.as_deref() {
            Some(id) if self.windows.contains_key(id) => Some(id),
            _ => {
                warn!(windows = self.windows.len(), "no active window found");
                None
            }
        }
    }
}

impl<S: WindowSurface> Default for WindowRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WindowSurface> TargetResolver for WindowRegistry<S> {
    type Target = Window<S>;

    fn resolve(&mut self, window_id: &str) -> Option<&mut Window<S>> {
        self.windows.get_mut(window_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFactory, MockSurface};

    fn registry_with(ids: &[&str]) -> WindowRegistry<MockSurface> {
        let mut registry = WindowRegistry::new();
        let mut factory = MockFactory::default();
        for id in ids {
            registry
                .make(&mut factory, id, &WindowConfig::default())
                .unwrap();
        }
        registry
    }

    #[test]
    fn make_registers_window() {
        let registry = registry_with(&["w1"]);
        assert!(registry.contains("w1"));
        let window = registry.get("w1").unwrap();
        assert!(window.exists());
        assert_eq!(window.minibuffer().height(), 20);
        assert_eq!(window.minibuffer_top(), 480.0);
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let mut registry = registry_with(&["w1"]);
        let mut factory = MockFactory::default();
        let err = registry
            .make(&mut factory, "w1", &WindowConfig::default())
            .unwrap_err();
        assert_eq!(err, PortError::DuplicateWindow("w1".into()));
        assert_eq!(factory.created, 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn factory_failure_registers_nothing() {
        let mut registry: WindowRegistry<MockSurface> = WindowRegistry::new();
        let mut factory = MockFactory {
            fail: true,
            ..Default::default()
        };
        assert!(registry
            .make(&mut factory, "w1", &WindowConfig::default())
            .is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_window_lookup() {
        let mut registry = registry_with(&[]);
        assert_eq!(
            registry.get_mut("ghost").err(),
            Some(PortError::WindowNotFound("ghost".into()))
        );
    }

    #[test]
    fn delete_hides_but_keeps_entry() {
        let mut registry = registry_with(&["w1"]);
        assert!(registry.get_mut("w1").unwrap().delete());
        assert!(registry.contains("w1"));
        assert!(!registry.get("w1").unwrap().exists());
    }

    #[test]
    fn active_follows_focus() {
        let mut registry = registry_with(&["w1", "w2"]);
        assert_eq!(registry.active(), None);
        registry.set_focus("w2", true);
        assert_eq!(registry.active(), Some("w2"));
        registry.set_focus("w1", false);
        assert_eq!(registry.active(), Some("w2"));
        registry.set_focus("w2", false);
        assert_eq!(registry.active(), None);
    }

    #[test]
    fn title_and_minibuffer_height() {
        let mut registry = registry_with(&["w1"]);
        let window = registry.get_mut("w1").unwrap();
        assert_eq!(window.set_title("hello"), "hello");
        assert_eq!(window.surface().title, "hello");
        assert!(window.set_minibuffer_height(48).unwrap());
        assert_eq!(window.minibuffer().height(), 48);
        assert_eq!(window.surface().minibuffer_height, 48);
        assert_eq!(window.minibuffer_top(), 452.0);
    }
}
