//! Window management: the collaborator interface and an in-memory registry.

use std::collections::{HashMap, HashSet};

use super::Window;
use crate::error::{Error, ObjectKind, Result};
use crate::render::{Point, Rect, Size};

/// Window lookup, creation and geometry updates, as used by the look engine.
pub trait WindowManager {
    fn get_window(&self, name: &str) -> Option<&Window>;

    fn get_window_mut(&mut self, name: &str) -> Option<&mut Window>;

    /// Factory: create and register a window. Fails on a name collision.
    fn create_window(&mut self, widget_type: &str, name: &str) -> Result<&mut Window>;

    fn destroy_window(&mut self, name: &str) -> Result<Window>;

    fn is_window_present(&self, name: &str) -> bool {
        self.get_window(name).is_some()
    }

    /// Returns false when no such window exists.
    fn move_to(&mut self, name: &str, position: Point) -> bool {
        match self.get_window_mut(name) {
            Some(w) => {
                w.position = position;
                true
            }
            None => false,
        }
    }

    /// Returns false when no such window exists.
    fn resize_to(&mut self, name: &str, size: Size) -> bool {
        match self.get_window_mut(name) {
            Some(w) => {
                w.size = size;
                true
            }
            None => false,
        }
    }
}

/// Registry of windows keyed by name.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: HashMap<String, Window>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing window.
    pub fn register(&mut self, window: Window) -> Result<()> {
        if self.windows.contains_key(&window.name) {
            return Err(Error::duplicate(ObjectKind::Window, window.name));
        }
        if let Some(parent) = window.parent.as_deref().and_then(|p| self.windows.get_mut(p)) {
            parent.children.push(window.name.clone());
        }
        self.windows.insert(window.name.clone(), window);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All window names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.windows.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Screen rect of a window: its area offset by every ancestor's position.
    ///
    /// Ancestors missing from the registry end the walk; a parent cycle is cut
    /// at the first repeated window.
    pub fn screen_rect(&self, name: &str) -> Option<Rect> {
        let window = self.windows.get(name)?;
        let mut rect = window.area();
        let mut seen = HashSet::from([name]);
        let mut parent = window.parent.as_deref();

        while let Some(p) = parent {
            if !seen.insert(p) {
                tracing::warn!("parent cycle through window {p}");
                break;
            }
            let Some(pw) = self.windows.get(p) else { break };
            rect = rect.offset(pw.position.x, pw.position.y);
            parent = pw.parent.as_deref();
        }
        Some(rect)
    }
}

impl WindowManager for WindowRegistry {
    fn get_window(&self, name: &str) -> Option<&Window> {
        self.windows.get(name)
    }

    fn get_window_mut(&mut self, name: &str) -> Option<&mut Window> {
        self.windows.get_mut(name)
    }

    fn create_window(&mut self, widget_type: &str, name: &str) -> Result<&mut Window> {
        if self.windows.contains_key(name) {
            return Err(Error::duplicate(ObjectKind::Window, name));
        }
        Ok(self
            .windows
            .entry(name.to_string())
            .or_insert_with(|| Window::new(widget_type, name)))
    }

    /// Remove a window together with its auto-generated children.
    fn destroy_window(&mut self, name: &str) -> Result<Window> {
        let window = self
            .windows
            .remove(name)
            .ok_or_else(|| Error::not_found(ObjectKind::Window, name))?;

        if let Some(parent) = window.parent.as_deref().and_then(|p| self.windows.get_mut(p)) {
            parent.children.retain(|c| c != name);
        }
        for child in &window.children {
            if self.windows.get(child).is_some_and(|c| c.auto_generated) {
                let _ = self.destroy_window(child);
            }
        }
        Ok(window)
    }
}
