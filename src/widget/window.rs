//! Window - the base widget state every look-aware behavior builds on.

use std::collections::HashMap;

use crate::falagard::LookTarget;
use crate::falagard::condition::parse_bool;
use crate::render::{Point, Rect, Size};

/// Properties answered from window state rather than the property map.
const BUILTIN_PROPERTIES: &[&str] = &["Name", "Type", "LookNFeel", "Disabled", "Active", "Visible"];

/// Base widget: identity, geometry, logical state flags and properties.
#[derive(Debug, Clone, Default)]
pub struct Window {
    /// Unique window name.
    pub name: String,
    /// Widget type name, e.g. `Falagard/FrameWindow`.
    pub widget_type: String,
    /// Name of the assigned look; resolved through the look registry on use.
    pub look_name: String,
    /// Parent window name.
    pub parent: Option<String>,
    /// Child window names.
    pub children: Vec<String>,
    /// Position relative to the parent.
    pub position: Point,
    pub size: Size,
    pub enabled: bool,
    pub active: bool,
    pub visible: bool,
    /// Created from a look's child component rather than by the application.
    pub auto_generated: bool,
    /// Look-defined and user properties.
    pub properties: HashMap<String, String>,
}

impl Window {
    pub fn new(widget_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            widget_type: widget_type.into(),
            enabled: true,
            visible: true,
            ..Self::default()
        }
    }

    pub fn with_look(mut self, look: impl Into<String>) -> Self {
        self.look_name = look.into();
        self
    }

    pub fn with_area(mut self, rect: Rect) -> Self {
        self.set_area(rect);
        self
    }

    /// Rect in parent coordinates.
    pub fn area(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }

    pub fn set_area(&mut self, rect: Rect) {
        self.position = rect.position();
        self.size = rect.size();
    }

    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }

    /// Set a property. Builtin names update window state instead of the map.
    pub fn set_property(&mut self, name: &str, value: &str) {
        match name {
            "Disabled" => self.enabled = !parse_bool(value),
            "Active" => self.active = parse_bool(value),
            "Visible" => self.visible = parse_bool(value),
            "LookNFeel" => self.look_name = value.to_string(),
            "Name" | "Type" => tracing::warn!("property {name} of {} is read-only", self.name),
            _ => {
                self.properties.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Snapshot of builtin and stored properties, for diagnostics.
    pub fn property_snapshot(&self) -> Vec<(String, String)> {
        let mut all: Vec<(String, String)> = BUILTIN_PROPERTIES
            .iter()
            .filter_map(|name| Some((name.to_string(), self.property(name)?)))
            .chain(self.properties.iter().map(|(k, v)| (k.clone(), v.clone())))
            .collect();
        all.sort();
        all
    }
}

impl LookTarget for Window {
    fn name(&self) -> &str {
        &self.name
    }

    fn pixel_rect(&self) -> Rect {
        self.area()
    }

    fn property(&self, name: &str) -> Option<String> {
        match name {
            "Name" => Some(self.name.clone()),
            "Type" => Some(self.widget_type.clone()),
            "LookNFeel" => Some(self.look_name.clone()),
            "Disabled" => Some(self.is_disabled().to_string()),
            "Active" => Some(self.active.to_string()),
            "Visible" => Some(self.visible.to_string()),
            _ => self.properties.get(name).cloned(),
        }
    }
}
