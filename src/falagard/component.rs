//! Child components and property setup carried by a look.

use super::area::ComponentArea;

/// A property value a look writes onto widgets that use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInitialiser {
    pub name: String,
    pub value: String,
}

impl PropertyInitialiser {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// A property introduced by a look, with its initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,
    pub initial_value: String,
    /// Writing it through a widget's `set_property` invalidates cached rendering.
    pub redraw_on_write: bool,
    /// Writing it through a widget's `set_property` re-runs child layout.
    pub layout_on_write: bool,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, initial_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_value: initial_value.into(),
            redraw_on_write: false,
            layout_on_write: false,
        }
    }

    pub fn redraw_on_write(mut self) -> Self {
        self.redraw_on_write = true;
        self
    }

    pub fn layout_on_write(mut self) -> Self {
        self.layout_on_write = true;
        self
    }
}

/// An auto-generated child widget: created as `<parent name><name_suffix>`
/// and placed in `area`, resolved against the parent's local rect.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetComponent {
    pub widget_type: String,
    pub name_suffix: String,
    /// Look assigned to the child, if any.
    pub look: Option<String>,
    pub area: ComponentArea,
    pub properties: Vec<PropertyInitialiser>,
}

impl WidgetComponent {
    pub fn new(widget_type: impl Into<String>, name_suffix: impl Into<String>, area: ComponentArea) -> Self {
        Self {
            widget_type: widget_type.into(),
            name_suffix: name_suffix.into(),
            look: None,
            area,
            properties: Vec::new(),
        }
    }

    pub fn with_look(mut self, look: impl Into<String>) -> Self {
        self.look = Some(look.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(PropertyInitialiser::new(name, value));
        self
    }

    pub fn child_name(&self, parent: &str) -> String {
        format!("{parent}{}", self.name_suffix)
    }
}
