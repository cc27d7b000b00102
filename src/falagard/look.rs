//! Widget look definition: one complete skin.

use std::collections::{HashMap, HashSet};

use super::LookTarget;
use super::area::NamedArea;
use super::component::{PropertyDefinition, PropertyInitialiser, WidgetComponent};
use super::imagery::{AreaRef, ImageryComponent, ImagerySection, LayerEntry, StateImagery};
use crate::error::{Error, ObjectKind, Result};
use crate::render::{Point, Rect, RenderCache};
use crate::widget::{Window, WindowManager};

/// A named skin: state imagery, named areas, imagery sections, child
/// components and property setup. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetLook {
    name: String,
    state_imagery: HashMap<String, StateImagery>,
    named_areas: HashMap<String, NamedArea>,
    sections: HashMap<String, ImagerySection>,
    child_components: Vec<WidgetComponent>,
    property_definitions: Vec<PropertyDefinition>,
    property_initialisers: Vec<PropertyInitialiser>,
}

impl WidgetLook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state_imagery: HashMap::new(),
            named_areas: HashMap::new(),
            sections: HashMap::new(),
            child_components: Vec::new(),
            property_definitions: Vec::new(),
            property_initialisers: Vec::new(),
        }
    }

    pub fn with_state_imagery(mut self, state: StateImagery) -> Self {
        self.state_imagery.insert(state.name().to_string(), state);
        self
    }

    pub fn with_named_area(mut self, area: NamedArea) -> Self {
        self.named_areas.insert(area.name.clone(), area);
        self
    }

    pub fn with_imagery_section(mut self, section: ImagerySection) -> Self {
        self.sections.insert(section.name.clone(), section);
        self
    }

    pub fn with_child(mut self, component: WidgetComponent) -> Self {
        self.child_components.push(component);
        self
    }

    pub fn with_property_definition(mut self, definition: PropertyDefinition) -> Self {
        self.property_definitions.push(definition);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.property_initialisers.push(PropertyInitialiser::new(name, value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state_imagery(&self, state: &str) -> Option<&StateImagery> {
        self.state_imagery.get(state)
    }

    pub fn is_state_imagery_present(&self, state: &str) -> bool {
        self.state_imagery.contains_key(state)
    }

    pub fn named_area(&self, name: &str) -> Option<&NamedArea> {
        self.named_areas.get(name)
    }

    pub fn is_named_area_defined(&self, name: &str) -> bool {
        self.named_areas.contains_key(name)
    }

    pub fn imagery_section(&self, name: &str) -> Option<&ImagerySection> {
        self.sections.get(name)
    }

    pub fn child_components(&self) -> &[WidgetComponent] {
        &self.child_components
    }

    pub fn property_definitions(&self) -> &[PropertyDefinition] {
        &self.property_definitions
    }

    pub fn property_definition(&self, name: &str) -> Option<&PropertyDefinition> {
        self.property_definitions.iter().find(|d| d.name == name)
    }

    pub fn property_initialisers(&self) -> &[PropertyInitialiser] {
        &self.property_initialisers
    }

    pub fn state_names(&self) -> Vec<&str> {
        sorted_keys(&self.state_imagery)
    }

    pub fn named_area_names(&self) -> Vec<&str> {
        sorted_keys(&self.named_areas)
    }

    pub fn imagery_section_names(&self) -> Vec<&str> {
        sorted_keys(&self.sections)
    }

    /// Check internal references: every image's named area and every layer's
    /// section must exist, and child name suffixes must be non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let check_image = |image: &ImageryComponent, context: &str| -> Result<()> {
            if let AreaRef::Named(area) = &image.area
                && !self.named_areas.contains_key(area)
            {
                return Err(Error::parse(format!(
                    "look {}: {context} image {} references unknown named area {area}",
                    self.name, image.image
                )));
            }
            Ok(())
        };

        for section in self.sections.values() {
            for image in &section.images {
                check_image(image, &format!("section {}", section.name))?;
            }
        }

        for state in self.state_imagery.values() {
            let context = format!("state {}", state.name());
            for entry in state.layers().iter().flat_map(|l| &l.entries) {
                match entry {
                    LayerEntry::Image(image) => check_image(image, &context)?,
                    LayerEntry::Section(spec) if !self.sections.contains_key(&spec.section) => {
                        return Err(Error::parse(format!(
                            "look {}: {context} references unknown imagery section {}",
                            self.name, spec.section
                        )));
                    }
                    LayerEntry::Section(_) => {}
                }
            }
        }

        let mut suffixes = HashSet::new();
        for child in &self.child_components {
            if child.name_suffix.is_empty() {
                return Err(Error::parse(format!("look {}: child {} has an empty name suffix", self.name, child.widget_type)));
            }
            if !suffixes.insert(child.name_suffix.as_str()) {
                return Err(Error::duplicate(ObjectKind::Window, child.name_suffix.clone()));
            }
        }
        Ok(())
    }

    /// Render `state` for `target` into `cache`.
    ///
    /// Returns false, leaving the cache untouched, when the state is not defined.
    pub fn render(&self, state: &str, target: &dyn LookTarget, cache: &mut RenderCache) -> bool {
        match self.state_imagery(state) {
            Some(imagery) => {
                imagery.populate_render_cache(self, target, cache);
                true
            }
            None => {
                tracing::warn!("look {} has no state imagery {state} (widget {})", self.name, target.name());
                false
            }
        }
    }

    /// Resolve a named area against the target's pixel rect.
    pub fn resolve_named_area(&self, area: &str, target: &dyn LookTarget) -> Option<Rect> {
        self.named_area(area).map(|a| a.resolve(target, target.pixel_rect()))
    }

    /// Where each auto-generated child belongs, in the parent's local space.
    pub fn child_placements(&self, parent: &dyn LookTarget) -> Vec<(String, Rect)> {
        let local = Rect::from_position_size(Point::default(), parent.pixel_rect().size());
        self.child_components
            .iter()
            .map(|c| (c.child_name(parent.name()), c.area.resolve(parent, local)))
            .collect()
    }

    /// Move and resize every auto-generated child of `parent` to its area.
    ///
    /// Children missing from `windows` are skipped.
    pub fn layout_child_widgets(&self, parent: &dyn LookTarget, windows: &mut dyn WindowManager) {
        apply_placements(self.child_placements(parent), windows);
    }

    /// Write property definitions, then property initialisers, onto `window`.
    pub fn initialise_widget(&self, window: &mut Window) {
        for def in &self.property_definitions {
            window.set_property(&def.name, &def.initial_value);
        }
        for init in &self.property_initialisers {
            window.set_property(&init.name, &init.value);
        }
    }

    /// Create the auto-generated children of `parent` through the window factory
    /// and record them in `parent.children`.
    ///
    /// Either every child is created or none is: on failure the children
    /// created so far are destroyed again before the error is returned.
    pub fn create_child_widgets(&self, parent: &mut Window, windows: &mut dyn WindowManager) -> Result<Vec<String>> {
        let mut created: Vec<String> = Vec::with_capacity(self.child_components.len());

        for component in &self.child_components {
            let name = component.child_name(&parent.name);
            match windows.create_window(&component.widget_type, &name) {
                Ok(child) => {
                    child.parent = Some(parent.name.clone());
                    child.auto_generated = true;
                    if let Some(look) = &component.look {
                        child.look_name = look.clone();
                    }
                    for init in &component.properties {
                        child.set_property(&init.name, &init.value);
                    }
                    tracing::debug!("created auto child {name} ({}) for {}", component.widget_type, parent.name);
                    created.push(name);
                }
                Err(e) => {
                    for name in &created {
                        let _ = windows.destroy_window(name);
                    }
                    return Err(e);
                }
            }
        }

        parent.children.extend(created.iter().cloned());
        Ok(created)
    }
}

fn apply_placements(placements: Vec<(String, Rect)>, windows: &mut dyn WindowManager) {
    for (name, rect) in placements {
        if !(windows.move_to(&name, rect.position()) && windows.resize_to(&name, rect.size())) {
            tracing::debug!("layout skipped missing child window {name}");
        }
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
