//! Registry of loaded widget looks.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::look::WidgetLook;
use crate::error::{Error, ObjectKind, Result};
use crate::xml::XmlLookSource;

/// What unloading does when a look is still referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnloadPolicy {
    /// Unload anyway. Widgets naming the look render nothing until it is reloaded,
    /// and handles obtained earlier stay valid on their own.
    #[default]
    AllowDangling,
    /// Refuse with `InUse` while any handle from `get_widget_look` is alive.
    RefuseInUse,
}

/// Supplier of already-parsed looks for [`WidgetLookManager::load_from_source`].
pub trait LookSource {
    /// Short description for log messages.
    fn describe(&self) -> String;
    fn widget_looks(&self) -> Result<Vec<WidgetLook>>;
}

impl LookSource for Vec<WidgetLook> {
    fn describe(&self) -> String {
        format!("{} in-memory looks", self.len())
    }

    fn widget_looks(&self) -> Result<Vec<WidgetLook>> {
        Ok(self.clone())
    }
}

/// Catalog of widget looks keyed by name.
///
/// Owned explicitly and passed to whatever needs lookups; there is no global
/// instance. Widgets refer to looks by name only, so dropping a widget never
/// affects the registry.
#[derive(Debug, Default)]
pub struct WidgetLookManager {
    looks: HashMap<String, Rc<WidgetLook>>,
    policy: UnloadPolicy,
}

impl WidgetLookManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnloadPolicy) -> Self {
        Self { looks: HashMap::new(), policy }
    }

    pub fn policy(&self) -> UnloadPolicy {
        self.policy
    }

    /// Shared handle to a look.
    pub fn get_widget_look(&self, name: &str) -> Result<Rc<WidgetLook>> {
        self.looks
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(ObjectKind::WidgetLook, name))
    }

    /// Borrowing lookup for render and layout paths, where a miss is not an error.
    pub fn widget_look(&self, name: &str) -> Option<&WidgetLook> {
        self.looks.get(name).map(Rc::as_ref)
    }

    pub fn is_widget_look_available(&self, name: &str) -> bool {
        self.looks.contains_key(name)
    }

    /// Register a single look.
    pub fn add_widget_look(&mut self, look: WidgetLook) -> Result<()> {
        self.load_from_source(&vec![look]).map(|_| ())
    }

    /// Register every look the source yields.
    ///
    /// Atomic: the batch is validated against itself and against the registry
    /// first, so on any error nothing from the source is registered.
    pub fn load_from_source(&mut self, source: &dyn LookSource) -> Result<Vec<String>> {
        let looks = source.widget_looks()?;

        let mut batch = HashSet::with_capacity(looks.len());
        for look in &looks {
            if self.looks.contains_key(look.name()) || !batch.insert(look.name()) {
                return Err(Error::duplicate(ObjectKind::WidgetLook, look.name()));
            }
            look.validate()?;
        }

        let names: Vec<String> = looks.iter().map(|l| l.name().to_string()).collect();
        for look in looks {
            self.looks.insert(look.name().to_string(), Rc::new(look));
        }
        tracing::debug!("loaded {} widget looks from {}", names.len(), source.describe());
        Ok(names)
    }

    /// Parse look-and-feel XML text and register its looks.
    pub fn parse_look_source(&mut self, xml: &str) -> Result<Vec<String>> {
        self.load_from_source(&XmlLookSource::from_text(xml))
    }

    /// Load a look-and-feel file, or every look-and-feel file under a directory.
    pub fn load_path(&mut self, path: &Path) -> Result<Vec<String>> {
        self.load_from_source(&XmlLookSource::from_path(path))
    }

    /// Remove a look from the registry.
    pub fn unload(&mut self, name: &str) -> Result<()> {
        let Some(look) = self.looks.get(name) else {
            return Err(Error::not_found(ObjectKind::WidgetLook, name));
        };
        let holders = Rc::strong_count(look) - 1;
        if holders > 0 {
            if self.policy == UnloadPolicy::RefuseInUse {
                return Err(Error::InUse { name: name.to_string(), holders });
            }
            tracing::warn!("unloading widget look {name} with {holders} live handles");
        }
        self.looks.remove(name);
        tracing::debug!("unloaded widget look {name}");
        Ok(())
    }

    /// Drop every look.
    pub fn clear(&mut self) {
        self.looks.clear();
    }

    pub fn len(&self) -> usize {
        self.looks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.looks.is_empty()
    }

    /// Registered look names, sorted.
    pub fn widget_look_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.looks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
