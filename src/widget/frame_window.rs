//! Frame window: a titled, roll-up capable window skinned by its look.

use std::rc::Rc;

use super::{LookWidget, PropertyEffect, Window, WindowManager, layout_with_look, property_effect, render_with_look};
use crate::error::{Error, ObjectKind, Result};
use crate::falagard::condition::parse_bool;
use crate::falagard::{LookTarget, WidgetLook, WidgetLookManager};
use crate::render::{Rect, RenderCache};

/// Name suffix of the auto-generated title bar.
pub const TITLEBAR_SUFFIX: &str = "__auto_titlebar__";
/// Name suffix of the auto-generated close button.
pub const CLOSE_BUTTON_SUFFIX: &str = "__auto_closebutton__";

/// Named area holding the client region.
const CLIENT_AREA: &str = "ClientArea";

#[derive(Debug, Clone)]
pub struct FrameWindow {
    window: Window,
    rolled_up: bool,
    /// Registry handle held while the look is assigned; marks it in use.
    assigned_look: Option<Rc<WidgetLook>>,
}

impl FrameWindow {
    pub const WIDGET_TYPE: &'static str = "Falagard/FrameWindow";

    pub fn new(name: impl Into<String>, look: impl Into<String>) -> Self {
        Self {
            window: Window::new(Self::WIDGET_TYPE, name).with_look(look),
            rolled_up: false,
            assigned_look: None,
        }
    }

    pub fn from_window(window: Window) -> Self {
        Self { window, rolled_up: false, assigned_look: None }
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Apply the look's properties and create the title bar, close button and
    /// any other auto-generated children, then lay them out.
    ///
    /// The frame holds on to the look afterwards, so the registry sees it as
    /// in use until the frame is dropped.
    pub fn initialise_components(&mut self, looks: &WidgetLookManager, windows: &mut dyn WindowManager) -> Result<()> {
        let look = looks.get_widget_look(&self.window.look_name)?;
        look.initialise_widget(&mut self.window);
        look.create_child_widgets(&mut self.window, windows)?;
        look.layout_child_widgets(&*self, windows);
        self.assigned_look = Some(look);
        Ok(())
    }

    /// Write a property. A `layoutOnWrite` definition re-runs child layout;
    /// the returned effect tells the caller whether to redraw.
    pub fn set_property(
        &mut self,
        name: &str,
        value: &str,
        looks: &WidgetLookManager,
        windows: &mut dyn WindowManager,
    ) -> PropertyEffect {
        self.window.set_property(name, value);
        let effect = property_effect(looks, &self.window.look_name, name);
        if effect.layout {
            self.layout_component_widgets(looks, windows);
        }
        effect
    }

    pub fn is_rolled_up(&self) -> bool {
        self.rolled_up
    }

    /// Roll-up is allowed unless the `RollUpEnabled` property says otherwise.
    pub fn is_roll_up_enabled(&self) -> bool {
        self.window.properties.get("RollUpEnabled").is_none_or(|v| parse_bool(v))
    }

    /// Toggle the rolled-up state; returns whether it changed.
    pub fn toggle_roll_up(&mut self) -> bool {
        if !self.is_roll_up_enabled() {
            return false;
        }
        self.rolled_up = !self.rolled_up;
        tracing::trace!("frame {} rolled_up={}", self.window.name, self.rolled_up);
        true
    }

    /// Inner rect in the same space as the frame's pixel rect, i.e. relative
    /// to its parent.
    ///
    /// Zero when rolled up. Falls back to the whole frame rect when the look or
    /// its `ClientArea` cannot be found.
    pub fn unclipped_inner_rect(&self, looks: &WidgetLookManager) -> Rect {
        match self.try_unclipped_inner_rect(looks) {
            Ok(rect) => rect,
            Err(e) => {
                tracing::warn!("frame {}: {e}; using full rect as inner rect", self.window.name);
                self.pixel_rect()
            }
        }
    }

    /// Like [`Self::unclipped_inner_rect`] but reporting a missing look or area.
    pub fn try_unclipped_inner_rect(&self, looks: &WidgetLookManager) -> Result<Rect> {
        if self.rolled_up {
            return Ok(Rect::ZERO);
        }
        let look = looks
            .widget_look(&self.window.look_name)
            .ok_or_else(|| Error::not_found(ObjectKind::WidgetLook, &self.window.look_name))?;
        look.resolve_named_area(CLIENT_AREA, self)
            .ok_or_else(|| Error::not_found(ObjectKind::NamedArea, format!("{}/{CLIENT_AREA}", look.name())))
    }

    /// The auto-generated title bar, if it exists.
    pub fn titlebar<'a>(&self, windows: &'a dyn WindowManager) -> Option<&'a Window> {
        windows.get_window(&format!("{}{TITLEBAR_SUFFIX}", self.window.name))
    }

    /// The auto-generated close button, if it exists.
    pub fn close_button<'a>(&self, windows: &'a dyn WindowManager) -> Option<&'a Window> {
        windows.get_window(&format!("{}{CLOSE_BUTTON_SUFFIX}", self.window.name))
    }

    fn is_parent_active(&self, windows: &dyn WindowManager) -> bool {
        self.window
            .parent
            .as_deref()
            .and_then(|p| windows.get_window(p))
            .is_some_and(|p| p.active)
    }
}

impl LookTarget for FrameWindow {
    fn name(&self) -> &str {
        &self.window.name
    }

    fn pixel_rect(&self) -> Rect {
        self.window.area()
    }

    fn property(&self, name: &str) -> Option<String> {
        match name {
            "RolledUp" => Some(self.rolled_up.to_string()),
            _ => self.window.property(name),
        }
    }
}

impl LookWidget for FrameWindow {
    fn window(&self) -> &Window {
        &self.window
    }

    fn state_name(&self, windows: &dyn WindowManager) -> &'static str {
        if self.window.is_disabled() {
            "Disabled"
        } else if self.is_parent_active(windows) {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Nothing is drawn while rolled up.
    fn populate_render_cache(&mut self, looks: &WidgetLookManager, windows: &dyn WindowManager, cache: &mut RenderCache) {
        if self.rolled_up {
            return;
        }
        let state = self.state_name(windows);
        render_with_look(&*self, &self.window.look_name, state, looks, cache);
    }

    fn layout_component_widgets(&self, looks: &WidgetLookManager, windows: &mut dyn WindowManager) {
        layout_with_look(self, &self.window.look_name, looks, windows);
    }
}
