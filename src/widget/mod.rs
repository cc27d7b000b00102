//! Look-aware widgets.
//!
//! Behaviors own their transient state and delegate drawing and child layout
//! to their assigned look. A look that cannot be found, or a state it does
//! not define, degrades to drawing nothing; it never fails the caller.

mod frame_window;
mod list_view;
mod registry;
mod window;

pub use frame_window::{CLOSE_BUTTON_SUFFIX, FrameWindow, TITLEBAR_SUFFIX};
pub use list_view::{
    FixedTextMetrics, ItemModel, ItemRecord, ListView, ListViewItemRenderingState, ListViewRenderingState,
    ModelIndex, TextMetrics, VecItemModel,
};
pub use registry::{WindowManager, WindowRegistry};
pub use window::Window;

use crate::falagard::{LookTarget, WidgetLookManager};
use crate::render::RenderCache;

/// A widget whose appearance and child layout come from a widget look.
pub trait LookWidget: LookTarget {
    fn window(&self) -> &Window;

    /// State imagery to draw for the widget's current logical state.
    fn state_name(&self, windows: &dyn WindowManager) -> &'static str;

    /// Append this widget's primitives to `cache`.
    fn populate_render_cache(&mut self, looks: &WidgetLookManager, windows: &dyn WindowManager, cache: &mut RenderCache);

    /// Place the auto-generated children according to the look.
    fn layout_component_widgets(&self, looks: &WidgetLookManager, windows: &mut dyn WindowManager);
}

/// What a property write asks of a widget, from the look's property definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyEffect {
    /// The widget's cached rendering should be rebuilt.
    pub redraw: bool,
    /// Auto-generated children should be laid out again.
    pub layout: bool,
}

/// Effect of writing `property` on a widget using the look named `look_name`.
/// Properties the look does not define, and unknown looks, have no effect.
pub fn property_effect(looks: &WidgetLookManager, look_name: &str, property: &str) -> PropertyEffect {
    looks
        .widget_look(look_name)
        .and_then(|look| look.property_definition(property))
        .map(|def| PropertyEffect { redraw: def.redraw_on_write, layout: def.layout_on_write })
        .unwrap_or_default()
}

/// Render `state` of the look named `look_name` for `target`.
///
/// Returns false, drawing nothing, when the look or the state is missing.
pub fn render_with_look(
    target: &dyn LookTarget,
    look_name: &str,
    state: &str,
    looks: &WidgetLookManager,
    cache: &mut RenderCache,
) -> bool {
    match looks.widget_look(look_name) {
        Some(look) => look.render(state, target, cache),
        None => {
            tracing::warn!("widget {} uses unknown look '{look_name}'; drawing nothing", target.name());
            false
        }
    }
}

/// Lay out the auto-generated children of `target`; a missing look leaves them untouched.
pub fn layout_with_look(
    target: &dyn LookTarget,
    look_name: &str,
    looks: &WidgetLookManager,
    windows: &mut dyn WindowManager,
) {
    match looks.widget_look(look_name) {
        Some(look) => look.layout_child_widgets(target, windows),
        None => tracing::warn!("widget {} uses unknown look '{look_name}'; layout skipped", target.name()),
    }
}

impl LookWidget for Window {
    fn window(&self) -> &Window {
        self
    }

    fn state_name(&self, _windows: &dyn WindowManager) -> &'static str {
        if self.enabled { "Enabled" } else { "Disabled" }
    }

    fn populate_render_cache(&mut self, looks: &WidgetLookManager, windows: &dyn WindowManager, cache: &mut RenderCache) {
        let state = self.state_name(windows);
        render_with_look(&*self, &self.look_name, state, looks, cache);
    }

    fn layout_component_widgets(&self, looks: &WidgetLookManager, windows: &mut dyn WindowManager) {
        layout_with_look(self, &self.look_name, looks, windows);
    }
}
