//! List view: a vertical list of model items with selection.
//!
//! Item geometry is cached in a [`ListViewRenderingState`] that is rebuilt
//! lazily: every mutation only marks it dirty, and the next query or render
//! rebuilds it once.

use std::collections::BTreeSet;
use std::rc::Rc;

use super::{LookWidget, PropertyEffect, Window, WindowManager, layout_with_look, property_effect};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::falagard::{LookTarget, WidgetLook, WidgetLookManager};
use crate::render::{Color, Point, Rect, RenderCache, Size};

/// Named area items are drawn into; the whole widget when the look lacks it.
const ITEM_AREA: &str = "ItemRenderingArea";

/// Row index into the bound model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelIndex(pub usize);

impl ModelIndex {
    pub fn row(&self) -> usize {
        self.0
    }
}

/// One model item as the list view sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub text: String,
    pub selectable: bool,
}

impl ItemRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), selectable: true }
    }

    pub fn unselectable(text: impl Into<String>) -> Self {
        Self { text: text.into(), selectable: false }
    }
}

/// Ordered, indexable item collection the list view reads from.
pub trait ItemModel {
    fn row_count(&self) -> usize;
    fn item(&self, row: usize) -> Option<&ItemRecord>;
}

/// Item model backed by a vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecItemModel {
    items: Vec<ItemRecord>,
}

impl VecItemModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { items: texts.into_iter().map(ItemRecord::new).collect() }
    }

    pub fn push(&mut self, item: ItemRecord) {
        self.items.push(item);
    }

    pub fn insert(&mut self, row: usize, item: ItemRecord) {
        self.items.insert(row.min(self.items.len()), item);
    }

    pub fn remove(&mut self, row: usize) -> Option<ItemRecord> {
        (row < self.items.len()).then(|| self.items.remove(row))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl ItemModel for VecItemModel {
    fn row_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, row: usize) -> Option<&ItemRecord> {
        self.items.get(row)
    }
}

/// Measures text for item layout.
pub trait TextMetrics {
    fn measure(&self, text: &str) -> Size;
}

/// Monospace metrics: fixed advance per character and fixed line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTextMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedTextMetrics {
    fn default() -> Self {
        Self { advance: 7.0, line_height: 16.0 }
    }
}

impl TextMetrics for FixedTextMetrics {
    fn measure(&self, text: &str) -> Size {
        let lines = text.split('\n');
        let (count, widest) = lines.fold((0usize, 0usize), |(n, w), line| (n + 1, w.max(line.chars().count())));
        Size::new(widest as f32 * self.advance, count as f32 * self.line_height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewItemRenderingState {
    pub index: ModelIndex,
    pub text: String,
    pub size: Size,
    /// Top of the item in content space, before scrolling.
    pub offset_y: f32,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListViewRenderingState {
    pub items: Vec<ListViewItemRenderingState>,
    pub selected_indices: Vec<ModelIndex>,
    /// Height of all items stacked.
    pub content_height: f32,
}

pub struct ListView<M: ItemModel = VecItemModel> {
    window: Window,
    model: M,
    metrics: Rc<dyn TextMetrics>,
    selection: BTreeSet<usize>,
    multi_select: bool,
    selection_brush: Option<String>,
    vertical_scroll: f32,
    rendering_state: ListViewRenderingState,
    dirty: bool,
    /// Registry handle held while the look is assigned; marks it in use.
    assigned_look: Option<Rc<WidgetLook>>,
}

impl<M: ItemModel> ListView<M> {
    pub const WIDGET_TYPE: &'static str = "Falagard/ListView";

    pub fn new(name: impl Into<String>, look: impl Into<String>, model: M) -> Self {
        Self {
            window: Window::new(Self::WIDGET_TYPE, name).with_look(look),
            model,
            metrics: Rc::new(FixedTextMetrics::default()),
            selection: BTreeSet::new(),
            multi_select: false,
            selection_brush: None,
            vertical_scroll: 0.0,
            rendering_state: ListViewRenderingState::default(),
            dirty: true,
            assigned_look: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Rc<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self.dirty = true;
        self
    }

    /// Pick up engine defaults, currently the selection brush.
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        if let Some(brush) = &config.default_selection_brush {
            self.selection_brush = Some(brush.clone());
        }
        self
    }

    /// Apply the look's property definitions and initialisers and hold the
    /// look, so the registry sees it as in use until the view is dropped.
    pub fn initialise(&mut self, looks: &WidgetLookManager) -> Result<()> {
        let look = looks.get_widget_look(&self.window.look_name)?;
        look.initialise_widget(&mut self.window);
        self.assigned_look = Some(look);
        self.invalidate();
        Ok(())
    }

    pub fn window_mut(&mut self) -> &mut Window {
        self.invalidate();
        &mut self.window
    }

    pub fn set_area(&mut self, rect: Rect) {
        self.window.set_area(rect);
        self.invalidate();
    }

    /// Write a property. A `redrawOnWrite` definition invalidates the
    /// rendering state, a `layoutOnWrite` one re-runs child layout.
    pub fn set_property(
        &mut self,
        name: &str,
        value: &str,
        looks: &WidgetLookManager,
        windows: &mut dyn WindowManager,
    ) -> PropertyEffect {
        self.window.set_property(name, value);
        let effect = property_effect(looks, &self.window.look_name, name);
        if effect.redraw {
            self.invalidate();
        }
        if effect.layout {
            self.layout_component_widgets(looks, windows);
        }
        effect
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable model access; the rendering state is rebuilt on next use.
    pub fn model_mut(&mut self) -> &mut M {
        self.invalidate();
        &mut self.model
    }

    pub fn set_model(&mut self, model: M) {
        self.model = model;
        self.selection.clear();
        self.vertical_scroll = 0.0;
        self.invalidate();
    }

    /// Mark the cached rendering state stale.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_multi_select_enabled(&self) -> bool {
        self.multi_select
    }

    /// Turning multi-select off keeps only the lowest selected index.
    pub fn set_multi_select_enabled(&mut self, enabled: bool) {
        self.multi_select = enabled;
        if !enabled && self.selection.len() > 1 {
            let first = self.selection.first().copied();
            self.selection.retain(|i| Some(*i) == first);
            self.invalidate();
        }
    }

    pub fn item(&self, row: usize) -> Result<&ItemRecord> {
        self.model.item(row).ok_or(Error::InvalidIndex { index: row, len: self.model.row_count() })
    }

    fn is_selectable(&self, row: usize) -> bool {
        self.model.item(row).is_some_and(|item| item.selectable)
    }

    /// Make `row` the only selected item.
    ///
    /// Returns false, leaving the selection unchanged, when `row` is outside
    /// the model or not selectable.
    pub fn set_selected_item(&mut self, row: usize) -> bool {
        if !self.is_selectable(row) {
            tracing::trace!("list view {}: cannot select row {row}", self.window.name);
            return false;
        }
        self.selection.clear();
        self.selection.insert(row);
        self.invalidate();
        true
    }

    /// Add or remove `row` from the selection. Without multi-select, selecting
    /// replaces the current selection.
    pub fn set_item_selection_state(&mut self, row: usize, selected: bool) -> bool {
        if !self.is_selectable(row) {
            return false;
        }
        if selected {
            if !self.multi_select {
                self.selection.clear();
            }
            self.selection.insert(row);
        } else {
            self.selection.remove(&row);
        }
        self.invalidate();
        true
    }

    pub fn clear_selections(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.invalidate();
        }
    }

    pub fn is_index_selected(&self, row: usize) -> bool {
        self.selection.contains(&row)
    }

    pub fn selected_indices(&self) -> Vec<ModelIndex> {
        self.selection.iter().copied().map(ModelIndex).collect()
    }

    pub fn set_selection_brush_image(&mut self, image: impl Into<String>) {
        self.selection_brush = Some(image.into());
    }

    pub fn clear_selection_brush_image(&mut self) {
        self.selection_brush = None;
    }

    pub fn selection_brush_image(&self) -> Option<&str> {
        self.selection_brush.as_deref()
    }

    pub fn vertical_scroll(&self) -> f32 {
        self.vertical_scroll
    }

    /// Scroll offset in pixels; negative values clamp to 0.
    pub fn set_vertical_scroll(&mut self, offset: f32) {
        let offset = offset.max(0.0);
        if offset != self.vertical_scroll {
            self.vertical_scroll = offset;
            self.invalidate();
        }
    }

    /// Rebuild the rendering state if anything changed since the last rebuild.
    pub fn prepare_for_render(&mut self) {
        if !self.dirty {
            return;
        }

        let rows = self.model.row_count();
        let model = &self.model;
        self.selection.retain(|&row| model.item(row).is_some_and(|item| item.selectable));

        let mut items = Vec::with_capacity(rows);
        let mut offset_y = 0.0;
        for row in 0..rows {
            let Some(item) = self.model.item(row) else { continue };
            let size = self.metrics.measure(&item.text);
            items.push(ListViewItemRenderingState {
                index: ModelIndex(row),
                text: item.text.clone(),
                size,
                offset_y,
                is_selected: self.selection.contains(&row),
            });
            offset_y += size.height;
        }

        self.rendering_state = ListViewRenderingState {
            items,
            selected_indices: self.selected_indices(),
            content_height: offset_y,
        };
        self.dirty = false;
        tracing::trace!("list view {}: rebuilt {rows} item records", self.window.name);
    }

    pub fn rendering_state(&mut self) -> &ListViewRenderingState {
        self.prepare_for_render();
        &self.rendering_state
    }

    /// Item area in the same space as the pixel rect: the look's
    /// `ItemRenderingArea`, or the whole widget when the look or area is missing.
    fn item_area(&self, looks: &WidgetLookManager) -> Rect {
        looks
            .widget_look(&self.window.look_name)
            .and_then(|look| look.resolve_named_area(ITEM_AREA, self))
            .unwrap_or_else(|| self.pixel_rect())
    }

    /// Item under `position`, given in the view's local coordinates.
    ///
    /// Items span the full width of the item area. Returns `None` when the
    /// position is outside the item area or below the last item.
    pub fn index_at(&mut self, looks: &WidgetLookManager, position: Point) -> Option<ModelIndex> {
        self.prepare_for_render();
        let rect = self.pixel_rect();
        let area = self.item_area(looks).offset(-rect.x, -rect.y);
        if !area.contains(position) {
            return None;
        }
        let content_y = position.y - area.y + self.vertical_scroll;
        self.rendering_state
            .items
            .iter()
            .find(|item| content_y >= item.offset_y && content_y < item.offset_y + item.size.height)
            .map(|item| item.index)
    }

    fn text_color(&self) -> Color {
        self.window
            .properties
            .get("TextColour")
            .and_then(|c| Color::from_argb_hex(c).ok())
            .unwrap_or(Color::WHITE)
    }
}

impl<M: ItemModel> LookTarget for ListView<M> {
    fn name(&self) -> &str {
        &self.window.name
    }

    fn pixel_rect(&self) -> Rect {
        self.window.area()
    }

    fn property(&self, name: &str) -> Option<String> {
        match name {
            "ItemCount" => Some(self.model.row_count().to_string()),
            "SelectedCount" => Some(self.selection.len().to_string()),
            _ => self.window.property(name),
        }
    }
}

impl<M: ItemModel> LookWidget for ListView<M> {
    fn window(&self) -> &Window {
        &self.window
    }

    fn state_name(&self, _windows: &dyn WindowManager) -> &'static str {
        if self.window.is_disabled() { "Disabled" } else { "Enabled" }
    }

    /// Look imagery first, then per item a selection brush (when selected and
    /// a brush is set) and the item text, culled to the item area.
    fn populate_render_cache(&mut self, looks: &WidgetLookManager, windows: &dyn WindowManager, cache: &mut RenderCache) {
        let Some(look) = looks.widget_look(&self.window.look_name) else {
            tracing::warn!("list view {} uses unknown look '{}'; drawing nothing", self.window.name, self.window.look_name);
            return;
        };
        look.render(self.state_name(windows), &*self, cache);

        let area = self.item_area(looks);
        self.prepare_for_render();
        let color = self.text_color();
        for item in &self.rendering_state.items {
            let row = Rect::new(area.x, area.y + item.offset_y - self.vertical_scroll, area.width, item.size.height);
            if !row.intersects(&area) {
                continue;
            }
            if item.is_selected
                && let Some(brush) = &self.selection_brush
            {
                cache.push_image(brush.clone(), row, Color::WHITE, Some(area));
            }
            let text_rect = Rect::new(row.x, row.y, item.size.width, item.size.height);
            cache.push_text(item.text.clone(), text_rect, color, Some(area));
        }
    }

    fn layout_component_widgets(&self, looks: &WidgetLookManager, windows: &mut dyn WindowManager) {
        layout_with_look(self, &self.window.look_name, looks, windows);
    }
}
