use serde_json::{Value, json};

use crate::layout::{GridChild, GridProps};
use crate::logging::{LogEvent, LogLevel, Logger, kv};
use crate::metrics::FrameMetrics;
use crate::resolve::{resolve_cross, resolve_quadrant};
use crate::slots::{CrossSlots, QuadSlots};
use crate::style::{AlignItems, JustifyContent, StyleProps};
use crate::topology::{CrossSlot, QuadSlot};

const APP_TARGET: &str = "slotgrid::frame.app";
const QUAD_TARGET: &str = "slotgrid::frame.quad";

/// Application-shell container: header and footer spanning a sidebar /
/// center / sidebar band.
///
/// Every slot mutation triggers a synchronous re-resolve; the mutation's
/// effects (layout object, area tags, visible-children order) are complete
/// when the call returns. An all-empty assignment leaves the prior layout in
/// place.
pub struct AppFrame<C: GridChild> {
    slots: CrossSlots<C>,
    style: StyleProps,
    layout: GridProps,
    order: Vec<CrossSlot>,
    logger: Option<Logger>,
    metrics: FrameMetrics,
}

impl<C: GridChild> Default for AppFrame<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GridChild> AppFrame<C> {
    pub fn new() -> Self {
        Self::with_style(StyleProps::default())
    }

    /// Build a frame, copy the set style attributes onto the layout object,
    /// and run the initial resolve.
    pub fn with_style(style: StyleProps) -> Self {
        let mut layout = GridProps::new();
        style.copy_into(&mut layout);
        let mut frame = Self {
            slots: CrossSlots::new(),
            style,
            layout,
            order: Vec::new(),
            logger: None,
            metrics: FrameMetrics::new(),
        };
        frame.refresh();
        frame
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Assign or clear a slot, then synchronously re-resolve. Returns the
    /// displaced occupant.
    pub fn assign(&mut self, slot: CrossSlot, occupant: Option<C>) -> Option<C> {
        let displaced = self.slots.set(slot, occupant);
        self.refresh();
        displaced
    }

    pub fn set_header(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(CrossSlot::Header, occupant)
    }

    pub fn set_footer(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(CrossSlot::Footer, occupant)
    }

    pub fn set_left_sidebar(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(CrossSlot::LeftSidebar, occupant)
    }

    pub fn set_right_sidebar(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(CrossSlot::RightSidebar, occupant)
    }

    pub fn set_center(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(CrossSlot::Center, occupant)
    }

    /// Relay `grid-gap` to the layout object. Fires on every write.
    pub fn set_grid_gap(&mut self, gap: Option<String>) {
        self.style.grid_gap = gap.clone();
        self.layout.grid_gap = gap;
    }

    /// Relay `justify-content` to the layout object. Fires on every write.
    pub fn set_justify_content(&mut self, justify: Option<JustifyContent>) {
        self.style.justify_content = justify;
        self.layout.justify_content = justify;
    }

    /// Relay `align-items` to the layout object. Fires on every write.
    pub fn set_align_items(&mut self, align: Option<AlignItems>) {
        self.style.align_items = align;
        self.layout.align_items = align;
    }

    /// Relay `width` to the layout object. Fires on every write.
    pub fn set_width(&mut self, width: Option<String>) {
        self.style.width = width.clone();
        self.layout.width = width;
    }

    /// Relay `height` to the layout object. Fires on every write.
    pub fn set_height(&mut self, height: Option<String>) {
        self.style.height = height.clone();
        self.layout.height = height;
    }

    /// Relay the merge flag to the layout object. Only slot assignments are
    /// watched for recomputation, so a changed flag takes layout effect on
    /// the next assignment.
    pub fn set_merge(&mut self, merge: bool) {
        self.style.merge = merge;
        self.layout.merge = Some(merge);
    }

    pub fn layout(&self) -> &GridProps {
        &self.layout
    }

    pub fn style(&self) -> &StyleProps {
        &self.style
    }

    pub fn get(&self, slot: CrossSlot) -> Option<&C> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: CrossSlot) -> Option<&mut C> {
        self.slots.get_mut(slot)
    }

    /// Visible children in canonical order (header, footer, left-sidebar,
    /// right-sidebar, center), present occupants only.
    pub fn children(&self) -> impl Iterator<Item = &C> {
        self.order.iter().filter_map(|slot| self.slots.get(*slot))
    }

    /// Slot order backing the visible-children list.
    pub fn child_order(&self) -> &[CrossSlot] {
        &self.order
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    fn refresh(&mut self) {
        let present = self.slots.present();
        let Some(template) = resolve_cross(&present, self.style.merge) else {
            self.metrics.record_empty_skip();
            self.log(LogLevel::Debug, "resolve_skipped_empty", Vec::new());
            return;
        };

        for slot in &present {
            if let Some(child) = self.slots.get_mut(*slot) {
                child.set_grid_area(slot.area_name());
            }
        }

        self.layout.apply_template(&template);
        self.order = present;
        self.metrics.record_recompute(self.order.len());
        self.log(
            LogLevel::Info,
            "layout_recomputed",
            vec![
                kv("rows", json!(template.rows.len())),
                kv("columns", json!(template.columns.len())),
                kv("children", json!(self.order.len())),
            ],
        );
    }

    fn log(&self, level: LogLevel, message: &str, fields: Vec<(String, Value)>) {
        if let Some(logger) = self.logger.as_ref() {
            let event = LogEvent::with_fields(level, APP_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

/// 2x2 quadrant container.
///
/// Same reactive contract as [`AppFrame`], over the four-corner topology.
pub struct QuadFrame<C: GridChild> {
    slots: QuadSlots<C>,
    style: StyleProps,
    layout: GridProps,
    order: Vec<QuadSlot>,
    logger: Option<Logger>,
    metrics: FrameMetrics,
}

impl<C: GridChild> Default for QuadFrame<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GridChild> QuadFrame<C> {
    pub fn new() -> Self {
        Self::with_style(StyleProps::default())
    }

    pub fn with_style(style: StyleProps) -> Self {
        let mut layout = GridProps::new();
        style.copy_into(&mut layout);
        let mut frame = Self {
            slots: QuadSlots::new(),
            style,
            layout,
            order: Vec::new(),
            logger: None,
            metrics: FrameMetrics::new(),
        };
        frame.refresh();
        frame
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Assign or clear a slot, then synchronously re-resolve. Returns the
    /// displaced occupant.
    pub fn assign(&mut self, slot: QuadSlot, occupant: Option<C>) -> Option<C> {
        let displaced = self.slots.set(slot, occupant);
        self.refresh();
        displaced
    }

    pub fn set_top_left(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(QuadSlot::TopLeft, occupant)
    }

    pub fn set_top_right(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(QuadSlot::TopRight, occupant)
    }

    pub fn set_bottom_left(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(QuadSlot::BottomLeft, occupant)
    }

    pub fn set_bottom_right(&mut self, occupant: Option<C>) -> Option<C> {
        self.assign(QuadSlot::BottomRight, occupant)
    }

    /// Relay `grid-gap` to the layout object. Fires on every write.
    pub fn set_grid_gap(&mut self, gap: Option<String>) {
        self.style.grid_gap = gap.clone();
        self.layout.grid_gap = gap;
    }

    /// Relay `justify-content` to the layout object. Fires on every write.
    pub fn set_justify_content(&mut self, justify: Option<JustifyContent>) {
        self.style.justify_content = justify;
        self.layout.justify_content = justify;
    }

    /// Relay `align-items` to the layout object. Fires on every write.
    pub fn set_align_items(&mut self, align: Option<AlignItems>) {
        self.style.align_items = align;
        self.layout.align_items = align;
    }

    /// Relay `width` to the layout object. Fires on every write.
    pub fn set_width(&mut self, width: Option<String>) {
        self.style.width = width.clone();
        self.layout.width = width;
    }

    /// Relay `height` to the layout object. Fires on every write.
    pub fn set_height(&mut self, height: Option<String>) {
        self.style.height = height.clone();
        self.layout.height = height;
    }

    /// Relay the merge flag to the layout object. Only slot assignments are
    /// watched for recomputation, so a changed flag takes layout effect on
    /// the next assignment.
    pub fn set_merge(&mut self, merge: bool) {
        self.style.merge = merge;
        self.layout.merge = Some(merge);
    }

    pub fn layout(&self) -> &GridProps {
        &self.layout
    }

    pub fn style(&self) -> &StyleProps {
        &self.style
    }

    pub fn get(&self, slot: QuadSlot) -> Option<&C> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: QuadSlot) -> Option<&mut C> {
        self.slots.get_mut(slot)
    }

    /// Visible children in canonical order (top-left, top-right, bottom-left,
    /// bottom-right), present occupants only.
    pub fn children(&self) -> impl Iterator<Item = &C> {
        self.order.iter().filter_map(|slot| self.slots.get(*slot))
    }

    /// Slot order backing the visible-children list.
    pub fn child_order(&self) -> &[QuadSlot] {
        &self.order
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    fn refresh(&mut self) {
        let present = self.slots.present();
        let Some(template) = resolve_quadrant(&present, self.style.merge) else {
            self.metrics.record_empty_skip();
            self.log(LogLevel::Debug, "resolve_skipped_empty", Vec::new());
            return;
        };

        for slot in &present {
            if let Some(child) = self.slots.get_mut(*slot) {
                child.set_grid_area(slot.area_name());
            }
        }

        self.layout.apply_template(&template);
        self.order = present;
        self.metrics.record_recompute(self.order.len());
        self.log(
            LogLevel::Info,
            "layout_recomputed",
            vec![
                kv("rows", json!(template.rows.len())),
                kv("columns", json!(template.columns.len())),
                kv("children", json!(self.order.len())),
            ],
        );
    }

    fn log(&self, level: LogLevel, message: &str, fields: Vec<(String, Value)>) {
        if let Some(logger) = self.logger.as_ref() {
            let event = LogEvent::with_fields(level, QUAD_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}
