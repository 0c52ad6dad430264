//! Geometry of the strip and its tabs.

use crate::gui::shared::title;
use crate::gui::*;

impl TabStrip {
    /// Docks the strip against a toolbar area; the area decides the shape.
    pub fn set_area(&mut self, area: ToolBarArea) {
        self.set_shape(StripShape::from_area(area));
    }

    pub fn set_shape(&mut self, shape: StripShape) {
        if shape == self.shape {
            return;
        }
        tracing::debug!("Strip {} shape {:?} -> {:?}", self.id.0, self.shape, shape);
        self.shape = shape;
        self.emit(StripSignal::GeometryChanged);
        self.arm_layout_timer();
    }

    pub fn shape(&self) -> StripShape {
        self.shape
    }

    /// Whether the strip lives inside a toolbar. Affects gesture contexts and
    /// the customize submenu.
    pub fn set_in_toolbar(&mut self, in_toolbar: bool) {
        self.in_toolbar = in_toolbar;
    }

    pub fn set_metrics(&mut self, metrics: TabLayoutMetrics) {
        self.metrics = metrics;
        self.emit(StripSignal::GeometryChanged);
        self.update_buttons();
    }

    pub fn metrics(&self) -> &TabLayoutMetrics {
        &self.metrics
    }

    /// Applies the size the host's layout gave the strip.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.arm_layout_timer();
        self.emit(StripSignal::RedrawRequested);
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Position of the strip's origin in screen coordinates.
    pub fn set_global_origin(&mut self, origin: PhysicalPosition<i32>) {
        self.global_origin = origin;
    }

    /// Geometry of the screen the strip is on, used to keep previews visible.
    pub fn set_screen_geometry(&mut self, screen: Rect) {
        self.screen = Some(screen);
    }

    pub(in crate::gui) fn sizing(&self) -> TabSizing {
        TabSizing::from_settings(&self.settings, self.frozen_tab_size)
    }

    pub fn tab_size_hint(&self, index: usize) -> PhysicalSize<u32> {
        let is_pinned = self.tabs.get(index).is_some_and(|tab| tab.is_pinned);
        tab_math::tab_size_hint(
            self.shape,
            self.sizing(),
            &self.metrics,
            is_pinned,
            self.tabs.len(),
            self.tabs.pinned_count(),
            self.size,
        )
    }

    /// Length of tab `index` along a horizontal strip (its width otherwise).
    pub(in crate::gui) fn tab_length(&self, index: usize) -> u32 {
        self.tab_size_hint(index).width
    }

    pub fn tab_rects(&self) -> Vec<Rect> {
        tab_math::tab_rects(
            self.shape,
            self.sizing(),
            &self.metrics,
            &self.tabs.pinned_flags(),
            self.size,
        )
    }

    pub fn tab_rect(&self, index: usize) -> Option<Rect> {
        self.tab_rects().get(index).copied()
    }

    pub fn size_hint(&self) -> PhysicalSize<u32> {
        tab_math::strip_size_hint(
            self.shape,
            self.sizing(),
            &self.metrics,
            &self.tabs.pinned_flags(),
        )
    }

    pub fn minimum_size_hint(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(0, 0)
    }

    /// Zero while the strip has no tabs, unbounded otherwise.
    pub fn maximum_size(&self) -> PhysicalSize<u32> {
        if self.tabs.is_empty() {
            PhysicalSize::new(0, 0)
        } else {
            PhysicalSize::new(u32::MAX, u32::MAX)
        }
    }

    pub fn tab_at(&self, x: f64, y: f64) -> Option<usize> {
        tab_math::tab_at(&self.tab_rects(), x, y)
    }

    /// Tab under the last known pointer position.
    pub(in crate::gui) fn pointer_tab(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.tab_at(x, y)
    }

    pub fn hit_test(&self, x: f64, y: f64) -> StripHit {
        let buttons: Vec<ButtonVisibility> = self
            .tabs
            .iter()
            .map(|tab| ButtonVisibility {
                close: tab.shows_close_button(),
                icon: tab.shows_icon_button(),
            })
            .collect();
        tab_hit_test::hit_test_strip(
            x,
            y,
            &self.tab_rects(),
            &buttons,
            self.close_side,
            &self.metrics,
        )
    }

    /// Insertion index for the current drag position.
    ///
    /// Uses the external drag position when one hovers the strip, else the
    /// pointer of an in-strip tab drag. Without either the drop appends.
    pub fn drop_index(&self) -> usize {
        let pos = self.drag_move_position.or(match self.drag {
            DragPhase::Dragging {
                current,
                ignore_reorder: false,
                ..
            } => Some(current),
            _ => None,
        });
        tab_math::drop_index(&self.tab_rects(), self.shape, pos)
    }

    /// Line marking where a drop would land, while something is dragged
    /// over the strip.
    pub fn drop_indicator(&self) -> Option<DropIndicator> {
        let dragging_here = matches!(
            self.drag,
            DragPhase::Dragging {
                ignore_reorder: false,
                ..
            }
        );
        if self.drag_move_position.is_none() && !dragging_here {
            return None;
        }
        Some(tab_math::drop_indicator(
            &self.tab_rects(),
            self.shape,
            self.drop_index(),
            self.size,
        ))
    }

    /// Paint data for every tab, in strip order.
    pub fn tab_views(&self) -> Vec<TabView> {
        let current = self.tabs.current();
        self.tabs
            .iter()
            .zip(self.tab_rects())
            .enumerate()
            .map(|(index, (tab, rect))| {
                let icon_rect = tab.shows_icon_button().then(|| {
                    tab_hit_test::button_rect(rect, self.close_side.opposite(), &self.metrics)
                });
                let close = tab
                    .close_button
                    .filter(|button| button.visible)
                    .map(|button| {
                        let r = tab_hit_test::button_rect(rect, self.close_side, &self.metrics);
                        (r, button.glyph)
                    });
                let buttons_shown = usize::from(icon_rect.is_some()) + usize::from(close.is_some());
                let columns = title::title_max_columns(&self.metrics, rect, buttons_shown);

                TabView {
                    index,
                    window: tab.window,
                    rect,
                    title: title::elide_title(&tab.title, columns).into_owned(),
                    is_current: current == Some(index),
                    is_hovered: self.hovered_tab == Some(index),
                    is_pinned: tab.is_pinned,
                    icon: tab.icon.clone(),
                    icon_rect,
                    close,
                }
            })
            .collect()
    }
}
