use crate::gui::*;

/// Edge length of the icon used as drag pixmap when there is no thumbnail.
const DRAG_ICON_SIZE: u32 = 16;

impl TabStrip {
    /// Arms a potential drag of tab `index`.
    ///
    /// Reordering is disabled when there is a single tab or the tab is the
    /// only pinned one; the tab can still be dragged out of the strip.
    pub(in crate::gui::events::mouse) fn start_drag(&mut self, index: usize, x: f64, y: f64) {
        let Some(info) = self.window_info(index) else {
            return;
        };
        let ignore_reorder =
            self.tabs.len() == 1 || (info.is_pinned && self.tabs.pinned_count() == 1);
        self.drag = DragPhase::press((x, y), info.id, ignore_reorder);
    }

    /// Feeds the pointer to the drag state machine. Returns the external
    /// drag when the tab was pulled out of the strip.
    pub(in crate::gui::events::mouse) fn update_drag(&mut self, x: f64, y: f64) -> Option<TabDrag> {
        let threshold = self.settings.start_drag_distance as f64;
        if self.drag.pointer_moved((x, y), threshold)
            && let Some(window) = self.drag.window()
        {
            tracing::debug!("Tab drag started for window {}", window);
        }

        if !self.drag.is_dragging() {
            return None;
        }
        if !tab_math::within_drag_bounds(self.size, x, y) {
            return self.detach_dragged_tab();
        }
        self.emit(StripSignal::RedrawRequested);
        None
    }

    /// `Dragging -> Detaching`: builds the payload the host drags around.
    fn detach_dragged_tab(&mut self) -> Option<TabDrag> {
        let window = self.drag.begin_detach()?;
        let Some(info) = self.services.windows.window(self.id, window) else {
            self.drag = DragPhase::Idle;
            return None;
        };

        self.pending_detach = Some(window);
        self.arm_drag_release_timer();
        self.emit(StripSignal::GeometryChanged);
        tracing::debug!("Tab for window {} left the strip", window);

        let pixmap = match info.thumbnail.filter(|thumbnail| !thumbnail.is_null()) {
            Some(thumbnail) => DragPixmap::Thumbnail(thumbnail),
            None => DragPixmap::Icon {
                icon: info
                    .icon
                    .unwrap_or_else(|| self.services.icons.icon("tab")),
                size: DRAG_ICON_SIZE,
            },
        };
        Some(TabDrag {
            payload: TabDragPayload::for_window(window, &info.url, &info.title),
            pixmap,
        })
    }

    /// Ends the drag on left release: reorders in place, or detaches when
    /// the tab was already outside the strip.
    pub(in crate::gui::events::mouse) fn finish_drag(&mut self) {
        match self.drag.release() {
            DragPhase::Detaching { .. } => self.trigger_pending_detach(),
            DragPhase::Dragging {
                current,
                window,
                ignore_reorder: false,
                ..
            } => {
                let insert_at = tab_math::drop_index(&self.tab_rects(), self.shape, Some(current));
                if let Some(previous) = self.tabs.position_of(window)
                    && previous != insert_at
                    && previous + 1 != insert_at
                {
                    let destination =
                        tab_math::move_destination(previous, insert_at, self.tabs.len());
                    self.move_tab(previous, destination);
                }
                self.emit(StripSignal::RedrawRequested);
            }
            DragPhase::Dragging { .. } => self.emit(StripSignal::RedrawRequested),
            DragPhase::Idle | DragPhase::Pressed { .. } => {}
        }
    }

    /// Reports the end of an external tab drag started by
    /// [`TabStrip::on_cursor_moved`]. `accepted` is `true` when some strip
    /// took the drop; otherwise the tab is detached into a new window.
    pub fn finish_external_drag(&mut self, accepted: bool) {
        if self.drag.is_detaching() {
            self.drag = DragPhase::Idle;
        }
        if accepted {
            self.pending_detach = None;
            self.timers.drag_release = None;
        } else {
            self.trigger_pending_detach();
        }
    }

    /// Triggers the detach action for the dragged window, at most once per
    /// external drag.
    fn trigger_pending_detach(&mut self) {
        let Some(window) = self.pending_detach.take() else {
            return;
        };
        self.timers.drag_release = None;
        tracing::debug!("Detaching window {}", window);
        self.services
            .actions
            .trigger(ActionId::DetachTab, &ActionParameters::for_window(window));
    }
}
