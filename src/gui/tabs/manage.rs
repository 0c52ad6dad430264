use crate::gui::*;

impl TabStrip {
    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab(&self, index: usize) -> Option<&TabRecord> {
        self.tabs.get(index)
    }

    pub fn window_at(&self, index: usize) -> Option<WindowId> {
        self.tabs.get(index).map(|tab| tab.window)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.tabs.current()
    }

    pub fn pinned_tabs_amount(&self) -> usize {
        self.tabs.pinned_count()
    }

    /// Inserts a tab for `window` at `position`.
    ///
    /// Returns `false` when the registry does not know the window. The index
    /// is clamped into the window's partition, so a pinned window always
    /// lands among the pinned tabs.
    pub fn add_tab(&mut self, position: usize, window: WindowId) -> bool {
        let Some(info) = self.services.windows.window(self.id, window) else {
            tracing::warn!("Cannot add tab: window {} is unknown", window);
            return false;
        };
        if self.tabs.position_of(window).is_some() {
            tracing::debug!("Window {} already has a tab", window);
            return false;
        }

        let was_empty = self.tabs.is_empty();
        let current_before = self.tabs.current();

        let mut record = TabRecord::new(info.id, info.title, info.url, info.is_pinned);
        if self.settings.show_url_icon {
            record.icon_button = Some(IconButton { visible: true });
        }
        if self.settings.show_close_button || record.is_pinned {
            record.close_button = Some(new_close_button(record.is_pinned));
        }

        let index = self.tabs.insert(position, record);
        self.services.windows.subscribe(window, self.tx.clone());
        tracing::debug!("Added tab for window {} at {}", window, index);

        if was_empty {
            // Leaves the collapsed zero size.
            self.emit(StripSignal::GeometryChanged);
        }
        self.update_buttons();
        self.update_tabs(Some(index));
        let count = self.tabs.len();
        self.emit(StripSignal::TabCountChanged(count));
        if self.tabs.current() != current_before {
            self.current_tab_changed();
        }
        true
    }

    /// Removes the tab at `index` and releases its window.
    pub fn remove_tab(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }

        if self.under_mouse {
            self.frozen_tab_size = self.tab_length(self.tabs.len() - 1);
        }

        let current_before = self.tabs.current();
        let current_window_before = self.tabs.current_window();
        let Some(record) = self.tabs.remove(index) else {
            return false;
        };
        self.services.windows.unsubscribe(record.window);
        self.services.windows.release_window(record.window);
        tracing::debug!("Removed tab for window {} at {}", record.window, index);

        self.hovered_tab = None;
        self.hovered_close = None;
        if self.clicked_tab == Some(index) {
            self.clicked_tab = None;
        }
        if record.is_pinned {
            self.tabs.recount_pinned();
            self.emit(StripSignal::GeometryChanged);
        }

        if self.tabs.is_empty() {
            self.timers.layout = None;
            self.hide_preview();
            self.emit(StripSignal::GeometryChanged);
        } else {
            self.arm_layout_timer();
        }

        let count = self.tabs.len();
        self.emit(StripSignal::TabCountChanged(count));
        if self.tabs.current() != current_before
            || self.tabs.current_window() != current_window_before
        {
            self.current_tab_changed();
        } else {
            self.update_buttons();
        }

        if self.under_mouse && self.pointer_tab().is_none() {
            self.frozen_tab_size = 0;
            self.emit(StripSignal::GeometryChanged);
        }
        true
    }

    /// Moves the tab at `from` to `to` within its partition.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        let current_before = self.tabs.current();
        if !self.tabs.move_tab(from, to) {
            return false;
        }
        tracing::debug!("Moved tab from {} to {}", from, to);

        self.hovered_tab = None;
        self.tab_layout_changed();
        if self.tabs.current() != current_before {
            let current = self.tabs.current();
            self.emit(StripSignal::CurrentChanged(current));
        }
        true
    }

    /// Makes the tab at `index` current. Out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if !self.tabs.set_current(index) {
            return false;
        }
        self.current_tab_changed();
        true
    }

    /// Activates the previous tab, wrapping to the last one.
    pub fn activate_tab_on_left(&mut self) {
        let count = self.tabs.len();
        if count == 0 {
            return;
        }
        let index = match self.tabs.current() {
            Some(current) if current > 0 => current - 1,
            _ => count - 1,
        };
        self.set_current_index(index);
    }

    /// Activates the next tab, wrapping to the first one.
    pub fn activate_tab_on_right(&mut self) {
        let count = self.tabs.len();
        if count == 0 {
            return;
        }
        let index = match self.tabs.current() {
            Some(current) if current + 1 < count => current + 1,
            _ => 0,
        };
        self.set_current_index(index);
    }

    /// Re-reads the pin state of `modified` and moves its tab to the edge of
    /// its new partition.
    pub fn update_pinned_tabs_amount(&mut self, modified: Option<WindowId>) {
        if let Some(window) = modified
            && let Some(index) = self.tabs.position_of(window)
            && let Some(info) = self.services.windows.window(self.id, window)
        {
            let current_before = self.tabs.current();
            if let Some(new_index) = self.tabs.set_pinned(index, info.is_pinned) {
                tracing::debug!(
                    "Window {} {} at {}",
                    window,
                    if info.is_pinned { "pinned" } else { "unpinned" },
                    new_index
                );
                let show_close_button = self.settings.show_close_button;
                if let Some(tab) = self.tabs.get_mut(new_index) {
                    if info.is_pinned && tab.close_button.is_none() {
                        tab.close_button = Some(new_close_button(true));
                    } else if !info.is_pinned && !show_close_button {
                        tab.close_button = None;
                    }
                }
                self.tab_layout_changed();
                self.emit(StripSignal::GeometryChanged);
            }
            if self.tabs.current() != current_before {
                let current = self.tabs.current();
                self.emit(StripSignal::CurrentChanged(current));
            }
        } else {
            self.tabs.recount_pinned();
        }

        self.update_tabs(None);
    }

    pub(in crate::gui) fn current_tab_changed(&mut self) {
        let current = self.tabs.current();
        self.emit(StripSignal::CurrentChanged(current));

        if self.preview.as_ref().is_some_and(|preview| preview.is_visible()) {
            let index = self.pointer_tab();
            self.show_preview(index);
        }
        self.update_buttons();
    }

    /// Refreshes buttons after a reorder and tells listeners.
    pub(in crate::gui) fn tab_layout_changed(&mut self) {
        self.update_buttons();
        self.emit(StripSignal::LayoutChanged);
    }
}

pub(in crate::gui) fn new_close_button(is_pinned: bool) -> CloseButton {
    CloseButton {
        visible: true,
        glyph: if is_pinned {
            CloseGlyph::Locked
        } else {
            CloseGlyph::Close
        },
    }
}
