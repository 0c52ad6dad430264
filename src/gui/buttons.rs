//! Per-tab icon and close buttons.

use crate::gui::tabs::new_close_button;
use crate::gui::*;

impl TabStrip {
    /// Recomputes visibility and glyph of every tab's buttons.
    ///
    /// When the last tab is narrower than the narrow threshold, only the
    /// current tab shows its close button and the current tab hides its
    /// icon to make room. Pinned tabs show a lock instead of the close
    /// button, and only on vertical strips.
    pub fn update_buttons(&mut self) {
        let count = self.tabs.len();
        if count == 0 {
            return;
        }
        let is_narrow = tab_math::is_narrow(&self.metrics, self.tab_length(count - 1));
        let is_vertical = self.shape.is_vertical();
        let current = self.tabs.current();

        for (i, tab) in self.tabs.iter_mut().enumerate() {
            let is_current = current == Some(i);
            let is_pinned = tab.is_pinned;

            if let Some(icon) = tab.icon_button.as_mut() {
                icon.visible = is_pinned || !is_current || !is_narrow;
            }
            if let Some(close) = tab.close_button.as_mut() {
                close.glyph = if is_pinned {
                    CloseGlyph::Locked
                } else {
                    CloseGlyph::Close
                };
                close.visible =
                    (is_pinned && is_vertical) || ((is_current || !is_narrow) && !is_pinned);
            }
        }
    }

    pub(in crate::gui) fn set_show_close_button(&mut self, show: bool) {
        for tab in self.tabs.iter_mut() {
            if show {
                tab.close_button.get_or_insert(new_close_button(tab.is_pinned));
            } else if !tab.is_pinned {
                tab.close_button = None;
            }
        }
        self.update_tabs(None);
    }

    pub(in crate::gui) fn set_show_url_icon(&mut self, show: bool) {
        for tab in self.tabs.iter_mut() {
            tab.icon_button = show.then_some(IconButton { visible: true });
        }
        self.update_tabs(None);
    }

    /// Tooltip of the close button of tab `index`: "Close Tab" plus the
    /// first shortcut of the close action. `None` for the pinned lock.
    pub fn close_button_tooltip(&self, index: usize) -> Option<String> {
        let tab = self.tabs.get(index)?;
        if tab.is_pinned || tab.close_button.is_none() {
            return None;
        }
        let label = crate::i18n::t().tooltip_close_tab;
        let shortcut = self
            .services
            .actions
            .definition(ActionId::CloseTab)
            .and_then(|definition| definition.shortcuts.into_iter().next());
        Some(match shortcut {
            Some(shortcut) => format!("{label} ({shortcut})"),
            None => label.to_owned(),
        })
    }

    /// Tracks the pointer entering and leaving close buttons.
    pub(in crate::gui) fn close_button_hovered(&mut self, index: Option<usize>) {
        if index == self.hovered_close {
            return;
        }
        let previous = std::mem::replace(&mut self.hovered_close, index);
        if previous.is_some() {
            self.arm_preview_timer();
        }
        if let Some(i) = index
            && self.tabs.get(i).is_some_and(|tab| !tab.is_pinned)
        {
            self.hide_preview();
        }
    }
}
