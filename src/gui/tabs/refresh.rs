use crate::gui::tabs::tab_icon_for;
use crate::gui::*;

impl TabStrip {
    /// Refreshes mirrored title, URL and icon of one tab, or of all tabs
    /// when `index` is `None`, then re-evaluates hover.
    pub fn update_tabs(&mut self, index: Option<usize>) {
        let range = match index {
            Some(i) if i < self.tabs.len() => i..i + 1,
            Some(_) => 0..0,
            None => 0..self.tabs.len(),
        };

        for i in range {
            let info = self.window_info(i);
            let state = info
                .as_ref()
                .map_or(LoadingState::Finished, |info| info.loading_state);
            let icons = self.services.icons.clone();
            let icon = tab_icon_for(
                state,
                info.as_ref().and_then(|info| info.icon.clone()),
                |name| icons.icon(name),
            );

            let Some(tab) = self.tabs.get_mut(i) else {
                continue;
            };
            if let Some(info) = info {
                tab.title = info.title;
                tab.url = info.url;
            }
            tab.icon = Some(icon);
        }

        self.update_buttons();
        self.emit(StripSignal::RedrawRequested);

        self.hovered_tab = None;
        let hovered = self.pointer_tab();
        self.tab_hovered(hovered);
    }

    /// Applies one window change notification.
    pub(in crate::gui) fn window_changed(&mut self, window: WindowId, change: WindowChange) {
        match change {
            WindowChange::PinnedChanged => self.update_pinned_tabs_amount(Some(window)),
            WindowChange::TitleChanged
            | WindowChange::IconChanged
            | WindowChange::LoadingStateChanged => {
                if let Some(index) = self.tabs.position_of(window) {
                    self.update_tabs(Some(index));
                }
            }
        }
    }
}
