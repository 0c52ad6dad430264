//! Hover previews.

use crate::gui::shared::preview_math;
use crate::gui::*;

/// Screen rectangle assumed until the host reports the real one.
const UNBOUNDED_SCREEN: Rect = Rect::new(-(1 << 24), -(1 << 24), 1 << 25, 1 << 25);

impl TabStrip {
    /// Tells the strip whether its top-level window has focus. Previews are
    /// only shown for active windows.
    pub fn set_window_active(&mut self, active: bool) {
        self.window_active = active;
        if !active {
            self.hide_preview();
        }
    }

    /// Hover moved to another tab (or off all tabs).
    pub fn tab_hovered(&mut self, index: Option<usize>) {
        if index == self.hovered_tab {
            return;
        }
        self.hovered_tab = index;

        let tip = index
            .and_then(|i| self.window_info(i))
            .map(|info| info.url)
            .unwrap_or_default();
        self.emit(StripSignal::StatusTip(tip));
        self.emit(StripSignal::RedrawRequested);

        // A preview that was dismissed by a click comes back as soon as the
        // pointer reaches another tab, without waiting for the timer.
        let follow = self.preview.as_ref().is_some_and(|preview| {
            preview.is_visible() || self.timers.preview.is_none()
        });
        if follow {
            self.show_preview(index);
        }
    }

    /// Shows, moves or hides the preview for tab `index`.
    pub fn show_preview(&mut self, index: Option<usize>) {
        if !self.settings.enable_previews || !self.window_active {
            self.hide_preview();
            return;
        }

        let info = index.and_then(|i| self.window_info(i).map(|info| (i, info)));
        let (index, info) = match info {
            Some(found) if self.clicked_tab.is_none() => found,
            _ => {
                if let Some(preview) = self.preview.as_mut() {
                    preview.hide();
                }
                return;
            }
        };
        let Some(rect) = self.tab_rect(index) else {
            return;
        };
        let rect = rect.translated(self.global_origin.x, self.global_origin.y);
        let screen = self.screen.unwrap_or(UNBOUNDED_SCREEN);
        let shape = self.shape;
        let is_current = self.tabs.current() == Some(index);

        let factory = self.services.previews.clone();
        let preview = self.preview.get_or_insert_with(|| factory.create());
        let thumbnail = if is_current { None } else { info.thumbnail.as_ref() };
        preview.set_preview(&info.title, thumbnail);

        let position = preview_math::preview_position(shape, rect, preview.size(), screen);
        if preview.is_visible() {
            preview.animate_to(position);
        } else {
            preview.show_at(position);
        }
        tracing::trace!("Preview for window {} at {:?}", info.id, position);
    }

    /// Hides the preview and cancels a pending show.
    pub fn hide_preview(&mut self) {
        if let Some(preview) = self.preview.as_mut() {
            preview.hide();
        }
        self.timers.preview = None;
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview.as_ref().is_some_and(|preview| preview.is_visible())
    }
}
