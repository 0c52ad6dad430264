//! Deferred work, driven by the host's event loop.
//!
//! The strip never sleeps or spawns threads. It records deadlines; the host
//! wakes up at [`TabStrip::next_deadline`] (e.g. with
//! `ControlFlow::WaitUntil`) and calls [`TabStrip::tick`].

use std::time::{Duration, Instant};

use crate::gui::*;

/// Hover time before a preview shows up.
pub(super) const PREVIEW_DELAY: Duration = Duration::from_millis(250);

/// Debounce of tab refreshes after resizes, removals and shape changes.
pub(super) const LAYOUT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Poll interval for the mouse buttons during an external tab drag.
pub(super) const DRAG_RELEASE_POLL: Duration = Duration::from_millis(250);

impl TabStrip {
    pub(super) fn arm_preview_timer(&mut self) {
        self.timers.preview = Some(Instant::now() + PREVIEW_DELAY);
    }

    pub(super) fn arm_layout_timer(&mut self) {
        self.timers.layout = Some(Instant::now() + LAYOUT_DEBOUNCE);
    }

    pub(super) fn arm_drag_release_timer(&mut self) {
        self.timers.drag_release = Some(Instant::now() + DRAG_RELEASE_POLL);
    }

    /// Earliest pending deadline, if any timer is running.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.timers.preview,
            self.timers.layout,
            self.timers.drag_release,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Fires every timer whose deadline is at or before `now`.
    ///
    /// `buttons_down` tells whether any mouse button is still held; an
    /// external tab drag is considered finished once none is.
    pub fn tick(&mut self, now: Instant, buttons_down: bool) {
        if self.timers.preview.is_some_and(|deadline| deadline <= now) {
            self.timers.preview = None;
            let index = self.pointer_tab();
            self.show_preview(index);
        }

        if self.timers.layout.is_some_and(|deadline| deadline <= now) {
            self.timers.layout = None;
            self.update_tabs(None);
        }

        if self.timers.drag_release.is_some_and(|deadline| deadline <= now) {
            if buttons_down {
                self.timers.drag_release = Some(now + DRAG_RELEASE_POLL);
            } else {
                tracing::debug!("External tab drag ended without a drop report");
                self.finish_external_drag(false);
            }
        }
    }
}
