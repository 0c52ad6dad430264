//! Drags arriving from outside: tabs from this or another strip, and URLs.

use crate::gui::*;

impl TabStrip {
    /// An external drag entered the strip. Returns `true` when the payload
    /// is acceptable: it carries URLs, or it is a tab drag from a known strip.
    pub fn on_drag_entered(
        &mut self,
        payload: &TabDragPayload,
        source: Option<StripId>,
        position: PhysicalPosition<f64>,
    ) -> bool {
        let accepted = payload.has_urls() || self.tab_source(payload, source).is_some();
        if accepted {
            self.drag_move_position = Some((position.x, position.y));
            self.emit(StripSignal::RedrawRequested);
        }
        accepted
    }

    pub fn on_drag_moved(&mut self, position: PhysicalPosition<f64>) {
        self.drag_move_position = Some((position.x, position.y));
        self.emit(StripSignal::RedrawRequested);
    }

    pub fn on_drag_left(&mut self) {
        self.drag_move_position = None;
        self.emit(StripSignal::RedrawRequested);
    }

    /// Something was dropped at the last drag position.
    ///
    /// A tab from this strip is reordered, a tab from another strip is moved
    /// here through the registry, and URLs are opened as new tabs starting at
    /// the drop index.
    pub fn on_drop(&mut self, payload: &TabDragPayload, source: Option<StripId>) -> DropOutcome {
        let drop_index = self.drop_index();

        let outcome = match (self.tab_source(payload, source), payload.window) {
            (Some(source), Some(window)) => {
                self.drop_window(source, window, drop_index);
                DropOutcome::Moved
            }
            _ if payload.has_urls() => {
                if self.drop_urls(&payload.urls, drop_index) {
                    DropOutcome::Copied
                } else {
                    DropOutcome::Ignored
                }
            }
            _ => DropOutcome::Ignored,
        };

        self.drag_move_position = None;
        self.emit(StripSignal::RedrawRequested);
        outcome
    }

    /// Strip a dragged tab comes from. Drags that lost their source (e.g.
    /// through the OS clipboard) are resolved through the registry.
    fn tab_source(&self, payload: &TabDragPayload, source: Option<StripId>) -> Option<StripId> {
        let window = payload.window?;
        source.or_else(|| self.services.windows.owner_of(window))
    }

    fn drop_window(&mut self, source: StripId, window: WindowId, drop_index: usize) {
        let previous = if source == self.id {
            self.tabs.position_of(window)
        } else {
            None
        };

        match previous {
            None => {
                tracing::debug!(
                    "Moving window {} from strip {} to strip {} at {}",
                    window,
                    source.0,
                    self.id.0,
                    drop_index
                );
                if !self.services.windows.move_window(window, self.id, drop_index) {
                    tracing::warn!("Window {} could not be moved to strip {}", window, self.id.0);
                }
            }
            Some(previous) if previous != drop_index && previous + 1 != drop_index => {
                let destination = tab_math::move_destination(previous, drop_index, self.tabs.len());
                self.move_tab(previous, destination);
            }
            Some(_) => {}
        }
    }

    /// Opens dropped URLs, asking first when there are several.
    /// Returns `false` when the user declined.
    fn drop_urls(&mut self, urls: &[String], drop_index: usize) -> bool {
        if urls.len() > 1 && self.settings.warn_open_multiple_dropped_urls {
            let t = crate::i18n::t();
            let prompt = UrlOpenPrompt {
                title: t.prompt_question_title.to_owned(),
                text: t.open_urls_text(urls.len()),
                informative_text: t.prompt_continue.to_owned(),
                checkbox_label: t.prompt_dont_ask_again.to_owned(),
                url_count: urls.len(),
            };
            let answer = self.services.prompts.confirm_open_urls(&prompt);
            self.services.settings.set_value(
                SettingsOption::WarnOpenMultipleDroppedUrls,
                OptionValue::Bool(!answer.dont_ask_again),
            );
            if !answer.proceed {
                tracing::debug!("Opening {} dropped URLs declined", urls.len());
                return false;
            }
        }

        for (i, url) in urls.iter().enumerate() {
            if !self.services.windows.open_url(self.id, url, drop_index + i) {
                tracing::warn!("Failed to open dropped URL {}", url);
            }
        }
        true
    }
}
