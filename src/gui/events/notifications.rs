use crate::gui::*;

impl TabStrip {
    /// Drains window and settings notifications queued since the last call.
    pub fn process_notifications(&mut self) {
        while let Ok(notification) = self.rx.try_recv() {
            match notification {
                StripNotification::Window { window, change } => self.window_changed(window, change),
                StripNotification::Option { option, value } => self.option_changed(option, value),
            }
        }
    }

    /// Applies a changed tab bar option.
    pub fn option_changed(&mut self, option: SettingsOption, value: OptionValue) {
        if !self.settings.apply(option, value) {
            return;
        }
        tracing::debug!("Option {:?} changed to {:?}", option, value);

        match option {
            SettingsOption::ShowCloseButton => {
                let show = self.settings.show_close_button;
                self.set_show_close_button(show);
            }
            SettingsOption::ShowUrlIcon => {
                let show = self.settings.show_url_icon;
                self.set_show_url_icon(show);
            }
            SettingsOption::EnablePreviews => {
                if !self.settings.enable_previews {
                    self.hide_preview();
                }
            }
            SettingsOption::MaximumTabSize | SettingsOption::MinimumTabSize => {
                self.emit(StripSignal::GeometryChanged);
                self.update_tabs(None);
            }
            SettingsOption::RequireModifierToSwitchTabOnScroll
            | SettingsOption::WarnOpenMultipleDroppedUrls
            | SettingsOption::StartDragDistance => {}
        }
    }
}
