use serde::{Deserialize, Serialize};

use crate::host::SettingsStore;

/// Fallback when a negative maximum tab size is configured.
pub const DEFAULT_MAXIMUM_TAB_SIZE: i64 = 250;

/// Fallback when a negative minimum tab size is configured.
pub const DEFAULT_MINIMUM_TAB_SIZE: i64 = 40;

/// Largest tab size accepted from settings, in pixels.
pub const TAB_SIZE_LIMIT: i64 = 16_384;

/// Platform start-drag distance in logical pixels.
pub const DEFAULT_START_DRAG_DISTANCE: i64 = 10;

/// Persisted preferences that shape the strip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarSettings {
    pub show_close_button: bool,
    pub show_url_icon: bool,
    pub enable_previews: bool,
    pub maximum_tab_size: u32,
    pub minimum_tab_size: u32,
    pub require_modifier_to_switch_tab_on_scroll: bool,
    pub warn_open_multiple_dropped_urls: bool,
    pub start_drag_distance: u32,
}

impl Default for TabBarSettings {
    fn default() -> Self {
        Self {
            show_close_button: true,
            show_url_icon: true,
            enable_previews: true,
            maximum_tab_size: DEFAULT_MAXIMUM_TAB_SIZE as u32,
            minimum_tab_size: DEFAULT_MINIMUM_TAB_SIZE as u32,
            require_modifier_to_switch_tab_on_scroll: true,
            warn_open_multiple_dropped_urls: true,
            start_drag_distance: DEFAULT_START_DRAG_DISTANCE as u32,
        }
    }
}

/// Identifier of one option in the settings store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsOption {
    ShowCloseButton,
    ShowUrlIcon,
    EnablePreviews,
    MaximumTabSize,
    MinimumTabSize,
    RequireModifierToSwitchTabOnScroll,
    WarnOpenMultipleDroppedUrls,
    StartDragDistance,
}

impl SettingsOption {
    pub const ALL: &'static [SettingsOption] = &[
        SettingsOption::ShowCloseButton,
        SettingsOption::ShowUrlIcon,
        SettingsOption::EnablePreviews,
        SettingsOption::MaximumTabSize,
        SettingsOption::MinimumTabSize,
        SettingsOption::RequireModifierToSwitchTabOnScroll,
        SettingsOption::WarnOpenMultipleDroppedUrls,
        SettingsOption::StartDragDistance,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
}

impl OptionValue {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(value),
            OptionValue::Int(value) => Some(value != 0),
        }
    }

    pub fn as_int(self) -> Option<i64> {
        match self {
            OptionValue::Int(value) => Some(value),
            OptionValue::Bool(_) => None,
        }
    }
}

impl TabBarSettings {
    /// Reads every option from `store`, keeping defaults for missing ones.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let mut settings = Self::default();
        for &option in SettingsOption::ALL {
            if let Some(value) = store.value(option) {
                settings.apply(option, value);
            }
        }
        settings
    }

    pub fn value(&self, option: SettingsOption) -> OptionValue {
        match option {
            SettingsOption::ShowCloseButton => OptionValue::Bool(self.show_close_button),
            SettingsOption::ShowUrlIcon => OptionValue::Bool(self.show_url_icon),
            SettingsOption::EnablePreviews => OptionValue::Bool(self.enable_previews),
            SettingsOption::MaximumTabSize => OptionValue::Int(self.maximum_tab_size as i64),
            SettingsOption::MinimumTabSize => OptionValue::Int(self.minimum_tab_size as i64),
            SettingsOption::RequireModifierToSwitchTabOnScroll => {
                OptionValue::Bool(self.require_modifier_to_switch_tab_on_scroll)
            }
            SettingsOption::WarnOpenMultipleDroppedUrls => {
                OptionValue::Bool(self.warn_open_multiple_dropped_urls)
            }
            SettingsOption::StartDragDistance => OptionValue::Int(self.start_drag_distance as i64),
        }
    }

    /// Applies one option value. Negative sizes fall back to their defaults
    /// and tab sizes are capped at [`TAB_SIZE_LIMIT`]; values of the wrong
    /// kind are ignored. Returns `true` when the stored
    /// value changed.
    pub fn apply(&mut self, option: SettingsOption, value: OptionValue) -> bool {
        let before = self.clone();
        match option {
            SettingsOption::ShowCloseButton => {
                if let Some(v) = value.as_bool() {
                    self.show_close_button = v;
                }
            }
            SettingsOption::ShowUrlIcon => {
                if let Some(v) = value.as_bool() {
                    self.show_url_icon = v;
                }
            }
            SettingsOption::EnablePreviews => {
                if let Some(v) = value.as_bool() {
                    self.enable_previews = v;
                }
            }
            SettingsOption::MaximumTabSize => {
                if let Some(v) = value.as_int() {
                    self.maximum_tab_size = tab_size_or(v, DEFAULT_MAXIMUM_TAB_SIZE);
                }
            }
            SettingsOption::MinimumTabSize => {
                if let Some(v) = value.as_int() {
                    self.minimum_tab_size = tab_size_or(v, DEFAULT_MINIMUM_TAB_SIZE);
                }
            }
            SettingsOption::RequireModifierToSwitchTabOnScroll => {
                if let Some(v) = value.as_bool() {
                    self.require_modifier_to_switch_tab_on_scroll = v;
                }
            }
            SettingsOption::WarnOpenMultipleDroppedUrls => {
                if let Some(v) = value.as_bool() {
                    self.warn_open_multiple_dropped_urls = v;
                }
            }
            SettingsOption::StartDragDistance => {
                if let Some(v) = value.as_int() {
                    self.start_drag_distance = non_negative_or(v, DEFAULT_START_DRAG_DISTANCE);
                }
            }
        }
        *self != before
    }
}

fn non_negative_or(value: i64, fallback: i64) -> u32 {
    let value = if value < 0 { fallback } else { value };
    value.min(u32::MAX as i64) as u32
}

fn tab_size_or(value: i64, fallback: i64) -> u32 {
    non_negative_or(value, fallback).min(TAB_SIZE_LIMIT as u32)
}
