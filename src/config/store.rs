use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use super::persistence::{load_settings_from, write_settings};
use super::{OptionValue, SettingsOption, TabBarSettings};
use crate::host::{SettingsStore, StripNotification};

/// Settings store backed by a RON file.
///
/// Every change is written through to disk and broadcast to subscribers.
/// Subscribers whose receiver is gone are dropped on the next broadcast.
pub struct FileSettingsStore {
    path: Option<PathBuf>,
    settings: RefCell<TabBarSettings>,
    subscribers: RefCell<Vec<Sender<StripNotification>>>,
}

impl FileSettingsStore {
    /// Opens the store at the default location.
    pub fn open() -> Self {
        Self::with_path(super::persistence::settings_path())
    }

    /// Opens the store at `path`; `None` keeps settings in memory only.
    pub fn with_path(path: Option<PathBuf>) -> Self {
        let settings = path
            .as_deref()
            .map(load_settings_from)
            .unwrap_or_default();
        Self {
            path,
            settings: RefCell::new(settings),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> TabBarSettings {
        self.settings.borrow().clone()
    }
}

impl SettingsStore for FileSettingsStore {
    fn value(&self, option: SettingsOption) -> Option<OptionValue> {
        Some(self.settings.borrow().value(option))
    }

    fn set_value(&self, option: SettingsOption, value: OptionValue) {
        if !self.settings.borrow_mut().apply(option, value) {
            return;
        }
        let settings = self.snapshot();
        if let Some(path) = &self.path
            && let Err(err) = write_settings(path, &settings)
        {
            tracing::warn!("{err:#}");
        }

        let notification = StripNotification::Option {
            option,
            value: settings.value(option),
        };
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(notification.clone()).is_ok());
    }

    fn subscribe(&self, sender: Sender<StripNotification>) {
        self.subscribers.borrow_mut().push(sender);
    }
}
