mod model;
mod persistence;
mod store;

pub use model::{
    DEFAULT_MAXIMUM_TAB_SIZE, DEFAULT_MINIMUM_TAB_SIZE, DEFAULT_START_DRAG_DISTANCE, OptionValue,
    SettingsOption, TAB_SIZE_LIMIT, TabBarSettings,
};
pub use persistence::{config_base_dir, settings_path};
pub use store::FileSettingsStore;
