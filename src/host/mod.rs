//! Collaborators the strip consumes but does not own.
//!
//! Everything here is implemented by the embedding browser: the window
//! manager, the action registry, gesture recognition, settings storage,
//! theming, the preview popup widget and modal prompts. All calls happen on
//! the UI thread, so implementations take `&self` and use interior
//! mutability where they need it.
//!
//! The strip calls into these while the host holds it mutably. An
//! implementation must not call back into the strip from inside a call;
//! changes go through the strip's notification channel.

mod actions;
mod gestures;
mod payload;

use std::rc::Rc;
use std::sync::mpsc::Sender;

use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::config::{OptionValue, SettingsOption};
use crate::core::{Icon, LoadingState, Thumbnail, WindowId};

pub use actions::{ActionDefinition, ActionId, ActionParameters};
pub use gestures::{GestureContext, GestureInput, GestureInputKind};
pub use payload::{TAB_PAYLOAD_MIME, TabDragPayload};

/// Identifies a strip (one per top-level browser window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripId(pub u64);

/// Snapshot of a browsing-context window as the strip needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub title: String,
    pub url: String,
    pub icon: Option<Icon>,
    pub thumbnail: Option<Thumbnail>,
    pub loading_state: LoadingState,
    pub is_pinned: bool,
    pub is_muted: bool,
    pub is_private: bool,
    pub can_clone: bool,
}

impl WindowInfo {
    pub fn new(id: WindowId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            icon: None,
            thumbnail: None,
            loading_state: LoadingState::Finished,
            is_pinned: false,
            is_muted: false,
            is_private: false,
            can_clone: true,
        }
    }
}

/// Window-side change the strip subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    TitleChanged,
    IconChanged,
    LoadingStateChanged,
    PinnedChanged,
}

/// Notification delivered through the strip's channel.
#[derive(Debug, Clone, PartialEq)]
pub enum StripNotification {
    Window {
        window: WindowId,
        change: WindowChange,
    },
    Option {
        option: SettingsOption,
        value: OptionValue,
    },
}

pub trait WindowRegistry {
    /// Looks up a window owned by `strip`.
    fn window(&self, strip: StripId, id: WindowId) -> Option<WindowInfo>;
    /// Strip currently owning `id`, searching every top-level window.
    fn owner_of(&self, id: WindowId) -> Option<StripId>;
    /// Moves a window (possibly from another strip) to `index` in `target`.
    fn move_window(&self, id: WindowId, target: StripId, index: usize) -> bool;
    /// Opens `url` as a new tab at `index` in `target`.
    fn open_url(&self, target: StripId, url: &str, index: usize) -> bool;
    /// User asked to close the window (close button).
    fn close_window(&self, id: WindowId);
    /// The strip dropped its tab for `id`; the registry may now destroy it.
    fn release_window(&self, id: WindowId);
    fn subscribe(&self, id: WindowId, sender: Sender<StripNotification>);
    fn unsubscribe(&self, id: WindowId);
}

pub trait ActionDispatcher {
    fn definition(&self, action: ActionId) -> Option<ActionDefinition>;
    /// Enablement of global actions the strip lists without computing it.
    fn is_enabled(&self, action: ActionId) -> bool;
    fn trigger(&self, action: ActionId, parameters: &ActionParameters);
}

pub trait GestureRouter {
    /// Offers an input to the recognizer. Returns `true` when a gesture
    /// consumed it.
    fn start_gesture(
        &self,
        input: &GestureInput,
        contexts: &[GestureContext],
        parameters: &ActionParameters,
    ) -> bool;
}

pub trait SettingsStore {
    fn value(&self, option: SettingsOption) -> Option<OptionValue>;
    fn set_value(&self, option: SettingsOption, value: OptionValue);
    fn subscribe(&self, sender: Sender<StripNotification>);
}

pub trait IconTheme {
    fn icon(&self, name: &str) -> Icon;
}

/// Floating thumbnail popup shown next to a hovered tab.
pub trait PreviewPopup {
    fn set_preview(&mut self, title: &str, thumbnail: Option<&Thumbnail>);
    fn size(&self) -> PhysicalSize<u32>;
    fn is_visible(&self) -> bool;
    /// Moves the hidden popup to `position` and shows it.
    fn show_at(&mut self, position: PhysicalPosition<i32>);
    /// Slides an already visible popup to `position`.
    fn animate_to(&mut self, position: PhysicalPosition<i32>);
    fn hide(&mut self);
}

pub trait PreviewFactory {
    fn create(&self) -> Box<dyn PreviewPopup>;
}

/// Text of the "open several URLs?" question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOpenPrompt {
    pub title: String,
    pub text: String,
    pub informative_text: String,
    pub checkbox_label: String,
    pub url_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlOpenConfirmation {
    pub proceed: bool,
    /// "Do not show this message again" was ticked.
    pub dont_ask_again: bool,
}

pub trait Prompt {
    fn confirm_open_urls(&self, prompt: &UrlOpenPrompt) -> UrlOpenConfirmation;
}

/// Bundle of collaborators handed to [`crate::TabStrip::new`].
#[derive(Clone)]
pub struct Services {
    pub windows: Rc<dyn WindowRegistry>,
    pub actions: Rc<dyn ActionDispatcher>,
    pub gestures: Rc<dyn GestureRouter>,
    pub settings: Rc<dyn SettingsStore>,
    pub icons: Rc<dyn IconTheme>,
    pub previews: Rc<dyn PreviewFactory>,
    pub prompts: Rc<dyn Prompt>,
}
