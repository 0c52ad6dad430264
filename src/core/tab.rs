use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use winit::dpi::PhysicalSize;

/// Stable identifier of a browsing-context window.
///
/// Tab indices shift on every insert, remove and move; this id does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page loading state as reported by the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Finished,
    /// Load is queued (e.g. a restored background tab).
    Delayed,
    Ongoing,
    Crashed,
}

/// Named icon handle, resolved to pixels by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(Arc<str>);

impl Icon {
    pub fn named(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Page thumbnail used for hover previews and drag pixmaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub size: PhysicalSize<u32>,
    /// Premultiplied RGBA, row-major.
    pub rgba: Arc<[u8]>,
}

impl Thumbnail {
    pub fn is_null(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }
}

/// What the icon slot of a tab shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TabIcon {
    /// Animated loading indicator; `speed` is a percentage of normal speed.
    Spinner { speed: u32 },
    Image(Icon),
}

/// Side of the tab a button sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSide {
    Left,
    Right,
}

impl ButtonSide {
    /// Platform default for the close button.
    pub fn platform_close_side() -> Self {
        if cfg!(target_os = "macos") {
            ButtonSide::Left
        } else {
            ButtonSide::Right
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ButtonSide::Left => ButtonSide::Right,
            ButtonSide::Right => ButtonSide::Left,
        }
    }
}

/// Glyph painted in the close-button slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseGlyph {
    /// Style-provided close cross.
    Close,
    /// Lock icon shown on pinned tabs; not clickable.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconButton {
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseButton {
    pub visible: bool,
    pub glyph: CloseGlyph,
}

/// One slot in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TabRecord {
    pub window: WindowId,
    pub title: String,
    pub url: String,
    /// Cached from the window; refreshed on pin-state notifications.
    pub is_pinned: bool,
    pub icon: Option<TabIcon>,
    pub icon_button: Option<IconButton>,
    pub close_button: Option<CloseButton>,
}

impl TabRecord {
    pub fn new(window: WindowId, title: impl Into<String>, url: impl Into<String>, is_pinned: bool) -> Self {
        Self {
            window,
            title: title.into(),
            url: url.into(),
            is_pinned,
            icon: None,
            icon_button: None,
            close_button: None,
        }
    }

    pub fn shows_close_button(&self) -> bool {
        self.close_button.is_some_and(|b| b.visible)
    }

    pub fn shows_icon_button(&self) -> bool {
        self.icon_button.is_some_and(|b| b.visible)
    }

    /// Close button that actually closes the window (not the pinned lock).
    pub fn has_live_close_button(&self) -> bool {
        self.close_button
            .is_some_and(|b| b.visible && b.glyph == CloseGlyph::Close)
    }
}
