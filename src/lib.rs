//! Tab strip of a desktop web browser's window chrome.
//!
//! [`TabStrip`] keeps an ordered list of tabs bound to browsing-context
//! windows and turns pointer, wheel, drag and menu input into reordering,
//! visual state and dispatched actions. It does not paint: the host asks for
//! [`TabStrip::tab_views`] and [`TabStrip::drop_indicator`] and draws them
//! however it likes. Everything the strip needs from the browser is reached
//! through the traits in [`host`].

pub mod config;
pub mod core;
pub mod gui;
pub mod host;
pub mod i18n;

pub use crate::core::{Rect, StripShape, TabRecord, ToolBarArea, WindowId};
pub use crate::gui::shared::tab_hit_test::StripHit;
pub use crate::gui::shared::tab_math::{DropIndicator, TabLayoutMetrics};
pub use crate::gui::{
    ContextMenu, ContextMenuReason, DragPixmap, DropOutcome, MenuCommand, MenuEntry, StripSignal,
    TabDrag, TabStrip, TabView,
};
pub use crate::host::{Services, StripId};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
