use std::time::Instant;

use crate::gui::*;

/// Change broadcast to listeners registered with [`TabStrip::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripSignal {
    /// A tab was added or removed; carries the new count.
    TabCountChanged(usize),
    /// Tabs were reordered or their buttons changed.
    LayoutChanged,
    CurrentChanged(Option<usize>),
    /// Preferred or maximum size changed; the host should re-run its layout.
    GeometryChanged,
    /// Text for the host's status bar. Empty clears it.
    StatusTip(String),
    /// Visual state changed without affecting layout (hover, drop indicator).
    RedrawRequested,
}

/// Why the host asks for a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuReason {
    /// Right click. Left to the gesture recognizer, no menu is built.
    Mouse,
    /// Menu key or shortcut.
    Keyboard,
    Other,
}

/// What the host should show under the pointer during an external tab drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPixmap {
    Thumbnail(Thumbnail),
    Icon { icon: Icon, size: u32 },
}

/// A tab leaving the strip. The host runs it as an OS drag and reports the
/// result through [`TabStrip::finish_external_drag`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabDrag {
    pub payload: TabDragPayload,
    pub pixmap: DragPixmap,
}

/// Result of a drop on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A tab was reordered or moved here from another strip.
    Moved,
    /// URLs were opened as new tabs.
    Copied,
    Ignored,
}

/// Everything a painter needs to draw one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabView {
    pub index: usize,
    pub window: WindowId,
    pub rect: Rect,
    /// Title elided to the room left by the visible buttons.
    pub title: String,
    pub is_current: bool,
    pub is_hovered: bool,
    pub is_pinned: bool,
    pub icon: Option<TabIcon>,
    /// Rectangle of the visible icon slot.
    pub icon_rect: Option<Rect>,
    /// Rectangle and glyph of the visible close slot.
    pub close: Option<(Rect, CloseGlyph)>,
}

/// Pending deadlines. `None` means the timer is not running.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct StripTimers {
    pub(super) preview: Option<Instant>,
    pub(super) layout: Option<Instant>,
    pub(super) drag_release: Option<Instant>,
}

pub(super) type Listener = Box<dyn FnMut(&StripSignal)>;

/// A browser window's tab strip.
///
/// Owns the ordered tab records, the drag state machine, hover and preview
/// state, and the timers that drive deferred work. All collaborators are
/// reached through [`Services`].
pub struct TabStrip {
    pub(super) id: StripId,
    pub(super) services: Services,
    pub(super) settings: TabBarSettings,
    pub(super) tabs: TabList,

    // Geometry
    pub(super) shape: StripShape,
    pub(super) in_toolbar: bool,
    pub(super) size: PhysicalSize<u32>,
    pub(super) metrics: TabLayoutMetrics,
    pub(super) close_side: ButtonSide,
    pub(super) global_origin: PhysicalPosition<i32>,
    pub(super) screen: Option<Rect>,
    /// Non-zero while tab length is held after a close under the pointer.
    pub(super) frozen_tab_size: u32,

    // Pointer
    pub(super) pointer: Option<(f64, f64)>,
    pub(super) under_mouse: bool,
    pub(super) modifiers: ModifiersState,
    pub(super) window_active: bool,
    pub(super) hovered_tab: Option<usize>,
    pub(super) hovered_close: Option<usize>,
    pub(super) pressed_close: Option<WindowId>,
    /// Tab under the pointer when the context menu opened.
    pub(super) clicked_tab: Option<usize>,

    // Drag and drop
    pub(super) drag: DragPhase,
    /// Pointer position of an external drag hovering the strip.
    pub(super) drag_move_position: Option<(f64, f64)>,
    /// Window of an external tab drag whose detach is still owed.
    pub(super) pending_detach: Option<WindowId>,

    pub(super) preview: Option<Box<dyn PreviewPopup>>,
    pub(super) timers: StripTimers,
    pub(super) listeners: Vec<Listener>,
    pub(super) tx: Sender<StripNotification>,
    pub(super) rx: Receiver<StripNotification>,
}
