mod buttons;
mod events;
mod layout;
pub mod menus;
mod preview;
pub mod shared;
mod state;
mod tabs;
mod timers;

use std::sync::mpsc::{self, Receiver, Sender};

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::ModifiersState;

use crate::config::{OptionValue, SettingsOption, TabBarSettings};
use crate::core::{
    ButtonSide, CloseButton, CloseGlyph, DragPhase, Icon, IconButton, LoadingState, Rect,
    StripShape, TabIcon, TabList, TabRecord, Thumbnail, ToolBarArea, WindowId,
};
use crate::host::{
    ActionId, ActionParameters, GestureContext, GestureInput, GestureInputKind, PreviewPopup,
    Services, StripId, StripNotification, TabDragPayload, UrlOpenPrompt, WindowChange, WindowInfo,
};

use self::shared::tab_hit_test::{self, ButtonVisibility, StripHit};
use self::shared::tab_math::{self, DropIndicator, TabLayoutMetrics, TabSizing};
use self::state::{Listener, StripTimers};

pub use self::menus::{ContextMenu, MenuCommand, MenuEntry};
pub use self::state::{
    ContextMenuReason, DragPixmap, DropOutcome, StripSignal, TabDrag, TabStrip, TabView,
};

impl TabStrip {
    /// Creates an empty strip.
    ///
    /// Reads every tab bar option from the settings store and subscribes to
    /// its change notifications. The strip starts collapsed to zero size
    /// until the first tab is added.
    pub fn new(id: StripId, services: Services) -> Self {
        let (tx, rx) = mpsc::channel::<StripNotification>();
        let settings = TabBarSettings::from_store(services.settings.as_ref());
        services.settings.subscribe(tx.clone());

        TabStrip {
            id,
            services,
            settings,
            tabs: TabList::new(),
            shape: StripShape::North,
            in_toolbar: false,
            size: PhysicalSize::new(0, 0),
            metrics: TabLayoutMetrics::default(),
            close_side: ButtonSide::platform_close_side(),
            global_origin: PhysicalPosition::new(0, 0),
            screen: None,
            frozen_tab_size: 0,
            pointer: None,
            under_mouse: false,
            modifiers: ModifiersState::empty(),
            window_active: true,
            hovered_tab: None,
            hovered_close: None,
            pressed_close: None,
            clicked_tab: None,
            drag: DragPhase::Idle,
            drag_move_position: None,
            pending_detach: None,
            preview: None,
            timers: StripTimers::default(),
            listeners: Vec::new(),
            tx,
            rx,
        }
    }

    pub fn id(&self) -> StripId {
        self.id
    }

    /// Current tab bar options as the strip applies them.
    pub fn settings(&self) -> &TabBarSettings {
        &self.settings
    }

    /// Registers a listener for [`StripSignal`]s.
    pub fn connect(&mut self, listener: impl FnMut(&StripSignal) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Sender half of the strip's notification channel.
    pub fn notification_sender(&self) -> Sender<StripNotification> {
        self.tx.clone()
    }

    fn emit(&mut self, signal: StripSignal) {
        tracing::trace!("Strip {} signal: {:?}", self.id.0, signal);
        for listener in &mut self.listeners {
            listener(&signal);
        }
    }

    /// Looks up the window bound to the tab at `index`.
    fn window_info(&self, index: usize) -> Option<WindowInfo> {
        let tab = self.tabs.get(index)?;
        self.services.windows.window(self.id, tab.window)
    }

    fn action_parameters(&self, index: Option<usize>) -> ActionParameters {
        index
            .and_then(|i| self.window_info(i))
            .map(|info| ActionParameters::for_window(info.id))
            .unwrap_or_default()
    }
}
