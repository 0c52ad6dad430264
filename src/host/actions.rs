use crate::core::WindowId;

/// Named user commands the strip can trigger or list in its context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    NewTab,
    NewTabPrivate,
    CloneTab,
    PinTab,
    MuteTabMedia,
    DetachTab,
    CloseTab,
    CloseOtherTabs,
    ClosePrivateTabs,
    RestoreTab,
    MinimizeTab,
    MaximizeTab,
    RestoreAll,
    MaximizeAll,
    MinimizeAll,
    CascadeAll,
    TileAll,
    ConfigureToolBar,
    ResetToolBar,
    LockToolBars,
}

impl ActionId {
    /// Registry name used to resolve the action.
    pub fn name(self) -> &'static str {
        match self {
            ActionId::NewTab => "NewTab",
            ActionId::NewTabPrivate => "NewTabPrivate",
            ActionId::CloneTab => "CloneTab",
            ActionId::PinTab => "PinTab",
            ActionId::MuteTabMedia => "MuteTabMedia",
            ActionId::DetachTab => "DetachTab",
            ActionId::CloseTab => "CloseTab",
            ActionId::CloseOtherTabs => "CloseOtherTabs",
            ActionId::ClosePrivateTabs => "ClosePrivateTabs",
            ActionId::RestoreTab => "RestoreTab",
            ActionId::MinimizeTab => "MinimizeTab",
            ActionId::MaximizeTab => "MaximizeTab",
            ActionId::RestoreAll => "RestoreAll",
            ActionId::MaximizeAll => "MaximizeAll",
            ActionId::MinimizeAll => "MinimizeAll",
            ActionId::CascadeAll => "CascadeAll",
            ActionId::TileAll => "TileAll",
            ActionId::ConfigureToolBar => "ConfigureToolBar",
            ActionId::ResetToolBar => "ResetToolBar",
            ActionId::LockToolBars => "LockToolBars",
        }
    }
}

/// Parameters passed along with a triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionParameters {
    pub window: Option<WindowId>,
}

impl ActionParameters {
    pub fn for_window(window: WindowId) -> Self {
        Self {
            window: Some(window),
        }
    }
}

/// Registry-side description of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDefinition {
    pub action: ActionId,
    /// Shortcuts in native text form, most preferred first.
    pub shortcuts: Vec<String>,
}
