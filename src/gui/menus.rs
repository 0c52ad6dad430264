//! Context menu of the strip.
//!
//! The menu is built as a plain model first so it can be inspected and
//! tested everywhere; on platforms with native context menus it is then
//! converted to `muda`.

#[cfg(not(target_os = "linux"))]
use muda::{CheckMenuItem, IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu};

use crate::host::{ActionDispatcher, ActionId, ActionParameters};
use crate::i18n::Translations;

/// What activating a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Action {
        action: ActionId,
        parameters: ActionParameters,
    },
    /// Stores "require modifier to switch tabs on scroll" as the negation.
    SetWheelCycling(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        label: String,
        enabled: bool,
        command: MenuCommand,
    },
    Check {
        label: String,
        checked: bool,
        /// Command for toggling the entry.
        command: MenuCommand,
    },
    Separator,
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenu {
    pub entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// Depth-first iterator over every entry, submenus included.
    pub fn walk(&self) -> impl Iterator<Item = &MenuEntry> {
        let mut stack: Vec<&MenuEntry> = self.entries.iter().rev().collect();
        std::iter::from_fn(move || {
            let entry = stack.pop()?;
            if let MenuEntry::Submenu { entries, .. } = entry {
                stack.extend(entries.iter().rev());
            }
            Some(entry)
        })
    }

    /// Commands of the activatable entries in depth-first order. Native
    /// menus hand out item ids in the same order.
    pub fn commands(&self) -> Vec<MenuCommand> {
        self.walk()
            .filter_map(|entry| match entry {
                MenuEntry::Item { command, .. } | MenuEntry::Check { command, .. } => {
                    Some(*command)
                }
                MenuEntry::Separator | MenuEntry::Submenu { .. } => None,
            })
            .collect()
    }

    /// Finds the entry that triggers `action`.
    pub fn find_action(&self, action: ActionId) -> Option<&MenuEntry> {
        self.walk().find(|entry| {
            matches!(
                entry,
                MenuEntry::Item {
                    command: MenuCommand::Action { action: a, .. },
                    ..
                } if *a == action
            )
        })
    }
}

/// Tab the menu was opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickedTab {
    pub parameters: ActionParameters,
    pub is_pinned: bool,
    pub is_muted: bool,
    pub can_clone: bool,
}

/// Strip state the menu depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuContext {
    pub clicked: Option<ClickedTab>,
    pub tab_count: usize,
    pub pinned_count: usize,
    pub require_modifier_to_switch_tab_on_scroll: bool,
    pub in_toolbar: bool,
}

fn item(label: &str, enabled: bool, action: ActionId, parameters: ActionParameters) -> MenuEntry {
    MenuEntry::Item {
        label: label.to_owned(),
        enabled,
        command: MenuCommand::Action { action, parameters },
    }
}

/// Item for an action that does not depend on the clicked tab.
fn global_item(label: &str, action: ActionId, actions: &dyn ActionDispatcher) -> MenuEntry {
    item(label, actions.is_enabled(action), action, ActionParameters::default())
}

/// Builds the strip's context menu.
pub fn build_context_menu(
    ctx: &MenuContext,
    actions: &dyn ActionDispatcher,
    t: &Translations,
) -> ContextMenu {
    let mut entries = vec![
        global_item(t.menu_new_tab, ActionId::NewTab, actions),
        global_item(t.menu_new_private_tab, ActionId::NewTabPrivate, actions),
    ];

    if let Some(clicked) = ctx.clicked {
        let params = clicked.parameters;
        let amount = ctx.tab_count.saturating_sub(ctx.pinned_count);
        let pin_label = if clicked.is_pinned {
            t.menu_unpin_tab
        } else {
            t.menu_pin_tab
        };
        let mute_label = if clicked.is_muted {
            t.menu_unmute_tab_media
        } else {
            t.menu_mute_tab_media
        };

        entries.extend([
            item(t.menu_clone_tab, clicked.can_clone, ActionId::CloneTab, params),
            item(pin_label, true, ActionId::PinTab, params),
            item(mute_label, true, ActionId::MuteTabMedia, params),
            MenuEntry::Separator,
            item(t.menu_detach_tab, ctx.tab_count > 1, ActionId::DetachTab, params),
            MenuEntry::Separator,
            item(t.menu_close_tab, !clicked.is_pinned, ActionId::CloseTab, params),
            item(
                t.menu_close_other_tabs,
                amount > 0 && !(amount == 1 && !clicked.is_pinned),
                ActionId::CloseOtherTabs,
                params,
            ),
            global_item(t.menu_close_private_tabs, ActionId::ClosePrivateTabs, actions),
        ]);
    }

    entries.push(MenuEntry::Separator);
    entries.push(arrange_submenu(ctx, actions, t));
    entries.push(customize_submenu(ctx, actions, t));

    ContextMenu { entries }
}

fn arrange_submenu(ctx: &MenuContext, actions: &dyn ActionDispatcher, t: &Translations) -> MenuEntry {
    let has_tab = ctx.clicked.is_some();
    let params = ctx.clicked.map(|c| c.parameters).unwrap_or_default();
    MenuEntry::Submenu {
        label: t.menu_arrange.to_owned(),
        entries: vec![
            item(t.menu_restore_tab, has_tab, ActionId::RestoreTab, params),
            item(t.menu_minimize_tab, has_tab, ActionId::MinimizeTab, params),
            item(t.menu_maximize_tab, has_tab, ActionId::MaximizeTab, params),
            MenuEntry::Separator,
            global_item(t.menu_restore_all, ActionId::RestoreAll, actions),
            global_item(t.menu_maximize_all, ActionId::MaximizeAll, actions),
            global_item(t.menu_minimize_all, ActionId::MinimizeAll, actions),
            MenuEntry::Separator,
            global_item(t.menu_cascade_all, ActionId::CascadeAll, actions),
            global_item(t.menu_tile_all, ActionId::TileAll, actions),
        ],
    }
}

fn customize_submenu(
    ctx: &MenuContext,
    actions: &dyn ActionDispatcher,
    t: &Translations,
) -> MenuEntry {
    let cycling = !ctx.require_modifier_to_switch_tab_on_scroll;
    let mut entries = vec![
        MenuEntry::Check {
            label: t.menu_cycle_with_wheel.to_owned(),
            checked: cycling,
            command: MenuCommand::SetWheelCycling(!cycling),
        },
        MenuEntry::Separator,
    ];
    if ctx.in_toolbar {
        entries.push(global_item(t.menu_configure_toolbar, ActionId::ConfigureToolBar, actions));
        entries.push(global_item(t.menu_reset_toolbar, ActionId::ResetToolBar, actions));
        entries.push(MenuEntry::Separator);
    }
    entries.push(global_item(t.menu_lock_toolbars, ActionId::LockToolBars, actions));

    MenuEntry::Submenu {
        label: t.menu_customize.to_owned(),
        entries,
    }
}

/// Converts the model into a native menu and the map from item ids back to
/// commands.
#[cfg(not(target_os = "linux"))]
pub fn to_native_menu(menu: &ContextMenu) -> (Menu, Vec<(MenuId, MenuCommand)>) {
    let native = Menu::new();
    let mut ids = Vec::new();
    let items = native_items(&menu.entries, &mut ids);
    let refs: Vec<&dyn IsMenuItem> = items.iter().map(|item| item.as_ref()).collect();
    let _ = native.append_items(&refs);
    let command_map = ids.into_iter().zip(menu.commands()).collect();
    (native, command_map)
}

#[cfg(not(target_os = "linux"))]
fn native_items(entries: &[MenuEntry], ids: &mut Vec<MenuId>) -> Vec<Box<dyn IsMenuItem>> {
    entries
        .iter()
        .map(|entry| -> Box<dyn IsMenuItem> {
            match entry {
                MenuEntry::Item { label, enabled, .. } => {
                    let item = MenuItem::new(label, *enabled, None);
                    ids.push(item.id().clone());
                    Box::new(item)
                }
                MenuEntry::Check { label, checked, .. } => {
                    let item = CheckMenuItem::new(label, true, *checked, None);
                    ids.push(item.id().clone());
                    Box::new(item)
                }
                MenuEntry::Separator => Box::new(PredefinedMenuItem::separator()),
                MenuEntry::Submenu { label, entries } => {
                    let submenu = Submenu::new(label, true);
                    let children = native_items(entries, ids);
                    let refs: Vec<&dyn IsMenuItem> =
                        children.iter().map(|child| child.as_ref()).collect();
                    let _ = submenu.append_items(&refs);
                    Box::new(submenu)
                }
            }
        })
        .collect()
}

/// Shows a native context menu for the given window.
#[cfg(not(target_os = "linux"))]
pub fn show_context_menu(
    window: &winit::window::Window,
    menu: &Menu,
    position: Option<muda::dpi::Position>,
) {
    #[cfg(target_os = "windows")]
    {
        use muda::ContextMenu as _;
        use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
        if let Ok(handle) = window.window_handle()
            && let RawWindowHandle::Win32(win32) = handle.as_raw()
        {
            unsafe {
                menu.show_context_menu_for_hwnd(win32.hwnd.get() as isize, position);
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        use muda::ContextMenu as _;
        use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
        if let Ok(handle) = window.window_handle()
            && let RawWindowHandle::AppKit(appkit) = handle.as_raw()
        {
            unsafe {
                menu.show_context_menu_for_nsview(
                    appkit.ns_view.as_ptr() as *const std::ffi::c_void,
                    position,
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_menus.rs"]
mod tests;
