use super::*;
use crate::core::WindowId;
use crate::i18n::Locale;
use crate::test_support::MockActions;

fn context(clicked: Option<ClickedTab>, tab_count: usize, pinned_count: usize) -> MenuContext {
    MenuContext {
        clicked,
        tab_count,
        pinned_count,
        require_modifier_to_switch_tab_on_scroll: true,
        in_toolbar: false,
    }
}

fn clicked(is_pinned: bool) -> ClickedTab {
    ClickedTab {
        parameters: ActionParameters::for_window(WindowId(1)),
        is_pinned,
        is_muted: false,
        can_clone: true,
    }
}

fn build(ctx: &MenuContext) -> ContextMenu {
    build_context_menu(ctx, &MockActions::default(), Locale::En.translations())
}

fn enabled(menu: &ContextMenu, action: ActionId) -> Option<bool> {
    match menu.find_action(action)? {
        MenuEntry::Item { enabled, .. } => Some(*enabled),
        _ => None,
    }
}

fn label(menu: &ContextMenu, action: ActionId) -> Option<&str> {
    match menu.find_action(action)? {
        MenuEntry::Item { label, .. } => Some(label.as_str()),
        _ => None,
    }
}

#[test]
fn menu_without_tab_has_no_tab_actions() {
    let menu = build(&context(None, 3, 0));

    assert_eq!(enabled(&menu, ActionId::NewTab), Some(true));
    assert_eq!(menu.find_action(ActionId::CloseTab), None);
    assert_eq!(menu.find_action(ActionId::PinTab), None);
    assert_eq!(enabled(&menu, ActionId::RestoreTab), Some(false));
    assert_eq!(enabled(&menu, ActionId::TileAll), Some(true));
}

#[test]
fn pinned_tab_offers_unpin_and_cannot_close() {
    let menu = build(&context(Some(clicked(true)), 3, 1));

    assert_eq!(label(&menu, ActionId::PinTab), Some("Unpin Tab"));
    assert_eq!(enabled(&menu, ActionId::CloseTab), Some(false));

    let menu = build(&context(Some(clicked(false)), 3, 1));
    assert_eq!(label(&menu, ActionId::PinTab), Some("Pin Tab"));
    assert_eq!(enabled(&menu, ActionId::CloseTab), Some(true));
}

#[test]
fn close_other_tabs_needs_another_unpinned_tab() {
    let only_tab = build(&context(Some(clicked(false)), 1, 0));
    assert_eq!(enabled(&only_tab, ActionId::CloseOtherTabs), Some(false));

    let two_tabs = build(&context(Some(clicked(false)), 2, 0));
    assert_eq!(enabled(&two_tabs, ActionId::CloseOtherTabs), Some(true));

    let pinned_and_one = build(&context(Some(clicked(true)), 2, 1));
    assert_eq!(enabled(&pinned_and_one, ActionId::CloseOtherTabs), Some(true));

    let all_pinned = build(&context(Some(clicked(true)), 2, 2));
    assert_eq!(enabled(&all_pinned, ActionId::CloseOtherTabs), Some(false));
}

#[test]
fn detach_and_clone_enablement() {
    let single = build(&context(Some(clicked(false)), 1, 0));
    assert_eq!(enabled(&single, ActionId::DetachTab), Some(false));

    let mut tab = clicked(false);
    tab.can_clone = false;
    let menu = build(&context(Some(tab), 2, 0));
    assert_eq!(enabled(&menu, ActionId::DetachTab), Some(true));
    assert_eq!(enabled(&menu, ActionId::CloneTab), Some(false));
}

#[test]
fn tab_actions_carry_clicked_window() {
    let menu = build(&context(Some(clicked(false)), 2, 0));
    let Some(MenuEntry::Item {
        command: MenuCommand::Action { parameters, .. },
        ..
    }) = menu.find_action(ActionId::MaximizeTab)
    else {
        panic!("maximize entry missing");
    };
    assert_eq!(parameters.window, Some(WindowId(1)));
}

#[test]
fn global_items_ask_dispatcher() {
    let actions = MockActions::default();
    actions.disabled.borrow_mut().insert(ActionId::NewTabPrivate);
    let menu = build_context_menu(
        &context(None, 1, 0),
        &actions,
        Locale::En.translations(),
    );

    assert_eq!(enabled(&menu, ActionId::NewTabPrivate), Some(false));
    assert_eq!(enabled(&menu, ActionId::NewTab), Some(true));
}

#[test]
fn toolbar_items_only_inside_toolbar() {
    let mut ctx = context(None, 1, 0);
    assert_eq!(build(&ctx).find_action(ActionId::ConfigureToolBar), None);
    assert!(build(&ctx).find_action(ActionId::LockToolBars).is_some());

    ctx.in_toolbar = true;
    let menu = build(&ctx);
    assert!(menu.find_action(ActionId::ConfigureToolBar).is_some());
    assert!(menu.find_action(ActionId::ResetToolBar).is_some());
}

#[test]
fn wheel_cycling_check_toggles_setting() {
    let mut ctx = context(None, 1, 0);
    let check = |menu: &ContextMenu| {
        menu.walk()
            .find_map(|entry| match entry {
                MenuEntry::Check {
                    checked, command, ..
                } => Some((*checked, *command)),
                _ => None,
            })
            .expect("check entry")
    };

    assert_eq!(
        check(&build(&ctx)),
        (false, MenuCommand::SetWheelCycling(true))
    );

    ctx.require_modifier_to_switch_tab_on_scroll = false;
    assert_eq!(
        check(&build(&ctx)),
        (true, MenuCommand::SetWheelCycling(false))
    );
}

#[test]
fn walk_visits_submenus_in_order() {
    let menu = build(&context(None, 1, 0));
    let submenus: Vec<&str> = menu
        .walk()
        .filter_map(|entry| match entry {
            MenuEntry::Submenu { label, .. } => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(submenus, vec!["Arrange", "Customize"]);

    let first = menu.walk().next();
    assert_eq!(label(&menu, ActionId::NewTab), Some("New Tab"));
    assert!(matches!(first, Some(MenuEntry::Item { .. })));
}

#[test]
fn commands_follow_menu_order() {
    let menu = build(&context(None, 2, 0));
    let actions: Vec<Option<ActionId>> = menu
        .commands()
        .into_iter()
        .map(|command| match command {
            MenuCommand::Action { action, .. } => Some(action),
            MenuCommand::SetWheelCycling(_) => None,
        })
        .collect();

    assert_eq!(
        actions,
        vec![
            Some(ActionId::NewTab),
            Some(ActionId::NewTabPrivate),
            Some(ActionId::RestoreTab),
            Some(ActionId::MinimizeTab),
            Some(ActionId::MaximizeTab),
            Some(ActionId::RestoreAll),
            Some(ActionId::MaximizeAll),
            Some(ActionId::MinimizeAll),
            Some(ActionId::CascadeAll),
            Some(ActionId::TileAll),
            None,
            Some(ActionId::LockToolBars),
        ]
    );
    assert!(menu.commands().contains(&MenuCommand::SetWheelCycling(true)));
}
