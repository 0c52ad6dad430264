use super::translations::Translations;

static EN: Translations = Translations {
    // --- Context menu ---
    menu_new_tab: "New Tab",
    menu_new_private_tab: "New Private Tab",
    menu_clone_tab: "Clone Tab",
    menu_pin_tab: "Pin Tab",
    menu_unpin_tab: "Unpin Tab",
    menu_mute_tab_media: "Mute Tab Media",
    menu_unmute_tab_media: "Unmute Tab Media",
    menu_detach_tab: "Detach Tab",
    menu_close_tab: "Close Tab",
    menu_close_other_tabs: "Close Other Tabs",
    menu_close_private_tabs: "Close All Private Tabs",

    // --- Arrange submenu ---
    menu_arrange: "Arrange",
    menu_restore_tab: "Restore",
    menu_minimize_tab: "Minimize",
    menu_maximize_tab: "Maximize",
    menu_restore_all: "Restore All",
    menu_maximize_all: "Maximize All",
    menu_minimize_all: "Minimize All",
    menu_cascade_all: "Cascade",
    menu_tile_all: "Tile",

    // --- Customize submenu ---
    menu_customize: "Customize",
    menu_cycle_with_wheel: "Switch Tabs Using the Mouse Wheel",
    menu_configure_toolbar: "Configure…",
    menu_reset_toolbar: "Reset to Defaults…",
    menu_lock_toolbars: "Lock Toolbars",

    // --- Close button ---
    tooltip_close_tab: "Close Tab",

    // --- Dropped URLs prompt ---
    prompt_question_title: "Question",
    prompt_open_urls: "You are about to open {} URL(s).",
    prompt_continue: "Do you want to continue?",
    prompt_dont_ask_again: "Do not show this message again",
};

pub fn translations() -> &'static Translations {
    &EN
}
