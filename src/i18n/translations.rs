/// All user-facing strings of the tab strip.
///
/// Fields are grouped by area: context menu, arrange submenu, customize
/// submenu, close button and the dropped-URLs prompt.
pub struct Translations {
    // --- Context menu ---
    pub menu_new_tab: &'static str,
    pub menu_new_private_tab: &'static str,
    pub menu_clone_tab: &'static str,
    pub menu_pin_tab: &'static str,
    pub menu_unpin_tab: &'static str,
    pub menu_mute_tab_media: &'static str,
    pub menu_unmute_tab_media: &'static str,
    pub menu_detach_tab: &'static str,
    pub menu_close_tab: &'static str,
    pub menu_close_other_tabs: &'static str,
    pub menu_close_private_tabs: &'static str,

    // --- Arrange submenu ---
    pub menu_arrange: &'static str,
    pub menu_restore_tab: &'static str,
    pub menu_minimize_tab: &'static str,
    pub menu_maximize_tab: &'static str,
    pub menu_restore_all: &'static str,
    pub menu_maximize_all: &'static str,
    pub menu_minimize_all: &'static str,
    pub menu_cascade_all: &'static str,
    pub menu_tile_all: &'static str,

    // --- Customize submenu ---
    pub menu_customize: &'static str,
    pub menu_cycle_with_wheel: &'static str,
    pub menu_configure_toolbar: &'static str,
    pub menu_reset_toolbar: &'static str,
    pub menu_lock_toolbars: &'static str,

    // --- Close button ---
    pub tooltip_close_tab: &'static str,

    // --- Dropped URLs prompt ---
    pub prompt_question_title: &'static str,
    /// `{}` is replaced with the number of URLs.
    pub prompt_open_urls: &'static str,
    pub prompt_continue: &'static str,
    pub prompt_dont_ask_again: &'static str,
}

impl Translations {
    /// Returns `true` when no string is empty.
    pub fn all_non_empty(&self) -> bool {
        [
            self.menu_new_tab,
            self.menu_new_private_tab,
            self.menu_clone_tab,
            self.menu_pin_tab,
            self.menu_unpin_tab,
            self.menu_mute_tab_media,
            self.menu_unmute_tab_media,
            self.menu_detach_tab,
            self.menu_close_tab,
            self.menu_close_other_tabs,
            self.menu_close_private_tabs,
            self.menu_arrange,
            self.menu_restore_tab,
            self.menu_minimize_tab,
            self.menu_maximize_tab,
            self.menu_restore_all,
            self.menu_maximize_all,
            self.menu_minimize_all,
            self.menu_cascade_all,
            self.menu_tile_all,
            self.menu_customize,
            self.menu_cycle_with_wheel,
            self.menu_configure_toolbar,
            self.menu_reset_toolbar,
            self.menu_lock_toolbars,
            self.tooltip_close_tab,
            self.prompt_question_title,
            self.prompt_open_urls,
            self.prompt_continue,
            self.prompt_dont_ask_again,
        ]
        .iter()
        .all(|s| !s.is_empty())
    }

    /// Formats the "about to open N URLs" line.
    pub fn open_urls_text(&self, count: usize) -> String {
        self.prompt_open_urls.replacen("{}", &count.to_string(), 1)
    }
}
