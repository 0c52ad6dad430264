use super::translations::Translations;

static UK: Translations = Translations {
    // --- Context menu ---
    menu_new_tab: "Нова вкладка",
    menu_new_private_tab: "Нова приватна вкладка",
    menu_clone_tab: "Клонувати вкладку",
    menu_pin_tab: "Закріпити вкладку",
    menu_unpin_tab: "Відкріпити вкладку",
    menu_mute_tab_media: "Вимкнути звук вкладки",
    menu_unmute_tab_media: "Увімкнути звук вкладки",
    menu_detach_tab: "Від'єднати вкладку",
    menu_close_tab: "Закрити вкладку",
    menu_close_other_tabs: "Закрити інші вкладки",
    menu_close_private_tabs: "Закрити всі приватні вкладки",

    // --- Arrange submenu ---
    menu_arrange: "Упорядкувати",
    menu_restore_tab: "Відновити",
    menu_minimize_tab: "Згорнути",
    menu_maximize_tab: "Розгорнути",
    menu_restore_all: "Відновити всі",
    menu_maximize_all: "Розгорнути всі",
    menu_minimize_all: "Згорнути всі",
    menu_cascade_all: "Каскадом",
    menu_tile_all: "Плиткою",

    // --- Customize submenu ---
    menu_customize: "Налаштувати",
    menu_cycle_with_wheel: "Перемикати вкладки коліщатком миші",
    menu_configure_toolbar: "Налаштувати…",
    menu_reset_toolbar: "Скинути до типових…",
    menu_lock_toolbars: "Заблокувати панелі",

    // --- Close button ---
    tooltip_close_tab: "Закрити вкладку",

    // --- Dropped URLs prompt ---
    prompt_question_title: "Питання",
    prompt_open_urls: "Ви збираєтеся відкрити URL-адрес: {}.",
    prompt_continue: "Бажаєте продовжити?",
    prompt_dont_ask_again: "Більше не показувати це повідомлення",
};

pub fn translations() -> &'static Translations {
    &UK
}
