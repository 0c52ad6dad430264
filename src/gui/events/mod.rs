mod context_menu;
mod drop;
mod mouse;
mod notifications;

#[cfg(test)]
#[path = "../../../tests/unit/gui_events.rs"]
mod tests;
