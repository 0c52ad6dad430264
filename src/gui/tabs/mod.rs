mod manage;
mod refresh;

pub(in crate::gui) use manage::new_close_button;

use crate::core::{Icon, LoadingState, TabIcon};

/// Spinner speed for a queued load, in percent of normal speed.
pub(in crate::gui) const DELAYED_SPINNER_SPEED: u32 = 10;
pub(in crate::gui) const ONGOING_SPINNER_SPEED: u32 = 100;

/// Icon a tab shows for the given loading state.
///
/// `window_icon` is `None` when the window is unresolved or has no icon;
/// `theme` looks up named fallbacks.
pub(in crate::gui) fn tab_icon_for(
    state: LoadingState,
    window_icon: Option<Icon>,
    theme: impl Fn(&str) -> Icon,
) -> TabIcon {
    match (state, window_icon) {
        (LoadingState::Delayed, _) => TabIcon::Spinner {
            speed: DELAYED_SPINNER_SPEED,
        },
        (LoadingState::Ongoing, _) => TabIcon::Spinner {
            speed: ONGOING_SPINNER_SPEED,
        },
        (LoadingState::Crashed, _) => TabIcon::Image(theme("tab-crashed")),
        (LoadingState::Finished, Some(icon)) => TabIcon::Image(icon),
        (LoadingState::Finished, None) => TabIcon::Image(theme("tab")),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/gui_tabs.rs"]
mod tests;
