use crate::gui::menus::{self, ClickedTab, MenuContext};
use crate::gui::*;

impl TabStrip {
    /// Builds the context menu for a request at `position` (strip-local).
    ///
    /// Mouse-invoked requests return `None`: right clicks belong to the
    /// gesture recognizer. While the host shows the menu, previews stay
    /// hidden; call [`TabStrip::on_context_menu_closed`] afterwards.
    pub fn on_context_menu_requested(
        &mut self,
        position: PhysicalPosition<f64>,
        reason: ContextMenuReason,
    ) -> Option<ContextMenu> {
        if reason == ContextMenuReason::Mouse {
            return None;
        }

        self.clicked_tab = self.tab_at(position.x, position.y);
        self.hide_preview();

        let clicked = self
            .clicked_tab
            .and_then(|index| self.window_info(index))
            .map(|info| ClickedTab {
                parameters: ActionParameters::for_window(info.id),
                is_pinned: info.is_pinned,
                is_muted: info.is_muted,
                can_clone: info.can_clone,
            });
        let ctx = MenuContext {
            clicked,
            tab_count: self.tabs.len(),
            pinned_count: self.tabs.pinned_count(),
            require_modifier_to_switch_tab_on_scroll: self
                .settings
                .require_modifier_to_switch_tab_on_scroll,
            in_toolbar: self.in_toolbar,
        };
        Some(menus::build_context_menu(
            &ctx,
            self.services.actions.as_ref(),
            crate::i18n::t(),
        ))
    }

    pub fn on_context_menu_closed(&mut self) {
        self.clicked_tab = None;
        if self.under_mouse {
            self.arm_preview_timer();
        }
    }

    /// Runs a command picked from the context menu.
    pub fn trigger_menu_command(&mut self, command: &MenuCommand) {
        match *command {
            MenuCommand::Action { action, parameters } => {
                tracing::debug!("Menu triggered {}", action.name());
                self.services.actions.trigger(action, &parameters);
            }
            MenuCommand::SetWheelCycling(enable) => {
                self.services.settings.set_value(
                    SettingsOption::RequireModifierToSwitchTabOnScroll,
                    OptionValue::Bool(!enable),
                );
            }
        }
    }
}
