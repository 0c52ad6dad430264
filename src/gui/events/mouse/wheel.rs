use crate::gui::*;

impl TabStrip {
    /// Wheel over the strip cycles through tabs along the dominant scroll
    /// axis: up/left activates the tab on the left, down/right the tab on
    /// the right. Zero deltas change nothing.
    ///
    /// With "require modifier" set, cycling needs Ctrl. The event is offered
    /// to the gesture recognizer first; returns whether a gesture took it.
    pub fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) -> bool {
        let (dx, dy) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x as f64, y as f64),
            MouseScrollDelta::PixelDelta(pos) => (pos.x, pos.y),
        };
        let amount = if dy.abs() >= dx.abs() { dy } else { dx };
        let consumed = self.route_gesture(GestureInputKind::Wheel(amount));

        if amount == 0.0
            || (self.settings.require_modifier_to_switch_tab_on_scroll
                && !self.modifiers.control_key())
        {
            return consumed;
        }

        if amount > 0.0 {
            self.activate_tab_on_left();
        } else {
            self.activate_tab_on_right();
        }
        consumed
    }
}
