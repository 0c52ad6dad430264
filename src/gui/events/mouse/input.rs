use crate::gui::*;

impl TabStrip {
    pub fn on_modifiers_changed(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn on_cursor_entered(&mut self) {
        self.under_mouse = true;
        self.arm_preview_timer();
    }

    pub fn on_cursor_left(&mut self) {
        self.under_mouse = false;
        self.pointer = None;
        self.hide_preview();
        self.frozen_tab_size = 0;
        self.hovered_tab = None;
        self.hovered_close = None;
        self.emit(StripSignal::StatusTip(String::new()));
        self.emit(StripSignal::GeometryChanged);
    }

    /// Pointer moved to `position` (strip-local).
    ///
    /// Returns a [`TabDrag`] when a dragged tab just left the strip; the host
    /// must run it as an OS drag and report the result through
    /// [`TabStrip::finish_external_drag`].
    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<TabDrag> {
        let (x, y) = (position.x, position.y);
        self.pointer = Some((x, y));
        self.update_hover(x, y);
        self.update_drag(x, y)
    }

    /// Button press or release at the last pointer position.
    ///
    /// Presses are offered to the gesture recognizer first; the return value
    /// tells whether a gesture consumed the input. The strip's own handling
    /// (selection, drag tracking) runs either way.
    pub fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        match state {
            ElementState::Pressed => {
                let consumed = self.route_gesture(GestureInputKind::Press(button));
                self.on_press(button);
                consumed
            }
            ElementState::Released => {
                if button == MouseButton::Left {
                    self.on_left_release();
                }
                false
            }
        }
    }

    pub fn on_double_click(&mut self, button: MouseButton) -> bool {
        self.route_gesture(GestureInputKind::DoubleClick(button))
    }

    fn on_press(&mut self, button: MouseButton) {
        if button == MouseButton::Left
            && let Some((x, y)) = self.pointer
        {
            match self.hit_test(x, y) {
                StripHit::CloseButton(index)
                    if self.tabs.get(index).is_some_and(|tab| !tab.is_pinned) =>
                {
                    // The close button swallows the press; no selection, no drag.
                    self.pressed_close = self.window_at(index);
                }
                hit => {
                    if let Some(index) = hit.tab_index() {
                        self.set_current_index(index);
                        self.start_drag(index, x, y);
                    }
                }
            }
        }

        self.hide_preview();
    }

    fn on_left_release(&mut self) {
        if let Some(window) = self.pressed_close.take()
            && let Some((x, y)) = self.pointer
            && let StripHit::CloseButton(index) = self.hit_test(x, y)
            && self.window_at(index) == Some(window)
        {
            tracing::debug!("Close button clicked for window {}", window);
            self.services.windows.close_window(window);
        }

        self.finish_drag();
    }
}
