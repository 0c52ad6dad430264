use crate::gui::*;

impl TabStrip {
    /// Updates hovered tab and hovered close button from the pointer.
    pub(in crate::gui::events::mouse) fn update_hover(&mut self, x: f64, y: f64) {
        let hit = self.hit_test(x, y);
        self.tab_hovered(hit.tab_index());
        let close = match hit {
            StripHit::CloseButton(index) => Some(index),
            _ => None,
        };
        self.close_button_hovered(close);
    }
}
