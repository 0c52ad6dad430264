//! Placement of the hover preview popup.
//!
//! Screen, tab and popup rectangles may have negative coordinates on
//! multi-monitor setups, so every edge is computed relative to the screen
//! rectangle rather than the origin.

use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::core::{Rect, StripShape};

/// Top-left corner of the preview popup for a tab at `tab` (global coordinates).
///
/// The popup sits below a north strip, above a south strip, left of an east
/// strip and right of a west strip, centered on the tab along the strip's
/// axis and clamped into `screen`.
pub fn preview_position(
    shape: StripShape,
    tab: Rect,
    popup: PhysicalSize<u32>,
    screen: Rect,
) -> PhysicalPosition<i32> {
    let popup_w = popup.width as i32;
    let popup_h = popup.height as i32;
    let centered_y = (tab.last_y() - tab.h / 2 - popup_h / 2).max(screen.y);
    let centered_x = (tab.last_x() - tab.w / 2 - popup_w / 2).max(screen.x);

    let (mut x, mut y) = match shape {
        StripShape::East => (tab.x - popup_w, centered_y),
        StripShape::West => (tab.last_x(), centered_y),
        StripShape::South => (centered_x, tab.y - popup_h),
        StripShape::North => (centered_x, tab.last_y()),
    };

    if x + popup_w > screen.last_x() {
        x = screen.last_x() - popup_w;
    }
    if y + popup_h > screen.last_y() {
        y = screen.last_y() - popup_h;
    }

    PhysicalPosition::new(x, y)
}
