//! Pure layout math for the tab strip.
//!
//! Every function in this module is a pure calculation: given the strip's
//! shape, size policy and pinned flags it returns coordinates and sizes.
//! No rendering code, no side effects.

use winit::dpi::PhysicalSize;

use crate::config::{TAB_SIZE_LIMIT, TabBarSettings};
use crate::core::{Rect, StripShape};

// ── Constants ────────────────────────────────────────────────────────

/// Tabs shorter than this hide the close button unless current.
pub const NARROW_TAB_LENGTH: u32 = 60;

/// Default tab thickness (height of a horizontal tab) in logical pixels.
pub const DEFAULT_TAB_THICKNESS: u32 = 28;

/// Icon and close button edge length in logical pixels.
pub const BUTTON_SIZE: u32 = 16;

/// Gap between a button and the tab edge.
pub const BUTTON_MARGIN: u32 = 6;

/// Horizontal padding around the title text.
pub const TAB_PADDING: u32 = 8;

/// How far outside the strip the pointer may wander before a drag detaches.
pub const DETACH_MARGIN: i32 = 10;

// ── Helper types ─────────────────────────────────────────────────────

/// Display metrics needed by the layout functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLayoutMetrics {
    /// Thickness of one tab across the strip's axis, in physical pixels.
    pub tab_thickness: u32,
    /// Average advance of one text column, in physical pixels.
    pub cell_width: u32,
    /// UI scale factor (e.g. 1.0, 2.0 for HiDPI).
    pub ui_scale: f64,
}

impl Default for TabLayoutMetrics {
    fn default() -> Self {
        Self {
            tab_thickness: DEFAULT_TAB_THICKNESS,
            cell_width: 7,
            ui_scale: 1.0,
        }
    }
}

impl TabLayoutMetrics {
    /// Scales a base logical pixel value by the UI scale factor.
    pub fn scaled_px(&self, base: u32) -> u32 {
        if base == 0 {
            0
        } else {
            ((base as f64 * self.ui_scale).round() as u32).max(1)
        }
    }
}

/// Size policy of tabs along the strip's axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSizing {
    pub minimum: u32,
    pub maximum: u32,
    /// Non-zero while tab length is frozen after a close under the pointer.
    pub frozen: u32,
}

impl TabSizing {
    pub fn from_settings(settings: &TabBarSettings, frozen: u32) -> Self {
        Self {
            minimum: settings.minimum_tab_size.min(TAB_SIZE_LIMIT as u32),
            maximum: settings.maximum_tab_size.min(TAB_SIZE_LIMIT as u32),
            frozen,
        }
    }
}

/// Line painted where a dragged tab or URL would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

// ── Layout functions ─────────────────────────────────────────────────

/// Clamps `value` into `[minimum, maximum]`, letting `minimum` win when the
/// bounds cross.
fn bound(minimum: u32, value: i64, maximum: u32) -> u32 {
    value.min(maximum as i64).max(minimum as i64) as u32
}

/// Length of an unpinned tab on a horizontal strip.
///
/// Pinned tabs reserve `minimum` each; the rest of `strip_length` is shared
/// evenly by the unpinned tabs and bounded to `[minimum, maximum]`.
pub fn distributed_tab_length(
    sizing: TabSizing,
    tab_count: usize,
    pinned_count: usize,
    strip_length: u32,
) -> u32 {
    if sizing.frozen > 0 {
        return sizing.frozen;
    }
    let unpinned = tab_count.saturating_sub(pinned_count).max(1) as i64;
    let available = strip_length as i64 - pinned_count as i64 * sizing.minimum as i64;
    bound(sizing.minimum, available.div_euclid(unpinned), sizing.maximum)
}

/// Preferred size of a single tab.
pub fn tab_size_hint(
    shape: StripShape,
    sizing: TabSizing,
    m: &TabLayoutMetrics,
    is_pinned: bool,
    tab_count: usize,
    pinned_count: usize,
    strip_size: PhysicalSize<u32>,
) -> PhysicalSize<u32> {
    if shape.is_vertical() {
        return PhysicalSize::new(sizing.maximum, m.tab_thickness);
    }
    if is_pinned {
        return PhysicalSize::new(sizing.minimum, m.tab_thickness);
    }
    let length = distributed_tab_length(sizing, tab_count, pinned_count, strip_size.width);
    PhysicalSize::new(length, m.tab_thickness)
}

/// Rectangles of all tabs, laid out back to back from the strip origin.
pub fn tab_rects(
    shape: StripShape,
    sizing: TabSizing,
    m: &TabLayoutMetrics,
    pinned: &[bool],
    strip_size: PhysicalSize<u32>,
) -> Vec<Rect> {
    let pinned_count = pinned.iter().filter(|&&p| p).count();
    let mut offset = 0i32;
    pinned
        .iter()
        .map(|&is_pinned| {
            let hint = tab_size_hint(
                shape,
                sizing,
                m,
                is_pinned,
                pinned.len(),
                pinned_count,
                strip_size,
            );
            let (w, h) = (px(hint.width), px(hint.height));
            let rect = if shape.is_horizontal() {
                Rect::new(offset, 0, w, h)
            } else {
                Rect::new(0, offset, w, h)
            };
            offset = offset.saturating_add(if shape.is_horizontal() { w } else { h });
            rect
        })
        .collect()
}

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Preferred size of the whole strip.
///
/// Horizontal strips ask for room to show every unpinned tab at its maximum
/// length; vertical strips stack tabs of fixed thickness.
pub fn strip_size_hint(
    shape: StripShape,
    sizing: TabSizing,
    m: &TabLayoutMetrics,
    pinned: &[bool],
) -> PhysicalSize<u32> {
    if shape.is_horizontal() {
        let length = pinned
            .iter()
            .map(|&p| if p { sizing.minimum } else { sizing.maximum })
            .fold(0u32, u32::saturating_add);
        PhysicalSize::new(length, m.tab_thickness)
    } else {
        let count = u32::try_from(pinned.len()).unwrap_or(u32::MAX);
        PhysicalSize::new(sizing.maximum, m.tab_thickness.saturating_mul(count))
    }
}

/// Index of the tab under `(x, y)`.
pub fn tab_at(rects: &[Rect], x: f64, y: f64) -> Option<usize> {
    rects.iter().position(|rect| rect.contains(x, y))
}

/// Insertion index for a drop at `pos`.
///
/// The pointer is projected onto the strip's axis; the first tab whose
/// center is at or past the pointer wins. Past the last center, or with no
/// pointer at all, the drop appends.
pub fn drop_index(rects: &[Rect], shape: StripShape, pos: Option<(f64, f64)>) -> usize {
    let Some((x, y)) = pos else {
        return rects.len();
    };
    let horizontal = shape.is_horizontal();
    let coordinate = if horizontal { x } else { y };
    rects
        .iter()
        .position(|rect| coordinate <= rect.center_along(horizontal))
        .unwrap_or(rects.len())
}

/// Destination index for moving the tab at `source` to insertion point
/// `insert_at` (an index into the list before removal).
pub fn move_destination(source: usize, insert_at: usize, tab_count: usize) -> usize {
    if insert_at > source {
        (insert_at - 1).min(tab_count.saturating_sub(1))
    } else {
        insert_at
    }
}

/// Geometry of the drop indicator for insertion `index`.
pub fn drop_indicator(
    rects: &[Rect],
    shape: StripShape,
    index: usize,
    strip_size: PhysicalSize<u32>,
) -> DropIndicator {
    let horizontal = shape.is_horizontal();
    let offset = match (rects.get(index), rects.last()) {
        (Some(rect), _) if horizontal => rect.x,
        (Some(rect), _) => rect.y,
        (None, Some(last)) if horizontal => last.right(),
        (None, Some(last)) => last.bottom(),
        (None, None) => 0,
    };

    if horizontal {
        DropIndicator {
            start: (offset, 0),
            end: (offset, strip_size.height as i32),
        }
    } else {
        DropIndicator {
            start: (0, offset),
            end: (strip_size.width as i32, offset),
        }
    }
}

/// Returns `true` when a tab of `length` is too short to show both buttons.
pub fn is_narrow(m: &TabLayoutMetrics, length: u32) -> bool {
    length < m.scaled_px(NARROW_TAB_LENGTH)
}

/// Returns `true` when `(x, y)` is still close enough to the strip for a
/// drag to stay in-strip.
pub fn within_drag_bounds(strip_size: PhysicalSize<u32>, x: f64, y: f64) -> bool {
    Rect::new(0, 0, strip_size.width as i32, strip_size.height as i32)
        .inflated(DETACH_MARGIN)
        .contains(x, y)
}

// ── Tests ────────────────────────────────────────────────────────────
