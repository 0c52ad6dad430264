//! Drag lifecycle of a tab handle.
//!
//! `Idle -> Pressed -> Dragging -> {reordered in place, Detaching} -> Idle`.
//! Releasing before the pointer travelled the start-drag distance goes
//! straight from `Pressed` back to `Idle`.

use super::tab::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Left button went down on a tab.
    Pressed {
        start: (f64, f64),
        window: WindowId,
        /// In-strip reordering is disabled (single tab, or the only pinned tab).
        ignore_reorder: bool,
    },
    /// Pointer travelled past the start-drag distance.
    Dragging {
        start: (f64, f64),
        current: (f64, f64),
        window: WindowId,
        ignore_reorder: bool,
    },
    /// Pointer left the strip; the tab travels as an external drag.
    Detaching { window: WindowId },
}

impl DragPhase {
    pub fn press(start: (f64, f64), window: WindowId, ignore_reorder: bool) -> Self {
        DragPhase::Pressed {
            start,
            window,
            ignore_reorder,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragPhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging { .. })
    }

    pub fn is_detaching(&self) -> bool {
        matches!(self, DragPhase::Detaching { .. })
    }

    pub fn window(&self) -> Option<WindowId> {
        match *self {
            DragPhase::Idle => None,
            DragPhase::Pressed { window, .. }
            | DragPhase::Dragging { window, .. }
            | DragPhase::Detaching { window } => Some(window),
        }
    }

    /// Feeds a pointer position. Promotes `Pressed` to `Dragging` once the
    /// Manhattan distance from the press exceeds `threshold`.
    /// Returns `true` on that promotion.
    pub fn pointer_moved(&mut self, pos: (f64, f64), threshold: f64) -> bool {
        match *self {
            DragPhase::Pressed {
                start,
                window,
                ignore_reorder,
            } => {
                let distance = (pos.0 - start.0).abs() + (pos.1 - start.1).abs();
                if distance > threshold {
                    *self = DragPhase::Dragging {
                        start,
                        current: pos,
                        window,
                        ignore_reorder,
                    };
                    return true;
                }
                false
            }
            DragPhase::Dragging { ref mut current, .. } => {
                *current = pos;
                false
            }
            DragPhase::Idle | DragPhase::Detaching { .. } => false,
        }
    }

    /// `Dragging -> Detaching`. Returns the dragged window on success.
    pub fn begin_detach(&mut self) -> Option<WindowId> {
        let DragPhase::Dragging { window, .. } = *self else {
            return None;
        };
        *self = DragPhase::Detaching { window };
        Some(window)
    }

    /// Ends the lifecycle and returns the phase it ended in.
    pub fn release(&mut self) -> DragPhase {
        std::mem::take(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_drag.rs"]
mod tests;
