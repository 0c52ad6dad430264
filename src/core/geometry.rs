use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in strip-local or screen pixels.
///
/// Coordinates are signed: screen rectangles on multi-monitor setups can
/// start left of or above the primary screen's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Last pixel column that still belongs to the rectangle.
    pub fn last_x(&self) -> i32 {
        self.right() - 1
    }

    /// Last pixel row that still belongs to the rectangle.
    pub fn last_y(&self) -> i32 {
        self.bottom() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Returns `true` when `(px, py)` falls inside this rectangle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x as f64
            && px < self.right() as f64
            && py >= self.y as f64
            && py < self.bottom() as f64
    }

    /// Grows (positive) or shrinks (negative) every edge by `margin`.
    pub fn inflated(&self, margin: i32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + margin * 2,
            h: self.h + margin * 2,
        }
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Center of the rectangle projected onto the strip's main axis.
    pub fn center_along(&self, horizontal: bool) -> f64 {
        if horizontal {
            self.x as f64 + self.w as f64 / 2.0
        } else {
            self.y as f64 + self.h as f64 / 2.0
        }
    }
}

/// Edge of the window the strip is docked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolBarArea {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Which side the tabs face; decides the orientation of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripShape {
    #[default]
    North,
    South,
    East,
    West,
}

impl StripShape {
    pub fn from_area(area: ToolBarArea) -> Self {
        match area {
            ToolBarArea::Left => StripShape::West,
            ToolBarArea::Right => StripShape::East,
            ToolBarArea::Bottom => StripShape::South,
            ToolBarArea::Top => StripShape::North,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, StripShape::North | StripShape::South)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}
