//! Shared layout calculations for the tab strip.
//!
//! This module contains pure, side-effect-free math functions that compute
//! positions, sizes, and hit-test geometry. The strip and any painter the
//! host writes use the same functions, so what is painted is what is hit.

pub mod preview_math;
pub mod tab_math;
pub mod title;
