mod drag;
mod geometry;
mod tab;
mod tab_list;

pub use drag::DragPhase;
pub use geometry::{Rect, StripShape, ToolBarArea};
pub use tab::{
    ButtonSide, CloseButton, CloseGlyph, Icon, IconButton, LoadingState, TabIcon, TabRecord,
    Thumbnail, WindowId,
};
pub use tab_list::{TabList, normalized_active_index_after_remove};
