//! Tab title fitting.

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

use crate::core::Rect;

use super::tab_math::{self, TabLayoutMetrics};

const ELLIPSIS: char = '…';

/// Number of text columns available for the title inside `tab`.
pub fn title_max_columns(m: &TabLayoutMetrics, tab: Rect, buttons_shown: usize) -> usize {
    let padding = m.scaled_px(tab_math::TAB_PADDING) as i32 * 2;
    let per_button = (m.scaled_px(tab_math::BUTTON_SIZE) + m.scaled_px(tab_math::BUTTON_MARGIN)) as i32;
    let available = tab.w - padding - per_button * buttons_shown as i32;
    if available <= 0 || m.cell_width == 0 {
        return 0;
    }
    available as usize / m.cell_width as usize
}

/// Elides `title` at the end so that it fits in `max_columns` display columns.
///
/// Wide (CJK) characters count as two columns.
pub fn elide_title(title: &str, max_columns: usize) -> Cow<'_, str> {
    let width: usize = title.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_columns {
        return Cow::Borrowed(title);
    }
    if max_columns == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_columns - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}
