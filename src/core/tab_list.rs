//! Ordered tab collection with a pinned prefix.
//!
//! Pinned tabs always occupy `[0, pinned_count)`. Inserts and moves are
//! clamped into the partition the tab belongs to, and pin-state changes
//! relocate the tab to the partition boundary.
//!
//! Closing the current tab returns to the tab that was current before it
//! was selected; when that tab is gone too, the tab now at the same position
//! (or the new last tab) takes over.

use std::collections::HashMap;

use super::tab::{TabRecord, WindowId};

#[derive(Debug, Default)]
pub struct TabList {
    tabs: Vec<TabRecord>,
    current: Option<usize>,
    pinned: usize,
    /// Window that was current when the key window was selected.
    selected_from: HashMap<WindowId, WindowId>,
}

impl TabList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TabRecord> {
        self.tabs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TabRecord> {
        self.tabs.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabRecord> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TabRecord> {
        self.tabs.iter_mut()
    }

    pub fn last(&self) -> Option<&TabRecord> {
        self.tabs.last()
    }

    pub fn position_of(&self, window: WindowId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.window == window)
    }

    pub fn pinned_count(&self) -> usize {
        self.pinned
    }

    /// Pinned flags in strip order, as consumed by the layout functions.
    pub fn pinned_flags(&self) -> Vec<bool> {
        self.tabs.iter().map(|tab| tab.is_pinned).collect()
    }

    /// Recounts pinned tabs from the cached flags.
    pub fn recount_pinned(&mut self) -> usize {
        self.pinned = self.tabs.iter().filter(|tab| tab.is_pinned).count();
        self.pinned
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_window(&self) -> Option<WindowId> {
        self.current
            .and_then(|index| self.tabs.get(index))
            .map(|tab| tab.window)
    }

    /// Sets the current tab. Out-of-range indices are ignored.
    /// Returns `true` when the current tab changed.
    pub fn set_current(&mut self, index: usize) -> bool {
        let Some(window) = self.tabs.get(index).map(|tab| tab.window) else {
            return false;
        };
        if self.current == Some(index) {
            return false;
        }
        match self.current_window() {
            Some(previous) => self.selected_from.insert(window, previous),
            None => self.selected_from.remove(&window),
        };
        self.current = Some(index);
        true
    }

    /// Inserts `record` as close to `index` as its partition allows and
    /// returns the index it landed on.
    pub fn insert(&mut self, index: usize, record: TabRecord) -> usize {
        let index = if record.is_pinned {
            index.min(self.pinned)
        } else {
            index.clamp(self.pinned, self.tabs.len())
        };
        let pinned = record.is_pinned;
        self.tabs.insert(index, record);
        if pinned {
            self.pinned += 1;
        }

        self.current = match self.current {
            None => Some(index),
            Some(current) if current >= index => Some(current + 1),
            Some(current) => Some(current),
        };
        index
    }

    /// Removes the tab at `index`; `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<TabRecord> {
        if index >= self.tabs.len() {
            return None;
        }
        let len_before = self.tabs.len();
        let was_current = self.current == Some(index);
        let record = self.tabs.remove(index);
        if record.is_pinned {
            self.pinned = self.pinned.saturating_sub(1);
        }

        let selected_from = self.selected_from.remove(&record.window);
        self.current = match selected_from.and_then(|window| self.position_of(window)) {
            Some(previous) if was_current => Some(previous),
            _ => self
                .current
                .and_then(|active| normalized_active_index_after_remove(active, len_before, index)),
        };
        Some(record)
    }

    /// Moves a tab within its own partition.
    ///
    /// `to` is clamped so a pinned tab never leaves the pinned prefix and an
    /// unpinned tab never enters it. Returns `false` when nothing moved.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        let Some(tab) = self.tabs.get(from) else {
            return false;
        };
        let to = if tab.is_pinned {
            to.min(self.pinned.saturating_sub(1))
        } else {
            to.clamp(self.pinned, self.tabs.len() - 1)
        };
        self.relocate(from, to)
    }

    /// Updates the pin flag of the tab at `index` and moves it to the
    /// partition boundary. Returns its new index.
    pub fn set_pinned(&mut self, index: usize, pinned: bool) -> Option<usize> {
        let tab = self.tabs.get_mut(index)?;
        tab.is_pinned = pinned;
        let amount = self.recount_pinned();
        let target = if pinned { amount.saturating_sub(1) } else { amount };
        self.relocate(index, target);
        Some(target)
    }

    /// Returns `true` while every pinned tab precedes every unpinned one.
    pub fn is_partitioned(&self) -> bool {
        self.tabs
            .iter()
            .position(|tab| !tab.is_pinned)
            .is_none_or(|first_unpinned| self.tabs[first_unpinned..].iter().all(|tab| !tab.is_pinned))
    }

    /// Raw reorder without partition checks; keeps `current` on the same tab.
    fn relocate(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() || to >= self.tabs.len() || from == to {
            return false;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);

        if let Some(active) = self.current {
            self.current = Some(if active == from {
                to
            } else if from < active && to >= active {
                active - 1
            } else if from > active && to <= active {
                active + 1
            } else {
                active
            });
        }
        true
    }
}

/// Index of the current tab after the tab at `removed_index` went away.
pub fn normalized_active_index_after_remove(
    active: usize,
    len_before: usize,
    removed_index: usize,
) -> Option<usize> {
    if len_before == 0 || removed_index >= len_before {
        return None;
    }

    let len_after = len_before - 1;
    if len_after == 0 {
        return None;
    }

    let next_active = if active > removed_index {
        active.saturating_sub(1)
    } else {
        active
    };

    Some(next_active.min(len_after - 1))
}

#[cfg(test)]
#[path = "../../tests/unit/core_tab_list.rs"]
mod tests;
