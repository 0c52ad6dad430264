use super::*;

fn tab(id: u64, pinned: bool) -> TabRecord {
    TabRecord::new(WindowId(id), format!("Tab {id}"), "about:blank", pinned)
}

fn list_of(tabs: &[(u64, bool)]) -> TabList {
    let mut list = TabList::new();
    for &(id, pinned) in tabs {
        let len = list.len();
        list.insert(len, tab(id, pinned));
    }
    list
}

fn order(list: &TabList) -> Vec<u64> {
    list.iter().map(|t| t.window.0).collect()
}

#[test]
fn first_insert_becomes_current() {
    let mut list = TabList::new();
    assert_eq!(list.current(), None);
    list.insert(0, tab(1, false));
    assert_eq!(list.current(), Some(0));
}

#[test]
fn insert_before_current_shifts_current() {
    let mut list = list_of(&[(1, false), (2, false)]);
    list.set_current(1);
    list.insert(0, tab(3, false));
    assert_eq!(list.current(), Some(2));
    assert_eq!(list.get(2).map(|t| t.window), Some(WindowId(2)));
}

#[test]
fn pinned_insert_is_clamped_into_prefix() {
    let mut list = list_of(&[(1, false), (2, false)]);
    let index = list.insert(2, tab(3, true));
    assert_eq!(index, 0);
    assert_eq!(order(&list), vec![3, 1, 2]);
    assert_eq!(list.pinned_count(), 1);
    assert!(list.is_partitioned());
}

#[test]
fn unpinned_insert_never_enters_prefix() {
    let mut list = list_of(&[(1, true), (2, false)]);
    let index = list.insert(0, tab(3, false));
    assert_eq!(index, 1);
    assert_eq!(order(&list), vec![1, 3, 2]);
    assert!(list.is_partitioned());
}

#[test]
fn remove_out_of_range_is_none() {
    let mut list = list_of(&[(1, false)]);
    assert!(list.remove(4).is_none());
    assert_eq!(list.len(), 1);
}

#[test]
fn removing_last_current_tab_selects_new_last() {
    let mut list = list_of(&[(1, false)]);
    list.insert(0, tab(2, false));
    list.insert(0, tab(3, false));
    assert_eq!(list.current(), Some(2));

    list.remove(2);
    assert_eq!(list.current(), Some(1));
    assert_eq!(list.current_window(), Some(WindowId(2)));
}

#[test]
fn closing_current_tab_returns_to_previous_one() {
    let mut list = list_of(&[(1, false), (2, false), (3, false), (4, false)]);
    list.set_current(0);
    list.set_current(2);
    list.remove(2);
    assert_eq!(list.current_window(), Some(WindowId(1)));
}

#[test]
fn previous_tab_is_followed_across_moves() {
    let mut list = list_of(&[(1, false), (2, false), (3, false), (4, false)]);
    list.set_current(1);
    list.set_current(3);
    list.move_tab(1, 0);
    assert_eq!(order(&list), vec![2, 1, 3, 4]);

    list.remove(3);
    assert_eq!(list.current(), Some(0));
    assert_eq!(list.current_window(), Some(WindowId(2)));
}

#[test]
fn previous_tab_chain_unwinds() {
    let mut list = list_of(&[(1, false), (2, false), (3, false), (4, false)]);
    list.set_current(2);
    list.set_current(3);
    list.remove(3);
    assert_eq!(list.current_window(), Some(WindowId(3)));

    list.remove(2);
    assert_eq!(list.current_window(), Some(WindowId(1)));
}

#[test]
fn closed_previous_tab_falls_back_to_position() {
    let mut list = list_of(&[(1, false), (2, false), (3, false), (4, false)]);
    list.set_current(3);
    list.set_current(1);
    list.remove(3);
    assert_eq!(list.current_window(), Some(WindowId(2)));

    list.remove(1);
    assert_eq!(list.current(), Some(1));
    assert_eq!(list.current_window(), Some(WindowId(3)));
}

#[test]
fn closing_other_tab_keeps_current() {
    let mut list = list_of(&[(1, false), (2, false), (3, false)]);
    list.set_current(2);
    list.remove(0);
    assert_eq!(list.current_window(), Some(WindowId(3)));
}

#[test]
fn removing_pinned_tab_shrinks_prefix() {
    let mut list = list_of(&[(1, true), (2, true), (3, false)]);
    let removed = list.remove(0).expect("removed");
    assert!(removed.is_pinned);
    assert_eq!(list.pinned_count(), 1);
}

#[test]
fn removing_only_tab_clears_current() {
    let mut list = list_of(&[(1, false)]);
    list.remove(0);
    assert!(list.is_empty());
    assert_eq!(list.current(), None);
}

#[test]
fn move_keeps_current_on_same_tab() {
    let mut list = list_of(&[(1, false), (2, false), (3, false), (4, false)]);
    list.set_current(1);
    assert!(list.move_tab(0, 3));
    assert_eq!(order(&list), vec![2, 3, 4, 1]);
    assert_eq!(list.current(), Some(0));
}

#[test]
fn move_there_and_back_restores_order() {
    let mut list = list_of(&[(1, false), (2, false), (3, false), (4, false)]);
    list.move_tab(1, 3);
    list.move_tab(3, 1);
    assert_eq!(order(&list), vec![1, 2, 3, 4]);
}

#[test]
fn pinned_tab_cannot_leave_prefix() {
    let mut list = list_of(&[(1, true), (2, false), (3, false)]);
    assert!(!list.move_tab(0, 2));
    assert_eq!(order(&list), vec![1, 2, 3]);
}

#[test]
fn unpinned_tab_stops_at_boundary() {
    let mut list = list_of(&[(1, true), (2, false), (3, false)]);
    assert!(list.move_tab(2, 0));
    assert_eq!(order(&list), vec![1, 3, 2]);
}

#[test]
fn pinning_moves_tab_to_end_of_prefix() {
    let mut list = list_of(&[(1, true), (2, false), (3, false)]);
    assert_eq!(list.set_pinned(2, true), Some(1));
    assert_eq!(order(&list), vec![1, 3, 2]);
    assert_eq!(list.pinned_count(), 2);
    assert!(list.is_partitioned());
}

#[test]
fn unpinning_moves_tab_to_start_of_unpinned() {
    let mut list = list_of(&[(1, true), (2, true), (3, false)]);
    assert_eq!(list.set_pinned(0, false), Some(1));
    assert_eq!(order(&list), vec![2, 1, 3]);
    assert_eq!(list.pinned_count(), 1);
    assert!(list.is_partitioned());
}

#[test]
fn set_current_ignores_out_of_range() {
    let mut list = list_of(&[(1, false)]);
    assert!(!list.set_current(3));
    assert!(!list.set_current(0));
    assert_eq!(list.current(), Some(0));
}

#[test]
fn normalize_active_index_cases() {
    assert_eq!(normalized_active_index_after_remove(0, 0, 0), None);
    assert_eq!(normalized_active_index_after_remove(0, 1, 0), None);
    assert_eq!(normalized_active_index_after_remove(2, 3, 5), None);
    assert_eq!(normalized_active_index_after_remove(1, 3, 0), Some(0));
    assert_eq!(normalized_active_index_after_remove(0, 3, 2), Some(0));
    assert_eq!(normalized_active_index_after_remove(2, 3, 2), Some(1));
}

#[test]
fn mixed_sequence_keeps_pinned_prefix() {
    let mut list = list_of(&[(1, false), (2, true), (3, false), (4, true)]);
    assert!(list.is_partitioned());

    let mut next_id = 5;
    for step in 0..60usize {
        let len = list.len();
        match step % 5 {
            0 => {
                list.insert(step % (len + 1), tab(next_id, step % 3 == 0));
                next_id += 1;
            }
            1 if len > 0 => {
                list.set_pinned(step % len, step % 2 == 0);
            }
            2 if len > 1 => {
                list.move_tab(step % len, (step * 7) % len);
            }
            3 if len > 3 => {
                list.remove((step * 3) % len);
            }
            _ => {
                if len > 0 {
                    list.set_current(step % len);
                }
            }
        }
        let pinned = list.iter().filter(|t| t.is_pinned).count();
        assert!(list.is_partitioned(), "step {step}: {:?}", list.pinned_flags());
        assert_eq!(list.pinned_count(), pinned, "step {step}");
        assert!(list.current().is_none_or(|current| current < list.len()));
    }
}
