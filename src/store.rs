//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::RandomizeRanges;
use crate::models::{initial_items, Item};
use crate::state::{self, RandomSource};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Display order is list order
    pub items: Vec<Item>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            items: initial_items(),
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of all items
pub fn store_items(store: &PageStore) -> Vec<Item> {
    store.items().get()
}

/// Read one field of the item with `id`, tracking the item list
pub fn store_item_field<R: Default>(store: &PageStore, id: &str, field: impl Fn(&Item) -> R) -> R {
    store
        .items()
        .read()
        .iter()
        .find(|item| item.id == id)
        .map(field)
        .unwrap_or_default()
}

/// Move an item by ID. Unknown IDs leave the store untouched.
pub fn store_move_item(store: &PageStore, id: &str, x: i32, y: i32) {
    let known = store.items().read_untracked().iter().any(|item| item.id == id);
    if !known {
        log::debug!("move ignored, no item {}", id);
        return;
    }
    store.items().update(|items| {
        state::move_item(items, id, x, y);
    });
    log::debug!("moved {} to ({}, {})", id, x, y);
}

/// Replace every item's temperature and position in a single write
pub fn store_randomize(store: &PageStore, ranges: &RandomizeRanges, rng: &mut impl RandomSource) {
    let next = store.items().with_untracked(|items| state::randomized(items, ranges, rng));
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&next) {
            log::debug!("randomized {}", json);
        }
    }
    store.items().set(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Sequence;
    use leptos::reactive::owner::Owner;

    fn with_store(f: impl FnOnce(PageStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(PageState::new())));
    }

    #[test]
    fn test_store_move_known_item() {
        with_store(|store| {
            let before = store.items().get_untracked();

            store_move_item(&store, "item-1", 537, 138);

            let after = store.items().get_untracked();
            assert_eq!((after[0].x, after[0].y), (537, 138));
            assert_eq!(after[0].temp, before[0].temp);
            assert_eq!(&after[1..], &before[1..]);
        });
    }

    #[test]
    fn test_store_move_unknown_item_leaves_store_untouched() {
        with_store(|store| {
            let before = store.items().get_untracked();

            store_move_item(&store, "item-9", 1, 2);

            assert_eq!(store.items().get_untracked(), before);
        });
    }

    #[test]
    fn test_store_randomize_replaces_all_items() {
        with_store(|store| {
            let before = store.items().get_untracked();
            let mut rng = Sequence::new(&[0.1, 0.0, 0.999_999, 0.73, 0.5]);

            store_randomize(&store, &RandomizeRanges::default(), &mut rng);

            let after = store.items().get_untracked();
            assert_eq!(after.len(), before.len());
            for (new, old) in after.iter().zip(&before) {
                assert_eq!(new.id, old.id);
                assert_eq!(new.icon, old.icon);
                assert!((0..=100).contains(&new.temp), "temp {}", new.temp);
                assert!((300..=599).contains(&new.x), "x {}", new.x);
                assert!((300..=599).contains(&new.y), "y {}", new.y);
            }
            // First item drew temp 0.1, x 0.0, y 0.999999
            assert_eq!((after[0].temp, after[0].x, after[0].y), (10, 300, 599));
            assert_eq!(store_item_field(&store, "item-1", |i| i.x), 300);
        });
    }

    #[test]
    fn test_store_item_field_unknown_id_defaults() {
        with_store(|store| {
            assert_eq!(store_item_field(&store, "nope", |i| i.temp), 0);
            assert_eq!(store_item_field(&store, "item-4", |i| i.temp), 40);
        });
    }
}
