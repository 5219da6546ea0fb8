//! # Menu State
//!
//! The session's shared handle on the configuration store.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may read/mutate the configuration
//! 2. Only one command should mutate at a time
//! 3. Shells may dispatch commands from more than one thread
//!
//! The mutation model stays effectively single-threaded: each operation
//! runs to completion under the lock, in dispatch order, and every reader
//! gets a fully-applied snapshot, never a half-written tree.

use std::sync::{Arc, Mutex};

use carta_core::store::MenuStore;
use carta_core::types::MenuConfig;

/// Shared session state wrapping the configuration store.
///
/// One `MenuState` per session; independent sessions (and tests) construct
/// their own instead of sharing a global.
#[derive(Debug, Clone)]
pub struct MenuState {
    store: Arc<Mutex<MenuStore>>,
}

impl MenuState {
    /// Creates session state seeded with the default configuration.
    pub fn new() -> Self {
        MenuState {
            store: Arc::new(Mutex::new(MenuStore::new())),
        }
    }

    /// Creates session state around an explicit store (tests, future
    /// fetched-data integration).
    pub fn with_store(store: MenuStore) -> Self {
        MenuState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let config = menu_state.with_menu(|store| store.snapshot());
    /// ```
    pub fn with_menu<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&MenuStore) -> R,
    {
        let store = self.store.lock().expect("Menu store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// menu_state.with_menu_mut(|store| store.add_category("Starters"));
    /// ```
    pub fn with_menu_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut MenuStore) -> R,
    {
        let mut store = self.store.lock().expect("Menu store mutex poisoned");
        f(&mut store)
    }

    /// Convenience: an independent snapshot of the current configuration.
    pub fn snapshot(&self) -> MenuConfig {
        self.with_menu(|store| store.snapshot())
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let a = MenuState::new();
        let b = MenuState::new();

        a.with_menu_mut(|store| store.add_category("Only in A"));

        let names = |state: &MenuState| {
            state
                .snapshot()
                .categories
                .iter()
                .map(|cat| cat.name.clone())
                .collect::<Vec<_>>()
        };
        assert!(names(&a).contains(&"Only in A".to_string()));
        assert!(!names(&b).contains(&"Only in A".to_string()));
    }

    #[test]
    fn test_clones_share_the_same_session() {
        let state = MenuState::new();
        let handle = state.clone();

        let id = state.with_menu_mut(|store| store.add_category("Shared"));

        assert!(handle.snapshot().category(&id).is_some());
    }

    #[test]
    fn test_snapshot_is_independent_of_later_mutations() {
        let state = MenuState::new();
        let before = state.snapshot();
        let count = before.categories.len();

        state.with_menu_mut(|store| store.add_category("Later"));

        assert_eq!(before.categories.len(), count);
        assert_eq!(state.snapshot().categories.len(), count + 1);
    }
}
