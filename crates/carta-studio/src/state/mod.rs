//! # State Module
//!
//! Per-session state containers for the editor.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: The menu and the cart don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┐   ┌──────────────────────┐            │
//! │          │      MenuState       │   │      CartState       │            │
//! │          │                      │   │                      │            │
//! │          │  Arc<Mutex<          │   │  Arc<Mutex<          │            │
//! │          │    MenuStore         │   │    Cart              │            │
//! │          │  >>                  │   │  >>                  │            │
//! │          └──────────────────────┘   └──────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Both containers serialize mutations behind a Mutex                  │
//! │  • Readers receive owned snapshots, never live references              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod menu;

pub use cart::{Cart, CartEntry, CartState, CartTotals};
pub use menu::MenuState;
