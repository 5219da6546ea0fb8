//! # Carta Studio Session Layer
//!
//! State containers and the command surface for the visual menu builder.
//! The rendering shell (out of scope here) constructs the two state
//! handles at startup, then routes every user interaction through the
//! command functions.
//!
//! ## Module Organization
//! ```text
//! carta_studio/
//! ├── lib.rs          ◄─── You are here (wiring & exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── menu.rs     ◄─── Configuration store handle
//! │   └── cart.rs     ◄─── Session cart
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Category/item/style/theme commands
//! │   └── cart.rs     ◄─── Cart commands
//! ├── error.rs        ◄─── API error type for commands
//! └── telemetry.rs    ◄─── Tracing initialization
//! ```
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. telemetry::init()        logging with env-filter                    │
//! │  2. MenuState::new()         store seeded with the default menu         │
//! │  3. CartState::new()         empty cart                                 │
//! │  4. commands::*              dispatched per user interaction            │
//! │                                                                         │
//! │  Teardown is a drop: nothing persists across sessions.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod telemetry;

pub use error::{ApiError, ErrorCode};
pub use state::{Cart, CartEntry, CartState, CartTotals, MenuState};

#[cfg(test)]
mod tests {
    use super::*;
    use carta_core::customize::ItemCustomization;

    /// End-to-end session walk: build a category, edit an item, customize
    /// it, and land it in the cart.
    #[test]
    fn test_full_session_flow() {
        let menu = MenuState::new();
        let cart = CartState::new();

        let category_id = commands::menu::add_category(&menu, "Burgers").unwrap();
        let item_id = commands::menu::add_item(&menu, &category_id).unwrap();

        let mut draft = menu
            .snapshot()
            .category(&category_id)
            .unwrap()
            .items[0]
            .clone();
        draft.name = "Smash Burger".to_string();
        draft.price = "$12.00".to_string();
        commands::menu::update_item(&menu, &category_id, draft).unwrap();

        let config = commands::menu::get_menu(&menu);
        let item = config
            .category(&category_id)
            .unwrap()
            .items
            .iter()
            .find(|i| i.id == item_id)
            .unwrap();

        let mut session = ItemCustomization::new(item);
        session.set_quantity(3);
        commands::cart::add_to_cart(&cart, &mut session).unwrap();

        let response = commands::cart::get_cart(&cart);
        assert_eq!(response.totals.entry_count, 1);
        assert_eq!(response.totals.total_quantity, 3);
        assert_eq!(response.totals.subtotal_cents, 3600);
    }
}
