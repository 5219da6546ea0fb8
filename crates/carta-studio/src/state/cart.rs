//! # Cart State
//!
//! The session's consumer-facing cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action           Command                Cart State Change     │
//! │  ───────────────           ───────                ─────────────────     │
//! │                                                                         │
//! │  "Add to Cart" (sheet) ──► add_to_cart() ───────► entries.push(entry)  │
//! │                                                                         │
//! │  Quick add (card) ───────► quick_add() ─────────► entries.push(entry)  │
//! │                                                                         │
//! │  Cart badge ─────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  The cart is APPEND-ONLY: there is no update or remove. Two adds of    │
//! │  the same item are two entries — each froze its own customization      │
//! │  and total at add time.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are frozen when an entry is added: the customization engine
//! computed them from the item's modifier state, and later edits to the
//! menu configuration must not reprice what the customer already chose.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use carta_core::price::Money;
use carta_core::types::MenuItem;

/// One line in the cart.
///
/// `item` is a frozen snapshot of the menu item at add time, so the cart
/// displays consistent data even if the operator edits the item afterward.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Entry id (UUID v4), not the item id; the same item can appear in
    /// several entries with different customizations.
    pub id: String,

    /// Item snapshot at add time (frozen).
    pub item: MenuItem,

    /// Quantity chosen in the customization sheet.
    pub quantity: i64,

    /// Computed total for this entry in cents (frozen):
    /// `(base + modifiers) × quantity` as priced at add time.
    pub total_cents: i64,

    /// Free-text special instructions from the customization sheet.
    pub special_instructions: String,

    /// When this entry was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Returns the frozen entry total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// The session cart: an append-only list of priced entries.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Entries in add order.
    pub entries: Vec<CartEntry>,

    /// When the cart was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an entry and returns its generated id.
    ///
    /// Takes the validated output of the customization engine:
    /// `(item, quantity, total, notes)`.
    pub fn add_entry(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        total: Money,
        special_instructions: impl Into<String>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.push(CartEntry {
            id: id.clone(),
            item: item.clone(),
            quantity,
            total_cents: total.cents(),
            special_instructions: special_instructions.into(),
            added_at: Utc::now(),
        });
        id
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total quantity across entries, the number the cart badge shows.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Sum of the frozen entry totals.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(CartEntry::total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub entry_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            entry_count: cart.entry_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal().cents(),
        }
    }
}

/// Shared session cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: shared ownership across command dispatches
/// - `Mutex`: one mutation at a time
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carta_core::types::create_empty_item;

    fn burger() -> MenuItem {
        MenuItem {
            name: "Wagyu Burger".to_string(),
            price: "$24.00".to_string(),
            ..create_empty_item("wagyu")
        }
    }

    #[test]
    fn test_add_entry_freezes_item_and_total() {
        let mut cart = Cart::new();
        cart.add_entry(&burger(), 2, Money::from_cents(6600), "extra crispy");

        assert_eq!(cart.entry_count(), 1);
        let entry = &cart.entries[0];
        assert_eq!(entry.item.name, "Wagyu Burger");
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.total(), Money::from_cents(6600));
        assert_eq!(entry.special_instructions, "extra crispy");
    }

    #[test]
    fn test_same_item_twice_is_two_entries() {
        let mut cart = Cart::new();
        let item = burger();
        cart.add_entry(&item, 1, Money::from_cents(2400), "");
        cart.add_entry(&item, 1, Money::from_cents(2900), "");

        assert_eq!(cart.entry_count(), 2);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_cents(5300));
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add_entry(&burger(), 3, Money::from_cents(7200), "");
        let totals = CartTotals::from(&cart);

        assert_eq!(totals.entry_count, 1);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 7200);
    }

    #[test]
    fn test_cart_state_shares_across_clones() {
        let state = CartState::new();
        let handle = state.clone();

        state.with_cart_mut(|cart| cart.add_entry(&burger(), 1, Money::from_cents(2400), ""));

        assert_eq!(handle.with_cart(Cart::entry_count), 1);
    }
}
