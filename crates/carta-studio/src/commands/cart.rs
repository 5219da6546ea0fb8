//! # Cart Commands
//!
//! Commands bridging the customization engine and the session cart.
//!
//! ## Add-to-Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add to Cart                                          │
//! │                                                                         │
//! │  Detail sheet "Add to Cart" button                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.validate() ── false ──► per-group errors stay on the sheet,   │
//! │       │                          command refuses, cart untouched       │
//! │       ▼ true                                                            │
//! │  cart.add_entry(item, quantity, total, notes)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  toast + cart badge update (frontend)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use carta_core::customize::ItemCustomization;
use carta_core::price::parse_price;
use carta_core::types::MenuItem;
use carta_core::validation;
use serde::Serialize;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{Cart, CartEntry, CartState, CartTotals};

/// Cart response including entries and totals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            entries: cart.entries.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|cart| CartResponse::from(cart))
}

/// Adds the customized item to the cart.
///
/// Refuses when a required modifier group has no selection; the per-group
/// messages stay on the customization session for the sheet to render, and
/// the cart is untouched. Returns the new entry's id.
pub fn add_to_cart(
    cart: &CartState,
    session: &mut ItemCustomization,
) -> Result<String, ApiError> {
    if !session.validate() {
        return Err(ApiError::validation(
            "please complete the required selections",
        ));
    }
    validation::validate_quantity(session.quantity())?;

    let total = session.total_price();
    debug!(
        item = %session.item().name,
        quantity = session.quantity(),
        total_cents = total.cents(),
        "add_to_cart command"
    );

    let item = session.item().clone();
    let quantity = session.quantity();
    let notes = session.special_instructions().to_string();
    Ok(cart.with_cart_mut(|cart| cart.add_entry(&item, quantity, total, notes)))
}

/// One-tap add from a card or pairing chip: quantity 1, no customization,
/// priced straight from the item's display price.
pub fn quick_add(cart: &CartState, item: &MenuItem) -> String {
    let total = parse_price(&item.price);
    debug!(item = %item.name, total_cents = total.cents(), "quick_add command");
    cart.with_cart_mut(|cart| cart.add_entry(item, 1, total, String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use carta_core::types::{create_empty_item, ModifierGroup, ModifierOption};

    fn sized_item() -> MenuItem {
        MenuItem {
            name: "Wagyu Burger".to_string(),
            price: "$10.00".to_string(),
            modifier_groups: Some(vec![ModifierGroup {
                id: "size".to_string(),
                name: "Choose Your Size".to_string(),
                required: true,
                min_select: None,
                max_select: None,
                options: vec![ModifierOption {
                    id: "large".to_string(),
                    name: "Large".to_string(),
                    description: None,
                    price_cents: 2299,
                    is_default: false,
                }],
            }]),
            ..create_empty_item("wagyu")
        }
    }

    #[test]
    fn test_add_to_cart_blocks_on_missing_required_selection() {
        let cart = CartState::new();
        let mut session = ItemCustomization::new(&sized_item());

        let err = add_to_cart(&cart, &mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.errors().contains_key("size"));
        assert!(cart.with_cart(Cart::is_empty));
    }

    #[test]
    fn test_add_to_cart_freezes_the_computed_total() {
        let cart = CartState::new();
        let mut session = ItemCustomization::new(&sized_item());

        session.select_option("size", "large");
        session.set_quantity(2);
        let id = add_to_cart(&cart, &mut session).unwrap();

        let response = get_cart(&cart);
        assert_eq!(response.entries.len(), 1);
        assert_eq!(response.entries[0].id, id);
        // Size replaced the base: (22.99) × 2, not (10.00 + 22.99) × 2
        assert_eq!(response.entries[0].total_cents, 4598);
        assert_eq!(response.totals.total_quantity, 2);
    }

    #[test]
    fn test_quick_add_uses_display_price() {
        let cart = CartState::new();
        let item = MenuItem {
            price: "$16.50".to_string(),
            ..create_empty_item("calamari")
        };

        quick_add(&cart, &item);

        let totals = cart.with_cart(|cart| CartTotals::from(cart));
        assert_eq!(totals.subtotal_cents, 1650);
        assert_eq!(totals.total_quantity, 1);
    }

    #[test]
    fn test_quantity_above_cap_is_rejected() {
        let cart = CartState::new();
        let item = create_empty_item("plain");
        let mut session = ItemCustomization::new(&item);
        session.set_quantity(500);

        let err = add_to_cart(&cart, &mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(cart.with_cart(Cart::is_empty));
    }
}
