//! # Item Customization Engine
//!
//! Ephemeral selection state for one item being configured for purchase.
//! Constructed when the detail sheet opens, consumed by add-to-cart, and
//! dropped when the sheet closes; nothing here touches the configuration
//! store.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  How a Total Is Computed                                │
//! │                                                                         │
//! │  base  = parse_price(item.price)                                        │
//! │                                                                         │
//! │  For each modifier group with a selection:                              │
//! │    required + name contains "size" + single choice                      │
//! │        └──► REPLACES base with the option price (last such group wins)  │
//! │    anything else selected                                               │
//! │        └──► ADDS the option price to the modifier total                 │
//! │                                                                         │
//! │  total = (base + modifier_total) × quantity                             │
//! │                                                                         │
//! │  "Size replaces, everything else adds" is the load-bearing invariant:   │
//! │  a $10.00 burger with the $22.99 Large selected costs $22.99,          │
//! │  never $32.99.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The size rule is inferred from group metadata (required flag + name
//! substring), not an explicit role field; see `ModifierGroup::replaces_base_price`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::{parse_price, Money};
use crate::types::{MenuItem, ModifierGroup};

// =============================================================================
// Selection State
// =============================================================================

/// The selection recorded for one modifier group.
///
/// Required groups hold a single option id (`Single`), with the empty
/// string standing in for "nothing chosen yet". Optional groups hold a
/// list (`Multiple`), possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ModifierSelection {
    Single(String),
    Multiple(Vec<String>),
}

impl ModifierSelection {
    /// Whether this selection counts as "nothing chosen" for validation:
    /// only the empty-string single sentinel does. An empty list on an
    /// optional group is a perfectly valid "no extras".
    fn is_unset(&self) -> bool {
        matches!(self, ModifierSelection::Single(id) if id.is_empty())
    }
}

/// Computed pricing for the current selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Item base price, possibly replaced by a size selection.
    pub base: Money,
    /// Sum of every additive selected option.
    pub modifier_total: Money,
    /// `(base + modifier_total) × quantity`.
    pub total: Money,
}

// =============================================================================
// Customization Engine
// =============================================================================

/// Selection, quantity, and validation state for one item in focus.
///
/// Pricing is never stored: [`ItemCustomization::price_quote`] recomputes
/// it from the current state on every call, so it cannot drift from the
/// selections.
#[derive(Debug, Clone)]
pub struct ItemCustomization {
    item: MenuItem,
    selected_modifiers: HashMap<String, ModifierSelection>,
    quantity: i64,
    special_instructions: String,
    errors: HashMap<String, String>,
}

impl ItemCustomization {
    /// Opens a customization session for an item.
    ///
    /// Initial selections per group: required groups preselect the
    /// default-flagged option (first in list order when several are
    /// flagged) or the empty sentinel; optional groups preselect a
    /// singleton list of the default or an empty list.
    pub fn new(item: &MenuItem) -> Self {
        let mut selected_modifiers = HashMap::new();

        for group in item.modifiers() {
            let default_id = group.default_option().map(|option| option.id.clone());
            let selection = if group.required {
                ModifierSelection::Single(default_id.unwrap_or_default())
            } else {
                ModifierSelection::Multiple(default_id.map(|id| vec![id]).unwrap_or_default())
            };
            selected_modifiers.insert(group.id.clone(), selection);
        }

        ItemCustomization {
            item: item.clone(),
            selected_modifiers,
            quantity: 1,
            special_instructions: String::new(),
            errors: HashMap::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The item being customized.
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// The item's modifier groups.
    pub fn modifiers(&self) -> &[ModifierGroup] {
        self.item.modifiers()
    }

    /// Current selection map, keyed by group id.
    pub fn selected_modifiers(&self) -> &HashMap<String, ModifierSelection> {
        &self.selected_modifiers
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }

    /// Validation messages from the last [`validate`](Self::validate) run,
    /// keyed by group id.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Whether an option is part of the group's current selection.
    pub fn is_selected(&self, group_id: &str, option_id: &str) -> bool {
        match self.selected_modifiers.get(group_id) {
            Some(ModifierSelection::Single(id)) => id == option_id,
            Some(ModifierSelection::Multiple(ids)) => ids.iter().any(|id| id == option_id),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Selection Operations
    // -------------------------------------------------------------------------

    /// Single-choice selection for required groups: unconditionally
    /// replaces whatever was selected before.
    pub fn select_option(&mut self, group_id: &str, option_id: &str) {
        self.selected_modifiers.insert(
            group_id.to_string(),
            ModifierSelection::Single(option_id.to_string()),
        );
    }

    /// Multi-choice toggle for optional groups: adds the option if absent,
    /// removes it if present. Any non-list state for the group is treated
    /// as an empty list.
    pub fn toggle_option(&mut self, group_id: &str, option_id: &str) {
        let entry = self
            .selected_modifiers
            .entry(group_id.to_string())
            .or_insert_with(|| ModifierSelection::Multiple(Vec::new()));

        if !matches!(entry, ModifierSelection::Multiple(_)) {
            *entry = ModifierSelection::Multiple(Vec::new());
        }

        if let ModifierSelection::Multiple(ids) = entry {
            if let Some(position) = ids.iter().position(|id| id == option_id) {
                ids.remove(position);
            } else {
                ids.push(option_id.to_string());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Quantity & Notes
    // -------------------------------------------------------------------------

    /// Sets the quantity, flooring at 1.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
    }

    pub fn increment_quantity(&mut self) {
        self.quantity += 1;
    }

    /// Decrement is a no-op at 1.
    pub fn decrement_quantity(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    pub fn set_special_instructions(&mut self, notes: impl Into<String>) {
        self.special_instructions = notes.into();
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks that every required group has a selection.
    ///
    /// Replaces the entire error map as a side effect: groups that now
    /// validate lose their stale messages. Returns true iff no group
    /// produced an error.
    pub fn validate(&mut self) -> bool {
        let mut next_errors = HashMap::new();

        for group in self.item.modifiers() {
            if !group.required {
                continue;
            }
            let unset = self
                .selected_modifiers
                .get(&group.id)
                .map_or(true, ModifierSelection::is_unset);
            if unset {
                next_errors.insert(
                    group.id.clone(),
                    format!("Please select {}.", group.name.to_lowercase()),
                );
            }
        }

        self.errors = next_errors;
        self.errors.is_empty()
    }

    /// Clears one group's error when an id is given, else all errors.
    /// Does not re-run validation.
    pub fn reset_errors(&mut self, group_id: Option<&str>) {
        match group_id {
            Some(id) => {
                self.errors.remove(id);
            }
            None => self.errors.clear(),
        }
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Recomputes pricing from the current selection state.
    pub fn price_quote(&self) -> PriceQuote {
        let mut base = parse_price(&self.item.price);
        let mut modifier_total = Money::zero();

        for group in self.item.modifiers() {
            let Some(selection) = self.selected_modifiers.get(&group.id) else {
                continue;
            };

            match selection {
                ModifierSelection::Single(option_id) => {
                    // The empty sentinel means "nothing chosen yet"
                    if option_id.is_empty() {
                        continue;
                    }
                    if group.replaces_base_price() {
                        if let Some(option) = group.option(option_id) {
                            base = option.price();
                            continue;
                        }
                    }
                    // Unknown option ids contribute zero
                    modifier_total += group
                        .option(option_id)
                        .map(|option| option.price())
                        .unwrap_or_default();
                }
                ModifierSelection::Multiple(option_ids) => {
                    modifier_total += option_ids
                        .iter()
                        .filter_map(|id| group.option(id))
                        .map(|option| option.price())
                        .sum::<Money>();
                }
            }
        }

        let total = (base + modifier_total).multiply_quantity(self.quantity);
        PriceQuote {
            base,
            modifier_total,
            total,
        }
    }

    /// The grand total for the current state.
    pub fn total_price(&self) -> Money {
        self.price_quote().total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{create_empty_item, ModifierOption};

    fn option(id: &str, price_cents: i64, is_default: bool) -> ModifierOption {
        ModifierOption {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            price_cents,
            is_default,
        }
    }

    fn group(id: &str, name: &str, required: bool, options: Vec<ModifierOption>) -> ModifierGroup {
        ModifierGroup {
            id: id.to_string(),
            name: name.to_string(),
            required,
            min_select: None,
            max_select: None,
            options,
        }
    }

    fn item_with_groups(price: &str, groups: Vec<ModifierGroup>) -> MenuItem {
        MenuItem {
            price: price.to_string(),
            modifier_groups: Some(groups),
            ..create_empty_item("test-item")
        }
    }

    #[test]
    fn test_initial_selection_required_group_with_default() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "sauce",
                "Sauce",
                true,
                vec![option("bbq", 0, false), option("garlic", 0, true)],
            )],
        );
        let session = ItemCustomization::new(&item);

        assert_eq!(
            session.selected_modifiers().get("sauce"),
            Some(&ModifierSelection::Single("garlic".to_string()))
        );
    }

    #[test]
    fn test_initial_selection_required_group_without_default_is_sentinel() {
        let item = item_with_groups(
            "$10.00",
            vec![group("sauce", "Sauce", true, vec![option("bbq", 0, false)])],
        );
        let session = ItemCustomization::new(&item);

        assert_eq!(
            session.selected_modifiers().get("sauce"),
            Some(&ModifierSelection::Single(String::new()))
        );
    }

    #[test]
    fn test_initial_selection_optional_group() {
        let with_default = item_with_groups(
            "$10.00",
            vec![group(
                "extras",
                "Extras",
                false,
                vec![option("bacon", 250, true), option("egg", 150, false)],
            )],
        );
        let session = ItemCustomization::new(&with_default);
        assert_eq!(
            session.selected_modifiers().get("extras"),
            Some(&ModifierSelection::Multiple(vec!["bacon".to_string()]))
        );

        let without_default = item_with_groups(
            "$10.00",
            vec![group("extras", "Extras", false, vec![option("bacon", 250, false)])],
        );
        let session = ItemCustomization::new(&without_default);
        assert_eq!(
            session.selected_modifiers().get("extras"),
            Some(&ModifierSelection::Multiple(Vec::new()))
        );
    }

    #[test]
    fn test_duplicate_defaults_first_in_list_order_wins() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "sauce",
                "Sauce",
                true,
                vec![option("bbq", 0, true), option("garlic", 0, true)],
            )],
        );
        let session = ItemCustomization::new(&item);

        assert_eq!(
            session.selected_modifiers().get("sauce"),
            Some(&ModifierSelection::Single("bbq".to_string()))
        );
    }

    #[test]
    fn test_select_option_replaces_unconditionally() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "sauce",
                "Sauce",
                true,
                vec![option("bbq", 0, true), option("garlic", 0, false)],
            )],
        );
        let mut session = ItemCustomization::new(&item);

        session.select_option("sauce", "garlic");
        assert!(session.is_selected("sauce", "garlic"));
        assert!(!session.is_selected("sauce", "bbq"));
    }

    #[test]
    fn test_toggle_option_adds_then_removes() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "extras",
                "Extras",
                false,
                vec![option("bacon", 250, false), option("egg", 150, false)],
            )],
        );
        let mut session = ItemCustomization::new(&item);

        session.toggle_option("extras", "bacon");
        session.toggle_option("extras", "egg");
        assert!(session.is_selected("extras", "bacon"));
        assert!(session.is_selected("extras", "egg"));

        session.toggle_option("extras", "bacon");
        assert!(!session.is_selected("extras", "bacon"));
        assert!(session.is_selected("extras", "egg"));
    }

    #[test]
    fn test_quantity_floors_at_one() {
        let item = create_empty_item("plain");
        let mut session = ItemCustomization::new(&item);

        assert_eq!(session.quantity(), 1);
        session.decrement_quantity();
        assert_eq!(session.quantity(), 1);

        session.increment_quantity();
        assert_eq!(session.quantity(), 2);

        session.set_quantity(0);
        assert_eq!(session.quantity(), 1);
        session.set_quantity(-5);
        assert_eq!(session.quantity(), 1);
        session.set_quantity(4);
        assert_eq!(session.quantity(), 4);
    }

    #[test]
    fn test_validate_flags_unselected_required_group() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "size-group",
                "Choose Your Size",
                true,
                vec![option("small", 899, false)],
            )],
        );
        let mut session = ItemCustomization::new(&item);

        assert!(!session.validate());
        assert_eq!(session.errors().len(), 1);
        assert_eq!(
            session.errors().get("size-group").map(String::as_str),
            Some("Please select choose your size.")
        );
    }

    #[test]
    fn test_validate_passes_and_clears_stale_errors() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "size-group",
                "Size",
                true,
                vec![option("small", 899, false)],
            )],
        );
        let mut session = ItemCustomization::new(&item);

        assert!(!session.validate());
        session.select_option("size-group", "small");
        assert!(session.validate());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_validate_ignores_optional_groups() {
        let item = item_with_groups(
            "$10.00",
            vec![group("extras", "Extras", false, vec![option("bacon", 250, false)])],
        );
        let mut session = ItemCustomization::new(&item);

        assert!(session.validate());
    }

    #[test]
    fn test_reset_errors_single_and_all() {
        let item = item_with_groups(
            "$10.00",
            vec![
                group("a", "Sauce", true, vec![option("x", 0, false)]),
                group("b", "Side", true, vec![option("y", 0, false)]),
            ],
        );
        let mut session = ItemCustomization::new(&item);

        session.validate();
        assert_eq!(session.errors().len(), 2);

        session.reset_errors(Some("a"));
        assert_eq!(session.errors().len(), 1);
        assert!(session.errors().contains_key("b"));

        session.reset_errors(None);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_pricing_scenario_required_addon_times_quantity() {
        // Base $10.00, one required non-size group at $2.50, quantity 2
        // → (10.00 + 2.50) × 2 = $25.00
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "sauce",
                "Signature Sauce",
                true,
                vec![option("truffle", 250, true)],
            )],
        );
        let mut session = ItemCustomization::new(&item);
        session.set_quantity(2);

        let quote = session.price_quote();
        assert_eq!(quote.base, Money::from_cents(1000));
        assert_eq!(quote.modifier_total, Money::from_cents(250));
        assert_eq!(quote.total, Money::from_cents(2500));
    }

    #[test]
    fn test_pricing_scenario_size_replaces_base() {
        // Base $10.00 with a size group: the selection REPLACES the base,
        // so Large is $22.99, never $32.99
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "size",
                "Choose Your Size",
                true,
                vec![
                    option("small", 899, false),
                    option("regular", 1299, true),
                    option("large", 2299, false),
                ],
            )],
        );
        let mut session = ItemCustomization::new(&item);

        // Default preselects Regular
        assert_eq!(session.total_price(), Money::from_cents(1299));

        session.select_option("size", "large");
        let quote = session.price_quote();
        assert_eq!(quote.base, Money::from_cents(2299));
        assert_eq!(quote.modifier_total, Money::zero());
        assert_eq!(quote.total, Money::from_cents(2299));
    }

    #[test]
    fn test_pricing_size_plus_addons_plus_quantity() {
        let item = item_with_groups(
            "$24.00",
            vec![
                group(
                    "size",
                    "Choose Your Size",
                    true,
                    vec![option("single", 2400, true), option("double", 2900, false)],
                ),
                group(
                    "extras",
                    "Add-Ons",
                    false,
                    vec![option("bacon", 250, false), option("egg", 150, false)],
                ),
            ],
        );
        let mut session = ItemCustomization::new(&item);

        session.select_option("size", "double");
        session.toggle_option("extras", "bacon");
        session.toggle_option("extras", "egg");
        session.set_quantity(2);

        // (29.00 + 2.50 + 1.50) × 2 = $66.00
        assert_eq!(session.total_price(), Money::from_cents(6600));
    }

    #[test]
    fn test_pricing_last_size_group_wins() {
        let item = item_with_groups(
            "$10.00",
            vec![
                group(
                    "size-a",
                    "Size",
                    true,
                    vec![option("a", 1500, true)],
                ),
                group(
                    "size-b",
                    "Portion Size",
                    true,
                    vec![option("b", 1800, true)],
                ),
            ],
        );
        let session = ItemCustomization::new(&item);

        // Both groups replace the base; the later one in order wins
        assert_eq!(session.total_price(), Money::from_cents(1800));
    }

    #[test]
    fn test_pricing_unset_sentinel_contributes_nothing() {
        let item = item_with_groups(
            "$10.00",
            vec![group(
                "size",
                "Choose Your Size",
                true,
                vec![option("large", 2299, false)],
            )],
        );
        let session = ItemCustomization::new(&item);

        // No default, nothing selected: base price stands
        assert_eq!(session.total_price(), Money::from_cents(1000));
    }

    #[test]
    fn test_pricing_unknown_option_id_contributes_zero() {
        let item = item_with_groups(
            "$10.00",
            vec![group("extras", "Extras", false, vec![option("bacon", 250, false)])],
        );
        let mut session = ItemCustomization::new(&item);

        session.toggle_option("extras", "ghost-option");
        assert_eq!(session.total_price(), Money::from_cents(1000));
    }

    #[test]
    fn test_pricing_unparseable_base_degrades_to_zero() {
        let item = item_with_groups(
            "market price",
            vec![group("extras", "Extras", false, vec![option("bacon", 250, false)])],
        );
        let mut session = ItemCustomization::new(&item);
        session.toggle_option("extras", "bacon");

        assert_eq!(session.total_price(), Money::from_cents(250));
    }
}
