//! # Menu Configuration Model
//!
//! Entity definitions for the menu configuration tree, the factories that
//! create blank entities, and the two override-fallback derivation functions.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MenuConfig (root)                               │
//! │                                                                         │
//! │  navigation_layout / navigation_style       legacy presentation        │
//! │  card_style_default / columns_default       global fallbacks           │
//! │  shadow / colors                            legacy theme               │
//! │  menu_display / navigation_settings / theme extended settings          │
//! │  restaurant_info / chef_specials            storefront content         │
//! │        │                                                                │
//! │        └── categories: Vec<CategoryConfig>                              │
//! │                 │   (optional card-style / columns overrides)           │
//! │                 └── items: Vec<MenuItem>                                │
//! │                          └── modifier_groups: Vec<ModifierGroup>        │
//! │                                   └── options: Vec<ModifierOption>      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Exactly one `MenuConfig` exists per session and it is the sole root of
//! ownership: every category and item is reachable only through it. Entities
//! carry string ids (UUID v4) that are unique across the whole tree and
//! immutable after creation.
//!
//! ## Fallback Invariant
//! A category's `card_style_override` / `columns_override`, when absent,
//! resolve to the config-wide defaults. That resolution lives ONLY in
//! [`effective_card_style`] and [`effective_columns`]; call sites must not
//! inline the fallback, so the invariant stays enforceable in one place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::price::Money;

// =============================================================================
// Presentation Enums (legacy top-level fields)
// =============================================================================

/// Where category navigation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavigationLayout {
    /// Category buttons in a bar above the menu.
    #[default]
    Horizontal,
    /// Category list docked to the side.
    Sidebar,
}

/// How category navigation buttons are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    #[default]
    Filled,
    Outlined,
    Ghost,
}

/// Card layout used when rendering a category's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Compact,
    Feature,
    List,
    Hero,
    Square,
    Rectangle,
}

/// Drop-shadow intensity applied to every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    Off,
    #[default]
    Subtle,
    Medium,
    Strong,
}

// =============================================================================
// Extended Display Settings
// =============================================================================

/// Grid column count for the consumer-facing menu grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GridColumns {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    /// Let the renderer pick based on viewport width.
    #[default]
    Auto,
}

/// Three-step density scale shared by grid gap, content density, and
/// navigation spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

/// Visual treatment of the card surface in the extended display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Elevated,
    Flat,
    Outlined,
    Minimal,
}

/// Where the item image sits within a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Top,
    Left,
    Right,
    Background,
}

/// Aspect ratio the card crops item images to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ImageAspectRatio {
    Square,
    #[default]
    Landscape,
    Portrait,
    /// Hide images entirely.
    None,
}

/// How much of an item description the card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionDisplay {
    #[default]
    Full,
    Truncated,
    Hidden,
}

/// Extended display settings for the consumer-facing menu grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuDisplaySettings {
    pub columns: GridColumns,
    pub gap: Spacing,
    pub card_style: CardVariant,
    pub image_position: ImagePosition,
    pub image_aspect_ratio: ImageAspectRatio,
    pub density: Spacing,
    pub description_display: DescriptionDisplay,
    pub show_prep_time: bool,
    pub show_dietary_icons: bool,
    pub show_calories: bool,
    pub show_badges: bool,
}

impl Default for MenuDisplaySettings {
    fn default() -> Self {
        MenuDisplaySettings {
            columns: GridColumns::Auto,
            gap: Spacing::Comfortable,
            card_style: CardVariant::Elevated,
            image_position: ImagePosition::Top,
            image_aspect_ratio: ImageAspectRatio::Landscape,
            density: Spacing::Comfortable,
            description_display: DescriptionDisplay::Full,
            show_prep_time: true,
            show_dietary_icons: true,
            show_calories: false,
            show_badges: true,
        }
    }
}

// =============================================================================
// Extended Navigation Settings
// =============================================================================

/// Navigation placement in the extended settings.
///
/// `Auto` defers to the legacy [`NavigationLayout`] field, so the preview
/// keeps working for configurations that never touched the extended block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavPlacement {
    Top,
    Sidebar,
    #[default]
    Auto,
}

/// Font size step for navigation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavFontSize {
    Sm,
    #[default]
    Base,
    Lg,
}

/// Font weight for navigation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavFontWeight {
    Medium,
    #[default]
    Semibold,
    Bold,
}

/// Text transform for navigation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NavTextTransform {
    #[default]
    None,
    Uppercase,
}

/// Typography block for category navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavTypography {
    pub size: NavFontSize,
    pub weight: NavFontWeight,
    pub transform: NavTextTransform,
}

/// Extended navigation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSettings {
    pub layout: NavPlacement,
    pub style: NavigationStyle,
    pub sticky: bool,
    pub show_icons: bool,
    pub show_counts: bool,
    pub spacing: Spacing,
    pub typography: NavTypography,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        NavigationSettings {
            layout: NavPlacement::Auto,
            style: NavigationStyle::Filled,
            sticky: true,
            show_icons: true,
            show_counts: false,
            spacing: Spacing::Comfortable,
            typography: NavTypography::default(),
        }
    }
}

// =============================================================================
// Theme Settings
// =============================================================================

/// Legacy theme block: the four colors the first-generation style editor
/// exposes. Values are CSS hex strings straight from a color input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub preview_background: String,
    pub card_background: String,
    pub text: String,
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            preview_background: "#f3f4f6".to_string(),
            card_background: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
            accent: "#f97316".to_string(),
        }
    }
}

/// Two-stop gradient used for hero and accent surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

/// Extended theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub primary_gradient: Gradient,
    pub background: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub card_background: String,
    pub card_border: String,
    /// Corner radius in pixels (0-24 in the editor slider).
    pub border_radius: u8,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        ThemeSettings {
            primary_gradient: Gradient {
                start: "#f97316".to_string(),
                end: "#ea580c".to_string(),
            },
            background: "#f8fafc".to_string(),
            text_primary: "#0f172a".to_string(),
            text_secondary: "#475569".to_string(),
            card_background: "#ffffff".to_string(),
            card_border: "#e2e8f0".to_string(),
            border_radius: 12,
        }
    }
}

// =============================================================================
// Modifier Groups
// =============================================================================

/// One purchasable choice within a modifier group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModifierOption {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Surcharge in cents. For size-style groups this is the full price the
    /// selection replaces the base price with, not a surcharge.
    pub price_cents: i64,
    /// Preselected when the customization sheet opens. At most one option
    /// per group should carry this; when several do, the first in list
    /// order wins.
    #[serde(default)]
    pub is_default: bool,
}

impl ModifierOption {
    /// Returns the option price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A named cluster of choices attached to an item.
///
/// `required` groups demand exactly one selection at add-to-cart time;
/// optional groups allow zero or more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModifierGroup {
    pub id: String,
    pub name: String,
    pub required: bool,
    /// Present on the model for forward compatibility with stricter
    /// selection rules; not enforced by validation today.
    pub min_select: Option<u32>,
    pub max_select: Option<u32>,
    pub options: Vec<ModifierOption>,
}

impl ModifierGroup {
    /// The default-flagged option, first in list order winning ties.
    pub fn default_option(&self) -> Option<&ModifierOption> {
        self.options.iter().find(|option| option.is_default)
    }

    /// Looks up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&ModifierOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Whether this group's selection replaces the item's base price
    /// instead of adding to it.
    ///
    /// Inferred from metadata: a required group whose name contains "size"
    /// (case-insensitive). There is no explicit role flag on the model, so
    /// renaming a group can change its pricing behavior.
    pub fn replaces_base_price(&self) -> bool {
        self.required && self.name.to_lowercase().contains("size")
    }
}

// =============================================================================
// Menu Items
// =============================================================================

/// A suggested drink or side pairing shown on the item detail sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FoodPairing {
    pub name: String,
    pub description: String,
}

/// A sellable menu entry.
///
/// The `price` field is the display string exactly as the operator typed it
/// (`"$12.00"`); [`crate::price::parse_price`] converts it at computation
/// time. Everything after `modifier_groups` is presentation-only content the
/// cards and the detail sheet render verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier, immutable after creation.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display price as entered, e.g. `"$12.00"`.
    pub price: String,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    /// Free-text badge labels ("Spicy", "Vegan", ...).
    pub tags: Vec<String>,
    /// Free-text allergen labels ("Gluten", "Nuts", ...).
    pub allergens: Vec<String>,
    /// Ordered customization groups; `None` means the item is added to the
    /// cart as-is.
    pub modifier_groups: Option<Vec<ModifierGroup>>,
    pub badges: Option<Vec<String>>,
    pub dietary_tags: Option<Vec<String>>,
    /// Preparation time in minutes.
    pub prep_time: Option<u32>,
    pub calories: Option<u32>,
    /// Other items offered as one-tap add-ons from the detail sheet.
    pub pairings: Option<Vec<MenuItem>>,
    pub ingredients: Option<Vec<String>>,
    pub chef_notes: Option<String>,
    pub food_pairings: Option<Vec<FoodPairing>>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    #[serde(default)]
    pub is_sample: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_chef_favorite: bool,
    #[serde(default)]
    pub is_top_reviewed: bool,
    #[serde(default)]
    pub is_most_popular: bool,
}

impl MenuItem {
    /// The item's modifier groups, empty slice when it has none.
    pub fn modifiers(&self) -> &[ModifierGroup] {
        self.modifier_groups.as_deref().unwrap_or_default()
    }
}

/// A curated multi-course special promoted above the regular categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChefSpecial {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub courses: Vec<MenuItem>,
    pub price: String,
    pub image: String,
    pub available_until: Option<String>,
}

// =============================================================================
// Restaurant Info
// =============================================================================

/// One row of the opening-hours table. Kept as an ordered list so the hero
/// section renders days in the order the operator entered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

/// Storefront details rendered in the hero and footer sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub cuisine_types: Vec<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<OpeningHours>,
    pub hero_image: String,
    pub story: Option<String>,
}

// =============================================================================
// Categories & Root Aggregate
// =============================================================================

/// A named grouping of menu items with optional presentation overrides.
///
/// The overrides are the only per-category presentation state; when absent
/// they fall back to the config-wide defaults via [`effective_card_style`]
/// and [`effective_columns`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub card_style_override: Option<CardStyle>,
    pub columns_override: Option<u8>,
    pub items: Vec<MenuItem>,
}

/// The root configuration aggregate. Exactly one exists per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    pub navigation_layout: NavigationLayout,
    pub navigation_style: NavigationStyle,
    /// Fallback card style for categories without an override.
    pub card_style_default: CardStyle,
    /// Fallback column count for categories without an override.
    pub columns_default: u8,
    pub shadow: ShadowLevel,
    pub colors: ThemeConfig,
    pub menu_display: MenuDisplaySettings,
    pub navigation_settings: NavigationSettings,
    pub theme: ThemeSettings,
    pub categories: Vec<CategoryConfig>,
    pub restaurant_info: RestaurantInfo,
    pub chef_specials: Option<Vec<ChefSpecial>>,
}

impl MenuConfig {
    /// Looks up a category by id.
    pub fn category(&self, category_id: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|cat| cat.id == category_id)
    }
}

// =============================================================================
// Factories
// =============================================================================

/// Generates a fresh entity id.
///
/// UUID v4: collision-free without any coordinating backend, which is all a
/// purely in-memory session needs.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Creates a blank category: empty item list, no presentation overrides.
///
/// Never mutates shared state; every call returns a fresh, independently
/// owned value. The caller supplies the id so the store controls uniqueness.
pub fn create_empty_category(name: impl Into<String>, id: impl Into<String>) -> CategoryConfig {
    CategoryConfig {
        id: id.into(),
        name: name.into(),
        icon: None,
        card_style_override: None,
        columns_override: None,
        items: Vec::new(),
    }
}

/// Creates a blank item with the placeholder name and a zero price, ready
/// for the operator to fill in.
pub fn create_empty_item(id: impl Into<String>) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: "New Item".to_string(),
        description: String::new(),
        price: "$0.00".to_string(),
        image: None,
        gallery: None,
        tags: Vec::new(),
        allergens: Vec::new(),
        modifier_groups: None,
        badges: None,
        dietary_tags: None,
        prep_time: None,
        calories: None,
        pairings: None,
        ingredients: None,
        chef_notes: None,
        food_pairings: None,
        rating: None,
        review_count: None,
        is_sample: false,
        is_featured: false,
        is_chef_favorite: false,
        is_top_reviewed: false,
        is_most_popular: false,
    }
}

// =============================================================================
// Derivation Functions
// =============================================================================

/// Resolves the card style a category renders with: its override when set,
/// the config-wide default otherwise.
#[inline]
pub fn effective_card_style(category: &CategoryConfig, config: &MenuConfig) -> CardStyle {
    category.card_style_override.unwrap_or(config.card_style_default)
}

/// Resolves the column count a category renders with: its override when
/// set, the config-wide default otherwise.
#[inline]
pub fn effective_columns(category: &CategoryConfig, config: &MenuConfig) -> u8 {
    category.columns_override.unwrap_or(config.columns_default)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_card_style_falls_back_to_default() {
        let config = MenuConfig::default();
        let category = create_empty_category("Mains", "cat-1");

        assert_eq!(effective_card_style(&category, &config), config.card_style_default);
    }

    #[test]
    fn test_effective_card_style_override_wins() {
        let mut config = MenuConfig::default();
        config.card_style_default = CardStyle::Compact;

        let mut category = create_empty_category("Mains", "cat-1");
        category.card_style_override = Some(CardStyle::Hero);

        assert_eq!(effective_card_style(&category, &config), CardStyle::Hero);

        // Changing the default must not leak through an explicit override
        config.card_style_default = CardStyle::List;
        assert_eq!(effective_card_style(&category, &config), CardStyle::Hero);
    }

    #[test]
    fn test_effective_columns_fallback_and_override() {
        let mut config = MenuConfig::default();
        config.columns_default = 2;

        let mut category = create_empty_category("Salads", "cat-2");
        assert_eq!(effective_columns(&category, &config), 2);

        category.columns_override = Some(3);
        assert_eq!(effective_columns(&category, &config), 3);
    }

    #[test]
    fn test_create_empty_item_factory_defaults() {
        let item = create_empty_item("item-1");

        assert_eq!(item.id, "item-1");
        assert_eq!(item.name, "New Item");
        assert_eq!(item.price, "$0.00");
        assert!(item.tags.is_empty());
        assert!(item.allergens.is_empty());
        assert!(item.modifier_groups.is_none());
        assert!(item.modifiers().is_empty());
    }

    #[test]
    fn test_create_empty_category_has_no_overrides() {
        let category = create_empty_category("Starters", "cat-3");

        assert_eq!(category.name, "Starters");
        assert!(category.items.is_empty());
        assert!(category.card_style_override.is_none());
        assert!(category.columns_override.is_none());
    }

    #[test]
    fn test_factories_return_independent_values() {
        let a = create_empty_item("a");
        let mut b = create_empty_item("b");
        b.name = "Edited".to_string();

        assert_eq!(a.name, "New Item");
    }

    #[test]
    fn test_new_entity_ids_are_unique() {
        let ids: Vec<String> = (0..64).map(|_| new_entity_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
        }
    }

    #[test]
    fn test_default_option_first_wins() {
        let group = ModifierGroup {
            id: "g".to_string(),
            name: "Toppings".to_string(),
            required: false,
            min_select: None,
            max_select: None,
            options: vec![
                ModifierOption {
                    id: "a".to_string(),
                    name: "Bacon".to_string(),
                    description: None,
                    price_cents: 200,
                    is_default: true,
                },
                ModifierOption {
                    id: "b".to_string(),
                    name: "Egg".to_string(),
                    description: None,
                    price_cents: 150,
                    is_default: true,
                },
            ],
        };

        assert_eq!(group.default_option().map(|o| o.id.as_str()), Some("a"));
    }

    #[test]
    fn test_replaces_base_price_heuristic() {
        let mut group = ModifierGroup {
            id: "g".to_string(),
            name: "Choose Your Size".to_string(),
            required: true,
            min_select: None,
            max_select: None,
            options: Vec::new(),
        };
        assert!(group.replaces_base_price());

        // Optional size-named groups stay additive
        group.required = false;
        assert!(!group.replaces_base_price());

        group.required = true;
        group.name = "Extras".to_string();
        assert!(!group.replaces_base_price());
    }
}
