//! # Configuration Store
//!
//! Owns the single root `MenuConfig` for a session and exposes the
//! enumerated mutation operations the editor dispatches.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Copy-on-Write Mutations                              │
//! │                                                                         │
//! │  Editor Action            Store Operation          Effect               │
//! │  ─────────────            ───────────────          ──────               │
//! │  "Add category"  ───────► add_category(name) ────► next tree swapped   │
//! │  "Toggle Spicy"  ───────► toggle_badge(...)  ────► next tree swapped   │
//! │  bad id          ───────► any targeted op    ────► Err, tree untouched │
//! │                                                                         │
//! │  Every operation builds a COMPLETE replacement tree and swaps it in    │
//! │  only once the mutation fully succeeded. Failed operations leave the   │
//! │  previous tree bit-for-bit intact; snapshots handed out earlier are    │
//! │  independent clones and never observe a partial write.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations addressed to ids that no longer exist report a typed
//! [`CoreError`] instead of failing silently; `remove_category` alone stays
//! an idempotent no-op, because removing something already gone is exactly
//! what the caller wanted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{
    create_empty_category, create_empty_item, effective_card_style, effective_columns,
    new_entity_id, CardStyle, CardVariant, CategoryConfig, DescriptionDisplay, Gradient,
    GridColumns, ImageAspectRatio, ImagePosition, MenuConfig, MenuItem, NavFontSize,
    NavFontWeight, NavPlacement, NavTextTransform, NavigationLayout, NavigationStyle,
    ShadowLevel, Spacing,
};

// =============================================================================
// Operation Argument Types
// =============================================================================

/// Which badge-like label set on an item a toggle addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BadgeField {
    Tags,
    Allergens,
}

/// One field of the legacy theme color block, addressed by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ThemeColor {
    PreviewBackground,
    CardBackground,
    Text,
    Accent,
}

/// A keyed update to the extended display-settings block.
///
/// The frontend dispatches `(key, value)` pairs; modeling them as a tagged
/// enum keeps every key/value combination well-typed on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum DisplaySetting {
    Columns(GridColumns),
    Gap(Spacing),
    CardStyle(CardVariant),
    ImagePosition(ImagePosition),
    ImageAspectRatio(ImageAspectRatio),
    Density(Spacing),
    DescriptionDisplay(DescriptionDisplay),
    ShowPrepTime(bool),
    ShowDietaryIcons(bool),
    ShowCalories(bool),
    ShowBadges(bool),
}

/// A keyed update to the extended navigation-settings block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum NavigationSetting {
    Layout(NavPlacement),
    Style(NavigationStyle),
    Sticky(bool),
    ShowIcons(bool),
    ShowCounts(bool),
    Spacing(Spacing),
    TypographySize(NavFontSize),
    TypographyWeight(NavFontWeight),
    TypographyTransform(NavTextTransform),
}

/// A keyed update to the extended theme block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum ThemeSetting {
    PrimaryGradient(Gradient),
    Background(String),
    TextPrimary(String),
    TextSecondary(String),
    CardBackground(String),
    CardBorder(String),
    BorderRadius(u8),
}

// =============================================================================
// Menu Store
// =============================================================================

/// The session's configuration store.
///
/// An explicit, injectable container: construct one per session (or per
/// test) instead of reaching for ambient global state. Created from the
/// hard-coded seed by default; torn down with the session, nothing
/// persists.
#[derive(Debug, Clone)]
pub struct MenuStore {
    config: MenuConfig,
}

impl MenuStore {
    /// Creates a store seeded with the default configuration.
    pub fn new() -> Self {
        MenuStore {
            config: MenuConfig::default(),
        }
    }

    /// Creates a store around an explicit configuration (tests, future
    /// fetched-data integration).
    pub fn with_config(config: MenuConfig) -> Self {
        MenuStore { config }
    }

    /// Borrows the current configuration for cheap in-process reads.
    #[inline]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Returns an independent snapshot of the current configuration.
    ///
    /// This is the read interface collaborators get: a clone they can hold
    /// across mutations, safe to read freely, re-fetched (not diffed in
    /// place) after any write.
    pub fn snapshot(&self) -> MenuConfig {
        self.config.clone()
    }

    /// Resolved card style for a category in the current configuration.
    pub fn card_style_for(&self, category: &CategoryConfig) -> CardStyle {
        effective_card_style(category, &self.config)
    }

    /// Resolved column count for a category in the current configuration.
    pub fn columns_for(&self, category: &CategoryConfig) -> u8 {
        effective_columns(category, &self.config)
    }

    // -------------------------------------------------------------------------
    // Category & item operations
    // -------------------------------------------------------------------------

    /// Appends a new empty category and returns its generated id.
    ///
    /// Blank-name guarding is the command layer's job (the editor trims
    /// and drops blank input before dispatching); the store appends
    /// whatever well-formed name it is handed.
    pub fn add_category(&mut self, name: impl Into<String>) -> String {
        let id = new_entity_id();
        let mut next = self.config.clone();
        next.categories.push(create_empty_category(name, id.clone()));
        self.config = next;
        id
    }

    /// Removes a category and every item it owns.
    ///
    /// Idempotent: removing an id that is already gone is an Ok no-op.
    pub fn remove_category(&mut self, category_id: &str) {
        let mut next = self.config.clone();
        next.categories.retain(|cat| cat.id != category_id);
        self.config = next;
    }

    /// Appends a blank factory item to a category and returns the new
    /// item's id.
    pub fn add_item(&mut self, category_id: &str) -> CoreResult<String> {
        let id = new_entity_id();
        let mut next = self.config.clone();
        let category = category_mut(&mut next, category_id)?;
        category.items.push(create_empty_item(id.clone()));
        self.config = next;
        Ok(id)
    }

    /// Replaces the item with a matching id inside the named category.
    ///
    /// The whole item value is swapped: the editor edits a draft copy and
    /// commits it here.
    pub fn update_item(&mut self, category_id: &str, item: MenuItem) -> CoreResult<()> {
        let mut next = self.config.clone();
        let category = category_mut(&mut next, category_id)?;
        let slot = item_mut(category, &item.id, category_id)?;
        *slot = item;
        self.config = next;
        Ok(())
    }

    /// Adds the label to the item's tag/allergen set if absent, removes it
    /// if present. Toggling twice restores the original set.
    pub fn toggle_badge(
        &mut self,
        category_id: &str,
        item_id: &str,
        field: BadgeField,
        label: &str,
    ) -> CoreResult<()> {
        let mut next = self.config.clone();
        let category = category_mut(&mut next, category_id)?;
        let item = item_mut(category, item_id, category_id)?;

        let labels = match field {
            BadgeField::Tags => &mut item.tags,
            BadgeField::Allergens => &mut item.allergens,
        };

        if let Some(position) = labels.iter().position(|l| l == label) {
            labels.remove(position);
        } else {
            labels.push(label.to_string());
        }

        self.config = next;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Per-category presentation overrides
    // -------------------------------------------------------------------------

    /// Sets or replaces a category's card-style override. The global
    /// default is unaffected.
    pub fn set_category_card_style(
        &mut self,
        category_id: &str,
        style: CardStyle,
    ) -> CoreResult<()> {
        let mut next = self.config.clone();
        category_mut(&mut next, category_id)?.card_style_override = Some(style);
        self.config = next;
        Ok(())
    }

    /// Sets or replaces a category's column-count override.
    pub fn set_category_columns(&mut self, category_id: &str, columns: u8) -> CoreResult<()> {
        let mut next = self.config.clone();
        category_mut(&mut next, category_id)?.columns_override = Some(columns);
        self.config = next;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Global presentation defaults
    // -------------------------------------------------------------------------

    /// Changes the fallback card style. Categories with an explicit
    /// override are unaffected.
    pub fn set_default_card_style(&mut self, style: CardStyle) {
        let mut next = self.config.clone();
        next.card_style_default = style;
        self.config = next;
    }

    /// Changes the fallback column count.
    pub fn set_default_columns(&mut self, columns: u8) {
        let mut next = self.config.clone();
        next.columns_default = columns;
        self.config = next;
    }

    /// Sets the global card shadow level.
    pub fn set_shadow(&mut self, shadow: ShadowLevel) {
        let mut next = self.config.clone();
        next.shadow = shadow;
        self.config = next;
    }

    // -------------------------------------------------------------------------
    // Navigation (legacy fields mirrored into the extended block)
    // -------------------------------------------------------------------------

    /// Sets the navigation layout, keeping the legacy field and the
    /// extended `navigation_settings.layout` consistent.
    pub fn set_navigation_layout(&mut self, layout: NavigationLayout) {
        let mut next = self.config.clone();
        next.navigation_layout = layout;
        next.navigation_settings.layout = match layout {
            NavigationLayout::Sidebar => NavPlacement::Sidebar,
            NavigationLayout::Horizontal => NavPlacement::Top,
        };
        self.config = next;
    }

    /// Sets the navigation style on both the legacy field and the extended
    /// block.
    pub fn set_navigation_style(&mut self, style: NavigationStyle) {
        let mut next = self.config.clone();
        next.navigation_style = style;
        next.navigation_settings.style = style;
        self.config = next;
    }

    // -------------------------------------------------------------------------
    // Theme & settings blocks
    // -------------------------------------------------------------------------

    /// Updates one field of the legacy color block by key.
    pub fn set_theme_color(&mut self, color: ThemeColor, value: impl Into<String>) {
        let value = value.into();
        let mut next = self.config.clone();
        match color {
            ThemeColor::PreviewBackground => next.colors.preview_background = value,
            ThemeColor::CardBackground => next.colors.card_background = value,
            ThemeColor::Text => next.colors.text = value,
            ThemeColor::Accent => next.colors.accent = value,
        }
        self.config = next;
    }

    /// Updates one field of the extended display-settings block.
    pub fn set_display_setting(&mut self, setting: DisplaySetting) {
        let mut next = self.config.clone();
        {
            let display = &mut next.menu_display;
            match setting {
                DisplaySetting::Columns(v) => display.columns = v,
                DisplaySetting::Gap(v) => display.gap = v,
                DisplaySetting::CardStyle(v) => display.card_style = v,
                DisplaySetting::ImagePosition(v) => display.image_position = v,
                DisplaySetting::ImageAspectRatio(v) => display.image_aspect_ratio = v,
                DisplaySetting::Density(v) => display.density = v,
                DisplaySetting::DescriptionDisplay(v) => display.description_display = v,
                DisplaySetting::ShowPrepTime(v) => display.show_prep_time = v,
                DisplaySetting::ShowDietaryIcons(v) => display.show_dietary_icons = v,
                DisplaySetting::ShowCalories(v) => display.show_calories = v,
                DisplaySetting::ShowBadges(v) => display.show_badges = v,
            }
        }
        self.config = next;
    }

    /// Updates one field of the extended navigation-settings block.
    pub fn set_navigation_setting(&mut self, setting: NavigationSetting) {
        let mut next = self.config.clone();
        {
            let nav = &mut next.navigation_settings;
            match setting {
                NavigationSetting::Layout(v) => nav.layout = v,
                NavigationSetting::Style(v) => nav.style = v,
                NavigationSetting::Sticky(v) => nav.sticky = v,
                NavigationSetting::ShowIcons(v) => nav.show_icons = v,
                NavigationSetting::ShowCounts(v) => nav.show_counts = v,
                NavigationSetting::Spacing(v) => nav.spacing = v,
                NavigationSetting::TypographySize(v) => nav.typography.size = v,
                NavigationSetting::TypographyWeight(v) => nav.typography.weight = v,
                NavigationSetting::TypographyTransform(v) => nav.typography.transform = v,
            }
        }
        self.config = next;
    }

    /// Updates one field of the extended theme block.
    pub fn set_theme_setting(&mut self, setting: ThemeSetting) {
        let mut next = self.config.clone();
        {
            let theme = &mut next.theme;
            match setting {
                ThemeSetting::PrimaryGradient(v) => theme.primary_gradient = v,
                ThemeSetting::Background(v) => theme.background = v,
                ThemeSetting::TextPrimary(v) => theme.text_primary = v,
                ThemeSetting::TextSecondary(v) => theme.text_secondary = v,
                ThemeSetting::CardBackground(v) => theme.card_background = v,
                ThemeSetting::CardBorder(v) => theme.card_border = v,
                ThemeSetting::BorderRadius(v) => theme.border_radius = v,
            }
        }
        self.config = next;
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tree Lookup Helpers
// =============================================================================

fn category_mut<'a>(
    config: &'a mut MenuConfig,
    category_id: &str,
) -> CoreResult<&'a mut CategoryConfig> {
    config
        .categories
        .iter_mut()
        .find(|cat| cat.id == category_id)
        .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))
}

fn item_mut<'a>(
    category: &'a mut CategoryConfig,
    item_id: &str,
    category_id: &str,
) -> CoreResult<&'a mut MenuItem> {
    category
        .items
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| CoreError::ItemNotFound {
            category_id: category_id.to_string(),
            item_id: item_id.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
