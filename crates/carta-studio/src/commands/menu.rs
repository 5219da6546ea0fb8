//! # Menu Commands
//!
//! The mutation surface the editor dispatches against the configuration.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Editor Control ──► command fn ──► validation ──► MenuStore op          │
//! │                                                                         │
//! │  Effect is visible only through the next get_menu() snapshot; the      │
//! │  frontend re-fetches after every mutation instead of diffing in place. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command logs its dispatch at `debug!` and translates core errors
//! into the serializable [`ApiError`].

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use carta_core::seed::{ALLERGEN_PALETTE, TAG_PALETTE};
use carta_core::store::{BadgeField, DisplaySetting, NavigationSetting, ThemeColor, ThemeSetting};
use carta_core::types::{CardStyle, MenuConfig, MenuItem, NavigationLayout, NavigationStyle, ShadowLevel};
use carta_core::validation;

use crate::error::ApiError;
use crate::state::MenuState;

/// The quick-toggle labels the item editor offers for tags and allergens.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BadgePalette {
    pub tags: Vec<String>,
    pub allergens: Vec<String>,
}

/// Returns an independent snapshot of the current configuration.
pub fn get_menu(menu: &MenuState) -> MenuConfig {
    debug!("get_menu command");
    menu.snapshot()
}

/// Returns the fixed badge palette the item editor renders as chip rows.
pub fn get_badge_palette() -> BadgePalette {
    BadgePalette {
        tags: TAG_PALETTE.iter().map(|label| label.to_string()).collect(),
        allergens: ALLERGEN_PALETTE.iter().map(|label| label.to_string()).collect(),
    }
}

/// Appends a new empty category and returns its id.
///
/// Trims the name and rejects blank input so the store itself never sees
/// a blank category.
pub fn add_category(menu: &MenuState, name: &str) -> Result<String, ApiError> {
    let name = validation::validate_category_name(name)?;
    debug!(%name, "add_category command");
    Ok(menu.with_menu_mut(|store| store.add_category(name)))
}

/// Removes a category and everything it owns. Idempotent.
pub fn remove_category(menu: &MenuState, category_id: &str) {
    debug!(%category_id, "remove_category command");
    menu.with_menu_mut(|store| store.remove_category(category_id));
}

/// Appends a blank item to a category and returns the new item's id.
pub fn add_item(menu: &MenuState, category_id: &str) -> Result<String, ApiError> {
    debug!(%category_id, "add_item command");
    menu.with_menu_mut(|store| store.add_item(category_id))
        .map_err(ApiError::from)
}

/// Commits an edited item draft back into its category.
pub fn update_item(menu: &MenuState, category_id: &str, item: MenuItem) -> Result<(), ApiError> {
    debug!(%category_id, item_id = %item.id, "update_item command");
    menu.with_menu_mut(|store| store.update_item(category_id, item))
        .map_err(ApiError::from)
}

/// Toggles a tag or allergen label on an item.
pub fn toggle_badge(
    menu: &MenuState,
    category_id: &str,
    item_id: &str,
    field: BadgeField,
    label: &str,
) -> Result<(), ApiError> {
    debug!(%category_id, %item_id, ?field, %label, "toggle_badge command");
    menu.with_menu_mut(|store| store.toggle_badge(category_id, item_id, field, label))
        .map_err(ApiError::from)
}

/// Sets a category's card-style override.
pub fn set_category_card_style(
    menu: &MenuState,
    category_id: &str,
    style: CardStyle,
) -> Result<(), ApiError> {
    debug!(%category_id, ?style, "set_category_card_style command");
    menu.with_menu_mut(|store| store.set_category_card_style(category_id, style))
        .map_err(ApiError::from)
}

/// Sets a category's column-count override.
pub fn set_category_columns(
    menu: &MenuState,
    category_id: &str,
    columns: u8,
) -> Result<(), ApiError> {
    validation::validate_columns(columns)?;
    debug!(%category_id, columns, "set_category_columns command");
    menu.with_menu_mut(|store| store.set_category_columns(category_id, columns))
        .map_err(ApiError::from)
}

/// Changes the global fallback card style.
pub fn set_default_card_style(menu: &MenuState, style: CardStyle) {
    debug!(?style, "set_default_card_style command");
    menu.with_menu_mut(|store| store.set_default_card_style(style));
}

/// Changes the global fallback column count.
pub fn set_default_columns(menu: &MenuState, columns: u8) -> Result<(), ApiError> {
    validation::validate_columns(columns)?;
    debug!(columns, "set_default_columns command");
    menu.with_menu_mut(|store| store.set_default_columns(columns));
    Ok(())
}

/// Sets the global card shadow level.
pub fn set_shadow(menu: &MenuState, shadow: ShadowLevel) {
    debug!(?shadow, "set_shadow command");
    menu.with_menu_mut(|store| store.set_shadow(shadow));
}

/// Sets the navigation layout (legacy field + extended mirror).
pub fn set_navigation_layout(menu: &MenuState, layout: NavigationLayout) {
    debug!(?layout, "set_navigation_layout command");
    menu.with_menu_mut(|store| store.set_navigation_layout(layout));
}

/// Sets the navigation style (legacy field + extended mirror).
pub fn set_navigation_style(menu: &MenuState, style: NavigationStyle) {
    debug!(?style, "set_navigation_style command");
    menu.with_menu_mut(|store| store.set_navigation_style(style));
}

/// Updates one legacy theme color by key.
pub fn set_theme_color(menu: &MenuState, color: ThemeColor, value: &str) -> Result<(), ApiError> {
    validation::validate_hex_color(value)?;
    debug!(?color, %value, "set_theme_color command");
    menu.with_menu_mut(|store| store.set_theme_color(color, value));
    Ok(())
}

/// Updates one field of the extended display-settings block.
pub fn set_display_setting(menu: &MenuState, setting: DisplaySetting) {
    debug!(?setting, "set_display_setting command");
    menu.with_menu_mut(|store| store.set_display_setting(setting));
}

/// Updates one field of the extended navigation-settings block.
pub fn set_navigation_setting(menu: &MenuState, setting: NavigationSetting) {
    debug!(?setting, "set_navigation_setting command");
    menu.with_menu_mut(|store| store.set_navigation_setting(setting));
}

/// Updates one field of the extended theme block, validating color values.
pub fn set_theme_setting(menu: &MenuState, setting: ThemeSetting) -> Result<(), ApiError> {
    match &setting {
        ThemeSetting::PrimaryGradient(gradient) => {
            validation::validate_hex_color(&gradient.start)?;
            validation::validate_hex_color(&gradient.end)?;
        }
        ThemeSetting::Background(value)
        | ThemeSetting::TextPrimary(value)
        | ThemeSetting::TextSecondary(value)
        | ThemeSetting::CardBackground(value)
        | ThemeSetting::CardBorder(value) => validation::validate_hex_color(value)?,
        ThemeSetting::BorderRadius(_) => {}
    }

    debug!(?setting, "set_theme_setting command");
    menu.with_menu_mut(|store| store.set_theme_setting(setting));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use carta_core::types::Gradient;

    #[test]
    fn test_add_category_trims_and_rejects_blank() {
        let menu = MenuState::new();
        let before = menu.snapshot().categories.len();

        let id = add_category(&menu, "  Starters  ").unwrap();
        let config = menu.snapshot();
        assert_eq!(config.category(&id).unwrap().name, "Starters");

        let err = add_category(&menu, "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(menu.snapshot().categories.len(), before + 1);
    }

    #[test]
    fn test_add_item_to_missing_category_is_not_found() {
        let menu = MenuState::new();
        let err = add_item(&menu, "no-such-category").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_edit_flow_round_trip() {
        let menu = MenuState::new();
        let category_id = add_category(&menu, "Specials").unwrap();
        let item_id = add_item(&menu, &category_id).unwrap();

        let mut draft = menu
            .snapshot()
            .category(&category_id)
            .unwrap()
            .items[0]
            .clone();
        draft.name = "Squash Blossom Pizza".to_string();
        draft.price = "$21.00".to_string();
        update_item(&menu, &category_id, draft).unwrap();

        toggle_badge(&menu, &category_id, &item_id, BadgeField::Tags, "Vegetarian").unwrap();

        let config = get_menu(&menu);
        let item = &config.category(&category_id).unwrap().items[0];
        assert_eq!(item.name, "Squash Blossom Pizza");
        assert_eq!(item.tags, ["Vegetarian"]);
    }

    #[test]
    fn test_columns_out_of_range_is_rejected_before_the_store() {
        let menu = MenuState::new();
        let category_id = add_category(&menu, "Wide").unwrap();
        let retained = serde_json::to_value(menu.snapshot()).unwrap();

        assert!(set_default_columns(&menu, 0).is_err());
        assert!(set_category_columns(&menu, &category_id, 9).is_err());

        assert_eq!(serde_json::to_value(menu.snapshot()).unwrap(), retained);
    }

    #[test]
    fn test_theme_color_rejects_non_hex() {
        let menu = MenuState::new();

        assert!(set_theme_color(&menu, ThemeColor::Accent, "#2563eb").is_ok());
        assert!(set_theme_color(&menu, ThemeColor::Accent, "blue").is_err());

        assert_eq!(menu.snapshot().colors.accent, "#2563eb");
    }

    #[test]
    fn test_theme_setting_validates_gradient_stops() {
        let menu = MenuState::new();

        let err = set_theme_setting(
            &menu,
            ThemeSetting::PrimaryGradient(Gradient {
                start: "#22c55e".to_string(),
                end: "green".to_string(),
            }),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        set_theme_setting(&menu, ThemeSetting::BorderRadius(8)).unwrap();
        assert_eq!(menu.snapshot().theme.border_radius, 8);
    }

    #[test]
    fn test_badge_palette_matches_the_toggle_surface() {
        let palette = get_badge_palette();
        assert!(palette.tags.contains(&"Spicy".to_string()));
        assert!(palette.allergens.contains(&"Gluten".to_string()));

        // Every palette label is usable with toggle_badge as-is
        let menu = MenuState::new();
        let category_id = add_category(&menu, "Test").unwrap();
        let item_id = add_item(&menu, &category_id).unwrap();
        toggle_badge(&menu, &category_id, &item_id, BadgeField::Tags, &palette.tags[0]).unwrap();

        let config = menu.snapshot();
        assert_eq!(
            config.category(&category_id).unwrap().items[0].tags,
            [palette.tags[0].clone()]
        );
    }

    #[test]
    fn test_navigation_layout_mirrors_through_the_command() {
        let menu = MenuState::new();
        set_navigation_layout(&menu, NavigationLayout::Sidebar);

        let config = menu.snapshot();
        assert_eq!(config.navigation_layout, NavigationLayout::Sidebar);
        assert_eq!(
            config.navigation_settings.layout,
            carta_core::types::NavPlacement::Sidebar
        );
    }
}
