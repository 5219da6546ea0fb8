//! # Seed Configuration
//!
//! The hard-coded default `MenuConfig` every session starts from.
//!
//! There is no config file, environment variable, or remote fetch behind
//! this; the editor is a purely in-memory tool and the seed doubles as its
//! demo content. A future integration point would replace this with data
//! fetched for the signed-in restaurant.
//!
//! The content mirrors the "Bella Vista" demo menu: four categories, a
//! curated chef special, and one item (the Wagyu Burger) carrying modifier
//! groups so the customization flow is exercised out of the box.

use crate::types::{
    CategoryConfig, ChefSpecial, FoodPairing, MenuConfig, MenuDisplaySettings, MenuItem,
    ModifierGroup, ModifierOption, NavigationLayout, NavigationSettings, NavigationStyle,
    OpeningHours, RestaurantInfo, ShadowLevel, ThemeConfig, ThemeSettings,
    create_empty_item, CardStyle,
};

// =============================================================================
// Badge Palette
// =============================================================================

/// Quick-toggle tag labels offered by the item editor.
pub const TAG_PALETTE: &[&str] = &["Bestseller", "Spicy", "Vegan", "Vegetarian", "Gluten Free"];

/// Quick-toggle allergen labels offered by the item editor.
pub const ALLERGEN_PALETTE: &[&str] = &["Dairy", "Gluten", "Nuts", "Shellfish", "Seeds"];

// =============================================================================
// Seed Builder
// =============================================================================

/// Builds the default configuration a fresh session starts from.
pub fn default_menu_config() -> MenuConfig {
    MenuConfig {
        navigation_layout: NavigationLayout::Horizontal,
        navigation_style: NavigationStyle::Filled,
        card_style_default: CardStyle::Compact,
        columns_default: 2,
        shadow: ShadowLevel::Subtle,
        colors: ThemeConfig::default(),
        menu_display: MenuDisplaySettings::default(),
        navigation_settings: NavigationSettings::default(),
        theme: ThemeSettings::default(),
        categories: vec![
            CategoryConfig {
                id: "popular".to_string(),
                name: "Popular Items".to_string(),
                icon: Some("🔥".to_string()),
                card_style_override: None,
                columns_override: None,
                items: premium_items(),
            },
            CategoryConfig {
                id: "mains".to_string(),
                name: "Main Courses".to_string(),
                icon: Some("🍖".to_string()),
                card_style_override: None,
                columns_override: None,
                items: main_course_items(),
            },
            CategoryConfig {
                id: "salads".to_string(),
                name: "Salads".to_string(),
                icon: Some("🥗".to_string()),
                card_style_override: None,
                columns_override: None,
                items: salad_items(),
            },
            CategoryConfig {
                id: "desserts".to_string(),
                name: "Desserts".to_string(),
                icon: Some("🍰".to_string()),
                card_style_override: None,
                columns_override: None,
                items: dessert_items(),
            },
        ],
        restaurant_info: restaurant_info(),
        chef_specials: Some(chef_specials()),
    }
}

/// `MenuConfig::default()` is the session seed.
impl Default for MenuConfig {
    fn default() -> Self {
        default_menu_config()
    }
}

// -----------------------------------------------------------------------------
// Category content
// -----------------------------------------------------------------------------

fn premium_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Truffle Mushroom Flatbread".to_string(),
            description:
                "House-made dough, black truffle oil, wild mushrooms, mozzarella, thyme."
                    .to_string(),
            price: "$18.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1565299624946-b28f40a0ae38".to_string()),
            gallery: Some(vec![
                "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38".to_string(),
                "https://images.unsplash.com/photo-1571997478779-2adcbbe9ab2f".to_string(),
            ]),
            tags: vec!["Vegetarian".to_string(), "Chef's Favorite".to_string()],
            allergens: vec!["Gluten".to_string(), "Dairy".to_string()],
            ingredients: Some(vec![
                "Pizza dough".to_string(),
                "Black truffle oil".to_string(),
                "Shiitake mushrooms".to_string(),
                "Mozzarella".to_string(),
                "Fresh thyme".to_string(),
            ]),
            food_pairings: Some(vec![
                FoodPairing {
                    name: "Pinot Noir".to_string(),
                    description: "Earthy notes complement the truffle".to_string(),
                },
                FoodPairing {
                    name: "Belgian Ale".to_string(),
                    description: "Rich maltiness balances mushroom umami".to_string(),
                },
            ]),
            chef_notes: Some(
                "We source our truffles from Piedmont, Italy. The mushrooms are locally foraged daily."
                    .to_string(),
            ),
            prep_time: Some(15),
            is_featured: true,
            is_chef_favorite: true,
            rating: Some(4.8),
            review_count: Some(127),
            ..create_empty_item("truffle-flatbread")
        },
        MenuItem {
            name: "Crispy Calamari".to_string(),
            description: "Served with spicy marinara and lemon aioli.".to_string(),
            price: "$16.50".to_string(),
            image: Some("https://images.unsplash.com/photo-1599487488170-d11ec9c172f0".to_string()),
            tags: vec!["Spicy".to_string(), "Popular".to_string()],
            allergens: vec!["Shellfish".to_string(), "Gluten".to_string()],
            food_pairings: Some(vec![FoodPairing {
                name: "Prosecco".to_string(),
                description: "Crisp bubbles cut through the richness".to_string(),
            }]),
            prep_time: Some(12),
            is_most_popular: true,
            is_top_reviewed: true,
            rating: Some(4.7),
            review_count: Some(203),
            ..create_empty_item("crispy-calamari")
        },
    ]
}

fn main_course_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Pan Seared Salmon".to_string(),
            description: "With quinoa and roasted vegetables.".to_string(),
            price: "$28.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1485921325833-c519f76c4927".to_string()),
            tags: vec!["Gluten Free".to_string(), "Healthy".to_string()],
            allergens: vec!["Fish".to_string()],
            dietary_tags: Some(vec!["Gluten Free".to_string()]),
            prep_time: Some(20),
            calories: Some(540),
            is_top_reviewed: true,
            rating: Some(4.9),
            review_count: Some(156),
            ..create_empty_item("pan-seared-salmon")
        },
        MenuItem {
            name: "Wagyu Burger".to_string(),
            description: "Brioche bun, aged cheddar, bacon jam.".to_string(),
            price: "$24.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1568901346375-23c9450c58cd".to_string()),
            tags: vec!["Signature".to_string(), "Popular".to_string()],
            allergens: vec!["Gluten".to_string(), "Dairy".to_string()],
            modifier_groups: Some(wagyu_modifier_groups()),
            chef_notes: Some(
                "Our Wagyu comes from a local farm using traditional Japanese feeding techniques."
                    .to_string(),
            ),
            prep_time: Some(18),
            calories: Some(980),
            is_featured: true,
            is_most_popular: true,
            is_chef_favorite: true,
            rating: Some(5.0),
            review_count: Some(342),
            ..create_empty_item("wagyu-burger")
        },
    ]
}

fn salad_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Caesar Salad".to_string(),
            description: "Romaine, parmesan, croutons.".to_string(),
            price: "$14.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1550304943-4f24f54ddde9".to_string()),
            tags: vec!["Classic".to_string()],
            allergens: vec!["Gluten".to_string(), "Dairy".to_string(), "Eggs".to_string()],
            ..create_empty_item("caesar-salad")
        },
        MenuItem {
            name: "Kale & Quinoa".to_string(),
            description: "Lemon vinaigrette, almonds.".to_string(),
            price: "$15.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1512621776951-a57141f2eefd".to_string()),
            tags: vec![
                "Vegan".to_string(),
                "Gluten Free".to_string(),
                "Healthy".to_string(),
            ],
            allergens: vec!["Nuts".to_string()],
            dietary_tags: Some(vec!["Vegan".to_string(), "Gluten Free".to_string()]),
            is_top_reviewed: true,
            rating: Some(4.6),
            review_count: Some(89),
            ..create_empty_item("kale-quinoa")
        },
    ]
}

fn dessert_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Tiramisu".to_string(),
            description: "Classic Italian coffee-soaked layers.".to_string(),
            price: "$10.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1571877227200-a0d98ea607e9".to_string()),
            tags: vec!["Classic".to_string(), "Popular".to_string()],
            allergens: vec!["Gluten".to_string(), "Dairy".to_string(), "Eggs".to_string()],
            is_most_popular: true,
            rating: Some(4.9),
            review_count: Some(178),
            ..create_empty_item("tiramisu")
        },
        MenuItem {
            name: "Cheesecake".to_string(),
            description: "New York style with berry compote.".to_string(),
            price: "$12.00".to_string(),
            image: Some("https://images.unsplash.com/photo-1533134242820-3ea26d6f9f09".to_string()),
            tags: vec!["Signature".to_string()],
            allergens: vec!["Gluten".to_string(), "Dairy".to_string(), "Eggs".to_string()],
            rating: Some(4.7),
            review_count: Some(134),
            ..create_empty_item("cheesecake")
        },
    ]
}

/// Size replaces the base price; add-ons stack on top. See the pricing
/// rules on [`crate::customize::ItemCustomization`].
fn wagyu_modifier_groups() -> Vec<ModifierGroup> {
    vec![
        ModifierGroup {
            id: "wagyu-size".to_string(),
            name: "Choose Your Size".to_string(),
            required: true,
            min_select: Some(1),
            max_select: Some(1),
            options: vec![
                ModifierOption {
                    id: "wagyu-size-single".to_string(),
                    name: "Single Patty".to_string(),
                    description: Some("Quarter pound".to_string()),
                    price_cents: 2400,
                    is_default: true,
                },
                ModifierOption {
                    id: "wagyu-size-double".to_string(),
                    name: "Double Patty".to_string(),
                    description: Some("Half pound".to_string()),
                    price_cents: 2900,
                    is_default: false,
                },
            ],
        },
        ModifierGroup {
            id: "wagyu-addons".to_string(),
            name: "Add-Ons".to_string(),
            required: false,
            min_select: None,
            max_select: None,
            options: vec![
                ModifierOption {
                    id: "wagyu-addon-bacon".to_string(),
                    name: "Smoked Bacon".to_string(),
                    description: None,
                    price_cents: 250,
                    is_default: false,
                },
                ModifierOption {
                    id: "wagyu-addon-egg".to_string(),
                    name: "Fried Egg".to_string(),
                    description: None,
                    price_cents: 150,
                    is_default: false,
                },
                ModifierOption {
                    id: "wagyu-addon-truffle".to_string(),
                    name: "Truffle Aioli".to_string(),
                    description: None,
                    price_cents: 200,
                    is_default: false,
                },
            ],
        },
    ]
}

// -----------------------------------------------------------------------------
// Storefront content
// -----------------------------------------------------------------------------

fn restaurant_info() -> RestaurantInfo {
    RestaurantInfo {
        name: "Bella Vista Restaurant".to_string(),
        tagline: "Modern Italian Cuisine with a Creative Twist".to_string(),
        cuisine_types: vec![
            "Italian".to_string(),
            "Pasta".to_string(),
            "Pizza".to_string(),
            "Seafood".to_string(),
        ],
        address: "123 Elm Street, Downtown District".to_string(),
        phone: "(555) 123-4567".to_string(),
        email: "reservations@bellavista.com".to_string(),
        hours: vec![
            OpeningHours { day: "Monday".to_string(), hours: "11:00 AM - 10:00 PM".to_string() },
            OpeningHours { day: "Tuesday".to_string(), hours: "11:00 AM - 10:00 PM".to_string() },
            OpeningHours { day: "Wednesday".to_string(), hours: "11:00 AM - 10:00 PM".to_string() },
            OpeningHours { day: "Thursday".to_string(), hours: "11:00 AM - 10:00 PM".to_string() },
            OpeningHours { day: "Friday".to_string(), hours: "11:00 AM - 11:00 PM".to_string() },
            OpeningHours { day: "Saturday".to_string(), hours: "10:00 AM - 11:00 PM".to_string() },
            OpeningHours { day: "Sunday".to_string(), hours: "10:00 AM - 9:00 PM".to_string() },
        ],
        hero_image: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5".to_string(),
        story: Some(
            "Since 2010, Bella Vista has been bringing authentic Italian flavors with a modern \
             twist to our community. Our chefs craft each dish with locally-sourced ingredients \
             and traditional techniques passed down through generations."
                .to_string(),
        ),
    }
}

fn chef_specials() -> Vec<ChefSpecial> {
    let courses = [
        ("course-1", "Amuse-Bouche", "Parmesan crisp with truffle cream"),
        ("course-2", "Lobster Bisque", "Cognac cream, herb oil"),
        ("course-3", "Seared Scallops", "Cauliflower puree, crispy prosciutto"),
        ("course-4", "Beef Tenderloin", "Red wine reduction, truffle potato"),
        ("course-5", "Dark Chocolate Soufflé", "Vanilla bean gelato"),
    ];

    vec![ChefSpecial {
        id: "tasting-menu".to_string(),
        title: "Chef's Tasting Menu".to_string(),
        subtitle: "5-Course Culinary Journey".to_string(),
        description:
            "Experience our chef's finest creations in this carefully curated tasting menu. \
             Each course is perfectly paired with premium wines."
                .to_string(),
        courses: courses
            .into_iter()
            .map(|(id, name, description)| MenuItem {
                name: name.to_string(),
                description: description.to_string(),
                price: String::new(),
                ..create_empty_item(id)
            })
            .collect(),
        price: "$95.00".to_string(),
        image: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0".to_string(),
        available_until: Some("Available Friday - Sunday".to_string()),
    }]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::parse_price;

    #[test]
    fn test_seed_has_four_categories() {
        let config = default_menu_config();
        let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Popular Items", "Main Courses", "Salads", "Desserts"]
        );
    }

    #[test]
    fn test_seed_ids_are_unique_across_tree() {
        let config = default_menu_config();
        let mut ids: Vec<&str> = Vec::new();

        for category in &config.categories {
            ids.push(&category.id);
            for item in &category.items {
                ids.push(&item.id);
                for group in item.modifiers() {
                    ids.push(&group.id);
                    for option in &group.options {
                        ids.push(&option.id);
                    }
                }
            }
        }

        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_seed_prices_all_parse() {
        let config = default_menu_config();
        for category in &config.categories {
            for item in &category.items {
                assert!(!parse_price(&item.price).is_negative());
            }
        }
    }

    #[test]
    fn test_seed_categories_inherit_defaults() {
        let config = default_menu_config();
        for category in &config.categories {
            assert!(category.card_style_override.is_none());
            assert!(category.columns_override.is_none());
        }
    }

    #[test]
    fn test_wagyu_size_group_replaces_base_price() {
        let config = default_menu_config();
        let burger = config
            .category("mains")
            .and_then(|cat| cat.items.iter().find(|i| i.id == "wagyu-burger"))
            .expect("seed contains the wagyu burger");

        let groups = burger.modifiers();
        assert!(groups[0].replaces_base_price());
        assert!(!groups[1].replaces_base_price());
        assert!(groups[0].default_option().is_some());
    }
}
