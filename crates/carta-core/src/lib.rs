//! # carta-core: Pure Business Logic for Carta Studio
//!
//! This crate is the **heart** of Carta Studio, the visual menu builder. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Carta Studio Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Menu Builder ──► Style Editor ──► Live Preview ──► Cart      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / snapshots                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 carta-studio (session layer)                    │   │
//! │  │    MenuState, CartState, command surface, ApiError              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carta-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │   store   │  │ customize │  │   │
//! │  │   │ MenuConfig│  │   Money   │  │ MenuStore │  │ selection │  │   │
//! │  │   │ Category  │  │ parse/fmt │  │ mutations │  │ + pricing │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The configuration model (MenuConfig, CategoryConfig, MenuItem, ...)
//! - [`price`] - Money type plus price-text parsing and formatting
//! - [`seed`] - The hard-coded default configuration a session starts from
//! - [`store`] - The configuration store and its mutation operations
//! - [`customize`] - Per-item selection state and computed pricing
//! - [`validation`] - Input validation for the command layer
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64) to avoid float errors
//! 4. **Copy-on-Write**: Store mutations swap whole replacement trees; snapshots
//!    handed out never observe a partial write
//!
//! ## Example Usage
//!
//! ```rust
//! use carta_core::customize::ItemCustomization;
//! use carta_core::price::Money;
//! use carta_core::store::MenuStore;
//!
//! // One store per session, seeded with the default menu
//! let mut store = MenuStore::new();
//! let category_id = store.add_category("Starters");
//! let item_id = store.add_item(&category_id)?;
//!
//! // Factory items start at the placeholder price
//! let config = store.snapshot();
//! let item = &config.category(&category_id).unwrap().items[0];
//! assert_eq!(item.id, item_id);
//! assert_eq!(item.price, "$0.00");
//!
//! // Customization sessions price independently of the store
//! let session = ItemCustomization::new(item);
//! assert_eq!(session.total_price(), Money::zero());
//! # Ok::<(), carta_core::error::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customize;
pub mod error;
pub mod price;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use carta_core::Money` instead of
// `use carta_core::price::Money`

pub use customize::{ItemCustomization, ModifierSelection, PriceQuote};
pub use error::{CoreError, CoreResult, ValidationError};
pub use price::{format_price, parse_price, Money};
pub use store::{
    BadgeField, DisplaySetting, MenuStore, NavigationSetting, ThemeColor, ThemeSetting,
};
pub use types::*;
