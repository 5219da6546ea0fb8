//! # Commands Module
//!
//! The named entry points the rendering shell invokes. Each command takes
//! exactly the state it needs, validates input, logs the dispatch, and
//! delegates to `carta-core`.

pub mod cart;
pub mod menu;
