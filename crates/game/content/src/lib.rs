//! Data-driven content definitions and loaders.
//!
//! This crate reads static satchel content from RON/TOML data files:
//! - Item catalogs (RON)
//! - World item placements (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by the runtime item oracle and the session builder;
//! it never appears in game state except as [`satchel_core::ItemHandle`]s.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalogRon, ItemLoader, LoadResult, WorldLayout,
    WorldLoader,
};
