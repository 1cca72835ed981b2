//! Data-driven content definitions and loaders.
//!
//! This crate reads balance and roster data from disk:
//! - Game configuration and combat tables (TOML)
//! - Player skill books (RON)
//! - Enemy profiles (RON)
//!
//! Content is turned into `skirmish-core` values at load time and never
//! consulted again during a tick.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyCatalog, EnemyLoader, LoadResult, SkillBook, SkillLoader,
};
