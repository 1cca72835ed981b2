//! Content loaders for reading game data from files.
//!
//! Every loader exposes `load(path)` for files and `parse(str)` for in-memory
//! content, and reports failures as [`anyhow::Error`] naming what was being read.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod skills;

pub use config::ConfigLoader;
pub use enemies::{EnemyCatalog, EnemyLoader};
pub use factory::ContentFactory;
pub use skills::{SkillBook, SkillLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
