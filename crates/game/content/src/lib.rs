//! Data-driven content definitions and loaders.
//!
//! This crate houses the arena roster and provides loaders for RON/TOML data files:
//! - Character roster and arenas (data-driven via RON)
//! - Battle rules (data-driven via TOML)
//!
//! A built-in roster is always available, so the game runs without any data
//! files. Content is consumed by the runtime and never mutated by battles:
//! every battle spawns fresh combatants from the roster.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{CharacterSpec, Roster};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
