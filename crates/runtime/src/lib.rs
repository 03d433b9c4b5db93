//! Session orchestration for arena battles.
//!
//! This crate wires the rules in `arena-core` and the roster in
//! `arena-content` to the outside world: a [`Frontend`] that picks actions
//! and renders events, a [`SetupRepository`] that remembers the last battle
//! setup, and a [`FileBattleLog`] that keeps a readable battle transcript.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts [`GameSession`], the setup flow and the battle loop
//! - [`repository`] persists battle setups
//! - [`log`] records battle events to a text file
//! - [`config`] resolves directories and content paths from the environment
pub mod config;
pub mod error;
pub mod log;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use log::FileBattleLog;
pub use repository::{
    FileSetupRepository, InMemorySetupRepository, RepositoryError, SaveRecord, SetupRepository,
};
pub use session::{BattleSetup, BattleStatus, BattleSummary, Frontend, GameSession};
