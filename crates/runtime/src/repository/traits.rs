//! Repository contract for saving and loading the battle setup.

use super::error::Result;
use super::SaveRecord;

/// Storage for the most recent battle setup.
///
/// Implementations only move bytes; checking the record against the current
/// roster is the session's job.
pub trait SetupRepository {
    /// Replace the stored setup.
    fn save(&self, record: &SaveRecord) -> Result<()>;

    /// Load the stored setup, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<SaveRecord>>;

    /// Check if a setup has been saved.
    fn exists(&self) -> bool;

    /// Forget the stored setup.
    fn clear(&self) -> Result<()>;
}
