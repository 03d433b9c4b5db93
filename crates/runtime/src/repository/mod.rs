//! Repository layer for battle setups.
//!
//! Only the last setup is kept: two roster indices, an arena index and the
//! battle counter. Roster content itself is static and lives in
//! `arena-content`.

mod error;
mod file;
mod memory;
mod record;
mod traits;

pub use error::RepositoryError;
pub use file::FileSetupRepository;
pub use memory::InMemorySetupRepository;
pub use record::SaveRecord;
pub use traits::SetupRepository;
