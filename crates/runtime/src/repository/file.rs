//! File-based SetupRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{RepositoryError, Result};
use super::{SaveRecord, SetupRepository};

/// File-based implementation of SetupRepository.
///
/// Stores the setup as a single fixed-size record in `arena_save.dat`.
pub struct FileSetupRepository {
    path: PathBuf,
}

impl FileSetupRepository {
    pub const FILE_NAME: &'static str = "arena_save.dat";

    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SetupRepository for FileSetupRepository {
    fn save(&self, record: &SaveRecord) -> Result<()> {
        let temp_path = self.path.with_extension("dat.tmp");
        let bytes = record.to_bytes()?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved battle setup to {}", self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<SaveRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let record = SaveRecord::from_bytes(&bytes)?;

        tracing::debug!("Loaded battle setup from {}", self.path.display());

        Ok(Some(record))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted battle setup");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_returns_the_record() {
        let dir = TempDir::new().unwrap();
        let repo = FileSetupRepository::new(dir.path()).unwrap();
        let record = SaveRecord::new(2, 5, 1, 3).unwrap();

        assert!(!repo.exists());
        repo.save(&record).unwrap();

        assert!(repo.exists());
        assert_eq!(fs::metadata(repo.path()).unwrap().len(), 16);
        assert_eq!(repo.load().unwrap(), Some(record));
    }

    #[test]
    fn missing_file_is_no_save() {
        let dir = TempDir::new().unwrap();
        let repo = FileSetupRepository::new(dir.path().join("nested")).unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn truncated_file_is_corrupted() {
        let dir = TempDir::new().unwrap();
        let repo = FileSetupRepository::new(dir.path()).unwrap();
        fs::write(repo.path(), [1, 0, 0, 0, 2]).unwrap();

        assert!(matches!(
            repo.load(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }

    #[test]
    fn save_overwrites_and_clear_removes() {
        let dir = TempDir::new().unwrap();
        let repo = FileSetupRepository::new(dir.path()).unwrap();

        repo.save(&SaveRecord::new(0, 1, 0, 1).unwrap()).unwrap();
        let second = SaveRecord::new(3, 4, 2, 2).unwrap();
        repo.save(&second).unwrap();
        assert_eq!(repo.load().unwrap(), Some(second));

        repo.clear().unwrap();
        assert!(!repo.exists());
        assert_eq!(repo.load().unwrap(), None);
    }
}
