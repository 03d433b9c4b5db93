use serde::{Deserialize, Serialize};

use super::error::{RepositoryError, Result};

/// Persisted battle setup.
///
/// # File Format
///
/// Four little-endian `i32` values in field order, 16 bytes total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub player_one: i32,
    pub player_two: i32,
    pub arena: i32,
    pub battle_count: i32,
}

impl SaveRecord {
    pub const SIZE: usize = 16;

    pub fn new(
        player_one: usize,
        player_two: usize,
        arena: usize,
        battle_count: i32,
    ) -> Result<Self> {
        Ok(Self {
            player_one: to_index(player_one)?,
            player_two: to_index(player_two)?,
            arena: to_index(arena)?,
            battle_count,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    /// Decodes the first [`SaveRecord::SIZE`] bytes; shorter input is corrupt.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let Some(head) = bytes.get(..Self::SIZE) else {
            return Err(RepositoryError::CorruptedData(format!(
                "save record needs {} bytes, found {}",
                Self::SIZE,
                bytes.len()
            )));
        };
        bincode::deserialize(head).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    /// Converts the stored indices back, rejecting anything outside the
    /// given roster and arena counts or a non-positive battle counter.
    pub fn indices(&self, characters: usize, arenas: usize) -> Option<(usize, usize, usize)> {
        if self.battle_count <= 0 {
            return None;
        }
        let player_one = from_index(self.player_one, characters)?;
        let player_two = from_index(self.player_two, characters)?;
        let arena = from_index(self.arena, arenas)?;
        Some((player_one, player_two, arena))
    }
}

fn to_index(index: usize) -> Result<i32> {
    i32::try_from(index)
        .map_err(|_| RepositoryError::Serialization(format!("index {index} does not fit in i32")))
}

fn from_index(value: i32, len: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&index| index < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_four_little_endian_integers() {
        let record = SaveRecord::new(1, 2, 3, 258).unwrap();
        let bytes = record.to_bytes().unwrap();

        assert_eq!(bytes.len(), SaveRecord::SIZE);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[12..], &[2, 1, 0, 0]);
        assert_eq!(SaveRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn short_input_is_corrupted() {
        let err = SaveRecord::from_bytes(&[0; 15]).unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }

    #[test]
    fn indices_are_bounds_checked() {
        let record = SaveRecord::new(0, 7, 4, 1).unwrap();
        assert_eq!(record.indices(8, 5), Some((0, 7, 4)));
        assert_eq!(record.indices(7, 5), None);
        assert_eq!(record.indices(8, 4), None);

        let negative = SaveRecord {
            player_one: -1,
            ..record
        };
        assert_eq!(negative.indices(8, 5), None);
    }

    #[test]
    fn battle_counter_must_be_positive() {
        let record = SaveRecord::new(0, 1, 0, 0).unwrap();
        assert_eq!(record.indices(2, 1), None);
        let unset = SaveRecord {
            player_one: -1,
            player_two: -1,
            arena: -1,
            battle_count: 0,
        };
        assert_eq!(unset.indices(2, 1), None);
    }
}
