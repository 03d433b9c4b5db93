//! Roster loader.
//!
//! Loads characters and arenas from RON files.

use std::collections::HashSet;
use std::path::Path;

use arena_core::CombatClass;

use crate::loaders::{LoadResult, read_file};
use crate::roster::Roster;

/// Loader for the character roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `(characters: [(name, class, level)], arenas: [(name, environment)])`
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate roster RON.
    ///
    /// A roster needs two distinct characters, one arena, unique names and
    /// indices that fit the 32-bit save record.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        anyhow::ensure!(
            roster.characters().len() >= 2,
            "Roster needs at least two characters (got {})",
            roster.characters().len()
        );
        anyhow::ensure!(!roster.arenas().is_empty(), "Roster needs at least one arena");
        anyhow::ensure!(
            roster.characters().len() <= i32::MAX as usize
                && roster.arenas().len() <= i32::MAX as usize,
            "Roster is too large to be saved"
        );

        let mut names = HashSet::new();
        for character in roster.characters() {
            anyhow::ensure!(
                (1..=CombatClass::MAX_LEVEL).contains(&character.level),
                "Character '{}' must be between level 1 and {} (got {})",
                character.name,
                CombatClass::MAX_LEVEL,
                character.level
            );
            anyhow::ensure!(
                names.insert(character.name.as_str()),
                "Duplicate character name '{}'",
                character.name
            );
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Environment;

    #[test]
    fn parses_characters_and_arenas() {
        let roster = RosterLoader::parse(
            r#"(
                characters: [
                    (name: "Brann", class: Fighter, level: 2),
                    (name: "Vael", class: Reflector, level: 3),
                ],
                arenas: [(name: "Pit", environment: Desert)],
            )"#,
        )
        .unwrap();

        assert_eq!(roster.characters().len(), 2);
        assert_eq!(roster.characters()[1].class, CombatClass::Reflector);
        assert_eq!(roster.arenas()[0].environment(), Environment::Desert);
    }

    #[test]
    fn rejects_single_character() {
        let err = RosterLoader::parse(
            r#"(
                characters: [(name: "Brann", class: Fighter, level: 2)],
                arenas: [(name: "Pit", environment: Fire)],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least two"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RosterLoader::parse(
            r#"(
                characters: [
                    (name: "Brann", class: Fighter, level: 2),
                    (name: "Brann", class: Caster, level: 2),
                ],
                arenas: [(name: "Pit", environment: Fire)],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn rejects_levels_outside_range() {
        for level in [0, CombatClass::MAX_LEVEL + 1, 4_000_000_000] {
            let err = RosterLoader::parse(&format!(
                r#"(
                    characters: [
                        (name: "Big", class: Champion, level: {level}),
                        (name: "Brann", class: Fighter, level: 2),
                    ],
                    arenas: [(name: "Pit", environment: Fire)],
                )"#
            ))
            .unwrap_err();
            assert!(err.to_string().contains("between level 1"), "{err}");
        }
    }

    #[test]
    fn accepts_max_level() {
        let roster = RosterLoader::parse(&format!(
            r#"(
                characters: [
                    (name: "Big", class: Champion, level: {}),
                    (name: "Brann", class: Fighter, level: 2),
                ],
                arenas: [(name: "Pit", environment: Fire)],
            )"#,
            CombatClass::MAX_LEVEL
        ))
        .unwrap();
        assert!(roster.spawn(0).is_some());
    }

    #[test]
    fn shipped_roster_matches_builtin() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/roster.ron");
        let roster = RosterLoader::load(&path).unwrap();
        assert_eq!(roster, Roster::builtin());
    }
}
