//! Character roster and arena catalog.

use arena_core::{Arena, CombatClass, Combatant, Environment};

/// Recipe for spawning a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSpec {
    pub name: String,
    pub class: CombatClass,
    pub level: u32,
}

impl CharacterSpec {
    pub fn new(name: impl Into<String>, class: CombatClass, level: u32) -> Self {
        Self {
            name: name.into(),
            class,
            level,
        }
    }

    /// Spawns a fresh, unconditioned combatant at full health.
    pub fn spawn(&self) -> Combatant {
        Combatant::new(self.name.clone(), self.class, self.level)
    }
}

/// Selectable characters and arenas, addressed by index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    characters: Vec<CharacterSpec>,
    arenas: Vec<Arena>,
}

impl Roster {
    pub fn new(characters: Vec<CharacterSpec>, arenas: Vec<Arena>) -> Self {
        Self { characters, arenas }
    }

    /// Roster shipped with the game: every class and every environment.
    pub fn builtin() -> Self {
        let characters = vec![
            CharacterSpec::new("Brann Ironhold", CombatClass::Fighter, 5),
            CharacterSpec::new("Hilda Stoneshield", CombatClass::Fighter, 4),
            CharacterSpec::new("Ysolde the Grey", CombatClass::Caster, 6),
            CharacterSpec::new("Morwen Ashveil", CombatClass::Caster, 5),
            CharacterSpec::new("Kestrel Windrunner", CombatClass::Marksman, 5),
            CharacterSpec::new("Tamsin Quickdraw", CombatClass::Marksman, 4),
            CharacterSpec::new("Auric Dawnblade", CombatClass::Champion, 5),
            CharacterSpec::new("Vael Glasswright", CombatClass::Reflector, 5),
        ];
        let arenas = vec![
            Arena::new("Ashen Crater", Environment::Fire),
            Arena::new("Frostfang Tundra", Environment::Ice),
            Arena::new("Verdant Tangle", Environment::Jungle),
            Arena::new("Sunscar Dunes", Environment::Desert),
            Arena::new("Skyreach Peaks", Environment::Mountain),
        ];
        Self::new(characters, arenas)
    }

    pub fn characters(&self) -> &[CharacterSpec] {
        &self.characters
    }

    pub fn arenas(&self) -> &[Arena] {
        &self.arenas
    }

    pub fn character(&self, index: usize) -> Option<&CharacterSpec> {
        self.characters.get(index)
    }

    pub fn arena(&self, index: usize) -> Option<&Arena> {
        self.arenas.get(index)
    }

    /// Spawns the character at `index`, if it exists.
    pub fn spawn(&self, index: usize) -> Option<Combatant> {
        self.character(index).map(CharacterSpec::spawn)
    }

    /// True when `index` addresses a character.
    pub fn has_character(&self, index: usize) -> bool {
        index < self.characters.len()
    }

    /// True when `index` addresses an arena.
    pub fn has_arena(&self, index: usize) -> bool {
        index < self.arenas.len()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}
