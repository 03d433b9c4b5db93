//! Text rendering for menus, battle status and the info screen.

use std::fmt::Write;

use arena_content::Roster;
use arena_core::{BattleAction, CombatClass, Combatant, Environment, GameConfig};
use arena_runtime::{BattleStatus, BattleSummary};

pub const RULE: &str = "==================================================";

pub fn main_menu() -> String {
    format!(
        "\n{RULE}\n  ARENA\n{RULE}\n1. Start New Battle\n2. Game Information\n3. Load Saved Game\n4. Exit\n"
    )
}

/// Numbered list of roster characters with their starting stats.
pub fn character_list(roster: &Roster) -> String {
    let mut out = String::from("\nAvailable characters:\n");
    for (i, spec) in roster.characters().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, spec.spawn());
    }
    out
}

pub fn arena_list(roster: &Roster) -> String {
    let mut out = String::from("\nAvailable arenas:\n");
    for (i, arena) in roster.arenas().iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {}",
            i + 1,
            arena,
            arena.environment().description()
        );
    }
    out
}

/// One line per combatant plus the acting player's banner.
pub fn status(status: &BattleStatus<'_>) -> String {
    format!(
        "\n--- Turn {} ---\n{}\n{}\n\n{}'s turn:",
        status.turn,
        combatant_line(status.first),
        combatant_line(status.second),
        status.acting().name()
    )
}

pub fn combatant_line(combatant: &Combatant) -> String {
    format!(
        "{} | {} {}",
        combatant,
        combatant.ability().title(),
        combatant.ability_badge()
    )
}

/// Numbered menu of the actions `combatant` may take right now.
///
/// An ability on cooldown is listed without a number.
pub fn action_menu(combatant: &Combatant, available: &[BattleAction]) -> String {
    let ability = combatant.ability().title();
    let mut out = String::new();
    for (i, action) in available.iter().enumerate() {
        let _ = match action {
            BattleAction::Attack => writeln!(out, "{}. Attack", i + 1),
            BattleAction::Ability => writeln!(out, "{}. Use {ability}", i + 1),
        };
    }
    if !available.contains(&BattleAction::Ability) {
        let _ = writeln!(
            out,
            "   {ability} (cooldown: {} turn(s))",
            combatant.cooldown().remaining()
        );
    }
    out
}

pub fn summary(summary: &BattleSummary) -> String {
    format!(
        "\n{RULE}\n{} wins battle #{} against {} after {} turn(s)!\n{RULE}",
        summary.winner, summary.battle_number, summary.loser, summary.turns
    )
}

/// Classes, abilities and arenas explained.
pub fn game_info(config: &GameConfig) -> String {
    let mut out = format!("\n{RULE}\n  GAME INFORMATION\n{RULE}\n\nClasses:\n");
    for class in CombatClass::ALL {
        let _ = writeln!(
            out,
            "- {} ({}): {}",
            class.title(),
            class.ability().title(),
            class.description()
        );
    }
    let _ = writeln!(
        out,
        "\nAbilities need {} turns to recharge. Reflector returns {}% of damage taken.\nChampion rises once with {}% of max health.",
        GameConfig::ABILITY_COOLDOWN,
        config.reflect_percent,
        config.resurrection_percent
    );
    out.push_str("\nEnvironments:\n");
    for environment in Environment::ALL {
        let effect = environment.effect();
        let _ = writeln!(
            out,
            "- {}: {} (ATK {}%, DEF {}%, HP {}%)",
            environment.title(),
            environment.description(),
            effect.attack_percent,
            effect.defense_percent,
            effect.health_percent
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_mentions_every_class_and_environment() {
        let text = game_info(&GameConfig::default());
        for class in CombatClass::ALL {
            assert!(text.contains(class.title()));
        }
        for environment in Environment::ALL {
            assert!(text.contains(environment.title()));
        }
        assert!(text.contains("25% of damage"));
    }

    #[test]
    fn lists_are_numbered_from_one() {
        let roster = Roster::builtin();
        let characters = character_list(&roster);
        assert!(characters.contains("1. Brann Ironhold (Level 5 Fighter)"));
        assert!(characters.contains("8. Vael Glasswright"));

        let arenas = arena_list(&roster);
        assert!(arenas.contains("5. Skyreach Peaks (Mountain environment)"));
    }

    #[test]
    fn action_menu_shows_remaining_cooldown() {
        let mut brann = Combatant::new("Brann", CombatClass::Fighter, 1);
        let both = [BattleAction::Attack, BattleAction::Ability];
        assert_eq!(action_menu(&brann, &both), "1. Attack\n2. Use Stoneskin\n");

        brann.activate().unwrap();
        assert_eq!(
            action_menu(&brann, &[BattleAction::Attack]),
            "1. Attack\n   Stoneskin (cooldown: 3 turn(s))\n"
        );
        assert!(combatant_line(&brann).ends_with("Stoneskin [Active]"));
    }
}
