//! Game session: battle setup, persistence and the interactive battle loop.
//!
//! A [`GameSession`] owns the roster and rules for the lifetime of the
//! program. Each battle spawns fresh combatants, so nothing a battle does to
//! a combatant carries over to the next one.

use std::io;
use std::path::PathBuf;

use arena_content::Roster;
use arena_core::{
    ActionError, Arena, Battle, BattleAction, BattleEvent, Combatant, GameConfig, GameError,
    Side,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::log::FileBattleLog;
use crate::repository::{FileSetupRepository, SaveRecord, SetupRepository};

/// Presentation and input collaborator driven by the battle loop.
pub trait Frontend {
    /// Ask the acting player for an action.
    ///
    /// The returned action may be one that is not available; the session
    /// reports the rejection and asks again.
    fn choose_action(
        &mut self,
        status: &BattleStatus<'_>,
        available: &[BattleAction],
    ) -> io::Result<BattleAction>;

    /// Render events in the order they happened.
    fn show_events(&mut self, events: &[BattleEvent]) -> io::Result<()>;

    /// Render the state at the start of a turn.
    fn show_status(&mut self, _status: &BattleStatus<'_>) -> io::Result<()> {
        Ok(())
    }

    /// Explain why a submitted action was refused.
    fn show_rejection(&mut self, error: &ActionError) -> io::Result<()>;
}

/// Read-only snapshot of a battle awaiting an action.
#[derive(Clone, Copy, Debug)]
pub struct BattleStatus<'a> {
    pub turn: u32,
    pub actor: Side,
    pub arena: &'a Arena,
    pub first: &'a Combatant,
    pub second: &'a Combatant,
}

impl<'a> BattleStatus<'a> {
    fn of<S: arena_core::EventSink>(battle: &'a Battle<S>, actor: Side) -> Self {
        Self {
            turn: battle.turn(),
            actor,
            arena: battle.arena(),
            first: battle.combatant(Side::PlayerOne),
            second: battle.combatant(Side::PlayerTwo),
        }
    }

    pub fn combatant(&self, side: Side) -> &'a Combatant {
        match side {
            Side::PlayerOne => self.first,
            Side::PlayerTwo => self.second,
        }
    }

    /// Combatant whose turn it is.
    pub fn acting(&self) -> &'a Combatant {
        self.combatant(self.actor)
    }
}

/// Validated selection of two roster characters and an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleSetup {
    pub player_one: usize,
    pub player_two: usize,
    pub arena: usize,
    pub battle_number: i32,
}

/// Result of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleSummary {
    pub battle_number: i32,
    pub winner: String,
    pub loser: String,
    pub winning_side: Side,
    pub turns: u32,
}

/// Long-lived state shared by every battle of one program run.
pub struct GameSession<R: SetupRepository> {
    config: GameConfig,
    roster: Roster,
    repository: R,
    battle_log_dir: Option<PathBuf>,
    battle_count: i32,
}

impl GameSession<FileSetupRepository> {
    /// Session backed by the content and directories named in `config`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let roster = config.load_roster()?;
        let rules = config.load_rules()?;
        let repository = FileSetupRepository::new(&config.save_dir)?;

        tracing::info!(
            "Session ready: {} characters, {} arenas, saves in {}",
            roster.characters().len(),
            roster.arenas().len(),
            config.save_dir.display()
        );

        let mut session = Self::new(rules, roster, repository);
        session.battle_log_dir = config.battle_log_dir().map(PathBuf::from);
        Ok(session)
    }
}

impl<R: SetupRepository> GameSession<R> {
    pub fn new(config: GameConfig, roster: Roster, repository: R) -> Self {
        Self {
            config,
            roster,
            repository,
            battle_log_dir: None,
            battle_count: 0,
        }
    }

    /// Write a transcript of every battle into `dir`.
    pub fn with_battle_logs(mut self, dir: impl Into<PathBuf>) -> Self {
        self.battle_log_dir = Some(dir.into());
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Battles set up so far, including any restored from a save.
    pub fn battle_count(&self) -> i32 {
        self.battle_count
    }

    /// Validates a selection and counts it as a new battle.
    pub fn prepare(
        &mut self,
        player_one: usize,
        player_two: usize,
        arena: usize,
    ) -> Result<BattleSetup> {
        let available = self.roster.characters().len();
        for index in [player_one, player_two] {
            if !self.roster.has_character(index) {
                return Err(RuntimeError::UnknownCharacter { index, available });
            }
        }
        if player_one == player_two {
            return Err(RuntimeError::SameCharacter { index: player_one });
        }
        if !self.roster.has_arena(arena) {
            return Err(RuntimeError::UnknownArena {
                index: arena,
                available: self.roster.arenas().len(),
            });
        }

        self.battle_count = self.battle_count.saturating_add(1);
        Ok(BattleSetup {
            player_one,
            player_two,
            arena,
            battle_number: self.battle_count,
        })
    }

    /// Persist `setup` as the one saved battle.
    pub fn save_setup(&self, setup: &BattleSetup) -> Result<()> {
        let record = SaveRecord::new(
            setup.player_one,
            setup.player_two,
            setup.arena,
            setup.battle_number,
        )?;
        self.repository.save(&record)?;
        tracing::info!("Saved battle #{} setup", setup.battle_number);
        Ok(())
    }

    /// Restore the saved setup.
    ///
    /// Anything wrong with the save (missing, unreadable, short, or pointing
    /// outside the current roster) means there is no valid save. The battle
    /// counter resumes from the saved one.
    pub fn load_setup(&mut self) -> Option<BattleSetup> {
        let record = match self.repository.load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!("No saved battle setup");
                return None;
            }
            Err(err) => {
                tracing::warn!("Ignoring unreadable save: {}", err);
                return None;
            }
        };

        let indices = record
            .indices(self.roster.characters().len(), self.roster.arenas().len())
            .filter(|(one, two, _)| one != two);
        let Some((player_one, player_two, arena)) = indices else {
            tracing::warn!("Ignoring save with invalid data: {:?}", record);
            return None;
        };

        self.battle_count = record.battle_count;
        Some(BattleSetup {
            player_one,
            player_two,
            arena,
            battle_number: record.battle_count,
        })
    }

    /// Fight the battle described by `setup` to the end.
    pub fn run_battle<F>(&self, setup: &BattleSetup, frontend: &mut F) -> Result<BattleSummary>
    where
        F: Frontend + ?Sized,
    {
        let first = self.spawn(setup.player_one)?;
        let second = self.spawn(setup.player_two)?;
        let arena = self
            .roster
            .arena(setup.arena)
            .cloned()
            .ok_or(RuntimeError::UnknownArena {
                index: setup.arena,
                available: self.roster.arenas().len(),
            })?;

        let log = self.open_log();
        let mut battle = Battle::start(self.config.clone(), first, second, arena, log)?;
        tracing::info!(
            "Battle #{} started: {} vs {} in {}",
            setup.battle_number,
            battle.combatant(Side::PlayerOne).name(),
            battle.combatant(Side::PlayerTwo).name(),
            battle.arena()
        );
        frontend
            .show_events(battle.opening_events())
            .map_err(RuntimeError::Frontend)?;

        while let Some(actor) = battle.current_actor() {
            let status = BattleStatus::of(&battle, actor);
            let available = battle.available_actions();
            frontend.show_status(&status).map_err(RuntimeError::Frontend)?;
            let action = frontend
                .choose_action(&status, &available)
                .map_err(RuntimeError::Frontend)?;

            match battle.submit(action) {
                Ok(report) => {
                    tracing::debug!(
                        "Turn {} resolved: {} chose {}, {} event(s)",
                        report.turn,
                        report.actor,
                        report.action,
                        report.events.len()
                    );
                    frontend
                        .show_events(&report.events)
                        .map_err(RuntimeError::Frontend)?;
                }
                Err(err) if err.severity().is_recoverable() => {
                    tracing::warn!(
                        code = err.error_code(),
                        "Rejected {} on turn {}: {}",
                        action,
                        battle.turn(),
                        err
                    );
                    frontend.show_rejection(&err).map_err(RuntimeError::Frontend)?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let outcome = battle
            .outcome()
            .copied()
            .ok_or(RuntimeError::BattleUnfinished)?;
        let summary = BattleSummary {
            battle_number: setup.battle_number,
            winner: battle.combatant(outcome.winner).name().to_string(),
            loser: battle.combatant(outcome.loser).name().to_string(),
            winning_side: outcome.winner,
            turns: outcome.turns,
        };
        tracing::info!(
            "Battle #{} over: {} defeated {} in {} turn(s)",
            summary.battle_number,
            summary.winner,
            summary.loser,
            summary.turns
        );

        Ok(summary)
    }

    fn spawn(&self, index: usize) -> Result<Combatant> {
        self.roster.spawn(index).ok_or(RuntimeError::UnknownCharacter {
            index,
            available: self.roster.characters().len(),
        })
    }

    /// Logging is best effort; a log that cannot be opened is skipped.
    fn open_log(&self) -> Option<FileBattleLog> {
        let dir = self.battle_log_dir.as_ref()?;
        match FileBattleLog::open(dir) {
            Ok(log) => Some(log),
            Err(err) => {
                tracing::warn!("Battle log unavailable in {}: {}", dir.display(), err);
                None
            }
        }
    }
}
