//! Main menu and battle setup flow.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use arena_runtime::{BattleSetup, GameSession, RuntimeError, SetupRepository};

use crate::console::Console;
use crate::presentation;

pub struct App<R: SetupRepository, I, O> {
    session: GameSession<R>,
    console: Console<I, O>,
}

impl<R, I, O> App<R, I, O>
where
    R: SetupRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(session: GameSession<R>, console: Console<I, O>) -> Self {
        Self { session, console }
    }

    /// Runs the main menu until the player exits or input closes.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.menu_round() {
                Ok(true) => continue,
                Ok(false) => {
                    self.console.say("Thanks for playing!")?;
                    return Ok(());
                }
                Err(err) if is_closed_input(&err) => {
                    tracing::info!("Input closed, leaving the arena");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One pass through the main menu. False means exit.
    fn menu_round(&mut self) -> Result<bool> {
        self.console.say(presentation::main_menu())?;
        match self.console.choose("Enter your choice: ", 1, 4)? {
            1 => self.new_battle()?,
            2 => {
                let info = presentation::game_info(self.session.config());
                self.console.say(info)?;
            }
            3 => self.load_battle()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn new_battle(&mut self) -> Result<()> {
        let setup = self.select_setup()?;

        let save = self
            .console
            .choose("\nDo you want to save this battle setup? (1: Yes, 2: No): ", 1, 2)?;
        if save == 1 {
            match self.session.save_setup(&setup) {
                Ok(()) => self.console.say("Game saved successfully!")?,
                Err(err) => {
                    tracing::warn!("Saving battle #{} failed: {}", setup.battle_number, err);
                    self.console.say(format_args!("Could not save the game: {err}"))?;
                }
            }
        }

        self.fight(&setup)
    }

    fn select_setup(&mut self) -> Result<BattleSetup> {
        let roster = self.session.roster();
        let characters = roster.characters().len();
        let arenas = roster.arenas().len();
        let character_list = presentation::character_list(roster);
        let arena_list = presentation::arena_list(roster);

        self.console.say(&character_list)?;
        let player_one = self.console.choose("Select Player 1: ", 1, characters)? - 1;
        let player_two = loop {
            let choice = self.console.choose("Select Player 2: ", 1, characters)? - 1;
            if choice != player_one {
                break choice;
            }
            self.console.say("Player 2 must be a different character.")?;
        };

        self.console.say(&arena_list)?;
        let arena = self.console.choose("Select Arena: ", 1, arenas)? - 1;

        Ok(self.session.prepare(player_one, player_two, arena)?)
    }

    fn load_battle(&mut self) -> Result<()> {
        let Some(setup) = self.session.load_setup() else {
            self.console
                .say("No saved game found or error loading save file.")?;
            return Ok(());
        };

        let roster = self.session.roster();
        let mut lines = format!("\nLoaded saved battle #{}:", setup.battle_number);
        for (label, index) in [("Player 1", setup.player_one), ("Player 2", setup.player_two)] {
            if let Some(spec) = roster.character(index) {
                lines.push_str(&format!("\n{label}: {} ({})", spec.name, spec.class.title()));
            }
        }
        if let Some(arena) = roster.arena(setup.arena) {
            lines.push_str(&format!("\nArena: {arena}"));
        }
        self.console.say(lines)?;

        self.fight(&setup)
    }

    fn fight(&mut self, setup: &BattleSetup) -> Result<()> {
        let summary = self.session.run_battle(setup, &mut self.console)?;
        self.console.say(presentation::summary(&summary))?;
        Ok(())
    }

    #[cfg(test)]
    fn session(&self) -> &GameSession<R> {
        &self.session
    }

    #[cfg(test)]
    fn console(&self) -> &Console<I, O> {
        &self.console
    }
}

fn is_closed_input(err: &anyhow::Error) -> bool {
    let io_error = match err.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::Frontend(io_error)) => Some(io_error),
        _ => err.downcast_ref::<io::Error>(),
    };
    io_error.is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
