//! Line-based terminal I/O and the battle frontend built on it.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use arena_core::{AbilityError, ActionError, BattleAction, BattleEvent};
use arena_runtime::{BattleStatus, Frontend};

use crate::input::parse_choice;
use crate::presentation;

/// Prompts on `output` and reads answers from `input`, one per line.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Asks until the answer is a number in `min..=max`.
    ///
    /// Closed input surfaces as [`io::ErrorKind::UnexpectedEof`].
    pub fn choose(&mut self, prompt: &str, min: usize, max: usize) -> io::Result<usize> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }
            match parse_choice(&line, min, max) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    tracing::debug!("Invalid choice {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn choose_action(
        &mut self,
        status: &BattleStatus<'_>,
        available: &[BattleAction],
    ) -> io::Result<BattleAction> {
        if available.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no action available",
            ));
        }
        write!(
            self.output,
            "{}",
            presentation::action_menu(status.acting(), available)
        )?;
        let prompt = match available.len() {
            1 => String::from("Enter your choice (1): "),
            n => format!("Enter your choice (1-{n}): "),
        };
        let choice = self.choose(&prompt, 1, available.len())?;
        available
            .get(choice - 1)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "choice out of range"))
    }

    fn show_events(&mut self, events: &[BattleEvent]) -> io::Result<()> {
        for event in events {
            writeln!(self.output, "  {event}")?;
        }
        Ok(())
    }

    fn show_status(&mut self, status: &BattleStatus<'_>) -> io::Result<()> {
        self.say(presentation::status(status))
    }

    fn show_rejection(&mut self, error: &ActionError) -> io::Result<()> {
        match error {
            ActionError::Ability {
                source: AbilityError::OnCooldown { ability, remaining },
                ..
            } => self.say(format_args!(
                "{} is on cooldown for {remaining} more turn(s). Choose again.",
                ability.title()
            )),
            other => self.say(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use arena_core::{CombatClass, Combatant, Side};

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let mut console = console("abc\n9\n2\n");
        assert_eq!(console.choose("Pick: ", 1, 4).unwrap(), 2);

        let text = printed(&console);
        assert_eq!(text.matches("Pick: ").count(), 3);
        assert!(text.contains("Please enter a number."));
        assert!(text.contains("between 1 and 4"));
    }

    #[test]
    fn closed_input_is_eof() {
        let mut console = console("");
        let err = console.choose("Pick: ", 1, 4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn cooldown_menu_offers_attack_only() {
        let arena = arena_core::Arena::new("Pit", arena_core::Environment::Fire);
        let mut brann = Combatant::new("Brann", CombatClass::Fighter, 1);
        brann.activate().unwrap();
        let ysolde = Combatant::new("Ysolde", CombatClass::Caster, 1);
        let status = BattleStatus {
            turn: 3,
            actor: Side::PlayerOne,
            arena: &arena,
            first: &brann,
            second: &ysolde,
        };

        let mut console = console("2\n1\n");
        let action = console
            .choose_action(&status, &[BattleAction::Attack])
            .unwrap();
        assert_eq!(action, BattleAction::Attack);

        let text = printed(&console);
        assert!(text.starts_with("1. Attack\n   Stoneskin (cooldown: 3 turn(s))\n"));
        assert_eq!(text.matches("Enter your choice (1): ").count(), 2);
    }

    #[test]
    fn ready_ability_is_second_choice() {
        let arena = arena_core::Arena::new("Pit", arena_core::Environment::Fire);
        let brann = Combatant::new("Brann", CombatClass::Fighter, 1);
        let ysolde = Combatant::new("Ysolde", CombatClass::Caster, 1);
        let status = BattleStatus {
            turn: 2,
            actor: Side::PlayerTwo,
            arena: &arena,
            first: &brann,
            second: &ysolde,
        };

        let mut console = console("2\n");
        let action = console
            .choose_action(&status, &[BattleAction::Attack, BattleAction::Ability])
            .unwrap();
        assert_eq!(action, BattleAction::Ability);
        assert!(printed(&console).contains("2. Use Mirror Image\nEnter your choice (1-2): "));
    }

    #[test]
    fn cooldown_rejection_is_explained() {
        let mut console = console("");
        let error = ActionError::Ability {
            source: AbilityError::OnCooldown {
                ability: arena_core::AbilityKind::MirrorImage,
                remaining: 2,
            },
            context: arena_core::ErrorContext::new(3),
        };
        console.show_rejection(&error).unwrap();
        assert_eq!(
            printed(&console),
            "Mirror Image is on cooldown for 2 more turn(s). Choose again.\n"
        );
    }
}
