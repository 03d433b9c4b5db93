//! Scripted frontend shared by the session tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use arena_core::{ActionError, BattleAction, BattleEvent};
use arena_runtime::{BattleStatus, Frontend};

/// Plays the scripted actions in order, then attacks forever.
#[derive(Default)]
pub struct ScriptedFrontend {
    script: VecDeque<BattleAction>,
    pub events: Vec<BattleEvent>,
    pub rejections: Vec<ActionError>,
    pub prompts: Vec<(u32, String, Vec<BattleAction>)>,
}

impl ScriptedFrontend {
    pub fn new(script: impl IntoIterator<Item = BattleAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn attacking() -> Self {
        Self::default()
    }
}

impl Frontend for ScriptedFrontend {
    fn choose_action(
        &mut self,
        status: &BattleStatus<'_>,
        available: &[BattleAction],
    ) -> io::Result<BattleAction> {
        self.prompts.push((
            status.turn,
            status.acting().name().to_string(),
            available.to_vec(),
        ));
        Ok(self.script.pop_front().unwrap_or(BattleAction::Attack))
    }

    fn show_events(&mut self, events: &[BattleEvent]) -> io::Result<()> {
        self.events.extend_from_slice(events);
        Ok(())
    }

    fn show_rejection(&mut self, error: &ActionError) -> io::Result<()> {
        self.rejections.push(error.clone());
        Ok(())
    }
}

/// Frontend whose input stream is already closed.
pub struct ClosedFrontend;

impl Frontend for ClosedFrontend {
    fn choose_action(
        &mut self,
        _status: &BattleStatus<'_>,
        _available: &[BattleAction],
    ) -> io::Result<BattleAction> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }

    fn show_events(&mut self, _events: &[BattleEvent]) -> io::Result<()> {
        Ok(())
    }

    fn show_rejection(&mut self, _error: &ActionError) -> io::Result<()> {
        Ok(())
    }
}
