//! Append-only text transcript of battle events.
//!
//! The transcript is for players, not for debugging: one readable line per
//! [`BattleEvent`], bracketed by an opening and a closing line. Write
//! failures are reported once through `tracing` and never reach the battle.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use arena_core::{BattleEvent, EventSink};
use chrono::Local;

use crate::repository::RepositoryError;

const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Event sink appending timestamped lines to a text file.
pub struct FileBattleLog {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileBattleLog {
    pub const FILE_NAME: &'static str = "battle_log.txt";

    /// Open (or create) the transcript in `dir` and write the opening line.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(RepositoryError::Io)?;

        let path = dir.join(Self::FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(RepositoryError::Io)?;

        let mut log = Self {
            path,
            writer: Some(BufWriter::new(file)),
        };
        log.write_line(&format!(
            "=== Arena battle log opened {} ===",
            Local::now().format(DATE_TIME)
        ));

        tracing::debug!("Opened battle log: {}", log.path.display());

        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False once a write has failed; later events are dropped.
    pub fn is_healthy(&self) -> bool {
        self.writer.is_some()
    }

    fn write_line(&mut self, line: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let result = writeln!(writer, "{line}").and_then(|()| writer.flush());
        if let Err(err) = result {
            tracing::warn!(
                "Battle log {} disabled after write failure: {}",
                self.path.display(),
                err
            );
            self.writer = None;
        }
    }
}

impl EventSink for FileBattleLog {
    fn record(&mut self, event: &BattleEvent) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), event);
        self.write_line(&line);
    }
}

impl Drop for FileBattleLog {
    fn drop(&mut self) {
        let line = format!(
            "=== Arena battle log closed {} ===",
            Local::now().format(DATE_TIME)
        );
        self.write_line(&line);
    }
}
