//! Test support: a scripted console driver.
//!
//! Feeds a fixed key sequence into selection loops and records everything
//! painted, so behaviour can be asserted without a live terminal.

use std::collections::VecDeque;
use std::io;

use crossterm::style::Color;

use crate::console::{Console, Key};

/// A console with scripted input and captured output.
///
/// `screen` mirrors what would be visible (erases pop lines); `lines`
/// keeps the full transcript. When the script runs dry, [`Key::Cancel`]
/// is returned so loops always terminate.
#[derive(Default)]
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    current: String,
    /// Every completed line, in print order, never erased.
    pub lines: Vec<String>,
    /// Every styled run, in print order.
    pub runs: Vec<(String, Color)>,
    /// What the terminal would currently show.
    pub screen: Vec<String>,
    /// Total `clear_last_line` calls.
    pub erased: usize,
    pub prepared: bool,
}

impl ScriptedConsole {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Keys the loop never consumed.
    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Console for ScriptedConsole {
    fn prepare(&mut self) -> io::Result<()> {
        self.prepared = true;
        Ok(())
    }

    fn write_run(&mut self, text: &str, colour: Color) -> io::Result<()> {
        self.current.push_str(text);
        self.runs.push((text.to_string(), colour));
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line.clone());
        self.screen.push(line);
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Cancel))
    }

    fn clear_last_line(&mut self) -> io::Result<()> {
        self.erased += 1;
        self.screen.pop();
        Ok(())
    }
}
