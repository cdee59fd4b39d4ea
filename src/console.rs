//! Terminal driver: styled output, key input, line erasure.
//!
//! Formats crossterm commands to strings and writes those, so the same
//! sequences can be captured verbatim by test drivers.

use std::io::{self, Stdout, Write};

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::Command;

/// Carriage return + newline (raw mode does not translate LF)
pub const CRLF: &str = "\r\n";

/// A key event, reduced to what selection handling needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Cancel,
    Other,
}

/// What panels and selection loops need from a terminal.
pub trait Console {
    /// One-time terminal setup. Safe to call repeatedly.
    fn prepare(&mut self) -> io::Result<()>;

    /// Write one styled run; the colour must not bleed past it.
    fn write_run(&mut self, text: &str, colour: Color) -> io::Result<()>;

    /// End the current output line.
    fn newline(&mut self) -> io::Result<()>;

    /// Block until a key arrives.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Erase the most recently printed line, leaving the cursor at its
    /// start.
    fn clear_last_line(&mut self) -> io::Result<()>;
}

/// Driver for the local terminal over stdout.
pub struct AnsiConsole {
    out: Stdout,
    raw: bool,
}

impl AnsiConsole {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            raw: false,
        }
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())?;
        self.out.flush()
    }
}

impl Default for AnsiConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for AnsiConsole {
    fn prepare(&mut self) -> io::Result<()> {
        if !self.raw {
            terminal::enable_raw_mode()?;
            self.raw = true;
        }
        Ok(())
    }

    fn write_run(&mut self, text: &str, colour: Color) -> io::Result<()> {
        if colour == Color::Reset {
            return self.write_str(text);
        }
        let mut buf = String::new();
        let _ = SetForegroundColor(colour).write_ansi(&mut buf);
        buf.push_str(text);
        let _ = ResetColor.write_ansi(&mut buf);
        self.write_str(&buf)
    }

    fn newline(&mut self) -> io::Result<()> {
        self.write_str(CRLF)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(translate(key));
                }
            }
        }
    }

    fn clear_last_line(&mut self) -> io::Result<()> {
        let mut buf = String::new();
        let _ = cursor::MoveUp(1).write_ansi(&mut buf);
        let _ = Clear(ClearType::CurrentLine).write_ansi(&mut buf);
        let _ = cursor::MoveToColumn(0).write_ansi(&mut buf);
        self.write_str(&buf)
    }
}

impl Drop for AnsiConsole {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Map a crossterm key press to a selection key.
pub fn translate(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Cancel;
    }
    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Confirm,
        KeyCode::Esc => Key::Cancel,
        _ => Key::Other,
    }
}
