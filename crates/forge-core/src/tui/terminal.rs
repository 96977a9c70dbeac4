//! Keyboard input and frame drawing on a real terminal

use crate::error::ForgeError;
use crate::wizard::{EventSource, InputEvent, Screen};
use colored::Colorize;
use console::{Key, Term};
use std::io;

/// Map a decoded key onto a wizard event; keys the wizard ignores map to `None`
pub fn map_key(key: Key) -> Option<InputEvent> {
    match key {
        Key::ArrowUp => Some(InputEvent::Up),
        Key::ArrowDown => Some(InputEvent::Down),
        Key::ArrowLeft => Some(InputEvent::Left),
        Key::ArrowRight => Some(InputEvent::Right),
        Key::Enter => Some(InputEvent::Enter),
        Key::Backspace => Some(InputEvent::Backspace),
        Key::Escape | Key::CtrlC => Some(InputEvent::Cancel),
        Key::Char(c) => Some(InputEvent::Char(c)),
        _ => None,
    }
}

/// Reads keys from stderr's terminal
pub struct TermEvents {
    term: Term,
}

impl TermEvents {
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl EventSource for TermEvents {
    fn next_event(&mut self) -> Result<InputEvent, ForgeError> {
        loop {
            match self.term.read_key() {
                Ok(key) => {
                    if let Some(event) = map_key(key) {
                        return Ok(event);
                    }
                }
                // Ctrl-C while the terminal is in raw mode
                Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(InputEvent::Cancel),
                Err(e) => return Err(ForgeError::io("Failed to read from terminal", e)),
            }
        }
    }
}

/// Redraws each frame in place on stderr
pub struct TermScreen {
    term: Term,
    drawn_lines: usize,
}

impl TermScreen {
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
            drawn_lines: 0,
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.drawn_lines > 0 {
            self.term.clear_last_lines(self.drawn_lines)?;
            self.drawn_lines = 0;
        }
        Ok(())
    }

    fn redraw(&mut self, frame: &str) -> io::Result<()> {
        self.clear()?;
        self.term.hide_cursor()?;
        self.term.write_str(frame)?;
        self.drawn_lines = frame.matches('\n').count();
        Ok(())
    }

    fn collapse(&mut self, summary: &str) -> io::Result<()> {
        self.clear()?;
        self.term
            .write_line(&format!("{}  {}", "◇".green(), summary))?;
        self.term.show_cursor()
    }
}

impl Screen for TermScreen {
    fn draw(&mut self, frame: &str) -> Result<(), ForgeError> {
        self.redraw(frame)
            .map_err(|e| ForgeError::io("Failed to draw prompt", e))
    }

    fn finish(&mut self, summary: &str) -> Result<(), ForgeError> {
        self.collapse(summary)
            .map_err(|e| ForgeError::io("Failed to draw prompt", e))
    }
}

impl Drop for TermScreen {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
    }
}
