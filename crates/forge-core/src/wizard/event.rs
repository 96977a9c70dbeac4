//! Input events and the two I/O seams the wizard runs against

use crate::error::ForgeError;
use std::collections::VecDeque;

/// A single key press, already decoded from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Enter,
    /// Esc or Ctrl-C
    Cancel,
}

/// Blocking source of input events
pub trait EventSource {
    fn next_event(&mut self) -> Result<InputEvent, ForgeError>;
}

/// Where prompt frames are drawn
pub trait Screen {
    /// Replace the previous frame with this one
    fn draw(&mut self, frame: &str) -> Result<(), ForgeError>;

    /// Clear the current frame and leave a one-line summary in its place
    fn finish(&mut self, summary: &str) -> Result<(), ForgeError>;
}

/// Pre-recorded events, for tests and headless runs
///
/// Once the script runs out every further read is a cancel, so a prompt can
/// never wait forever on a short script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    /// Append one `Char` event per character
    pub fn typed(mut self, text: &str) -> Self {
        self.queue.extend(text.chars().map(InputEvent::Char));
        self
    }

    pub fn then(mut self, event: InputEvent) -> Self {
        self.queue.push_back(event);
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Result<InputEvent, ForgeError> {
        Ok(self.queue.pop_front().unwrap_or(InputEvent::Cancel))
    }
}

/// Keeps every frame and summary instead of printing them
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    pub frames: Vec<String>,
    pub summaries: Vec<String>,
}

impl RecordingScreen {
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Screen for RecordingScreen {
    fn draw(&mut self, frame: &str) -> Result<(), ForgeError> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn finish(&mut self, summary: &str) -> Result<(), ForgeError> {
        self.summaries.push(summary.to_string());
        Ok(())
    }
}
