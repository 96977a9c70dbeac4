//! The shape every selection primitive shares

use super::event::{EventSource, InputEvent, Screen};
use crate::error::ForgeError;
use std::collections::BTreeMap;

/// `Idle -> Active -> {Confirmed | Cancelled}`; the last two are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Idle,
    Active,
    Confirmed,
    Cancelled,
}

/// The value a confirmed prompt produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Key of the chosen option
    Choice(String),
    /// Every selected option key, mapped to `true`
    Choices(BTreeMap<String, bool>),
}

pub trait Prompt {
    /// Enter the `Active` state; there is no separate start event
    fn init(&mut self);

    /// Apply one input event. Ignored unless the prompt is active.
    fn handle(&mut self, event: InputEvent);

    /// Current frame, styled for a terminal
    fn view(&self) -> String;

    fn state(&self) -> PromptState;

    fn is_finished(&self) -> bool {
        matches!(self.state(), PromptState::Confirmed | PromptState::Cancelled)
    }

    /// The confirmed value, handed out once
    fn take_answer(&mut self) -> Option<Answer>;
}

/// Run a prompt until it confirms or cancels, redrawing after every event
pub fn drive(
    prompt: &mut dyn Prompt,
    events: &mut dyn EventSource,
    screen: &mut dyn Screen,
) -> Result<PromptState, ForgeError> {
    prompt.init();
    screen.draw(&prompt.view())?;
    while !prompt.is_finished() {
        let event = events.next_event()?;
        prompt.handle(event);
        if !prompt.is_finished() {
            screen.draw(&prompt.view())?;
        }
    }
    Ok(prompt.state())
}
