//! Runs the steps in order against a project configuration

use super::event::{EventSource, Screen};
use super::prompt::{drive, PromptState};
use super::step::{default_steps, Step};
use crate::error::ForgeError;
use crate::project::ProjectConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Every field is populated
    Completed,
    /// A step was aborted; nothing after it ran
    Cancelled,
}

pub struct Wizard<'a> {
    steps: Vec<Step>,
    events: &'a mut dyn EventSource,
    screen: &'a mut dyn Screen,
}

impl<'a> Wizard<'a> {
    pub fn new(events: &'a mut dyn EventSource, screen: &'a mut dyn Screen) -> Self {
        Self::with_steps(default_steps(), events, screen)
    }

    pub fn with_steps(
        steps: Vec<Step>,
        events: &'a mut dyn EventSource,
        screen: &'a mut dyn Screen,
    ) -> Self {
        Self {
            steps,
            events,
            screen,
        }
    }

    /// Ask every step whose field is still empty
    ///
    /// Strictly forward: there is no way back to an answered step. An invalid
    /// answer aborts the whole run instead of re-asking.
    pub fn run(&mut self, config: &mut ProjectConfig) -> Result<WizardOutcome, ForgeError> {
        for step in &self.steps {
            if step.binding.is_filled(config) {
                tracing::debug!(step = step.name, "pre-filled, skipping");
                continue;
            }

            let mut prompt = step.prompt(config.cancel_flag())?;
            let state = drive(prompt.as_mut(), &mut *self.events, &mut *self.screen)?;

            if config.is_cancelled() || state == PromptState::Cancelled {
                tracing::debug!(step = step.name, "cancelled");
                return Ok(WizardOutcome::Cancelled);
            }

            let answer = prompt
                .take_answer()
                .ok_or_else(|| ForgeError::Unregistered(format!("answer for {}", step.name)))?;
            step.binding.apply(config, answer)?;
            self.screen.finish(&step.summary(config))?;
        }
        Ok(WizardOutcome::Completed)
    }
}
