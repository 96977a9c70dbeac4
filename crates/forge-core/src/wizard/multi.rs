//! Multi-choice capture (advanced features)

use super::choice::{ChoiceList, StepOption};
use super::event::InputEvent;
use super::prompt::{Answer, Prompt, PromptState};
use crate::project::CancelFlag;
use std::collections::BTreeMap;

pub struct MultiChoicePrompt {
    header: String,
    list: ChoiceList,
    state: PromptState,
    answer: Option<BTreeMap<String, bool>>,
    cancel: CancelFlag,
}

impl MultiChoicePrompt {
    pub fn new(header: &str, options: Vec<StepOption>, cancel: CancelFlag) -> Self {
        Self {
            header: header.to_string(),
            list: ChoiceList::new(options),
            state: PromptState::Idle,
            answer: None,
            cancel,
        }
    }

    /// Every selected key becomes `true`; confirming with nothing selected is allowed
    fn confirm(&mut self) {
        let flags = self
            .list
            .selected
            .iter()
            .filter_map(|&i| self.list.options.get(i))
            .map(|option| (option.key.to_string(), true))
            .collect();
        self.answer = Some(flags);
        self.state = PromptState::Confirmed;
    }
}

impl Prompt for MultiChoicePrompt {
    fn init(&mut self) {
        if self.state == PromptState::Idle {
            self.state = PromptState::Active;
        }
    }

    fn handle(&mut self, event: InputEvent) {
        if self.state != PromptState::Active {
            return;
        }
        match event {
            InputEvent::Cancel | InputEvent::Char('q') => {
                self.cancel.cancel();
                self.state = PromptState::Cancelled;
            }
            InputEvent::Up | InputEvent::Char('k') => self.list.previous(),
            InputEvent::Down | InputEvent::Char('j') => self.list.next(),
            InputEvent::Enter | InputEvent::Char(' ') => self.list.toggle(),
            InputEvent::Char('y') => self.confirm(),
            _ => {}
        }
    }

    fn view(&self) -> String {
        self.list.render(&self.header, "*")
    }

    fn state(&self) -> PromptState {
        self.state
    }

    fn take_answer(&mut self) -> Option<Answer> {
        self.answer.take().map(Answer::Choices)
    }
}
