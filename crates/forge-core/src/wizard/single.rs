//! Single-choice capture (framework, database driver)

use super::choice::{ChoiceList, StepOption};
use super::event::InputEvent;
use super::prompt::{Answer, Prompt, PromptState};
use crate::project::CancelFlag;

/// At most one option is selected at a time; `y` commits the option under the cursor
pub struct SingleChoicePrompt {
    header: String,
    list: ChoiceList,
    state: PromptState,
    answer: Option<String>,
    cancel: CancelFlag,
}

impl SingleChoicePrompt {
    pub fn new(header: &str, options: Vec<StepOption>, cancel: CancelFlag) -> Self {
        Self {
            header: header.to_string(),
            list: ChoiceList::new(options),
            state: PromptState::Idle,
            answer: None,
            cancel,
        }
    }

    fn toggle(&mut self) {
        let already = self.list.selected.contains(&self.list.cursor);
        self.list.selected.clear();
        if !already {
            self.list.toggle();
        }
    }

    fn confirm(&mut self) {
        if self.list.selected.len() != 1 {
            return;
        }
        if let Some(option) = self.list.current() {
            self.answer = Some(option.key.to_string());
            self.state = PromptState::Confirmed;
        }
    }
}

impl Prompt for SingleChoicePrompt {
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
            InputEvent::Enter | InputEvent::Char(' ') => self.toggle(),
            InputEvent::Char('y') => self.confirm(),
            _ => {}
        }
    }

    fn view(&self) -> String {
        self.list.render(&self.header, "x")
    }

    fn state(&self) -> PromptState {
        self.state
    }

    fn take_answer(&mut self) -> Option<Answer> {
        self.answer.take().map(Answer::Choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Framework;
    use crate::wizard::step::framework_options;

    fn prompt() -> (SingleChoicePrompt, CancelFlag) {
        let flag = CancelFlag::default();
        let mut prompt = SingleChoicePrompt::new("Framework", framework_options(), flag.clone());
        prompt.init();
        (prompt, flag)
    }

    #[test]
    fn test_confirm_requires_a_selection() {
        let (mut prompt, _) = prompt();
        prompt.handle(InputEvent::Char('y'));
        assert_eq!(prompt.state(), PromptState::Active);

        prompt.handle(InputEvent::Down);
        prompt.handle(InputEvent::Enter);
        prompt.handle(InputEvent::Char('y'));
        assert_eq!(prompt.state(), PromptState::Confirmed);
        assert_eq!(
            prompt.take_answer(),
            Some(Answer::Choice(Framework::Chi.key().to_string()))
        );
    }

    #[test]
    fn test_selecting_another_option_replaces_the_first() {
        let (mut prompt, _) = prompt();
        prompt.handle(InputEvent::Char(' '));
        prompt.handle(InputEvent::Char('j'));
        prompt.handle(InputEvent::Char(' '));
        assert_eq!(prompt.list.selected.len(), 1);
        assert!(prompt.list.selected.contains(&1));

        // toggling the selected option again clears it
        prompt.handle(InputEvent::Enter);
        assert!(prompt.list.selected.is_empty());
    }

    #[test]
    fn test_confirm_commits_the_cursor_option() {
        let (mut prompt, _) = prompt();
        prompt.handle(InputEvent::Enter);
        prompt.handle(InputEvent::Down);
        prompt.handle(InputEvent::Down);
        prompt.handle(InputEvent::Char('y'));
        assert_eq!(
            prompt.take_answer(),
            Some(Answer::Choice(Framework::Gin.key().to_string()))
        );
    }

    #[test]
    fn test_q_cancels() {
        let (mut prompt, flag) = prompt();
        prompt.handle(InputEvent::Char('q'));
        assert_eq!(prompt.state(), PromptState::Cancelled);
        assert!(flag.is_cancelled());
    }
}
