//! Free-text capture (the project name)

use super::event::InputEvent;
use super::prompt::{Answer, Prompt, PromptState};
use crate::error::ValidationError;
use crate::project::CancelFlag;
use colored::Colorize;

/// Longest value the buffer accepts
pub const CHAR_LIMIT: usize = 156;

/// Words of letters and digits, optionally ending in sentence punctuation
fn is_valid_header(header: &str) -> bool {
    let body = header.trim_end_matches(|c: char| matches!(c, '?' | '.' | ':' | '!'));
    !body.trim().is_empty() && body.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

pub struct TextPrompt {
    header: String,
    input: Vec<char>,
    cursor_position: usize,
    state: PromptState,
    answer: Option<String>,
    cancel: CancelFlag,
}

impl TextPrompt {
    pub fn new(header: &str, cancel: CancelFlag) -> Result<Self, ValidationError> {
        if !is_valid_header(header) {
            return Err(ValidationError::InvalidHeader(header.to_string()));
        }
        Ok(Self {
            header: header.to_string(),
            input: Vec::new(),
            cursor_position: 0,
            state: PromptState::Idle,
            answer: None,
            cancel,
        })
    }

    pub fn value(&self) -> String {
        self.input.iter().collect()
    }

    fn insert_char(&mut self, c: char) {
        if self.input.len() < CHAR_LIMIT {
            self.input.insert(self.cursor_position, c);
            self.cursor_position += 1;
        }
    }

    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.input.remove(self.cursor_position);
        }
    }
}

impl Prompt for TextPrompt {
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
            InputEvent::Char(c) if !c.is_control() => self.insert_char(c),
            InputEvent::Backspace => self.delete_char(),
            InputEvent::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            InputEvent::Right => {
                if self.cursor_position < self.input.len() {
                    self.cursor_position += 1;
                }
            }
            // A one-character answer is ignored without feedback
            InputEvent::Enter => {
                if self.input.len() > 1 {
                    self.answer = Some(self.value());
                    self.state = PromptState::Confirmed;
                }
            }
            InputEvent::Cancel => {
                self.cancel.cancel();
                self.state = PromptState::Cancelled;
            }
            _ => {}
        }
    }

    fn view(&self) -> String {
        let before: String = self.input[..self.cursor_position].iter().collect();
        let (under, after) = match self.input.get(self.cursor_position) {
            Some(c) => (
                c.to_string(),
                self.input[self.cursor_position + 1..].iter().collect(),
            ),
            None => (" ".to_string(), String::new()),
        };
        format!(
            "{}\n\n{} {}{}{}\n\n",
            format!(" {} ", self.header).white().on_blue().bold(),
            ">".cyan().bold(),
            before,
            under.reversed(),
            after
        )
    }

    fn state(&self) -> PromptState {
        self.state
    }

    fn take_answer(&mut self) -> Option<Answer> {
        self.answer.take().map(Answer::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(header: &str) -> (TextPrompt, CancelFlag) {
        let flag = CancelFlag::default();
        let mut prompt = TextPrompt::new(header, flag.clone()).unwrap();
        prompt.init();
        (prompt, flag)
    }

    fn type_text(prompt: &mut TextPrompt, text: &str) {
        for c in text.chars() {
            prompt.handle(InputEvent::Char(c));
        }
    }

    #[test]
    fn test_header_check() {
        assert!(is_valid_header("What is the name of your project?"));
        assert!(is_valid_header("Project name"));
        assert!(!is_valid_header(""));
        assert!(!is_valid_header("?"));
        assert!(!is_valid_header("name (required)"));

        let err = TextPrompt::new("bad/header", CancelFlag::default()).err();
        assert_eq!(
            err,
            Some(ValidationError::InvalidHeader("bad/header".to_string()))
        );
    }

    #[test]
    fn test_starts_idle_then_active() {
        let mut prompt = TextPrompt::new("Name", CancelFlag::default()).unwrap();
        assert_eq!(prompt.state(), PromptState::Idle);
        // events before init are dropped
        prompt.handle(InputEvent::Char('x'));
        prompt.init();
        assert_eq!(prompt.state(), PromptState::Active);
        assert_eq!(prompt.value(), "");
    }

    #[test]
    fn test_enter_confirms_value() {
        let (mut prompt, flag) = active("Name");
        type_text(&mut prompt, "demo");
        prompt.handle(InputEvent::Enter);
        assert_eq!(prompt.state(), PromptState::Confirmed);
        assert_eq!(prompt.take_answer(), Some(Answer::Text("demo".to_string())));
        assert_eq!(prompt.take_answer(), None);
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn test_short_input_ignores_enter() {
        let (mut prompt, _) = active("Name");
        prompt.handle(InputEvent::Enter);
        assert_eq!(prompt.state(), PromptState::Active);

        type_text(&mut prompt, "a");
        prompt.handle(InputEvent::Enter);
        assert_eq!(prompt.state(), PromptState::Active);

        type_text(&mut prompt, "b");
        prompt.handle(InputEvent::Enter);
        assert_eq!(prompt.state(), PromptState::Confirmed);
    }

    #[test]
    fn test_cancel_sets_shared_flag() {
        let (mut prompt, flag) = active("Name");
        type_text(&mut prompt, "demo");
        prompt.handle(InputEvent::Cancel);
        assert_eq!(prompt.state(), PromptState::Cancelled);
        assert!(flag.is_cancelled());
        assert_eq!(prompt.take_answer(), None);

        // terminal state absorbs further input
        prompt.handle(InputEvent::Enter);
        assert_eq!(prompt.state(), PromptState::Cancelled);
    }

    #[test]
    fn test_editing_and_limit() {
        let (mut prompt, _) = active("Name");
        type_text(&mut prompt, "dmo");
        prompt.handle(InputEvent::Left);
        prompt.handle(InputEvent::Left);
        type_text(&mut prompt, "e");
        assert_eq!(prompt.value(), "demo");
        prompt.handle(InputEvent::Right);
        prompt.handle(InputEvent::Backspace);
        assert_eq!(prompt.value(), "deo");

        let (mut prompt, _) = active("Name");
        type_text(&mut prompt, &"x".repeat(CHAR_LIMIT + 10));
        assert_eq!(prompt.value().len(), CHAR_LIMIT);
    }
}
