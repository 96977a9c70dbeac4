//! Cursor and selection state shared by the single and multi choice prompts

use colored::Colorize;
use std::collections::BTreeSet;

/// One selectable item inside a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOption {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub(crate) struct ChoiceList {
    pub options: Vec<StepOption>,
    pub cursor: usize,
    pub selected: BTreeSet<usize>,
}

impl ChoiceList {
    pub fn new(options: Vec<StepOption>) -> Self {
        Self {
            options,
            cursor: 0,
            selected: BTreeSet::new(),
        }
    }

    /// Move up, stopping at the first option
    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move down, stopping at the last option
    pub fn next(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle(&mut self) {
        if self.cursor >= self.options.len() {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    pub fn current(&self) -> Option<&StepOption> {
        self.options.get(self.cursor)
    }

    pub fn render(&self, header: &str, mark: &str) -> String {
        let mut s = format!("{}\n\n", format!(" {} ", header).white().on_blue().bold());

        for (i, option) in self.options.iter().enumerate() {
            let focused = i == self.cursor;
            let cursor = if focused {
                ">".cyan().bold().to_string()
            } else {
                " ".to_string()
            };
            let checked = if self.selected.contains(&i) {
                mark.cyan().bold().to_string()
            } else {
                " ".to_string()
            };
            let (title, description) = if focused {
                (
                    option.title.yellow().bold().to_string(),
                    option.description.yellow().to_string(),
                )
            } else {
                (
                    option.title.cyan().bold().to_string(),
                    option.description.bright_blue().to_string(),
                )
            };
            s.push_str(&format!(
                "{} [{}] {}\n{}\n\n",
                cursor, checked, title, description
            ));
        }

        s.push_str(&format!("Press {} to confirm choice.\n", "y".cyan().bold()));
        s
    }
}
