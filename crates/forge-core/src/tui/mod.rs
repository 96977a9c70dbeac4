//! Terminal front end: cliclack chrome around the headless wizard
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
pub mod terminal;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};
#[cfg(feature = "tui")]
pub use terminal::{TermEvents, TermScreen};
