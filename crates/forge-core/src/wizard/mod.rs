//! Interactive selection wizard
//!
//! Each step is backed by a selection primitive modelled as a small state
//! machine (`Idle -> Active -> Confirmed | Cancelled`) fed one input event at a
//! time. Events come from an [`EventSource`] and frames go to a [`Screen`], so
//! the whole wizard runs headless in tests.

mod choice;
pub mod controller;
pub mod event;
pub mod multi;
pub mod prompt;
pub mod single;
pub mod step;
pub mod text;

pub use choice::StepOption;
pub use controller::{Wizard, WizardOutcome};
pub use event::{EventSource, InputEvent, RecordingScreen, Screen, ScriptedEvents};
pub use multi::MultiChoicePrompt;
pub use prompt::{drive, Answer, Prompt, PromptState};
pub use single::SingleChoicePrompt;
pub use step::{default_steps, Binding, Step};
pub use text::TextPrompt;
