//! Line-by-line signup wizard
//!
//! An alternative to the TUI for plain terminals and scripts. Asks one
//! question per line and reuses the same form and validation.

pub mod prompter;
pub mod steps;
pub mod wizard;

pub use prompter::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use wizard::{PromptWizard, WizardOutcome};
