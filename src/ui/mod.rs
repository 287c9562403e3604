//! UI utilities for terminal interaction
//!
//! This module provides the operator prompts and progress spinners.

mod prompt;
mod spinner;

pub use prompt::{Prompter, TerminalPrompter};
pub use spinner::{create_spinner, finish_spinner_and_clear};
