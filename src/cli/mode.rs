//! Mode selection from parsed options

use super::Cli;
use crate::error::{PurgeError, Result};
use crate::ui::Prompter;

/// How a mode option supplied its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdInput {
    /// Bare flag (`--courseid`): ask the operator
    Prompt,
    /// Inline value (`--courseid=42`)
    Value(String),
}

impl IdInput {
    fn from_option(option: &Option<String>) -> Option<Self> {
        option.as_ref().map(|value| {
            if value.trim().is_empty() {
                IdInput::Prompt
            } else {
                IdInput::Value(value.clone())
            }
        })
    }

    /// Obtain a validated identifier, prompting if none was given inline
    pub fn resolve<P: Prompter>(&self, kind: IdKind, prompter: &mut P) -> Result<u64> {
        let raw = match self {
            IdInput::Prompt => prompter.prompt(kind.prompt())?,
            IdInput::Value(value) => value.clone(),
        };
        kind.parse(&raw)
    }
}

/// What kind of entity an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Course,
    Category,
    User,
}

impl IdKind {
    /// Prompt shown when asking for this identifier
    pub fn prompt(self) -> &'static str {
        match self {
            IdKind::Course => "Enter the course id",
            IdKind::Category => "Enter the category ID",
            IdKind::User => "Enter the user ID",
        }
    }

    fn invalid_message(self) -> &'static str {
        match self {
            IdKind::Course => "Invalid course number. Aborting...",
            IdKind::Category => "You must specify a valid Category ID. Aborting...",
            IdKind::User => "You must specify a valid User ID. Aborting...",
        }
    }

    /// Parse a positive integer identifier.
    ///
    /// Anything non-numeric or `<= 0` is a usage error: a destructive
    /// operation never proceeds on a malformed identifier.
    pub fn parse(self, raw: &str) -> Result<u64> {
        match raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(id as u64),
            _ => Err(PurgeError::Usage(format!(
                "{} (got '{}')",
                self.invalid_message(),
                raw.trim()
            ))),
        }
    }
}

/// The single action a run performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    Course(IdInput),
    Category(IdInput),
    Teacher(IdInput),
    /// No mode option was given
    Unspecified,
}

impl Mode {
    /// Pick the mode with precedence help > courseid > category > teacher.
    ///
    /// Lower-precedence options are ignored even when present.
    pub fn select(cli: &Cli) -> Mode {
        if cli.help {
            return Mode::Help;
        }
        if let Some(input) = IdInput::from_option(&cli.courseid) {
            return Mode::Course(input);
        }
        if let Some(input) = IdInput::from_option(&cli.category) {
            return Mode::Category(input);
        }
        if let Some(input) = IdInput::from_option(&cli.teacher) {
            return Mode::Teacher(input);
        }
        Mode::Unspecified
    }
}
