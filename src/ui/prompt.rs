//! Operator prompts for identifiers and destructive confirmations

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Source of operator answers
pub trait Prompter {
    /// Show `text`, read one line, return it trimmed.
    ///
    /// End of input yields an empty answer.
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Ask a yes/no question. Only "y" (any case) counts as yes.
    ///
    /// Non-letters are dropped before comparing, so "Y." is still yes while
    /// "yes", "n" and an empty answer are all no.
    fn confirm(&mut self, text: &str) -> Result<bool> {
        let answer: String = self
            .prompt(text)?
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        Ok(answer.to_lowercase() == "y")
    }
}

/// Prompter reading lines from `input` and writing prompts to `output`
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}: ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<String>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_prompt_writes_text_and_trims_answer() {
        let mut p = prompter("  42  \n");
        assert_eq!(p.prompt("Enter the course id").unwrap(), "42");
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "Enter the course id: ");
    }

    #[test]
    fn test_prompt_reads_one_line_at_a_time() {
        let mut p = prompter("first\nsecond\n");
        assert_eq!(p.prompt("a").unwrap(), "first");
        assert_eq!(p.prompt("b").unwrap(), "second");
    }

    #[test]
    fn test_prompt_at_eof_is_empty() {
        let mut p = prompter("");
        assert_eq!(p.prompt("anything").unwrap(), "");
    }

    #[test]
    fn test_confirm_accepts_y_any_case() {
        assert!(prompter("y\n").confirm("Delete? (Y/N)").unwrap());
        assert!(prompter("Y\n").confirm("Delete? (Y/N)").unwrap());
        assert!(prompter(" y.\n").confirm("Delete? (Y/N)").unwrap());
    }

    #[test]
    fn test_confirm_everything_else_is_no() {
        for answer in ["n\n", "yes\n", "\n", "", "1\n", "sure\n"] {
            assert!(!prompter(answer).confirm("Delete? (Y/N)").unwrap(), "{answer:?}");
        }
    }
}
