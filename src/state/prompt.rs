//! Interactive confirmation, as a swappable capability.
//!
//! Everything is written to stderr so `--json` output on stdout stays parseable.

use crate::error::ApiError;
use dialoguer::console::Term;
use dialoguer::Input;
use owo_colors::OwoColorize;
use std::io::ErrorKind;

/// Operator's answer to a prompt. Cancellation is a reply, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Answer(String),
    Cancelled,
}

pub trait ConfirmationPrompt: Send + Sync {
    /// Show a warning ahead of the question.
    fn alert(&self, warning: &str) -> Result<(), ApiError>;

    /// Ask for free-form input.
    fn ask(&self, message: &str) -> Result<PromptReply, ApiError>;
}

/// Terminal prompt on stderr backed by dialoguer.
pub struct TerminalPrompt {
    color: bool,
}

impl TerminalPrompt {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ConfirmationPrompt for TerminalPrompt {
    fn alert(&self, warning: &str) -> Result<(), ApiError> {
        let term = Term::stderr();
        if self.color {
            term.write_line(&warning.red().to_string())?;
        } else {
            term.write_line(warning)?;
        }
        Ok(())
    }

    fn ask(&self, message: &str) -> Result<PromptReply, ApiError> {
        let term = Term::stderr();
        let result = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text_on(&term);

        match result {
            Ok(answer) => Ok(PromptReply::Answer(answer)),
            Err(dialoguer::Error::IO(e)) => match e.kind() {
                // Ctrl-C in raw mode, or stdin closed
                ErrorKind::Interrupted | ErrorKind::UnexpectedEof => {
                    let _ = term.show_cursor();
                    Ok(PromptReply::Cancelled)
                }
                _ => Err(ApiError::PromptFailed(e.to_string())),
            },
        }
    }
}
