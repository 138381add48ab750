use inquire::{Confirm, InquireError, Text};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("failed to read a response from the terminal")]
    #[diagnostic(
        code(dirsmith::prompt::interaction),
        help("Use --yes and pass the target as an argument for non-interactive runs.")
    )]
    Interaction(#[from] InquireError),
}

/// Ask whether the previewed structure should be written. Esc counts as a
/// decline, not an error.
pub fn confirm_apply() -> Result<bool, PromptError> {
    match Confirm::new("Create this structure on disk?")
        .with_default(true)
        .with_help_message("Nothing is written until you confirm")
        .prompt()
    {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled) => Ok(false),
        Err(error) => Err(PromptError::Interaction(error)),
    }
}

/// Ask for the target directory when none was given on the command line.
/// An empty answer (or Esc) resolves to `None`.
pub fn get_target() -> Result<Option<PathBuf>, PromptError> {
    let answer = match Text::new("Target directory:")
        .with_help_message("The structure will be created under this directory")
        .prompt()
    {
        Ok(answer) => answer,
        Err(InquireError::OperationCanceled) => return Ok(None),
        Err(error) => return Err(PromptError::Interaction(error)),
    };

    let trimmed = answer.trim();

    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}
