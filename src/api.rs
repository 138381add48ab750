use crate::builder::{self, BuildError, BuildOptions};
use crate::parser::{self, ParseError};
use crate::preview;
use crate::prompt::{self, PromptError};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DirsmithError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] PromptError),
}

/// How an interactive build run ended.
#[derive(Debug)]
pub enum BuildOutcome {
    /// The structure was written; carries the created root path.
    Created(PathBuf),
    /// The user declined at the confirmation prompt; nothing was written.
    Canceled,
}

/// Parse `text`, show the planned tree, confirm, and build it under
/// `target`.
///
/// # Errors
///
/// Returns a [`DirsmithError`] if:
///
/// - the input contains no usable structure,
/// - `target` was not resolved (`None`),
/// - the confirmation prompt fails,
/// - a directory or file cannot be created.
pub fn build(
    text: &str,
    target: Option<&Path>,
    options: &BuildOptions,
) -> Result<BuildOutcome, DirsmithError> {
    let Some(target) = target else {
        return Err(BuildError::NoTarget.into());
    };

    let plan = parser::parse(text)?;

    preview::print_plan(&plan, &builder::resolve_base(&plan, target, options));

    if !options.assume_yes && !prompt::confirm_apply()? {
        return Ok(BuildOutcome::Canceled);
    }

    let created = builder::apply(&plan, target, options)?;

    Ok(BuildOutcome::Created(created))
}

/// Parse `text` and print the tree it would create. The filesystem is never
/// touched.
pub fn preview_only(text: &str) -> Result<(), DirsmithError> {
    let plan = parser::parse(text)?;

    preview::print_plan(&plan, Path::new(&plan.root_name));

    Ok(())
}
