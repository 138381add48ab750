use crate::errors::{FileOperation, IoError};
use crate::parser::{self, ParseError};
use crate::plan::{EntryKind, Plan};
use colored::Colorize;
use miette::Diagnostic;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error("no target directory selected")]
    #[diagnostic(
        code(dirsmith::builder::no_target),
        help("Pass a target directory on the command line or answer the prompt.")
    )]
    NoTarget,
}

/// Knobs for a single build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Root the structure in a `<target>/<project>` subfolder instead of
    /// directly under the target.
    pub create_subfolder: bool,
    /// Skip the interactive confirmation before writing.
    pub assume_yes: bool,
}
impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            create_subfolder: true,
            assume_yes: false,
        }
    }
}

/// The directory the parsed structure is rooted under.
pub fn resolve_base(plan: &Plan, target: &Path, options: &BuildOptions) -> PathBuf {
    if options.create_subfolder {
        target.join(&plan.root_name)
    } else {
        target.to_path_buf()
    }
}

/// Parse `text` and materialize it under `target` in one synchronous pass.
///
/// Re-running with the same input is safe: directories already present are
/// reused, and an already-present file is re-truncated to empty. The first
/// failing operation aborts the run and whatever was created up to that
/// point stays on disk.
pub fn build(text: &str, target: &Path, options: &BuildOptions) -> Result<PathBuf, BuildError> {
    let plan = parser::parse(text)?;

    apply(&plan, target, options)
}

/// Replay a staged plan against the filesystem, in document order.
///
/// The base directory is created up front so it exists before any child
/// entry. Returns the created root: the project subfolder when
/// `create_subfolder` is on, the target itself otherwise.
pub fn apply(plan: &Plan, target: &Path, options: &BuildOptions) -> Result<PathBuf, BuildError> {
    let base = resolve_base(plan, target, options);

    create_directory(&base)?;

    for entry in &plan.entries {
        let full_path = base.join(&entry.path);

        match entry.kind {
            EntryKind::Dir => create_directory(&full_path)?,
            EntryKind::File => {
                if let Some(parent) = full_path.parent() {
                    create_directory(parent)?;
                }
                create_empty_file(&full_path)?;
            }
        }
    }

    Ok(base)
}

fn create_directory(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    log::debug!("mkdir {}", path.display());

    Ok(())
}

/// Creates the file empty; an existing regular file is truncated, an
/// existing directory of the same name surfaces as the wrapped OS error.
fn create_empty_file(path: &Path) -> Result<(), IoError> {
    fs::File::create(path)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Project/
├── src/
│   ├── main.py
│   └── utils.py
├── tests/
│   └── test_main.py
└── README.md
";

    #[test]
    fn builds_the_documented_layout() {
        let target = tempfile::tempdir().unwrap();

        let created = build(EXAMPLE, target.path(), &BuildOptions::default()).unwrap();

        assert_eq!(created, target.path().join("Project"));
        assert!(created.join("src").is_dir());
        assert!(created.join("tests").is_dir());
        for file in ["src/main.py", "src/utils.py", "tests/test_main.py", "README.md"] {
            let path = created.join(file);
            assert!(path.is_file(), "{file} should exist");
            assert_eq!(fs::metadata(&path).unwrap().len(), 0, "{file} should be empty");
        }
    }

    #[test]
    fn no_subfolder_roots_directly_at_target() {
        let target = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            create_subfolder: false,
            ..Default::default()
        };

        let created = build(EXAMPLE, target.path(), &options).unwrap();

        assert_eq!(created, target.path());
        assert!(!target.path().join("Project").exists());
        assert!(target.path().join("src/main.py").is_file());
        assert!(target.path().join("README.md").is_file());
    }

    #[test]
    fn rerun_is_idempotent_and_retruncates_files() {
        let target = tempfile::tempdir().unwrap();

        let created = build(EXAMPLE, target.path(), &BuildOptions::default()).unwrap();

        fs::write(created.join("README.md"), "leftover").unwrap();

        let again = build(EXAMPLE, target.path(), &BuildOptions::default()).unwrap();

        assert_eq!(created, again);
        assert_eq!(fs::metadata(created.join("README.md")).unwrap().len(), 0);
    }

    #[test]
    fn file_colliding_with_existing_directory_fails() {
        let target = tempfile::tempdir().unwrap();

        fs::create_dir_all(target.path().join("Project/README.md")).unwrap();

        let result = build(EXAMPLE, target.path(), &BuildOptions::default());

        assert!(matches!(result, Err(BuildError::Io(_))));
    }

    #[test]
    fn partial_tree_stays_on_disk_after_a_failure() {
        let target = tempfile::tempdir().unwrap();

        // the collision sits at the last entry, everything before it lands
        fs::create_dir_all(target.path().join("Project/README.md")).unwrap();

        let result = build(EXAMPLE, target.path(), &BuildOptions::default());

        assert!(result.is_err());
        assert!(target.path().join("Project/src/main.py").is_file());
        assert!(target.path().join("Project/tests/test_main.py").is_file());
    }
}
