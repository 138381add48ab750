use crate::plan::{EntryKind, Plan, PlannedEntry};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("no structure provided")]
    #[diagnostic(
        code(dirsmith::parser::empty),
        help("The input had no lines left after dropping blanks and comments.")
    )]
    Empty,
}

/// Vertical continuation glyph on spacer and connector lines.
const VERTICAL: char = '│';

/// Spaces per depth level in plain-indentation mode.
const INDENT_WIDTH: usize = 4;

lazy_static::lazy_static! {
    static ref CONNECTOR: regex::Regex = regex::Regex::new(
        r"(?x)
        (?:├──|└──)     # middle-child or last-child connector
        \s*
        (?P<name>.*)$   # everything after it is the entry name
        "
    ).expect("a valid regex pattern");
}

/// What a single prepared line contributes to the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// The project/root marker. Resets the walk to depth zero.
    Root,
    /// A named entry at the given nesting depth.
    Entry { depth: usize, name: String },
    /// Spacer line or empty name; produces nothing.
    Skip,
}

/// Classify one prepared line (blank/comment lines already dropped, inline
/// comments already stripped). Pure; never touches the filesystem.
///
/// Branches, first match wins:
/// 1. the line equals the project name, with or without a trailing `/`
/// 2. a connector line: depth is the number of `│` glyphs before it
/// 3. verticals but no connector: a spacer
/// 4. plain indentation: depth is leading whitespace divided by 4
pub fn classify(line: &str, project_name: &str) -> Classified {
    let trimmed = line.trim();

    if trimmed.strip_suffix('/').unwrap_or(trimmed) == project_name {
        return Classified::Root;
    }

    if let Some(captures) = CONNECTOR.captures(line) {
        let connector_at = captures.get(0).map_or(0, |m| m.start());
        let depth = line[..connector_at].matches(VERTICAL).count();
        let name = captures["name"].trim().to_string();

        if name.is_empty() {
            return Classified::Skip;
        }

        return Classified::Entry { depth, name };
    }

    if line.contains(VERTICAL) {
        return Classified::Skip;
    }

    let indent = line.chars().take_while(|c| c.is_whitespace()).count();

    if trimmed.is_empty() {
        return Classified::Skip;
    }

    Classified::Entry {
        depth: indent / INDENT_WIDTH,
        name: trimmed.to_string(),
    }
}

/// Parse a tree drawing into a [`Plan`].
///
/// The first meaningful line names the project root. Entries keep the
/// nesting implied by their connectors or indentation; a name with internal
/// separators (`src/utils.py`) contributes one level per component, where
/// every component but the last is a directory. A name is a directory only
/// when it carries a trailing `/`; nothing is inferred from the absence of
/// a file extension.
pub fn parse(text: &str) -> Result<Plan, ParseError> {
    let lines: Vec<String> = text.lines().filter_map(prepare_line).collect();

    let first = lines.first().ok_or(ParseError::Empty)?;
    let first = first.trim();
    let root_name = first.strip_suffix('/').unwrap_or(first).to_string();

    let mut plan = Plan::new(root_name);
    let mut stack: Vec<String> = Vec::new();

    for line in &lines {
        let classified = classify(line, &plan.root_name);

        match classified {
            Classified::Root => stack.clear(),
            Classified::Skip => log::debug!("skipping line: {line}"),
            Classified::Entry { depth, name } => {
                push_entry(&mut plan, &mut stack, depth, &name);
            }
        }
    }

    log::debug!(
        "staged {} operations under '{}'",
        plan.entries.len(),
        plan.root_name
    );

    Ok(plan)
}

/// Strip trailing whitespace and inline comments; drop blank lines and
/// whole-line comments. Leading whitespace survives, the indentation mode
/// needs it.
fn prepare_line(raw: &str) -> Option<String> {
    let line = raw.trim_end();
    let trimmed = line.trim_start();

    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }

    let uncommented = strip_inline_comment(line);
    let uncommented = uncommented.trim_end();

    if uncommented.trim().is_empty() {
        return None;
    }

    Some(uncommented.to_string())
}

/// Truncate at the first unescaped `#`; a `\#` sequence becomes a literal
/// `#` in the name.
fn strip_inline_comment(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                chars.next();
                out.push('#');
            }
            '#' => break,
            _ => out.push(c),
        }
    }

    out
}

/// Reconcile the path stack with one classified entry and stage its
/// operations.
///
/// The stack is cut back to the entry's depth first, so an entry following a
/// deeper branch lands under the right ancestor. Files are staged and then
/// popped straight back off; they never become ancestors of later lines.
fn push_entry(plan: &mut Plan, stack: &mut Vec<String>, depth: usize, name: &str) {
    stack.truncate(depth);

    let is_dir_leaf = name.ends_with('/');
    let components: Vec<&str> = name.split('/').filter(|c| !c.is_empty()).collect();

    if components.is_empty() {
        return;
    }

    let last_index = components.len() - 1;

    for (i, component) in components.iter().enumerate() {
        stack.truncate(depth + i);
        stack.push((*component).to_string());

        let path: PathBuf = stack.iter().collect();

        if i < last_index || is_dir_leaf {
            plan.entries.push(PlannedEntry {
                path,
                kind: EntryKind::Dir,
            });
        } else {
            plan.entries.push(PlannedEntry {
                path,
                kind: EntryKind::File,
            });
            stack.pop();
        }
    }
}
