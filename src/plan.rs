use std::path::PathBuf;

/// What a planned entry materializes as on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// A single staged filesystem operation. The path is relative to the base
/// directory the plan is eventually rooted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// The document-ordered list of operations produced by one parse.
///
/// A flat list, not a tree: the builder replays it top to bottom, and the
/// parser's stack already folded the nesting into each entry's relative
/// path.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Project name taken from the first meaningful line of the input.
    pub root_name: String,
    pub entries: Vec<PlannedEntry>,
}
impl Plan {
    pub fn new(root_name: String) -> Self {
        Self {
            root_name,
            entries: Vec::new(),
        }
    }
}
