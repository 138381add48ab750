use crate::plan::{EntryKind, Plan};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A node in the preview tree (file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Link every planned entry under its parent. Parents always precede their
/// children in a plan, so a single forward pass suffices.
fn build_tree(plan: &Plan, base: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = base
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| base.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for entry in &plan.entries {
        // a directory staged twice (repeated multi-segment prefix) keeps
        // its first node
        if lookup.contains_key(&entry.path) {
            continue;
        }

        let parent_path = entry.path.parent().unwrap_or_else(|| Path::new(""));

        let parent_node = match lookup.get(parent_path) {
            Some(node) => Rc::clone(node),
            None => {
                log::debug!(
                    "parent {} not staged for {}",
                    parent_path.display(),
                    entry.path.display()
                );
                continue;
            }
        };

        let child_name = entry
            .path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| entry.path.display().to_string());

        let child = Rc::new(RefCell::new(TreeNode::new(
            child_name,
            entry.kind == EntryKind::File,
        )));

        parent_node.borrow_mut().children.push(Rc::clone(&child));

        lookup.insert(entry.path.clone(), child);
    }

    root
}

fn print_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        print_tree(child, &child_prefix, i == len - 1);
    }
}

/// Print the tree a plan would create, rooted at `base`. Directories are
/// blue, files green.
pub fn print_plan(plan: &Plan, base: &Path) {
    let tree_root = build_tree(plan, base);

    println!("{} {}\n", "┌─".bold().bright_blue(), "Preview".bold().bright_blue());

    print_tree(&tree_root, "", true);

    println!(
        "\n{} directories in {}, files in {}\n",
        "└─".bold().bright_blue(),
        "blue".blue(),
        "green".green()
    );
}
