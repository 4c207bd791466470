//! Deterministic directory-tree rendering.
//!
//! Entries are sorted byte-wise by name before emission, so two renders of
//! the same snapshot with the same ignore list are byte-identical. The only
//! local error recovery in this crate lives here: an entry that cannot be
//! listed or stat-ed is logged, recorded in the result and skipped, and the
//! walk continues with the next sibling. Only an unreadable root is fatal.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::ignore::IgnoreList;

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// Fixed name → comment table; only a handful of well-known filenames carry
/// an annotation, everything else renders bare.
fn annotation(name: &str) -> Option<&'static str> {
    match name {
        "app.py" => Some("main FastAPI app"),
        "README.md" => Some("Project documentation"),
        ".gitignore" => Some("gitignore file for GitHub"),
        "__init__.py" => Some("initializes package"),
        "log.py" => Some("main logic"),
        "models.py" => Some("models"),
        _ => None,
    }
}

/// One rendered snapshot: the emitted lines plus every path skipped by
/// local error recovery (one record per failed entry).
#[derive(Debug, Default)]
pub struct RenderedTree {
    pub lines: Vec<String>,
    pub skipped: Vec<PathBuf>,
}

impl RenderedTree {
    /// Wrap the root folder name and the emitted lines in a fenced block.
    /// Presentation only; the recursive walk knows nothing about fences.
    pub fn to_markdown(&self, root: &Path) -> String {
        let mut doc = String::from("```\n");
        doc.push_str(&root_basename(root));
        doc.push('/');
        for line in &self.lines {
            doc.push('\n');
            doc.push_str(line);
        }
        doc.push_str("\n```");
        doc
    }
}

fn root_basename(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Render the directory snapshot under `root`, applying `ignores`. Fails
/// only when the root itself cannot be listed.
pub fn render(root: &Path, ignores: &IgnoreList) -> Result<RenderedTree> {
    let mut tree = RenderedTree::default();
    walk(root, "", ignores, &mut tree, true)?;
    info!(
        root = %root.display(),
        lines = tree.lines.len(),
        skipped = tree.skipped.len(),
        "Rendered directory tree"
    );
    Ok(tree)
}

fn walk(
    dir: &Path,
    prefix: &str,
    ignores: &IgnoreList,
    tree: &mut RenderedTree,
    is_root: bool,
) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) if is_root => {
            return Err(Error::FileSystem {
                path: dir.to_path_buf(),
                source,
            })
        }
        Err(source) => {
            warn!(path = %dir.display(), error = %source, "Cannot read directory, skipping");
            tree.skipped.push(dir.to_path_buf());
            return Ok(());
        }
    };

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Err(source) => {
                warn!(path = %dir.display(), error = %source, "Cannot read directory entry, skipping");
                tree.skipped.push(dir.to_path_buf());
            }
        }
    }
    // Byte-wise name ordering keeps renders identical across platforms.
    names.sort();
    names.retain(|name| !ignores.contains(name));

    let last_index = names.len().checked_sub(1);
    for (index, name) in names.iter().enumerate() {
        let path = dir.join(name);
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "Cannot stat entry, skipping");
                tree.skipped.push(path);
                continue;
            }
        };

        let is_last = Some(index) == last_index;
        let connector = if is_last { LAST } else { BRANCH };
        let mut line = format!("{prefix}{connector}{name}");
        if let Some(comment) = annotation(name) {
            line.push_str("  # ");
            line.push_str(comment);
        }
        tree.lines.push(line);

        if metadata.is_dir() {
            let extension = if is_last { BLANK } else { CONTINUATION };
            walk(&path, &format!("{prefix}{extension}"), ignores, tree, false)?;
        }
    }
    Ok(())
}
