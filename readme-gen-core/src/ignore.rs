use std::collections::HashSet;

/// Names always excluded from tree rendering: version-control metadata,
/// dependency and build output directories, caches, editor and OS metadata.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    "__pycache__",
    ".DS_Store",
    ".vscode",
    "node_modules",
    ".pytest_cache",
    "logs",
    "venv",
    "env",
    "FOLDER_STRUCTURE.md",
    "dist",
    "build",
    ".env",
    ".next",
    "target",
    "out",
    ".idea",
    ".vs",
    "bin",
    "obj",
    ".nyc_output",
    "coverage",
    ".cache",
    "tmp",
    "temp",
];

/// Case-sensitive set of entry names to skip during traversal. Built once
/// per render; passed by immutable reference into the recursion so it
/// cannot change mid-walk.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    names: HashSet<String>,
}

impl IgnoreList {
    /// Union of the trimmed custom names and the built-in defaults. Empty
    /// custom names are discarded, duplicates collapse.
    pub fn build(custom: &[String]) -> Self {
        let mut names: HashSet<String> = custom
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        names.extend(DEFAULT_IGNORES.iter().map(|name| name.to_string()));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
