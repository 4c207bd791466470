use std::fs;
use std::path::Path;

use readme_gen_core::error::Error;
use readme_gen_core::ignore::{IgnoreList, DEFAULT_IGNORES};
use readme_gen_core::tree;
use tempfile::tempdir;

fn touch(path: &Path) {
    fs::write(path, b"").expect("create file");
}

#[test]
fn renders_sorted_entries_with_connectors() {
    let dir = tempdir().unwrap();
    // Created out of order on purpose; output must be sorted.
    touch(&dir.path().join("b"));
    touch(&dir.path().join("a"));
    touch(&dir.path().join("c"));

    let rendered = tree::render(dir.path(), &IgnoreList::build(&[])).unwrap();
    assert_eq!(rendered.lines, vec!["├── a", "├── b", "└── c"]);
    assert!(rendered.skipped.is_empty());
}

#[test]
fn nested_directories_extend_the_prefix() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    touch(&dir.path().join("src").join("main.rs"));
    touch(&dir.path().join("zz.txt"));

    let rendered = tree::render(dir.path(), &IgnoreList::build(&[])).unwrap();
    // "src" has a later sibling, so its children sit under a continuation column.
    assert_eq!(
        rendered.lines,
        vec!["├── src", "│   └── main.rs", "└── zz.txt"]
    );
}

#[test]
fn last_directory_gets_a_blank_continuation() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.txt"));
    fs::create_dir(dir.path().join("src")).unwrap();
    touch(&dir.path().join("src").join("main.rs"));

    let rendered = tree::render(dir.path(), &IgnoreList::build(&[])).unwrap();
    assert_eq!(
        rendered.lines,
        vec!["├── a.txt", "└── src", "    └── main.rs"]
    );
}

#[test]
fn two_renders_of_the_same_snapshot_are_byte_identical() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src").join("api")).unwrap();
    touch(&dir.path().join("src").join("api").join("routes.rs"));
    touch(&dir.path().join("src").join("lib.rs"));
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    touch(&dir.path().join("node_modules").join("junk.js"));
    touch(&dir.path().join("Cargo.toml"));

    let ignores = IgnoreList::build(&["scratch".to_string()]);
    let first = tree::render(dir.path(), &ignores).unwrap();
    let second = tree::render(dir.path(), &ignores).unwrap();
    assert_eq!(first.lines, second.lines);
    assert_eq!(
        first.to_markdown(dir.path()),
        second.to_markdown(dir.path())
    );
}

#[test]
fn emits_one_line_per_surviving_entry() {
    let dir = tempdir().unwrap();
    for name in ["one.txt", "two.txt", "three.txt"] {
        touch(&dir.path().join(name));
    }
    // Default-ignored and custom-ignored entries must not produce lines.
    fs::create_dir(dir.path().join(".git")).unwrap();
    touch(&dir.path().join(".git").join("HEAD"));
    fs::create_dir(dir.path().join("scratch")).unwrap();
    touch(&dir.path().join("scratch").join("notes.md"));

    let ignores = IgnoreList::build(&["scratch".to_string()]);
    let rendered = tree::render(dir.path(), &ignores).unwrap();
    assert_eq!(rendered.lines.len(), 3);
}

#[test]
fn well_known_filenames_carry_annotations() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("README.md"));
    touch(&dir.path().join("app.py"));

    let rendered = tree::render(dir.path(), &IgnoreList::build(&[])).unwrap();
    assert_eq!(
        rendered.lines,
        vec![
            "├── README.md  # Project documentation",
            "└── app.py  # main FastAPI app"
        ]
    );
}

#[test]
fn markdown_wraps_lines_in_a_fenced_block_under_the_root_name() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("main.rs"));

    let rendered = tree::render(dir.path(), &IgnoreList::build(&[])).unwrap();
    let doc = rendered.to_markdown(dir.path());
    let folder = dir.path().file_name().unwrap().to_string_lossy();
    assert!(doc.starts_with("```\n"));
    assert!(doc.contains(&format!("{folder}/\n└── main.rs")));
    assert!(doc.ends_with("\n```"));
}

#[test]
fn unreadable_root_is_a_filesystem_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = tree::render(&missing, &IgnoreList::build(&[])).unwrap_err();
    assert!(matches!(err, Error::FileSystem { .. }));
}

#[test]
fn ignore_list_collapses_duplicates_against_defaults() {
    // "coverage" is already a built-in default; repeating it must not
    // create additional memberships.
    let with_duplicates =
        IgnoreList::build(&["coverage".to_string(), "coverage".to_string()]);
    let plain = IgnoreList::build(&[]);
    assert!(with_duplicates.contains("coverage"));
    assert_eq!(with_duplicates.len(), plain.len());
    assert_eq!(plain.len(), DEFAULT_IGNORES.len());
}

#[test]
fn ignore_list_trims_custom_names_and_drops_empties() {
    let ignores = IgnoreList::build(&["  scratch  ".to_string(), "   ".to_string()]);
    assert!(ignores.contains("scratch"));
    assert!(!ignores.contains("  scratch  "));
    assert_eq!(ignores.len(), DEFAULT_IGNORES.len() + 1);
}
