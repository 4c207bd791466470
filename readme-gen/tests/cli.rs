use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn readme_gen() -> Command {
    let mut cmd = Command::cargo_bin("readme-gen").expect("binary exists");
    // Keep the test hermetic against a developer's real credentials.
    cmd.env_remove("GROQ_API_KEY").env_remove("GROQ_API_TOKEN");
    cmd
}

#[test]
fn tree_prints_a_fenced_snapshot_with_default_ignores_applied() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules").join("junk.js"), "x").unwrap();

    readme_gen()
        .arg("tree")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("```")
                .and(predicate::str::contains("├── a.txt"))
                .and(predicate::str::contains("└── b.txt"))
                .and(predicate::str::contains("node_modules").not()),
        );
}

#[test]
fn tree_honors_extra_ignore_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "k").unwrap();
    fs::write(dir.path().join("drop.txt"), "d").unwrap();

    readme_gen()
        .arg("tree")
        .arg(dir.path())
        .arg("--ignore")
        .arg("drop.txt")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("└── keep.txt")
                .and(predicate::str::contains("drop.txt").not()),
        );
}

#[test]
fn tree_fails_for_a_missing_directory() {
    let dir = tempdir().unwrap();
    readme_gen()
        .arg("tree")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access directory"));
}

#[test]
fn init_env_writes_a_template_and_refuses_to_clobber() {
    let dir = tempdir().unwrap();

    readme_gen()
        .arg("init-env")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".env template created"));
    let template = fs::read_to_string(dir.path().join(".env")).unwrap();
    assert!(template.contains("GROQ_API_KEY="));
    assert!(template.contains("DEFAULT_MODEL=llama-3.3-70b-versatile"));

    readme_gen()
        .arg("init-env")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    readme_gen()
        .arg("init-env")
        .arg(dir.path())
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn config_reports_sources_and_effective_values() {
    readme_gen()
        .arg("config")
        .env_remove("DEFAULT_MODEL")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("GROQ_API_KEY: not set")
                .and(predicate::str::contains("API key: not configured"))
                .and(predicate::str::contains("Model:")),
        );
}

#[test]
fn generate_requires_a_repo_link_argument() {
    readme_gen().arg("generate").assert().failure();
}

#[test]
fn generate_without_an_api_key_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    readme_gen()
        .arg("generate")
        .arg("--repo-link")
        .arg("https://github.com/user/project")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}
