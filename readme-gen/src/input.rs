//! Concrete collaborator implementations for the terminal: project input
//! assembled from flags, conflict decisions from a flag or a prompt.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use readme_gen_core::contract::{ConflictChoice, ConflictDecider, ProjectRequest, ProjectSource};
use readme_gen_core::error::Error;

/// Project input assembled from command-line flags. Non-interactive, so it
/// never reports cancellation.
pub struct ArgsProjectSource {
    request: ProjectRequest,
}

impl ArgsProjectSource {
    pub fn new(
        overview: Option<String>,
        repo_link: String,
        workspace_root: PathBuf,
        extra_ignores: Vec<String>,
    ) -> Self {
        Self {
            request: ProjectRequest {
                overview: overview
                    .map(|overview| overview.trim().to_string())
                    .filter(|overview| !overview.is_empty()),
                repo_link: repo_link.trim().to_string(),
                workspace_root,
                extra_ignores,
            },
        }
    }
}

#[async_trait]
impl ProjectSource for ArgsProjectSource {
    async fn obtain_request(&self) -> Result<Option<ProjectRequest>, Error> {
        Ok(Some(self.request.clone()))
    }
}

/// Resolves README conflicts from an `--on-conflict` flag when given,
/// otherwise by asking on the terminal. Unrecognized or unreadable input
/// counts as cancel.
pub struct CliConflictDecider {
    policy: Option<ConflictChoice>,
}

impl CliConflictDecider {
    pub fn new(policy: Option<ConflictChoice>) -> Self {
        Self { policy }
    }
}

impl ConflictDecider for CliConflictDecider {
    fn decide(&self, existing: &Path) -> ConflictChoice {
        if let Some(choice) = self.policy {
            info!(choice = ?choice, "Resolving README conflict from flag");
            return choice;
        }
        prompt_choice(existing)
    }
}

fn prompt_choice(existing: &Path) -> ConflictChoice {
    eprintln!(
        "{} already exists. [o]verwrite, [b]ackup then write, or [c]ancel?",
        existing.display()
    );
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return ConflictChoice::Cancel;
    }
    match line.trim().to_lowercase().as_str() {
        "o" | "overwrite" => ConflictChoice::Overwrite,
        "b" | "backup" => ConflictChoice::Backup,
        _ => ConflictChoice::Cancel,
    }
}
