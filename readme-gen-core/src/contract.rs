//! Collaborator contracts for the generation pipeline.
//!
//! The pipeline never talks to a UI, a settings store or the network layer
//! directly; it goes through the traits below. Each trait is annotated for
//! `mockall` so consumers can generate deterministic mocks for unit and
//! integration tests, mirroring how the real implementations are wired in
//! the CLI crate.

use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

use crate::config::GenerationConfig;
use crate::error::Error;

/// Immutable description of one generation run, gathered by the input
/// provider. Owned by the pipeline for the duration of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRequest {
    /// Free-form project overview; `None` when the user supplied nothing.
    pub overview: Option<String>,
    /// Repository link; must carry a recognizable host marker (github.com).
    pub repo_link: String,
    /// Directory whose structure is rendered and where README.md lands.
    pub workspace_root: PathBuf,
    /// Extra names to exclude from the structure snapshot, raw as entered.
    pub extra_ignores: Vec<String>,
}

/// Resolution for a pre-existing README.md at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Backup,
    Cancel,
}

/// Markdown produced by the generation endpoint, returned verbatim apart
/// from surrounding-whitespace trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub content: String,
}

/// Provider of project input (overview, repo link, ignore names). The CLI
/// assembles this from flags; other hosts may prompt interactively.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Gather the request for this run. `Ok(None)` means the user cancelled;
    /// the pipeline then aborts silently with no side effects.
    async fn obtain_request(&self) -> Result<Option<ProjectRequest>, Error>;
}

/// Decides what happens when the target README already exists. Must return
/// one of the three outcomes; the pipeline never skips the decision.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait ConflictDecider: Send + Sync {
    fn decide(&self, existing: &Path) -> ConflictChoice;
}

/// Produces the README body from the project request, the rendered
/// structure snapshot and the resolved configuration. Implemented by the
/// networked client and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate<'a>(
        &self,
        request: &'a ProjectRequest,
        tree_markdown: Option<&'a str>,
        config: &'a GenerationConfig,
    ) -> Result<GeneratedDocument, Error>;
}
