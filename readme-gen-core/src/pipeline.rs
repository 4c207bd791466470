//! High-level pipeline: config gate → project input → tree render →
//! generation → persistence.
//!
//! One invocation owns its request, ignore list and buffers; nothing is
//! shared across runs. Cancellation from the input provider returns
//! immediately with no observable side effect. Every failure past that
//! point propagates as a single descriptive error; retrying is a caller
//! decision, never automatic.

use tracing::{error, info, warn};

use crate::config::GenerationConfig;
use crate::contract::{ConflictDecider, Generator, ProjectSource};
use crate::error::{Error, Result};
use crate::ignore::IgnoreList;
use crate::persist::{save, PersistOutcome};
use crate::tree;

/// Marker a repository link must carry to be accepted.
pub const REPO_HOST_MARKER: &str = "github.com";

/// Terminal state of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Written(PersistOutcome),
    /// The input provider reported user cancellation; nothing happened.
    Cancelled,
}

pub async fn run_pipeline<S, G, D>(
    source: &S,
    generator: &G,
    decider: &D,
    config: &GenerationConfig,
) -> Result<PipelineOutcome>
where
    S: ProjectSource,
    G: Generator,
    D: ConflictDecider,
{
    if config.api_key.trim().is_empty() {
        error!("No API key resolved from settings or environment");
        return Err(Error::Config(
            "Groq API key is not configured. Set it via --api-key, GROQ_API_KEY or GROQ_API_TOKEN."
                .to_string(),
        ));
    }

    let request = match source.obtain_request().await? {
        Some(request) => request,
        None => {
            info!("Project input cancelled, aborting without side effects");
            return Ok(PipelineOutcome::Cancelled);
        }
    };

    validate_repo_link(&request.repo_link)?;

    let ignores = IgnoreList::build(&request.extra_ignores);
    let tree_markdown = match tree::render(&request.workspace_root, &ignores) {
        Ok(rendered) => {
            if !rendered.skipped.is_empty() {
                warn!(
                    skipped = rendered.skipped.len(),
                    "Some entries could not be read during tree rendering"
                );
            }
            Some(rendered.to_markdown(&request.workspace_root))
        }
        Err(e) => {
            // The structure snapshot is an enrichment, not a precondition:
            // generation proceeds without it, as a host UI would.
            warn!(
                error = %e,
                root = %request.workspace_root.display(),
                "Failed to render folder structure, generating without it"
            );
            None
        }
    };

    let document = generator
        .generate(&request, tree_markdown.as_deref(), config)
        .await?;
    let outcome = save(&document.content, &request.workspace_root, decider)?;
    info!(path = %outcome.readme_path.display(), "README generation pipeline complete");
    Ok(PipelineOutcome::Written(outcome))
}

/// Reject missing or unrecognizable repository links before any network or
/// filesystem side effect.
pub fn validate_repo_link(link: &str) -> Result<()> {
    let link = link.trim();
    if link.is_empty() {
        return Err(Error::Validation("Repository link is required".to_string()));
    }
    if !link.contains(REPO_HOST_MARKER) {
        return Err(Error::Validation(format!(
            "'{link}' is not a valid GitHub URL"
        )));
    }
    Ok(())
}
