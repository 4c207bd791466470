//! Command parsing and subcommand routing. Keep non-trivial business logic
//! in `readme-gen-core`; this module only assembles collaborators and
//! reports outcomes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use readme_gen_core::client::GroqClient;
use readme_gen_core::config::{self, Defaults, EnvSource, Settings};
use readme_gen_core::contract::ConflictChoice;
use readme_gen_core::error::Error;
use readme_gen_core::ignore::IgnoreList;
use readme_gen_core::pipeline::{run_pipeline, PipelineOutcome};
use readme_gen_core::tree;

use crate::input::{ArgsProjectSource, CliConflictDecider};

const ENV_TEMPLATE: &str = "# readme-gen configuration\n\
GROQ_API_KEY=your_groq_api_key_here\n\
DEFAULT_MODEL=llama-3.3-70b-versatile\n\
\n\
# Get your API key from: https://console.groq.com/keys\n\
# Available models: llama-3.3-70b-versatile, llama-3.1-70b-versatile, mixtral-8x7b-32768\n";

/// CLI for readme-gen: project READMEs from directory snapshots and an LLM.
#[derive(Parser)]
#[clap(
    name = "readme-gen",
    version,
    about = "Generate a project README from its directory structure with an LLM"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate README.md for a project directory
    Generate {
        /// GitHub repository link (e.g. https://github.com/username/project)
        #[clap(long)]
        repo_link: String,
        /// Short project overview to include in the README
        #[clap(long)]
        overview: Option<String>,
        /// Project directory
        #[clap(long, default_value = ".")]
        dir: PathBuf,
        /// Additional comma-separated names to exclude from the structure snapshot
        #[clap(long)]
        ignore: Option<String>,
        /// Groq API key (overrides GROQ_API_KEY / GROQ_API_TOKEN)
        #[clap(long)]
        api_key: Option<String>,
        /// Model to use (overrides DEFAULT_MODEL)
        #[clap(long)]
        model: Option<String>,
        /// Decision for a pre-existing README.md; prompts when omitted
        #[clap(long, value_enum)]
        on_conflict: Option<ConflictPolicy>,
        /// Do not open the generated README afterwards
        #[clap(long)]
        no_open: bool,
    },
    /// Print the fenced folder-structure snapshot without calling the API
    Tree {
        /// Directory to render
        #[clap(default_value = ".")]
        dir: PathBuf,
        /// Additional comma-separated names to exclude
        #[clap(long)]
        ignore: Option<String>,
    },
    /// Show where configuration values come from and their effective values
    Config,
    /// Write a commented .env template into the given directory
    InitEnv {
        /// Target directory
        #[clap(default_value = ".")]
        dir: PathBuf,
        /// Overwrite an existing .env file
        #[clap(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ConflictPolicy {
    Overwrite,
    Backup,
    Cancel,
}

impl From<ConflictPolicy> for ConflictChoice {
    fn from(policy: ConflictPolicy) -> Self {
        match policy {
            ConflictPolicy::Overwrite => ConflictChoice::Overwrite,
            ConflictPolicy::Backup => ConflictChoice::Backup,
            ConflictPolicy::Cancel => ConflictChoice::Cancel,
        }
    }
}

/// Extracted async CLI entrypoint for integration tests and main().
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            repo_link,
            overview,
            dir,
            ignore,
            api_key,
            model,
            on_conflict,
            no_open,
        } => {
            generate(
                repo_link, overview, dir, ignore, api_key, model, on_conflict, no_open,
            )
            .await
        }
        Commands::Tree { dir, ignore } => print_tree(&dir, ignore.as_deref()),
        Commands::Config => show_config(),
        Commands::InitEnv { dir, force } => init_env(&dir, force),
    }
}

#[allow(clippy::too_many_arguments)]
async fn generate(
    repo_link: String,
    overview: Option<String>,
    dir: PathBuf,
    ignore: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    on_conflict: Option<ConflictPolicy>,
    no_open: bool,
) -> Result<()> {
    let settings = Settings {
        api_key,
        model,
        auto_open: no_open.then_some(false),
    };
    let resolved = config::resolve(&settings, &EnvSource::from_process(), &Defaults::default());

    let root = dir
        .canonicalize()
        .with_context(|| format!("Cannot access project directory '{}'", dir.display()))?;
    let source = ArgsProjectSource::new(overview, repo_link, root, split_ignores(ignore.as_deref()));
    let decider = CliConflictDecider::new(on_conflict.map(ConflictChoice::from));
    let client = GroqClient::new();

    match run_pipeline(&source, &client, &decider, &resolved).await {
        Ok(PipelineOutcome::Written(outcome)) => {
            println!("README generated: {}", outcome.readme_path.display());
            if let Some(backup) = &outcome.backup_path {
                println!("Backup created: {}", backup.display());
            }
            if resolved.auto_open {
                open_in_viewer(&outcome.readme_path);
            }
            Ok(())
        }
        Ok(PipelineOutcome::Cancelled) => {
            info!("Generation cancelled before any side effect");
            Ok(())
        }
        Err(Error::PersistenceCancelled) => {
            println!("Cancelled; existing README.md left untouched.");
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to generate README")),
    }
}

fn print_tree(dir: &Path, ignore: Option<&str>) -> Result<()> {
    let root = dir
        .canonicalize()
        .with_context(|| format!("Cannot access directory '{}'", dir.display()))?;
    let ignores = IgnoreList::build(&split_ignores(ignore));
    let rendered = tree::render(&root, &ignores)?;
    if !rendered.skipped.is_empty() {
        warn!(
            skipped = rendered.skipped.len(),
            "Some entries could not be read"
        );
    }
    println!("{}", rendered.to_markdown(&root));
    Ok(())
}

fn show_config() -> Result<()> {
    let env = EnvSource::from_process();
    let resolved = config::resolve(&Settings::default(), &env, &Defaults::default());

    println!("Configuration sources (highest priority first): flags, environment, defaults");
    for name in [config::ENV_API_KEY, config::ENV_API_KEY_ALT] {
        match env.get(name).map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => println!("  {name}: set ({})", mask(value)),
            None => println!("  {name}: not set"),
        }
    }
    match env
        .get(config::ENV_DEFAULT_MODEL)
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        Some(value) => println!("  {}: {value}", config::ENV_DEFAULT_MODEL),
        None => println!("  {}: not set", config::ENV_DEFAULT_MODEL),
    }

    println!();
    println!("Effective values:");
    if resolved.api_key.is_empty() {
        println!("  API key: not configured");
    } else {
        println!("  API key: {}", mask(&resolved.api_key));
    }
    println!("  Model: {}", resolved.model);
    println!("  Auto open: {}", resolved.auto_open);
    Ok(())
}

fn init_env(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(".env");
    if path.exists() && !force {
        bail!(
            ".env already exists at '{}' (use --force to overwrite)",
            path.display()
        );
    }
    fs::write(&path, ENV_TEMPLATE)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    println!(".env template created: {}", path.display());
    Ok(())
}

fn split_ignores(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn mask(value: &str) -> String {
    let prefix: String = value.chars().take(8).collect();
    format!("{prefix}...")
}

/// Best-effort hand-off to the platform opener; failure is logged, never
/// fatal.
fn open_in_viewer(path: &Path) {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else {
        std::process::Command::new("xdg-open")
    };
    match command.arg(path).spawn() {
        Ok(_) => info!(path = %path.display(), "Opened README in system viewer"),
        Err(e) => warn!(error = %e, path = %path.display(), "Could not open README automatically"),
    }
}
