//! Layered configuration resolution: explicit settings, then environment,
//! then built-in defaults, per field. Resolution is a pure function of its
//! three inputs and never fails; an empty API key is rejected only at the
//! point of use by the pipeline.

use std::collections::HashMap;
use tracing::debug;

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_API_KEY_ALT: &str = "GROQ_API_TOKEN";
pub const ENV_DEFAULT_MODEL: &str = "DEFAULT_MODEL";

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Effective settings for one generation run. Resolved once, never
/// persisted by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub auto_open: bool,
}

/// Explicitly stored settings, the highest-priority source. The CLI fills
/// this from flags; other hosts from their settings store.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub auto_open: Option<bool>,
}

/// Snapshot of environment variables, taken once so that resolution does
/// not depend on hidden global lookups.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Built-in fallback values, the lowest-priority source.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub model: String,
    pub auto_open: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            auto_open: true,
        }
    }
}

/// Resolve the effective configuration. Per field, the first non-empty
/// value wins: settings, then environment (primary then alternate name for
/// the key), then defaults. String values are trimmed.
pub fn resolve(settings: &Settings, env: &EnvSource, defaults: &Defaults) -> GenerationConfig {
    let api_key = first_non_empty(&[
        settings.api_key.as_deref(),
        env.get(ENV_API_KEY),
        env.get(ENV_API_KEY_ALT),
    ])
    .unwrap_or_default();

    let model = first_non_empty(&[settings.model.as_deref(), env.get(ENV_DEFAULT_MODEL)])
        .unwrap_or_else(|| defaults.model.clone());

    let auto_open = settings.auto_open.unwrap_or(defaults.auto_open);

    let config = GenerationConfig {
        api_key,
        model,
        auto_open,
    };
    debug!(
        api_key_set = !config.api_key.is_empty(),
        model = %config.model,
        auto_open = config.auto_open,
        "Resolved generation config"
    );
    config
}

fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
