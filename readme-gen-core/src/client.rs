//! Networked README generator against the Groq chat-completion endpoint.
//!
//! Groq exposes an OpenAI-compatible API. One request per run, fixed
//! generation parameters, a 30-second timeout and no automatic retries;
//! every failure mode maps to one kind of [`Error`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use crate::config::GenerationConfig;
use crate::contract::{GeneratedDocument, Generator, ProjectRequest};
use crate::error::{Error, Result};

pub const GROQ_API_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 4000;

const NO_OVERVIEW_PLACEHOLDER: &str = "No specific project description provided.";
const NO_TREE_PLACEHOLDER: &str = "No folder structure provided.";

/// Reference README embedded into the system instruction to anchor the
/// output format and pin the installation/usage wording.
const SAMPLE_README: &str = include_str!("../templates/prompt.md");

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: u8,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Groq client
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GroqClient {
    pub fn new() -> Self {
        Self::with_endpoint(GROQ_API_ENDPOINT)
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GroqClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for GroqClient {
    async fn generate<'a>(
        &self,
        request: &'a ProjectRequest,
        tree_markdown: Option<&'a str>,
        config: &'a GenerationConfig,
    ) -> Result<GeneratedDocument, Error> {
        let body = ChatRequest {
            model: &config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(request, tree_markdown),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: 1,
            stream: false,
        };

        info!(model = %config.model, endpoint = %self.endpoint, "Requesting README generation");
        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.endpoint, "Failed to obtain a response from the generation endpoint");
                if e.is_timeout() {
                    Error::Network("Request to Groq API timed out".to_string())
                } else {
                    Error::Network("Unable to connect to Groq API".to_string())
                }
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read generation response body");
            Error::Network("Unable to read response from Groq API".to_string())
        })?;

        let content = classify_response(status, &text)?;
        info!(bytes = content.len(), "README generated successfully");
        Ok(GeneratedDocument { content })
    }
}

/// Map a status/body pair to the error taxonomy, or extract the completion
/// content on success. Pure, so the mapping is testable without a server.
fn classify_response(status: u16, body: &str) -> Result<String> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| "Unknown API error".to_string());
        return Err(Error::Api { status, message });
    }

    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::InvalidResponse(format!("not a chat-completion payload: {e}")))?;
    let content = parsed
        .choices
        .and_then(|mut choices| {
            if choices.is_empty() {
                None
            } else {
                Some(choices.remove(0))
            }
        })
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            Error::InvalidResponse("missing choices[0].message.content".to_string())
        })?;
    Ok(content.trim().to_string())
}

fn system_prompt() -> String {
    format!(
        "You are a GitHub README generator that creates clear, professional and visually engaging \
         README files using markdown formatting. You will be provided with project details: an \
         overview, a GitHub repository link and optionally a folder structure.\n\
         \n\
         Your task:\n\
         - Generate a complete README using markdown only.\n\
         - Use sections in the following order: Title, Overview, Features, Technology Stack, \
         Installation, Usage, API Endpoints (if applicable), Project Structure (include this \
         section *only* if a folder structure is provided), Future Enhancements, Contribution \
         Guidelines, License, Author.\n\
         - Format section headers with markdown syntax (##, ###) and use bullet points, code \
         blocks and section dividers (---) where appropriate.\n\
         - For the author, use the username from the repository link; if unavailable, use \
         \"Your Name\".\n\
         - Use the MIT License for the license section.\n\
         \n\
         Follow these rules strictly:\n\
         - Give the installation steps exactly as provided in the reference README below. Do not \
         modify the installation steps.\n\
         - Give the usage instructions exactly as provided in the reference README below. Do not \
         modify the usage instructions.\n\
         - Return *only* the final README content in markdown. No commentary, no explanation, no \
         lines like \"Here is the README:\".\n\
         \n\
         Use the following sample README as a reference for structure and formatting:\n\
         \n\
         {SAMPLE_README}\n\
         \n\
         Ensure the output closely follows this format. Be concise, complete and clear."
    )
}

fn user_prompt(request: &ProjectRequest, tree_markdown: Option<&str>) -> String {
    let overview = request
        .overview
        .as_deref()
        .map(str::trim)
        .filter(|overview| !overview.is_empty())
        .unwrap_or(NO_OVERVIEW_PLACEHOLDER);
    let tree = tree_markdown
        .map(str::trim)
        .filter(|tree| !tree.is_empty())
        .unwrap_or(NO_TREE_PLACEHOLDER);
    format!(
        "Project information to include in the README: {overview}\n\
         GitHub repository link: {}\n\
         Folder structure: {tree}",
        request.repo_link
    )
}
