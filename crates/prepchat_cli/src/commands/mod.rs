//! Command dispatch and shared provider/attachment setup.

pub mod ask;
pub mod chat;
pub mod topics;

use std::path::Path;

use anyhow::{Context, Result};
use prepchat_core::Attachment;
use prepchat_extract::Extracted;
use prepchat_llms::{BedrockProvider, GuardrailConfig};

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Chat {
            model,
            guardrail,
            file,
        } => chat::handle(model, guardrail, file).await,
        Command::Ask {
            question,
            file,
            model,
            guardrail,
        } => ask::handle(question, file, model, guardrail).await,
        Command::Topics => topics::handle().await,
    }
}

/// Environment variable naming the guardrail to apply on the filtered path.
pub const GUARDRAIL_ID_ENV: &str = "PREPCHAT_GUARDRAIL_ID";
/// Environment variable for the guardrail version (default `DRAFT`).
pub const GUARDRAIL_VERSION_ENV: &str = "PREPCHAT_GUARDRAIL_VERSION";

/// Build the provider, honoring a `--model` override.
pub fn provider_from_env(model: Option<String>) -> Result<BedrockProvider> {
    if let Some(model_id) = model {
        // The env override is how BedrockProvider::from_env picks up the id.
        unsafe { std::env::set_var(BedrockProvider::MODEL_ID_ENV, model_id) };
    }
    BedrockProvider::from_env().context(
        "provider setup failed (set AWS_BEARER_TOKEN_BEDROCK, and AWS_REGION if not us-east-1)",
    )
}

/// Resolve the guardrail configuration when the filtered path is requested.
pub fn guardrail_from_env(enabled: bool) -> Option<GuardrailConfig> {
    if !enabled {
        return None;
    }
    match std::env::var(GUARDRAIL_ID_ENV) {
        Ok(identifier) if !identifier.is_empty() => {
            let version =
                std::env::var(GUARDRAIL_VERSION_ENV).unwrap_or_else(|_| "DRAFT".to_string());
            Some(GuardrailConfig::new(identifier, version))
        }
        _ => {
            output::warning(&format!(
                "--guardrail requested but {GUARDRAIL_ID_ENV} is not set; using the direct path"
            ));
            None
        }
    }
}

/// Extract a study file into a pending attachment. Unsupported kinds come
/// back as an error for the caller to surface.
pub fn load_attachment(path: &str) -> Result<Attachment> {
    let path = Path::new(path);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let attachment = match prepchat_extract::extract(path)? {
        Extracted::Text(text) => Attachment::Document { name, text },
        Extracted::Image { data, media_type } => Attachment::Image {
            name,
            data,
            media_type,
        },
    };
    Ok(attachment)
}

/// Announce a freshly attached file the way the driver shows it.
pub fn describe_attachment(attachment: &Attachment) {
    match attachment {
        Attachment::Document { name, text } => {
            output::success(&format!("File processed: {name}"));
            let preview: String = text.chars().take(500).collect();
            if text.chars().count() > 500 {
                output::dim(&format!("{preview}..."));
            } else {
                output::dim(&preview);
            }
        }
        Attachment::Image { name, .. } => {
            output::success(&format!("Image attached: {name}"));
        }
    }
}
