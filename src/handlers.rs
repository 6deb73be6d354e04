use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::prompts::{build_system_prompt, Target};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "BizTone Converter Backend";

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub original_text: String,
    pub converted_text: String,
    pub target: String,
}

/// Liveness probe. Always 200, regardless of whether the Groq client is
/// configured.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "active",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Converts casual text into business register for the requested audience.
///
/// Validation happens before any network cost: empty text and a missing
/// target label are both hard 400s. A present-but-unknown target label is
/// accepted and handled with the generic prompt.
pub async fn convert_text(
    State(state): State<AppState>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let groq = state.groq.as_ref().ok_or(ApiError::Unconfigured)?;

    // The raw text is echoed back unchanged; only the upstream call gets
    // the trimmed form.
    let raw_text = payload.text.as_deref().unwrap_or("");
    let text = raw_text.trim();
    if text.is_empty() {
        warn!("Rejected conversion request with empty text");
        return Err(ApiError::Validation("Text input is required".to_string()));
    }

    let target_label = payload.target.as_deref().ok_or_else(|| {
        warn!("Rejected conversion request with missing target");
        ApiError::Validation("Target audience is required".to_string())
    })?;

    let target = Target::parse(target_label);
    if target.is_none() {
        info!("Unrecognized target label {target_label:?}, using generic guidance");
    }

    let system_prompt = build_system_prompt(target);
    let completion = groq
        .chat_completion(&system_prompt, text)
        .await
        .map_err(|e| {
            error!("Conversion for target {target_label:?} failed: {e}");
            e
        })?;

    let converted = strip_wrapping_quotes(completion.trim());
    info!("Converted {} chars for target {target_label:?}", text.len());

    Ok(Json(ConvertResponse {
        success: true,
        original_text: raw_text.to_string(),
        converted_text: converted.to_string(),
        target: target_label.to_string(),
    }))
}

/// Removes one pair of surrounding double quotes. The model sometimes wraps
/// its answer in quotes despite the output-only instruction.
fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_pair_of_wrapping_quotes() {
        assert_eq!(strip_wrapping_quotes("\"Hello world\""), "Hello world");
        assert_eq!(
            strip_wrapping_quotes("\"\"Hello world\"\""),
            "\"Hello world\""
        );
    }

    #[test]
    fn leaves_unquoted_text_alone() {
        assert_eq!(strip_wrapping_quotes("Hello world"), "Hello world");
        assert_eq!(strip_wrapping_quotes("He said \"hi\" twice"), "He said \"hi\" twice");
    }

    #[test]
    fn ignores_unbalanced_quotes() {
        assert_eq!(strip_wrapping_quotes("\"Hello world"), "\"Hello world");
        assert_eq!(strip_wrapping_quotes("Hello world\""), "Hello world\"");
        assert_eq!(strip_wrapping_quotes("\""), "\"");
    }
}
