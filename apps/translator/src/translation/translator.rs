//! Completion Invoker: one outbound call per translation, no retries.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::Completion;
use crate::translation::builder::TranslationRequest;
use crate::translation::prompts::TRANSLATOR_SYSTEM;

#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    /// The user prompt that was sent.
    pub prompt: String,
    /// Verbatim model output.
    pub result: String,
}

/// Builds the prompt for `request` and sends it with the fixed system directive.
///
/// Any collaborator failure fails this request only.
pub async fn translate(
    completion: &dyn Completion,
    request: &TranslationRequest,
) -> Result<Translation, AppError> {
    let prompt = request.prompt();
    info!(
        "Translating {} chars from {} to {}",
        request.source_text.chars().count(),
        request.source_language,
        request.target_language
    );

    let result = completion
        .complete(&prompt, TRANSLATOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Translation failed: {e}")))?;

    Ok(Translation { prompt, result })
}
