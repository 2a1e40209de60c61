//! Axum route handlers for the JSON translation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::translation::form::{FormState, Mode};
use crate::translation::options::{Language, OptionalField, SENTINEL};
use crate::translation::prompts::TRANSLATOR_SYSTEM;
use crate::translation::translator::{translate, Translation};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PromptPreviewResponse {
    pub system: &'static str,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct FieldOptions {
    pub key: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ModeOption {
    pub value: Mode,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub sentinel: &'static str,
    pub languages: Vec<&'static str>,
    pub modes: Vec<ModeOption>,
    pub fields: Vec<FieldOptions>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Every closed enumeration the form offers, with exact labels.
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        sentinel: SENTINEL,
        languages: Language::ALL.iter().map(|l| l.label()).collect(),
        modes: Mode::ALL
            .into_iter()
            .map(|mode| ModeOption {
                value: mode,
                label: mode.label(),
            })
            .collect(),
        fields: OptionalField::ALL
            .into_iter()
            .map(|field| FieldOptions {
                key: field.key(),
                label: field.label(),
                options: field.options(),
            })
            .collect(),
    })
}

/// POST /api/v1/prompt
///
/// Resolves the form and returns the prompt that would be sent, without calling the model.
pub async fn handle_prompt(
    Json(form): Json<FormState>,
) -> Result<Json<PromptPreviewResponse>, AppError> {
    let request = form.to_request()?;
    Ok(Json(PromptPreviewResponse {
        system: TRANSLATOR_SYSTEM,
        prompt: request.prompt(),
    }))
}

/// POST /api/v1/translate
///
/// Resolves the form, sends one completion request and returns the raw model output.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(form): Json<FormState>,
) -> Result<Json<Translation>, AppError> {
    let request = form.to_request()?;
    let translation = translate(state.completion.as_ref(), &request).await?;
    Ok(Json(translation))
}
