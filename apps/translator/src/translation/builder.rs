//! Prompt Builder: turns resolved form fields into the user prompt.
//!
//! Pure: no I/O, never fails. Whatever the caller passes is interpolated as-is.

use crate::translation::options::{Language, OptionalField};
use crate::translation::prompts::{TEXT_DELIMITER, TEXT_MARKER};
use crate::translation::resolver::is_set;

/// Order in which modifier lines appear in the prompt.
const MODIFIER_ORDER: [OptionalField; 5] = [
    OptionalField::Style,
    OptionalField::Scenario,
    OptionalField::Emotion,
    OptionalField::FromPersona,
    OptionalField::ToPersona,
];

/// Borrowed view of everything the prompt is built from.
///
/// Modifiers may be `None`, blank or the sentinel; all three mean "omit the line".
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptInput<'a> {
    pub text: &'a str,
    pub source_language: &'a str,
    pub target_language: &'a str,
    pub from_persona: Option<&'a str>,
    pub to_persona: Option<&'a str>,
    pub style: Option<&'a str>,
    pub scenario: Option<&'a str>,
    pub emotion: Option<&'a str>,
}

impl<'a> PromptInput<'a> {
    fn modifier(&self, field: OptionalField) -> Option<&'a str> {
        match field {
            OptionalField::FromPersona => self.from_persona,
            OptionalField::ToPersona => self.to_persona,
            OptionalField::Style => self.style,
            OptionalField::Scenario => self.scenario,
            OptionalField::Emotion => self.emotion,
        }
    }
}

/// Builds the user prompt:
///
/// ```text
/// Translate the following text from {source} to {target}.
/// Style: {style};            (each modifier line only when set)
/// Scenario: {scenario};
/// Emotion: {emotion};
/// From persona: {from};
/// To persona: {to};
/// Text:
/// """{text}"""
/// ```
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let mut parts = vec![format!(
        "Translate the following text from {} to {}.",
        input.source_language, input.target_language
    )];

    for field in MODIFIER_ORDER {
        if let Some(value) = input.modifier(field).filter(|v| is_set(v)) {
            parts.push(format!("{}: {};", field.prompt_label(), value));
        }
    }

    parts.push(TEXT_MARKER.to_string());
    parts.push(format!("{TEXT_DELIMITER}{}{TEXT_DELIMITER}", input.text));
    parts.join("\n")
}

/// A validated, fully resolved translation request. Lives for one submission.
///
/// Unset modifiers are `None`; set ones hold the resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_language: Language,
    pub target_language: Language,
    pub from_persona: Option<String>,
    pub to_persona: Option<String>,
    pub style: Option<String>,
    pub scenario: Option<String>,
    pub emotion: Option<String>,
}

impl TranslationRequest {
    pub fn prompt(&self) -> String {
        build_prompt(&PromptInput {
            text: &self.source_text,
            source_language: self.source_language.label(),
            target_language: self.target_language.label(),
            from_persona: self.from_persona.as_deref(),
            to_persona: self.to_persona.as_deref(),
            style: self.style.as_deref(),
            scenario: self.scenario.as_deref(),
            emotion: self.emotion.as_deref(),
        })
    }
}
