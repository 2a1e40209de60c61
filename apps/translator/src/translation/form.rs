//! Form Controller: the page's widget state and the events that change it.
//!
//! One mode toggle governs all five optional pairs at once. Mode changes only
//! flip visibility; stored widget values survive every switch, and resolution at
//! submit time looks at both widgets of a pair regardless of mode.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::translation::builder::TranslationRequest;
use crate::translation::options::{Language, OptionalField, SENTINEL};
use crate::translation::resolver::{is_set, resolve};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Dropdowns visible, free-text boxes hidden.
    #[default]
    Menu,
    /// Free-text boxes visible, dropdowns hidden.
    Freeform,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Menu, Mode::Freeform];

    /// Wire value, as posted by the mode radio.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Freeform => "freeform",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Menu => "Select from Menu",
            Mode::Freeform => "Write Your Own",
        }
    }

    pub fn visibility(self) -> Visibility {
        let menu = self == Mode::Menu;
        Visibility {
            dropdown: menu,
            free_text: !menu,
        }
    }
}

/// Which widget of an optional pair is shown. Exactly one of the two is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub dropdown: bool,
    pub free_text: bool,
}

/// Every widget value on the page, as posted by the browser (or sent as JSON).
///
/// Missing fields fall back to the initial page: Menu mode, English (US) to
/// Spanish, sentinel picks and empty text boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub source_text: String,
    pub source_language: String,
    pub target_language: String,
    pub mode: Mode,
    pub from_persona_choice: String,
    pub from_persona_custom: String,
    pub to_persona_choice: String,
    pub to_persona_custom: String,
    pub style_choice: String,
    pub style_custom: String,
    pub scenario_choice: String,
    pub scenario_custom: String,
    pub emotion_choice: String,
    pub emotion_custom: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            source_text: String::new(),
            source_language: Language::EnglishUs.label().to_string(),
            target_language: Language::Spanish.label().to_string(),
            mode: Mode::Menu,
            from_persona_choice: SENTINEL.to_string(),
            from_persona_custom: String::new(),
            to_persona_choice: SENTINEL.to_string(),
            to_persona_custom: String::new(),
            style_choice: SENTINEL.to_string(),
            style_custom: String::new(),
            scenario_choice: SENTINEL.to_string(),
            scenario_custom: String::new(),
            emotion_choice: SENTINEL.to_string(),
            emotion_custom: String::new(),
        }
    }
}

impl FormState {
    /// Mode toggle. Only visibility changes; no widget value is touched.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// `(dropdown, free text)` values of one optional pair.
    pub fn pair(&self, field: OptionalField) -> (&str, &str) {
        match field {
            OptionalField::FromPersona => (&self.from_persona_choice, &self.from_persona_custom),
            OptionalField::ToPersona => (&self.to_persona_choice, &self.to_persona_custom),
            OptionalField::Style => (&self.style_choice, &self.style_custom),
            OptionalField::Scenario => (&self.scenario_choice, &self.scenario_custom),
            OptionalField::Emotion => (&self.emotion_choice, &self.emotion_custom),
        }
    }

    /// Resolved value of one optional pair, `None` when it resolves to unset.
    pub fn resolved(&self, field: OptionalField) -> Option<String> {
        let (dropdown, free_text) = self.pair(field);
        let value = resolve(dropdown, free_text);
        is_set(value).then(|| value.to_string())
    }

    /// Fields whose hidden free text silently overrides the visible dropdown.
    ///
    /// Only possible in Menu mode: the text box keeps its value after switching
    /// back, and set free text always wins at resolution.
    pub fn overridden_dropdowns(&self) -> Vec<OptionalField> {
        if self.mode != Mode::Menu {
            return Vec::new();
        }
        OptionalField::ALL
            .into_iter()
            .filter(|&field| is_set(self.pair(field).1))
            .collect()
    }

    /// Submit: validates the form and resolves every optional pair.
    pub fn to_request(&self) -> Result<TranslationRequest, AppError> {
        if self.source_text.trim().is_empty() {
            return Err(AppError::Validation(
                "source_text cannot be empty".to_string(),
            ));
        }

        Ok(TranslationRequest {
            source_text: self.source_text.clone(),
            source_language: parse_language("source_language", &self.source_language)?,
            target_language: parse_language("target_language", &self.target_language)?,
            from_persona: self.resolved(OptionalField::FromPersona),
            to_persona: self.resolved(OptionalField::ToPersona),
            style: self.resolved(OptionalField::Style),
            scenario: self.resolved(OptionalField::Scenario),
            emotion: self.resolved(OptionalField::Emotion),
        })
    }
}

fn parse_language(name: &str, label: &str) -> Result<Language, AppError> {
    Language::from_label(label)
        .ok_or_else(|| AppError::Validation(format!("{name}: unknown language '{label}'")))
}
