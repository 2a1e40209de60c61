//! Closed enumerations offered by the form.
//!
//! Labels are part of the interface: they are what the browser posts back, what the
//! options API returns and what ends up verbatim in the prompt.

use std::fmt;

/// Placeholder meaning "no selection" in every optional dropdown.
pub const SENTINEL: &str = "--";

pub const STYLE_OPTIONS: &[&str] = &[
    SENTINEL,
    "academic (used in papers)",
    "business (emails, formal)",
    "casual (friendly talk)",
    "social media (emoji & slang)",
    "poetic (figurative, expressive)",
    "fairytale (child-friendly)",
    "humor (funny or sarcastic)",
    "concise (brief and direct)",
];

pub const SCENARIO_OPTIONS: &[&str] = &[
    SENTINEL,
    "at a restaurant",
    "at an airport",
    "during a job interview",
    "on a business call",
    "at school",
    "asking for directions",
    "online shopping",
    "attending a meeting",
    "at a hospital",
    "making a hotel reservation",
    "socializing at a party",
];

pub const EMOTION_OPTIONS: &[&str] = &[
    SENTINEL,
    "neutral",
    "polite",
    "urgent",
    "friendly",
    "excited",
    "sad",
    "apologetic",
    "thankful / appreciative",
    "assertive",
    "persuasive",
    "confused",
];

pub const PERSONA_OPTIONS: &[&str] = &[
    SENTINEL,
    "student",
    "teacher",
    "professor",
    "child",
    "adult",
    "customer",
    "support agent",
    "subordinate",
    "boss",
    "colleague",
    "HR",
    "tourist",
    "local",
    "parent",
    "doctor",
    "patient",
    "intern",
    "executive",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    EnglishUs,
    EnglishUk,
    Chinese,
    Spanish,
    French,
    Arabic,
    Russian,
    Japanese,
    Korean,
}

impl Language {
    /// Display order of the language dropdowns.
    pub const ALL: [Language; 9] = [
        Language::EnglishUs,
        Language::EnglishUk,
        Language::Chinese,
        Language::Spanish,
        Language::French,
        Language::Arabic,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::EnglishUs => "🇺🇸 English (US)",
            Language::EnglishUk => "🇬🇧 English (UK)",
            Language::Chinese => "🇨🇳 Chinese",
            Language::Spanish => "🇪🇸 Spanish",
            Language::French => "🇫🇷 French",
            Language::Arabic => "🇸🇦 Arabic",
            Language::Russian => "🇷🇺 Russian",
            Language::Japanese => "🇯🇵 Japanese",
            Language::Korean => "🇰🇷 Korean",
        }
    }

    /// Exact-match lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.label() == label)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five optional modifiers, each a (dropdown, free text) pair on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalField {
    FromPersona,
    ToPersona,
    Style,
    Scenario,
    Emotion,
}

impl OptionalField {
    /// Form layout order. Prompt line order is decided by the builder, not by this.
    pub const ALL: [OptionalField; 5] = [
        OptionalField::FromPersona,
        OptionalField::ToPersona,
        OptionalField::Style,
        OptionalField::Scenario,
        OptionalField::Emotion,
    ];

    /// Stable identifier used for form input names and element ids.
    pub fn key(self) -> &'static str {
        match self {
            OptionalField::FromPersona => "from_persona",
            OptionalField::ToPersona => "to_persona",
            OptionalField::Style => "style",
            OptionalField::Scenario => "scenario",
            OptionalField::Emotion => "emotion",
        }
    }

    /// Widget label shown on the page.
    pub fn label(self) -> &'static str {
        match self {
            OptionalField::FromPersona => "From Persona(optional)",
            OptionalField::ToPersona => "To Persona(optional)",
            OptionalField::Style => "Style(optional)",
            OptionalField::Scenario => "Scenario(optional)",
            OptionalField::Emotion => "Emotion(optional)",
        }
    }

    /// Label of the modifier line in the prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            OptionalField::FromPersona => "From persona",
            OptionalField::ToPersona => "To persona",
            OptionalField::Style => "Style",
            OptionalField::Scenario => "Scenario",
            OptionalField::Emotion => "Emotion",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            OptionalField::FromPersona | OptionalField::ToPersona => PERSONA_OPTIONS,
            OptionalField::Style => STYLE_OPTIONS,
            OptionalField::Scenario => SCENARIO_OPTIONS,
            OptionalField::Emotion => EMOTION_OPTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_labels_roundtrip_through_lookup() {
        for lang in Language::ALL {
            assert_eq!(Language::from_label(lang.label()), Some(lang));
        }
    }

    #[test]
    fn test_language_lookup_is_exact() {
        assert_eq!(Language::from_label("Spanish"), None);
        assert_eq!(Language::from_label(" 🇪🇸 Spanish"), None);
        assert_eq!(Language::from_label(""), None);
    }

    #[test]
    fn test_language_display_is_label() {
        assert_eq!(Language::Japanese.to_string(), "🇯🇵 Japanese");
    }

    #[test]
    fn test_every_optional_list_starts_with_sentinel() {
        for field in OptionalField::ALL {
            assert_eq!(field.options()[0], SENTINEL, "{:?}", field);
        }
    }

    #[test]
    fn test_enumeration_sizes() {
        assert_eq!(STYLE_OPTIONS.len(), 9);
        assert_eq!(SCENARIO_OPTIONS.len(), 12);
        assert_eq!(EMOTION_OPTIONS.len(), 12);
        assert_eq!(PERSONA_OPTIONS.len(), 19);
    }

    #[test]
    fn test_personas_share_one_list() {
        assert_eq!(
            OptionalField::FromPersona.options(),
            OptionalField::ToPersona.options()
        );
    }
}
