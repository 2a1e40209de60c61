//! The browser form: rendering plus the mode-toggle and submit handlers.
//!
//! Every request re-renders the whole page from the posted `FormState`, so a
//! mode switch updates all ten optional widgets in one response.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::translation::form::{FormState, Mode};
use crate::translation::options::{Language, OptionalField};
use crate::translation::translator::translate;

struct SelectOption {
    value: &'static str,
    selected: bool,
}

struct ModeView {
    value: &'static str,
    label: &'static str,
    checked: bool,
}

struct FieldView {
    key: &'static str,
    label: &'static str,
    hide_dropdown: bool,
    hide_free_text: bool,
    options: Vec<SelectOption>,
    custom: String,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>AI Translation Tool</title>
    <style>
      body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
      h2 { text-align: center; }
      label { display: block; font-weight: 600; margin-bottom: .25rem; }
      textarea, select, input[type=text] { width: 100%; box-sizing: border-box; padding: .4rem; }
      .row { display: flex; gap: 1rem; margin: 1rem 0; }
      .row > div { flex: 1; }
      .notice { background: #fff7e0; border: 1px solid #e6c200; padding: .5rem; margin: .25rem 0; }
      .error { background: #fde8e8; border: 1px solid #d33; padding: .5rem; margin: 1rem 0; }
      button.primary { width: 100%; padding: .6rem; font-size: 1rem; }
    </style>
  </head>
  <body>
    <h2>🌍 AI Translation Tool</h2>
    <form method="post" action="/translate">
      <label for="source_text">Source Text</label>
      <textarea id="source_text" name="source_text" rows="4" placeholder="Enter text to translate">
{{ source_text }}</textarea>

      <div class="row">
        <div>
          <label for="source_language">Source Language</label>
          <select id="source_language" name="source_language">
            {% for opt in source_languages %}<option value="{{ opt.value }}"{% if opt.selected %} selected{% endif %}>{{ opt.value }}</option>{% endfor %}
          </select>
        </div>
        <div>
          <label for="target_language">Target Language</label>
          <select id="target_language" name="target_language">
            {% for opt in target_languages %}<option value="{{ opt.value }}"{% if opt.selected %} selected{% endif %}>{{ opt.value }}</option>{% endfor %}
          </select>
        </div>
      </div>

      <button type="submit" class="primary">Translate</button>

      <fieldset>
        <legend>Choose Mode for Optional Settings</legend>
        {% for m in modes %}<label><input type="radio" name="mode" value="{{ m.value }}"{% if m.checked %} checked{% endif %} onchange="this.form.requestSubmit(document.getElementById('apply-mode'))" /> {{ m.label }}</label>{% endfor %}
        <button type="submit" id="apply-mode" formaction="/mode">Apply mode</button>
      </fieldset>

      {% for notice in notices %}<p class="notice">{{ notice }}</p>{% endfor %}

      <div class="row">
        {% for field in fields %}
        <div>
          <div class="pair-choice" id="{{ field.key }}-choice"{% if field.hide_dropdown %} hidden{% endif %}>
            <label for="{{ field.key }}_choice">{{ field.label }}</label>
            <select id="{{ field.key }}_choice" name="{{ field.key }}_choice">
              {% for opt in field.options %}<option value="{{ opt.value }}"{% if opt.selected %} selected{% endif %}>{{ opt.value }}</option>{% endfor %}
            </select>
          </div>
          <div class="pair-custom" id="{{ field.key }}-custom"{% if field.hide_free_text %} hidden{% endif %}>
            <label for="{{ field.key }}_custom">{{ field.label }}</label>
            <input type="text" id="{{ field.key }}_custom" name="{{ field.key }}_custom" value="{{ field.custom }}" />
          </div>
        </div>
        {% endfor %}
      </div>
    </form>

    {% if !error.is_empty() %}<div class="error" role="alert">{{ error }}</div>{% endif %}

    <label for="result">Translation Result</label>
    <textarea id="result" rows="6" readonly>
{{ result }}</textarea>
  </body>
</html>
"#,
    ext = "html"
)]
pub struct FormPage {
    source_text: String,
    source_languages: Vec<SelectOption>,
    target_languages: Vec<SelectOption>,
    modes: Vec<ModeView>,
    notices: Vec<String>,
    fields: Vec<FieldView>,
    result: String,
    error: String,
}

impl FormPage {
    pub fn new(form: &FormState) -> Self {
        let visibility = form.mode.visibility();

        let fields = OptionalField::ALL
            .into_iter()
            .map(|field| {
                let (choice, custom) = form.pair(field);
                FieldView {
                    key: field.key(),
                    label: field.label(),
                    hide_dropdown: !visibility.dropdown,
                    hide_free_text: !visibility.free_text,
                    options: field
                        .options()
                        .iter()
                        .map(|&value| SelectOption {
                            value,
                            selected: value == choice,
                        })
                        .collect(),
                    custom: custom.to_string(),
                }
            })
            .collect();

        let notices = form
            .overridden_dropdowns()
            .into_iter()
            .map(|field| {
                format!(
                    "{}: your written value \"{}\" is used instead of the menu selection. \
                     Clear it under \"{}\" to use the menu.",
                    field.label(),
                    form.pair(field).1.trim(),
                    Mode::Freeform.label()
                )
            })
            .collect();

        Self {
            source_text: form.source_text.clone(),
            source_languages: language_options(&form.source_language),
            target_languages: language_options(&form.target_language),
            modes: Mode::ALL
                .into_iter()
                .map(|mode| ModeView {
                    value: mode.key(),
                    label: mode.label(),
                    checked: mode == form.mode,
                })
                .collect(),
            notices,
            fields,
            result: String::new(),
            error: String::new(),
        }
    }

    /// Records a failed submission on the page and returns the status to answer with.
    fn fail(&mut self, error: AppError) -> StatusCode {
        error.log();
        let (status, _, message) = error.describe();
        self.error = message;
        status
    }
}

fn language_options(selected: &str) -> Vec<SelectOption> {
    Language::ALL
        .into_iter()
        .map(|lang| SelectOption {
            value: lang.label(),
            selected: lang.label() == selected,
        })
        .collect()
}

/// GET /
///
/// Initial page: Menu mode, nothing entered.
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(FormPage::new(&FormState::default()).render()?))
}

/// POST /mode
///
/// The mode radio posts the whole form with its newly selected value.
pub async fn handle_mode(Form(mut form): Form<FormState>) -> Result<Html<String>, AppError> {
    let selected = form.mode;
    form.set_mode(selected);
    Ok(Html(FormPage::new(&form).render()?))
}

/// POST /translate
///
/// Resolves the form, calls the model once and re-renders with the result.
/// Failures keep every entered value and show an error banner instead.
pub async fn handle_translate(
    State(state): State<AppState>,
    Form(form): Form<FormState>,
) -> Result<Response, AppError> {
    let mut page = FormPage::new(&form);

    let outcome = match form.to_request() {
        Ok(request) => translate(state.completion.as_ref(), &request).await,
        Err(e) => Err(e),
    };
    let status = match outcome {
        Ok(translation) => {
            page.result = translation.result;
            StatusCode::OK
        }
        Err(e) => page.fail(e),
    };

    Ok((status, Html(page.render()?)).into_response())
}
