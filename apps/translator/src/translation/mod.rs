// Translation form: field resolution, prompt building and the completion call.
// All LLM calls go through llm_client; no direct OpenAI calls here.

pub mod builder;
pub mod form;
pub mod handlers;
pub mod options;
pub mod prompts;
pub mod resolver;
pub mod translator;
