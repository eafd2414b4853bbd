//! Pure building blocks for turning a pandas snippet into a Streamlit app.
//!
//! Nothing in here performs I/O. The shell crate glues these functions to an
//! HTTP client and to the web UI.

pub mod artifact;
pub mod chat;
pub mod extract;
pub mod prompt;
pub mod types;
pub mod validate;

pub use artifact::Artifact;
pub use chat::{build_chat_request, completions_url, first_choice_content};
pub use extract::strip_fences;
pub use prompt::{build_user_payload, SYSTEM_PROMPT};
pub use types::{ConversionRequest, Notice, NoticeLevel};
pub use validate::validate;

/// Errors produced while interpreting a chat-completion response.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("The model returned no completion")]
    EmptyCompletion,
}
