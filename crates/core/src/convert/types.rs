use serde::{Deserialize, Serialize};

/// The two free-text inputs collected from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Pandas code pasted by the user.
    pub pandas_code: String,
    /// Optional natural-language change request.
    #[serde(default)]
    pub change_request: Option<String>,
}

impl ConversionRequest {
    /// Build a request from raw form fields. A blank change request counts as absent.
    pub fn new(pandas_code: impl Into<String>, change_request: Option<String>) -> Self {
        Self {
            pandas_code: pandas_code.into(),
            change_request: change_request.filter(|c| !c.is_empty()),
        }
    }
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message shown to the user in place of a generated app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
