/// Name of the downloadable file.
pub const FILE_NAME: &str = "app.py";
/// MIME type of the downloadable file.
pub const MIME: &str = "text/x-python";

/// The generated app, as both displayed and downloaded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Artifact {
    pub file_name: String,
    #[serde(skip)]
    pub mime: String,
    #[serde(rename = "code")]
    pub content: String,
}

impl Artifact {
    pub fn python(content: impl Into<String>) -> Self {
        Self {
            file_name: FILE_NAME.to_string(),
            mime: MIME.to_string(),
            content: content.into(),
        }
    }

    /// Header value that makes browsers save the body as a file.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}
