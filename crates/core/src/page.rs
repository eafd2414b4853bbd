//! HTML rendering for the converter's single page.
//!
//! The page is rebuilt from scratch for every request: the form keeps whatever
//! the user submitted, and the result section appears only after a successful
//! generation.

use base64::Engine;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::convert::{Artifact, Notice, NoticeLevel};

pub const TITLE: &str = "Pandas to Streamlit Converter";

const CODE_PLACEHOLDER: &str = "df = pd.read_csv('data.csv')\nresult = df.groupby('City').sum()";
const CHANGE_PLACEHOLDER: &str =
    "e.g. 'Add a chart', 'Use separate uploaders for multiple files', etc.";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
.columns { display: flex; gap: 1rem; }
.columns label { flex: 1; display: flex; flex-direction: column; gap: .5rem; }
textarea { height: 300px; font-family: monospace; }
.notice { padding: .75rem 1rem; border-radius: .5rem; margin: 1rem 0; }
.notice.warning { background: #fff8e1; color: #7a5d00; }
.notice.error { background: #fdecea; color: #8a1c1c; }
pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; }";

/// Everything the page needs to render one state of the UI.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub pandas_code: String,
    pub change_request: String,
    pub notice: Option<Notice>,
    pub artifact: Option<Artifact>,
}

/// `data:` URI that downloads exactly the artifact's content.
pub fn download_href(artifact: &Artifact) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(artifact.content.as_bytes());
    format!("data:{};base64,{}", artifact.mime, encoded)
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };

    format!(
        "<div class=\"notice {class}\" role=\"alert\">{}</div>\n",
        encode_text(&notice.message)
    )
}

fn render_result(artifact: &Artifact) -> String {
    format!(
        "<hr>\n<h3>Generated Streamlit Code</h3>\n\
         <pre><code class=\"language-python\" id=\"generated-code\">{}</code></pre>\n\
         <a class=\"download\" href=\"{}\" download=\"{}\">Download .py File</a>\n",
        encode_text(&artifact.content),
        encode_double_quoted_attribute(&download_href(artifact)),
        encode_double_quoted_attribute(&artifact.file_name),
    )
}

/// Render the full HTML document.
pub fn render_page(state: &PageState) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n<style>\n{STYLE}\n</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{TITLE}</h1>\n"));

    // Textareas drop one leading newline, hence the "\n" after each opening tag.
    html.push_str(&format!(
        "<form method=\"post\" action=\"/generate\">\n<div class=\"columns\">\n\
         <label>Paste your Pandas code here:\
         <textarea name=\"pandas_code\" placeholder=\"{}\">\n{}</textarea></label>\n\
         <label>Any specific changes? (Optional):\
         <textarea name=\"change_request\" placeholder=\"{}\">\n{}</textarea></label>\n\
         </div>\n<button type=\"submit\">Generate Streamlit App</button>\n</form>\n",
        encode_double_quoted_attribute(CODE_PLACEHOLDER),
        encode_text(&state.pandas_code),
        encode_double_quoted_attribute(CHANGE_PLACEHOLDER),
        encode_text(&state.change_request),
    ));

    if let Some(notice) = &state.notice {
        html.push_str(&render_notice(notice));
    }

    if let Some(artifact) = &state.artifact {
        html.push_str(&render_result(artifact));
    }

    html.push_str("</body>\n</html>\n");
    html
}
