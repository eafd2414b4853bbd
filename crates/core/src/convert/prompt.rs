use super::types::ConversionRequest;

/// Instructions sent as the system message on every conversion.
pub const SYSTEM_PROMPT: &str = "\
You are a Python developer.
Convert the given pandas-based CSV code into a simple, professional Streamlit app.

STRICT RULES:
1. Use Streamlit only
2. Always set:
   - st.set_page_config(layout=\"wide\")
   - Light mode only (no styling, no themes, no dark mode)
3. Keep everything minimal and generic

UI REQUIREMENTS:
- File uploader (CSV or xls based on code). If multiple files are in the code, create separate uploaders.
- Single button: \"Run\"
- Show output only after button click

FUNCTIONAL RULES:
- Use clear function-based structure (e.g., a processing function and a main function).
- File uploader variable name must be `uploaded_file` (or numbered if multiple).
- Read files using pandas.
- Apply the provided pandas operations inside the processing function.
- Display result using st.dataframe().
- Add basic check for file upload.
- No extra features, no text, no explanations.

CODE RULES:
- Single Streamlit file.
- Clean, readable, and descriptive code, No explanatory comments, just add headings in comments.
- No page title, no descriptions, no automation wording.
";

/// Build the user message from the pasted code and the optional change request.
pub fn build_user_payload(request: &ConversionRequest) -> String {
    let mut payload = format!("Convert this pandas code:\n\n{}", request.pandas_code);

    if let Some(change) = request.change_request.as_deref().filter(|c| !c.is_empty()) {
        payload.push_str(&format!("\n\nADDITIONAL USER REQUESTS/CHANGES: {change}"));
    }

    payload
}
