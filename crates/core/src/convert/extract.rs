/// Remove markdown code fences from a model response.
///
/// Every "```python" marker is dropped, then every remaining "```", and the
/// result is trimmed. Text between and around the markers is left untouched,
/// so commentary the model adds outside the fence survives.
pub fn strip_fences(response: &str) -> String {
    response
        .replace("```python", "")
        .replace("```", "")
        .trim()
        .to_string()
}
