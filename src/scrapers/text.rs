/// Collapse scraped text onto one line.
///
/// Newlines and carriage returns become spaces, runs of spaces shrink to one
/// and the result is trimmed. Applying it twice changes nothing.
pub fn normalize_text(raw: &str) -> String {
    let mut text = raw.replace(['\n', '\r'], " ");
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text.trim().to_string()
}
