//! Prompt construction

/// Appended to every instruction template
pub const INSTRUCTION_SUFFIX: &str =
    "(KEEP THE ORIGINAL LANGUAGE AND ONLY RETURN THE FINAL ANSWER!)";

/// Plain concatenation. No escaping, no truncation.
pub fn build_prompt(template: &str, suffix: &str, selection: &str) -> String {
    format!("{template} {suffix}\n\n{selection}")
}

/// Trimmed selection, or `None` when nothing but whitespace was captured
pub fn normalize_selection(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
