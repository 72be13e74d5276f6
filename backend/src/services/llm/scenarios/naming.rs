//! Chinese Naming Scenario - prompt construction and reply extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::GeneratedName;

const PROMPT_BODY: &str = include_str!("naming_prompt.md");

/// First `[` through last `]`, across newlines. Not a balanced-bracket match.
static JSON_ARRAY_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

// ============================================================================
// Prompt
// ============================================================================

/// Build the single-turn naming instruction.
///
/// `name` and `description` are interpolated verbatim; an empty description
/// is treated as absent.
pub fn build_naming_prompt(name: &str, description: Option<&str>) -> String {
    let mut prompt = format!(
        "You are a Chinese naming expert. Generate 3 meaningful Chinese names for a person named \"{}\"",
        name
    );
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        prompt.push_str(&format!(" who describes themselves as: \"{}\"", description));
    }
    prompt.push_str(".\n\n");
    prompt.push_str(PROMPT_BODY.trim_end());
    prompt
}

// ============================================================================
// Reply extraction
// ============================================================================

/// Candidate JSON payload inside free-form completion text.
///
/// Returns the span from the first `[` to the last `]`, or the whole text
/// when no such span exists.
pub fn extract_json_array(content: &str) -> &str {
    JSON_ARRAY_SPAN.find(content).map(|m| m.as_str()).unwrap_or(content)
}

/// Returned whenever the completion text cannot be decoded into names
pub fn placeholder_name() -> GeneratedName {
    GeneratedName {
        chinese: "待生成".to_string(),
        romanization: "Dài Shēng Chéng".to_string(),
        meaning: "To Be Generated".to_string(),
        reason: "The AI response could not be parsed. Please try again.".to_string(),
    }
}

/// Decode the names in a completion, degrading to the placeholder.
///
/// Never fails and never returns an empty list. Decoded entries are passed
/// through without checking character counts or content.
pub fn parse_generated_names(content: &str) -> Vec<GeneratedName> {
    let payload = extract_json_array(content);
    match serde_json::from_str::<Vec<GeneratedName>>(payload) {
        Ok(names) if !names.is_empty() => names,
        Ok(_) => {
            tracing::warn!("Completion contained an empty name list: {}", content);
            vec![placeholder_name()]
        },
        Err(e) => {
            tracing::warn!("Failed to parse JSON response ({}): {}", e, content);
            vec![placeholder_name()]
        },
    }
}
