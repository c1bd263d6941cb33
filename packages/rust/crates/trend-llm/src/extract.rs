//! Structured-data extraction from free-form model output.
//!
//! Two stages: strict parse after fence stripping, then the first balanced
//! `{...}` substring. Models often wrap JSON in prose despite instructions.

use serde_json::Value;

pub type JsonObject = serde_json::Map<String, Value>;

/// Remove markdown code-fence markers and surrounding whitespace.
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a JSON object out of model output; `None` when nothing usable is found.
#[must_use]
pub fn parse_structured(text: &str) -> Option<JsonObject> {
    let cleaned = strip_code_fences(text);
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&cleaned) {
        return Some(object);
    }
    let candidate = first_balanced_object(&cleaned)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
