//! Default-value coercion.
//!
//! Manifest default literals are source text, often JavaScript object
//! notation rather than valid JSON (`{ a: 'b', }`). The rewrites here make
//! such literals decodable; anything that still fails to parse falls back to
//! the raw text so malformed defaults degrade instead of erroring.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static SINGLE_QUOTED_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([^']+)'").unwrap());
static UNQUOTED_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([{,]\s*)(\w+)\s*:").unwrap());
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*([}\]])").unwrap());

/// Rewrite a JavaScript-like object literal into valid JSON text.
pub fn to_valid_json(input: &str) -> String {
    let single_quotes_replaced = SINGLE_QUOTED_VALUE.replace_all(input, "\"$1\"");
    let keys_quoted = UNQUOTED_KEY.replace_all(&single_quotes_replaced, "$1\"$2\":");
    TRAILING_COMMA.replace_all(&keys_quoted, "$1").into_owned()
}

/// Decode an object-typed default literal, falling back to the raw text.
pub fn decode_object_default(raw: &str) -> Value {
    serde_json::from_str(&to_valid_json(raw)).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Decode a string as JSON when it parses, else keep it as text.
/// Non-string values pass through unchanged.
pub fn decode_json_or_text(value: &Value) -> Value {
    match value {
        Value::String(text) => {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone()))
        }
        other => other.clone(),
    }
}
