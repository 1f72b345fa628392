//! Type-expression classification.
//!
//! Maps a declared type expression onto a [`ControlKind`]. The cleanup pass
//! strips nullable/optional noise and collapses broad sibling types so an
//! enumerated union like `"'a' | 'b' | undefined"` reduces to its meaningful
//! alternatives before classification.

use crate::types::ControlKind;
use socle_manifest::remove_quotes;

/// Ordered rewrite table for type cleanup.
///
/// Order matters: `" | string & {}"` and its parenthesized form must be
/// rewritten before the bare `" | string"` rule, or the remainder ` & {}`
/// would survive. Each pattern is applied to its first occurrence only.
const TYPE_REWRITES: [(&str, &str); 14] = [
    (" | undefined", ""),
    (" | null", ""),
    (" | void", ""),
    (" | any", ""),
    (" | unknown", ""),
    (" | string & {}", "|"),
    (" | (string & {})", "|"),
    (" | string", "|"),
    (" | number", "|"),
    (" | boolean", "|"),
    (" | object", "|"),
    (" | Function", "|"),
    (" | {}", "|"),
    (" | []", "|"),
];

/// Strip nullable/optional/broad-sibling noise from a type expression.
pub fn clean_up_type(type_text: &str) -> String {
    let mut cleaned = type_text.to_string();
    for (pattern, replacement) in TYPE_REWRITES {
        cleaned = cleaned.replacen(pattern, replacement, 1);
    }
    cleaned
}

/// The meaningful alternatives of a cleaned type expression.
///
/// Splits on `|`, trims, and drops empty/`null`/`undefined` tokens.
pub fn type_alternatives(cleaned: &str) -> Vec<String> {
    cleaned
        .split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != "null" && *token != "undefined")
        .map(|token| token.to_string())
        .collect()
}

/// Quote-stripped option list for an enumerated union.
pub fn type_options(cleaned: &str) -> Vec<String> {
    type_alternatives(cleaned)
        .iter()
        .map(|alternative| remove_quotes(alternative))
        .collect()
}

/// Classify a type expression into a control kind.
///
/// `is_attribute` suppresses object detection: attributes are always
/// strings, so structured values fall through to the text/select rules.
pub fn control_for_type(type_text: &str, is_attribute: bool) -> ControlKind {
    if type_text.is_empty() {
        return ControlKind::Text;
    }

    // Cleanup runs on the case-preserved expression (the rewrite table is
    // case-sensitive); classification itself is case-insensitive.
    let cleaned = clean_up_type(type_text).to_lowercase();
    let alternatives = type_alternatives(&cleaned);

    // Object detection inspects the whole cleaned expression rather than
    // the alternatives list, so `Array<...>`/`{...}` siblings count even
    // though they never survive as select options. Stripped `| {}`-style
    // siblings deliberately do not: a union collapsed to string options
    // stays a select.
    if is_object_like(&cleaned) && !is_attribute {
        return ControlKind::Object;
    }

    if alternatives.len() == 1 && alternatives[0] == "boolean" {
        return ControlKind::Boolean;
    }

    if has_alternative(&alternatives, "number") && !has_alternative(&alternatives, "string") {
        return ControlKind::Number;
    }

    if has_alternative(&alternatives, "date") {
        return ControlKind::Date;
    }

    if alternatives.len() > 1 {
        return ControlKind::Select;
    }

    ControlKind::Text
}

fn is_object_like(lower: &str) -> bool {
    lower.contains("array")
        || lower.contains("object")
        || lower.contains('{')
        || lower.contains('[')
        || lower.contains('<')
}

fn has_alternative(alternatives: &[String], wanted: &str) -> bool {
    alternatives.iter().any(|alternative| alternative == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_total() {
        // Arbitrary garbage still classifies to exactly one kind.
        for input in ["", "???", "Foo.Bar", "never", "|||", "  "] {
            let _ = control_for_type(input, false);
        }
    }

    #[test]
    fn test_nullable_suffix_stability() {
        for base in ["string", "number", "boolean", "'a' | 'b'", "Date"] {
            let plain = control_for_type(base, false);
            let with_undefined = control_for_type(&format!("{} | undefined", base), false);
            let with_null = control_for_type(&format!("{} | null", base), false);
            assert_eq!(plain, with_undefined, "unstable for {base}");
            assert_eq!(plain, with_null, "unstable for {base}");
        }
    }

    #[test]
    fn test_primitive_kinds() {
        assert_eq!(control_for_type("boolean", false), ControlKind::Boolean);
        assert_eq!(control_for_type("Boolean", false), ControlKind::Boolean);
        assert_eq!(control_for_type("number", false), ControlKind::Number);
        assert_eq!(control_for_type("Date", false), ControlKind::Date);
        assert_eq!(control_for_type("string", false), ControlKind::Text);
        assert_eq!(control_for_type("", false), ControlKind::Text);
    }

    #[test]
    fn test_number_classification() {
        assert_eq!(
            control_for_type("number | undefined", false),
            ControlKind::Number
        );
        // The broad string sibling is collapsed by cleanup before the
        // number rule runs.
        assert_eq!(
            control_for_type("number | string", false),
            ControlKind::Number
        );
        // A quoted alternative survives alongside number.
        assert_eq!(
            control_for_type("number | 'auto'", false),
            ControlKind::Number
        );
    }

    #[test]
    fn test_object_detection() {
        assert_eq!(
            control_for_type("Array<string>", false),
            ControlKind::Object
        );
        assert_eq!(
            control_for_type("{ a: number }", false),
            ControlKind::Object
        );
        assert_eq!(control_for_type("string[]", false), ControlKind::Object);
        assert_eq!(control_for_type("object", false), ControlKind::Object);
    }

    #[test]
    fn test_object_suppressed_for_attributes() {
        // Attribute-bound controls cannot carry structured values.
        assert_eq!(control_for_type("string[]", true), ControlKind::Text);
        assert_eq!(
            control_for_type("'a' | 'b' | string[]", true),
            ControlKind::Select
        );
    }

    #[test]
    fn test_enumerated_union() {
        assert_eq!(
            control_for_type("'a' | 'b' | 'c'", false),
            ControlKind::Select
        );
        let cleaned = clean_up_type("'a' | 'b' | 'c'");
        assert_eq!(type_options(&cleaned), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clean_up_type_noise() {
        assert_eq!(clean_up_type("string | undefined"), "string");
        assert_eq!(clean_up_type("'a' | 'b' | null"), "'a' | 'b'");
        assert_eq!(clean_up_type("boolean | void"), "boolean");
    }

    #[test]
    fn test_string_intersection_precedence() {
        // The `string & {}` rule must fire before the bare `string` rule.
        assert_eq!(clean_up_type("'a' | 'b' | string & {}"), "'a' | 'b'|");
        assert_eq!(clean_up_type("'a' | (string & {})"), "'a'|");
        assert_eq!(
            control_for_type("'sm' | 'lg' | string & {}", false),
            ControlKind::Select
        );
    }

    #[test]
    fn test_broad_siblings_collapse() {
        // A union with a broad sibling keeps only the meaningful options.
        let cleaned = clean_up_type("'auto' | 'manual' | string");
        assert_eq!(type_options(&cleaned), vec!["auto", "manual"]);
    }
}
