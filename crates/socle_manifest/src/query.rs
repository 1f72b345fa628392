//! Lookup and summary helpers over the manifest types.

use crate::types::{
    AttributeBinding, Component, Deprecation, Event, Manifest, Member, MemberKind, Privacy,
};

impl Manifest {
    /// Find the component declaration for a tag name.
    pub fn component_by_tag(&self, tag_name: &str) -> Option<&Component> {
        self.modules
            .iter()
            .flat_map(|module| module.declarations.iter())
            .find(|declaration| declaration.tag_name.as_deref() == Some(tag_name))
    }
}

impl Component {
    /// The attribute binding mirroring a class field, if one exists.
    pub fn attribute_for_field(&self, field_name: &str) -> Option<&AttributeBinding> {
        self.attributes
            .iter()
            .find(|attribute| attribute.field_name.as_deref() == Some(field_name))
    }

    /// All field members, in declaration order.
    pub fn field_members(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|member| member.kind == MemberKind::Field)
    }

    /// Public, non-static methods.
    pub fn public_methods(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|member| {
            member.kind == MemberKind::Method
                && member.privacy == Privacy::Public
                && !member.is_static
        })
    }
}

impl Member {
    /// Resolve the member's type expression text.
    ///
    /// When `type_ref` names an alternate annotation field (e.g.
    /// `"parsedType"`) and the member carries it, that text wins; otherwise
    /// the declared type is used.
    pub fn type_text(&self, type_ref: Option<&str>) -> Option<&str> {
        if let Some(key) = type_ref {
            if let Some(text) = self
                .extra
                .get(key)
                .and_then(|value| value.get("text"))
                .and_then(|value| value.as_str())
            {
                return Some(text);
            }
        }
        self.type_.as_ref().map(|t| t.text.as_str())
    }

    /// Synthesized method signature, e.g. `(count: number) => void`.
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|param| {
                let marker = if param.optional { "?" } else { "" };
                match &param.type_ {
                    Some(t) => format!("{}{}: {}", param.name, marker, t.text),
                    None => format!("{}{}", param.name, marker),
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let returns = self
            .return_type
            .as_ref()
            .and_then(|r| r.type_.as_ref())
            .map(|t| t.text.as_str())
            .unwrap_or("void");

        format!("({}) => {}", params, returns)
    }
}

impl Event {
    /// Event type summary: `CustomEvent<T>` when a payload type is declared.
    pub fn type_summary(&self) -> String {
        match &self.type_ {
            Some(t) if !t.text.is_empty() => format!("CustomEvent<{}>", t.text),
            _ => "CustomEvent".to_string(),
        }
    }
}

/// Combine a member description with its deprecation marker.
///
/// A deprecated member gets a `**@deprecated**` lead-in (with the note when
/// one was given), separated from the description by a blank line.
pub fn member_description(
    description: Option<&str>,
    deprecated: Option<&Deprecation>,
) -> Option<String> {
    let deprecation = deprecated.filter(|d| d.is_deprecated()).map(|d| match d.note() {
        Some(note) => format!("**@deprecated** {}", note),
        None => "**@deprecated**".to_string(),
    });

    match (deprecation, description) {
        (Some(lead), Some(desc)) if !desc.is_empty() => Some(format!("{}\n\n{}", lead, desc)),
        (Some(lead), _) => Some(lead),
        (None, Some(desc)) if !desc.is_empty() => Some(desc.to_string()),
        (None, _) => None,
    }
}

/// Strip a single leading and/or trailing quote character after trimming.
///
/// Mirrors the manifest-utilities behavior: each side is stripped
/// independently, so mismatched quotes still come off.
pub fn remove_quotes(value: &str) -> String {
    const QUOTES: &[char] = &['"', '\''];
    let trimmed = value.trim();
    let stripped = trimmed.strip_prefix(QUOTES).unwrap_or(trimmed);
    stripped
        .strip_suffix(QUOTES)
        .unwrap_or(stripped)
        .to_string()
}
