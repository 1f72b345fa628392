//! Type definitions for the Custom Elements Manifest subset.
//!
//! All fields are optional or defaulted so that sparse manifests
//! deserialize without errors; missing lists are treated as empty.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Top-level manifest document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifest {
    /// Manifest schema version (e.g. `"2.1.1"`).
    pub schema_version: Option<String>,

    /// Optional readme text.
    pub readme: Option<String>,

    /// Modules containing component declarations.
    pub modules: Vec<ManifestModule>,
}

/// One module entry in the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestModule {
    /// Module kind (e.g. `"javascript-module"`).
    pub kind: Option<String>,

    /// Source path of the module.
    pub path: Option<String>,

    /// Declarations exported by the module.
    pub declarations: Vec<Component>,
}

/// A component declaration: the public surface of one custom element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Component {
    /// Declaration kind (e.g. `"class"`).
    pub kind: Option<String>,

    /// Class name.
    pub name: String,

    /// Custom element tag name, when the declaration defines one.
    pub tag_name: Option<String>,

    /// Whether the declaration registers a custom element.
    pub custom_element: bool,

    /// Component description.
    pub description: Option<String>,

    /// Short summary.
    pub summary: Option<String>,

    /// Class members: fields and methods.
    pub members: Vec<Member>,

    /// Attribute bindings and the fields they mirror.
    pub attributes: Vec<AttributeBinding>,

    /// Declared slots (empty name = default slot).
    pub slots: Vec<Slot>,

    /// CSS custom properties.
    pub css_properties: Vec<CssProperty>,

    /// CSS shadow parts.
    pub css_parts: Vec<CssPart>,

    /// CSS custom states.
    pub css_states: Vec<CssState>,

    /// Events dispatched by the component.
    pub events: Vec<Event>,
}

/// Member kind discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Class field (property).
    #[default]
    Field,
    /// Class method.
    Method,
}

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Protected,
    Private,
}

/// Deprecation marker: the manifest allows a bare flag or a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deprecation {
    Flag(bool),
    Note(String),
}

impl Deprecation {
    /// Whether the marker actually deprecates the member.
    #[inline]
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Note(_) => true,
        }
    }

    /// Deprecation note text, if one was given.
    #[inline]
    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Note(note) => Some(note),
            Self::Flag(_) => None,
        }
    }
}

/// A type expression as carried by the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeText {
    /// Raw type expression text.
    pub text: String,
}

/// One class member (field or method).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub privacy: Privacy,

    /// Static members are never exposed as controls.
    #[serde(rename = "static")]
    pub is_static: bool,

    /// Readonly members get no editable default.
    pub readonly: bool,

    /// Declared type expression.
    #[serde(rename = "type")]
    pub type_: Option<TypeText>,

    /// Default value literal, as source text.
    pub default: Option<String>,

    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,

    /// Method parameters (methods only).
    pub parameters: Vec<Parameter>,

    /// Method return type (methods only).
    #[serde(rename = "return")]
    pub return_type: Option<ReturnType>,

    /// Non-standard manifest fields, kept so configured alternate type
    /// annotations (e.g. `parsedType`) remain reachable.
    #[serde(flatten)]
    pub extra: FxHashMap<String, serde_json::Value>,
}

/// Method parameter description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Option<TypeText>,
    pub optional: bool,
    pub description: Option<String>,
}

/// Method return description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnType {
    #[serde(rename = "type")]
    pub type_: Option<TypeText>,
    pub description: Option<String>,
}

/// An attribute and the field it mirrors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeBinding {
    pub name: String,

    /// Name of the mirrored class field, when one exists.
    pub field_name: Option<String>,

    #[serde(rename = "type")]
    pub type_: Option<TypeText>,
    pub default: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}

/// A declared slot. The default slot has an empty name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slot {
    pub name: String,
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}

/// A CSS custom property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CssProperty {
    pub name: String,
    pub syntax: Option<String>,
    pub default: Option<String>,
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}

/// A CSS shadow part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CssPart {
    pub name: String,
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}

/// A CSS custom state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CssState {
    pub name: String,
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}

/// An event dispatched by the component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub name: String,

    /// Payload type of the event detail, when declared.
    #[serde(rename = "type")]
    pub type_: Option<TypeText>,

    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
}
