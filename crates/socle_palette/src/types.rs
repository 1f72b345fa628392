//! Schema type definitions for the control palette.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Control type for an editable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Text input control.
    Text,
    /// Boolean toggle/checkbox.
    Boolean,
    /// Number input control.
    Number,
    /// Date picker.
    Date,
    /// Object/JSON editor.
    Object,
    /// Select dropdown for enumerated string unions.
    Select,
    /// Color picker.
    Color,
}

impl Default for ControlKind {
    #[inline]
    fn default() -> Self {
        Self::Text
    }
}

/// Schema category: where an entry surfaces in the documentation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Attributes,
    Properties,
    Slots,
    CssProps,
    CssParts,
    CssStates,
    Events,
    Methods,
}

impl Category {
    /// Display label used in the documentation table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Properties => "properties",
            Self::Slots => "slots",
            Self::CssProps => "css properties",
            Self::CssParts => "css shadow parts",
            Self::CssStates => "css states",
            Self::Events => "events",
            Self::Methods => "methods",
        }
    }
}

/// One schema entry: a single control (or disabled placeholder) exposed to
/// the documentation tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgType {
    /// Display name (the attribute/property/part name, without key scoping).
    pub name: String,

    /// Description, possibly carrying an appended `arg ref` annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Control kind; `None` means the entry is not editable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<ControlKind>,

    /// Option list for enumerated string unions.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<String>,

    /// Default value; JSON-decoded for object-typed controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Raw type expression for documentation display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_summary: Option<String>,

    /// Raw default literal for documentation display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_summary: Option<String>,

    /// Reset placeholder entries are hidden from the documentation table;
    /// they exist so the host UI can blank a stale control when switching
    /// components.
    #[serde(default)]
    pub table_disabled: bool,
}

impl ArgType {
    /// Create a disabled reset placeholder.
    #[inline]
    pub fn reset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_disabled: true,
            ..Default::default()
        }
    }

    /// Create an editable entry with the given control kind.
    #[inline]
    pub fn control(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            control: Some(kind),
            ..Default::default()
        }
    }

    /// Create a non-editable display entry (`control: false`).
    #[inline]
    pub fn display(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    #[inline]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Set the option list.
    #[inline]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Set the default value.
    #[inline]
    pub fn with_default(mut self, value: Option<serde_json::Value>) -> Self {
        self.default_value = value;
        self
    }

    /// Set the category.
    #[inline]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the type summary.
    #[inline]
    pub fn with_type_summary(mut self, summary: Option<String>) -> Self {
        self.type_summary = summary;
        self
    }

    /// Set the default-value summary.
    #[inline]
    pub fn with_default_summary(mut self, summary: Option<String>) -> Self {
        self.default_summary = summary;
        self
    }
}

/// Ordered schema: key → entry, preserving assembly order.
pub type ArgTypes = IndexMap<String, ArgType>;

/// Ordered value set: key → current value, one entry per editable control.
pub type Args = IndexMap<String, serde_json::Value>;

/// Extraction result for one category.
#[derive(Debug, Clone, Default)]
pub struct ArgSet {
    /// Disabled placeholders keyed by member name.
    pub resets: ArgTypes,
    /// Editable (or display) entries keyed by their category-scoped key.
    pub args: ArgTypes,
}

/// Extraction result for field members, split by attribute mirroring.
#[derive(Debug, Clone, Default)]
pub struct FieldArgs {
    /// Disabled placeholders keyed by property name.
    pub resets: ArgTypes,
    /// Entries for attribute-backed fields, keyed by attribute name.
    pub attr_args: ArgTypes,
    /// Entries for plain properties, keyed by property name.
    pub prop_args: ArgTypes,
}
