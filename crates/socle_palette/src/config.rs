//! Helper configuration.
//!
//! Configuration is threaded explicitly into every computation; the facade
//! crate owns the process-wide holder used at the composition boundary.

use crate::types::Category;
use serde::{Deserialize, Serialize};

/// Options recognized by the helpers pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HelpersConfig {
    /// Suppress the `arg ref` annotation appended to control descriptions.
    pub hide_arg_ref: bool,

    /// Alternate type-annotation field to prefer over the declared type
    /// (e.g. `"parsedType"`).
    pub type_ref: Option<String>,

    /// Append an instrumentation `<script>` exposing the rendered instance.
    pub set_component_variable: bool,

    /// Render attribute and CSS bindings even when they equal their default.
    pub render_default_values: bool,

    /// Category assembly order; categories missing from the list are
    /// omitted from the schema.
    pub category_order: Vec<Category>,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            hide_arg_ref: false,
            type_ref: Some("parsedType".to_string()),
            set_component_variable: false,
            render_default_values: false,
            category_order: vec![
                Category::Attributes,
                Category::Properties,
                Category::Slots,
                Category::CssProps,
                Category::CssParts,
                Category::CssStates,
                Category::Methods,
                Category::Events,
            ],
        }
    }
}
