//! Live-sync bridge.
//!
//! After a fragment is rendered and attached, the host environment reports
//! attribute mutations on the rendered instance; the bridge translates each
//! mutation back into a typed value-set update. Boolean controls map
//! through attribute presence/absence, everything else through the literal
//! string value.
//!
//! Attachment timing is the host's concern: mutations arrive asynchronously
//! relative to the render call, so the host should start reporting only
//! after the rendered node exists in the document.

use rustc_hash::FxHashMap;
use serde_json::Value;
use socle_manifest::Component;
use socle_palette::{extract, ControlKind, HelpersConfig};

/// One observed attribute mutation. `value: None` means the attribute was
/// removed.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMutation {
    pub attribute: String,
    pub value: Option<String>,
}

/// A typed update to apply to the active value set.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgUpdate {
    pub key: String,
    pub value: Value,
}

/// Translates observed attribute mutations into value-set updates.
///
/// One bridge is retained per session; [`ControlSync::retarget`] reinstalls
/// the attribute map only when the observed tag name changes, so a
/// superseded target is simply replaced.
#[derive(Debug, Default)]
pub struct ControlSync {
    tag_name: Option<String>,
    attr_controls: FxHashMap<String, Option<ControlKind>>,
    updating: bool,
}

impl ControlSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently observed tag name, if any.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// Point the bridge at a component. A no-op when the tag name is
    /// unchanged, so repeated renders of the same component keep the
    /// existing installation.
    pub fn retarget(&mut self, component: &Component, config: &HelpersConfig) {
        let tag = component
            .tag_name
            .clone()
            .unwrap_or_else(|| component.name.clone());
        if self.tag_name.as_deref() == Some(tag.as_str()) {
            return;
        }

        let fields = extract::attributes_and_properties(component, config, true);
        self.attr_controls = fields
            .attr_args
            .values()
            .map(|entry| (entry.name.clone(), entry.control))
            .collect();
        self.tag_name = Some(tag);
        self.updating = false;
    }

    /// Translate a batch of observed mutations into value-set updates.
    ///
    /// Self-triggered `class` churn is ignored while an update is in
    /// flight; the guard flag brackets each mutation so the bridge's own
    /// writes cannot re-trigger it within one batch.
    pub fn apply(&mut self, mutations: &[AttributeMutation]) -> Vec<ArgUpdate> {
        let mut updates = Vec::with_capacity(mutations.len());

        for mutation in mutations {
            if mutation.attribute == "class" && self.updating {
                continue;
            }
            self.updating = true;

            let control = self
                .attr_controls
                .get(&mutation.attribute)
                .copied()
                .flatten();
            let value = if control == Some(ControlKind::Boolean) {
                Value::Bool(mutation.value.is_some())
            } else {
                mutation
                    .value
                    .clone()
                    .map(Value::String)
                    .unwrap_or(Value::Null)
            };

            updates.push(ArgUpdate {
                key: mutation.attribute.clone(),
                value,
            });
            self.updating = false;
        }

        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use socle_manifest::Manifest;

    fn component(tag: &str) -> Component {
        let manifest: Manifest = serde_json::from_str(&format!(
            r#"{{
              "modules": [{{
                "declarations": [{{
                  "kind": "class",
                  "name": "XToggle",
                  "tagName": "{tag}",
                  "members": [
                    {{
                      "kind": "field",
                      "name": "checked",
                      "type": {{ "text": "boolean" }},
                      "default": "false"
                    }},
                    {{
                      "kind": "field",
                      "name": "label",
                      "type": {{ "text": "string" }}
                    }}
                  ],
                  "attributes": [
                    {{ "name": "checked", "fieldName": "checked" }},
                    {{ "name": "label", "fieldName": "label" }}
                  ]
                }}]
              }}]
            }}"#
        ))
        .unwrap();
        manifest.component_by_tag(tag).unwrap().clone()
    }

    #[test]
    fn test_boolean_attribute_presence() {
        let mut sync = ControlSync::new();
        sync.retarget(&component("x-toggle"), &HelpersConfig::default());

        let updates = sync.apply(&[
            AttributeMutation {
                attribute: "checked".to_string(),
                value: Some("".to_string()),
            },
            AttributeMutation {
                attribute: "checked".to_string(),
                value: None,
            },
        ]);

        assert_eq!(updates[0].value, json!(true));
        assert_eq!(updates[1].value, json!(false));
    }

    #[test]
    fn test_string_attribute_literal_value() {
        let mut sync = ControlSync::new();
        sync.retarget(&component("x-toggle"), &HelpersConfig::default());

        let updates = sync.apply(&[AttributeMutation {
            attribute: "label".to_string(),
            value: Some("On".to_string()),
        }]);
        assert_eq!(updates[0].key, "label");
        assert_eq!(updates[0].value, json!("On"));

        let removed = sync.apply(&[AttributeMutation {
            attribute: "label".to_string(),
            value: None,
        }]);
        assert_eq!(removed[0].value, Value::Null);
    }

    #[test]
    fn test_unknown_attribute_passes_as_string() {
        let mut sync = ControlSync::new();
        sync.retarget(&component("x-toggle"), &HelpersConfig::default());

        let updates = sync.apply(&[AttributeMutation {
            attribute: "data-state".to_string(),
            value: Some("open".to_string()),
        }]);
        assert_eq!(updates[0].value, json!("open"));
    }

    #[test]
    fn test_retarget_only_on_tag_change() {
        let mut sync = ControlSync::new();
        sync.retarget(&component("x-toggle"), &HelpersConfig::default());
        assert_eq!(sync.tag_name(), Some("x-toggle"));

        // Same tag: installation kept.
        sync.retarget(&component("x-toggle"), &HelpersConfig::default());
        assert_eq!(sync.tag_name(), Some("x-toggle"));

        // New tag: replaced.
        sync.retarget(&component("x-switch"), &HelpersConfig::default());
        assert_eq!(sync.tag_name(), Some("x-switch"));
    }
}
