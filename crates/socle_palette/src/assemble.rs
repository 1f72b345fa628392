//! Schema assembly.
//!
//! Merges the per-category extraction maps into one ordered schema,
//! honoring the configured category order and per-call exclusions. The
//! merged schema always starts from the union of reset placeholders so
//! every known member has at least a disabled slot.

use crate::config::HelpersConfig;
use crate::extract;
use crate::types::{ArgTypes, Category};
use socle_manifest::Component;

/// Key the host framework reserves for instance references; the wrapper
/// schema must never surface it.
const WRAPPER_RESERVED_KEY: &str = "ref";

/// Assemble the ordered control schema for a component.
pub fn arg_types(component: &Component, config: &HelpersConfig, exclude: &[Category]) -> ArgTypes {
    let css_props = extract::css_properties(component, true);
    let css_parts = extract::css_parts(component, config, true);
    let slots = extract::slots(component, config, true);
    let fields = extract::attributes_and_properties(component, config, true);
    let events = extract::events(component);
    let css_states = extract::css_states(component, config, true);
    let methods = extract::methods(component);

    let mut merged = ArgTypes::new();
    for resets in [
        &css_props.resets,
        &css_parts.resets,
        &slots.resets,
        &fields.resets,
        &events.resets,
        &css_states.resets,
    ] {
        merge(&mut merged, resets);
    }

    for category in &config.category_order {
        if exclude.contains(category) {
            continue;
        }
        let source = match category {
            Category::Attributes => &fields.attr_args,
            Category::Properties => &fields.prop_args,
            Category::Slots => &slots.args,
            Category::CssProps => &css_props.args,
            Category::CssParts => &css_parts.args,
            Category::CssStates => &css_states.args,
            Category::Events => &events.args,
            Category::Methods => &methods.args,
        };
        merge(&mut merged, source);
    }

    merged
}

/// Assemble the framework-wrapper schema: bare-property keys, `on*` events,
/// no attributes category, and the reserved `ref` key removed after the
/// merge.
pub fn wrapper_arg_types(
    component: &Component,
    config: &HelpersConfig,
    exclude: &[Category],
) -> ArgTypes {
    let css_props = extract::css_properties(component, true);
    let css_parts = extract::css_parts(component, config, true);
    let slots = extract::slots(component, config, true);
    let properties = extract::wrapper_properties(component, config, true);
    let events = extract::wrapper_events(component);
    let css_states = extract::css_states(component, config, true);
    let methods = extract::methods(component);

    let mut merged = ArgTypes::new();
    for resets in [
        &css_props.resets,
        &css_parts.resets,
        &slots.resets,
        &properties.resets,
        &css_states.resets,
    ] {
        merge(&mut merged, resets);
    }

    for category in &config.category_order {
        if exclude.contains(category) {
            continue;
        }
        let source = match category {
            // The wrapper surface has no attribute category.
            Category::Attributes => continue,
            Category::Properties => &properties.args,
            Category::Slots => &slots.args,
            Category::CssProps => &css_props.args,
            Category::CssParts => &css_parts.args,
            Category::CssStates => &css_states.args,
            Category::Events => &events.args,
            Category::Methods => &methods.args,
        };
        merge(&mut merged, source);
    }

    merged.shift_remove(WRAPPER_RESERVED_KEY);
    merged
}

fn merge(target: &mut ArgTypes, source: &ArgTypes) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ControlKind;
    use socle_manifest::Manifest;

    fn component() -> Component {
        let manifest: Manifest = serde_json::from_str(
            r#"{
              "modules": [{
                "declarations": [{
                  "kind": "class",
                  "name": "XButton",
                  "tagName": "x-button",
                  "members": [
                    {
                      "kind": "field",
                      "name": "disabled",
                      "type": { "text": "boolean" },
                      "default": "false"
                    },
                    { "kind": "field", "name": "ref" }
                  ],
                  "attributes": [{ "name": "disabled", "fieldName": "disabled" }],
                  "slots": [{ "name": "" }],
                  "cssParts": [{ "name": "button" }],
                  "events": [{ "name": "pressed" }]
                }]
              }]
            }"#,
        )
        .unwrap();
        manifest.component_by_tag("x-button").unwrap().clone()
    }

    #[test]
    fn test_resets_precede_editable_entries() {
        let schema = arg_types(&component(), &HelpersConfig::default(), &[]);
        // Every known member keeps at least a disabled slot.
        assert!(schema["ref"].table_disabled);
        // An editable entry replaced its reset.
        assert!(!schema["disabled"].table_disabled);
        assert_eq!(schema["disabled"].control, Some(ControlKind::Boolean));
        assert!(schema.contains_key("default-slot"));
        assert!(schema.contains_key("button-part"));
        assert!(schema.contains_key("pressed-event"));
    }

    #[test]
    fn test_excluded_category_left_as_reset() {
        let schema = arg_types(
            &component(),
            &HelpersConfig::default(),
            &[Category::Attributes],
        );
        // The reset placeholder survives, the editable entry does not.
        assert!(schema["disabled"].table_disabled);
        assert!(schema["disabled"].control.is_none());
    }

    #[test]
    fn test_missing_category_order_omits_category() {
        let config = HelpersConfig {
            category_order: vec![Category::Attributes],
            ..Default::default()
        };
        let schema = arg_types(&component(), &config, &[]);
        assert!(!schema.contains_key("default-slot"));
        assert!(!schema.contains_key("button-part"));
        assert!(schema.contains_key("disabled"));
    }

    #[test]
    fn test_wrapper_removes_ref() {
        let schema = wrapper_arg_types(&component(), &HelpersConfig::default(), &[]);
        assert!(!schema.contains_key("ref"));
        // Regardless of category order.
        let reversed = HelpersConfig {
            category_order: vec![
                Category::Events,
                Category::Methods,
                Category::CssStates,
                Category::CssParts,
                Category::CssProps,
                Category::Slots,
                Category::Properties,
                Category::Attributes,
            ],
            ..Default::default()
        };
        let schema = wrapper_arg_types(&component(), &reversed, &[]);
        assert!(!schema.contains_key("ref"));
    }

    #[test]
    fn test_wrapper_event_keys() {
        let schema = wrapper_arg_types(&component(), &HelpersConfig::default(), &[]);
        assert!(schema.contains_key("onpressed"));
        assert!(!schema.contains_key("pressed-event"));
        // Wrapper properties stay keyed by bare property name.
        assert!(schema.contains_key("disabled"));
    }
}
