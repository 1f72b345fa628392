//! Example-fragment rendering.
//!
//! Turns a component description plus a live value set into a markup
//! fragment: scoped style block, opening tag with attribute/property
//! bindings, slotted children, closing tag, and an optional instrumentation
//! script.

use htmlize::escape_attribute;
use indexmap::IndexMap;
use serde_json::Value;
use socle_manifest::Component;
use socle_palette::{decoded_default, extract, Args, ArgTypes, Category, ControlKind, HelpersConfig};

use crate::slots::slots_template;
use crate::style::style_template;

/// Per-render options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Categories excluded from the style block.
    pub exclude_categories: Vec<Category>,

    /// Append the instrumentation script after the fragment.
    pub set_component_variable: bool,

    /// Optional container selector the instrumentation script descends
    /// into (a `<template>` content fragment or shadow root if present).
    pub container_selector: Option<String>,
}

/// Computed bindings for the opening tag.
///
/// Attribute keys are prefixed `?` for boolean controls and property keys
/// are prefixed `.`, mirroring the binding syntax of the rendered output.
/// An attribute entry of `None` means the binding is suppressed at its
/// default but the key is kept so a previously-set attribute can be
/// cleared.
#[derive(Debug, Clone, Default)]
pub struct Operators {
    pub attrs: IndexMap<String, Option<Value>>,
    pub props: IndexMap<String, Value>,
    pub extras: IndexMap<String, Value>,
}

/// Partition the current value set into attribute, property, and
/// pass-through bindings.
pub fn template_operators(
    component: &Component,
    args: &Args,
    arg_types: &ArgTypes,
    config: &HelpersConfig,
) -> Operators {
    let fields = extract::attributes_and_properties(component, config, true);
    let mut operators = Operators::default();

    for (key, attr) in &fields.attr_args {
        let binding_key = if attr.control == Some(ControlKind::Boolean) {
            format!("?{}", attr.name)
        } else {
            attr.name.clone()
        };

        let current = args.get(key).cloned().unwrap_or(Value::Null);
        // Missing defaults compare against the initializer's empty-string
        // placeholder so untouched controls stay suppressed.
        let default = decoded_default(attr).unwrap_or_else(|| Value::String(String::new()));

        if current != default || config.render_default_values {
            // The literal string "false" clears the attribute.
            let value = if current.as_str() == Some("false") {
                Value::Bool(false)
            } else {
                current
            };
            operators.attrs.insert(binding_key, Some(value));
        } else {
            operators.attrs.insert(binding_key, None);
        }
    }

    for (key, value) in args {
        if key.starts_with("on") {
            continue;
        }
        let Some(entry) = fields.prop_args.get(key) else {
            continue;
        };
        let default = decoded_default(entry).unwrap_or_else(|| Value::String(String::new()));
        if *value == default && !config.render_default_values {
            continue;
        }
        operators.props.insert(format!(".{}", key), value.clone());
    }

    // Value-set keys unknown to the schema pass straight through; this is
    // how hosts inject extra bindings. Event-handler keys stay out.
    for (key, value) in args {
        if arg_types.contains_key(key) || key.starts_with("on") {
            continue;
        }
        operators.extras.insert(key.clone(), value.clone());
    }

    operators
}

/// Render the full example fragment.
///
/// Without a value set, emits a bare tag pair for "view source" previews.
pub fn render_template(
    component: &Component,
    args: Option<&Args>,
    arg_types: &ArgTypes,
    config: &HelpersConfig,
    options: &RenderOptions,
    slot: Option<&str>,
) -> String {
    let tag = component.tag_name.as_deref().unwrap_or(&component.name);

    let Some(args) = args else {
        return format!("<{tag}></{tag}>");
    };

    let operators = template_operators(component, args, arg_types, config);
    let style = style_template(component, Some(args), config, &options.exclude_categories);
    let slot_children = slots_template(component, args, config);

    let mut markup = String::with_capacity(256);
    if !style.is_empty() {
        markup.push_str(&style);
        markup.push('\n');
    }

    markup.push('<');
    markup.push_str(tag);
    serialize_operators(&operators, &mut markup);
    markup.push('>');
    markup.push_str(&slot_children);
    if let Some(slot) = slot {
        markup.push_str(slot);
    }
    markup.push_str("</");
    markup.push_str(tag);
    markup.push('>');

    if options.set_component_variable {
        markup.push('\n');
        markup.push_str(&component_variable_script(
            tag,
            options.container_selector.as_deref(),
        ));
    }

    markup
}

fn serialize_operators(operators: &Operators, out: &mut String) {
    for (key, value) in &operators.attrs {
        let Some(value) = value else { continue };
        serialize_attr(key, value, out);
    }

    for (key, value) in &operators.props {
        if value.is_null() {
            continue;
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&prop_value(value));
        out.push('"');
    }

    for (key, value) in &operators.extras {
        serialize_attr(key, value, out);
    }
}

fn serialize_attr(key: &str, value: &Value, out: &mut String) {
    if let Some(name) = key.strip_prefix('?') {
        if is_truthy(value) {
            out.push(' ');
            out.push_str(name);
        }
        return;
    }

    let Some(serialized) = attr_value(value) else {
        return;
    };
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&serialized);
    out.push('"');
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64().map(|f| f != 0.0).unwrap_or(true),
        _ => true,
    }
}

/// Attribute-serialized form; `None` leaves the attribute absent.
fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(text) => Some(escape_attribute(text.as_str()).into_owned()),
        Value::Number(number) => Some(number.to_string()),
        compound => serde_json::to_string(compound)
            .ok()
            .map(|json| escape_attribute(json.as_str()).into_owned()),
    }
}

/// Property-binding value: unlike attributes, `false` is a meaningful value.
fn prop_value(value: &Value) -> String {
    match value {
        Value::String(text) => escape_attribute(text.as_str()).into_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        compound => serde_json::to_string(compound)
            .map(|json| escape_attribute(json.as_str()).into_owned())
            .unwrap_or_default(),
    }
}

/// Instrumentation script exposing the rendered instance under a
/// well-known global, for external test/automation hooks.
pub fn component_variable_script(tag: &str, container: Option<&str>) -> String {
    match container {
        None => format!(
            "<script>\n  window.component = document.querySelector(\"{tag}\");\n</script>"
        ),
        Some(selector) => format!(
            "<script>\n  const container = document.querySelector(\"{selector}\");\n  const root = container?.content ?? container?.shadowRoot ?? container;\n  window.component = root?.querySelector(\"{tag}\") ?? document.querySelector(\"{tag}\");\n</script>"
        ),
    }
}
