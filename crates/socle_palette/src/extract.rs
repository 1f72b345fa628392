//! Per-category schema extraction from a component description.
//!
//! Each function walks one slice of the component's metadata and produces
//! the schema entries for that category, plus disabled reset placeholders
//! so the host UI never orphans a reference to a suppressed member.

use crate::classify::{clean_up_type, control_for_type, type_options};
use crate::coerce::decode_object_default;
use crate::config::HelpersConfig;
use crate::types::{ArgSet, ArgType, Category, ControlKind, FieldArgs};
use serde_json::Value;
use socle_manifest::{member_description, remove_quotes, Component, Privacy};

/// Append the `arg ref` annotation unless suppressed.
fn with_arg_ref(
    description: Option<String>,
    arg_ref: &str,
    config: &HelpersConfig,
) -> Option<String> {
    if config.hide_arg_ref || arg_ref.is_empty() {
        return description;
    }
    let base = description.unwrap_or_default();
    Some(format!("{}\n\n\narg ref - `{}`", base, arg_ref))
}

/// Decode a field member's default literal into a schema default value.
fn decode_field_default(raw: Option<&str>, control: ControlKind) -> Option<Value> {
    match raw {
        None | Some("") => None,
        Some("''") => Some(Value::String(String::new())),
        Some(text) if control == ControlKind::Object => Some(decode_object_default(text)),
        Some(text) => Some(Value::String(text.to_string())),
    }
}

/// Extract attribute and property entries from the component's field
/// members.
///
/// Every field contributes a reset placeholder keyed by its property name;
/// private, protected, and static members contribute nothing else. Entries
/// land in `attr_args` when an attribute mirrors the field, `prop_args`
/// otherwise.
pub fn attributes_and_properties(
    component: &Component,
    config: &HelpersConfig,
    enabled: bool,
) -> FieldArgs {
    let mut field_args = FieldArgs::default();
    let type_ref = config.type_ref.as_deref();

    for member in component.field_members() {
        let prop_name = member.name.clone();
        field_args
            .resets
            .insert(prop_name.clone(), ArgType::reset(&prop_name));

        if member.privacy != Privacy::Public || member.is_static {
            continue;
        }

        let attribute = component.attribute_for_field(&member.name);
        let name = attribute
            .map(|a| a.name.clone())
            .unwrap_or_else(|| prop_name.clone());

        let raw_type = member.type_text(type_ref).unwrap_or("").to_string();
        let cleaned_type = clean_up_type(&raw_type);
        let control_kind = control_for_type(&raw_type, attribute.is_some());

        let raw_default = if member.readonly {
            None
        } else {
            Some(remove_quotes(member.default.as_deref().unwrap_or("")))
        };

        let mut entry = ArgType {
            name: name.clone(),
            description: with_arg_ref(
                member_description(member.description.as_deref(), member.deprecated.as_ref()),
                &prop_name,
                config,
            ),
            control: (enabled && !member.readonly).then_some(control_kind),
            options: Vec::new(),
            default_value: decode_field_default(raw_default.as_deref(), control_kind),
            category: Some(if attribute.is_some() {
                Category::Attributes
            } else {
                Category::Properties
            }),
            type_summary: (!raw_type.is_empty()).then(|| raw_type.clone()),
            default_summary: raw_default.filter(|d| !d.is_empty()),
            table_disabled: false,
        };

        let options = type_options(&cleaned_type);
        if options.len() > 1 {
            entry.options = options;
        }

        if attribute.is_some() {
            field_args.attr_args.insert(name, entry);
        } else {
            field_args.prop_args.insert(name, entry);
        }
    }

    field_args
}

/// Framework-wrapper variant of the field extraction: entries keyed by bare
/// property name, with boolean-aware defaults.
pub fn wrapper_properties(component: &Component, config: &HelpersConfig, enabled: bool) -> ArgSet {
    let mut set = ArgSet::default();
    let type_ref = config.type_ref.as_deref();

    for member in component.field_members() {
        set.resets
            .insert(member.name.clone(), ArgType::reset(&member.name));

        if member.privacy != Privacy::Public || member.is_static {
            continue;
        }

        let raw_type = member.type_text(type_ref).unwrap_or("").to_string();
        let cleaned_type = clean_up_type(&raw_type);
        let control_kind = control_for_type(&raw_type, false);
        let stripped = remove_quotes(member.default.as_deref().unwrap_or(""));

        let mut entry = ArgType {
            name: member.name.clone(),
            description: member.description.clone(),
            control: (enabled && !member.readonly).then_some(control_kind),
            options: Vec::new(),
            default_value: Some(wrapper_default(control_kind, &stripped)),
            category: Some(Category::Properties),
            type_summary: (!raw_type.is_empty()).then(|| raw_type.clone()),
            default_summary: (!stripped.is_empty()).then(|| stripped.clone()),
            table_disabled: false,
        };

        let options = type_options(&cleaned_type);
        if options.len() > 1 {
            entry.options = options;
        }

        set.args.insert(member.name.clone(), entry);
    }

    set
}

fn wrapper_default(control: ControlKind, stripped: &str) -> Value {
    if control == ControlKind::Boolean {
        Value::Bool(stripped == "true")
    } else if stripped == "''" {
        Value::String(String::new())
    } else {
        Value::String(stripped.to_string())
    }
}

/// Framework-wrapper event entries, keyed `on<event name>`.
pub fn wrapper_events(component: &Component) -> ArgSet {
    let mut set = ArgSet::default();

    for event in &component.events {
        let key = format!("on{}", event.name);
        set.args.insert(
            key.clone(),
            ArgType::display(key)
                .with_description(event.description.clone())
                .with_category(Category::Events),
        );
    }

    set
}

/// CSS custom property entries, keyed by property name.
///
/// The control is a color picker when the lowercased name mentions
/// "color", a text input otherwise.
pub fn css_properties(component: &Component, enabled: bool) -> ArgSet {
    let mut set = ArgSet::default();

    for property in &component.css_properties {
        set.resets
            .insert(property.name.clone(), ArgType::reset(&property.name));
    }

    for property in &component.css_properties {
        let kind = if property.name.to_lowercase().contains("color") {
            ControlKind::Color
        } else {
            ControlKind::Text
        };

        set.args.insert(
            property.name.clone(),
            ArgType {
                name: property.name.clone(),
                description: property.description.clone(),
                control: enabled.then_some(kind),
                default_value: property.default.clone().map(Value::String),
                category: Some(Category::CssProps),
                ..Default::default()
            },
        );
    }

    set
}

/// CSS shadow part entries, keyed `<name>-part`.
pub fn css_parts(component: &Component, config: &HelpersConfig, enabled: bool) -> ArgSet {
    let mut set = ArgSet::default();

    for part in &component.css_parts {
        set.resets
            .insert(part.name.clone(), ArgType::reset(&part.name));

        let key = format!("{}-part", part.name);
        let arg_ref = if enabled { key.as_str() } else { "" };
        set.args.insert(
            key.clone(),
            ArgType {
                name: part.name.clone(),
                description: with_arg_ref(part.description.clone(), arg_ref, config),
                control: enabled.then_some(ControlKind::Text),
                category: Some(Category::CssParts),
                ..Default::default()
            },
        );
    }

    set
}

/// CSS custom state entries, keyed `<name>-state`.
pub fn css_states(component: &Component, config: &HelpersConfig, enabled: bool) -> ArgSet {
    let mut set = ArgSet::default();

    for state in &component.css_states {
        set.resets
            .insert(state.name.clone(), ArgType::reset(&state.name));

        let key = format!("{}-state", state.name);
        let arg_ref = if enabled { key.as_str() } else { "" };
        set.args.insert(
            key.clone(),
            ArgType {
                name: state.name.clone(),
                description: with_arg_ref(state.description.clone(), arg_ref, config),
                control: enabled.then_some(ControlKind::Text),
                category: Some(Category::CssStates),
                ..Default::default()
            },
        );
    }

    set
}

/// Slot entries, keyed `<name>-slot`; the unnamed slot uses `default-slot`.
pub fn slots(component: &Component, config: &HelpersConfig, enabled: bool) -> ArgSet {
    let mut set = ArgSet::default();

    for slot in &component.slots {
        set.resets
            .insert(slot.name.clone(), ArgType::reset(&slot.name));

        let slot_name = if slot.name.is_empty() {
            "default"
        } else {
            slot.name.as_str()
        };
        let key = format!("{}-slot", slot_name);
        let arg_ref = if enabled { key.as_str() } else { "" };
        set.args.insert(
            key.clone(),
            ArgType {
                name: slot_name.to_string(),
                description: with_arg_ref(slot.description.clone(), arg_ref, config),
                control: enabled.then_some(ControlKind::Text),
                category: Some(Category::Slots),
                ..Default::default()
            },
        );
    }

    set
}

/// Event entries, keyed `<name>-event`; never editable.
pub fn events(component: &Component) -> ArgSet {
    let mut set = ArgSet::default();

    for event in &component.events {
        set.resets
            .insert(event.name.clone(), ArgType::reset(&event.name));
    }

    for event in &component.events {
        let key = format!("{}-event", event.name);
        set.args.insert(
            key,
            ArgType {
                name: event.name.clone(),
                description: event.description.clone(),
                control: None,
                category: Some(Category::Events),
                type_summary: Some(event.type_summary()),
                ..Default::default()
            },
        );
    }

    set
}

/// Public method entries, keyed `<name>-method`; never editable.
/// Methods contribute no resets.
pub fn methods(component: &Component) -> ArgSet {
    let mut set = ArgSet::default();

    for method in component.public_methods() {
        let key = format!("{}-method", method.name);
        set.args.insert(
            key,
            ArgType {
                name: method.name.clone(),
                description: member_description(
                    method.description.as_deref(),
                    method.deprecated.as_ref(),
                ),
                control: None,
                category: Some(Category::Methods),
                type_summary: Some(method.signature()),
                ..Default::default()
            },
        );
    }

    set
}
