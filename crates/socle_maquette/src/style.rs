//! Scoped style block rendering.
//!
//! Three independently-computed sub-blocks: CSS custom properties scoped to
//! the tag name, `::part()` rules for shadow parts, and `:state()` rules for
//! custom states. The whole `<style>` element is omitted when every
//! sub-block is blank after whitespace normalization.

use serde_json::Value;
use socle_manifest::Component;
use socle_palette::{decoded_default, extract, ArgType, Args, Category, HelpersConfig};

/// Render the component's scoped style block from the current value set.
///
/// Returns an empty string when there is nothing to render (no value set,
/// all categories excluded, or every value blank/default).
pub fn style_template(
    component: &Component,
    args: Option<&Args>,
    config: &HelpersConfig,
    exclude: &[Category],
) -> String {
    let Some(args) = args else {
        return String::new();
    };
    let tag = component.tag_name.as_deref().unwrap_or(&component.name);

    let css_props = if exclude.contains(&Category::CssProps) {
        String::new()
    } else {
        css_prop_block(component, tag, args, config)
    };
    let css_parts = if exclude.contains(&Category::CssParts) {
        String::new()
    } else {
        css_parts_block(component, tag, args, config)
    };
    let css_states = if exclude.contains(&Category::CssStates) {
        String::new()
    } else {
        css_states_block(component, tag, args, config)
    };

    let blocks: Vec<&str> = [css_props.as_str(), css_parts.as_str(), css_states.as_str()]
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .collect();

    if blocks.is_empty() {
        return String::new();
    }

    format!("<style>\n  {}\n</style>", blocks.join("\n\n  "))
}

/// Whether a value should render, given the entry's default.
fn should_render(value: &Value, entry: &ArgType, config: &HelpersConfig) -> bool {
    let is_default = decoded_default(entry).as_ref() == Some(value);
    !is_default || config.render_default_values
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// CSS custom properties as one rule scoped to the tag name.
fn css_prop_block(
    component: &Component,
    tag: &str,
    args: &Args,
    config: &HelpersConfig,
) -> String {
    if component.css_properties.is_empty() {
        return String::new();
    }

    let css_props = extract::css_properties(component, true).args;
    let mut lines = Vec::new();

    for (key, entry) in &css_props {
        let Some(value) = args.get(key) else { continue };
        let text = css_value(value);
        if text.trim().is_empty() || !should_render(value, entry, config) {
            continue;
        }
        lines.push(format!("    {}: {}", entry.name, text));
    }

    if lines.is_empty() {
        return String::new();
    }

    format!("{} {{\n{};\n  }}", tag, lines.join(";\n"))
}

/// `::part()` rules for shadow parts with non-blank values.
fn css_parts_block(
    component: &Component,
    tag: &str,
    args: &Args,
    config: &HelpersConfig,
) -> String {
    if component.css_parts.is_empty() {
        return String::new();
    }

    let parts = extract::css_parts(component, config, true).args;
    scoped_rules(&parts, "-part", args, config, |name| {
        format!("{}::part({})", tag, name)
    })
}

/// `:state()` rules for custom states with non-blank values.
fn css_states_block(
    component: &Component,
    tag: &str,
    args: &Args,
    config: &HelpersConfig,
) -> String {
    if component.css_states.is_empty() {
        return String::new();
    }

    let states = extract::css_states(component, config, true).args;
    scoped_rules(&states, "-state", args, config, |name| {
        format!("{}:state({})", tag, name)
    })
}

fn scoped_rules(
    entries: &socle_palette::ArgTypes,
    suffix: &str,
    args: &Args,
    config: &HelpersConfig,
    selector: impl Fn(&str) -> String,
) -> String {
    let mut rules = Vec::new();

    for (key, entry) in entries {
        if !key.ends_with(suffix) {
            continue;
        }
        let Some(value) = args.get(key) else { continue };
        let text = css_value(value);
        if text.split_whitespace().next().is_none() || !should_render(value, entry, config) {
            continue;
        }

        let body = text
            .lines()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        rules.push(format!("{} {{\n{}\n  }}", selector(&entry.name), body));
    }

    rules.join("\n\n")
}
