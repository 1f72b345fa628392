//! Slot content rendering.
//!
//! Default-slot values are inserted verbatim as children. Named-slot values
//! are scanned into top-level markup nodes: each element gets a
//! `slot="<name>"` reference injected into its opening tag, and bare text
//! is wrapped in a `<span>` carrying the reference so the browser's
//! slot-assignment algorithm can target it.

use memchr::memchr;
use serde_json::Value;
use socle_manifest::Component;
use socle_palette::{extract, Args, HelpersConfig};

/// Render the slot children for a component from the current value set.
///
/// Returns an empty string when no slot value produces content; otherwise
/// the children joined by newlines, framed by newlines for readable markup.
pub fn slots_template(component: &Component, args: &Args, config: &HelpersConfig) -> String {
    if component.slots.is_empty() {
        return String::new();
    }

    let slot_args = extract::slots(component, config, true).args;
    let mut rendered: Vec<String> = Vec::new();

    for key in slot_args.keys() {
        let Some(value) = args.get(key) else { continue };
        let text = match value {
            Value::String(text) => text.clone(),
            Value::Null => continue,
            other => other.to_string(),
        };
        if text.trim().is_empty() {
            continue;
        }

        if key == "default-slot" {
            rendered.push(format!("  {}", text));
            continue;
        }

        let slot_name = key.strip_suffix("-slot").unwrap_or(key.as_str());
        for node in scan_top_level_nodes(&text) {
            match node {
                MarkupNode::Text(chunk) => {
                    if !chunk.trim().is_empty() {
                        rendered.push(format!(
                            "  <span slot=\"{}\">{}</span>",
                            slot_name, chunk
                        ));
                    }
                }
                MarkupNode::Element(raw) => {
                    rendered.push(format!("  {}", inject_slot_attr(raw, slot_name)));
                }
            }
        }
    }

    if rendered.is_empty() {
        String::new()
    } else {
        format!("\n{}\n", rendered.join("\n"))
    }
}

/// One top-level node of a markup fragment.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MarkupNode<'a> {
    Text(&'a str),
    Element(&'a str),
}

/// Elements that never take a closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Split a markup fragment into its top-level text and element nodes.
///
/// A pragmatic byte scanner: tracks nesting of same-named tags so
/// `<div><div></div></div>` counts as one node. Unterminated elements
/// extend to the end of the fragment rather than erroring.
pub(crate) fn scan_top_level_nodes(markup: &str) -> Vec<MarkupNode<'_>> {
    let bytes = markup.as_bytes();
    let mut nodes = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(open_offset) = memchr(b'<', &bytes[pos..]) else {
            nodes.push(MarkupNode::Text(&markup[pos..]));
            break;
        };
        let open = pos + open_offset;
        if open > pos {
            nodes.push(MarkupNode::Text(&markup[pos..open]));
        }

        let name_start = open + 1;
        let mut name_end = name_start;
        while name_end < bytes.len()
            && (bytes[name_end].is_ascii_alphanumeric() || bytes[name_end] == b'-')
        {
            name_end += 1;
        }

        if name_end == name_start {
            // '<' followed by junk (comment, stray bracket): text until the
            // next candidate tag.
            let next = memchr(b'<', &bytes[name_start..])
                .map(|offset| name_start + offset)
                .unwrap_or(bytes.len());
            nodes.push(MarkupNode::Text(&markup[open..next]));
            pos = next;
            continue;
        }

        let name = &markup[name_start..name_end];
        match element_end(markup, open, name) {
            Some(end) => {
                nodes.push(MarkupNode::Element(&markup[open..end]));
                pos = end;
            }
            None => {
                nodes.push(MarkupNode::Element(&markup[open..]));
                break;
            }
        }
    }

    nodes
}

/// Byte offset one past the end of the element opened at `open`.
fn element_end(markup: &str, open: usize, name: &str) -> Option<usize> {
    let bytes = markup.as_bytes();
    let tag_close = memchr(b'>', &bytes[open..]).map(|offset| open + offset)?;

    if bytes[tag_close - 1] == b'/' || VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str())
    {
        return Some(tag_close + 1);
    }

    let name_bytes = name.as_bytes();
    let mut depth = 1usize;
    let mut cursor = tag_close + 1;

    loop {
        let lt = memchr(b'<', &bytes[cursor..]).map(|offset| cursor + offset)?;
        let rest = &bytes[lt + 1..];

        if rest.first() == Some(&b'/')
            && rest[1..].starts_with(name_bytes)
            && is_tag_boundary(bytes, lt + 2 + name_bytes.len())
        {
            let gt = memchr(b'>', &bytes[lt..]).map(|offset| lt + offset)?;
            depth -= 1;
            if depth == 0 {
                return Some(gt + 1);
            }
            cursor = gt + 1;
        } else if rest.starts_with(name_bytes)
            && is_tag_boundary(bytes, lt + 1 + name_bytes.len())
        {
            depth += 1;
            cursor = lt + 1 + name_bytes.len();
        } else {
            cursor = lt + 1;
        }
    }
}

fn is_tag_boundary(bytes: &[u8], index: usize) -> bool {
    match bytes.get(index) {
        None => true,
        Some(b) => matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/'),
    }
}

/// Insert a `slot="<name>"` attribute into an element's opening tag.
pub(crate) fn inject_slot_attr(element: &str, slot_name: &str) -> String {
    let bytes = element.as_bytes();
    let Some(gt) = memchr(b'>', bytes) else {
        return element.to_string();
    };

    let insert_at = if gt > 0 && bytes[gt - 1] == b'/' {
        gt - 1
    } else {
        gt
    };

    format!(
        "{} slot=\"{}\"{}",
        element[..insert_at].trim_end(),
        slot_name,
        &element[insert_at..]
    )
}
