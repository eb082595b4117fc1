//! JSX serialization of sanitized trees.

use crate::Options;
use crate::ast::*;

/// Serialize an element tree to indented JSX markup.
pub fn serialize_jsx(root: &Element, options: &Options) -> String {
    let mut out = String::new();
    serialize_element(&mut out, root, 0, options.indent);
    out
}

fn serialize_element(out: &mut String, elem: &Element, depth: usize, indent: usize) {
    push_indent(out, depth, indent);
    out.push('<');
    out.push_str(&elem.name);

    for (name, value) in &elem.attributes {
        out.push(' ');
        out.push_str(name);
        match value {
            AttrValue::Text(text) => {
                out.push_str("=\"");
                push_escaped_attr(out, text);
                out.push('"');
            }
            AttrValue::Object(object) => {
                out.push_str("={");
                out.push_str(object);
                out.push('}');
            }
        }
    }

    // Children or self-closing
    if elem.children.is_empty() {
        out.push_str(" />\n");
        return;
    }

    out.push('>');

    if elem.children.iter().all(|n| matches!(n, Node::Text(_))) {
        for child in &elem.children {
            if let Node::Text(text) = child {
                push_escaped_text(out, text.trim());
            }
        }
    } else {
        out.push('\n');
        for child in &elem.children {
            match child {
                Node::Element(e) => serialize_element(out, e, depth + 1, indent),
                Node::Text(text) => {
                    // Gaps between shapes render nothing; gaps between text runs are spaces.
                    if text.trim().is_empty() && !is_text_content(&elem.name) {
                        continue;
                    }
                    push_indent(out, depth + 1, indent);
                    push_text_run(out, text);
                    out.push('\n');
                }
            }
        }
        push_indent(out, depth, indent);
    }

    out.push_str("</");
    out.push_str(&elem.name);
    out.push_str(">\n");
}

fn is_text_content(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "text" | "tspan" | "textpath"
    )
}

/// Write a text run that sits on its own line between elements.
///
/// JSX trims text at line breaks, so a run with leading or trailing
/// whitespace is written as a string expression. Whitespace runs collapse to
/// one space, as SVG renders them.
fn push_text_run(out: &mut String, text: &str) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let starts = text.starts_with(char::is_whitespace);
    let ends = text.ends_with(char::is_whitespace);

    if !starts && !ends {
        push_escaped_text(out, &collapsed);
        return;
    }

    let mut run = String::with_capacity(collapsed.len() + 2);
    if starts {
        run.push(' ');
    }
    run.push_str(&collapsed);
    if ends && !collapsed.is_empty() {
        run.push(' ');
    }
    out.push('{');
    // A plain string always serializes.
    out.push_str(&serde_json::to_string(&run).unwrap_or_else(|_| "\"\"".to_string()));
    out.push('}');
}

fn push_indent(out: &mut String, depth: usize, indent: usize) {
    out.extend(std::iter::repeat_n(' ', depth * indent));
}

fn push_escaped_attr(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_text(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
}
