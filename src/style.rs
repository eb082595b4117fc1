//! Inline `style` attribute conversion.

use indexmap::IndexMap;

use crate::names::to_camel_case;

/// Parse an inline style string into property/value pairs.
///
/// Declarations are split on `;` and then on the first `:`. Blank declarations
/// are skipped; a declaration without a colon maps to an empty value. A
/// repeated property keeps its first position and its last value.
pub fn parse_style(style: &str) -> IndexMap<String, String> {
    let mut props = IndexMap::new();

    for decl in style.split(';') {
        let decl = decl.trim();
        if decl.is_empty() {
            continue;
        }

        let (prop, value) = decl.split_once(':').unwrap_or((decl, ""));
        props.insert(to_camel_case(prop.trim()), value.trim().to_string());
    }

    props
}

/// Convert an inline style string into an object literal for a `style` prop.
pub fn style_attribute(style: &str) -> String {
    let props = parse_style(style);
    // A map of strings always serializes.
    serde_json::to_string(&props).unwrap_or_else(|_| "{}".to_string())
}
