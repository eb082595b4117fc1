//! Naming convention conversions between SVG and react-native-svg.

/// Upper-case every ASCII lowercase letter that follows a `-` or `_`,
/// dropping the separator. All other characters pass through.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if (c == '-' || c == '_')
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }

    out
}

/// Convert a CSS property name to its style object key.
///
/// Only the `-ms` vendor prefix loses its leading dash; `-webkit-` and `-moz-`
/// keep it and therefore come out capitalized (`WebkitTransform`), which is
/// what React style objects expect.
pub fn to_css_property_name(name: &str) -> String {
    match name.strip_prefix("-ms") {
        Some(rest) => to_camel_case(&format!("ms{rest}")),
        None => to_camel_case(name),
    }
}

/// Convert an attribute name to a prop name.
pub fn to_attribute_name(name: &str) -> String {
    to_camel_case(name)
}

/// Convert a tag name to a component name by upper-casing its first character.
pub fn to_tag_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapse the first `prefix:x` in `name` into `prefixX`.
pub fn collapse_namespace(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    let colon = (1..chars.len().saturating_sub(1)).find(|&i| {
        chars[i] == ':' && is_word_char(chars[i - 1]) && is_word_char(chars[i + 1])
    });

    match colon {
        Some(i) => {
            let mut out: String = chars[..i].iter().collect();
            out.push(chars[i + 1].to_ascii_uppercase());
            out.extend(&chars[i + 2..]);
            out
        }
        None => name.to_string(),
    }
}

/// Full attribute key normalization: namespace collapse, then camel-case.
pub fn normalize_attribute_key(name: &str) -> String {
    to_attribute_name(&collapse_namespace(name))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
