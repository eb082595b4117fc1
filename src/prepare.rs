//! Rewrites applied to the parsed tree before sanitization.

use crate::ast::{Element, Node};
use crate::traverse::for_each_mut;

/// Size used when the root has neither a dimension nor a usable `viewBox`.
pub const DEFAULT_SIZE: &str = "50px";

/// Give the root a `width` and `height` if it lacks them.
///
/// Missing dimensions come from the third and fourth `viewBox` fields, or
/// [`DEFAULT_SIZE`] when there is no `viewBox`. Existing values are kept.
pub fn apply_default_dimensions(root: &mut Element) {
    let view_box: Vec<String> = root
        .get_attr("viewBox")
        .map(|v| {
            v.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let width = view_box.get(2).map_or(DEFAULT_SIZE, String::as_str).to_string();
    let height = view_box.get(3).map_or(DEFAULT_SIZE, String::as_str).to_string();

    if !root.has_attr("width") {
        root.set_attr("width", width);
    }
    if !root.has_attr("height") {
        root.set_attr("height", height);
    }
}

/// Remove inline `style` attributes and `<style>` elements everywhere.
pub fn strip_styles(root: &mut Element) {
    for_each_mut(root, |elem| {
        elem.remove_attr("style");
        elem.children
            .retain(|node| !matches!(node, Node::Element(e) if e.is("style")));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_view_box() {
        let mut svg = Element::new("svg").with_attr("viewBox", "0 0 24 32");
        apply_default_dimensions(&mut svg);
        assert_eq!(svg.get_attr("width"), Some("24"));
        assert_eq!(svg.get_attr("height"), Some("32"));
    }

    #[test]
    fn test_dimensions_with_commas() {
        let mut svg = Element::new("svg").with_attr("viewBox", " 0,0, 100 , 40");
        apply_default_dimensions(&mut svg);
        assert_eq!(svg.get_attr("width"), Some("100"));
        assert_eq!(svg.get_attr("height"), Some("40"));
    }

    #[test]
    fn test_existing_dimensions_win() {
        let mut svg = Element::new("svg")
            .with_attr("width", "10")
            .with_attr("viewBox", "0 0 24 24");
        apply_default_dimensions(&mut svg);
        assert_eq!(svg.get_attr("width"), Some("10"));
        assert_eq!(svg.get_attr("height"), Some("24"));
    }

    #[test]
    fn test_default_dimensions() {
        let mut svg = Element::new("svg");
        apply_default_dimensions(&mut svg);
        assert_eq!(svg.get_attr("width"), Some(DEFAULT_SIZE));
        assert_eq!(svg.get_attr("height"), Some(DEFAULT_SIZE));
    }

    #[test]
    fn test_strip_styles() {
        let mut svg = Element::new("svg")
            .with_attr("style", "fill:red")
            .with_child(Element::new("style").with_text(".a{fill:red}"))
            .with_child(
                Element::new("g").with_child(Element::new("rect").with_attr("style", "x")),
            );
        strip_styles(&mut svg);

        assert!(!svg.has_attr("style"));
        let names: Vec<_> = svg.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["g"]);
        let rect = svg.child_elements().next().and_then(|g| g.child_elements().next());
        assert_eq!(rect.map(|r| r.has_attr("style")), Some(false));
    }
}
