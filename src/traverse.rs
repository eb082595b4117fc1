//! Depth-first traversal helpers over element trees.
//!
//! All helpers visit children before their parent.

use crate::ast::Element;

/// Call `f` on every element of the tree, children first.
pub fn for_each<'a>(root: &'a Element, mut f: impl FnMut(&'a Element)) {
    fn visit<'a>(elem: &'a Element, f: &mut impl FnMut(&'a Element)) {
        for child in elem.child_elements() {
            visit(child, f);
        }
        f(elem);
    }
    visit(root, &mut f);
}

/// Call `f` on every element of the tree mutably, children first.
pub fn for_each_mut(root: &mut Element, mut f: impl FnMut(&mut Element)) {
    fn visit(elem: &mut Element, f: &mut impl FnMut(&mut Element)) {
        for child in elem.child_elements_mut() {
            visit(child, f);
        }
        f(elem);
    }
    visit(root, &mut f);
}

/// All elements matching `predicate`, root included, in visitation order.
pub fn filter<'a>(root: &'a Element, mut predicate: impl FnMut(&Element) -> bool) -> Vec<&'a Element> {
    let mut found = Vec::new();
    for_each(root, |elem| {
        if predicate(elem) {
            found.push(elem);
        }
    });
    found
}

/// The first element in visitation order whose `id` attribute is `id`.
pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    filter(root, |elem| elem.get_attr("id") == Some(id))
        .into_iter()
        .next()
}
