mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Path from `root` down to the element with `id`, both ends inclusive.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(mut path) = find_path(child, id) {
                path.insert(0, root);
                return Some(path);
            }
        }
    }

    None
}

/// Nearest ancestor-or-self of the element with `id` that matches the
/// predicate, searching upward from the target toward `root`.
pub fn closest<'a>(
    root: &'a Element,
    id: &str,
    predicate: impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    let path = find_path(root, id)?;
    path.into_iter().rev().find(|element| predicate(element))
}

/// Find the first element (depth-first) whose `data` entry for `key`
/// equals `value`.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    if root.get_data(key).is_some_and(|v| v == value) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_data(child, key, value) {
                return Some(found);
            }
        }
    }

    None
}
