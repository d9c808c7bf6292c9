use crate::{Id, Node};

/// Give every unnumbered node a fresh `Id`, continuing past the highest id
/// already present so repeated passes over a growing tree never collide.
pub fn assign_node_ids(root: &mut Node) {
    fn max_id(node: &Node, max: &mut u32) {
        if node.id().0 > *max {
            *max = node.id().0;
        }
        for c in node.children() {
            max_id(c, max);
        }
    }

    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id(0) {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Node::Element { children, .. } = node {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut max = 0;
    max_id(root, &mut max);
    let mut next = max + 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Node::Element { children, .. } = node {
        for c in children {
            if let Some(found) = find_node_by_id(c, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_element_by_name<'a>(node: &'a Node, tag: &str) -> Option<&'a Node> {
    if node.is_element_named(tag) {
        return Some(node);
    }
    if let Node::Element { children, .. } = node {
        for c in children {
            if let Some(found) = find_element_by_name(c, tag) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_element_by_name_mut<'a>(node: &'a mut Node, tag: &str) -> Option<&'a mut Node> {
    if node.is_element_named(tag) {
        return Some(node);
    }
    if let Node::Element { children, .. } = node {
        for c in children {
            if let Some(found) = find_element_by_name_mut(c, tag) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_element_by_class<'a>(node: &'a Node, class: &str) -> Option<&'a Node> {
    if node.has_class(class) {
        return Some(node);
    }
    if let Node::Element { children, .. } = node {
        for c in children {
            if let Some(found) = find_element_by_class(c, class) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_element_by_class_mut<'a>(node: &'a mut Node, class: &str) -> Option<&'a mut Node> {
    if node.has_class(class) {
        return Some(node);
    }
    if let Node::Element { children, .. } = node {
        for c in children {
            if let Some(found) = find_element_by_class_mut(c, class) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::element("html")
            .with_child(
                Node::element("body").with_attr("class", "site").with_child(
                    Node::element("div")
                        .with_attr("class", "category-list")
                        .with_child(Node::element("div").with_attr("data-category-id", "4")),
                ),
            )
    }

    #[test]
    fn assigns_unique_ids_once() {
        let mut root = sample();
        assign_node_ids(&mut root);
        let first = root.id();
        assert_ne!(first, Id(0));

        // a second pass leaves existing ids untouched
        assign_node_ids(&mut root);
        assert_eq!(root.id(), first);
    }

    #[test]
    fn later_passes_continue_past_existing_ids() {
        let mut root = sample();
        assign_node_ids(&mut root);
        let mut highest = 0;
        fn max_of(node: &Node, out: &mut u32) {
            *out = (*out).max(node.id().0);
            for c in node.children() {
                max_of(c, out);
            }
        }
        max_of(&root, &mut highest);

        let list = find_element_by_class_mut(&mut root, "category-list").unwrap();
        list.children_mut()
            .unwrap()
            .push(Node::element("div").with_attr("data-category-id", "9"));
        assign_node_ids(&mut root);

        let added = find_element_by_class(&root, "category-list").unwrap().children()[1].id();
        assert!(added.0 > highest);
    }

    #[test]
    fn finds_by_class_and_name() {
        let mut root = sample();
        assign_node_ids(&mut root);
        assert!(find_element_by_name(&root, "body").is_some());
        let list = find_element_by_class(&root, "category-list").unwrap();
        assert_eq!(list.children().len(), 1);
        assert!(find_element_by_class(&root, "no-such-class").is_none());
    }

    #[test]
    fn mutable_lookup_reaches_same_node() {
        let mut root = sample();
        assign_node_ids(&mut root);
        let id = find_element_by_class(&root, "category-list").unwrap().id();
        let list = find_element_by_class_mut(&mut root, "category-list").unwrap();
        assert_eq!(list.id(), id);
        list.set_attr("data-sections-processed", "true");
        assert!(find_node_by_id(&root, id).unwrap().has_attr("data-sections-processed"));
    }
}
