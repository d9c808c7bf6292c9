use crate::markers::{CATEGORY_ID_ATTR, CATEGORY_PATH_MARKER};
use dom::Node;

/// How the container lays out its category items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemLayout {
    /// Table-style list: items are `tr` descendants.
    TableRows,
    /// Card grid: items are the container's element children.
    Cards,
}

impl ItemLayout {
    pub fn of(container: &Node) -> ItemLayout {
        if container.is_element_named("table") || container.is_element_named("tbody") {
            ItemLayout::TableRows
        } else {
            ItemLayout::Cards
        }
    }
}

/// One indexed category listing element. The entry owns the moved DOM node;
/// `assigned` flips when a section claims it.
#[derive(Debug)]
pub struct CategoryEntry {
    pub identifier: String,
    pub node: Node,
    pub assigned: bool,
}

/// Identifier-unique, insertion-ordered index of the container's category
/// elements. Rebuilt fresh on every invocation, never persisted.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    entries: Vec<CategoryEntry>,
}

impl CategoryIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|e| e.identifier == identifier)
    }

    /// Duplicate identifiers: the later node wins the slot, the slot keeps
    /// its first-encounter position.
    fn insert(&mut self, identifier: String, node: Node) {
        match self.entries.iter_mut().find(|e| e.identifier == identifier) {
            Some(entry) => entry.node = node,
            None => self.entries.push(CategoryEntry {
                identifier,
                node,
                assigned: false,
            }),
        }
    }

    pub fn into_entries(self) -> Vec<CategoryEntry> {
        self.entries
    }
}

/// Read-only pass: how many identifiable category items would an index build
/// find? The rebuild guard needs this before any mutation happens.
pub fn count_identifiable(container: &Node) -> usize {
    match ItemLayout::of(container) {
        ItemLayout::TableRows => {
            fn count_rows(node: &Node, n: &mut usize) {
                if node.is_element_named("tr") {
                    if extract_identifier(node).is_some() {
                        *n += 1;
                    }
                    return;
                }
                for c in node.children() {
                    count_rows(c, n);
                }
            }
            let mut n = 0;
            for c in container.children() {
                count_rows(c, &mut n);
            }
            n
        }
        ItemLayout::Cards => container
            .children()
            .iter()
            .filter(|c| matches!(c, Node::Element { .. }) && extract_identifier(c).is_some())
            .count(),
    }
}

/// Drain the container's children and index every identifiable item.
///
/// Everything else that was a child (wrapper rows without identifiers,
/// whitespace text, stray markup) is dropped here; the subsequent child-list
/// replacement makes that loss final. Accepted edge case, logged below.
pub fn build_index(container: &mut Node) -> CategoryIndex {
    let layout = ItemLayout::of(container);
    let drained = match container.children_mut() {
        Some(children) => std::mem::take(children),
        None => return CategoryIndex::default(),
    };

    let mut index = CategoryIndex::default();
    let mut dropped = 0usize;
    match layout {
        ItemLayout::TableRows => {
            for child in drained {
                index_rows(child, &mut index, &mut dropped);
            }
        }
        ItemLayout::Cards => {
            for child in drained {
                if !matches!(child, Node::Element { .. }) {
                    continue;
                }
                match extract_identifier(&child) {
                    Some(id) => index.insert(id, child),
                    None => dropped += 1,
                }
            }
        }
    }

    if dropped > 0 {
        log::debug!("{dropped} category item(s) had no extractable identifier and were dropped");
    }
    index
}

fn index_rows(node: Node, index: &mut CategoryIndex, dropped: &mut usize) {
    if node.is_element_named("tr") {
        match extract_identifier(&node) {
            Some(id) => index.insert(id, node),
            None => *dropped += 1,
        }
        return;
    }
    // unwrap tbody/thead wrappers; their rows join the index directly
    if let Node::Element { children, .. } = node {
        for c in children {
            index_rows(c, index, dropped);
        }
    }
}

/// Identifier extraction, first hit wins: the item's own identifier
/// attribute, then the first descendant carrying it, then the trailing
/// numeric path segment of the first category-path anchor.
pub fn extract_identifier(node: &Node) -> Option<String> {
    if let Some(id) = node.attr(CATEGORY_ID_ATTR) {
        return Some(id.to_string());
    }
    if let Some(id) = first_descendant_id_attr(node) {
        return Some(id.to_string());
    }
    find_category_anchor_href(node).and_then(trailing_numeric_segment)
}

fn first_descendant_id_attr(node: &Node) -> Option<&str> {
    for c in node.children() {
        if let Some(id) = c.attr(CATEGORY_ID_ATTR) {
            return Some(id);
        }
        if let Some(id) = first_descendant_id_attr(c) {
            return Some(id);
        }
    }
    None
}

fn find_category_anchor_href(node: &Node) -> Option<&str> {
    if node.is_element_named("a")
        && let Some(href) = node.attr("href")
        && href.contains(CATEGORY_PATH_MARKER)
    {
        return Some(href);
    }
    for c in node.children() {
        if let Some(href) = find_category_anchor_href(c) {
            return Some(href);
        }
    }
    None
}

fn trailing_numeric_segment(href: &str) -> Option<String> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let tail = path.trim_end_matches('/').rsplit('/').next()?;
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(tail.to_string())
}
