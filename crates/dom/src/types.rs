pub type NodeId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Id(pub NodeId);

/// Owned page tree node.
///
/// There is deliberately no `Clone` impl: category elements are moved through
/// the pipeline so that node identity (and anything keyed on `Id`) survives
/// reconciliation.
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn element(name: &str) -> Node {
        Node::Element {
            id: Id(0),
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: &str) -> Node {
        Node::Text {
            id: Id(0),
            text: text.to_string(),
        }
    }

    /// Fixture-building chainer; runtime code mutates via `set_attr`.
    pub fn with_attr(mut self, name: &str, value: &str) -> Node {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Node {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
        self
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
        }
    }

    pub fn is_element_named(&self, tag: &str) -> bool {
        match self {
            Node::Element { name, .. } => name.eq_ignore_ascii_case(tag),
            _ => false,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    /// Set or replace an attribute. First write wins the slot position;
    /// later writes overwrite the value in place.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element { attributes, .. } = self {
            for (k, v) in attributes.iter_mut() {
                if k.eq_ignore_ascii_case(name) {
                    *v = Some(value.to_string());
                    return;
                }
            }
            attributes.push((name.to_string(), Some(value.to_string())));
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        if let Node::Element { attributes, .. } = self {
            attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        }
    }

    /// Whitespace-separated token membership test, e.g. class lists.
    pub fn attr_has_token(&self, name: &str, token: &str) -> bool {
        match self.attr(name) {
            Some(value) => value
                .split_whitespace()
                .any(|t| t.eq_ignore_ascii_case(token)),
            None => false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_has_token("class", class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attr("class", &joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        if !self.has_class(class) {
            return;
        }
        let remaining = existing
            .split_whitespace()
            .filter(|t| !t.eq_ignore_ascii_case(class))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_lookup_is_ascii_case_insensitive() {
        let node = Node::element("tr").with_attr("Data-Category-Id", "7");
        assert_eq!(node.attr("data-category-id"), Some("7"));
        assert!(node.has_attr("DATA-CATEGORY-ID"));
    }

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut node = Node::element("div")
            .with_attr("a", "1")
            .with_attr("b", "2");
        node.set_attr("a", "3");
        let Node::Element { attributes, .. } = &node else {
            unreachable!();
        };
        assert_eq!(attributes[0], ("a".to_string(), Some("3".to_string())));
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn class_tokens_add_remove() {
        let mut node = Node::element("body").with_attr("class", "wide dark");
        node.add_class("loading");
        assert!(node.has_class("loading"));
        node.add_class("loading");
        assert_eq!(node.attr("class"), Some("wide dark loading"));
        node.remove_class("dark");
        assert_eq!(node.attr("class"), Some("wide loading"));
    }

    #[test]
    fn text_nodes_have_no_attrs_or_children() {
        let node = Node::text("hello");
        assert_eq!(node.attr("class"), None);
        assert!(node.children().is_empty());
    }
}
