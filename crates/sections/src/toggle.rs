use crate::markers::{COLLAPSED_CLASS, HEADING_CLASS, HIDDEN_CLASS};
use dom::{Id, Node};

/// Collapse or expand the run of member elements owned by a heading.
///
/// Activation (click or keyboard) is the host's affordance; this is the state
/// flip it invokes: toggle the heading's collapsed class and expanded-state
/// attribute, then hide/show every following sibling up to the next heading.
/// Returns false when the id does not name a heading child of the container.
pub fn toggle_heading(container: &mut Node, heading: Id) -> bool {
    let Some(children) = container.children_mut() else {
        return false;
    };
    let Some(pos) = children
        .iter()
        .position(|c| c.id() == heading && c.has_class(HEADING_CLASS))
    else {
        return false;
    };

    let collapsing = !children[pos].has_class(COLLAPSED_CLASS);
    let head = &mut children[pos];
    if collapsing {
        head.add_class(COLLAPSED_CLASS);
        head.set_attr("aria-expanded", "false");
    } else {
        head.remove_class(COLLAPSED_CLASS);
        head.set_attr("aria-expanded", "true");
    }

    for sibling in children[pos + 1..].iter_mut() {
        if sibling.has_class(HEADING_CLASS) {
            break;
        }
        if collapsing {
            sibling.add_class(HIDDEN_CLASS);
        } else {
            sibling.remove_class(HIDDEN_CLASS);
        }
    }
    true
}
