use crate::markers::{CONTAINER_CLASSES, LOADING_BODY_CLASS};
use dom::{Node, traverse};
use locale::LocaleSources;

/// Locale-bearing host services, read once per rebuild.
#[derive(Clone, Debug, Default)]
pub struct HostServices {
    /// Current locale of the host's i18n service.
    pub i18n_locale: Option<String>,
    /// Authenticated user's locale preference, if any.
    pub user_locale: Option<String>,
    /// Site-wide default locale setting.
    pub default_locale: Option<String>,
}

/// Owned DOM for the currently displayed page.
///
/// The root is the document element (carries the `lang` attribute); the body
/// and the category container are located by walking from it, never cached,
/// so the accessors stay correct across child-list replacement.
pub struct PageState {
    root: Node,
}

impl PageState {
    pub fn new(mut root: Node) -> Self {
        traverse::assign_node_ids(&mut root);
        PageState { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn document_lang(&self) -> Option<&str> {
        self.root.attr("lang")
    }

    pub fn locale_sources<'a>(&'a self, host: &'a HostServices) -> LocaleSources<'a> {
        LocaleSources {
            i18n_locale: host.i18n_locale.as_deref(),
            document_lang: self.document_lang(),
            user_locale: host.user_locale.as_deref(),
            default_locale: host.default_locale.as_deref(),
        }
    }

    pub fn body(&self) -> Option<&Node> {
        traverse::find_element_by_name(&self.root, "body")
    }

    pub fn body_mut(&mut self) -> Option<&mut Node> {
        traverse::find_element_by_name_mut(&mut self.root, "body")
    }

    /// First container recognized by class, table list before card grid.
    pub fn container(&self) -> Option<&Node> {
        CONTAINER_CLASSES
            .iter()
            .find_map(|class| traverse::find_element_by_class(&self.root, class))
    }

    pub fn container_mut(&mut self) -> Option<&mut Node> {
        for class in CONTAINER_CLASSES {
            // recheck per class; the borrow ends with each iteration
            if traverse::find_element_by_class(&self.root, class).is_some() {
                return traverse::find_element_by_class_mut(&mut self.root, class);
            }
        }
        None
    }

    pub fn set_loading(&mut self, on: bool) {
        if let Some(body) = self.body_mut() {
            if on {
                body.add_class(LOADING_BODY_CLASS);
            } else {
                body.remove_class(LOADING_BODY_CLASS);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.body().is_some_and(|b| b.has_class(LOADING_BODY_CLASS))
    }

    /// Number fresh nodes added since the last pass (moved nodes keep theirs).
    pub fn refresh_ids(&mut self) {
        traverse::assign_node_ids(&mut self.root);
    }
}
