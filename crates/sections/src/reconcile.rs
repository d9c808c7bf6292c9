use crate::config::SectionsConfig;
use crate::index::{self, ItemLayout};
use crate::markers::{HEADING_CLASS, HEADING_OTHER_CLASS, LOCALE_ATTR, PROCESSED_ATTR};
use crate::page::{HostServices, PageState};
use crate::partition::{Group, PartitionOptions, partition};
use dom::Node;
use locale::resolve_locale;

/// What a rebuild invocation did to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// The container's children were replaced with the partitioned groups.
    Built { sections: usize, other: usize },
    /// Container already built for the current locale; nothing touched.
    SkippedProcessed,
    NoContainer,
    NoSections,
    NoCategories,
}

impl RebuildOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, RebuildOutcome::Built { .. })
    }
}

/// Run the full partition-and-reconcile pipeline against the page.
///
/// Whatever happens, the body loading class is cleared before returning;
/// every other mutation is gated behind the guards below.
pub fn rebuild(page: &mut PageState, host: &HostServices, cfg: &SectionsConfig) -> RebuildOutcome {
    let current = resolve_locale(&page.locale_sources(host));
    let outcome = rebuild_guarded(page, cfg, &current);
    if outcome.mutated() {
        page.refresh_ids();
    }
    page.set_loading(false);

    match outcome {
        RebuildOutcome::Built { sections, other } => {
            log::debug!("rebuilt category sections: {sections} section(s), {other} in other, locale {current}");
        }
        other => log::debug!("rebuild was a no-op: {other:?} (locale {current})"),
    }
    outcome
}

fn rebuild_guarded(page: &mut PageState, cfg: &SectionsConfig, current: &str) -> RebuildOutcome {
    let Some(container) = page.container_mut() else {
        return RebuildOutcome::NoContainer;
    };

    // A stale locale record invalidates the processed flag before it is read,
    // so a locale change forces a rebuild without an explicit reset call.
    let stale = container
        .attr(LOCALE_ATTR)
        .is_some_and(|recorded| !recorded.eq_ignore_ascii_case(current));
    if stale {
        container.set_attr(PROCESSED_ATTR, "false");
    }

    if container.attr(PROCESSED_ATTR) == Some("true") {
        return RebuildOutcome::SkippedProcessed;
    }
    if cfg.sections.is_empty() {
        return RebuildOutcome::NoSections;
    }
    if index::count_identifiable(container) == 0 {
        return RebuildOutcome::NoCategories;
    }

    let layout = ItemLayout::of(container);
    let idx = index::build_index(container);
    let groups = partition(
        &cfg.sections,
        idx,
        &PartitionOptions {
            show_other: cfg.show_other_section,
            other_title: &cfg.other_section_title,
            current_locale: current,
            fallback_locale: &cfg.fallback_locale,
        },
    );

    let sections = groups.iter().filter(|g| !g.is_other).count();
    let other = groups
        .iter()
        .filter(|g| g.is_other)
        .map(|g| g.members.len())
        .sum();

    let fragment = assemble_fragment(groups, layout, cfg.enable_collapse);
    if let Some(children) = container.children_mut() {
        // single-assignment replacement of the whole child list
        *children = fragment;
    }
    container.set_attr(PROCESSED_ATTR, "true");
    container.set_attr(LOCALE_ATTR, current);

    RebuildOutcome::Built { sections, other }
}

fn assemble_fragment(groups: Vec<Group>, layout: ItemLayout, collapsible: bool) -> Vec<Node> {
    let mut fragment = Vec::new();
    for group in groups {
        if let Some(title) = &group.title {
            fragment.push(heading_node(title, group.is_other, layout, collapsible));
        }
        for entry in group.members {
            // moved, not cloned: identity and attached state survive
            fragment.push(entry.node);
        }
    }
    fragment
}

fn heading_node(title: &str, is_other: bool, layout: ItemLayout, collapsible: bool) -> Node {
    let mut heading = match layout {
        ItemLayout::TableRows => Node::element("tr").with_child(
            Node::element("th")
                .with_attr("colspan", "5")
                .with_child(Node::text(title)),
        ),
        ItemLayout::Cards => Node::element("div").with_child(Node::text(title)),
    };
    heading.add_class(HEADING_CLASS);
    if is_other {
        heading.add_class(HEADING_OTHER_CLASS);
    }
    if collapsible {
        heading.set_attr("role", "button");
        heading.set_attr("tabindex", "0");
        heading.set_attr("aria-expanded", "true");
    }
    heading
}
