use crate::config::{SectionSpec, normalize_ids};
use crate::index::{CategoryEntry, CategoryIndex};
use locale::localize_title;

/// One output group: an optional resolved heading plus the member entries in
/// display order. `title` is `None` only for the headerless leftover group
/// emitted when the other-section flag is off.
#[derive(Debug)]
pub struct Group {
    pub title: Option<String>,
    pub is_other: bool,
    pub members: Vec<CategoryEntry>,
}

pub struct PartitionOptions<'a> {
    pub show_other: bool,
    pub other_title: &'a str,
    pub current_locale: &'a str,
    pub fallback_locale: &'a str,
}

/// Split the index into ordered groups.
///
/// Every indexed entry lands in exactly one group: sections claim entries
/// first-match-wins in configured order (members follow the configured
/// identifier order, not DOM order); whatever is never claimed forms the
/// trailing group in original encounter order. Sections whose identifiers
/// all miss the index emit nothing.
pub fn partition(
    specs: &[SectionSpec],
    index: CategoryIndex,
    opts: &PartitionOptions<'_>,
) -> Vec<Group> {
    let mut entries = index.into_entries();
    // (resolved title, is_other, entry positions)
    let mut picked: Vec<(Option<String>, bool, Vec<usize>)> = Vec::new();

    for spec in specs {
        let mut positions = Vec::new();
        for id in normalize_ids(&spec.category_ids) {
            let claimed = entries
                .iter()
                .position(|e| e.identifier == id && !e.assigned);
            if let Some(pos) = claimed {
                entries[pos].assigned = true;
                positions.push(pos);
            }
        }
        if positions.is_empty() {
            continue;
        }
        let title = localize_title(&spec.title, opts.current_locale, opts.fallback_locale);
        picked.push((Some(title), false, positions));
    }

    let leftover: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.assigned)
        .map(|(pos, _)| pos)
        .collect();
    if !leftover.is_empty() {
        let title = opts.show_other.then(|| {
            localize_title(opts.other_title, opts.current_locale, opts.fallback_locale)
        });
        picked.push((title, true, leftover));
    }

    let mut slots: Vec<Option<CategoryEntry>> = entries.into_iter().map(Some).collect();
    picked
        .into_iter()
        .map(|(title, is_other, positions)| Group {
            title,
            is_other,
            members: positions
                .into_iter()
                .filter_map(|pos| slots[pos].take())
                .collect(),
        })
        .collect()
}
