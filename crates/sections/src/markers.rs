//! Attribute and class vocabulary this engine reads from and writes into the
//! page. Everything the host styles or queries is named here.

/// Container flag: "true" once the current child list was built by us.
pub const PROCESSED_ATTR: &str = "data-sections-processed";
/// Container record of the locale the last build resolved.
pub const LOCALE_ATTR: &str = "data-sections-locale";

/// Every generated heading carries this class.
pub const HEADING_CLASS: &str = "category-section-heading";
/// Variant class on the trailing unclaimed-categories heading.
pub const HEADING_OTHER_CLASS: &str = "category-section-heading--other";
/// Set on a heading while its member elements are hidden.
pub const COLLAPSED_CLASS: &str = "collapsed";
/// Set on member elements hidden by a collapsed heading.
pub const HIDDEN_CLASS: &str = "section-hidden";

/// Body class toggled while a rebuild is pending.
pub const LOADING_BODY_CLASS: &str = "categories-sectioning";

/// Identifier attribute on category listing elements.
pub const CATEGORY_ID_ATTR: &str = "data-category-id";
/// Path marker that makes an anchor href recognizable as a category link.
pub const CATEGORY_PATH_MARKER: &str = "/c/";

/// Container classes, checked in order: table-style list, then card grid.
pub const CONTAINER_CLASSES: &[&str] = &["category-list", "category-boxes"];
