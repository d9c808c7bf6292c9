pub mod resolve;
pub mod tags;
pub mod title;

pub use resolve::{LocaleSources, resolve_locale};
pub use tags::FALLBACK_LOCALE;
pub use title::localize_title;
