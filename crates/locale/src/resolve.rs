use crate::tags::{FALLBACK_LOCALE, normalize_tag};

/// Read-only locale sources the host exposes, in resolution priority order.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleSources<'a> {
    /// Current locale of the host's i18n service.
    pub i18n_locale: Option<&'a str>,
    /// `lang` attribute on the document root element.
    pub document_lang: Option<&'a str>,
    /// Authenticated user's locale preference.
    pub user_locale: Option<&'a str>,
    /// Site-wide default locale setting.
    pub default_locale: Option<&'a str>,
}

/// First non-empty source wins; everything absent degrades to
/// [`FALLBACK_LOCALE`]. Never fails, never returns an empty tag.
pub fn resolve_locale(sources: &LocaleSources<'_>) -> String {
    let chain = [
        sources.i18n_locale,
        sources.document_lang,
        sources.user_locale,
        sources.default_locale,
    ];
    for source in chain {
        if let Some(raw) = source {
            let tag = normalize_tag(raw);
            if !tag.is_empty() {
                return tag;
            }
        }
    }
    FALLBACK_LOCALE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18n_service_wins_over_everything() {
        let sources = LocaleSources {
            i18n_locale: Some("fr"),
            document_lang: Some("de"),
            user_locale: Some("es"),
            default_locale: Some("it"),
        };
        assert_eq!(resolve_locale(&sources), "fr");
    }

    #[test]
    fn document_lang_is_normalized() {
        let sources = LocaleSources {
            document_lang: Some("en-US"),
            ..Default::default()
        };
        assert_eq!(resolve_locale(&sources), "en_US");
    }

    #[test]
    fn empty_sources_cascade() {
        let sources = LocaleSources {
            i18n_locale: Some("   "),
            document_lang: None,
            user_locale: Some(""),
            default_locale: Some("sv"),
        };
        assert_eq!(resolve_locale(&sources), "sv");
    }

    #[test]
    fn everything_absent_falls_back_to_constant() {
        assert_eq!(resolve_locale(&LocaleSources::default()), FALLBACK_LOCALE);
    }
}
