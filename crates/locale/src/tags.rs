/// Last-resort locale when every host source comes up empty.
pub const FALLBACK_LOCALE: &str = "en";

/// Canonicalize a raw locale tag: trimmed, hyphens replaced by underscores.
/// `"en-US"` and `"en_US"` are the same tag.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().replace('-', "_")
}

/// Language part of a tag: `"es_MX"` → `"es"`, `"es"` → `"es"`.
pub fn base_lang(tag: &str) -> &str {
    match tag.find('_') {
        Some(idx) => &tag[..idx],
        None => tag,
    }
}

pub fn tags_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// True if `s` is a well-formed variant tag: two lowercase ASCII letters,
/// optionally followed by `_` and two uppercase ASCII letters.
pub fn is_variant_tag(s: &str) -> bool {
    let b = s.as_bytes();
    match b.len() {
        2 => b[0].is_ascii_lowercase() && b[1].is_ascii_lowercase(),
        5 => {
            b[0].is_ascii_lowercase()
                && b[1].is_ascii_lowercase()
                && b[2] == b'_'
                && b[3].is_ascii_uppercase()
                && b[4].is_ascii_uppercase()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_hyphens_and_whitespace() {
        assert_eq!(normalize_tag(" en-US "), "en_US");
        assert_eq!(normalize_tag("fr"), "fr");
    }

    #[test]
    fn base_lang_strips_region() {
        assert_eq!(base_lang("es_MX"), "es");
        assert_eq!(base_lang("es"), "es");
    }

    #[test]
    fn variant_tag_grammar() {
        assert!(is_variant_tag("en"));
        assert!(is_variant_tag("pt_BR"));
        assert!(!is_variant_tag("EN"));
        assert!(!is_variant_tag("pt-BR"));
        assert!(!is_variant_tag("pt_br"));
        assert!(!is_variant_tag("por"));
        assert!(!is_variant_tag(""));
    }
}
