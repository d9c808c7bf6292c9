use crate::tags::{base_lang, is_variant_tag, normalize_tag, tags_equal};
use memchr::memchr;

/// Resolve a possibly locale-encoded title to one display string.
///
/// Contract:
/// - Plain strings (no `tag:` prefix, no `|`) come back unchanged.
/// - Encoded strings resolve: exact current tag → base language of the
///   current tag → exact fallback tag → first registered variant → the raw
///   string when parsing produced nothing.
/// - Empty input short-circuits to the empty string.
pub fn localize_title(raw: &str, current_locale: &str, fallback_locale: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if !is_locale_encoded(raw) {
        return raw.to_string();
    }

    let variants = parse_variants(raw);
    if variants.is_empty() {
        // matched the encoded shape but no segment parsed; raw is the safe result
        return raw.to_string();
    }

    let current = normalize_tag(current_locale);
    if let Some(text) = lookup(&variants, &current) {
        return text.to_string();
    }
    if let Some(text) = lookup(&variants, base_lang(&current)) {
        return text.to_string();
    }
    if let Some(text) = lookup(&variants, &normalize_tag(fallback_locale)) {
        return text.to_string();
    }
    variants[0].1.clone()
}

/// A title is locale-encoded when it opens with a variant tag prefix
/// (`en:` / `pt_BR:`) or contains the `|` variant separator anywhere.
fn is_locale_encoded(raw: &str) -> bool {
    if memchr(b'|', raw.as_bytes()).is_some() {
        return true;
    }
    match memchr(b':', raw.as_bytes()) {
        Some(idx) => is_variant_tag(&raw[..idx]),
        None => false,
    }
}

/// Split into `(tag, text)` variants, insertion-ordered. Later segments for
/// an already-seen tag overwrite the value in place; malformed segments are
/// dropped.
fn parse_variants(raw: &str) -> Vec<(String, String)> {
    let mut variants: Vec<(String, String)> = Vec::new();
    let mut dropped = 0usize;

    for segment in raw.split('|') {
        let Some((tag, text)) = split_tagged(segment) else {
            dropped += 1;
            continue;
        };
        match variants.iter_mut().find(|(t, _)| tags_equal(t, tag)) {
            Some((_, existing)) => *existing = text.to_string(),
            None => variants.push((tag.to_string(), text.to_string())),
        }
    }

    if dropped > 0 {
        log::debug!("title parse dropped {dropped} malformed segment(s) in {raw:?}");
    }
    variants
}

fn split_tagged(segment: &str) -> Option<(&str, &str)> {
    let idx = memchr(b':', segment.as_bytes())?;
    let tag = &segment[..idx];
    if !is_variant_tag(tag) {
        return None;
    }
    Some((tag, segment[idx + 1..].trim()))
}

fn lookup<'a>(variants: &'a [(String, String)], tag: &str) -> Option<&'a str> {
    variants
        .iter()
        .find(|(t, _)| tags_equal(t, tag))
        .map(|(_, text)| text.as_str())
}
