use locale::FALLBACK_LOCALE;
use serde::Deserialize;

/// Section grouping configuration, fixed at initialization and read-only
/// through every rebuild.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub sections: Vec<SectionSpec>,
    pub show_other_section: bool,
    pub other_section_title: String,
    pub fallback_locale: String,
    pub enable_collapse: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        SectionsConfig {
            sections: Vec::new(),
            show_other_section: true,
            other_section_title: "Other".to_string(),
            fallback_locale: FALLBACK_LOCALE.to_string(),
            enable_collapse: false,
        }
    }
}

/// One configured section: a (possibly locale-encoded) title plus the
/// category identifiers it claims, in display order.
#[derive(Clone, Debug, Deserialize)]
pub struct SectionSpec {
    pub title: String,
    #[serde(default)]
    pub category_ids: CategoryIds,
}

/// The `category_ids` field as hosts actually write it: one number, one
/// comma-separated string, or a list mixing both.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CategoryIds {
    Number(i64),
    Text(String),
    Many(Vec<IdValue>),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl Default for CategoryIds {
    fn default() -> Self {
        CategoryIds::Many(Vec::new())
    }
}

/// Flatten every accepted `category_ids` shape into a list of identifier
/// strings. Comma-separated strings drop empty parts; list elements are
/// stringified as written.
pub fn normalize_ids(ids: &CategoryIds) -> Vec<String> {
    match ids {
        CategoryIds::Number(n) => vec![n.to_string()],
        CategoryIds::Text(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        CategoryIds::Many(values) => values
            .iter()
            .map(|v| match v {
                IdValue::Number(n) => n.to_string(),
                IdValue::Text(s) => s.trim().to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_string_is_trimmed_and_split() {
        let ids = CategoryIds::Text("4, 5 ,6".to_string());
        assert_eq!(normalize_ids(&ids), vec!["4", "5", "6"]);
    }

    #[test]
    fn empty_parts_are_dropped() {
        let ids = CategoryIds::Text(" , 7,,".to_string());
        assert_eq!(normalize_ids(&ids), vec!["7"]);
        assert!(normalize_ids(&CategoryIds::Text(String::new())).is_empty());
    }

    #[test]
    fn single_number_becomes_one_element() {
        assert_eq!(normalize_ids(&CategoryIds::Number(12)), vec!["12"]);
    }

    #[test]
    fn mixed_list_is_stringified_in_order() {
        let ids = CategoryIds::Many(vec![
            IdValue::Number(3),
            IdValue::Text("staff".to_string()),
            IdValue::Number(1),
        ]);
        assert_eq!(normalize_ids(&ids), vec!["3", "staff", "1"]);
    }

    #[test]
    fn default_is_empty() {
        assert!(normalize_ids(&CategoryIds::default()).is_empty());
    }

    #[test]
    fn deserializes_all_shapes_from_toml() {
        let cfg: SectionsConfig = toml::from_str(
            r#"
            show_other_section = false
            other_section_title = "en:Other|es:Otros"

            [[sections]]
            title = "Games"
            category_ids = [1, "2"]

            [[sections]]
            title = "Support"
            category_ids = "4, 5"

            [[sections]]
            title = "Meta"
            category_ids = 9
            "#,
        )
        .unwrap();

        assert!(!cfg.show_other_section);
        assert_eq!(cfg.fallback_locale, "en");
        assert_eq!(normalize_ids(&cfg.sections[0].category_ids), vec!["1", "2"]);
        assert_eq!(normalize_ids(&cfg.sections[1].category_ids), vec!["4", "5"]);
        assert_eq!(normalize_ids(&cfg.sections[2].category_ids), vec!["9"]);
    }

    #[test]
    fn deserializes_from_json_values() {
        let spec: SectionSpec =
            serde_json::from_str(r#"{"title": "en:News", "category_ids": [10, "11"]}"#).unwrap();
        assert_eq!(normalize_ids(&spec.category_ids), vec!["10", "11"]);

        // missing field takes the empty default
        let spec: SectionSpec = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert!(normalize_ids(&spec.category_ids).is_empty());
    }
}
