use dom::Node;
use sections::markers::CATEGORY_ID_ATTR;
use sections::{HostServices, PageState, SectionsConfig};
use serde::Deserialize;

/// A self-contained category-index snapshot: the locale environment, the
/// section configuration, and the categories the forum rendered.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub site: SiteFixture,
    pub config: SectionsConfig,
    pub layout: Layout,
    pub categories: Vec<CategoryFixture>,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            site: SiteFixture::default(),
            config: SectionsConfig::default(),
            layout: Layout::Table,
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteFixture {
    pub document_lang: Option<String>,
    pub i18n_locale: Option<String>,
    pub user_locale: Option<String>,
    pub default_locale: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Table-style category list (rows).
    Table,
    /// Card grid (boxes).
    Boxes,
}

#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Render without the identifier attribute; the category link is then
    /// the only way to identify this element.
    #[serde(default)]
    pub anchor_only: bool,
}

impl Scene {
    pub fn host_services(&self) -> HostServices {
        HostServices {
            i18n_locale: self.site.i18n_locale.clone(),
            user_locale: self.site.user_locale.clone(),
            default_locale: self.site.default_locale.clone(),
        }
    }

    /// Build the page DOM the way the forum would have rendered it.
    pub fn build_page(&self) -> PageState {
        let container = match self.layout {
            Layout::Table => {
                let mut tbody = Node::element("tbody").with_attr("class", "category-list");
                for cat in &self.categories {
                    tbody = tbody.with_child(cat.as_row());
                }
                Node::element("table").with_child(tbody)
            }
            Layout::Boxes => {
                let mut grid = Node::element("div").with_attr("class", "category-boxes");
                for cat in &self.categories {
                    grid = grid.with_child(cat.as_card());
                }
                grid
            }
        };

        let mut root = Node::element("html");
        if let Some(lang) = &self.site.document_lang {
            root.set_attr("lang", lang);
        }
        PageState::new(root.with_child(Node::element("body").with_child(container)))
    }
}

impl CategoryFixture {
    fn slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => self.name.to_lowercase().replace(' ', "-"),
        }
    }

    fn link(&self) -> Node {
        Node::element("a")
            .with_attr("href", &format!("/c/{}/{}", self.slug(), self.id))
            .with_child(Node::text(&self.name))
    }

    fn as_row(&self) -> Node {
        let mut row = Node::element("tr");
        if !self.anchor_only {
            row.set_attr(CATEGORY_ID_ATTR, &self.id.to_string());
        }
        let mut cell = Node::element("td")
            .with_attr("class", "category")
            .with_child(self.link());
        if let Some(desc) = &self.description {
            cell = cell.with_child(
                Node::element("p")
                    .with_attr("class", "category-description")
                    .with_child(Node::text(desc)),
            );
        }
        row.with_child(cell)
    }

    fn as_card(&self) -> Node {
        let mut card = Node::element("div").with_attr("class", "category-box");
        if !self.anchor_only {
            card.set_attr(CATEGORY_ID_ATTR, &self.id.to_string());
        }
        card = card.with_child(Node::element("h3").with_child(self.link()));
        if let Some(desc) = &self.description {
            card = card.with_child(Node::element("p").with_child(Node::text(desc)));
        }
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_scene() {
        let scene: Scene = toml::from_str(
            r#"
            layout = "boxes"

            [site]
            document_lang = "en-US"

            [config]
            enable_collapse = true

            [[config.sections]]
            title = "en:Fun|es:Diversión"
            category_ids = [1, 2]

            [[categories]]
            id = 1
            name = "Games"

            [[categories]]
            id = 2
            name = "Movies"
            anchor_only = true
            "#,
        )
        .unwrap();

        assert_eq!(scene.layout, Layout::Boxes);
        assert_eq!(scene.categories.len(), 2);

        let page = scene.build_page();
        assert_eq!(page.document_lang(), Some("en-US"));
        let container = page.container().unwrap();
        assert_eq!(container.children().len(), 2);
        assert_eq!(container.children()[0].attr(CATEGORY_ID_ATTR), Some("1"));
        // anchor-only card: identifier comes from the /c/ link instead
        assert!(container.children()[1].attr(CATEGORY_ID_ATTR).is_none());
    }

    #[test]
    fn table_scene_renders_rows_under_a_table() {
        let scene = Scene {
            categories: vec![CategoryFixture {
                id: 7,
                name: "Lounge".to_string(),
                slug: None,
                description: Some("Chat".to_string()),
                anchor_only: false,
            }],
            ..Scene::default()
        };
        let page = scene.build_page();
        let container = page.container().unwrap();
        assert!(container.is_element_named("tbody"));
        assert!(container.children()[0].is_element_named("tr"));
    }
}
