//! Docs page navigation state: which content block is shown and whether the
//! small-screen sidebar overlay is open.

/// Section shown when the docs page opens
pub const DEFAULT_SECTION: &str = "getting-started";

/// Static content blocks of the docs page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentBlock {
    Overview,
    GettingStarted,
    Installation,
    Configuration,
    Generate,
    ModelSelection,
    IdeSetup,
}

/// Section ids that have a dedicated block. Anything else is `Overview`.
const CONTENT_BLOCKS: [(&str, ContentBlock); 6] = [
    ("getting-started", ContentBlock::GettingStarted),
    ("installation", ContentBlock::Installation),
    ("configuration", ContentBlock::Configuration),
    ("generate", ContentBlock::Generate),
    ("model-selection", ContentBlock::ModelSelection),
    ("ide-setup", ContentBlock::IdeSetup),
];

impl ContentBlock {
    pub fn for_section(id: &str) -> Self {
        CONTENT_BLOCKS
            .iter()
            .find(|(key, _)| *key == id)
            .map_or(ContentBlock::Overview, |(_, block)| *block)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsNavigator {
    active: String,
    sidebar_open: bool,
}

impl Default for DocsNavigator {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
            sidebar_open: false,
        }
    }
}

impl DocsNavigator {
    /// Show `id`. Also closes the overlay sidebar on small screens.
    pub fn select(&mut self, id: &str) {
        tracing::debug!(from = %self.active, to = id, "docs section selected");
        self.active = id.to_string();
        self.sidebar_open = false;
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn block(&self) -> ContentBlock {
        ContentBlock::for_section(&self.active)
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SIDEBAR_SECTIONS;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_getting_started() {
        let nav = DocsNavigator::default();
        assert_eq!(nav.active(), "getting-started");
        assert_eq!(nav.block(), ContentBlock::GettingStarted);
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn unknown_section_falls_back_to_overview() {
        let mut nav = DocsNavigator::default();
        nav.select("nonexistent-id");
        assert_eq!(nav.active(), "nonexistent-id");
        assert_eq!(nav.block(), ContentBlock::Overview);
    }

    #[test]
    fn known_sections_resolve_to_their_block() {
        assert_eq!(ContentBlock::for_section("installation"), ContentBlock::Installation);
        assert_eq!(ContentBlock::for_section("configuration"), ContentBlock::Configuration);
        assert_eq!(ContentBlock::for_section("generate"), ContentBlock::Generate);
        assert_eq!(ContentBlock::for_section("model-selection"), ContentBlock::ModelSelection);
        assert_eq!(ContentBlock::for_section("ide-setup"), ContentBlock::IdeSetup);
        assert_eq!(ContentBlock::for_section(""), ContentBlock::Overview);
    }

    #[test]
    fn sidebar_groups_without_block_show_overview() {
        for id in ["commands", "models", "integrations", "api", "quick-start", "cicd"] {
            assert_eq!(ContentBlock::for_section(id), ContentBlock::Overview, "{id}");
        }
    }

    #[test]
    fn every_block_is_reachable_from_sidebar() {
        let ids: Vec<&str> = SIDEBAR_SECTIONS
            .iter()
            .flat_map(|s| std::iter::once(s.id).chain(s.items.iter().map(|i| i.id)))
            .collect();
        for (key, _) in CONTENT_BLOCKS {
            assert!(ids.contains(&key), "{key} missing from sidebar");
        }
    }

    #[test]
    fn selecting_closes_sidebar() {
        let mut nav = DocsNavigator::default();
        nav.toggle_sidebar();
        assert!(nav.sidebar_open());

        nav.select("ide-setup");
        assert!(!nav.sidebar_open());
        assert!(nav.is_active("ide-setup"));
        assert!(!nav.is_active("getting-started"));
    }

    #[test]
    fn toggle_and_close_sidebar() {
        let mut nav = DocsNavigator::default();
        nav.toggle_sidebar();
        nav.toggle_sidebar();
        assert!(!nav.sidebar_open());

        nav.toggle_sidebar();
        nav.close_sidebar();
        assert!(!nav.sidebar_open());
    }
}
