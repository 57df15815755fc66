/// The mutable query state for one listing page: a free-text search string
/// plus the selected category and tag labels.
///
/// Selections are only ever changed through the toggle operations, so every
/// selected label was offered by the facet index at selection time. Selection
/// vectors keep insertion order—matching doesn't care, but active-filter
/// chips should not jump around between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: String,
    categories: Vec<String>,
    tags: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces the search text verbatim. The text is deliberately not
    /// trimmed: a whitespace-only search is a real (unmatchable) query, and
    /// only the empty string deactivates the text axis.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn toggle_category(&mut self, label: &str) {
        toggle(&mut self.categories, label);
    }

    pub fn toggle_tag(&mut self, label: &str) {
        toggle(&mut self.tags, label);
    }

    /// Resets all three axes in a single state transition.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// True when no axis is active, i.e. the visible subset is the full store.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }

    /// Number of selected labels, for the "N filters active" badge.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + self.tags.len()
    }
}

fn toggle(selection: &mut Vec<String>, label: &str) {
    if let Some(pos) = selection.iter().position(|l| l == label) {
        selection.remove(pos);
    } else {
        selection.push(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_tag("subsidy");
        assert_eq!(criteria.tags(), ["subsidy"]);

        criteria.toggle_tag("subsidy");
        assert!(criteria.tags().is_empty());
    }

    #[test]
    fn selections_keep_insertion_order() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_category("government");
        criteria.toggle_category("bank");
        criteria.toggle_category("corporate");
        criteria.toggle_category("bank");

        assert_eq!(criteria.categories(), ["government", "corporate"]);
    }

    #[test]
    fn clear_all_resets_every_axis() {
        let mut criteria = FilterCriteria::new();
        criteria.set_search_text("insurance");
        criteria.toggle_category("bank");
        criteria.toggle_tag("loan");

        criteria.clear_all();
        assert!(criteria.is_empty());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn whitespace_search_counts_as_active() {
        let mut criteria = FilterCriteria::new();
        criteria.set_search_text("   ");
        assert!(!criteria.is_empty());
        assert_eq!(criteria.search(), "   ");
    }

    #[test]
    fn active_filter_count_ignores_search() {
        let mut criteria = FilterCriteria::new();
        criteria.set_search_text("x");
        criteria.toggle_category("bank");
        criteria.toggle_tag("loan");
        criteria.toggle_tag("subsidy");

        assert_eq!(criteria.active_filter_count(), 3);
    }
}
