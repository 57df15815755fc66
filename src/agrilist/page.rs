//! The page controller: one store snapshot, one set of criteria, and the
//! derived visible subset kept in sync by explicit recomputation.
//!
//! Every mutation recomputes the visible subset before returning, so a view
//! can render right after any call without a separate refresh step. The
//! snapshot is immutable between fetches; a refetch replaces it wholesale.
//! A page that has not yet received its fetch is *loading*, which views must
//! render distinctly from "zero results after filtering".

use crate::criteria::FilterCriteria;
use crate::facets;
use crate::filter::visible_subset;
use crate::model::{Collection, Record};

#[derive(Debug, Clone)]
pub struct ListingPage {
    collection: Collection,
    records: Option<Vec<Record>>,
    criteria: FilterCriteria,
    visible: Vec<Record>,
}

impl ListingPage {
    /// A page in its loading state: no snapshot yet, empty criteria.
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            records: None,
            criteria: FilterCriteria::new(),
            visible: Vec::new(),
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current visible subset, in store order.
    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    /// Size of the full snapshot, for "Showing X of Y".
    pub fn total(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    /// True until the first fetch lands. Distinct from an empty result.
    pub fn is_loading(&self) -> bool {
        self.records.is_none()
    }

    /// True when the snapshot has records but none pass the current filters.
    pub fn no_matches(&self) -> bool {
        !self.is_loading() && self.total() > 0 && self.visible.is_empty()
    }

    pub fn tag_options(&self) -> Vec<String> {
        facets::tag_index(self.records.as_deref().unwrap_or(&[]))
    }

    pub fn category_options(&self) -> Vec<String> {
        facets::category_index(self.records.as_deref().unwrap_or(&[]))
    }

    /// Installs a fresh snapshot (initial fetch or refetch). Criteria are
    /// kept as-is; only the subset is recomputed.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = Some(records);
        self.recompute();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.set_search_text(text);
        self.recompute();
    }

    pub fn toggle_category(&mut self, label: &str) {
        self.criteria.toggle_category(label);
        self.recompute();
    }

    pub fn toggle_tag(&mut self, label: &str) {
        self.criteria.toggle_tag(label);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear_all();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = visible_subset(self.records.as_deref().unwrap_or(&[]), &self.criteria);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_page() -> ListingPage {
        let mut page = ListingPage::new(Collection::Schemes);
        page.replace_records(vec![
            Record::new(1, "Crop Insurance", "insurance for farmers")
                .with_category("government")
                .with_tags(["insurance", "subsidy"]),
            Record::new(2, "Bank Loan", "loan scheme")
                .with_category("bank")
                .with_tags(["loan"]),
        ]);
        page
    }

    #[test]
    fn starts_loading_then_shows_everything() {
        let page = ListingPage::new(Collection::Articles);
        assert!(page.is_loading());
        assert!(!page.no_matches());

        let page = loaded_page();
        assert!(!page.is_loading());
        assert_eq!(page.visible().len(), 2);
        assert_eq!(page.total(), 2);
    }

    #[test]
    fn mutations_recompute_the_visible_subset() {
        let mut page = loaded_page();

        page.set_search_text("insurance");
        assert_eq!(page.visible().len(), 1);
        assert_eq!(page.visible()[0].id, 1);

        page.toggle_category("bank");
        assert!(page.no_matches());

        page.clear_filters();
        assert_eq!(page.visible().len(), 2);
        assert!(!page.no_matches());
    }

    #[test]
    fn empty_snapshot_is_not_no_matches() {
        let mut page = ListingPage::new(Collection::Schemes);
        page.replace_records(Vec::new());
        assert!(!page.is_loading());
        assert!(!page.no_matches());
        assert!(page.visible().is_empty());
    }

    #[test]
    fn refetch_replaces_the_snapshot_under_live_criteria() {
        let mut page = loaded_page();
        page.toggle_tag("loan");
        assert_eq!(page.visible().len(), 1);

        page.replace_records(vec![
            Record::new(9, "Tractor Loan", "equipment").with_tags(["loan"]),
            Record::new(10, "Seed Subsidy", "seeds").with_tags(["subsidy"]),
        ]);
        assert_eq!(page.total(), 2);
        assert_eq!(page.visible().len(), 1);
        assert_eq!(page.visible()[0].id, 9);
    }

    #[test]
    fn facet_options_follow_the_snapshot() {
        let page = loaded_page();
        assert_eq!(page.tag_options(), ["insurance", "loan", "subsidy"]);
        assert_eq!(page.category_options(), ["bank", "government"]);

        let empty = ListingPage::new(Collection::Schemes);
        assert!(empty.tag_options().is_empty());
    }
}
