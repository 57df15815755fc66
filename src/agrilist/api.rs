//! # API Facade
//!
//! The API layer is a **thin facade** over the core. It is the single entry
//! point for all agrilist operations, regardless of the UI being used.
//!
//! The facade:
//! - **Fetches** a collection from the configured [`RecordSource`]
//! - **Hands back** either a stateful [`ListingPage`] (for views that mutate
//!   criteria interactively) or one-shot derived values
//! - **Returns structured types** (`Result<T>`), never formatted strings
//!
//! Business logic belongs in the core modules; storage behavior in `store/`.
//! `ListingApi<S: RecordSource>` is generic over the backend:
//! - Production: `ListingApi<FileSource>`
//! - Testing: `ListingApi<InMemorySource>`

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::facets;
use crate::filter::visible_subset;
use crate::model::{Collection, Record};
use crate::page::ListingPage;
use crate::store::RecordSource;

/// The main API facade for agrilist operations.
pub struct ListingApi<S: RecordSource> {
    store: S,
}

impl<S: RecordSource> ListingApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a collection and return a page ready for criteria mutations.
    pub fn open_page(&self, collection: Collection) -> Result<ListingPage> {
        let mut page = ListingPage::new(collection);
        page.replace_records(self.store.fetch_records(collection)?);
        Ok(page)
    }

    /// One-shot: the visible subset of a collection under `criteria`.
    pub fn list(&self, collection: Collection, criteria: &FilterCriteria) -> Result<Vec<Record>> {
        let records = self.store.fetch_records(collection)?;
        Ok(visible_subset(&records, criteria))
    }

    /// The distinct tags a view can offer as filter options.
    pub fn tag_options(&self, collection: Collection) -> Result<Vec<String>> {
        let records = self.store.fetch_records(collection)?;
        Ok(facets::tag_index(&records))
    }

    /// The distinct category/provider labels a view can offer.
    pub fn category_options(&self, collection: Collection) -> Result<Vec<String>> {
        let records = self.store.fetch_records(collection)?;
        Ok(facets::category_index(&records))
    }
}
