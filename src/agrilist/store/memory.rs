use super::RecordSource;
use crate::error::Result;
use crate::model::{Collection, Record};
use std::collections::HashMap;

/// In-memory record source for testing. Collections that were never
/// populated fetch as empty.
#[derive(Debug, Default)]
pub struct InMemorySource {
    collections: HashMap<Collection, Vec<Record>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, collection: Collection, records: Vec<Record>) -> Self {
        self.collections.insert(collection, records);
        self
    }

    pub fn insert(&mut self, collection: Collection, records: Vec<Record>) {
        self.collections.insert(collection, records);
    }
}

impl RecordSource for InMemorySource {
    fn fetch_records(&self, collection: Collection) -> Result<Vec<Record>> {
        Ok(self.collections.get(&collection).cloned().unwrap_or_default())
    }
}
