use super::RecordSource;
use crate::error::{AgrilistError, Result};
use crate::model::{Collection, Record};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads record payloads cached on disk, one JSON array per collection.
pub struct FileSource {
    data_dir: PathBuf,
    schemes_file: String,
    articles_file: String,
}

impl FileSource {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            schemes_file: "schemes.json".to_string(),
            articles_file: "articles.json".to_string(),
        }
    }

    pub fn with_payload_files(mut self, schemes_file: &str, articles_file: &str) -> Self {
        self.schemes_file = schemes_file.to_string();
        self.articles_file = articles_file.to_string();
        self
    }

    pub fn payload_path(&self, collection: Collection) -> PathBuf {
        let file = match collection {
            Collection::Schemes => &self.schemes_file,
            Collection::Articles => &self.articles_file,
        };
        self.data_dir.join(file)
    }

    /// Decode entries one by one so a single malformed record degrades to
    /// "skipped" instead of rejecting the whole payload.
    fn decode_payload(&self, path: &Path) -> Result<Vec<Record>> {
        let content = fs::read_to_string(path).map_err(AgrilistError::Io)?;
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&content).map_err(AgrilistError::Serialization)?;

        Ok(entries
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect())
    }
}

impl RecordSource for FileSource {
    fn fetch_records(&self, collection: Collection) -> Result<Vec<Record>> {
        let path = self.payload_path(collection);
        if !path.exists() {
            return Err(AgrilistError::PayloadMissing(collection));
        }
        self.decode_payload(&path)
    }
}
