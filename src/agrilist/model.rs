use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Which listing page a record snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Schemes,
    Articles,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Schemes => "schemes",
            Collection::Articles => "articles",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "schemes" | "scheme" => Ok(Collection::Schemes),
            "articles" | "article" => Ok(Collection::Articles),
            other => Err(format!("Unknown collection: {}", other)),
        }
    }
}

/// One listed item: an agricultural scheme or a knowledge-base article.
///
/// The server sends the two collections with slightly different shapes
/// (schemes carry `provider` and `deadline`, articles `category` and `date`;
/// tags arrive comma-joined for schemes and as an array for articles). Both
/// decode into this single shape, and missing optional fields default to
/// empty values rather than failing the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "provider", deserialize_with = "deserialize_category")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default, alias = "deadline")]
    pub date: Option<NaiveDate>,
}

impl Record {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: None,
            tags: Vec::new(),
            date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// An empty or whitespace-only category is the same as no category at all:
/// it can never match an active category filter. A non-string value is
/// treated as absent rather than failing the record.
fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Tags arrive either comma-joined (`"insurance, subsidy"`) or as a JSON
/// array. Entries are trimmed and empty entries dropped; anything malformed
/// decodes as an empty tag sequence, never an error.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s.split(',').map(str::to_string).collect(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    Ok(raw
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_scheme_payload_shape() {
        let json = r#"{
            "id": 7,
            "title": "Crop Insurance",
            "description": "insurance for farmers",
            "provider": "government",
            "tags": "insurance, subsidy",
            "deadline": "2026-11-30"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category.as_deref(), Some("government"));
        assert_eq!(record.tags, vec!["insurance", "subsidy"]);
        assert_eq!(
            record.date,
            Some(NaiveDate::from_ymd_opt(2026, 11, 30).unwrap())
        );
    }

    #[test]
    fn decodes_article_payload_shape() {
        let json = r#"{
            "id": 3,
            "title": "Managing Leaf Blight",
            "description": "early detection",
            "category": "Diseases",
            "tags": ["blight", "fungus"],
            "date": "2025-04-02"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category.as_deref(), Some("Diseases"));
        assert_eq!(record.tags, vec!["blight", "fungus"]);
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let record: Record = serde_json::from_str(r#"{"id": 1, "title": "Bare"}"#).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.category, None);
        assert!(record.tags.is_empty());
        assert_eq!(record.date, None);
    }

    #[test]
    fn null_tags_and_category_are_empty() {
        let json = r#"{"id": 1, "title": "Nulls", "category": null, "tags": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, None);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn blank_category_is_treated_as_absent() {
        let json = r#"{"id": 1, "title": "Blank", "provider": "   "}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, None);
    }

    #[test]
    fn malformed_tag_field_degrades_to_empty() {
        let json = r#"{"id": 1, "title": "Odd", "tags": 42, "provider": 7}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
        assert_eq!(record.category, None);
    }

    #[test]
    fn comma_joined_tags_are_trimmed_and_empties_dropped() {
        let json = r#"{"id": 1, "title": "T", "tags": " loan ,, subsidy , "}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.tags, vec!["loan", "subsidy"]);
    }

    #[test]
    fn collection_parses_from_str() {
        assert_eq!(Collection::from_str("schemes"), Ok(Collection::Schemes));
        assert_eq!(Collection::from_str("Article"), Ok(Collection::Articles));
        assert!(Collection::from_str("recipes").is_err());
    }
}
