use serde::{Deserialize, Serialize};

/// Position of a record in the dataset, in load order.
pub type RowId = usize;

/// One dataset row. Serialized with the dataset's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "movies_name")]
    pub title: String,
    pub genre: String,
    pub language: String,
    pub year: String,
    #[serde(rename = "rating_10")]
    pub rating: Option<f64>,
}

impl MovieRecord {
    /// Build a record, coercing missing text fields to the empty string.
    pub fn new(
        title: impl Into<String>,
        genre: Option<String>,
        language: Option<String>,
        year: Option<String>,
        rating: Option<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.unwrap_or_default(),
            language: language.unwrap_or_default(),
            year: year.unwrap_or_default(),
            rating,
        }
    }

    /// True when both records share the exact same language and year text.
    pub fn same_language_and_year(&self, other: &MovieRecord) -> bool {
        self.language == other.language && self.year == other.year
    }
}

/// Lookup key for a title: surrounding whitespace trimmed, lowercased.
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}
