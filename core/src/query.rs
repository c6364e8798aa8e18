use crate::error::{RecommendError, Result};
use crate::index::CorpusIndex;
use crate::movie::{MovieRecord, RowId};
use serde::Serialize;
use std::cmp::Ordering;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub row: RowId,
    pub score: f32,
    #[serde(flatten)]
    pub movie: MovieRecord,
}

/// Read-only query front end over a built [`CorpusIndex`].
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a CorpusIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a CorpusIndex) -> Self { Self { index } }

    /// Resolve a title (case-insensitive, trimmed) to its row and record.
    pub fn lookup(&self, title: &str) -> Result<(RowId, &'a MovieRecord)> {
        let index = self.index;
        index
            .titles()
            .get(title)
            .and_then(|row| index.record(row).map(|m| (row, m)))
            .ok_or_else(|| RecommendError::MovieNotFound(title.to_string()))
    }

    /// Movies most similar by genre to `title`, sharing its language and year exactly.
    ///
    /// Candidates are ranked by cosine similarity, highest first; equal scores keep
    /// dataset order. The query row itself is never returned.
    pub fn recommend(&self, title: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        let (query_row, query) = self.lookup(title)?;

        let mut scored: Vec<(RowId, f32)> = self
            .index
            .vector_space()
            .similarities(query_row)
            .into_iter()
            .enumerate()
            .collect();
        // sort_by is stable: ties stay in row order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let records = self.index.records();
        let results = scored
            .into_iter()
            .filter(|(row, _)| *row != query_row)
            .filter(|(row, _)| records[*row].same_language_and_year(query))
            .take(top_n)
            .map(|(row, score)| Recommendation { row, score, movie: records[row].clone() })
            .collect();
        Ok(results)
    }
}

impl CorpusIndex {
    pub fn query(&self) -> QueryEngine<'_> { QueryEngine::new(self) }
}
