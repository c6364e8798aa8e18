use crate::error::{RecommendError, Result};
use crate::movie::{title_key, MovieRecord, RowId};
use crate::vector::CorpusVectorSpace;
use std::collections::HashMap;

/// Case-folded title to row position. The earliest row wins for duplicate titles.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<String, RowId>,
}

impl TitleIndex {
    pub fn build(records: &[MovieRecord]) -> Self {
        let mut rows = HashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            rows.entry(title_key(&record.title)).or_insert(row);
        }
        Self { rows }
    }

    pub fn get(&self, title: &str) -> Option<RowId> {
        self.rows.get(&title_key(title)).copied()
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Immutable, queryable state built once from the dataset.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    records: Vec<MovieRecord>,
    space: CorpusVectorSpace,
    titles: TitleIndex,
}

impl CorpusIndex {
    pub fn build(records: Vec<MovieRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }
        let genres: Vec<&str> = records.iter().map(|r| r.genre.as_str()).collect();
        let space = CorpusVectorSpace::fit(&genres);
        let titles = TitleIndex::build(&records);
        Ok(Self { records, space, titles })
    }

    pub fn records(&self) -> &[MovieRecord] { &self.records }

    pub fn record(&self, row: RowId) -> Option<&MovieRecord> { self.records.get(row) }

    pub fn vector_space(&self) -> &CorpusVectorSpace { &self.space }

    pub fn titles(&self) -> &TitleIndex { &self.titles }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
