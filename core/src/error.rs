use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// No records were supplied to the indexer.
    #[error("cannot build an index from an empty corpus")]
    EmptyCorpus,

    /// The case-folded title has no entry in the title index.
    #[error("movie '{0}' not found in dataset")]
    MovieNotFound(String),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
