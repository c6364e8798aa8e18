pub mod dataset;
pub mod error;
pub mod index;
pub mod movie;
pub mod query;
pub mod tokenizer;
pub mod vector;

pub use error::{RecommendError, Result};
pub use index::{CorpusIndex, TitleIndex};
pub use movie::{MovieRecord, RowId};
pub use query::{QueryEngine, Recommendation, DEFAULT_TOP_N};
pub use vector::{CorpusVectorSpace, SparseVector, TermId};
