use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type TermId = u32;

/// Sparse weight vector, entries sorted by term id, zero weights omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f32)>,
}

impl SparseVector {
    /// Build from arbitrary (term, weight) pairs. Zero weights are dropped.
    pub fn from_pairs<I: IntoIterator<Item = (TermId, f32)>>(pairs: I) -> Self {
        let mut entries: Vec<(TermId, f32)> = pairs.into_iter().filter(|(_, w)| *w != 0.0).collect();
        entries.sort_by_key(|(tid, _)| *tid);
        Self { entries }
    }

    pub fn entries(&self) -> &[(TermId, f32)] { &self.entries }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn weight(&self, term_id: TermId) -> f32 {
        self.entries
            .binary_search_by_key(&term_id, |(tid, _)| *tid)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        // merge walk over both sorted entry lists
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in self.entries.iter_mut() { *w /= norm; }
        }
        self
    }
}

/// Cosine similarity of two sparse vectors. A zero vector scores 0 against anything.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}

/// TF-IDF vector space fitted over every movie's genre text.
///
/// Term ids follow lexicographic term order. Weights are raw term counts scaled by
/// the smoothed idf `ln((1 + n) / (1 + df)) + 1`, then L2-normalized per row.
#[derive(Debug, Clone, Default)]
pub struct CorpusVectorSpace {
    dictionary: HashMap<String, TermId>,
    df: Vec<u32>,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
}

impl CorpusVectorSpace {
    pub fn fit<S: AsRef<str>>(texts: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let dictionary: HashMap<String, TermId> = terms
            .into_iter()
            .enumerate()
            .map(|(id, term)| (term.to_string(), id as TermId))
            .collect();

        let mut df = vec![0u32; dictionary.len()];
        let mut counts: Vec<BTreeMap<TermId, u32>> = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut tf: BTreeMap<TermId, u32> = BTreeMap::new();
            for token in tokens {
                let tid = dictionary[token.as_str()];
                *tf.entry(tid).or_insert(0) += 1;
            }
            for tid in tf.keys() {
                df[*tid as usize] += 1;
            }
            counts.push(tf);
        }

        let n = tokenized.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&df_t| ((1.0 + n) / (1.0 + df_t as f32)).ln() + 1.0)
            .collect();

        let vectors = counts
            .into_iter()
            .map(|tf| {
                SparseVector::from_pairs(tf.into_iter().map(|(tid, c)| (tid, c as f32 * idf[tid as usize])))
                    .normalized()
            })
            .collect();

        Self { dictionary, df, idf, vectors }
    }

    pub fn vocabulary_len(&self) -> usize { self.dictionary.len() }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.dictionary.get(term).copied() }

    pub fn document_frequency(&self, term_id: TermId) -> Option<u32> { self.df.get(term_id as usize).copied() }

    pub fn idf(&self, term_id: TermId) -> Option<f32> { self.idf.get(term_id as usize).copied() }

    pub fn len(&self) -> usize { self.vectors.len() }

    pub fn is_empty(&self) -> bool { self.vectors.is_empty() }

    pub fn vector(&self, row: usize) -> Option<&SparseVector> { self.vectors.get(row) }

    /// Cosine similarity of `row` against every row, self included, in row order.
    pub fn similarities(&self, row: usize) -> Vec<f32> {
        match self.vectors.get(row) {
            Some(query) => self.vectors.iter().map(|v| cosine_similarity(query, v)).collect(),
            None => vec![0.0; self.vectors.len()],
        }
    }
}
