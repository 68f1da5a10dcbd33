use std::collections::{BTreeMap, HashMap, HashSet};

use sprs::{CsMat, CsVec, TriMat};

use crate::error::IndexError;
use crate::preprocessing::tokenizer::{build_vocabulary, tokenize};

/// Fitted TF-IDF model over the catalog's `uses` texts.
///
/// `matrix` is term-by-document in CSC layout, so column `i` is the
/// L2-normalised vector of catalog entry `i`. Vocabulary and weights never
/// change after [`TfIdfMatrix::build`].
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub terms: HashMap<String, usize>,
    pub matrix: CsMat<f64>,
    pub idf: Vec<f64>,
    stop_words: HashSet<String>,
}

impl TfIdfMatrix {
    /// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`, so every term keeps a
    /// positive weight, including terms found in every document.
    pub fn build<S: AsRef<str>>(documents: &[S], stop_words: HashSet<String>) -> Result<Self, IndexError> {
        let terms = build_vocabulary(documents, &stop_words);
        if terms.is_empty() {
            return Err(IndexError::EmptyVocabulary {
                documents: documents.len(),
            });
        }

        let n_docs = documents.len();
        let n_terms = terms.len();

        let mut df = vec![0usize; n_terms];
        let mut counts_per_doc = Vec::with_capacity(n_docs);
        for doc in documents {
            let counts = count_terms(doc.as_ref(), &terms, &stop_words);
            for &term_index in counts.keys() {
                df[term_index] += 1;
            }
            counts_per_doc.push(counts);
        }

        let idf: Vec<f64> = df
            .iter()
            .map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut tri_mat = TriMat::new((n_terms, n_docs));
        for (doc_index, counts) in counts_per_doc.into_iter().enumerate() {
            let weighted: Vec<(usize, f64)> = counts
                .into_iter()
                .map(|(term_index, count)| (term_index, count as f64 * idf[term_index]))
                .collect();
            let norm = weighted.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
            if norm == 0.0 {
                continue;
            }
            for (term_index, value) in weighted {
                tri_mat.add_triplet(term_index, doc_index, value / norm);
            }
        }

        Ok(Self {
            terms,
            matrix: tri_mat.to_csc(),
            idf,
            stop_words,
        })
    }

    pub fn num_documents(&self) -> usize {
        self.matrix.cols()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Projects `text` into the fitted space. Unknown terms are dropped; a
    /// text without known terms yields an all-zero vector.
    pub fn transform(&self, text: &str) -> CsVec<f64> {
        let counts = count_terms(text, &self.terms, &self.stop_words);

        let mut indices = Vec::with_capacity(counts.len());
        let mut data = Vec::with_capacity(counts.len());
        for (term_index, count) in counts {
            indices.push(term_index);
            data.push(count as f64 * self.idf[term_index]);
        }

        let norm = data.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in data.iter_mut() {
                *value /= norm;
            }
        }

        CsVec::new(self.terms.len(), indices, data)
    }
}

// Ordered by term index, as sparse vectors require sorted indices.
fn count_terms(text: &str, terms: &HashMap<String, usize>, stop_words: &HashSet<String>) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for token in tokenize(text, stop_words) {
        if let Some(&term_index) = terms.get(&token) {
            *counts.entry(term_index).or_insert(0) += 1;
        }
    }
    counts
}
