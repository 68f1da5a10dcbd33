use std::cmp::Ordering;

use sprs::CsVec;

use crate::matrix::TfIdfMatrix;

/// Cosine similarity of `query` against every document, in catalog order.
///
/// Both sides are unit length (or all-zero), so the dot product is the
/// cosine; an all-zero side scores 0.
pub fn similarities(query: &CsVec<f64>, tfidf: &TfIdfMatrix) -> Vec<f64> {
    if query.nnz() == 0 {
        return vec![0.0; tfidf.num_documents()];
    }

    tfidf
        .matrix
        .outer_iterator()
        .map(|doc_vec| query.dot(&doc_vec).clamp(0.0, 1.0))
        .collect()
}

/// The `k` best `(doc_index, score)` pairs, best first. Equal scores keep
/// catalog order.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(k);
    ranked
}

pub fn search(query: &str, tfidf: &TfIdfMatrix, k: usize) -> Vec<(usize, f64)> {
    let query_vec = tfidf.transform(&query.to_lowercase());
    top_k(&similarities(&query_vec, tfidf), k)
}
