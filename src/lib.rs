use std::collections::HashSet;
use std::path::Path;

use tracing::info;

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod preprocessing;
pub mod server;

pub use document::parser::Medicine;
pub use engine::recommend::{Advisory, Recommendation, RecommendationRecord, Recommender};
pub use error::{Error, IndexError, LoadError, Result};

/// Loads the catalog and fits the index. Runs once, before any query.
pub fn initialize(catalog: &Path, stop_words: Option<&Path>) -> Result<Recommender> {
    let stop_words: HashSet<String> = match stop_words {
        Some(path) => preprocessing::tokenizer::load_stop_words(path)?,
        None => preprocessing::tokenizer::english_stop_words(),
    };

    let medicines = document::parser::load_catalog(catalog)?;
    info!(path = %catalog.display(), medicines = medicines.len(), "catalog loaded");

    let recommender = Recommender::new(medicines, stop_words)?;
    info!(
        vocabulary = recommender.tfidf().vocabulary_size(),
        "TF-IDF index built"
    );
    Ok(recommender)
}
