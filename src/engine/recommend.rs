use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::document::parser::Medicine;
use crate::engine::search;
use crate::error::IndexError;
use crate::matrix::TfIdfMatrix;

pub const TOP_CANDIDATES: usize = 5;
pub const MIN_TOP_SCORE: f64 = 0.10;
pub const MIN_ACCURACY: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    SevereOrUnclear,
    LowAccuracy,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::SevereOrUnclear => "Your symptoms seem severe or unclear. Please consult a doctor.",
            Advisory::LowAccuracy => "The matches found have low accuracy. Please consult a doctor.",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRecord {
    pub name: String,
    pub uses: String,
    pub side_effects: String,
    pub manufacturer: String,
    #[serde(skip)]
    pub similarity: f64,
    /// Similarity as a percentage, e.g. `"87.50%"`.
    pub accuracy: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Never empty, best match first.
    Medicines(Vec<RecommendationRecord>),
    Advisory(Advisory),
}

/// Catalog plus its fitted model. Read-only once built.
#[derive(Debug)]
pub struct Recommender {
    medicines: Vec<Medicine>,
    tfidf: TfIdfMatrix,
}

impl Recommender {
    pub fn new(medicines: Vec<Medicine>, stop_words: HashSet<String>) -> Result<Self, IndexError> {
        let uses: Vec<&str> = medicines.iter().map(|m| m.uses.as_str()).collect();
        let tfidf = TfIdfMatrix::build(&uses, stop_words)?;
        Ok(Self { medicines, tfidf })
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn tfidf(&self) -> &TfIdfMatrix {
        &self.tfidf
    }

    pub fn recommend(&self, symptoms: &str) -> Recommendation {
        let candidates = search::search(symptoms, &self.tfidf, TOP_CANDIDATES);

        let best = candidates.iter().map(|&(_, score)| score).fold(0.0, f64::max);
        if best < MIN_TOP_SCORE {
            debug!(best, "no candidate above the minimum score");
            return Recommendation::Advisory(Advisory::SevereOrUnclear);
        }

        let records: Vec<RecommendationRecord> = candidates
            .into_iter()
            .filter(|&(_, score)| score > 0.0 && score * 100.0 >= MIN_ACCURACY)
            .map(|(doc_index, score)| self.record(doc_index, score))
            .collect();

        if records.is_empty() {
            debug!(best, "all candidates below the accuracy threshold");
            return Recommendation::Advisory(Advisory::LowAccuracy);
        }

        debug!(matches = records.len(), best, "recommendations found");
        Recommendation::Medicines(records)
    }

    fn record(&self, doc_index: usize, score: f64) -> RecommendationRecord {
        let medicine = &self.medicines[doc_index];
        RecommendationRecord {
            name: medicine.name.clone(),
            uses: medicine.uses.clone(),
            side_effects: medicine.side_effects.clone(),
            manufacturer: medicine.manufacturer.clone(),
            similarity: score,
            accuracy: format!("{:.2}%", score * 100.0),
        }
    }
}
