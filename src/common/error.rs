use thiserror::Error;

use crate::model::objects::Distribution;

#[derive(Error, Debug)]
pub enum HeredityError {
    #[error("Malformed pedigree: {0}")]
    MalformedPedigree(String),

    #[error("Evidence contradiction: no world consistent with the evidence gives '{person}' any {distribution} mass")]
    EvidenceContradiction {
        person: String,
        distribution: Distribution,
    },

    #[error("Invalid probability model: {0}")]
    InvalidModel(String),

    #[error("Pedigree has {people} people, exact enumeration supports at most {limit}")]
    PedigreeTooLarge { people: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeredityError>;
