pub mod common;
pub mod inference;
pub mod model;

pub use common::error::{HeredityError, Result};
pub use inference::{InferenceOptions, Inferencer, Marginals};
pub use model::{Pedigree, PersonRecord, ProbabilityModel};
