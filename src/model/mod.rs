pub mod objects;
pub mod pedigree;
pub mod probabilities;

pub use objects::{Distribution, GeneCount, Parentage, Person};
pub use pedigree::{Pedigree, PersonRecord};
pub use probabilities::{ProbabilityModel, TraitProbabilities};
