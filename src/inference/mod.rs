pub mod engine;
pub mod joint;
pub mod marginals;
pub mod world;

pub use engine::{InferenceOptions, Inferencer};
pub use marginals::{MarginalTable, Marginals, PersonDistribution};
pub use world::{World, WorldEnumerator};
