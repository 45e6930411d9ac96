use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::objects::GeneCount;
use crate::common::error::{HeredityError, Result};

const SUM_TOLERANCE: f64 = 1e-9;

/// Probability of showing the trait, and of not showing it, for one gene count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitProbabilities {
    #[serde(rename = "true")]
    pub present: f64,
    #[serde(rename = "false")]
    pub absent: f64,
}

impl TraitProbabilities {
    pub const fn new(present: f64, absent: f64) -> Self {
        TraitProbabilities { present, absent }
    }

    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait { self.present } else { self.absent }
    }
}

/// The fixed conditional probability tables of the inheritance network.
///
/// Every table is indexed by number of gene copies. The same JSON layout is
/// accepted by [`ProbabilityModel::load_from_file`]:
///
/// ```json
/// {
///   "gene": [0.96, 0.03, 0.01],
///   "trait": [
///     {"true": 0.01, "false": 0.99},
///     {"true": 0.56, "false": 0.44},
///     {"true": 0.65, "false": 0.35}
///   ],
///   "mutation": 0.01
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityModel {
    /// Unconditional gene count distribution for founders.
    #[serde(rename = "gene")]
    founder_genes: [f64; 3],
    #[serde(rename = "trait")]
    trait_given_genes: [TraitProbabilities; 3],
    /// Probability that a transmitted copy flips its pass/no-pass outcome.
    #[serde(rename = "mutation")]
    mutation_rate: f64,
}

static REFERENCE_MODEL: ProbabilityModel = ProbabilityModel {
    founder_genes: [0.96, 0.03, 0.01],
    trait_given_genes: [
        TraitProbabilities::new(0.01, 0.99),
        TraitProbabilities::new(0.56, 0.44),
        TraitProbabilities::new(0.65, 0.35),
    ],
    mutation_rate: 0.01,
};

impl ProbabilityModel {
    /// Build and validate a model.
    pub fn new(
        founder_genes: [f64; 3],
        trait_given_genes: [TraitProbabilities; 3],
        mutation_rate: f64,
    ) -> Result<Self> {
        let model = ProbabilityModel {
            founder_genes,
            trait_given_genes,
            mutation_rate,
        };
        model.validate()?;
        Ok(model)
    }

    /// The process-wide reference tables.
    pub fn reference() -> &'static ProbabilityModel {
        &REFERENCE_MODEL
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let model: ProbabilityModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading probability model from file: {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn founder_gene_probability(&self, gene: GeneCount) -> f64 {
        self.founder_genes[gene.copies()]
    }

    pub fn trait_probability(&self, gene: GeneCount, has_trait: bool) -> f64 {
        self.trait_given_genes[gene.copies()].get(has_trait)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    fn validate(&self) -> Result<()> {
        check_probability("mutation rate", self.mutation_rate)?;
        check_distribution("founder gene distribution", &self.founder_genes)?;
        for gene in GeneCount::ALL {
            let row = self.trait_given_genes[gene.copies()];
            check_distribution(
                &format!("trait distribution for {} copies", gene),
                &[row.present, row.absent],
            )?;
        }
        Ok(())
    }
}

fn check_probability(label: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(HeredityError::InvalidModel(format!(
            "{} must be within [0, 1], got {}",
            label, value
        )));
    }
    Ok(())
}

fn check_distribution(label: &str, values: &[f64]) -> Result<()> {
    for &value in values {
        check_probability(label, value)?;
    }
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(HeredityError::InvalidModel(format!(
            "{} sums to {}, expected 1",
            label, sum
        )));
    }
    Ok(())
}
