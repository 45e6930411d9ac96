use log::{debug, info};
use rayon::prelude::*;

use super::joint::joint_probability;
use super::marginals::{MarginalTable, Marginals};
use super::world::WorldEnumerator;
use crate::common::error::Result;
use crate::model::pedigree::Pedigree;
use crate::model::probabilities::ProbabilityModel;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Score worlds on the rayon thread pool, one partial table per worker.
    pub parallel: bool,
}

/// Exact inference over a pedigree: enumerate every world consistent with
/// the observed traits, score each one, and sum the scores into per-person
/// marginals.
pub struct Inferencer {
    model: ProbabilityModel,
    pedigree: Pedigree,
    options: InferenceOptions,
}

impl Inferencer {
    pub fn new(model: ProbabilityModel, pedigree: Pedigree) -> Self {
        Inferencer {
            model,
            pedigree,
            options: InferenceOptions::default(),
        }
    }

    /// An inferencer over the reference probability tables.
    pub fn with_reference_model(pedigree: Pedigree) -> Self {
        Self::new(ProbabilityModel::reference().clone(), pedigree)
    }

    pub fn with_options(mut self, options: InferenceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model(&self) -> &ProbabilityModel {
        &self.model
    }

    pub fn pedigree(&self) -> &Pedigree {
        &self.pedigree
    }

    /// Sum joint probabilities of all consistent worlds, without normalizing.
    pub fn accumulate(&self) -> Result<MarginalTable> {
        let worlds = WorldEnumerator::new(&self.pedigree)?;
        info!(
            "Scoring {} worlds for {} people{}",
            worlds.world_count(),
            self.pedigree.len(),
            if self.options.parallel {
                format!(" on {} threads", rayon::current_num_threads())
            } else {
                String::new()
            }
        );

        let people = self.pedigree.len();
        let table = if self.options.parallel {
            worlds
                .par_bridge()
                .try_fold(
                    || MarginalTable::new(people),
                    |mut table, world| -> Result<MarginalTable> {
                        let p = joint_probability(&self.model, &self.pedigree, &world)?;
                        table.accumulate(&world, p);
                        Ok(table)
                    },
                )
                .try_reduce(
                    || MarginalTable::new(people),
                    |mut left, right| {
                        left.merge(&right);
                        Ok(left)
                    },
                )?
        } else {
            let mut table = MarginalTable::new(people);
            let mut scored = 0u64;
            for world in worlds {
                let p = joint_probability(&self.model, &self.pedigree, &world)?;
                table.accumulate(&world, p);
                scored += 1;
            }
            debug!("Accumulated {} worlds", scored);
            table
        };
        Ok(table)
    }

    /// Run the full inference and return normalized distributions.
    pub fn run(&self) -> Result<Marginals> {
        let marginals = self.accumulate()?.normalize(&self.pedigree)?;
        info!("Inference complete for {} people", marginals.len());
        Ok(marginals)
    }
}
