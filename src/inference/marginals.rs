use log::debug;

use super::world::World;
use crate::common::error::{HeredityError, Result};
use crate::model::objects::{Distribution, GeneCount};
use crate::model::pedigree::Pedigree;

/// Unnormalized probability mass collected for one person.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PersonMass {
    /// Indexed by gene copies.
    pub gene: [f64; 3],
    /// Indexed by `has_trait as usize`: `[false, true]`.
    pub trait_status: [f64; 2],
}

impl PersonMass {
    pub fn gene(&self, gene: GeneCount) -> f64 {
        self.gene[gene.copies()]
    }

    pub fn trait_status(&self, has_trait: bool) -> f64 {
        self.trait_status[has_trait as usize]
    }
}

/// Running per-person sums of joint probabilities over enumerated worlds.
///
/// Addition is the only update, so worlds may be accumulated in any order and
/// partial tables from separate workers combined with [`MarginalTable::merge`].
#[derive(Clone, Debug, PartialEq)]
pub struct MarginalTable {
    rows: Vec<PersonMass>,
}

impl MarginalTable {
    /// A zeroed table for `people` people.
    pub fn new(people: usize) -> Self {
        MarginalTable {
            rows: vec![PersonMass::default(); people],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn mass(&self, person: usize) -> Option<&PersonMass> {
        self.rows.get(person)
    }

    /// Add `probability` to each person's bucket for their assigned gene count
    /// and to the bucket for their assigned trait status.
    pub fn accumulate(&mut self, world: &World, probability: f64) {
        debug_assert_eq!(world.len(), self.rows.len());
        let assignments = world.genes().iter().zip(world.traits());
        for (row, (&gene, &has_trait)) in self.rows.iter_mut().zip(assignments) {
            row.gene[gene.copies()] += probability;
            row.trait_status[has_trait as usize] += probability;
        }
    }

    pub fn merge(&mut self, other: &MarginalTable) {
        debug_assert_eq!(other.rows.len(), self.rows.len());
        for (row, other) in self.rows.iter_mut().zip(&other.rows) {
            for (mass, extra) in row.gene.iter_mut().zip(other.gene) {
                *mass += extra;
            }
            for (mass, extra) in row.trait_status.iter_mut().zip(other.trait_status) {
                *mass += extra;
            }
        }
    }

    /// Rescale every person's two distributions to sum to one.
    ///
    /// # Errors
    /// Returns [`HeredityError::EvidenceContradiction`] when a distribution has
    /// no mass at all, i.e. no world consistent with the evidence was possible.
    pub fn normalize(self, pedigree: &Pedigree) -> Result<Marginals> {
        if self.rows.len() != pedigree.len() {
            return Err(HeredityError::MalformedPedigree(format!(
                "marginal table has {} rows but the pedigree has {} people",
                self.rows.len(),
                pedigree.len()
            )));
        }
        let people = self
            .rows
            .into_iter()
            .zip(pedigree.people())
            .map(|(row, person)| {
                Ok(PersonDistribution {
                    name: person.name.clone(),
                    gene: rescale(row.gene, &person.name, Distribution::Gene)?,
                    trait_status: rescale(row.trait_status, &person.name, Distribution::Trait)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("Normalized marginals for {} people", people.len());
        Ok(Marginals { people })
    }
}

fn rescale<const N: usize>(
    mut values: [f64; N],
    person: &str,
    distribution: Distribution,
) -> Result<[f64; N]> {
    let sum: f64 = values.iter().sum();
    if sum == 0.0 {
        return Err(HeredityError::EvidenceContradiction {
            person: person.to_string(),
            distribution,
        });
    }
    let alpha = 1.0 / sum;
    for value in values.iter_mut() {
        *value *= alpha;
    }
    Ok(values)
}

/// Final gene count and trait distributions for one person.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonDistribution {
    pub name: String,
    pub gene: [f64; 3],
    pub trait_status: [f64; 2],
}

impl PersonDistribution {
    pub fn gene(&self, gene: GeneCount) -> f64 {
        self.gene[gene.copies()]
    }

    pub fn trait_probability(&self, has_trait: bool) -> f64 {
        self.trait_status[has_trait as usize]
    }
}

/// Normalized distributions for every person, in pedigree input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Marginals {
    people: Vec<PersonDistribution>,
}

impl Marginals {
    pub fn get(&self, name: &str) -> Option<&PersonDistribution> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonDistribution> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
