use log::debug;

use crate::common::error::{HeredityError, Result};
use crate::model::objects::GeneCount;
use crate::model::pedigree::Pedigree;

/// Largest pedigree the enumerator accepts. Subsets are tracked as bit masks.
pub const MAX_PEOPLE: usize = 32;

/// One complete hypothetical assignment: a gene count and a trait status for
/// every person, indexed the same way as the pedigree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    genes: Vec<GeneCount>,
    has_trait: Vec<bool>,
}

impl World {
    pub fn new(genes: Vec<GeneCount>, has_trait: Vec<bool>) -> Self {
        World { genes, has_trait }
    }

    /// Expand a world from its compact form: people in `one_copy` carry one
    /// copy, people in `two_copies` carry two, everyone else carries none.
    fn from_masks(people: usize, one_copy: u64, two_copies: u64, trait_subset: u64) -> Self {
        let genes = (0..people)
            .map(|i| {
                let bit = 1u64 << i;
                if one_copy & bit != 0 {
                    GeneCount::One
                } else if two_copies & bit != 0 {
                    GeneCount::Two
                } else {
                    GeneCount::Zero
                }
            })
            .collect();
        let has_trait = (0..people).map(|i| trait_subset & (1u64 << i) != 0).collect();
        World { genes, has_trait }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn gene(&self, person: usize) -> Option<GeneCount> {
        self.genes.get(person).copied()
    }

    pub fn has_trait(&self, person: usize) -> Option<bool> {
        self.has_trait.get(person).copied()
    }

    pub fn genes(&self) -> &[GeneCount] {
        &self.genes
    }

    pub fn traits(&self) -> &[bool] {
        &self.has_trait
    }
}

/// Lazily walks every world whose trait subset agrees with the evidence.
///
/// Trait subsets are taken from the powerset of all people and skipped when a
/// person with a known trait disagrees. For each surviving subset the
/// one-copy set ranges over the powerset of all people, and the two-copy set
/// over the powerset of everyone not in the one-copy set.
#[derive(Clone, Debug)]
pub struct WorldEnumerator {
    people: usize,
    universe: u64,
    known_mask: u64,
    known_true: u64,
    trait_subset: u64,
    one_copy: u64,
    two_copies: u64,
    finished: bool,
}

impl WorldEnumerator {
    pub fn new(pedigree: &Pedigree) -> Result<Self> {
        let people = pedigree.len();
        if people > MAX_PEOPLE {
            return Err(HeredityError::PedigreeTooLarge {
                people,
                limit: MAX_PEOPLE,
            });
        }

        let mut known_mask = 0u64;
        let mut known_true = 0u64;
        for (i, person) in pedigree.people().iter().enumerate() {
            if let Some(observed) = person.trait_evidence {
                known_mask |= 1u64 << i;
                if observed {
                    known_true |= 1u64 << i;
                }
            }
        }

        let mut enumerator = WorldEnumerator {
            people,
            universe: (1u64 << people) - 1,
            known_mask,
            known_true,
            trait_subset: 0,
            one_copy: 0,
            two_copies: 0,
            finished: false,
        };
        match enumerator.next_consistent_subset(0) {
            Some(subset) => enumerator.trait_subset = subset,
            None => enumerator.finished = true,
        }
        debug!(
            "World enumeration over {} people, {} observed, {} worlds",
            people,
            known_mask.count_ones(),
            enumerator.world_count()
        );
        Ok(enumerator)
    }

    /// Total number of worlds this enumerator yields from the start:
    /// `3^n` gene assignments for each of `2^u` consistent trait subsets,
    /// where `u` is the number of people with unknown trait.
    pub fn world_count(&self) -> u128 {
        let unknown = self.people as u32 - self.known_mask.count_ones();
        3u128.pow(self.people as u32) * 2u128.pow(unknown)
    }

    fn is_consistent(&self, trait_subset: u64) -> bool {
        trait_subset & self.known_mask == self.known_true
    }

    fn next_consistent_subset(&self, from: u64) -> Option<u64> {
        (from..=self.universe).find(|&subset| self.is_consistent(subset))
    }

    fn advance(&mut self) {
        let remaining = self.universe & !self.one_copy;
        self.two_copies = (self.two_copies | !remaining).wrapping_add(1) & remaining;
        if self.two_copies != 0 {
            return;
        }
        if self.one_copy < self.universe {
            self.one_copy += 1;
            return;
        }
        self.one_copy = 0;
        let next = if self.trait_subset < self.universe {
            self.next_consistent_subset(self.trait_subset + 1)
        } else {
            None
        };
        match next {
            Some(subset) => self.trait_subset = subset,
            None => self.finished = true,
        }
    }
}

impl Iterator for WorldEnumerator {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        if self.finished {
            return None;
        }
        let world = World::from_masks(
            self.people,
            self.one_copy,
            self.two_copies,
            self.trait_subset,
        );
        self.advance();
        Some(world)
    }
}
