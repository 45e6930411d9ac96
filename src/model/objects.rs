use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of copies of the gene a person carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn copies(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }

    pub fn from_copies(copies: usize) -> Option<GeneCount> {
        match copies {
            0 => Some(GeneCount::Zero),
            1 => Some(GeneCount::One),
            2 => Some(GeneCount::Two),
            _ => None,
        }
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}

/// Where a person's gene copies come from.
///
/// Resolved once when the pedigree is built, so evaluation never has to
/// re-check whether parent references are present.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Parentage {
    /// No recorded parents; gene count is drawn from the founder prior.
    Founder,
    /// Both parents recorded, as indices into the owning pedigree.
    Descendant { mother: usize, father: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub parentage: Parentage,
    /// Observed trait status, `None` when unknown.
    pub trait_evidence: Option<bool>,
}

impl Person {
    pub fn is_founder(&self) -> bool {
        matches!(self.parentage, Parentage::Founder)
    }
}

/// The two per-person distributions produced by inference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Distribution {
    Gene,
    Trait,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Gene => write!(f, "gene"),
            Distribution::Trait => write!(f, "trait"),
        }
    }
}
