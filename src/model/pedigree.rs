use std::collections::HashMap;

use log::debug;

use super::objects::{Parentage, Person};
use crate::common::error::{HeredityError, Result};

/// One raw row of pedigree input, before parent names are resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    pub trait_evidence: Option<bool>,
}

impl PersonRecord {
    pub fn founder(name: &str, trait_evidence: Option<bool>) -> Self {
        PersonRecord {
            name: name.to_string(),
            mother: None,
            father: None,
            trait_evidence,
        }
    }

    pub fn child(name: &str, mother: &str, father: &str, trait_evidence: Option<bool>) -> Self {
        PersonRecord {
            name: name.to_string(),
            mother: Some(mother.to_string()),
            father: Some(father.to_string()),
            trait_evidence,
        }
    }
}

/// The full set of people taking part in one inference run.
///
/// People keep their input order. Parent references are stored as indices
/// into that order and are guaranteed to resolve.
#[derive(Clone, Debug)]
pub struct Pedigree {
    people: Vec<Person>,
    id_to_index: HashMap<String, usize>,
    /// Indices sorted by name; products over people are taken in this order.
    canonical_order: Vec<usize>,
}

impl Pedigree {
    /// Build a pedigree from raw records.
    ///
    /// # Errors
    /// Returns [`HeredityError::MalformedPedigree`] for an empty or duplicate
    /// name, a record with exactly one parent, a parent name that is not in
    /// the pedigree, or a person listed as their own parent.
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        let mut id_to_index = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.name.is_empty() {
                return Err(HeredityError::MalformedPedigree(format!(
                    "record {} has an empty name",
                    index + 1
                )));
            }
            if id_to_index.insert(record.name.clone(), index).is_some() {
                return Err(HeredityError::MalformedPedigree(format!(
                    "duplicate name '{}'",
                    record.name
                )));
            }
        }

        let resolve = |person: &str, parent: &str| -> Result<usize> {
            if parent == person {
                return Err(HeredityError::MalformedPedigree(format!(
                    "'{}' is listed as their own parent",
                    person
                )));
            }
            id_to_index.get(parent).copied().ok_or_else(|| {
                HeredityError::MalformedPedigree(format!(
                    "parent '{}' of '{}' is not in the pedigree",
                    parent, person
                ))
            })
        };

        let mut people = Vec::with_capacity(records.len());
        for record in records.iter() {
            let parentage = match (&record.mother, &record.father) {
                (None, None) => Parentage::Founder,
                (Some(mother), Some(father)) => Parentage::Descendant {
                    mother: resolve(&record.name, mother)?,
                    father: resolve(&record.name, father)?,
                },
                _ => {
                    return Err(HeredityError::MalformedPedigree(format!(
                        "'{}' must have both a mother and a father or neither",
                        record.name
                    )));
                }
            };
            people.push(Person {
                name: record.name.clone(),
                parentage,
                trait_evidence: record.trait_evidence,
            });
        }

        let mut canonical_order: Vec<usize> = (0..people.len()).collect();
        canonical_order.sort_by(|&a, &b| people[a].name.cmp(&people[b].name));

        let founders = people.iter().filter(|p| p.is_founder()).count();
        debug!(
            "Built pedigree with {} people ({} founders, {} descendants)",
            people.len(),
            founders,
            people.len() - founders
        );

        Ok(Pedigree {
            people,
            id_to_index,
            canonical_order,
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.id_to_index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.index_of(name).map(|index| &self.people[index])
    }

    pub fn canonical_order(&self) -> &[usize] {
        &self.canonical_order
    }
}
