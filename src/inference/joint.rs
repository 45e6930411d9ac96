use log::trace;

use super::world::World;
use crate::common::error::{HeredityError, Result};
use crate::model::objects::{GeneCount, Parentage};
use crate::model::pedigree::Pedigree;
use crate::model::probabilities::ProbabilityModel;

/// Probability that a parent with `parent` copies hands one copy to a child.
pub fn pass_probability(model: &ProbabilityModel, parent: GeneCount) -> f64 {
    match parent {
        GeneCount::Zero => model.mutation_rate(),
        GeneCount::One => 0.5,
        GeneCount::Two => 1.0 - model.mutation_rate(),
    }
}

/// Probability that a child ends up with `child` copies given both parents.
pub fn inherited_gene_probability(
    model: &ProbabilityModel,
    child: GeneCount,
    mother: GeneCount,
    father: GeneCount,
) -> f64 {
    let pass_mother = pass_probability(model, mother);
    let pass_father = pass_probability(model, father);
    match child {
        GeneCount::Zero => (1.0 - pass_father) * (1.0 - pass_mother),
        GeneCount::One => pass_mother * (1.0 - pass_father) + pass_father * (1.0 - pass_mother),
        GeneCount::Two => pass_father * pass_mother,
    }
}

/// Probability of exactly this world under the model.
///
/// The product runs over people in name order, so two pedigrees holding the
/// same people in a different input order score a world identically, bit for
/// bit. A zero factor anywhere (e.g. a zero mutation rate making an inherited
/// count impossible) zeroes the whole world.
pub fn joint_probability(
    model: &ProbabilityModel,
    pedigree: &Pedigree,
    world: &World,
) -> Result<f64> {
    if world.len() != pedigree.len() {
        return Err(HeredityError::MalformedPedigree(format!(
            "world assigns {} people but the pedigree has {}",
            world.len(),
            pedigree.len()
        )));
    }

    let people = pedigree.people();
    let mut joint = 1.0;
    for &index in pedigree.canonical_order() {
        let person = &people[index];
        let gene = assigned_gene(world, index, &person.name)?;
        let has_trait = world.has_trait(index).ok_or_else(|| {
            HeredityError::MalformedPedigree(format!("'{}' has no trait status", person.name))
        })?;

        let gene_probability = match person.parentage {
            Parentage::Founder => model.founder_gene_probability(gene),
            Parentage::Descendant { mother, father } => {
                let mother_gene = assigned_gene(world, mother, &person.name)?;
                let father_gene = assigned_gene(world, father, &person.name)?;
                inherited_gene_probability(model, gene, mother_gene, father_gene)
            }
        };
        joint *= gene_probability * model.trait_probability(gene, has_trait);
    }

    trace!("joint probability {:e} for {:?}", joint, world);
    Ok(joint)
}

fn assigned_gene(world: &World, index: usize, person: &str) -> Result<GeneCount> {
    world.gene(index).ok_or_else(|| {
        HeredityError::MalformedPedigree(format!(
            "gene count for person #{} (needed by '{}') is missing from the world",
            index, person
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pedigree::PersonRecord;
    use crate::model::probabilities::TraitProbabilities;

    const EPS: f64 = 1e-12;

    fn family() -> Pedigree {
        Pedigree::from_records(vec![
            PersonRecord::child("Harry", "Lily", "James", None),
            PersonRecord::founder("James", Some(true)),
            PersonRecord::founder("Lily", Some(false)),
        ])
        .unwrap()
    }

    #[test]
    fn test_pass_probability() {
        let model = ProbabilityModel::reference();
        assert_eq!(pass_probability(model, GeneCount::Zero), 0.01);
        assert_eq!(pass_probability(model, GeneCount::One), 0.5);
        assert_eq!(pass_probability(model, GeneCount::Two), 0.99);
    }

    #[test]
    fn test_inherited_distribution_sums_to_one() {
        let model = ProbabilityModel::reference();
        for mother in GeneCount::ALL {
            for father in GeneCount::ALL {
                let total: f64 = GeneCount::ALL
                    .iter()
                    .map(|&child| inherited_gene_probability(model, child, mother, father))
                    .sum();
                assert!((total - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_documented_example_world() {
        // Harry has one copy, James two, Lily none; only James shows the trait.
        let model = ProbabilityModel::reference();
        let world = World::new(
            vec![GeneCount::One, GeneCount::Two, GeneCount::Zero],
            vec![false, true, false],
        );
        let p = joint_probability(model, &family(), &world).unwrap();
        let lily = 0.96 * 0.99;
        let james = 0.01 * 0.65;
        let harry = (0.99 * 0.99 + 0.01 * 0.01) * 0.44;
        assert!((p - lily * james * harry).abs() < EPS);
        assert!((p - 0.0026643247488).abs() < EPS);
    }

    #[test]
    fn test_zero_mutation_makes_world_impossible() {
        let reference = ProbabilityModel::reference();
        let model = ProbabilityModel::new(
            [0.96, 0.03, 0.01],
            [
                TraitProbabilities::new(0.01, 0.99),
                TraitProbabilities::new(0.56, 0.44),
                TraitProbabilities::new(0.65, 0.35),
            ],
            0.0,
        )
        .unwrap();
        // Two parents without the gene cannot have a child carrying it.
        let world = World::new(
            vec![GeneCount::One, GeneCount::Zero, GeneCount::Zero],
            vec![false, true, false],
        );
        assert_eq!(joint_probability(&model, &family(), &world).unwrap(), 0.0);
        assert!(joint_probability(reference, &family(), &world).unwrap() > 0.0);
    }

    #[test]
    fn test_world_size_mismatch_is_malformed() {
        let world = World::new(vec![GeneCount::Zero], vec![false]);
        let err = joint_probability(ProbabilityModel::reference(), &family(), &world).unwrap_err();
        assert!(matches!(err, HeredityError::MalformedPedigree(_)));
    }
}
