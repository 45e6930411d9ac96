use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use super::error::Result;
use crate::inference::marginals::{Marginals, PersonDistribution};
use crate::model::objects::GeneCount;

#[derive(Serialize)]
struct PersonReport<'a> {
    name: &'a str,
    gene: BTreeMap<String, f64>,
    #[serde(rename = "trait")]
    trait_status: BTreeMap<String, f64>,
}

impl<'a> From<&'a PersonDistribution> for PersonReport<'a> {
    fn from(person: &'a PersonDistribution) -> Self {
        PersonReport {
            name: &person.name,
            gene: GeneCount::ALL
                .iter()
                .map(|&gene| (gene.to_string(), person.gene(gene)))
                .collect(),
            trait_status: [true, false]
                .iter()
                .map(|&status| (status.to_string(), person.trait_probability(status)))
                .collect(),
        }
    }
}

/// Plain text report: one block per person, gene counts from two copies
/// down, then trait present/absent.
///
/// ```text
/// Harry:
///   Gene:
///     2: 0.0092
///     1: 0.4557
///     0: 0.5351
///   Trait:
///     True: 0.2665
///     False: 0.7335
/// ```
pub fn render_text(marginals: &Marginals, precision: usize, colorize: bool) -> String {
    let heading = |text: String| {
        if colorize {
            text.bold().to_string()
        } else {
            text
        }
    };
    let mut out = String::new();
    for person in marginals.iter() {
        let _ = writeln!(out, "{}", heading(format!("{}:", person.name)));
        let _ = writeln!(out, "  {}", heading("Gene:".to_string()));
        for gene in GeneCount::ALL.iter().rev() {
            let _ = writeln!(out, "    {}: {:.*}", gene, precision, person.gene(*gene));
        }
        let _ = writeln!(out, "  {}", heading("Trait:".to_string()));
        for (label, status) in [("True", true), ("False", false)] {
            let _ = writeln!(
                out,
                "    {}: {:.*}",
                label,
                precision,
                person.trait_probability(status)
            );
        }
    }
    out
}

pub fn render_json(marginals: &Marginals) -> Result<String> {
    let people: Vec<PersonReport> = marginals.iter().map(PersonReport::from).collect();
    Ok(serde_json::to_string_pretty(&people)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::engine::Inferencer;
    use crate::model::pedigree::{Pedigree, PersonRecord};

    fn lone_founder() -> Marginals {
        let pedigree =
            Pedigree::from_records(vec![PersonRecord::founder("Lily", Some(false))]).unwrap();
        Inferencer::with_reference_model(pedigree).run().unwrap()
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&lone_founder(), 2, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Lily:",
                "  Gene:",
                "    2: 0.00",
                "    1: 0.01",
                "    0: 0.98",
                "  Trait:",
                "    True: 0.00",
                "    False: 1.00",
            ]
        );
    }

    #[test]
    fn test_json_layout() {
        let json = render_json(&lone_founder()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let lily = &value[0];
        assert_eq!(lily["name"], "Lily");
        assert_eq!(lily["trait"]["true"], 0.0);
        assert!((lily["trait"]["false"].as_f64().unwrap() - 1.0).abs() < 1e-12);
        let total: f64 = ["0", "1", "2"]
            .iter()
            .map(|k| lily["gene"][*k].as_f64().unwrap())
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
