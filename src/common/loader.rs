use std::io::Read;
use std::path::Path;

use log::info;

use super::error::{HeredityError, Result};
use crate::model::pedigree::{Pedigree, PersonRecord};

const COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];

/// Read a pedigree CSV with header `name,mother,father,trait`.
///
/// Blank `mother`/`father` cells mean no recorded parent. `trait` is `1` for
/// an observed trait, `0` for an observed absence, and blank when unknown.
pub fn load_pedigree<P: AsRef<Path>>(path: P) -> Result<Pedigree> {
    let path = path.as_ref();
    info!("Loading pedigree from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_pedigree(file)
}

pub fn parse_pedigree<R: Read>(input: R) -> Result<Pedigree> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut positions = [0usize; 4];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers.iter().position(|h| h == column).ok_or_else(|| {
            HeredityError::MalformedPedigree(format!("missing '{}' column", column))
        })?;
    }
    let [name, mother, father, trait_column] = positions;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |index: usize| record.get(index).unwrap_or("");
        let optional = |index: usize| Some(field(index)).filter(|v| !v.is_empty()).map(String::from);
        let trait_evidence = match field(trait_column) {
            "1" => Some(true),
            "0" => Some(false),
            "" => None,
            other => {
                return Err(HeredityError::MalformedPedigree(format!(
                    "row {}: trait must be 1, 0 or blank, got '{}'",
                    row + 2,
                    other
                )));
            }
        };
        records.push(PersonRecord {
            name: field(name).to_string(),
            mother: optional(mother),
            father: optional(father),
            trait_evidence,
        });
    }

    Pedigree::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::objects::Parentage;

    #[test]
    fn test_parses_family() {
        let csv = "name,mother,father,trait\nHarry,Lily,James,\nJames,,,1\nLily,,,0\n";
        let pedigree = parse_pedigree(csv.as_bytes()).unwrap();
        assert_eq!(pedigree.len(), 3);
        assert_eq!(pedigree.get("Harry").unwrap().trait_evidence, None);
        assert_eq!(pedigree.get("James").unwrap().trait_evidence, Some(true));
        assert_eq!(pedigree.get("Lily").unwrap().trait_evidence, Some(false));
        assert_eq!(
            pedigree.get("Harry").unwrap().parentage,
            Parentage::Descendant { mother: 2, father: 1 }
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "trait,father,mother,name\n,James,Lily,Harry\n1,,,James\n0,,,Lily\n";
        let pedigree = parse_pedigree(csv.as_bytes()).unwrap();
        assert_eq!(
            pedigree.get("Harry").unwrap().parentage,
            Parentage::Descendant { mother: 2, father: 1 }
        );
    }

    #[test]
    fn test_bad_trait_value() {
        let csv = "name,mother,father,trait\nJames,,,yes\n";
        let err = parse_pedigree(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_missing_column() {
        let csv = "name,mother,father\nJames,,\n";
        let err = parse_pedigree(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, HeredityError::MalformedPedigree(_)));
    }

    #[test]
    fn test_mother_without_father() {
        let csv = "name,mother,father,trait\nLily,,,0\nHarry,Lily,,\n";
        let err = parse_pedigree(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, HeredityError::MalformedPedigree(_)));
    }
}
