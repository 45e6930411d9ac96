#[cfg(test)]
mod test_loader {
    use heredity::common::load_pedigree;
    use heredity::common::report::render_text;
    use heredity::{HeredityError, Inferencer, ProbabilityModel};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn data_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn test_sample_families_run_end_to_end() {
        for (file, people) in [("family0.csv", 3), ("family1.csv", 6), ("family2.csv", 5)] {
            let pedigree = load_pedigree(data_file(file)).unwrap();
            assert_eq!(pedigree.len(), people);
            let marginals = Inferencer::with_reference_model(pedigree).run().unwrap();
            for person in marginals.iter() {
                let gene: f64 = person.gene.iter().sum();
                assert!((gene - 1.0).abs() < 1e-9, "{file}: {}", person.name);
            }
        }
    }

    #[test]
    fn test_text_report_for_family0() {
        let pedigree = load_pedigree(data_file("family0.csv")).unwrap();
        let marginals = Inferencer::with_reference_model(pedigree).run().unwrap();
        let text = render_text(&marginals, 4, false);
        assert!(text.starts_with("Harry:\n  Gene:\n    2: 0.0092\n    1: 0.4557\n    0: 0.5351\n"));
        assert!(text.contains("James:"));
        assert!(text.contains("    True: 1.0000\n    False: 0.0000\n"));
    }

    #[test]
    fn test_load_from_temp_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,mother,father,trait").unwrap();
        writeln!(file, "Molly,,,").unwrap();
        writeln!(file, "Arthur,,,0").unwrap();
        writeln!(file, "Ron,Molly,Arthur,1").unwrap();
        file.flush().unwrap();

        let pedigree = load_pedigree(file.path()).unwrap();
        assert_eq!(pedigree.len(), 3);
        assert!(!pedigree.get("Ron").unwrap().is_founder());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_pedigree(data_file("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, HeredityError::Io(_)));
    }

    #[test]
    fn test_model_file_round_trip_through_disk() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(ProbabilityModel::reference()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        let model = ProbabilityModel::load_from_file(file.path()).unwrap();
        assert_eq!(&model, ProbabilityModel::reference());
    }
}
