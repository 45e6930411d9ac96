use clap::{Arg, ArgMatches, Command, ValueEnum, builder::EnumValueParser, value_parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// How the final distributions are written to stdout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// These options define the inputs from the user.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandLineOptions {
    pub pedigree_file: PathBuf,
    pub model_file: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub parallel: bool,
    pub precision: usize,
}

fn command() -> Command {
    Command::new("heredity")
        .version("0.1.0")
        .about("Exact gene and trait inference over a family pedigree.")
        .arg(
            Arg::new("pedigree_file")
                .value_name("FILE")
                .help("CSV file with columns name,mother,father,trait")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("model_file")
                .long("model_file")
                .value_name("FILE")
                .help("JSON file replacing the reference probability tables")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output_format")
                .long("output_format")
                .value_parser(EnumValueParser::<OutputFormat>::new())
                .help("Output format: 'text' or 'json'")
                .default_value("text"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Score worlds on all available cores")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("DIGITS")
                .help("Decimal places in text output")
                .value_parser(value_parser!(usize))
                .default_value("4"),
        )
}

fn options_from_matches(matches: &ArgMatches) -> CommandLineOptions {
    CommandLineOptions {
        pedigree_file: matches
            .get_one::<PathBuf>("pedigree_file")
            .cloned()
            .unwrap_or_default(),
        model_file: matches.get_one::<PathBuf>("model_file").cloned(),
        output_format: matches
            .get_one::<OutputFormat>("output_format")
            .copied()
            .unwrap_or(OutputFormat::Text),
        parallel: matches.get_flag("parallel"),
        precision: matches.get_one::<usize>("precision").copied().unwrap_or(4),
    }
}

/// Parse the process arguments. Prints usage and exits non-zero when the
/// pedigree file is missing or extra arguments are given.
pub fn parse_configuration_options() -> CommandLineOptions {
    options_from_matches(&command().get_matches())
}

pub fn try_parse_from<I, T>(args: I) -> Result<CommandLineOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(options_from_matches(&matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = try_parse_from(["heredity", "data/family0.csv"]).unwrap();
        assert_eq!(options.pedigree_file, PathBuf::from("data/family0.csv"));
        assert_eq!(options.model_file, None);
        assert_eq!(options.output_format, OutputFormat::Text);
        assert!(!options.parallel);
        assert_eq!(options.precision, 4);
    }

    #[test]
    fn test_all_options() {
        let options = try_parse_from([
            "heredity",
            "family.csv",
            "--model_file",
            "model.json",
            "--output_format",
            "json",
            "--parallel",
            "--precision",
            "6",
        ])
        .unwrap();
        assert_eq!(options.model_file, Some(PathBuf::from("model.json")));
        assert_eq!(options.output_format, OutputFormat::Json);
        assert!(options.parallel);
        assert_eq!(options.precision, 6);
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        assert!(try_parse_from(["heredity"]).is_err());
        assert!(try_parse_from(["heredity", "a.csv", "b.csv"]).is_err());
    }
}
