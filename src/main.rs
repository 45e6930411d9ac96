use anyhow::{Context, Result};
use std::io::IsTerminal;

use heredity::common::logging::init_logging;
use heredity::common::report::{render_json, render_text};
use heredity::common::setup::parse_configuration_options;
use heredity::common::{OutputFormat, load_pedigree};
use heredity::{InferenceOptions, Inferencer, ProbabilityModel};

fn main() -> Result<()> {
    init_logging();
    let options = parse_configuration_options();

    let pedigree = load_pedigree(&options.pedigree_file).with_context(|| {
        format!(
            "Failed to load pedigree from {}",
            options.pedigree_file.display()
        )
    })?;

    let model = match &options.model_file {
        Some(path) => ProbabilityModel::load_from_file(path)
            .with_context(|| format!("Failed to load model from {}", path.display()))?,
        None => ProbabilityModel::reference().clone(),
    };

    let marginals = Inferencer::new(model, pedigree)
        .with_options(InferenceOptions {
            parallel: options.parallel,
        })
        .run()
        .context("Inference failed")?;

    match options.output_format {
        OutputFormat::Text => {
            let colorize = std::io::stdout().is_terminal();
            print!("{}", render_text(&marginals, options.precision, colorize));
        }
        OutputFormat::Json => println!("{}", render_json(&marginals)?),
    }
    Ok(())
}
