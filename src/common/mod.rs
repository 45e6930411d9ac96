pub mod error;
pub mod loader;
pub mod logging;
pub mod report;
pub mod setup;

pub use error::{HeredityError, Result};
pub use loader::{load_pedigree, parse_pedigree};
pub use setup::{CommandLineOptions, OutputFormat};
