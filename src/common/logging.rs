use env_logger::{Builder, Env};
use std::io::Write;

/// Install the global logger. `RUST_LOG` overrides the default `warn` filter
/// so console output stays clean unless asked otherwise.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .init();
}
