//! `emberc`: the CLI binary crate, plus the library surface it is built
//! from — the hand-rolled option parser (spec.md §6, §9), the parallel
//! driver (C8), and the pipeline façade (C9) tying every other crate
//! together.

mod cli;
mod driver;
mod dump;
mod error;
mod options_builder;
mod pipeline;

pub use cli::{parse as parse_args, ParsedArgs};
pub use driver::{run_parallel, run_sequential, threading_info, Stage, ThreadingInfo};
pub use dump::{dump_source, DumpOutput, LiteralDump, LocationDump, SourceDump, TokenDump};
pub use error::{CliError, DriverError};
pub use options_builder::build_options;
pub use pipeline::Pipeline;

/// Installs a `tracing_subscriber::fmt` subscriber gated by the `EMBERC_LOG`
/// environment variable (defaulting to `warn`), the way `oric`'s
/// `tracing_setup` module installs its own subscriber once, solely in the
/// binary crate — library crates here only ever call
/// `tracing::{trace,debug,warn}!`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("EMBERC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
