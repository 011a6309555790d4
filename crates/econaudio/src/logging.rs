use tracing_subscriber::EnvFilter;

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["econaudio", "econaudio_core"];

/// Initialize tracing on stderr.
///
/// Crate targets log at `warn` by default and `info` with `--verbose`.
/// `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
