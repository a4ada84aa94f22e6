use env_logger::Target;
use log::LevelFilter;

/// Initialize stderr logging. Verbose mode turns on debug output; otherwise
/// only warnings surface, keeping prompt redraws clean. `RUST_LOG` still
/// overrides either default.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.to_string().to_ascii_lowercase()),
    )
    .target(Target::Stderr)
    .init();
}
