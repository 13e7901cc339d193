use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive (e.g. `keyaudit=trace`).
pub const LOG_ENV: &str = "KEYAUDIT_LOG";

/// Route `tracing` events to stderr. Report output stays on stdout.
///
/// `KEYAUDIT_LOG` wins over `-v`; without either only warnings are shown.
pub fn init_logging(verbose: bool) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("keyaudit={}", default_level)));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
