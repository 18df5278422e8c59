use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "CX_LOG";

/// Installs a stderr subscriber. `--verbose` forces debug output for cx;
/// otherwise `CX_LOG` is honored, defaulting to warnings only.
pub fn init(verbose: bool) {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let filter = EnvFilter::try_new(directives(verbose, env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn directives(verbose: bool, env: Option<&str>) -> String {
    match (verbose, env.map(str::trim)) {
        (true, _) => "cx=debug".to_string(),
        (false, Some(env)) if !env.is_empty() => env.to_string(),
        _ => "warn".to_string(),
    }
}
