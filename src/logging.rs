use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` or `warn`
/// depending on `debug_mode`. Returns `false` when a subscriber was already
/// installed, which is then kept.
pub fn setup_logging(debug_mode: bool) -> bool {
    let default_level = if debug_mode { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    match installed {
        Ok(()) => {
            tracing::debug!(debug = debug_mode, "logging initialized");
            true
        }
        Err(e) => {
            tracing::debug!(error = %e, "subscriber already installed, keeping it");
            false
        }
    }
}
