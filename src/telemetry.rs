//! Telemetry helpers for applications embedding `chart-hooks`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` or wire their own `tracing` subscriber and
//! filters. The chain itself only emits `debug`/`trace` events.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// Returns `true` when initialization succeeds, `false` when nothing was
/// initialized (feature disabled, or the host already installed a global
/// subscriber).
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_hooks=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
