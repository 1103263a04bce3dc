use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "charcursor=info";

/// Installs a global fmt subscriber for the cursor's `tracing` events.
///
/// The filter comes from `RUST_LOG` if present. Rollbacks are logged at
/// `trace`, so `RUST_LOG=charcursor=trace` shows every failed match.
pub fn init_logger() -> Result<()> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	FmtSubscriber::builder()
		.with_env_filter(filter)
		.try_init()
		.map_err(|e| anyhow!("installing subscriber: {e}"))
}
