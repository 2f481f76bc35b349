use {
  super::*,
  std::{fs::OpenOptions, sync::Mutex},
  tracing_subscriber::EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "hos=info";

/// Sends `tracing` output to `path`. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
pub(crate) fn init_logging(path: &Path) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))
}
