use super::*;

/// A status line that reverts to `original` once it has been on screen for
/// `TransientMessage::LIFETIME`.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  is_error: bool,
  original: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn is_error(&self) -> bool {
    self.is_error
  }

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(current: String, original: String, is_error: bool) -> Self {
    Self::with_lifetime(current, original, is_error, Self::LIFETIME)
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }

  fn with_lifetime(
    current: String,
    original: String,
    is_error: bool,
    lifetime: Duration,
  ) -> Self {
    Self {
      current,
      expires_at: Instant::now() + lifetime,
      is_error,
      original,
    }
  }
}
