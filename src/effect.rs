use super::*;

pub(crate) enum Effect {
  OpenUrl {
    url: String,
  },
  /// Hands the session to a background task for the duration of `operation`.
  Run {
    operation: Operation,
    session: Session,
  },
}
