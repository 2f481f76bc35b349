use super::*;

pub(crate) enum Event {
  Completed {
    result: Result<String>,
    session: Session,
  },
}
