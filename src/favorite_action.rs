use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FavoriteAction {
  Add,
  Remove,
}

impl FavoriteAction {
  pub(crate) fn method(self) -> Method {
    match self {
      Self::Add => Method::POST,
      Self::Remove => Method::DELETE,
    }
  }
}
