use super::*;

/// What the submit form collects. The poster is added when the story is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewStory {
  pub(crate) author: String,
  pub(crate) title: String,
  pub(crate) url: String,
}
