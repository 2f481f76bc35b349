use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct StoryResponse {
  pub(crate) story: Value,
}
