use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct StoriesResponse {
  pub(crate) stories: Vec<Value>,
}
