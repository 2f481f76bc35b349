use super::*;

/// The `user` object embedded in signup, login and profile responses. Signup
/// answers may leave out the story arrays, so they default to empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
  pub(crate) created_at: String,
  #[serde(default)]
  pub(crate) favorites: Vec<Value>,
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) stories: Vec<Value>,
  pub(crate) updated_at: String,
  pub(crate) username: String,
}
