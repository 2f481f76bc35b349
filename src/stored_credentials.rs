use super::*;

/// The two keys that survive between runs. Either may be missing, e.g. when
/// the file was edited by hand.
#[derive(Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub(crate) struct StoredCredentials {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub(crate) token: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub(crate) username: Option<String>,
}
