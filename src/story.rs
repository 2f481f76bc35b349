use super::*;

/// One shared link as the API reports it. Every field is assigned by the
/// server; the client only ever decodes stories, it never builds them.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Story {
  pub(crate) author: String,
  pub(crate) created_at: String,
  pub(crate) story_id: String,
  pub(crate) title: String,
  pub(crate) updated_at: String,
  pub(crate) url: String,
  pub(crate) username: String,
}

impl Story {
  pub(crate) fn from_record(record: &Value) -> Result<Self, ApiError> {
    Self::deserialize(record).map_err(|source| ApiError::Decode {
      source,
      what: "story",
    })
  }

  pub(crate) fn from_records(records: &[Value]) -> Result<Vec<Self>, ApiError> {
    records.iter().map(Self::from_record).collect()
  }

  pub(crate) fn host_name(&self) -> &str {
    host_name(&self.url)
  }
}
