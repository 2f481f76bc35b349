use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
  #[serde(default)]
  pub(crate) message: String,
  #[serde(default)]
  pub(crate) title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
  pub(crate) error: ErrorBody,
}
