use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
  #[error("could not decode {what}: {source}")]
  Decode {
    source: serde_json::Error,
    what: &'static str,
  },
  #[error("{title} ({status}): {message}")]
  Rejected {
    message: String,
    status: StatusCode,
    title: String,
  },
  #[error(transparent)]
  Transport(#[from] reqwest::Error),
}

impl ApiError {
  pub(crate) fn is_unauthorized(&self) -> bool {
    matches!(
      self,
      Self::Rejected { status, .. } if *status == StatusCode::UNAUTHORIZED
    )
  }

  pub(crate) fn rejected(status: StatusCode, body: &str) -> Self {
    match serde_json::from_str::<ErrorResponse>(body) {
      Ok(ErrorResponse { error }) => Self::Rejected {
        message: error.message,
        status,
        title: error.title,
      },
      Err(_) => Self::Rejected {
        message: truncate(body.trim(), 200),
        status,
        title: status
          .canonical_reason()
          .unwrap_or("Unexpected response")
          .to_string(),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejected_reads_api_error_payload() {
    let error = ApiError::rejected(
      StatusCode::UNAUTHORIZED,
      r#"{"error":{"status":401,"title":"Unauthorized","message":"Invalid token"}}"#,
    );

    assert!(error.is_unauthorized());

    assert_eq!(
      error.to_string(),
      "Unauthorized (401 Unauthorized): Invalid token"
    );
  }

  #[test]
  fn rejected_falls_back_to_status_reason_and_body() {
    let error =
      ApiError::rejected(StatusCode::BAD_GATEWAY, "  upstream went away\n");

    assert!(!error.is_unauthorized());

    match error {
      ApiError::Rejected {
        message, title, ..
      } => {
        assert_eq!(title, "Bad Gateway");
        assert_eq!(message, "upstream went away");
      }
      other => panic!("unexpected error variant: {other:?}"),
    }
  }
}
