pub(crate) struct FormField {
  pub(crate) label: &'static str,
  pub(crate) secret: bool,
  pub(crate) value: String,
}

impl FormField {
  pub(crate) fn display_value(&self) -> String {
    if self.secret {
      "*".repeat(self.value.chars().count())
    } else {
      self.value.clone()
    }
  }

  /// Secrets are taken verbatim; everything else is trimmed.
  pub(crate) fn submitted_value(&self) -> String {
    if self.secret {
      self.value.clone()
    } else {
      self.value.trim().to_string()
    }
  }
}
