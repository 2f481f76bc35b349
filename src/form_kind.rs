#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormKind {
  Login,
  Signup,
  SubmitStory,
}

impl FormKind {
  /// Field labels in display order, with whether the field is a secret.
  pub(crate) fn fields(self) -> &'static [(&'static str, bool)] {
    match self {
      Self::Login => &[("Username", false), ("Password", true)],
      Self::Signup => &[("Name", false), ("Username", false), ("Password", true)],
      Self::SubmitStory => &[("Author", false), ("Title", false), ("Url", false)],
    }
  }

  pub(crate) fn title(self) -> &'static str {
    match self {
      Self::Login => "Log in",
      Self::Signup => "Create account",
      Self::SubmitStory => "Submit a story",
    }
  }
}
