#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelForm,
  DeleteStory,
  HideHelp,
  Logout,
  None,
  OpenInBrowser,
  PageDown,
  PageUp,
  Quit,
  Refresh,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartLogin,
  StartSignup,
  StartSubmit,
  SubmitForm,
  SwitchTabLeft,
  SwitchTabRight,
  ToggleFavorite,
}
