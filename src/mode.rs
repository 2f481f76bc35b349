use super::*;

pub(crate) enum Mode {
  Browse,
  Form(Form),
}

impl Mode {
  fn browse_key(key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Left | KeyCode::Char('h') => Command::SwitchTabLeft,
      KeyCode::Right | KeyCode::Char('l') => Command::SwitchTabRight,
      KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Home => Command::SelectFirst,
      KeyCode::End => Command::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
      KeyCode::Char('f') => Command::ToggleFavorite,
      KeyCode::Char('d') => Command::DeleteStory,
      KeyCode::Char('s') => Command::StartSubmit,
      KeyCode::Char('L') => Command::StartLogin,
      KeyCode::Char('S') => Command::StartSignup,
      KeyCode::Char('X') => Command::Logout,
      KeyCode::Char('r') => Command::Refresh,
      _ => Command::None,
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match self {
      Mode::Browse => Self::browse_key(key),
      Mode::Form(form) => form.handle_key(key),
    }
  }
}
