use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let (line_count, max_width) = HELP_TEXT
      .lines()
      .fold((0, 0), |(count, width), line| {
        (count + 1, width.max(line.chars().count()))
      });

    let area = centered_area(frame.area(), max_width, line_count);

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    *message = self
      .message_backup
      .take()
      .unwrap_or_else(|| LIST_STATUS.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  /// Replaces the message that `hide` will bring back.
  pub(crate) fn set_backup(&mut self, message: String) {
    if self.visible {
      self.message_backup = Some(message);
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(std::mem::replace(message, HELP_STATUS.into()));

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn show_and_hide_restore_the_status_message() {
    let mut help = HelpView::new();
    let mut message = "status".to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.hide(&mut message);
    assert!(!help.is_visible());
    assert_eq!(message, "status");
  }

  #[test]
  fn set_backup_changes_what_hide_restores() {
    let mut help = HelpView::new();
    let mut message = "Logging in...".to_string();

    help.show(&mut message);
    help.set_backup("Welcome back".to_string());
    help.hide(&mut message);

    assert_eq!(message, "Welcome back");
  }
}
