use super::*;

pub(crate) struct State {
  active_tab: usize,
  header: String,
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  pending_effects: Vec<Effect>,
  session: Option<Session>,
  signed_in: bool,
  transient_message: Option<TransientMessage>,
  views: Vec<ListView<StoryEntry>>,
}

impl State {
  pub(crate) fn active_section(&self) -> Section {
    Section::ALL
      .get(self.active_tab)
      .copied()
      .unwrap_or(Section::Stories)
  }

  pub(crate) fn active_tab(&self) -> usize {
    self.active_tab
  }

  pub(crate) fn active_view(&self) -> Option<&ListView<StoryEntry>> {
    self.views.get(self.active_tab)
  }

  pub(crate) fn active_view_mut(&mut self) -> Option<&mut ListView<StoryEntry>> {
    self.views.get_mut(self.active_tab)
  }

  fn cancel_form(&mut self) {
    if matches!(self.mode, Mode::Form(_)) {
      self.mode = Mode::Browse;
      self.message = LIST_STATUS.into();
    }
  }

  fn current_entry(&self) -> Option<&StoryEntry> {
    self.active_view().and_then(ListView::selected_item)
  }

  fn delete_story(&mut self) {
    if !self.require_user() {
      return;
    }

    let Some(entry) = self.current_entry().cloned() else {
      return;
    };

    if !entry.own {
      self.set_transient_message(NOT_OWNER_STATUS.into(), true);
      return;
    }

    self.run_operation(Operation::RemoveStory {
      story_id: entry.story_id,
      title: entry.title,
    });
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::SwitchTabLeft => self.switch_tab(Section::ALL.len() - 1),
      Command::SwitchTabRight => self.switch_tab(1),
      Command::SelectNext => self.select_by(1),
      Command::SelectPrevious => self.select_by(-1),
      Command::PageDown => self.select_by(self.page_jump()),
      Command::PageUp => self.select_by(-self.page_jump()),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::OpenInBrowser => self.open_current_in_browser(),
      Command::ToggleFavorite => self.toggle_favorite(),
      Command::DeleteStory => self.delete_story(),
      Command::Refresh => {
        self.run_operation(Operation::Refresh);
      }
      Command::Logout => {
        if self.require_user() {
          self.run_operation(Operation::Logout);
        }
      }
      Command::StartLogin => self.start_form(FormKind::Login),
      Command::StartSignup => self.start_form(FormKind::Signup),
      Command::StartSubmit => self.start_form(FormKind::SubmitStory),
      Command::SubmitForm => self.submit_form(),
      Command::CancelForm => self.cancel_form(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Completed { result, session } => {
        self.session = Some(session);

        self.rebuild();

        let (message, is_error) = match result {
          Ok(message) => (message, false),
          Err(error) => {
            warn!("operation failed: {error:#}");
            (format!("error: {error:#}"), true)
          }
        };

        if self.help.is_visible() {
          self.help.set_backup(message);
        } else {
          self.transient_message = None;
          self.message = LIST_STATUS.into();
          self.set_transient_message(message, is_error);
        }
      }
    }
  }

  pub(crate) fn header(&self) -> &str {
    &self.header
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_busy(&self) -> bool {
    self.session.is_none()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn message_is_error(&self) -> bool {
    self
      .transient_message
      .as_ref()
      .is_some_and(|transient| {
        transient.is_error() && transient.current() == self.message
      })
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(session: Session) -> Self {
    let mut state = Self {
      active_tab: 0,
      header: String::new(),
      help: HelpView::new(),
      list_height: 0,
      message: LIST_STATUS.into(),
      mode: Mode::Browse,
      pending_effects: Vec::new(),
      session: Some(session),
      signed_in: false,
      transient_message: None,
      views: Section::ALL.iter().map(|_| ListView::default()).collect(),
    };

    state.rebuild();

    state
  }

  fn open_current_in_browser(&mut self) {
    if let Some(entry) = self.current_entry() {
      self.pending_effects.push(Effect::OpenUrl {
        url: entry.url.clone(),
      });
    }
  }

  fn page_jump(&self) -> isize {
    let rows = (self.list_height / ROW_HEIGHT).saturating_sub(1).max(1);

    isize::try_from(rows).unwrap_or(isize::MAX)
  }

  /// Refreshes the header and every tab from the session, keeping each
  /// cursor where it was when the list is still long enough.
  fn rebuild(&mut self) {
    let Some(session) = &self.session else {
      return;
    };

    let user = session.user();

    self.signed_in = user.is_some();

    self.header = user.map_or_else(
      || SIGNED_OUT_HEADER.to_string(),
      |user| {
        format!(
          "Signed in as {} ({}), member since {}",
          user.username,
          user.name,
          calendar_date(&user.created_at)
        )
      },
    );

    for (section, view) in Section::ALL.iter().zip(&mut self.views) {
      view.replace(section.entries(session));
    }
  }

  fn require_user(&mut self) -> bool {
    let refusal = match self.session.as_ref().map(Session::user) {
      None => BUSY_STATUS,
      Some(None) => LOGIN_REQUIRED_STATUS,
      Some(Some(_)) => return true,
    };

    self.set_transient_message(refusal.into(), true);

    false
  }

  /// Moves the session into a `Run` effect. Returns `false` when another
  /// operation still holds it.
  fn run_operation(&mut self, operation: Operation) -> bool {
    let Some(session) = self.session.take() else {
      self.set_transient_message(BUSY_STATUS.into(), true);
      return false;
    };

    self.transient_message = None;
    self.message = operation.pending_message();

    self
      .pending_effects
      .push(Effect::Run { operation, session });

    true
  }

  fn select_by(&mut self, delta: isize) {
    if let Some(view) = self.active_view_mut() {
      view.select_by(delta);
    }
  }

  fn select_index(&mut self, index: usize) {
    if let Some(view) = self.active_view_mut() {
      view.set_selected(index);
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String, is_error: bool) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original, is_error));

    self.message = message;
  }

  pub(crate) fn signed_in(&self) -> bool {
    self.signed_in
  }

  fn start_form(&mut self, kind: FormKind) {
    let Some(session) = &self.session else {
      self.set_transient_message(BUSY_STATUS.into(), true);
      return;
    };

    let refusal = match (kind, session.user()) {
      (FormKind::Login | FormKind::Signup, Some(user)) => {
        Some(format!("Already signed in as {}. Press X to log out.", user.username))
      }
      (FormKind::SubmitStory, None) => Some(LOGIN_REQUIRED_STATUS.to_string()),
      _ => None,
    };

    if let Some(refusal) = refusal {
      self.set_transient_message(refusal, true);
      return;
    }

    self.transient_message = None;
    self.message = kind.title().into();
    self.mode = Mode::Form(Form::new(kind));
  }

  fn submit_form(&mut self) {
    let Mode::Form(form) = &self.mode else {
      return;
    };

    match form.operation() {
      Ok(operation) => {
        if self.run_operation(operation) {
          self.mode = Mode::Browse;
        }
      }
      Err(problem) => self.set_transient_message(problem, true),
    }
  }

  fn switch_tab(&mut self, step: usize) {
    self.active_tab = (self.active_tab + step) % Section::ALL.len();
  }

  fn toggle_favorite(&mut self) {
    if !self.require_user() {
      return;
    }

    let Some(entry) = self.current_entry().cloned() else {
      return;
    };

    self.run_operation(Operation::ToggleFavorite {
      story_id: entry.story_id,
      title: entry.title,
    });
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn views(&self) -> &[ListView<StoryEntry>] {
    &self.views
  }
}
