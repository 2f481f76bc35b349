use super::*;

/// A modal form drawn over the story list. Collects text for one
/// `Operation` and refuses to produce it while any field is blank.
pub(crate) struct Form {
  fields: Vec<FormField>,
  focus: usize,
  kind: FormKind,
}

impl Form {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    let label_width = self
      .fields
      .iter()
      .map(|field| field.label.len())
      .max()
      .unwrap_or_default();

    let mut lines = Vec::with_capacity(self.fields.len() + 2);

    for (index, field) in self.fields.iter().enumerate() {
      let focused = index == self.focus;

      let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::DarkGray)
      };

      let mut spans = vec![
        Span::styled(format!("{:>label_width$}: ", field.label), label_style),
        Span::styled(field.display_value(), Style::default().fg(Color::White)),
      ];

      if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
      }

      lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      FORM_HINT,
      Style::default().fg(Color::DarkGray),
    )));

    let width = lines
      .iter()
      .map(Line::width)
      .max()
      .unwrap_or_default()
      .max(FORM_MIN_WIDTH);

    let area = centered_area(frame.area(), width, lines.len());

    frame.render_widget(Clear, area);

    let form = Paragraph::new(lines).block(
      Block::default()
        .title(self.kind.title())
        .borders(Borders::ALL),
    );

    frame.render_widget(form, area);
  }

  fn focus_next(&mut self) {
    self.focus = (self.focus + 1) % self.fields.len().max(1);
  }

  fn focus_previous(&mut self) {
    let count = self.fields.len().max(1);

    self.focus = (self.focus + count - 1) % count;
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelForm,
      KeyCode::Enter => Command::SubmitForm,
      KeyCode::Tab | KeyCode::Down => {
        self.focus_next();
        Command::None
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.focus_previous();
        Command::None
      }
      KeyCode::Backspace => {
        if let Some(field) = self.fields.get_mut(self.focus) {
          field.value.pop();
        }

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
        {
          return Command::None;
        }

        if let Some(field) = self.fields.get_mut(self.focus) {
          field.value.push(ch);
        }

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn new(kind: FormKind) -> Self {
    let fields = kind
      .fields()
      .iter()
      .map(|&(label, secret)| FormField {
        label,
        secret,
        value: String::new(),
      })
      .collect();

    Self {
      fields,
      focus: 0,
      kind,
    }
  }

  pub(crate) fn operation(&self) -> Result<Operation, String> {
    if let Some(field) = self
      .fields
      .iter()
      .find(|field| field.value.trim().is_empty())
    {
      return Err(format!("{} is required", field.label));
    }

    let values = self
      .fields
      .iter()
      .map(FormField::submitted_value)
      .collect::<Vec<_>>();

    match (self.kind, values.as_slice()) {
      (FormKind::Login, [username, password]) => Ok(Operation::Login {
        password: password.clone(),
        username: username.clone(),
      }),
      (FormKind::Signup, [name, username, password]) => Ok(Operation::Signup {
        name: name.clone(),
        password: password.clone(),
        username: username.clone(),
      }),
      (FormKind::SubmitStory, [author, title, url]) => {
        Ok(Operation::SubmitStory(NewStory {
          author: author.clone(),
          title: title.clone(),
          url: url.clone(),
        }))
      }
      _ => Err(format!("{} form is incomplete", self.kind.title())),
    }
  }
}
