use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[2].height as usize);

    let header = Paragraph::new(self.state.header().to_string())
      .style(Style::default().fg(Color::Gray));

    frame.render_widget(header, layout[0]);

    let tab_titles: Vec<Line> = Section::ALL
      .iter()
      .zip(self.state.views())
      .map(|(section, view)| {
        Line::from(format!("{} ({})", section.label().to_uppercase(), view.len()))
      })
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(self.state.active_tab())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[1]);

    let empty_text = self
      .state
      .active_section()
      .empty_message(self.state.signed_in());

    let (list_items, selected_index, offset) = match self.state.active_view() {
      Some(view) if !view.is_empty() => (
        view.items().iter().map(Self::entry_item).collect(),
        view.selected_index(),
        view.offset(),
      ),
      _ => (
        vec![ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::raw(empty_text),
        ]))],
        None,
        0,
      ),
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[2], &mut list_state);

    if let Some(view) = self.state.active_view_mut() {
      view.set_offset(list_state.offset());
    }

    let status_color = if self.state.message_is_error() {
      Color::Red
    } else {
      Color::DarkGray
    };

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(status_color));

    frame.render_widget(status, layout[3]);

    if let Mode::Form(form) = self.state.mode() {
      form.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn entry_item(entry: &StoryEntry) -> ListItem<'static> {
    let marker = if entry.favorite {
      Span::styled(FAVORITE_MARKER, Style::default().fg(Color::Red))
    } else {
      Span::raw(" ".repeat(FAVORITE_MARKER.chars().count()))
    };

    let mut title = vec![
      Span::raw(BASE_INDENT),
      marker,
      Span::styled(entry.title.clone(), Style::default().fg(Color::White)),
    ];

    if entry.own {
      title.push(Span::styled(
        " [mine]",
        Style::default().fg(Color::Yellow),
      ));
    }

    let detail_indent = format!(
      "{BASE_INDENT}{}",
      " ".repeat(FAVORITE_MARKER.chars().count())
    );

    ListItem::new(vec![
      Line::from(title),
      Line::from(vec![
        Span::raw(detail_indent),
        Span::styled(entry.detail.clone(), Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Run { operation, session } => {
        let sender = self.event_tx.clone();

        debug!(status = %operation.pending_message(), "starting operation");

        self.handle.spawn(async move {
          let _ = sender.send(operation.run(session).await);
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(
            format!("Opened in browser: {}", truncate(&url, 80)),
            false,
          );
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"), true);
        }
      },
    }
  }

  pub(crate) fn new(session: Session) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(session),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.mode_mut().handle_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        if self.state.is_busy() {
          warn!("quitting with an operation still in flight");
        }

        break;
      }

      self.process_pending_events();
    }

    Ok(())
  }
}
