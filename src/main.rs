use {
  anyhow::{Context, anyhow, bail},
  api_error::ApiError,
  app::App,
  auth_response::AuthResponse,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  credential_store::CredentialStore,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  error_response::ErrorResponse,
  event::Event,
  favorite_action::FavoriteAction,
  form::Form,
  form_field::FormField,
  form_kind::FormKind,
  help_view::HelpView,
  list_view::ListView,
  mode::Mode,
  new_story::NewStory,
  operation::Operation,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  reqwest::{Method, RequestBuilder, StatusCode, Url},
  section::Section,
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  serde_json::{Value, json},
  session::Session,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  stored_credentials::StoredCredentials,
  stories_response::StoriesResponse,
  story::Story,
  story_entry::StoryEntry,
  story_list::StoryList,
  story_response::StoryResponse,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  transient_message::TransientMessage,
  user::User,
  user_record::UserRecord,
  user_response::UserResponse,
  utils::{calendar_date, centered_area, host_name, plain_text, truncate},
};

mod api_error;
mod app;
mod auth_response;
mod client;
mod command;
mod command_dispatch;
mod config;
mod credential_store;
mod effect;
mod error_response;
mod event;
mod favorite_action;
#[cfg(test)]
mod fixtures;
mod form;
mod form_field;
mod form_kind;
mod help_view;
mod list_view;
mod mode;
mod new_story;
mod observability;
mod operation;
mod section;
mod session;
mod state;
mod stored_credentials;
mod stories_response;
mod story;
mod story_entry;
mod story_list;
mod story_response;
mod transient_message;
mod user;
mod user_record;
mod user_response;
mod utils;

const LIST_STATUS: &str = "↑/k up • ↓/j down • o open • f favorite • s submit • L log in • S sign up • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BUSY_STATUS: &str = "Still working on the last request...";
const LOGIN_REQUIRED_STATUS: &str = "Log in (L) or sign up (S) first";
const NOT_OWNER_STATUS: &str = "You can only delete your own stories";

const SIGNED_OUT_HEADER: &str =
  "Not signed in. Press L to log in or S to create an account.";

const FORM_HINT: &str = "tab next field • shift+tab previous • enter submit • esc cancel";
const FORM_MIN_WIDTH: usize = 40;

const FAVORITE_MARKER: &str = "♥ ";

const BASE_INDENT: &str = " ";

/// Terminal rows taken by one story: title, detail, spacer.
const ROW_HEIGHT: usize = 3;

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous tab
  → / l   next tab
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Stories:
  o       open the selected story in your browser
  enter   same as o
  f       add or remove the selected story from favorites
  d       delete the selected story (only your own)
  s       submit a new story
  r       reload the story feed

Account:
  L       log in
  S       create an account
  X       log out

Other:
  q       quit hos
  esc     close help or quit from the list
  ?       toggle this help

Forms:
  tab     next field
  s-tab   previous field
  enter   submit
  esc     cancel
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::from_env()?;

  if let Err(error) = observability::init_logging(&config.log_file) {
    eprintln!("warning: logging disabled: {error:#}");
  }

  info!(api_url = %config.api_url, "starting");

  let client = Client::new(config.api_url)?;

  let credentials = CredentialStore::new(config.session_file);

  let session = Session::restore(client, credentials).await?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(session);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
