use super::*;

/// A request that talks to the API. Applied to a `Session` off the UI
/// thread; the returned string becomes the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
  Login {
    password: String,
    username: String,
  },
  Logout,
  Refresh,
  RemoveStory {
    story_id: String,
    title: String,
  },
  Signup {
    name: String,
    password: String,
    username: String,
  },
  SubmitStory(NewStory),
  ToggleFavorite {
    story_id: String,
    title: String,
  },
}

impl Operation {
  pub(crate) async fn apply(self, session: &mut Session) -> Result<String> {
    match self {
      Self::Login { password, username } => {
        let user = session.login(&username, &password).await?;

        Ok(format!("Welcome back, {}", user.name))
      }
      Self::Logout => {
        session.logout()?;

        Ok("Logged out".into())
      }
      Self::Refresh => {
        session.refresh_stories().await?;

        Ok(match session.story_list().len() {
          1 => "Loaded 1 story".into(),
          count => format!("Loaded {count} stories"),
        })
      }
      Self::RemoveStory { story_id, title } => {
        session.remove_story(&story_id).await?;

        Ok(format!("Deleted \"{}\"", truncate(&title, 40)))
      }
      Self::Signup {
        name,
        password,
        username,
      } => {
        let user = session.signup(&username, &password, &name).await?;

        Ok(format!("Welcome, {}", user.name))
      }
      Self::SubmitStory(new_story) => {
        let story = session.submit_story(&new_story).await?;

        Ok(format!(
          "Submitted \"{}\"",
          truncate(&plain_text(&story.title), 40)
        ))
      }
      Self::ToggleFavorite { story_id, title } => {
        let title = truncate(&title, 40);

        Ok(if session.toggle_favorite(&story_id).await? {
          format!("Added \"{title}\" to favorites")
        } else {
          format!("Removed \"{title}\" from favorites")
        })
      }
    }
  }

  /// Runs `task` on its own tokio task. A panic there still yields a
  /// `Completed` event, carrying the session as it was before the task.
  async fn guarded<F, Fut>(session: Session, task: F) -> Event
  where
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = (Result<String>, Session)> + Send + 'static,
  {
    let backup = session.clone();

    match tokio::spawn(task(session)).await {
      Ok((result, session)) => Event::Completed { result, session },
      Err(error) => {
        warn!("operation task failed: {error}");

        Event::Completed {
          result: Err(anyhow!("operation did not finish: {error}")),
          session: backup,
        }
      }
    }
  }

  pub(crate) fn pending_message(&self) -> String {
    match self {
      Self::Login { .. } => "Logging in...".into(),
      Self::Logout => "Logging out...".into(),
      Self::Refresh => "Refreshing stories...".into(),
      Self::RemoveStory { title, .. } => {
        format!("Deleting \"{}\"...", truncate(title, 40))
      }
      Self::Signup { .. } => "Creating account...".into(),
      Self::SubmitStory(_) => "Submitting story...".into(),
      Self::ToggleFavorite { title, .. } => {
        format!("Updating favorites for \"{}\"...", truncate(title, 40))
      }
    }
  }

  pub(crate) async fn run(self, session: Session) -> Event {
    Self::guarded(session, move |mut session| async move {
      let result = self.apply(&mut session).await;
      (result, session)
    })
    .await
  }
}
