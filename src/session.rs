use super::*;

const NOT_LOGGED_IN: &str = "log in or create an account first";

/// Everything the client knows about the current run: who is signed in and
/// which stories are on screen. All mutations go through here.
#[derive(Clone)]
pub(crate) struct Session {
  client: Client,
  credentials: CredentialStore,
  story_list: StoryList,
  user: Option<User>,
}

impl Session {
  /// Best effort: a session file that cannot be removed is left for the
  /// next run to reject again.
  fn forget_credentials(credentials: &CredentialStore) {
    if let Err(error) = credentials.clear() {
      warn!("could not clear stale session: {error:#}");
    }
  }

  pub(crate) async fn login(
    &mut self,
    username: &str,
    password: &str,
  ) -> Result<&User> {
    let user = User::login(&self.client, username, password).await?;

    self.sign_in(user)
  }

  pub(crate) fn logout(&mut self) -> Result {
    self.credentials.clear()?;

    if let Some(user) = self.user.take() {
      info!(username = %user.username, "logged out");
    }

    Ok(())
  }

  pub(crate) fn new(
    client: Client,
    credentials: CredentialStore,
    story_list: StoryList,
    user: Option<User>,
  ) -> Self {
    Self {
      client,
      credentials,
      story_list,
      user,
    }
  }

  pub(crate) async fn refresh_stories(&mut self) -> Result {
    self.story_list = StoryList::fetch(&self.client)
      .await
      .context("could not load stories")?;

    Ok(())
  }

  pub(crate) async fn remove_story(&mut self, story_id: &str) -> Result {
    let Some(user) = self.user.as_mut() else {
      bail!(NOT_LOGGED_IN);
    };

    self
      .story_list
      .remove_story(&self.client, user, story_id)
      .await?;

    info!(%story_id, "removed story");

    Ok(())
  }

  /// Picks up where the last run left off. The stored profile and the story
  /// feed are fetched together; a profile that can no longer be loaded just
  /// means nobody is signed in.
  pub(crate) async fn restore(
    client: Client,
    credentials: CredentialStore,
  ) -> Result<Self> {
    let stored = credentials.load().unwrap_or_else(|error| {
      warn!(%error, "ignoring unreadable session file");
      StoredCredentials::default()
    });

    let (user, story_list) = futures::join!(
      User::get_logged_in_user(
        &client,
        stored.token.as_deref(),
        stored.username.as_deref(),
      ),
      StoryList::fetch(&client),
    );

    let story_list = story_list.context("could not load stories")?;

    let user = match user {
      Ok(user) => user,
      Err(error) => {
        warn!(%error, "discarding stored session");

        if error.is_unauthorized() {
          Self::forget_credentials(&credentials);
        }

        None
      }
    };

    if let Some(user) = &user {
      info!(username = %user.username, "restored session");
    }

    Ok(Self::new(client, credentials, story_list, user))
  }

  fn sign_in(&mut self, user: User) -> Result<&User> {
    self.credentials.save(&user.login_token, &user.username)?;

    info!(username = %user.username, "signed in");

    Ok(&*self.user.insert(user))
  }

  pub(crate) async fn signup(
    &mut self,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<&User> {
    let user = User::create(&self.client, username, password, name).await?;

    self.sign_in(user)
  }

  pub(crate) fn story_list(&self) -> &StoryList {
    &self.story_list
  }

  pub(crate) async fn submit_story(
    &mut self,
    new_story: &NewStory,
  ) -> Result<Story> {
    let Some(user) = self.user.as_mut() else {
      bail!(NOT_LOGGED_IN);
    };

    let story = self
      .story_list
      .add_story(&self.client, user, new_story)
      .await?;

    info!(story_id = %story.story_id, "submitted story");

    Ok(story)
  }

  /// Flips the favorite flag of `story_id` and returns the new state as the
  /// server reports it after the resync.
  pub(crate) async fn toggle_favorite(&mut self, story_id: &str) -> Result<bool> {
    let Some(user) = self.user.as_mut() else {
      bail!(NOT_LOGGED_IN);
    };

    if user.is_favorite(story_id) {
      user.remove_favorite(&self.client, story_id).await?;
    } else {
      user.add_favorite(&self.client, story_id).await?;
    }

    Ok(user.is_favorite(story_id))
  }

  pub(crate) fn user(&self) -> Option<&User> {
    self.user.as_ref()
  }
}
