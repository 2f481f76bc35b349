use super::*;

/// The signed-in identity. Only `username` and `login_token` outlive a run of
/// the program; everything else is refetched from the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct User {
  pub(crate) created_at: String,
  pub(crate) favorites: Vec<Story>,
  pub(crate) login_token: String,
  pub(crate) name: String,
  pub(crate) own_stories: Vec<Story>,
  pub(crate) updated_at: String,
  pub(crate) username: String,
}

impl User {
  pub(crate) async fn add_favorite(
    &mut self,
    client: &Client,
    story_id: &str,
  ) -> Result<&mut Self, ApiError> {
    self
      .toggle_favorite(client, story_id, FavoriteAction::Add)
      .await
  }

  pub(crate) async fn create(
    client: &Client,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<Self, ApiError> {
    let AuthResponse { token, user } =
      client.signup(username, password, name).await?;

    Ok(Self::from_record(user, token))
  }

  fn from_record(record: UserRecord, login_token: String) -> Self {
    Self {
      created_at: record.created_at,
      favorites: Vec::new(),
      login_token,
      name: record.name,
      own_stories: Vec::new(),
      updated_at: record.updated_at,
      username: record.username,
    }
  }

  /// Restores a previous session. Returns `None` without touching the
  /// network when either half of the stored credentials is missing.
  pub(crate) async fn get_logged_in_user(
    client: &Client,
    token: Option<&str>,
    username: Option<&str>,
  ) -> Result<Option<Self>, ApiError> {
    let (Some(token), Some(username)) = (
      token.filter(|token| !token.is_empty()),
      username.filter(|username| !username.is_empty()),
    ) else {
      return Ok(None);
    };

    let record = client.fetch_user(username, token).await?;

    Self::with_stories(record, token.to_string()).map(Some)
  }

  /// Replaces the profile fields and both story collections with the
  /// server's current view of this user.
  pub(crate) async fn get_profile(
    &mut self,
    client: &Client,
  ) -> Result<&mut Self, ApiError> {
    let record = client.fetch_user(&self.username, &self.login_token).await?;

    let favorites = Story::from_records(&record.favorites)?;
    let own_stories = Story::from_records(&record.stories)?;

    self.name = record.name;
    self.created_at = record.created_at;
    self.updated_at = record.updated_at;
    self.favorites = favorites;
    self.own_stories = own_stories;

    Ok(self)
  }

  pub(crate) fn is_favorite(&self, story_id: &str) -> bool {
    self
      .favorites
      .iter()
      .any(|story| story.story_id == story_id)
  }

  pub(crate) async fn login(
    client: &Client,
    username: &str,
    password: &str,
  ) -> Result<Self, ApiError> {
    let AuthResponse { token, user } = client.login(username, password).await?;

    Self::with_stories(user, token)
  }

  pub(crate) fn owns(&self, story_id: &str) -> bool {
    self
      .own_stories
      .iter()
      .any(|story| story.story_id == story_id)
  }

  pub(crate) async fn remove_favorite(
    &mut self,
    client: &Client,
    story_id: &str,
  ) -> Result<&mut Self, ApiError> {
    self
      .toggle_favorite(client, story_id, FavoriteAction::Remove)
      .await
  }

  // The toggle endpoint returns nothing we trust, so the profile refetch is
  // the only path that updates `favorites`.
  async fn toggle_favorite(
    &mut self,
    client: &Client,
    story_id: &str,
    action: FavoriteAction,
  ) -> Result<&mut Self, ApiError> {
    client
      .toggle_favorite(action, &self.username, &self.login_token, story_id)
      .await?;

    self.get_profile(client).await
  }

  fn with_stories(
    record: UserRecord,
    login_token: String,
  ) -> Result<Self, ApiError> {
    let favorites = Story::from_records(&record.favorites)?;
    let own_stories = Story::from_records(&record.stories)?;

    Ok(Self {
      favorites,
      own_stories,
      ..Self::from_record(record, login_token)
    })
  }
}
