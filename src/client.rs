use super::*;

/// Thin wrapper over the Hack-or-Snooze REST API. Every method is exactly one
/// request; failures are returned to the caller as they happen.
#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const DEFAULT_API_URL: &str =
    "https://hack-or-snooze-v3.herokuapp.com";

  /// Posts `story` on behalf of `username`, authorized by `token`.
  pub(crate) async fn create_story(
    &self,
    token: &str,
    username: &str,
    story: &NewStory,
  ) -> Result<Story, ApiError> {
    let response = self
      .send::<StoryResponse>(
        self.client.post(self.endpoint(&["stories"])).json(&json!({
          "token": token,
          "story": {
            "author": story.author,
            "title": story.title,
            "url": story.url,
            "username": username,
          }
        })),
        "created story",
      )
      .await?;

    Story::from_record(&response.story)
  }

  pub(crate) async fn delete_story(
    &self,
    token: &str,
    story_id: &str,
  ) -> Result<(), ApiError> {
    self
      .execute(
        self
          .client
          .delete(self.endpoint(&["stories", story_id]))
          .json(&json!({ "token": token })),
      )
      .await
      .map(drop)
  }

  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();

    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }

    url
  }

  async fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
    let request = request.build()?;

    let (method, path) = (request.method().clone(), request.url().path().to_owned());

    let response = self.client.execute(request).await?;

    let status = response.status();

    let body = response.text().await?;

    debug!(%method, %path, %status, "api request");

    if status.is_success() {
      Ok(body)
    } else {
      Err(ApiError::rejected(status, &body))
    }
  }

  pub(crate) async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError> {
    let response = self
      .send::<StoriesResponse>(
        self.client.get(self.endpoint(&["stories"])),
        "story list",
      )
      .await?;

    Story::from_records(&response.stories)
  }

  pub(crate) async fn fetch_user(
    &self,
    username: &str,
    token: &str,
  ) -> Result<UserRecord, ApiError> {
    let response = self
      .send::<UserResponse>(
        self
          .client
          .get(self.endpoint(&["users", username]))
          .query(&[("token", token)]),
        "user profile",
      )
      .await?;

    Ok(response.user)
  }

  pub(crate) async fn login(
    &self,
    username: &str,
    password: &str,
  ) -> Result<AuthResponse, ApiError> {
    self
      .send(
        self.client.post(self.endpoint(&["login"])).json(&json!({
          "user": { "username": username, "password": password }
        })),
        "login response",
      )
      .await
  }

  pub(crate) fn new(base_url: Url) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(concat!("hos/", env!("CARGO_PKG_VERSION")))
      .build()
      .context("could not build http client")?;

    Ok(Self { base_url, client })
  }

  async fn send<T: DeserializeOwned>(
    &self,
    request: RequestBuilder,
    what: &'static str,
  ) -> Result<T, ApiError> {
    let body = self.execute(request).await?;

    serde_json::from_str(&body).map_err(|source| ApiError::Decode { source, what })
  }

  pub(crate) async fn signup(
    &self,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<AuthResponse, ApiError> {
    self
      .send(
        self.client.post(self.endpoint(&["signup"])).json(&json!({
          "user": { "username": username, "password": password, "name": name }
        })),
        "signup response",
      )
      .await
  }

  pub(crate) async fn toggle_favorite(
    &self,
    action: FavoriteAction,
    username: &str,
    token: &str,
    story_id: &str,
  ) -> Result<(), ApiError> {
    let url = self.endpoint(&["users", username, "favorites", story_id]);

    self
      .execute(
        self
          .client
          .request(action.method(), url)
          .json(&json!({ "token": token })),
      )
      .await
      .map(drop)
  }
}
