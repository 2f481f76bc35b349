use super::*;

/// The public story feed, most recently added first.
///
/// `add_story` and `remove_story` are the only ways to change the list, and
/// each of them updates the acting user's `own_stories` in the same step:
/// the request goes out first and both collections change only after it
/// succeeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StoryList {
  stories: Vec<Story>,
}

impl StoryList {
  pub(crate) async fn add_story(
    &mut self,
    client: &Client,
    user: &mut User,
    new_story: &NewStory,
  ) -> Result<Story, ApiError> {
    let story = client
      .create_story(&user.login_token, &user.username, new_story)
      .await?;

    self.stories.insert(0, story.clone());
    user.own_stories.insert(0, story.clone());

    Ok(story)
  }

  pub(crate) async fn fetch(client: &Client) -> Result<Self, ApiError> {
    Ok(Self::new(client.fetch_stories().await?))
  }

  pub(crate) fn len(&self) -> usize {
    self.stories.len()
  }

  pub(crate) fn new(stories: Vec<Story>) -> Self {
    Self { stories }
  }

  pub(crate) async fn remove_story(
    &mut self,
    client: &Client,
    user: &mut User,
    story_id: &str,
  ) -> Result<(), ApiError> {
    client.delete_story(&user.login_token, story_id).await?;

    self.stories.retain(|story| story.story_id != story_id);
    user.own_stories.retain(|story| story.story_id != story_id);

    Ok(())
  }

  pub(crate) fn stories(&self) -> &[Story] {
    &self.stories
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::fixtures::{self, story, story_json},
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{body_json, method, path},
    },
  };

  fn ids(stories: &[Story]) -> Vec<&str> {
    stories
      .iter()
      .map(|story| story.story_id.as_str())
      .collect()
  }

  fn new_story() -> NewStory {
    NewStory {
      author: "A".to_string(),
      title: "T".to_string(),
      url: "http://x.com".to_string(),
    }
  }

  #[tokio::test]
  async fn fetch_builds_a_list_in_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/stories"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "stories": [story_json("3", "c"), story_json("2", "b"), story_json("1", "a")]
      })))
      .mount(&server)
      .await;

    let list = StoryList::fetch(&fixtures::client(&server)).await.unwrap();

    assert_eq!(ids(list.stories()), ["3", "2", "1"]);
    assert_eq!(list.len(), 3);
  }

  #[tokio::test]
  async fn add_story_prepends_to_both_collections() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/stories"))
      .and(body_json(json!({
        "token": "tok",
        "story": {
          "author": "A",
          "title": "T",
          "url": "http://x.com",
          "username": "alice"
        }
      })))
      .respond_with(
        ResponseTemplate::new(201)
          .set_body_json(json!({ "story": story_json("server-id", "T") })),
      )
      .expect(1)
      .mount(&server)
      .await;

    let mut list = StoryList::new(vec![story("old", "Old")]);
    let mut user = fixtures::user("alice", "tok");

    user.own_stories = vec![story("mine", "Mine")];

    let added = list
      .add_story(&fixtures::client(&server), &mut user, &new_story())
      .await
      .unwrap();

    assert_eq!(added.story_id, "server-id");
    assert_eq!(list.stories()[0], added);
    assert_eq!(user.own_stories[0], added);
    assert_eq!(ids(list.stories()), ["server-id", "old"]);
    assert_eq!(ids(&user.own_stories), ["server-id", "mine"]);
  }

  #[tokio::test]
  async fn add_story_posts_as_the_acting_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/stories"))
      .respond_with(
        ResponseTemplate::new(201)
          .set_body_json(json!({ "story": story_json("server-id", "T") })),
      )
      .mount(&server)
      .await;

    let mut list = StoryList::default();
    let mut user = fixtures::user("alice", "tok");

    list
      .add_story(&fixtures::client(&server), &mut user, &new_story())
      .await
      .unwrap();

    let requests = server.received_requests().await.unwrap_or_default();

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["token"], "tok");
    assert_eq!(body["story"]["username"], "alice");
    assert_eq!(body["story"]["author"], "A");
  }

  #[tokio::test]
  async fn rejected_add_changes_neither_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/stories"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
        "error": { "status": 400, "title": "Bad Request", "message": "url is invalid" }
      })))
      .mount(&server)
      .await;

    let mut list = StoryList::new(vec![story("old", "Old")]);
    let mut user = fixtures::user("alice", "tok");

    let (list_before, user_before) = (list.clone(), user.clone());

    let error = list
      .add_story(&fixtures::client(&server), &mut user, &new_story())
      .await
      .unwrap_err();

    assert!(error.to_string().contains("url is invalid"), "{error}");
    assert_eq!(list, list_before);
    assert_eq!(user, user_before);
  }

  #[tokio::test]
  async fn remove_story_filters_every_match_from_both_collections() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/stories/dup"))
      .and(body_json(json!({ "token": "tok" })))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(json!({ "story": story_json("dup", "Dup") })),
      )
      .expect(1)
      .mount(&server)
      .await;

    let mut list = StoryList::new(vec![
      story("dup", "Dup"),
      story("keep", "Keep"),
      story("dup", "Dup again"),
    ]);

    let mut user = fixtures::user("alice", "tok");

    user.own_stories = vec![story("dup", "Dup"), story("dup", "Dup")];

    list
      .remove_story(&fixtures::client(&server), &mut user, "dup")
      .await
      .unwrap();

    assert_eq!(ids(list.stories()), ["keep"]);
    assert!(user.own_stories.is_empty());
  }

  #[tokio::test]
  async fn remove_story_absent_from_one_collection_is_fine() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/stories/s1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
      .mount(&server)
      .await;

    let mut list = StoryList::new(vec![story("other", "Other")]);
    let mut user = fixtures::user("alice", "tok");

    user.own_stories = vec![story("s1", "Mine")];

    list
      .remove_story(&fixtures::client(&server), &mut user, "s1")
      .await
      .unwrap();

    assert_eq!(ids(list.stories()), ["other"]);
    assert!(user.own_stories.is_empty());
  }

  #[tokio::test]
  async fn rejected_remove_keeps_both_collections() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/stories/s1"))
      .respond_with(ResponseTemplate::new(403).set_body_json(json!({
        "error": { "status": 403, "title": "Forbidden", "message": "not yours" }
      })))
      .mount(&server)
      .await;

    let mut list = StoryList::new(vec![story("s1", "Theirs")]);
    let mut user = fixtures::user("alice", "tok");

    assert!(
      list
        .remove_story(&fixtures::client(&server), &mut user, "s1")
        .await
        .is_err()
    );

    assert_eq!(ids(list.stories()), ["s1"]);
  }
}
