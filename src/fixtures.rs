use {
  super::*,
  std::sync::atomic::{AtomicUsize, Ordering},
  wiremock::MockServer,
};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(crate) const TIMESTAMP: &str = "2024-02-01T10:00:00.000Z";

pub(crate) fn client(server: &MockServer) -> Client {
  Client::new(Url::parse(&server.uri()).expect("mock server uri"))
    .expect("build client")
}

pub(crate) fn story(id: &str, title: &str) -> Story {
  Story::from_record(&story_json(id, title)).expect("fixture story")
}

pub(crate) fn story_json(id: &str, title: &str) -> Value {
  json!({
    "author": "Ferris",
    "createdAt": TIMESTAMP,
    "storyId": id,
    "title": title,
    "updatedAt": TIMESTAMP,
    "url": format!("https://www.rust-lang.org/{id}"),
    "username": "ferris",
  })
}

pub(crate) fn temp_store() -> CredentialStore {
  let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

  let path = std::env::temp_dir().join(format!(
    "hos_session_test_{}_{unique}.json",
    process::id()
  ));

  let _ = fs::remove_file(&path);

  CredentialStore::new(path)
}

pub(crate) fn user(username: &str, token: &str) -> User {
  User {
    created_at: TIMESTAMP.to_string(),
    favorites: Vec::new(),
    login_token: token.to_string(),
    name: format!("{username} (display)"),
    own_stories: Vec::new(),
    updated_at: TIMESTAMP.to_string(),
    username: username.to_string(),
  }
}

pub(crate) fn user_json(
  username: &str,
  favorites: &[Value],
  stories: &[Value],
) -> Value {
  json!({
    "createdAt": TIMESTAMP,
    "favorites": favorites,
    "name": format!("{username} (display)"),
    "stories": stories,
    "updatedAt": TIMESTAMP,
    "username": username,
  })
}
