use super::*;

/// A story as one row of a list: display text plus the per-user flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StoryEntry {
  pub(crate) detail: String,
  pub(crate) favorite: bool,
  pub(crate) own: bool,
  pub(crate) story_id: String,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl StoryEntry {
  pub(crate) fn new(story: &Story, user: Option<&User>) -> Self {
    let title = plain_text(&story.title);

    let detail = format!(
      "by {} ({}) posted by {}",
      plain_text(&story.author),
      story.host_name(),
      story.username
    );

    Self {
      detail,
      favorite: user.is_some_and(|user| user.is_favorite(&story.story_id)),
      own: user.is_some_and(|user| user.owns(&story.story_id)),
      story_id: story.story_id.clone(),
      title: if title.is_empty() {
        "(untitled)".to_string()
      } else {
        title
      },
      url: story.url.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::fixtures::{self, story}};

  #[test]
  fn detail_mentions_author_host_and_poster() {
    let entry = StoryEntry::new(&story("s1", "Title"), None);

    assert_eq!(entry.detail, "by Ferris (rust-lang.org) posted by ferris");
    assert!(!entry.favorite);
    assert!(!entry.own);
  }

  #[test]
  fn title_is_rendered_as_plain_text() {
    let entry = StoryEntry::new(&story("s1", "<b>Tom</b> &amp; Jerry"), None);

    assert_eq!(entry.title, "Tom & Jerry");

    let entry = StoryEntry::new(&story("s1", "<br>"), None);

    assert_eq!(entry.title, "(untitled)");
  }

  #[test]
  fn flags_come_from_the_user() {
    let mut user = fixtures::user("alice", "tok");

    user.favorites = vec![story("s1", "Title")];
    user.own_stories = vec![story("s1", "Title")];

    let entry = StoryEntry::new(&story("s1", "Title"), Some(&user));

    assert!(entry.favorite);
    assert!(entry.own);
  }
}
