use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
  Favorites,
  MyStories,
  Stories,
}

impl Section {
  pub(crate) const ALL: [Section; 3] =
    [Section::Stories, Section::Favorites, Section::MyStories];

  pub(crate) fn empty_message(self, signed_in: bool) -> &'static str {
    match (self, signed_in) {
      (Self::Stories, _) => "No stories yet. Press s to submit one.",
      (Self::Favorites, true) => "No favorites added!",
      (Self::MyStories, true) => "No stories added by user yet!",
      (Self::Favorites | Self::MyStories, false) => {
        "Log in (L) or sign up (S) to see this list."
      }
    }
  }

  pub(crate) fn entries(self, session: &Session) -> Vec<StoryEntry> {
    let user = session.user();

    let stories: &[Story] = match (self, user) {
      (Self::Stories, _) => session.story_list().stories(),
      (Self::Favorites, Some(user)) => &user.favorites,
      (Self::MyStories, Some(user)) => &user.own_stories,
      (Self::Favorites | Self::MyStories, None) => &[],
    };

    stories
      .iter()
      .map(|story| StoryEntry::new(story, user))
      .collect()
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Favorites => "favorites",
      Self::MyStories => "my stories",
      Self::Stories => "stories",
    }
  }
}
