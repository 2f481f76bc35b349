#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use {
  super::*,
  std::{fs::OpenOptions, io::Write},
};

#[derive(Clone, Debug)]
pub(crate) struct CredentialStore {
  path: PathBuf,
}

impl CredentialStore {
  pub(crate) fn clear(&self) -> Result {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(error) => Err(error).with_context(|| {
        format!("could not remove {}", self.path.display())
      }),
    }
  }

  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn load(&self) -> Result<StoredCredentials> {
    if !self.path.exists() {
      return Ok(StoredCredentials::default());
    }

    let data = fs::read(&self.path)
      .with_context(|| format!("could not read {}", self.path.display()))?;

    if data.is_empty() {
      return Ok(StoredCredentials::default());
    }

    serde_json::from_slice(&data)
      .with_context(|| format!("could not parse {}", self.path.display()))
  }

  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub(crate) fn save(&self, token: &str, username: &str) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(&StoredCredentials {
      token: Some(token.to_string()),
      username: Some(username.to_string()),
    })?;

    let mut options = OpenOptions::new();

    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
      .open(&self.path)
      .with_context(|| format!("could not open {}", self.path.display()))?;

    // `mode` only applies to new files; tighten an older one before writing.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))?;

    file
      .write_all(&serialized)
      .with_context(|| format!("could not write {}", self.path.display()))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::fixtures::temp_store};

  #[test]
  fn load_without_file_is_empty() {
    let store = temp_store();

    assert_eq!(store.load().unwrap(), StoredCredentials::default());
  }

  #[test]
  fn save_then_load_round_trips_both_keys() {
    let store = temp_store();

    store.save("tok-bob", "bob").unwrap();

    assert_eq!(
      store.load().unwrap(),
      StoredCredentials {
        token: Some("tok-bob".to_string()),
        username: Some("bob".to_string()),
      }
    );

    store.clear().unwrap();
  }

  #[cfg(unix)]
  #[test]
  fn saved_file_is_private_to_the_owner() {
    let store = temp_store();

    fs::write(&store.path, "{}").unwrap();
    fs::set_permissions(&store.path, fs::Permissions::from_mode(0o644))
      .unwrap();

    store.save("tok", "alice").unwrap();

    let mode = fs::metadata(&store.path).unwrap().permissions().mode();

    assert_eq!(mode & 0o777, 0o600);

    store.clear().unwrap();

    store.save("tok", "alice").unwrap();

    let mode = fs::metadata(&store.path).unwrap().permissions().mode();

    assert_eq!(mode & 0o777, 0o600);

    store.clear().unwrap();
  }

  #[test]
  fn clear_removes_everything_and_tolerates_missing_file() {
    let store = temp_store();

    store.save("tok", "alice").unwrap();
    store.clear().unwrap();

    assert_eq!(store.load().unwrap(), StoredCredentials::default());

    store.clear().unwrap();
  }

  #[test]
  fn load_accepts_a_single_key() {
    let store = temp_store();

    fs::write(&store.path, r#"{"username":"alice"}"#).unwrap();

    let stored = store.load().unwrap();

    assert_eq!(stored.token, None);
    assert_eq!(stored.username.as_deref(), Some("alice"));

    store.clear().unwrap();
  }

  #[test]
  fn load_reports_corrupt_file() {
    let store = temp_store();

    fs::write(&store.path, "not json").unwrap();

    assert!(store.load().is_err());

    store.clear().unwrap();
  }
}
