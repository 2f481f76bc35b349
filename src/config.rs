use super::*;

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) api_url: Url,
  pub(crate) log_file: PathBuf,
  pub(crate) session_file: PathBuf,
}

impl Config {
  const API_URL_VAR: &str = "HOS_API_URL";

  const LOG_FILE_VAR: &str = "HOS_LOG_FILE";

  const SESSION_FILE_VAR: &str = "HOS_SESSION_FILE";

  fn config_dir(var: &impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
    let base_dir = if let Some(dir) = var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Some(home) = var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("hos"))
  }

  pub(crate) fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let api_url = Self::parse_api_url(
      var(Self::API_URL_VAR)
        .as_deref()
        .unwrap_or(Client::DEFAULT_API_URL),
    )?;

    let session_file = match var(Self::SESSION_FILE_VAR) {
      Some(path) => PathBuf::from(path),
      None => Self::config_dir(&var)?.join("session.json"),
    };

    let log_file = match var(Self::LOG_FILE_VAR) {
      Some(path) => PathBuf::from(path),
      None => session_file
        .parent()
        .map_or_else(|| PathBuf::from("hos.log"), |dir| dir.join("hos.log")),
    };

    Ok(Self {
      api_url,
      log_file,
      session_file,
    })
  }

  fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
      .with_context(|| format!("{} is not a valid url: {raw}", Self::API_URL_VAR))?;

    match url.scheme() {
      "http" | "https" => Ok(url),
      scheme => bail!(
        "{} must be an http or https url, got scheme `{scheme}`",
        Self::API_URL_VAR
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::collections::HashMap};

  fn config(vars: &[(&str, &str)]) -> Result<Config> {
    let vars = vars
      .iter()
      .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
      .collect::<HashMap<_, _>>();

    Config::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_live_under_home_config() {
    let config = config(&[("HOME", "/home/alice")]).unwrap();

    assert_eq!(config.api_url.as_str(), "https://hack-or-snooze-v3.herokuapp.com/");
    assert_eq!(
      config.session_file,
      PathBuf::from("/home/alice/.config/hos/session.json")
    );
    assert_eq!(config.log_file, PathBuf::from("/home/alice/.config/hos/hos.log"));
  }

  #[test]
  fn xdg_config_home_wins_over_home() {
    let config =
      config(&[("HOME", "/home/alice"), ("XDG_CONFIG_HOME", "/xdg")]).unwrap();

    assert_eq!(config.session_file, PathBuf::from("/xdg/hos/session.json"));
  }

  #[test]
  fn explicit_variables_override_defaults() {
    let config = config(&[
      ("HOME", "/home/alice"),
      ("HOS_API_URL", "http://localhost:5000"),
      ("HOS_SESSION_FILE", "/tmp/session.json"),
      ("HOS_LOG_FILE", "/var/log/hos.log"),
    ])
    .unwrap();

    assert_eq!(config.api_url.as_str(), "http://localhost:5000/");
    assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
    assert_eq!(config.log_file, PathBuf::from("/var/log/hos.log"));
  }

  #[test]
  fn log_file_follows_session_file_directory() {
    let config = config(&[("HOS_SESSION_FILE", "/srv/hos/state.json")]).unwrap();

    assert_eq!(config.log_file, PathBuf::from("/srv/hos/hos.log"));
  }

  #[test]
  fn blank_variables_are_ignored() {
    let config = config(&[("HOME", "/home/alice"), ("HOS_API_URL", "  ")]).unwrap();

    assert_eq!(config.api_url.as_str(), "https://hack-or-snooze-v3.herokuapp.com/");
  }

  #[test]
  fn non_http_api_url_is_rejected() {
    let error = config(&[("HOME", "/home/alice"), ("HOS_API_URL", "ftp://example.com")])
      .unwrap_err();

    assert!(error.to_string().contains("ftp"), "{error}");

    assert!(config(&[("HOME", "/h"), ("HOS_API_URL", "not a url")]).is_err());
  }
}
