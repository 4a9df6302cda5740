use crate::Result;
use crate::traffic::AnchorMode;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use directories::BaseDirs;
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the current directory and the user configuration directory
pub const CONFIG_FILE_NAME: &str = "traffic.toml";

const LOG_TARGET: &str = "    config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root URL of the stats API
    pub base_url: Url,

    /// Time allowed for a single API request
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// How series are anchored and default export bounds chosen
    pub anchor: AnchorMode,
}

impl Config {
    /// Load configuration from an explicit file, or search the usual places, or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, parsed, or fails validation
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        Self::resolve(config_path, search_dirs)
    }

    fn resolve<D>(config_path: Option<&Utf8Path>, dirs: impl FnOnce() -> D) -> Result<Self>
    where
        D: IntoIterator<Item = Utf8PathBuf>,
    {
        match config_path {
            Some(path) => Self::load_file(path),
            None => Self::search(dirs()),
        }
    }

    /// Use the first `traffic.toml` found in `dirs`, or the defaults if there is none
    fn search(dirs: impl IntoIterator<Item = Utf8PathBuf>) -> Result<Self> {
        for dir in dirs {
            let path = dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => return Self::parse(&path, &text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        }

        log::debug!(target: LOG_TARGET, "No {CONFIG_FILE_NAME} found, using the default configuration");
        Ok(Self::default())
    }

    fn load_file(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
        Self::parse(path, &text)
    }

    fn parse(path: &Utf8Path, text: &str) -> Result<Self> {
        log::info!(target: LOG_TARGET, "Loading configuration from '{path}'");

        let config: Self = toml::from_str(text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an http(s) URL or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            bail!("base_url must be an http or https URL, got '{}'", self.base_url);
        }

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        #[derive(Deserialize)]
        struct Embedded {
            base_url: Url,
            #[serde(with = "humantime_serde")]
            request_timeout: Duration,
            anchor: AnchorMode,
        }

        let embedded: Embedded =
            toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config");

        Self {
            base_url: embedded.base_url,
            request_timeout: embedded.request_timeout,
            anchor: embedded.anchor,
        }
    }
}

/// Directories searched for `traffic.toml`, in priority order
fn search_dirs() -> Vec<Utf8PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir()
        && let Ok(cwd) = Utf8PathBuf::try_from(cwd)
    {
        dirs.push(cwd);
    }

    if let Some(base) = BaseDirs::new()
        && let Ok(config_dir) = Utf8PathBuf::try_from(base.config_dir().join("repo-traffic"))
    {
        dirs.push(config_dir);
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.anchor, AnchorMode::FirstRecord);
        assert_eq!(config.base_url.scheme(), "https");
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = Config {
            base_url: Url::parse("ftp://stats.example.com/api").unwrap(),
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("http or https"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            request_timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("request_timeout"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str(r#"anchor = "earliest-record""#).unwrap();
        assert_eq!(config.anchor, AnchorMode::EarliestRecord);
        assert_eq!(config.base_url, Config::default().base_url);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("cache_ttl = \"1d\"").is_err());
    }

    #[test]
    fn test_humantime_timeout() {
        let config: Config = toml::from_str(r#"request_timeout = "1m 30s""#).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(90));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_explicit_file() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join("custom.toml");
        fs::write(&path, "base_url = \"http://localhost:3000/api\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/api");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetFullPathNameW")]
    fn test_load_missing_explicit_file() {
        let result = Config::load(Some(Utf8Path::new("/nonexistent/traffic.toml")));
        assert!(result.unwrap_err().to_string().contains("reading configuration file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_invalid_file_is_rejected() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "request_timeout = \"0s\"\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_search_takes_first_match() {
        let (_first_tmp, first) = temp_dir();
        let (_second_tmp, second) = temp_dir();
        fs::write(second.join(CONFIG_FILE_NAME), "anchor = \"earliest-record\"\n").unwrap();

        let config = Config::search([first, second]).unwrap();
        assert_eq!(config.anchor, AnchorMode::EarliestRecord);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_explicit_file_ignores_search_dirs() {
        let (_tmp, dir) = temp_dir();
        let (_user_tmp, user_dir) = temp_dir();
        fs::write(user_dir.join(CONFIG_FILE_NAME), "base_url = \"ftp://x/api\"\n").unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        Config::save_default(&path).unwrap();

        assert!(Config::resolve(None, || [user_dir.clone()]).is_err());
        assert_eq!(Config::resolve(Some(&path), || [user_dir.clone()]).unwrap(), Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_search_falls_back_to_defaults() {
        let (_tmp, dir) = temp_dir();
        assert_eq!(Config::search([dir]).unwrap(), Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_save_default_round_trips() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join(CONFIG_FILE_NAME);
        Config::save_default(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }
}
