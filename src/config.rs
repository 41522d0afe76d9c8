use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snacker").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the best score should be stored: the
    /// file given in the configuration or, if that is not set, the default
    /// location under the local data directory.  Returns `None` when score
    /// saving is disabled or no path can be computed.
    pub(crate) fn scores_file(&self) -> Option<Cow<'_, Path>> {
        if !self.files.save_scores {
            return None;
        }
        self.files
            .scores_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| {
                dirs::data_local_dir()
                    .map(|p| Cow::from(p.join("snacker").join("best-score.txt")))
            })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the best score should be stored
    pub(crate) scores_file: Option<PathBuf>,

    /// Whether to load & save the best score at all
    pub(crate) save_scores: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            scores_file: None,
            save_scores: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let config = Config::load(&dir.path().join("config.toml"), true)
            .expect("missing file should be tolerated");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_can_be_an_error() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let r = Config::load(&dir.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn parse_full_config() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "[files]\n",
                "scores-file = \"/tmp/elsewhere.txt\"\n",
                "save-scores = true\n",
            ),
        )
        .expect("write should succeed");
        let config = Config::load(&path, false).expect("config should parse");
        assert_eq!(
            config.files.scores_file,
            Some(PathBuf::from("/tmp/elsewhere.txt"))
        );
        assert_eq!(
            config.scores_file().as_deref(),
            Some(Path::new("/tmp/elsewhere.txt"))
        );
    }

    #[test]
    fn saving_can_be_disabled() {
        let config: Config =
            toml::from_str("[files]\nsave-scores = false\n").expect("config should parse");
        assert_eq!(config.scores_file(), None);
    }

    #[test]
    fn garbage_fails_to_parse() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "files = 42\n").expect("write should succeed");
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }
}
