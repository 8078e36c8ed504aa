use quizmark_engine::MediaProcessingOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory searched for media files mentioned in question banks.
    pub media_dir: Option<PathBuf>,
    pub media: MediaProcessingOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the media directory
        config.media_dir = config
            .media_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/quizmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS`; `None` when a variable is unset.
    fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/quizmark/config.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert!(!config.media.upload_to_storage);
        assert_eq!(config.media.audio_formats.len(), 4);
    }

    #[test]
    fn test_partial_media_table() {
        let config_content = r#"
[media]
upload_to_storage = true
max_image_width = 800
image_formats = [".png"]
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert!(config.media.upload_to_storage);
        assert_eq!(config.media.max_image_width, Some(800));
        assert_eq!(config.media.max_image_height, None);
        assert_eq!(config.media.image_formats, vec![".png".to_string()]);
        assert_eq!(
            config.media.audio_formats,
            MediaProcessingOptions::default().audio_formats
        );
        assert!(config.media_dir.is_none());
    }

    #[test]
    fn test_media_dir_tilde_expands_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "media_dir = \"~/question-media\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let media_dir = config.media_dir.unwrap();

        assert!(!media_dir.to_string_lossy().starts_with('~'));
        assert!(media_dir.ends_with("question-media"));
    }

    #[test]
    fn test_relative_media_dir_is_kept_as_written() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "media_dir = \"banks/media\"\n\n[media]\nmax_image_width = 720\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.media_dir, Some(PathBuf::from("banks/media")));
        assert_eq!(config.media.max_image_width, Some(720));
    }

    #[test]
    fn test_absent_config_is_none_not_default() {
        let temp_dir = TempDir::new().unwrap();

        let loaded = Config::load_from_path(temp_dir.path().join("quizmark.toml")).unwrap();

        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_invalid_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[media]\nupload_to_storage = \"yes\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            media_dir: Some(PathBuf::from("/tmp/question-media")),
            media: MediaProcessingOptions {
                max_image_height: Some(300),
                ..MediaProcessingOptions::pre_upload()
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_media_dir_with_env_var_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "media_dir = \"$QUIZMARK_TEST_MEDIA/banks\"\n").unwrap();

        unsafe {
            env::set_var("QUIZMARK_TEST_MEDIA", "/custom/media");
        }
        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        unsafe {
            env::remove_var("QUIZMARK_TEST_MEDIA");
        }

        assert_eq!(config.media_dir, Some(PathBuf::from("/custom/media/banks")));
    }
}
