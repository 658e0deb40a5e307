use crate::checker::suggestions::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SUGGESTIONS};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".autospell.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary: Option<PathBuf>,
    pub max_distance: usize,
    pub max_suggestions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// One source of settings: a config file or the command line.
///
/// Fields left unset keep whatever an earlier layer chose. An empty
/// `dictionary` clears a dictionary set by an earlier layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub dictionary: Option<PathBuf>,
    pub max_distance: Option<usize>,
    pub max_suggestions: Option<usize>,
}

impl ConfigLayer {
    /// Read a TOML layer. A relative `dictionary` is taken relative to the
    /// directory holding the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut layer: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(dir) = path.parent() {
            layer.dictionary = layer.dictionary.map(|dictionary| {
                if dictionary.is_relative() && !dictionary.as_os_str().is_empty() {
                    dir.join(dictionary)
                } else {
                    dictionary
                }
            });
        }

        Ok(layer)
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli: ConfigLayer) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("config: loading {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("config: loading {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(config.merge(cli))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(dictionary) = layer.dictionary {
            self.dictionary = (!dictionary.as_os_str().is_empty()).then_some(dictionary);
        }
        if let Some(max_distance) = layer.max_distance {
            self.max_distance = max_distance;
        }
        if let Some(max_suggestions) = layer.max_suggestions {
            self.max_suggestions = max_suggestions;
        }
        self
    }

    /// The configured dictionary, or the default word list if one is installed.
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        self.dictionary
            .clone()
            .or_else(|| Self::default_dictionary_path().filter(|p| p.exists()))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "autospell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_dictionary_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "autospell").map(|dirs| dirs.data_dir().join("words.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn layer_from(dir: &Path, name: &str, toml: &str) -> ConfigLayer {
        let path = dir.join(name);
        fs::write(&path, toml).unwrap();
        ConfigLayer::from_file(&path).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dictionary, None);
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_local_default_values_override_global() {
        let dir = tempdir().unwrap();
        let global = layer_from(
            dir.path(),
            "global.toml",
            "max_distance = 3\nmax_suggestions = 8\n",
        );
        let local = layer_from(
            dir.path(),
            "local.toml",
            "max_distance = 2\nmax_suggestions = 5\n",
        );

        let config = Config::default().merge(global).merge(local);
        assert_eq!((config.max_distance, config.max_suggestions), (2, 5));
    }

    #[test]
    fn test_unset_fields_keep_earlier_layers() {
        let dir = tempdir().unwrap();
        let global = layer_from(dir.path(), "global.toml", "max_distance = 3\n");
        let local = layer_from(dir.path(), "local.toml", "max_suggestions = 8\n");

        let config = Config::default().merge(global).merge(local);
        assert_eq!(config.max_distance, 3);
        assert_eq!(config.max_suggestions, 8);
    }

    #[test]
    fn test_empty_dictionary_clears_earlier_layer() {
        let dir = tempdir().unwrap();
        let global = layer_from(
            dir.path(),
            "global.toml",
            "dictionary = \"/usr/share/words\"\n",
        );
        let local = layer_from(dir.path(), "local.toml", "dictionary = \"\"\n");

        let config = Config::default().merge(global);
        assert_eq!(config.dictionary, Some(PathBuf::from("/usr/share/words")));
        assert_eq!(config.merge(local).dictionary, None);
    }

    #[test]
    fn test_relative_dictionary_follows_config_file() {
        let dir = tempdir().unwrap();
        let layer = layer_from(dir.path(), "config.toml", "dictionary = \"words.json\"\n");
        assert_eq!(layer.dictionary, Some(dir.path().join("words.json")));

        let absolute = dir.path().join("elsewhere").join("words.txt");
        let toml = format!("dictionary = {:?}\n", absolute.display().to_string());
        let layer = layer_from(dir.path(), "abs.toml", &toml);
        assert_eq!(layer.dictionary, Some(absolute));
    }

    #[test]
    fn test_command_line_layer_wins() {
        let dir = tempdir().unwrap();
        let file = layer_from(
            dir.path(),
            "config.toml",
            "dictionary = \"file.txt\"\nmax_distance = 3\nmax_suggestions = 8\n",
        );
        let cli = ConfigLayer {
            dictionary: Some(PathBuf::from("cli.json")),
            max_distance: Some(1),
            max_suggestions: None,
        };

        let config = Config::default().merge(file).merge(cli);
        assert_eq!(config.dictionary, Some(PathBuf::from("cli.json")));
        assert_eq!(config.max_distance, 1);
        assert_eq!(config.max_suggestions, 8);
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_distance = \"two\"").unwrap();

        let err = ConfigLayer::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
