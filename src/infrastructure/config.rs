//! Configuration management

use crate::domain::tags::TagFilter;
use crate::error::{Result, SiftError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming a default configuration file
pub const CONFIG_ENV: &str = "MARKDOWNSIFT_CONFIG";

/// Optional settings read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub path: Option<PathBuf>,
    pub tags: Option<Vec<String>>,
    pub output: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SiftError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Load the explicitly given file, else the one named by MARKDOWNSIFT_CONFIG, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(ConfigFile::default()),
        }
    }
}

/// Where rendered sections go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Output kind as given by `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Stdout,
    File,
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(OutputKind::Stdout),
            "file" => Ok(OutputKind::File),
            _ => Err("output must be either 'stdout' or 'file'".to_string()),
        }
    }
}

/// Raw option values before validation, one layer of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSettings {
    pub path: Option<PathBuf>,
    pub tags: Option<Vec<String>>,
    pub output: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl From<ConfigFile> for RawSettings {
    fn from(file: ConfigFile) -> Self {
        RawSettings {
            path: file.path,
            tags: file.tags,
            output: file.output,
            output_dir: file.output_dir,
        }
    }
}

impl RawSettings {
    /// Fill every unset value from `fallback`
    pub fn or(self, fallback: RawSettings) -> RawSettings {
        RawSettings {
            path: self.path.or(fallback.path),
            tags: self.tags.or(fallback.tags),
            output: self.output.or(fallback.output),
            output_dir: self.output_dir.or(fallback.output_dir),
        }
    }
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub tags: TagFilter,
    pub output: OutputTarget,
}

impl Settings {
    /// Validate merged option values
    pub fn resolve(raw: RawSettings) -> Result<Self> {
        let source = match raw.path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err(SiftError::Config("path cannot be empty".to_string())),
        };

        let kind = match raw.output.as_deref() {
            Some(value) => OutputKind::from_str(value).map_err(SiftError::Config)?,
            None => OutputKind::default(),
        };

        let output = match kind {
            OutputKind::Stdout => OutputTarget::Stdout,
            OutputKind::File => match raw.output_dir {
                Some(dir) if !dir.as_os_str().is_empty() => OutputTarget::File(dir),
                _ => {
                    return Err(SiftError::Config(
                        "output-dir is required when output is 'file'".to_string(),
                    ))
                }
            },
        };

        let tags = raw.tags.map(TagFilter::from_tags).unwrap_or_default();

        Ok(Settings {
            source,
            tags,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn raw(path: &str) -> RawSettings {
        RawSettings {
            path: Some(PathBuf::from(path)),
            ..RawSettings::default()
        }
    }

    #[test]
    fn test_defaults_to_stdout_and_all_tags() {
        let settings = Settings::resolve(raw("notes")).unwrap();
        assert_eq!(settings.source, PathBuf::from("notes"));
        assert_eq!(settings.output, OutputTarget::Stdout);
        assert!(settings.tags.is_all());
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = Settings::resolve(RawSettings::default()).unwrap_err();
        assert!(err.to_string().contains("path cannot be empty"));

        let err = Settings::resolve(raw("")).unwrap_err();
        assert!(matches!(err, SiftError::Config(_)));
    }

    #[test]
    fn test_invalid_output_rejected() {
        let mut settings = raw("notes");
        settings.output = Some("printer".to_string());
        let err = Settings::resolve(settings).unwrap_err();
        assert!(err.to_string().contains("output must be either"));
    }

    #[test]
    fn test_file_output_requires_dir() {
        let mut settings = raw("notes");
        settings.output = Some("file".to_string());
        let err = Settings::resolve(settings.clone()).unwrap_err();
        assert!(err.to_string().contains("output-dir is required"));

        settings.output_dir = Some(PathBuf::from("topics"));
        let resolved = Settings::resolve(settings).unwrap();
        assert_eq!(resolved.output, OutputTarget::File(PathBuf::from("topics")));
    }

    #[test]
    fn test_output_dir_ignored_for_stdout() {
        let mut settings = raw("notes");
        settings.output_dir = Some(PathBuf::from("topics"));
        assert_eq!(
            Settings::resolve(settings).unwrap().output,
            OutputTarget::Stdout
        );
    }

    #[test]
    fn test_tags_resolved_to_filter() {
        let mut settings = raw("notes");
        settings.tags = Some(vec!["work".to_string(), "#ai".to_string()]);
        let resolved = Settings::resolve(settings).unwrap();
        assert!(resolved.tags.contains("#work"));
        assert!(resolved.tags.contains("#ai"));
        assert!(!resolved.tags.contains("#home"));
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let cli = RawSettings {
            output: Some("file".to_string()),
            ..RawSettings::default()
        };
        let file = RawSettings {
            path: Some(PathBuf::from("from-file")),
            output: Some("stdout".to_string()),
            output_dir: Some(PathBuf::from("topics")),
            tags: None,
        };

        let merged = cli.or(file);
        assert_eq!(merged.path, Some(PathBuf::from("from-file")));
        assert_eq!(merged.output.as_deref(), Some("file"));
        assert_eq!(merged.output_dir, Some(PathBuf::from("topics")));
    }

    #[test]
    fn test_load_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sift.toml");
        fs::write(
            &path,
            "path = \"/notes\"\ntags = [\"work\", \"ai\"]\noutput = \"file\"\noutput_dir = \"/topics\"\n",
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.path, Some(PathBuf::from("/notes")));
        assert_eq!(
            config.tags,
            Some(vec!["work".to_string(), "ai".to_string()])
        );
        assert_eq!(config.output.as_deref(), Some("file"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/topics")));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sift.toml");
        fs::write(&path, "colour = \"blue\"\n").unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, SiftError::TomlDeserialize(_)));
    }

    #[test]
    fn test_load_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::load(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SiftError::Config(_)));
    }

    #[test]
    fn test_discover_prefers_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sift.toml");
        fs::write(&path, "output = \"stdout\"\n").unwrap();

        let config = ConfigFile::discover(Some(&path)).unwrap();
        assert_eq!(config.output.as_deref(), Some("stdout"));
    }
}
