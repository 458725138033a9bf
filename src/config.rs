//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::AgeBands;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (defaults apply).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub roster: RosterConfig,
    pub generator: GeneratorConfig,
    pub converter: ConverterConfig,
    pub analyzer: AnalyzerConfig,
    pub age_bands: AgeBands,
    pub logging: LoggingConfig,
}

/// Location of the shared roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub path: PathBuf,
}

/// Roster generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Requested number of records.
    pub count: usize,
    /// Share of male records, in whole percent.
    pub male_percent: u32,
    pub min_age: u32,
    pub max_age: u32,
    /// Log progress every this many records.
    pub progress_every: usize,
    /// Fixed RNG seed for reproducible rosters.
    pub seed: Option<u64>,
    pub male_patronymics: Vec<String>,
    pub female_patronymics: Vec<String>,
}

/// Workbook conversion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub output: PathBuf,
    /// Upper bound for auto-sized column widths, in characters.
    pub max_column_width: usize,
}

/// Statistics and chart settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub output_dir: PathBuf,
    /// Font family for chart text; must cover Cyrillic.
    pub font_family: String,
    pub gender_chart: ChartFile,
    pub age_chart: ChartFile,
    pub gender_by_age_chart: ChartFile,
}

/// File name and pixel size of one chart image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFile {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for a log file in addition to stderr.
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

/// Upper bound for generated ages.
pub const MAX_AGE: u32 = 150;

const MALE_PATRONYMICS: [&str; 25] = [
    "Олександрович",
    "Іванович",
    "Петрович",
    "Миколайович",
    "Васильович",
    "Андрійович",
    "Сергійович",
    "Володимирович",
    "Дмитрович",
    "Юрійович",
    "Михайлович",
    "Богданович",
    "Ярославович",
    "Віталійович",
    "Анатолійович",
    "Григорович",
    "Романович",
    "Тарасович",
    "Павлович",
    "Степанович",
    "Вікторович",
    "Ігорович",
    "Максимович",
    "Леонідович",
    "Валерійович",
];

const FEMALE_PATRONYMICS: [&str; 25] = [
    "Олександрівна",
    "Іванівна",
    "Петрівна",
    "Миколаївна",
    "Василівна",
    "Андріївна",
    "Сергіївна",
    "Володимирівна",
    "Дмитрівна",
    "Юріївна",
    "Михайлівна",
    "Богданівна",
    "Ярославівна",
    "Віталіївна",
    "Анатоліївна",
    "Григорівна",
    "Романівна",
    "Тарасівна",
    "Павлівна",
    "Степанівна",
    "Вікторівна",
    "Ігорівна",
    "Максимівна",
    "Леонідівна",
    "Валеріївна",
];

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "employee-roster")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("Roster path cannot be empty".to_string()));
        }
        if self.generator.count == 0 {
            return Err(ConfigError::Validation(
                "Record count must be greater than 0".to_string(),
            ));
        }
        if self.generator.male_percent > 100 {
            return Err(ConfigError::Validation("Male share cannot exceed 100%".to_string()));
        }
        if self.generator.max_age > MAX_AGE {
            return Err(ConfigError::Validation(format!(
                "Maximum age cannot exceed {MAX_AGE}"
            )));
        }
        if self.generator.min_age > self.generator.max_age {
            return Err(ConfigError::Validation(
                "Minimum age cannot exceed maximum age".to_string(),
            ));
        }
        if self.generator.progress_every == 0 {
            return Err(ConfigError::Validation(
                "Progress interval must be at least 1".to_string(),
            ));
        }
        if self.generator.male_patronymics.is_empty() || self.generator.female_patronymics.is_empty() {
            return Err(ConfigError::Validation("Patronymic lists cannot be empty".to_string()));
        }
        if self.converter.max_column_width == 0 {
            return Err(ConfigError::Validation(
                "Max column width must be greater than 0".to_string(),
            ));
        }
        for chart in [
            &self.analyzer.gender_chart,
            &self.analyzer.age_chart,
            &self.analyzer.gender_by_age_chart,
        ] {
            if chart.file_name.trim().is_empty() {
                return Err(ConfigError::Validation("Chart file name cannot be empty".to_string()));
            }
            if chart.width == 0 || chart.height == 0 {
                return Err(ConfigError::Validation(format!(
                    "Chart {} must have a non-zero size",
                    chart.file_name
                )));
            }
        }
        if !self.age_bands.is_ordered() {
            return Err(ConfigError::Validation(
                "Age band bounds must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl AnalyzerConfig {
    /// Full path of a chart image.
    pub fn chart_path(&self, chart: &ChartFile) -> PathBuf {
        self.output_dir.join(&chart.file_name)
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("employees.csv"),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 500,
            male_percent: 60,
            min_age: 17,
            max_age: 87,
            progress_every: 100,
            seed: None,
            male_patronymics: MALE_PATRONYMICS.iter().map(|s| s.to_string()).collect(),
            female_patronymics: FEMALE_PATRONYMICS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("employees.xlsx"),
            max_column_width: 50,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            font_family: "sans-serif".to_string(),
            gender_chart: ChartFile {
                file_name: "gender_distribution.png".to_string(),
                width: 1200,
                height: 900,
            },
            age_chart: ChartFile {
                file_name: "age_distribution.png".to_string(),
                width: 1500,
                height: 900,
            },
            gender_by_age_chart: ChartFile {
                file_name: "gender_by_age_distribution.png".to_string(),
                width: 2100,
                height: 1500,
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "employee-roster.log".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_patronymic_lists() {
        let config = GeneratorConfig::default();
        assert_eq!(config.male_patronymics.len(), 25);
        assert_eq!(config.female_patronymics.len(), 25);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [generator]
            count = 120
            seed = 7

            [age_bands]
            minor_max = 17
            adult_max = 40
            middle_max = 65
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.count, 120);
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.male_percent, 60);
        assert_eq!(config.age_bands.adult_max, 40);
        assert_eq!(config.roster.path, PathBuf::from("employees.csv"));
        assert_eq!(config.converter.max_column_width, 50);
    }

    #[test]
    fn test_validation_zero_count() {
        let mut config = AppConfig::default();
        config.generator.count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_age_range() {
        let mut config = AppConfig::default();
        config.generator.min_age = 90;
        assert!(config.validate().is_err());

        config.generator.min_age = 87;
        assert!(config.validate().is_ok());

        config.generator.max_age = MAX_AGE;
        assert!(config.validate().is_ok());
        config.generator.max_age = 400_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_male_percent_bounds() {
        let mut config = AppConfig::default();
        config.generator.male_percent = 101;
        assert!(config.validate().is_err());

        config.generator.male_percent = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_unordered_bands() {
        let mut config = AppConfig::default();
        config.age_bands.adult_max = 80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_chart_size() {
        let mut config = AppConfig::default();
        config.analyzer.age_chart.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.generator.count = 42;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded.generator.count, 42),
            other => panic!("unexpected load result: {other:?}"),
        }
    }

    #[test]
    fn test_try_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::try_load(&dir.path().join("absent.toml")),
            ConfigLoadResult::Missing
        ));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[generator]\ncount = \"many\"\n").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));
    }
}
