use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

const SECONDS_PER_DAY: u64 = 86_400;
const MAX_DAYS: u64 = 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0} must be at least one day")]
    TooShort(&'static str),
    #[error("{0} must not exceed 365 days, got {1}")]
    TooLong(&'static str, u64),
    #[error("query.page_size must be between 1 and 100, got {0}")]
    PageSize(i32),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub aws: AwsConfig,
    pub scheduling: SchedulingConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// How far ahead contacts can be booked, counted from today.
    #[serde(deserialize_with = "deserialize_duration")]
    pub horizon: Duration,
    /// Default look-back when listing contacts.
    #[serde(deserialize_with = "deserialize_duration")]
    pub history: Duration,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            horizon: Duration::from_secs(6 * SECONDS_PER_DAY),
            history: Duration::from_secs(6 * SECONDS_PER_DAY),
        }
    }
}

impl SchedulingConfig {
    pub fn horizon_days(&self) -> u64 {
        self.horizon.as_secs() / SECONDS_PER_DAY
    }

    pub fn history_days(&self) -> u64 {
        self.history.as_secs() / SECONDS_PER_DAY
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub page_size: i32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { page_size: 100 }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduling.horizon_days() < 1 {
            return Err(ConfigError::TooShort("scheduling.horizon"));
        }
        if self.scheduling.horizon_days() > MAX_DAYS {
            return Err(ConfigError::TooLong(
                "scheduling.horizon",
                self.scheduling.horizon_days(),
            ));
        }
        if self.scheduling.history_days() > MAX_DAYS {
            return Err(ConfigError::TooLong(
                "scheduling.history",
                self.scheduling.history_days(),
            ));
        }
        if !(1..=100).contains(&self.query.page_size) {
            return Err(ConfigError::PageSize(self.query.page_size));
        }
        Ok(())
    }

    /// Command line values win over the file.
    pub fn override_aws(&mut self, region: Option<String>, profile: Option<String>) {
        if region.is_some() {
            self.aws.region = region;
        }
        if profile.is_some() {
            self.aws.profile = profile;
        }
    }
}
