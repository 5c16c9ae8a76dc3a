//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub source: SourceSettings,
    pub report: ReportSettings,
    pub pool: PoolSettings,
    pub log: LogSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct SourceSettings {
    pub url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_seconds: u64,
}

#[derive(serde::Deserialize, Clone)]
pub struct ReportSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub top_words: usize,
}

#[derive(serde::Deserialize, Clone)]
pub struct PoolSettings {
    /// Zero sizes the pool to the available parallelism.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: usize,
}

#[derive(serde::Deserialize, Clone)]
pub struct LogSettings {
    pub directory: String,
    pub file_name_prefix: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("app.yaml")))
        .add_source(
            config::Environment::with_prefix("WORDSTAT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
