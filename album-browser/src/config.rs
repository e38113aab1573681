use figment::providers::{Format, Yaml};
use figment::Figment;
use getset::Getters;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;

/// Application configuration, read from `config.yaml` when present.
#[serde_inline_default]
#[derive(Debug, Deserialize, Getters)]
#[get = "pub"]
pub struct Config {
    /// Base URL of the remote album service.
    #[serde_inline_default("https://jsonplaceholder.typicode.com".to_string())]
    api_url: String,
    /// Log level filter for the terminal logger.
    #[serde_inline_default("info".to_string())]
    log_level: String,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Yaml::file("config.yaml")).extract()
    }
}
