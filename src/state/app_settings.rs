use log::LevelFilter;
use stadium_api::client::DEFAULT_BASE_URL;
use std::path::PathBuf;

pub const BASE_URL_ENV: &str = "STADIUM_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub base_url: String,
    pub output: Option<PathBuf>,
    pub summary: bool,
    pub log_level: LevelFilter,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: None,
            summary: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl AppSettings {
    /// Defaults, overridden by `STADIUM_API_URL` when it is set and non-blank.
    pub fn load() -> Self {
        Self::from_env_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(base_url: Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(url) = base_url
            && !url.trim().is_empty()
        {
            settings.base_url = url.trim().to_string();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_endpoint() {
        let settings = AppSettings::from_env_value(None);
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert!(!settings.summary);
        assert_eq!(settings.output, None);
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let settings = AppSettings::from_env_value(Some("   ".into()));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn env_value_overrides_base_url() {
        let settings = AppSettings::from_env_value(Some(" http://10.0.0.5:9000 ".into()));
        assert_eq!(settings.base_url, "http://10.0.0.5:9000");
    }
}
