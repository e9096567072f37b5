// region:    --- Imports
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Config
/// 실행할 웹 앱 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Wiki,
    Auctions,
    Network,
}

impl AppKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppKind::Wiki => "wiki",
            AppKind::Auctions => "auctions",
            AppKind::Network => "network",
        }
    }
}

impl Display for AppKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wiki" => Ok(AppKind::Wiki),
            "auctions" | "commerce" => Ok(AppKind::Auctions),
            "network" => Ok(AppKind::Network),
            other => Err(format!("unknown app '{other}'")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppKind,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub entries_dir: PathBuf,
}

impl Config {
    /// 환경 변수에서 설정 로드
    pub fn load() -> Result<Self, ConfigError> {
        let app: AppKind = try_load("WEBAPP", "wiki")?;
        let default_url = format!("sqlite://{}.db?mode=rwc", app);

        Ok(Self {
            app,
            port: try_load("PORT", "8000")?,
            database_url: try_load("DATABASE_URL", &default_url)?,
            max_connections: try_load("DATABASE_MAX_CONNECTIONS", "5")?,
            entries_dir: try_load("WIKI_ENTRIES_DIR", "entries")?,
        })
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{:<12} --> {key} not set, using default: {default}", "Config");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("{:<12} --> Invalid {key} value: {e}", "Config");
            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}
// endregion: --- Config

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_kind_parses_case_insensitively() {
        assert_eq!("Wiki".parse::<AppKind>().unwrap(), AppKind::Wiki);
        assert_eq!("AUCTIONS".parse::<AppKind>().unwrap(), AppKind::Auctions);
        assert_eq!("commerce".parse::<AppKind>().unwrap(), AppKind::Auctions);
        assert_eq!(" network ".parse::<AppKind>().unwrap(), AppKind::Network);
        assert!("mail".parse::<AppKind>().is_err());
    }

    #[test]
    fn invalid_value_reports_key() {
        std::env::set_var("WEBAPPS_TEST_BAD_PORT", "abc");
        let err = try_load::<u16>("WEBAPPS_TEST_BAD_PORT", "8000").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("invalid WEBAPPS_TEST_BAD_PORT value"));
    }

    #[test]
    fn unset_key_uses_default() {
        std::env::remove_var("WEBAPPS_TEST_UNSET_PORT");
        let port: u16 = try_load("WEBAPPS_TEST_UNSET_PORT", "8000").unwrap();
        assert_eq!(port, 8000);
    }
}
