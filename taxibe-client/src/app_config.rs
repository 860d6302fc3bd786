use serde::Deserialize;
use std::env;
use std::time::Duration;
use taxibe_domain::payment::DepositPolicy;
use taxibe_domain::selection::SelectionConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_max_seats")]
    pub max_seats_per_booking: usize,
    #[serde(default = "default_deposit_rate")]
    pub deposit_rate_percent: u8,
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_seats() -> usize {
    4
}

fn default_deposit_rate() -> u8 {
    30
}

impl Config {
    /// Layered load: `config/default`, then the `RUN_MODE` file, then an
    /// uncommitted `config/local`, then `TAXIBE__`-prefixed environment
    /// variables (e.g. `TAXIBE__API__BASE_URL`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("TAXIBE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    pub fn selection(&self) -> SelectionConfig {
        SelectionConfig {
            max_seats_per_booking: self.business_rules.max_seats_per_booking,
        }
    }

    pub fn deposit_policy(&self) -> DepositPolicy {
        DepositPolicy {
            rate_percent: self.business_rules.deposit_rate_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_tunables() {
        let cfg = parse(
            r#"
            [api]
            base_url = "https://taxibe.example/api"

            [business_rules]
            "#,
        );

        assert_eq!(cfg.api.timeout_seconds, 30);
        assert_eq!(cfg.business_rules.max_seats_per_booking, 4);
        assert_eq!(cfg.business_rules.deposit_rate_percent, 30);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_charter_flow_override() {
        let cfg = parse(
            r#"
            [api]
            base_url = "https://taxibe.example/api"
            timeout_seconds = 10

            [business_rules]
            max_seats_per_booking = 15
            "#,
        );

        assert_eq!(cfg.selection().max_seats_per_booking, 15);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
    }
}
