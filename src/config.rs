use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub option_a: String,
    pub option_b: String,
    pub redis_host: String,
    pub redis_port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "80"),
            option_a: try_load("OPTION_A", "Cats"),
            option_b: try_load("OPTION_B", "Dogs"),
            redis_host: try_load("REDIS_HOST", "redis"),
            redis_port: try_load("REDIS_PORT", "6379"),
        }
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::Config;

    fn test_config() -> Config {
        Config {
            port: 80,
            option_a: "Cats".to_string(),
            option_b: "Dogs".to_string(),
            redis_host: "redis".to_string(),
            redis_port: 6379,
        }
    }

    #[test]
    fn redis_url_joins_host_and_port() {
        assert_eq!(test_config().redis_url(), "redis://redis:6379");
    }

    #[test]
    fn redis_url_respects_overrides() {
        let mut config = test_config();
        config.redis_host = "127.0.0.1".to_string();
        config.redis_port = 6380;
        assert_eq!(config.redis_url(), "redis://127.0.0.1:6380");
    }
}
