use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// 서버 설정 (환경 변수)
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    // 미설정 시 메모리 프로필 저장소 사용
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_addr: try_load("BIND_ADDR", "0.0.0.0".to_string()),
            port: try_load("PORT", 3000),
            database_url: var("DATABASE_URL"),
            database_max_connections: try_load("DATABASE_MAX_CONNECTIONS", 5),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("{:<12} --> Invalid {key} value ({e}), using default: {default}", "Config");
            default
        }),
        None => {
            info!("{:<12} --> {key} not set, using default: {default}", "Config");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_invalid_values_fall_back() {
        env::set_var("REWEAR_TEST_PORT_INVALID", "not-a-port");
        assert_eq!(try_load::<u16>("REWEAR_TEST_PORT_INVALID", 3000), 3000);
        assert_eq!(try_load::<u16>("REWEAR_TEST_PORT_MISSING", 4000), 4000);

        env::set_var("REWEAR_TEST_PORT_VALID", "8080");
        assert_eq!(try_load::<u16>("REWEAR_TEST_PORT_VALID", 3000), 8080);
    }

    #[test]
    fn blank_variable_counts_as_unset() {
        env::set_var("REWEAR_TEST_BLANK", "   ");
        assert_eq!(var("REWEAR_TEST_BLANK"), None);
    }
}
