use std::env;

/// Search endpoint of the São José dos Campos diocese mass schedule plugin.
pub const DEFAULT_DIOCESE_ENDPOINT: &str =
    "https://diocese-sjc.org.br/wp-content/plugins/hmissa/actions.php";

/// Brasília time, UTC-03:00.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub diocese: DioceseConfig,
    pub clock: ClockConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote schedule lookup settings.
#[derive(Debug, Clone)]
pub struct DioceseConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Where "now" is for the upcoming-masses search. The diocese publishes
/// local times, so a server running in UTC must shift its clock.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub utc_offset_minutes: i32,
}

impl Default for DioceseConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DIOCESE_ENDPOINT.to_string(),
            timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

fn default_user_agent() -> String {
    format!("missas/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("MISSAS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("MISSAS_PORT", 3000),
            },
            diocese: DioceseConfig {
                endpoint: env::var("DIOCESE_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_DIOCESE_ENDPOINT.to_string()),
                timeout_secs: parse_env_or("DIOCESE_TIMEOUT_SECS", 30),
                user_agent: env::var("DIOCESE_USER_AGENT")
                    .unwrap_or_else(|_| default_user_agent()),
            },
            clock: ClockConfig {
                utc_offset_minutes: parse_env_or(
                    "MISSAS_UTC_OFFSET_MINUTES",
                    DEFAULT_UTC_OFFSET_MINUTES,
                ),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
