pub use crate::utils::database;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Duration;
use std::{env, str::FromStr};

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct OrderingContext {
    pub delivery_fee: BigDecimal,
}

#[derive(Clone)]
pub struct AuthContext {
    pub session_ttl: Duration,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub ordering: OrderingContext,
    pub auth: AuthContext,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct OrderingConfig {
    pub delivery_fee: BigDecimal,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub session_ttl_hours: i64,
}

#[derive(Clone, Debug)]
pub struct InitialAdminConfig {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub ordering: OrderingConfig,
    pub auth: AuthConfig,
    pub initial_admin: Option<InitialAdminConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { name, value })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_var::<u32>(&lookup, "DATABASE_MAX_CONNECTIONS", "4")?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = parse_var::<u16>(&lookup, "PORT", "8000")?;
        let url = lookup("URL").unwrap_or_else(|| format!("http://{}:{}", host, port));
        let delivery_fee = parse_var::<BigDecimal>(&lookup, "DELIVERY_FEE", "40.00")?;
        let session_ttl_hours = parse_var::<i64>(&lookup, "SESSION_TTL_HOURS", "168")?;

        let initial_admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(InitialAdminConfig { email, password }),
            _ => None,
        };

        if delivery_fee < BigDecimal::from(0) {
            return Err(ConfigError::Invalid {
                name: "DELIVERY_FEE",
                value: delivery_fee.to_string(),
            });
        }

        if session_ttl_hours <= 0 {
            return Err(ConfigError::Invalid {
                name: "SESSION_TTL_HOURS",
                value: session_ttl_hours.to_string(),
            });
        }

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            ordering: OrderingConfig { delivery_fee },
            auth: AuthConfig { session_ttl_hours },
            initial_admin,
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn =
            database::connect(self.database.url.as_str(), self.database.max_connections).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            ordering: OrderingContext {
                delivery_fee: self.ordering.delivery_fee,
            },
            auth: AuthContext {
                session_ttl: Duration::hours(self.auth.session_ttl_hours),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_applied() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db")]))
            .expect("config should parse");

        assert_eq!(config.database.url, "postgres://db");
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.url, "http://0.0.0.0:8000");
        assert_eq!(config.app.environment, AppEnvironment::Development);
        assert_eq!(
            config.ordering.delivery_fee,
            BigDecimal::from_str("40.00").unwrap()
        );
        assert_eq!(config.auth.session_ttl_hours, 168);
        assert!(config.initial_admin.is_none());
    }

    #[test]
    fn database_url_is_required() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("APP_ENV", "production"),
            ("PORT", "9000"),
            ("DELIVERY_FEE", "55.50"),
            ("SESSION_TTL_HOURS", "12"),
            ("ADMIN_EMAIL", "owner@kusina.ph"),
            ("ADMIN_PASSWORD", "changeme123"),
        ]))
        .expect("config should parse");

        assert_eq!(config.app.environment, AppEnvironment::Production);
        assert_eq!(config.app.port, 9000);
        assert_eq!(
            config.ordering.delivery_fee,
            BigDecimal::from_str("55.50").unwrap()
        );
        assert_eq!(config.auth.session_ttl_hours, 12);
        let admin = config.initial_admin.expect("initial admin should be set");
        assert_eq!(admin.email, "owner@kusina.ph");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("DELIVERY_FEE", "-1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DELIVERY_FEE", .. }));
    }
}
