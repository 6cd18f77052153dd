use std::str::FromStr;

use crate::errors::{AppError, AppResult};

const DEFAULT_DATABASE_URL: &str = "battle_of_monsters.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool_size = parse_or(&lookup, "DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(AppError::Config(
                "DATABASE_POOL_SIZE must be at least 1".to_string(),
            ));
        }

        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            pool_size,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} has an invalid value: {raw:?}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_should_fall_back_to_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(settings.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_should_read_every_variable() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "/tmp/monsters.db"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("DATABASE_POOL_SIZE", "4"),
        ]))
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                database_url: "/tmp/monsters.db".to_string(),
                host: "0.0.0.0".to_string(),
                port: 3000,
                pool_size: 4,
            }
        );
    }

    #[test]
    fn test_should_reject_an_invalid_port() {
        let result = Settings::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_should_reject_an_empty_pool() {
        let result = Settings::from_lookup(lookup_from(&[("DATABASE_POOL_SIZE", "0")]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
