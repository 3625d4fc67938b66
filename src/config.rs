use crate::statement::StatementLayout;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub statement_layout: StatementLayout,
    /// Field delimiter of imported sheets.
    pub import_delimiter: u8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

fn parse_positive(
    env_map: &HashMap<String, String>,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    match env_map.get(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidValue(
                key.to_string(),
                "must be a positive integer".to_string(),
            )),
        },
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| "cari.db".to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::MissingEnv("DATABASE_PATH".to_string()));
        }

        let defaults = StatementLayout::default();
        let statement_layout = StatementLayout {
            max_rows: parse_positive(&env_map, "STATEMENT_MAX_ROWS", defaults.max_rows)?,
            rows_per_page: parse_positive(
                &env_map,
                "STATEMENT_ROWS_PER_PAGE",
                defaults.rows_per_page,
            )?,
        };

        let import_delimiter = match env_map.get("IMPORT_DELIMITER").map(|s| s.as_str()) {
            None => b',',
            Some("\\t") | Some("tab") => b'\t',
            Some(s) if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
            Some(other) => {
                return Err(ConfigError::InvalidValue(
                    "IMPORT_DELIMITER".to_string(),
                    format!("must be a single ASCII character, got {:?}", other),
                ))
            }
        };

        Ok(Config {
            port,
            database_path,
            statement_layout,
            import_delimiter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, "cari.db");
        assert_eq!(config.statement_layout, StatementLayout::default());
        assert_eq!(config.statement_layout.max_rows, 55);
        assert_eq!(config.import_delimiter, b',');
    }

    #[test]
    fn test_blank_database_path() {
        let mut env_map = HashMap::new();
        env_map.insert("DATABASE_PATH".to_string(), "  ".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "DATABASE_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_statement_limits() {
        let mut env_map = HashMap::new();
        env_map.insert("STATEMENT_MAX_ROWS".to_string(), "100".to_string());
        env_map.insert("STATEMENT_ROWS_PER_PAGE".to_string(), "40".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.statement_layout.max_rows, 100);
        assert_eq!(config.statement_layout.rows_per_page, 40);

        let mut env_map = HashMap::new();
        env_map.insert("STATEMENT_MAX_ROWS".to_string(), "0".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "STATEMENT_MAX_ROWS"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_import_delimiter() {
        let mut env_map = HashMap::new();
        env_map.insert("IMPORT_DELIMITER".to_string(), ";".to_string());
        assert_eq!(Config::from_env_map(env_map).unwrap().import_delimiter, b';');

        let mut env_map = HashMap::new();
        env_map.insert("IMPORT_DELIMITER".to_string(), "tab".to_string());
        assert_eq!(Config::from_env_map(env_map).unwrap().import_delimiter, b'\t');

        let mut env_map = HashMap::new();
        env_map.insert("IMPORT_DELIMITER".to_string(), "::".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "IMPORT_DELIMITER"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
