use anyhow::{Context, Result, anyhow};

const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dev_mode: bool,
    pub enable_file: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub otel_endpoint: Option<String>,
    pub log: LogConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = parse_bool("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = match std::env::var("DB_MAX_CONN") {
            Ok(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            Err(_) => DEFAULT_DB_MAX_CONN,
        };

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty());

        let log = LogConfig {
            dev_mode: flag("DEV_MODE"),
            enable_file: flag("ENABLE_FILE_LOG"),
        };

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_max_conn,
            otel_endpoint,
            log,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_only_literals() {
        assert!(parse_bool("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_bool("RUN_MIGRATIONS", "false").unwrap());

        let err = parse_bool("RUN_MIGRATIONS", "yes").unwrap_err();
        assert_eq!(
            err.to_string(),
            "RUN_MIGRATIONS must be 'true' or 'false', got 'yes'"
        );
    }
}
