//! Configuration module
//!
//! Loads the service configuration from the environment. Credentials and the
//! upload staging directory are read once at startup and carried in an
//! explicit struct; nothing is reloaded at runtime.

use std::env;
use std::path::PathBuf;

/// Environment file consulted before reading process variables.
const ENV_FILE: &str = ".dev.env";

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;

/// Application configuration.
///
/// Constructed once from the environment at startup and passed by value into
/// the services that need it.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Cloudinary account name (`CLOUD_NAME`).
    pub cloud_name: String,
    /// Cloudinary API key (`CLOUD_API_KEY`).
    pub api_key: String,
    /// Cloudinary API secret (`CLOUD_API_SECRET`).
    pub api_secret: String,
    /// Local staging directory for uploaded files (`MULTER_DEST`).
    pub upload_dest: PathBuf,
    pub max_file_size_bytes: usize,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::from_filename(ENV_FILE).ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            cloud_name: env::var("CLOUD_NAME")
                .map_err(|_| anyhow::anyhow!("CLOUD_NAME must be set"))?,
            api_key: env::var("CLOUD_API_KEY")
                .map_err(|_| anyhow::anyhow!("CLOUD_API_KEY must be set"))?,
            api_secret: env::var("CLOUD_API_SECRET")
                .map_err(|_| anyhow::anyhow!("CLOUD_API_SECRET must be set"))?,
            upload_dest: env::var("MULTER_DEST")
                .map_err(|_| anyhow::anyhow!("MULTER_DEST must be set"))?
                .into(),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.cloud_name.trim().is_empty() {
            return Err(anyhow::anyhow!("CLOUD_NAME cannot be empty"));
        }

        if self.api_key.trim().is_empty() || self.api_secret.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "CLOUD_API_KEY and CLOUD_API_SECRET cannot be empty"
            ));
        }

        if self.upload_dest.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("MULTER_DEST cannot be empty"));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }
}
