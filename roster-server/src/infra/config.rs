use std::{env, path::PathBuf};

/// Server configuration loaded via environment variables. A `.env` file in
/// the working directory is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Database settings
    pub database_url: String,

    // Upload settings
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://roster.db?mode=rwc".to_string()),

            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "./uploads".to_string())
                .into(),
        })
    }

    pub fn ensure_directories(&self) -> anyhow::Result<()> {
        // Create the upload directory if it doesn't exist
        std::fs::create_dir_all(&self.upload_dir)?;
        Ok(())
    }
}
