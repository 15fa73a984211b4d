use std::path::PathBuf;

use market_db::Database;

use crate::config::AppConfig;

/// Foundation init (fatal on error): .env, data directories, database, config.
pub fn init_foundation() -> Result<(Database, AppConfig, PathBuf), anyhow::Error> {
    load_dotenv();
    let dir = data_dir();
    std::fs::create_dir_all(dir.join("bot_templates"))?;

    let db_path = dir.join("data.db");
    tracing::info!("Opening database at {}", db_path.display());
    let db = Database::open(&db_path)?;

    let config = AppConfig::from_env();
    if config.admin_contact.is_empty() {
        tracing::warn!("ADMIN_CONTACT not set; /admin endpoints will deny everyone");
    }
    if !config.mail_configured() {
        tracing::warn!("SMTP_USER/SMTP_PASSWORD not set; email OTP delivery will fail");
    }
    if config.telegram_bot_token.is_empty() {
        tracing::info!("TELEGRAM_BOT_TOKEN not set; Telegram login channel disabled");
    }

    tracing::info!("Settings loaded (port={})", config.server_port);
    Ok((db, config, dir))
}

/// Determine the data directory for the application.
fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BOTMARKET_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".botmarket")
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
