use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

/// All runtime configuration, built once at startup and passed down
/// explicitly. No other code reads environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub preprocess: PreprocessConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            preprocess: PreprocessConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:      {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  storage:     company_data_dir={}",
            self.storage.company_data_dir.display()
        );
        tracing::info!(
            "  preprocess:  max_chunk_size={}, overlap={}, batch_size={}",
            self.preprocess.max_chunk_size,
            self.preprocess.overlap_size,
            self.preprocess.batch_size
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 8000),
            cors_origin: env_or("CORS_ORIGIN", "*"),
        }
    }
}

// ── Storage ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding one sub-directory of report PDFs per ticker.
    pub company_data_dir: PathBuf,
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            company_data_dir: PathBuf::from(env_or("COMPANY_DATA_DIR", "data/company_data")),
        }
    }
}

// ── Preprocessing defaults ────────────────────────────────────

/// Default chunking/batching parameters; individual requests may override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Maximum characters per chunk (default: 1500).
    pub max_chunk_size: usize,
    /// Characters of overlap between adjacent chunks (default: 200).
    pub overlap_size: usize,
    /// Maximum chunks per transmission batch (default: 150).
    pub batch_size: usize,
}

impl PreprocessConfig {
    fn from_env() -> Self {
        Self {
            max_chunk_size: env_usize("MAX_CHUNK_SIZE", 1500),
            overlap_size: env_usize("CHUNK_OVERLAP", 200),
            batch_size: env_usize("PREPROCESS_BATCH_SIZE", 150),
        }
    }
}
