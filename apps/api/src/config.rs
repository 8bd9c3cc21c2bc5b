use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::embedding::EmbeddingBackend;

const DEFAULT_MODEL_DIR: &str = "models/all-MiniLM-L6-v2";
const DEFAULT_EMBEDDING_DIM: usize = 384;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub embedding_backend: EmbeddingBackend,
    pub max_upload_bytes: usize,
    /// Upper bound for extracting and scoring a single resume.
    pub extraction_timeout: Duration,
    /// Upper bound for a whole screening request.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = lookup("EMBEDDING_BACKEND").unwrap_or_else(|| "bert".to_string());
        let embedding_backend = match backend.trim().to_ascii_lowercase().as_str() {
            "bert" => EmbeddingBackend::Bert {
                model_dir: lookup("EMBEDDING_MODEL_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR)),
            },
            "hashing" => EmbeddingBackend::Hashing {
                dimension: parse_or(&lookup, "EMBEDDING_DIM", DEFAULT_EMBEDDING_DIM)?,
            },
            other => bail!("EMBEDDING_BACKEND must be 'bert' or 'hashing', got '{other}'"),
        };

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            embedding_backend,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            extraction_timeout: Duration::from_secs(parse_or(
                &lookup,
                "EXTRACTION_TIMEOUT_SECS",
                30,
            )?),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 120)?),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
