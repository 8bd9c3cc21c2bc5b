//! Sentence embeddings and vector similarity.
//!
//! The embedder is loaded once at startup and shared by every request as
//! `Arc<dyn Embedder>`; implementations must be safe for concurrent use.

pub mod bert;
pub mod hashing;
pub mod similarity;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

pub use bert::BertEmbedder;
pub use hashing::HashingEmbedder;
pub use similarity::{cosine_similarity, DimensionMismatchError};

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}

/// Encodes text into a fixed-size dense vector.
pub trait Embedder: Send + Sync {
    /// Backend label reported by `/health` and in logs.
    fn name(&self) -> &'static str;

    /// Length of every vector returned by [`Embedder::embed`].
    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Which embedder to construct at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Pretrained sentence-transformer (BERT family) run with candle.
    Bert { model_dir: PathBuf },
    /// Deterministic feature hashing; needs no model files.
    Hashing { dimension: usize },
}

/// Builds the process-wide embedder. Slow for `Bert`; call once.
pub fn load_embedder(backend: &EmbeddingBackend) -> Result<Arc<dyn Embedder>, EmbeddingError> {
    let embedder: Arc<dyn Embedder> = match backend {
        EmbeddingBackend::Bert { model_dir } => Arc::new(BertEmbedder::load(model_dir)?),
        EmbeddingBackend::Hashing { dimension } => Arc::new(HashingEmbedder::new(*dimension)),
    };

    info!(
        backend = embedder.name(),
        dimension = embedder.dimension(),
        "Embedding model ready"
    );

    Ok(embedder)
}
