//! Screening pipeline: keywords, then per-resume extract, match, embed and score, then rank.

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::embedding::{cosine_similarity, DimensionMismatchError, Embedder, EmbeddingError};
use crate::errors::AppError;
use crate::extraction::{extract_text, ExtractionError, ResumeDocument};
use crate::models::score::ScoreRecord;
use crate::nlp::keywords::extract_keywords;
use crate::nlp::matcher::PhraseMatcher;
use crate::scoring::{self, rank, ScoringWeights};

pub const MISSING_INPUT_MESSAGE: &str = "Job description and at least one resume are required.";

/// Why a single resume could not be scored. Never fails the batch.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("failed to embed resume: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatchError),
}

#[derive(Debug)]
pub struct ScreeningRequest {
    pub job_description: String,
    pub resumes: Vec<ResumeDocument>,
}

/// Everything a resume task needs, computed once per request and shared read-only.
struct JobContext {
    matcher: PhraseMatcher,
    jd_embedding: Vec<f32>,
    total_skills: usize,
    embedder: Arc<dyn Embedder>,
    weights: ScoringWeights,
}

impl JobContext {
    fn score_resume(&self, document: ResumeDocument) -> Result<ScoreRecord, ResumeError> {
        let text = extract_text(&document)?;
        let matched_skills = self.matcher.find(&text);
        let embedding = self.embedder.embed(&text)?;
        let similarity = cosine_similarity(&self.jd_embedding, &embedding)?;

        Ok(scoring::score(
            document.name,
            matched_skills,
            self.total_skills,
            f64::from(similarity),
            &self.weights,
        ))
    }
}

/// Runs screening requests against a process-wide embedder.
pub struct Screener {
    embedder: Arc<dyn Embedder>,
    weights: ScoringWeights,
    resume_timeout: Duration,
}

impl Screener {
    pub fn new(embedder: Arc<dyn Embedder>, resume_timeout: Duration) -> Self {
        let weights = ScoringWeights::default();
        debug_assert!(weights.validate().is_ok());
        Self {
            embedder,
            weights,
            resume_timeout,
        }
    }

    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    /// Scores every resume and returns them ranked by `final_score`.
    ///
    /// Fails only for request-level problems (missing input, JD embedding).
    /// Resumes that fail or time out come back as degraded records.
    #[tracing::instrument(
        skip_all,
        fields(run_id = %Uuid::new_v4(), resumes = request.resumes.len())
    )]
    pub async fn screen(&self, request: ScreeningRequest) -> Result<Vec<ScoreRecord>, AppError> {
        let ScreeningRequest {
            job_description,
            resumes,
        } = request;

        if job_description.is_empty() || resumes.is_empty() {
            return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
        }

        let started = Instant::now();
        let skills = extract_keywords(&job_description);
        let matcher = PhraseMatcher::new(&skills)?;
        info!(
            phrases = matcher.pattern_count(),
            "Extracted job description keywords"
        );

        // One encode for the JD regardless of batch size.
        let embedder = Arc::clone(&self.embedder);
        let jd_embedding = tokio::task::spawn_blocking(move || embedder.embed(&job_description))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JD embedding task failed: {e}")))??;

        let context = Arc::new(JobContext {
            matcher,
            jd_embedding,
            total_skills: skills.len(),
            embedder: Arc::clone(&self.embedder),
            weights: self.weights,
        });

        let tasks: Vec<_> = resumes
            .into_iter()
            .map(|document| {
                let name = document.name.clone();
                let context = Arc::clone(&context);
                let limit = self.resume_timeout;
                let task = tokio::spawn(async move {
                    tokio::time::timeout(
                        limit,
                        tokio::task::spawn_blocking(move || context.score_resume(document)),
                    )
                    .await
                });
                (name, task)
            })
            .collect();

        // Barrier: every resume must finish (or be given up on) before ranking.
        let mut records = Vec::with_capacity(tasks.len());
        for (name, task) in tasks {
            let record = match task.await {
                Ok(Ok(Ok(Ok(record)))) => record,
                Ok(Ok(Ok(Err(e)))) => {
                    warn!(resume = %name, error = %e, "Resume could not be scored");
                    ScoreRecord::degraded(name, e.to_string())
                }
                Ok(Err(_elapsed)) => {
                    let e = ExtractionError::Timeout {
                        name: name.clone(),
                        limit: self.resume_timeout,
                    };
                    warn!(resume = %name, "Resume processing timed out");
                    ScoreRecord::degraded(name, e.to_string())
                }
                Ok(Ok(Err(join_error))) | Err(join_error) => {
                    warn!(resume = %name, error = %join_error, "Resume task aborted");
                    ScoreRecord::degraded(name, "resume processing aborted unexpectedly")
                }
            };
            records.push(record);
        }

        let ranked = rank(records);
        info!(
            degraded = ranked.iter().filter(|r| r.is_degraded()).count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Screening complete"
        );

        Ok(ranked)
    }
}
