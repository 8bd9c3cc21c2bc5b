//! Scoring policy: skill-match ratio, weighted final score, ranking.

pub mod ranking;

use serde::{Deserialize, Serialize};

use crate::models::score::ScoreRecord;

pub use ranking::rank;

/// Blend of semantic similarity and skill coverage.
///
/// The weights are a fixed policy of the service (0.7 semantic, 0.3 skill) and
/// are not read from configuration. `validate` exists for callers that build
/// their own weights; it requires non-negative weights summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub semantic_weight: f64,
    pub skill_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            semantic_weight: 0.7,
            skill_weight: 0.3,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), String> {
        if self.semantic_weight < 0.0 || self.skill_weight < 0.0 {
            return Err(format!(
                "weights must be non-negative, got semantic={} skill={}",
                self.semantic_weight, self.skill_weight
            ));
        }
        let sum = self.semantic_weight + self.skill_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(format!("weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }
}

/// |matched| / |jd skills|, or 0 when the JD produced no skills.
pub fn skill_match_ratio(matched: usize, total_jd_skills: usize) -> f64 {
    if total_jd_skills == 0 {
        return 0.0;
    }
    matched as f64 / total_jd_skills as f64
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted blend of the unrounded inputs, rounded once at the end.
pub fn final_score(semantic_similarity: f64, skill_match_ratio: f64, weights: &ScoringWeights) -> f64 {
    round2(weights.semantic_weight * semantic_similarity + weights.skill_weight * skill_match_ratio)
}

/// Builds the record for one resume from its raw sub-scores.
pub fn score(
    name: impl Into<String>,
    matched_skills: Vec<String>,
    total_jd_skills: usize,
    semantic_similarity: f64,
    weights: &ScoringWeights,
) -> ScoreRecord {
    let ratio = skill_match_ratio(matched_skills.len(), total_jd_skills);
    ScoreRecord {
        name: name.into(),
        final_score: final_score(semantic_similarity, ratio, weights),
        semantic_similarity: round2(semantic_similarity),
        skill_match_ratio: round2(ratio),
        matched_skills,
        error: None,
    }
}
