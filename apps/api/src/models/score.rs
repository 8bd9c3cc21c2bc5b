use serde::{Deserialize, Serialize};

/// Per-resume result returned by the screening endpoint.
///
/// `semantic_similarity` and `skill_match_ratio` are rounded for display;
/// `final_score` is computed from the unrounded values and then rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub matched_skills: Vec<String>,
    pub semantic_similarity: f64,
    pub skill_match_ratio: f64,
    pub final_score: f64,
    /// Set only when the resume could not be processed; all scores are then 0.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreRecord {
    /// Placeholder for a resume that failed extraction or scoring.
    pub fn degraded(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matched_skills: Vec::new(),
            semantic_similarity: 0.0,
            skill_match_ratio: 0.0,
            final_score: 0.0,
            error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
