use crate::models::score::ScoreRecord;

/// Sorts records by `final_score`, highest first.
///
/// The sort is stable: records with equal scores keep their upload order.
pub fn rank(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    records
}
