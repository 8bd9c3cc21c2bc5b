use crate::nlp::tokenizer::tokenize;

use super::{Embedder, EmbeddingError};

/// Signed feature-hashing embedder.
///
/// Each lower-cased word token and each adjacent word bigram is hashed with
/// BLAKE3 into one of `dimension` buckets with a ±1 sign; the result is L2
/// normalised. Deterministic across runs and platforms. Text with no word
/// tokens maps to the zero vector.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

const BIGRAM_WEIGHT: f32 = 0.5;

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn bucket(&self, feature: &str) -> (usize, f32) {
        let hash = blake3::hash(feature.as_bytes());
        let bytes = hash.as_bytes();
        let mut index = [0u8; 8];
        index.copy_from_slice(&bytes[0..8]);
        let idx = (u64::from_le_bytes(index) % self.dimension as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (idx, sign)
    }
}

impl Embedder for HashingEmbedder {
    fn name(&self) -> &'static str {
        "hashing"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|t| !t.is_punct())
            .map(|t| t.text)
            .collect();

        let mut vector = vec![0.0f32; self.dimension];
        for word in &words {
            let (idx, sign) = self.bucket(word);
            vector[idx] += sign;
        }
        for pair in words.windows(2) {
            let (idx, sign) = self.bucket(&format!("{} {}", pair[0], pair[1]));
            vector[idx] += sign * BIGRAM_WEIGHT;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::cosine_similarity;

    #[test]
    fn test_vectors_are_unit_length() {
        let embedder = HashingEmbedder::new(384);
        let v = embedder.embed("Experienced Python developer").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn test_deterministic() {
        let embedder = HashingEmbedder::new(128);
        assert_eq!(
            embedder.embed("rust and go").unwrap(),
            embedder.embed("rust and go").unwrap()
        );
    }

    #[test]
    fn test_case_and_punctuation_do_not_matter() {
        let embedder = HashingEmbedder::new(128);
        assert_eq!(
            embedder.embed("Machine Learning!").unwrap(),
            embedder.embed("machine learning").unwrap()
        );
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let embedder = HashingEmbedder::new(16);
        let v = embedder.embed("").unwrap();
        assert_eq!(v.len(), 16);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_overlapping_text_is_more_similar() {
        let embedder = HashingEmbedder::new(384);
        let jd = embedder
            .embed("python developer with experience in machine learning")
            .unwrap();
        let close = embedder
            .embed("experienced python developer, machine learning experience")
            .unwrap();
        let far = embedder.embed("pastry chef, french cuisine").unwrap();
        let close_sim = cosine_similarity(&jd, &close).unwrap();
        let far_sim = cosine_similarity(&jd, &far).unwrap();
        assert!(close_sim > far_sim, "{close_sim} <= {far_sim}");
    }

    #[test]
    fn test_zero_dimension_is_clamped() {
        assert_eq!(HashingEmbedder::new(0).dimension(), 1);
    }
}
