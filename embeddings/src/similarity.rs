//! Similarity scoring and ranking.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::Embedding;
use crate::error::{EmbeddingError, Result};

/// Compute the cosine similarity between two embeddings.
///
/// Returns a value between -1.0 and 1.0, where:
/// - 1.0 means identical direction
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite direction
///
/// A zero vector has no direction; similarity against it is defined as 0.0
/// rather than dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (magnitude_a * magnitude_b))
}

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked {
    /// Position of the candidate in the input slice.
    pub index: usize,

    /// Cosine similarity against the query.
    pub score: f32,
}

/// Rank candidates by descending cosine similarity against the query.
///
/// Returns exactly `min(top_n, candidates.len())` results. The sort is
/// stable, so candidates with equal scores keep their input order.
pub fn rank(query: &Embedding, candidates: &[Embedding], top_n: usize) -> Result<Vec<Ranked>> {
    let mut scores: Vec<(OrderedFloat<f32>, usize)> = Vec::with_capacity(candidates.len());

    for (index, embedding) in candidates.iter().enumerate() {
        let score = cosine_similarity(query, embedding)?;
        scores.push((OrderedFloat(score), index));
    }

    scores.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(scores
        .into_iter()
        .take(top_n)
        .map(|(score, index)| Ranked {
            index,
            score: score.0,
        })
        .collect())
}
