// ABOUTME: Cosine similarity and thresholded top-k ranking of candidate notes
// ABOUTME: Used to match free-text preferences against the candidate bank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::constants::preference_matching::NORM_EPSILON;

fn norm(vector: &[f64]) -> f64 {
    vector.iter().map(|value| value * value).sum::<f64>().sqrt()
}

/// Cosine similarity; zero vectors score 0
#[must_use]
pub fn cosine_similarity(left: &[f64], right: &[f64]) -> f64 {
    let dot: f64 = left.iter().zip(right).map(|(a, b)| a * b).sum();
    dot / ((norm(left) + NORM_EPSILON) * (norm(right) + NORM_EPSILON))
}

/// Candidates ranked by similarity to `query`, best first, keeping at most
/// `max_results` whose similarity strictly exceeds `threshold`
#[must_use]
pub fn rank_candidates(
    query: &[f64],
    candidate_embeddings: &[Vec<f64>],
    candidates: &[&str],
    threshold: f64,
    max_results: usize,
) -> Vec<(String, f64)> {
    let mut scored: Vec<(usize, f64)> = candidate_embeddings
        .iter()
        .enumerate()
        .map(|(index, embedding)| (index, cosine_similarity(query, embedding)))
        .collect();
    // stable sort keeps bank order for ties
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(max_results)
        .filter(|&(_, score)| score > threshold)
        .filter_map(|(index, score)| {
            candidates
                .get(index)
                .map(|&candidate| (candidate.to_owned(), score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_of_parallel_and_orthogonal_vectors() {
        assert!((cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).abs() < 1e-12);
    }

    #[test]
    fn test_rank_filters_threshold_and_caps_results() {
        let query = [1.0, 0.0];
        let embeddings = vec![
            vec![0.0, 1.0],
            vec![1.0, 0.1],
            vec![1.0, 1.0],
            vec![1.0, 0.0],
            vec![-1.0, 0.0],
        ];
        let candidates = ["ortho", "close", "diagonal", "exact", "opposite"];

        let ranked = rank_candidates(&query, &embeddings, &candidates, 0.25, 3);
        let names: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["exact", "close", "diagonal"]);

        let ranked = rank_candidates(&query, &embeddings, &candidates, 0.9, 3);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|(_, score)| *score > 0.9));
    }
}
