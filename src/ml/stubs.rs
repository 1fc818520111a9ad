// ABOUTME: Deterministic stand-ins used when a model artifact is absent or fails
// ABOUTME: Same signatures as the trained artifacts, reproducible for identical inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Stub artifacts
//!
//! Each stub exposes an infallible inherent method used directly for
//! inference fallbacks, and implements the matching adapter trait so it can
//! sit in the registry like any trained artifact.

use std::f64::consts::TAU;

use fitplan_core::constants::preference_matching::NORM_EPSILON;
use fitplan_core::models::{FeatureMatrix, FeatureRecord};
use fitplan_intelligence::seeding::seeded_rng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::adapters::{
    CaloriePreprocessor, CalorieRegressor, ClusterAssigner, FeatureScaler, TextEncoder,
};
use super::error::ModelResult;

const CLUSTER_COUNT: f64 = 4.0;
const TDEE_COLUMN: &str = "tdee";

/// Returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl IdentityScaler {
    /// Copy of the input
    #[must_use]
    pub fn apply(&self, features: &FeatureMatrix) -> FeatureMatrix {
        features.clone()
    }
}

impl FeatureScaler for IdentityScaler {
    fn transform(&self, features: &FeatureMatrix) -> ModelResult<FeatureMatrix> {
        Ok(self.apply(features))
    }
}

/// Labels each row with `(sum of row) mod 4`, truncated to an integer
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureSumClusterAssigner;

impl FeatureSumClusterAssigner {
    /// One label per row
    #[must_use]
    pub fn labels(&self, features: &FeatureMatrix) -> Vec<i64> {
        features
            .rows
            .iter()
            .map(|row| row.iter().sum::<f64>().rem_euclid(CLUSTER_COUNT).trunc() as i64)
            .collect()
    }
}

impl ClusterAssigner for FeatureSumClusterAssigner {
    fn predict(&self, features: &FeatureMatrix) -> ModelResult<Vec<i64>> {
        Ok(self.labels(features))
    }
}

/// Keeps only the numeric fields of the record
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericPassthroughPreprocessor;

impl NumericPassthroughPreprocessor {
    /// Numeric fields as a single-row matrix, in record order
    #[must_use]
    pub fn apply(&self, record: &FeatureRecord) -> FeatureMatrix {
        record.numeric_matrix()
    }
}

impl CaloriePreprocessor for NumericPassthroughPreprocessor {
    fn transform(&self, record: &FeatureRecord) -> ModelResult<FeatureMatrix> {
        Ok(self.apply(record))
    }
}

/// Predicts TDEE with a reproducible jitter, or a fixed fallback without a TDEE column
#[derive(Debug, Clone, Copy)]
pub struct TdeeJitterRegressor {
    fallback_kcal: f64,
    jitter: f64,
}

impl TdeeJitterRegressor {
    /// Create a stub with the given fallback and relative jitter
    #[must_use]
    pub const fn new(fallback_kcal: f64, jitter: f64) -> Self {
        Self {
            fallback_kcal,
            jitter,
        }
    }

    /// One prediction per row; an empty matrix yields the fallback once
    #[must_use]
    pub fn predictions(&self, features: &FeatureMatrix) -> Vec<f64> {
        let Some(tdee_index) = features.column_index(TDEE_COLUMN) else {
            return vec![self.fallback_kcal; features.rows.len().max(1)];
        };
        if features.rows.is_empty() {
            return vec![self.fallback_kcal];
        }

        features
            .rows
            .iter()
            .map(|row| {
                row.get(tdee_index).map_or(self.fallback_kcal, |&tdee| {
                    let mut rng = ChaCha8Rng::seed_from_u64(tdee.to_bits());
                    tdee * rng.gen_range((1.0 - self.jitter)..=(1.0 + self.jitter))
                })
            })
            .collect()
    }
}

impl CalorieRegressor for TdeeJitterRegressor {
    fn predict(&self, features: &FeatureMatrix) -> ModelResult<Vec<f64>> {
        Ok(self.predictions(features))
    }
}

/// Unit-norm pseudo-random vectors seeded by a digest of each text
///
/// Identical texts always map to identical vectors; similarity between
/// different texts carries no meaning.
#[derive(Debug, Clone, Copy)]
pub struct HashSeededTextEncoder {
    dimension: usize,
}

impl HashSeededTextEncoder {
    /// Create an encoder producing `dimension`-wide vectors
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Embed every text
    #[must_use]
    pub fn embeddings(&self, texts: &[&str]) -> Vec<Vec<f64>> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn embed(&self, text: &str) -> Vec<f64> {
        let mut rng = seeded_rng(&["text-encoder", text]);
        let raw: Vec<f64> = (0..self.dimension)
            .map(|_| standard_normal(&mut rng))
            .collect();
        let norm = raw.iter().map(|value| value * value).sum::<f64>().sqrt();
        let divisor = norm.max(NORM_EPSILON);
        raw.into_iter().map(|value| value / divisor).collect()
    }
}

impl TextEncoder for HashSeededTextEncoder {
    fn encode(&self, texts: &[&str]) -> ModelResult<Vec<Vec<f64>>> {
        Ok(self.embeddings(texts))
    }
}

// Box-Muller transform
fn standard_normal(rng: &mut impl Rng) -> f64 {
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
