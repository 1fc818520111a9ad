// ABOUTME: Narrow trait interface every model artifact implements
// ABOUTME: One trait per artifact role: scale, cluster, preprocess, regress, encode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{FeatureMatrix, FeatureRecord};

use super::error::ModelResult;

/// Scales the cluster feature row
pub trait FeatureScaler: Send + Sync {
    /// Transform every row
    ///
    /// # Errors
    ///
    /// Returns an error when the row width does not match the artifact
    fn transform(&self, features: &FeatureMatrix) -> ModelResult<FeatureMatrix>;
}

/// Assigns a cluster label per row
pub trait ClusterAssigner: Send + Sync {
    /// One label per row
    ///
    /// # Errors
    ///
    /// Returns an error when the row width does not match the artifact
    fn predict(&self, features: &FeatureMatrix) -> ModelResult<Vec<i64>>;
}

/// Turns the structured calorie record into model features
pub trait CaloriePreprocessor: Send + Sync {
    /// Transform one record into a single-row matrix
    ///
    /// # Errors
    ///
    /// Returns an error when a required key is missing or mistyped
    fn transform(&self, record: &FeatureRecord) -> ModelResult<FeatureMatrix>;
}

/// Predicts a raw daily calorie target per row
pub trait CalorieRegressor: Send + Sync {
    /// One prediction per row, unclamped
    ///
    /// # Errors
    ///
    /// Returns an error when a row is too narrow for the model
    fn predict(&self, features: &FeatureMatrix) -> ModelResult<Vec<f64>>;
}

/// Embeds text into fixed-width vectors
pub trait TextEncoder: Send + Sync {
    /// One vector per input text, all the same width
    ///
    /// # Errors
    ///
    /// Returns an error when the encoder cannot produce embeddings
    fn encode(&self, texts: &[&str]) -> ModelResult<Vec<Vec<f64>>>;
}
