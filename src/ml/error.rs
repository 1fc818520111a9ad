// ABOUTME: Model-layer error type for artifact loading and inference
// ABOUTME: Never escapes the registry; becomes a warning or a stub fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or running a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    /// No file at the artifact path
    #[error("artifact not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON for this artifact
    #[error("invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed but its contents are inconsistent
    #[error("incompatible artifact schema: {0}")]
    Schema(String),

    /// A feature row does not have the width the artifact was trained on
    #[error("feature width mismatch: expected {expected}, got {actual}")]
    WidthMismatch {
        /// Width the artifact expects
        expected: usize,
        /// Width it was given
        actual: usize,
    },

    /// A structured record lacks a key the artifact needs
    #[error("missing feature: {0}")]
    MissingFeature(String),

    /// A structured record field has the wrong kind of value
    #[error("feature {0} has the wrong value type")]
    FeatureType(String),
}

/// Result alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
