// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calorie bounds, macro energy density, preference matching, artifact paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than living in a single
//! flat namespace.

/// Energy density of each macronutrient
pub mod macro_energy {
    /// Protein energy density (kcal per gram)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Bounds applied to every calorie prediction
pub mod calorie_bounds {
    /// Lowest daily calorie target ever emitted
    pub const MIN_DAILY_KCAL: f64 = 1200.0;
    /// Highest daily calorie target ever emitted
    pub const MAX_DAILY_KCAL: f64 = 6000.0;
    /// Prediction used by the stub regressor when no TDEE column exists
    pub const FALLBACK_DAILY_KCAL: f64 = 2000.0;
    /// Relative jitter applied by the stub regressor (+/- 5%)
    pub const STUB_JITTER: f64 = 0.05;
}

/// Free-text preference matching
pub mod preference_matching {
    /// Notes are only kept when cosine similarity strictly exceeds this value
    pub const SIMILARITY_THRESHOLD: f64 = 0.25;
    /// Maximum number of personalization notes returned
    pub const MAX_NOTES: usize = 3;
    /// Embedding width produced by the stub text encoder
    pub const STUB_EMBEDDING_DIMENSION: usize = 384;
    /// Guard added to vector norms before dividing
    pub const NORM_EPSILON: f64 = 1e-9;
}

/// Workout volume assumptions
pub mod workout {
    /// Length of one training session in hours, used for burn estimates
    pub const SESSION_HOURS: f64 = 0.75;
    /// Session length for Beginner and Intermediate athletes
    pub const STANDARD_SESSION_MIN: u32 = 45;
    /// Session length for Advanced and Elite athletes
    pub const EXTENDED_SESSION_MIN: u32 = 60;
    /// Fewest exercises on a workout day (when the catalog has enough)
    pub const MIN_EXERCISES_PER_DAY: usize = 4;
    /// Most exercises on a workout day
    pub const MAX_EXERCISES_PER_DAY: usize = 6;
    /// Note attached to every rest day
    pub const REST_DAY_NOTE: &str = "Active recovery: light walking or stretching";
    /// Marker placed before a personalization note appended to a coaching note
    pub const PERSONALIZATION_MARKER: &str = "\u{2605}";
}

/// Relative paths of the five model artifacts inside the model directory
pub mod model_files {
    /// Feature scaler for the cluster feature row
    pub const SCALER: &str = "models/scaler.json";
    /// Cluster assigner (k-means centroids)
    pub const CLUSTER: &str = "models/kmeans_model.json";
    /// Calorie feature preprocessor
    pub const CALORIE_PREPROCESSOR: &str = "models/calorie_preprocessor.json";
    /// Calorie regressor (decision tree)
    pub const CALORIE_REGRESSOR: &str = "models/dtr_model.json";
    /// Text-embedding encoder
    pub const TEXT_ENCODER: &str = "models/sentence_transformer_model.json";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the planner
    pub const FITPLAN: &str = "fitplan";
}
