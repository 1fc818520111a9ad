// ABOUTME: JSON-backed trained model artifacts with schema validation on load
// ABOUTME: Standard scaler, k-means, calorie preprocessor, decision tree, vocabulary encoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Trained artifacts
//!
//! Each artifact is a small JSON document. [`JsonArtifact::load`] reads and
//! schema-checks it; anything that fails there is replaced by a stub in the
//! registry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use fitplan_core::constants::preference_matching::NORM_EPSILON;
use fitplan_core::models::{FeatureMatrix, FeatureRecord, FeatureValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::adapters::{
    CaloriePreprocessor, CalorieRegressor, ClusterAssigner, FeatureScaler, TextEncoder,
};
use super::error::{ModelError, ModelResult};

const LEAF: i64 = -1;

/// An artifact stored as a JSON document
pub trait JsonArtifact: DeserializeOwned + Sized {
    /// Check internal consistency after parsing
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Schema`] describing the first inconsistency
    fn validate(&self) -> ModelResult<()>;

    /// Read, parse, and validate the artifact at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not valid JSON,
    /// or fails validation
    fn load(path: &Path) -> ModelResult<Self> {
        if !path.is_file() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self = serde_json::from_str(&contents)?;
        artifact.validate()?;
        Ok(artifact)
    }
}

fn schema(message: impl Into<String>) -> ModelError {
    ModelError::Schema(message.into())
}

fn ensure_width(expected: usize, actual: usize) -> ModelResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ModelError::WidthMismatch { expected, actual })
    }
}

/// Per-column standardization: `(x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScalerArtifact {
    /// Column means
    pub mean: Vec<f64>,
    /// Column scales; zero is treated as one
    pub scale: Vec<f64>,
}

impl JsonArtifact for StandardScalerArtifact {
    fn validate(&self) -> ModelResult<()> {
        if self.mean.is_empty() {
            return Err(schema("scaler mean is empty"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(schema(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScalerArtifact {
    fn transform(&self, features: &FeatureMatrix) -> ModelResult<FeatureMatrix> {
        ensure_width(self.mean.len(), features.width())?;
        let rows = features
            .rows
            .iter()
            .map(|row| {
                ensure_width(self.mean.len(), row.len())?;
                Ok(row
                    .iter()
                    .zip(self.mean.iter().zip(&self.scale))
                    .map(|(value, (mean, scale))| {
                        let divisor = if *scale == 0.0 { 1.0 } else { *scale };
                        (value - mean) / divisor
                    })
                    .collect())
            })
            .collect::<ModelResult<Vec<Vec<f64>>>>()?;

        Ok(FeatureMatrix {
            columns: features.columns.clone(),
            rows,
        })
    }
}

/// Nearest-centroid cluster assignment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KMeansArtifact {
    /// One centroid per cluster, all the same width
    pub centroids: Vec<Vec<f64>>,
}

impl KMeansArtifact {
    fn width(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }

    fn nearest(&self, row: &[f64]) -> usize {
        let mut best = (0_usize, f64::INFINITY);
        for (index, centroid) in self.centroids.iter().enumerate() {
            let distance: f64 = centroid
                .iter()
                .zip(row)
                .map(|(c, x)| (c - x) * (c - x))
                .sum();
            if distance < best.1 {
                best = (index, distance);
            }
        }
        best.0
    }
}

impl JsonArtifact for KMeansArtifact {
    fn validate(&self) -> ModelResult<()> {
        let width = self.width();
        if width == 0 {
            return Err(schema("k-means model has no centroids"));
        }
        if self.centroids.iter().any(|centroid| centroid.len() != width) {
            return Err(schema("k-means centroids are ragged"));
        }
        Ok(())
    }
}

impl ClusterAssigner for KMeansArtifact {
    fn predict(&self, features: &FeatureMatrix) -> ModelResult<Vec<i64>> {
        features
            .rows
            .iter()
            .map(|row| {
                ensure_width(self.width(), row.len())?;
                i64::try_from(self.nearest(row))
                    .map_err(|_| schema("cluster index exceeds label range"))
            })
            .collect()
    }
}

/// A standardized numeric input column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericColumn {
    /// Record key
    pub name: String,
    /// Training mean
    pub mean: f64,
    /// Training scale; zero is treated as one
    pub scale: f64,
}

/// A one-hot encoded categorical input column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoricalColumn {
    /// Record key
    pub name: String,
    /// Known categories, in output order
    pub categories: Vec<String>,
}

/// Column transformer for the calorie feature record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaloriePreprocessorArtifact {
    /// Numeric columns, emitted first
    #[serde(default)]
    pub numeric: Vec<NumericColumn>,
    /// Categorical columns, emitted after the numerics
    #[serde(default)]
    pub categorical: Vec<CategoricalColumn>,
}

impl CaloriePreprocessorArtifact {
    fn numeric_value(record: &FeatureRecord, name: &str) -> ModelResult<f64> {
        match record.get(name) {
            Some(FeatureValue::Number(value)) => Ok(*value),
            Some(FeatureValue::Text(_)) => Err(ModelError::FeatureType(name.to_owned())),
            None => Err(ModelError::MissingFeature(name.to_owned())),
        }
    }

    fn text_value<'a>(record: &'a FeatureRecord, name: &str) -> ModelResult<&'a str> {
        match record.get(name) {
            Some(FeatureValue::Text(value)) => Ok(value),
            Some(FeatureValue::Number(_)) => Err(ModelError::FeatureType(name.to_owned())),
            None => Err(ModelError::MissingFeature(name.to_owned())),
        }
    }
}

impl JsonArtifact for CaloriePreprocessorArtifact {
    fn validate(&self) -> ModelResult<()> {
        if self.numeric.is_empty() && self.categorical.is_empty() {
            return Err(schema("calorie preprocessor has no columns"));
        }
        if let Some(column) = self.categorical.iter().find(|c| c.categories.is_empty()) {
            return Err(schema(format!(
                "categorical column {} has no categories",
                column.name
            )));
        }
        Ok(())
    }
}

impl CaloriePreprocessor for CaloriePreprocessorArtifact {
    fn transform(&self, record: &FeatureRecord) -> ModelResult<FeatureMatrix> {
        let mut columns = Vec::new();
        let mut row = Vec::new();

        for column in &self.numeric {
            let value = Self::numeric_value(record, &column.name)?;
            let divisor = if column.scale == 0.0 { 1.0 } else { column.scale };
            columns.push(column.name.clone());
            row.push((value - column.mean) / divisor);
        }

        for column in &self.categorical {
            let value = Self::text_value(record, &column.name)?;
            for category in &column.categories {
                columns.push(format!("{}={category}", column.name));
                row.push(if category == value { 1.0 } else { 0.0 });
            }
        }

        Ok(FeatureMatrix::single_row(columns, row))
    }
}

/// Regression tree in parallel-array layout
///
/// Node `i` is a leaf when `children_left[i] == -1`; otherwise go left when
/// `x[feature[i]] <= threshold[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionTreeArtifact {
    /// Left child per node, -1 for leaves
    pub children_left: Vec<i64>,
    /// Right child per node, -1 for leaves
    pub children_right: Vec<i64>,
    /// Split feature index per node
    pub feature: Vec<i64>,
    /// Split threshold per node
    pub threshold: Vec<f64>,
    /// Leaf prediction per node
    pub value: Vec<f64>,
}

impl DecisionTreeArtifact {
    fn required_width(&self) -> usize {
        self.children_left
            .iter()
            .zip(&self.feature)
            .filter(|(left, _)| **left != LEAF)
            .map(|(_, feature)| *feature as usize + 1)
            .max()
            .unwrap_or(0)
    }

    fn walk(&self, row: &[f64]) -> f64 {
        let mut node = 0;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if row[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        self.value[node]
    }
}

impl JsonArtifact for DecisionTreeArtifact {
    fn validate(&self) -> ModelResult<()> {
        let nodes = self.children_left.len();
        if nodes == 0 {
            return Err(schema("decision tree has no nodes"));
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != nodes)
        {
            return Err(schema("decision tree arrays differ in length"));
        }

        for index in 0..nodes {
            let (left, right) = (self.children_left[index], self.children_right[index]);
            if left == LEAF {
                if right != LEAF {
                    return Err(schema(format!("node {index} has only a right child")));
                }
                continue;
            }
            // children always follow their parent, so every walk terminates
            let in_range = |child: i64| {
                usize::try_from(child).is_ok_and(|child| child > index && child < nodes)
            };
            if !in_range(left) || !in_range(right) {
                return Err(schema(format!("node {index} has an invalid child index")));
            }
            if self.feature[index] < 0 {
                return Err(schema(format!("node {index} has a negative feature index")));
            }
        }
        Ok(())
    }
}

impl CalorieRegressor for DecisionTreeArtifact {
    fn predict(&self, features: &FeatureMatrix) -> ModelResult<Vec<f64>> {
        let required = self.required_width();
        features
            .rows
            .iter()
            .map(|row| {
                if row.len() < required {
                    return Err(ModelError::WidthMismatch {
                        expected: required,
                        actual: row.len(),
                    });
                }
                Ok(self.walk(row))
            })
            .collect()
    }
}

/// Bag-of-words encoder over a fixed token vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VocabularyEncoderArtifact {
    /// Embedding width
    pub dimension: usize,
    /// Lowercase token to vector
    pub vocabulary: HashMap<String, Vec<f64>>,
}

impl VocabularyEncoderArtifact {
    fn embed(&self, text: &str) -> Vec<f64> {
        let mut sum = vec![0.0; self.dimension];
        let mut known = 0_usize;

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
        {
            if let Some(vector) = self.vocabulary.get(&token.to_lowercase()) {
                for (total, value) in sum.iter_mut().zip(vector) {
                    *total += value;
                }
                known += 1;
            }
        }

        if known == 0 {
            return sum;
        }
        let norm = sum.iter().map(|value| value * value).sum::<f64>().sqrt();
        let divisor = norm.max(NORM_EPSILON);
        sum.into_iter().map(|value| value / divisor).collect()
    }
}

impl JsonArtifact for VocabularyEncoderArtifact {
    fn validate(&self) -> ModelResult<()> {
        if self.dimension == 0 {
            return Err(schema("text encoder dimension is zero"));
        }
        if let Some(token) = self
            .vocabulary
            .iter()
            .find_map(|(token, vector)| (vector.len() != self.dimension).then_some(token))
        {
            return Err(schema(format!(
                "token {token} does not have {} components",
                self.dimension
            )));
        }
        Ok(())
    }
}

impl TextEncoder for VocabularyEncoderArtifact {
    fn encode(&self, texts: &[&str]) -> ModelResult<Vec<Vec<f64>>> {
        Ok(texts.iter().map(|text| self.embed(text)).collect())
    }
}
