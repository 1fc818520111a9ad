// ABOUTME: Feature rows exchanged with predictive model artifacts
// ABOUTME: Named-column numeric matrices and structured single-row records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

/// Column order of the cluster feature row; trained artifacts depend on it positionally
pub const CLUSTER_FEATURE_COLUMNS: [&str; 7] = [
    "age",
    "bmi",
    "activity_level_active",
    "activity_level_light",
    "activity_level_moderate",
    "activity_level_sedentary",
    "activity_level_very active",
];

/// Key set of the calorie feature record, in record order
pub const CALORIE_FEATURE_KEYS: [&str; 9] = [
    "age",
    "gender",
    "height_cm",
    "weight_kg",
    "activity_level",
    "fitness_goal",
    "bmi",
    "bmr",
    "tdee",
];

/// Row-major numeric matrix with named columns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureMatrix {
    /// Column names, one per value in each row
    pub columns: Vec<String>,
    /// Rows of values
    pub rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Build a single-row matrix
    #[must_use]
    pub fn single_row(columns: Vec<String>, row: Vec<f64>) -> Self {
        Self {
            columns,
            rows: vec![row],
        }
    }

    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// First row, if any
    #[must_use]
    pub fn first_row(&self) -> Option<&[f64]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Index of a named column
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// A single structured field value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Numeric field
    Number(f64),
    /// Categorical field
    Text(String),
}

/// One structured row: ordered `(key, value)` pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureRecord {
    fields: Vec<(String, FeatureValue)>,
}

impl FeatureRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a numeric field
    #[must_use]
    pub fn number(mut self, key: &str, value: f64) -> Self {
        self.fields.push((key.to_owned(), FeatureValue::Number(value)));
        self
    }

    /// Append a categorical field
    #[must_use]
    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((key.to_owned(), FeatureValue::Text(value.into())));
        self
    }

    /// Look up a field by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Field keys in record order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Keep only numeric fields, in record order, as a single-row matrix
    #[must_use]
    pub fn numeric_matrix(&self) -> FeatureMatrix {
        let (columns, row) = self
            .fields
            .iter()
            .filter_map(|(name, value)| match value {
                FeatureValue::Number(number) => Some((name.clone(), *number)),
                FeatureValue::Text(_) => None,
            })
            .unzip();
        FeatureMatrix::single_row(columns, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_matrix_drops_text_fields() {
        let record = FeatureRecord::new()
            .number("age", 30.0)
            .text("gender", "Female")
            .number("tdee", 2100.0);

        let matrix = record.numeric_matrix();

        assert_eq!(matrix.columns, vec!["age".to_owned(), "tdee".to_owned()]);
        assert_eq!(matrix.first_row(), Some(&[30.0, 2100.0][..]));
        assert_eq!(matrix.column_index("tdee"), Some(1));
        assert_eq!(matrix.column_index("gender"), None);
    }
}
