// ABOUTME: Profile file reading and output writing for fitplan-cli
// ABOUTME: Maps I/O and JSON failures to errors naming the file involved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fs;
use std::path::Path;

use fitplan::errors::{AppError, AppResult};
use fitplan::models::UserProfile;
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("failed to read {}: {e}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::invalid_json(&path.display().to_string(), e))
}

/// Read one profile
pub fn read_profile(path: &Path) -> AppResult<UserProfile> {
    read_json(path)
}

/// Read a JSON array of profiles
pub fn read_profiles(path: &Path) -> AppResult<Vec<UserProfile>> {
    read_json(path)
}

/// Write `contents` to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> AppResult<()> {
    match path {
        Some(path) => fs::write(path, contents).map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", path.display())).with_source(e)
        }),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}
