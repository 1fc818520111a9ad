// ABOUTME: Batch command for fitplan-cli
// ABOUTME: Computes plans for many profiles in parallel against one shared model registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::path::Path;

use fitplan::errors::AppResult;
use fitplan::ml::ModelRegistry;
use fitplan::models::PlanResult;
use fitplan::pipeline::PlanPipeline;
use serde::Serialize;
use tracing::{info, warn};

use crate::helpers::files::{read_profiles, write_output};

type Result<T> = AppResult<T>;

/// One batch output entry: a plan, or why the profile was rejected
#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Plan(Box<PlanResult>),
    Rejected {
        index: usize,
        error: String,
        field: Option<String>,
    },
}

/// Print a JSON array with one entry per input profile, in input order
pub fn run(models: &ModelRegistry, profiles_path: &Path, pretty: bool) -> Result<()> {
    let profiles = read_profiles(profiles_path)?;
    let results = PlanPipeline::new(models).compute_batch(&profiles);

    let entries: Vec<BatchEntry> = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(plan) => BatchEntry::Plan(Box::new(plan)),
            Err(err) => {
                warn!(index, field = ?err.field(), "Profile rejected: {}", err.message);
                BatchEntry::Rejected {
                    index,
                    field: err.field().map(str::to_owned),
                    error: err.to_string(),
                }
            }
        })
        .collect();

    let rejected = entries
        .iter()
        .filter(|entry| matches!(entry, BatchEntry::Rejected { .. }))
        .count();
    info!(
        total = entries.len(),
        rejected,
        "Batch plan computation finished"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    write_output(None, &json)
}
