// ABOUTME: Export command for fitplan-cli
// ABOUTME: Writes the reduced export document for one profile to a file or stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::path::Path;

use fitplan::errors::AppResult;
use fitplan::export::PlanExport;
use fitplan::ml::ModelRegistry;
use fitplan::pipeline::PlanPipeline;
use tracing::info;

use crate::helpers::files::{read_profile, write_output};

type Result<T> = AppResult<T>;

/// Export the plan for the profile at `profile_path`
pub fn run(models: &ModelRegistry, profile_path: &Path, output: Option<&Path>) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let plan = PlanPipeline::new(models).compute(&profile)?;
    let document = PlanExport::new(&profile, &plan).to_json_pretty()?;

    write_output(output, &document)?;

    if let Some(path) = output {
        info!(output = %path.display(), "Plan export written");
    }
    Ok(())
}
