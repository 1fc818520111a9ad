// ABOUTME: Generate command for fitplan-cli
// ABOUTME: Computes the full plan result for one profile and prints it as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::path::Path;

use fitplan::errors::AppResult;
use fitplan::ml::{ArtifactKind, ModelRegistry};
use fitplan::pipeline::PlanPipeline;
use tracing::info;

use crate::helpers::display::display_demo_notice;
use crate::helpers::files::{read_profile, write_output};

type Result<T> = AppResult<T>;

/// Print the plan for the profile at `profile_path`
pub fn run(models: &ModelRegistry, profile_path: &Path, pretty: bool) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let plan = PlanPipeline::new(models).compute(&profile)?;

    info!(
        profile = %profile_path.display(),
        fitness_level = %plan.fitness_level,
        "Plan generated"
    );

    if plan.demo_mode {
        display_demo_notice(plan.model_warnings.len(), ArtifactKind::ALL.len());
    }

    let json = if pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };
    write_output(None, &json)
}
