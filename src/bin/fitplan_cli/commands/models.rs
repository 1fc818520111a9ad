// ABOUTME: Models command for fitplan-cli
// ABOUTME: Reports which artifacts loaded and which run on stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan::ml::{ArtifactKind, ModelRegistry};

use crate::helpers::display::{display_demo_notice, display_model_statuses};

/// Print the model status table
pub fn run(models: &ModelRegistry) {
    display_model_statuses(models.statuses());

    if models.is_demo_mode() {
        display_demo_notice(models.warnings().len(), ArtifactKind::ALL.len());
    } else {
        println!("All model artifacts loaded.");
    }
}
