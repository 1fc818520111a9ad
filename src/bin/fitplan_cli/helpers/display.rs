// ABOUTME: Output formatting helpers for fitplan-cli
// ABOUTME: Model status table and the demo-mode notice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan::ml::{ArtifactSource, ArtifactStatus};

/// Print the load outcome of every model role
pub fn display_model_statuses(statuses: &[ArtifactStatus]) {
    println!("\nModel artifacts");
    println!("{}", "=".repeat(80));
    println!("{:<22} {:<8} Path", "Role", "Status");
    println!("{}", "-".repeat(80));

    for status in statuses {
        let label = match &status.source {
            ArtifactSource::Loaded => "loaded",
            ArtifactSource::Stub { .. } => "stub",
            ArtifactSource::Custom => "custom",
        };
        println!(
            "{:<22} {:<8} {}",
            status.kind.name(),
            label,
            status.path.display()
        );
        if let ArtifactSource::Stub { reason } = &status.source {
            println!("{:<22} reason: {reason}", "");
        }
    }
    println!("{}", "=".repeat(80));
}

/// Tell the user that some predictions come from stubs
pub fn display_demo_notice(stubbed: usize, total: usize) {
    eprintln!(
        "Demo mode: {stubbed} of {total} model artifacts are running on deterministic stubs; \
         fitness level and calorie targets are approximations."
    );
}
