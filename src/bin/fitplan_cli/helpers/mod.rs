// ABOUTME: Re-exports helper modules for fitplan-cli
// ABOUTME: Provides profile file I/O and terminal display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

pub mod display;
pub mod files;
