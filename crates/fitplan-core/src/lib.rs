// ABOUTME: Core types and constants for the Fitplan planning engine
// ABOUTME: Foundation crate with error handling, data models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the Fitplan
//! workout and diet planner. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Domain constants (calorie bounds, macro energy, artifact paths)
//! - **models**: User profile, derived metrics, feature rows, and plan structures

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, metrics, features, plans)
pub mod models;
