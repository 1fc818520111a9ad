// ABOUTME: Reproducible random number generators seeded from stable input strings
// ABOUTME: SHA-256 of the seed parts feeds a ChaCha8 generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Separator hashed between parts so `["ab", "c"]` and `["a", "bc"]` differ
const PART_SEPARATOR: [u8; 1] = [0x1f];

/// Derive a 32-byte seed from an ordered list of parts
#[must_use]
pub fn seed_from_parts(parts: &[&str]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(PART_SEPARATOR);
    }
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&hasher.finalize());
    seed
}

/// Generator whose output depends only on `parts`, identical across runs and platforms
#[must_use]
pub fn seeded_rng(parts: &[&str]) -> ChaCha8Rng {
    ChaCha8Rng::from_seed(seed_from_parts(parts))
}
