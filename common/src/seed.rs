//! # Seed Derivation
//!
//! Expands a text seed into the list of addresses a scan will probe.
//!
//! The seed is trimmed and hashed with SHA-256. Each derived address is
//! `192.168.X.Y` where `X` and `Y` come from two neighbouring digest bytes:
//!
//! * `X = digest[i % 32] % 255 + 1` (1..=255)
//! * `Y = digest[(i + 1) % 32] % 254 + 1` (1..=254)
//!
//! The local supplement `192.168.1.1-10` is always appended, and the result is
//! deduplicated keeping first occurrences. The same seed yields the same list on
//! every machine, since nothing besides the seed bytes feeds the computation.

use std::net::Ipv4Addr;

use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::DEFAULT_COUNT;
use crate::error::ScanError;
use crate::network::candidate::CandidateList;
use crate::network::range::Ipv4Range;

/// Seed preset by the interactive front ends.
pub const DEFAULT_SEED: &str = "mein-geheimer-schluessel";

/// Appended to every derivation.
pub const LOCAL_SUPPLEMENT: Ipv4Range =
    Ipv4Range::new(Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 10));

/// Used in place of the derivation when no digest is available.
pub const FALLBACK: Ipv4Range =
    Ipv4Range::new(Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 25));

const SEED_WORDS: &[&str] = &[
    "stellar", "quantum", "nexus", "cipher", "matrix", "beacon", "synapse", "vertex", "prism",
    "zenith", "aurora", "cosmos",
];

/// Derives [`DEFAULT_COUNT`] candidates from `seed`.
pub fn derive_default(seed: &str) -> Result<CandidateList, ScanError> {
    derive(seed, DEFAULT_COUNT)
}

/// Derives `count` addresses from `seed`, appends the local supplement and deduplicates.
///
/// Fails only with [`ScanError::InvalidSeed`] when `seed` is blank.
pub fn derive(seed: &str, count: usize) -> Result<CandidateList, ScanError> {
    let seed: &str = normalize(seed)?;
    let digest = Sha256::digest(seed.as_bytes());
    let candidates = expand_digest(&digest, count).with_seed(seed);
    debug!(seed, count, candidates = candidates.len(), "derived candidate list");
    Ok(candidates)
}

/// Trims `seed`, rejecting it when nothing is left.
pub fn normalize(seed: &str) -> Result<&str, ScanError> {
    let trimmed = seed.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidSeed);
    }
    Ok(trimmed)
}

/// Turns raw digest bytes into a candidate list.
///
/// An empty digest means hashing produced nothing usable; the fixed
/// [`FALLBACK`] list is returned instead, without the supplement.
pub fn expand_digest(digest: &[u8], count: usize) -> CandidateList {
    if digest.is_empty() {
        debug!("empty digest, using fallback candidates");
        return FALLBACK.iter().collect();
    }

    // Index i and i + len produce the same address, so later indices add nothing.
    (0..count.min(digest.len()))
        .map(|i| {
            let third = digest[i % digest.len()] % 255 + 1;
            let fourth = digest[(i + 1) % digest.len()] % 254 + 1;
            Ipv4Addr::new(192, 168, third, fourth)
        })
        .chain(LOCAL_SUPPLEMENT.iter())
        .collect()
}

/// Produces a fresh seed such as `nexus-4821`.
pub fn random_seed() -> String {
    let mut rng = rand::rng();
    let word = SEED_WORDS[rng.random_range(0..SEED_WORDS.len())];
    let number: u16 = rng.random_range(1000..=9999);
    format!("{word}-{number}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
