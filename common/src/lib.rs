//! # seedscan common
//!
//! Shared building blocks for the `seedscan` workspace.
//!
//! * **[`seed`]**: Turns a text seed into a deterministic [`network::candidate::CandidateList`].
//! * **[`scanning`]**: Value types exchanged between the scan engine and its callers.
//! * **[`error`]**: The typed error signals surfaced to callers.
//! * **[`config`]**: Presentation flags and engine defaults.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod scanning;
pub mod seed;
