//! Habitat/species assignment optimizer.
//!
//! Proposes which catalogued species should be managed in which monitored
//! habitat, using a heuristic compatibility score and one of two search
//! strategies:
//!
//! - **Compatibility** ([`compat`]): additive `[0, 1]` score from zone
//!   preference, area adequacy, and conservation status.
//! - **Exhaustive search**: backtracking over every admissible placement,
//!   keeping the best total. Each species is placed at most once.
//! - **Greedy pass**: one sweep over all pairs in descending score order.
//! - **Validation** ([`validation`]): duplicate-id and area checks for
//!   callers that want to reject bad data up front.
//!
//! # Architecture
//!
//! The crate is a pure computation. Loading habitats and species, and
//! persisting or displaying the proposed assignments, belong to the
//! surrounding application. Each run borrows its inputs, owns its search
//! state, and shares nothing with other runs.
//!
//! # Feature Flags
//!
//! - `serde`: serialization of models, configuration, and results
//! - `wasm`: JavaScript bindings (implies `serde`)

pub mod compat;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod validation;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use optimizer::{
    run_exhaustive, run_greedy, AssignmentConfig, AssignmentOptimizer, AssignmentResult, Strategy,
};
