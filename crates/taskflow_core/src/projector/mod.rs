//! View projector: pure derivations from store contents plus session state.
//!
//! # Responsibility
//! - Turn flat entity collections into display-ready structures.
//! - Stay free of side effects so every projection is testable in isolation.
//!
//! # Invariants
//! - Every operation is total: empty input, unknown ids and missing optional
//!   fields degrade to empty results or zero counts.
//! - Input order is preserved unless an operation documents otherwise.

pub mod calendar;
pub mod columns;
pub mod filters;
pub mod stats;
pub mod views;
