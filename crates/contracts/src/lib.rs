//! Domain contracts for the GeM order insight dashboard.
//!
//! Pure record types, filter predicates and analytics rollups shared by the
//! frontend. No I/O lives here: every function is a deterministic computation
//! over in-memory collections.

pub mod analytics;
pub mod domain;
pub mod filters;
pub mod store;
