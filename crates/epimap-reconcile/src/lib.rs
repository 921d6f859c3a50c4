//! Reconciliation of the raw feeds into the canonical model.
//!
//! Everything here is a pure function from feed payloads (plus lookup
//! tables already built) to model types. Session initialization owns the
//! call order; no state lives at module level.

pub mod cases;
pub mod code_table;
pub mod error;
pub mod neighbours;
pub mod timeseries;

pub use cases::map_cases;
pub use code_table::{build_code_table, default_overrides};
pub use error::{ReconcileError, Result};
pub use neighbours::build_adjacency;
pub use timeseries::{date_key, reconstruct};
