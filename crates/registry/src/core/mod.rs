//! Shared registry infrastructure.

pub mod catalog;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod hash;
pub mod index;
pub mod state;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use catalog::{InventoryCatalog, StateRegistration, StaticCatalog, TypeCatalog, candidate_faults, ordered_candidates};
pub use descriptor::{MAX_STATES, StateDescriptor, UNASSIGNED_INDEX};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, MemorySink, Severity, TracingSink};
pub use error::{CandidateFaults, LookupKey, RegistryError};
pub use hash::TableHash;
pub use index::{Lookup, Registry};
pub use state::{EntityState, StateFlags, StateType};
