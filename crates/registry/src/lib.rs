//! Deterministic index table for entity state types.
//!
//! Every state type linked into the process gets a compact `i16` index so it
//! can be referenced over the network or in saved data by two bytes instead of
//! a type path. Peers build the table independently and agree on it because
//! the built-in catalog is inserted in sorted order and later registrations
//! only append.
//!
//! # Modules
//!
//! - [`core`] - state types, descriptors, the [`Registry`], catalogs, diagnostics, hashing
//! - [`db`] - the process-wide registry and its [`BootstrapSeeder`]
//! - [`reference`] - [`StateReference`], the serializable name handle
//! - [`config`] - TOML configuration
//!
//! # Declaring States
//!
//! ```ignore
//! use estate_registry::{EntityState, register_state};
//!
//! pub struct Charge;
//! impl EntityState for Charge {}
//! register_state!(Charge);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod reference;

pub use config::{BootstrapConfig, ConfigError, RegistryConfig, StatesConfig};
pub use crate::core::{
	CandidateFaults, Diagnostic, DiagnosticKind, DiagnosticSink, EntityState, InventoryCatalog,
	Lookup, LookupKey, MAX_STATES, MemorySink, Registry, RegistryError, Severity, StateDescriptor,
	StateFlags, StateRegistration, StateType, StaticCatalog, TableHash, TracingSink, TypeCatalog,
	UNASSIGNED_INDEX,
};
pub use db::builtins::Uninitialized;
pub use db::{BootstrapSeeder, global, init_global};
#[doc(hidden)]
pub use inventory;
pub use reference::{DegradedReference, StateReference};
