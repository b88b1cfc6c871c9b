#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! The state index table.
//!
//! # Mental Model
//!
//! 1. **Seed:** [`crate::db::BootstrapSeeder`] inserts the built-in catalog in sorted order.
//! 2. **Extend:** plugins call [`Registry::add`] (or [`Registry::add_catalog`]); new states are
//!    appended, existing indices never move.
//! 3. **Consume:** peers exchange `i16` indices and compare [`TableHash`] digests to confirm
//!    they built the same table.
//!
//! # Concurrency
//!
//! - **Reads:** shared lock; lookups run concurrently with each other.
//! - **Writes:** exclusive lock around the check-and-append, so the sequence and both maps
//!   change together.
//! - **Hash:** upgradable read; the digest is recomputed under the exclusive lock only when an
//!   insertion cleared it.
//!
//! # Invariants
//!
//! - Index equals insertion order and is never reused.
//!   - Enforced in: [`table::Table::insert`].
//!   - Tested by: `tests::indices_follow_registration_order`.
//! - Canonical names and types are unique.
//!   - Enforced in: [`table::Table::insert`].
//!   - Tested by: `tests::duplicate_type_leaves_table_unchanged`, `tests::duplicate_name_is_rejected`.
//! - Count never exceeds the configured capacity (at most [`MAX_STATES`]).
//!   - Enforced in: [`table::Table::insert`].
//!   - Tested by: `tests::add_beyond_capacity_fails`.

mod lookup;
mod table;

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

pub use lookup::Lookup;
use table::{Inserted, Table};

use super::catalog::{TypeCatalog, candidate_faults, ordered_candidates};
use super::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink};
use super::error::{CandidateFaults, LookupKey, RegistryError};
use super::{MAX_STATES, StateDescriptor, StateType, TableHash};
use crate::config::RegistryConfig;
use crate::db::builtins::Uninitialized;

/// Name reported for a missing candidate type.
const NULL_TYPE_NAME: &str = "<null>";

/// Authoritative mapping between state types, canonical names and indices.
pub struct Registry {
	table: RwLock<Table>,
	sentinel: Arc<StateDescriptor>,
	capacity: i16,
	sink: Arc<dyn DiagnosticSink>,
}

impl Registry {
	/// Creates an empty registry reporting through `tracing`.
	pub fn new(config: &RegistryConfig) -> Self {
		Self::with_sink(config, Arc::new(TracingSink))
	}

	/// Creates an empty registry reporting through `sink`.
	pub fn with_sink(config: &RegistryConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
		Self {
			table: RwLock::new(Table::default()),
			sentinel: Arc::new(StateDescriptor::sentinel(StateType::of::<Uninitialized>())),
			capacity: config.capacity.clamp(0, MAX_STATES),
			sink,
		}
	}

	/// Maximum number of states this registry accepts.
	pub fn capacity(&self) -> i16 {
		self.capacity
	}

	pub fn count(&self) -> usize {
		self.table.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.count() == 0
	}

	/// Canonical names in index order.
	pub fn names(&self) -> Vec<Arc<str>> {
		self.table
			.read()
			.defs()
			.iter()
			.map(|d| d.shared_name())
			.collect()
	}

	/// Registered descriptors in index order.
	pub fn descriptors(&self) -> Vec<Arc<StateDescriptor>> {
		self.table.read().defs().to_vec()
	}

	/// Placeholder returned by failed non-failing lookups.
	pub fn sentinel(&self) -> Arc<StateDescriptor> {
		Arc::clone(&self.sentinel)
	}

	pub fn lookup_by_type(&self, ty: &StateType) -> Result<Arc<StateDescriptor>, RegistryError> {
		self.table
			.read()
			.get_type(ty.type_id())
			.cloned()
			.ok_or(RegistryError::NotFound {
				key: LookupKey::Type(ty.full_name()),
			})
	}

	pub fn lookup_by_index(&self, index: i16) -> Result<Arc<StateDescriptor>, RegistryError> {
		self.table
			.read()
			.get_index(index)
			.cloned()
			.ok_or(RegistryError::NotFound {
				key: LookupKey::Index(index),
			})
	}

	pub fn lookup_by_name(&self, name: &str) -> Result<Arc<StateDescriptor>, RegistryError> {
		self.table
			.read()
			.get_name(name)
			.cloned()
			.ok_or_else(|| RegistryError::NotFound {
				key: LookupKey::Name(name.to_owned()),
			})
	}

	/// Looks up a type without failing; invalid candidates miss silently.
	pub fn try_lookup_by_type(&self, ty: Option<&StateType>) -> Lookup {
		let Some(ty) = ty.filter(|ty| candidate_faults(Some(*ty)).is_empty()) else {
			return Lookup::Missing(self.sentinel());
		};
		self.found_or_sentinel(self.table.read().get_type(ty.type_id()).cloned())
	}

	/// Looks up an index without failing; anything outside `0..count` misses.
	pub fn try_lookup_by_index(&self, index: i16) -> Lookup {
		self.found_or_sentinel(self.table.read().get_index(index).cloned())
	}

	/// Looks up a name without failing; an empty name is reported as a warning.
	pub fn try_lookup_by_name(&self, name: &str) -> Lookup {
		if name.is_empty() {
			self.report(
				Severity::Warning,
				DiagnosticKind::EmptyName,
				"trying to look up a state with an empty name".to_owned(),
			);
		}
		self.found_or_sentinel(self.table.read().get_name(name).cloned())
	}

	pub fn type_to_index(&self, ty: &StateType) -> Result<i16, RegistryError> {
		self.lookup_by_type(ty).map(|d| d.index())
	}

	pub fn index_to_type(&self, index: i16) -> Result<StateType, RegistryError> {
		self.lookup_by_index(index).map(|d| d.state_type())
	}

	/// Returns true if `ty` may be registered.
	///
	/// Unless `quiet`, every failed condition is reported as its own error.
	pub fn is_valid_candidate(&self, ty: Option<&StateType>, quiet: bool) -> bool {
		let faults = candidate_faults(ty);
		if !quiet {
			self.report_faults(ty, faults);
		}
		faults.is_empty()
	}

	/// Registers `ty` under its full type name.
	pub fn add(&self, ty: StateType) -> Result<Arc<StateDescriptor>, RegistryError> {
		self.add_descriptor(StateDescriptor::new(ty))
	}

	/// Registers `descriptor`, replacing any index it already carried.
	pub fn add_descriptor(&self, descriptor: StateDescriptor) -> Result<Arc<StateDescriptor>, RegistryError> {
		let ty = descriptor.state_type();
		if !self.is_valid_candidate(Some(&ty), false) {
			return Err(RegistryError::InvalidCandidate {
				name: ty.full_name().to_owned(),
				faults: candidate_faults(Some(&ty)),
			});
		}

		let result = self.table.write().insert(descriptor, self.capacity);
		match result {
			Ok(inserted) => Ok(self.finish_insert(inserted)),
			Err(err) => {
				let kind = match err {
					RegistryError::CapacityExceeded { .. } => DiagnosticKind::CapacityExceeded,
					_ => DiagnosticKind::DuplicateRegistration,
				};
				self.report(Severity::Error, kind, err.to_string());
				Err(err)
			}
		}
	}

	/// Registers `ty` without failing; only duplicates are reported.
	pub fn try_add(&self, ty: StateType) -> Lookup {
		self.try_add_descriptor(StateDescriptor::new(ty))
	}

	/// Registers `descriptor` without failing; only duplicates are reported.
	pub fn try_add_descriptor(&self, descriptor: StateDescriptor) -> Lookup {
		if !self.is_valid_candidate(Some(&descriptor.state_type()), true) {
			return Lookup::Missing(self.sentinel());
		}

		let result = self.table.write().insert(descriptor, self.capacity);
		match result {
			Ok(inserted) => Lookup::Found(self.finish_insert(inserted)),
			Err(err @ RegistryError::DuplicateRegistration { .. }) => {
				self.report(
					Severity::Error,
					DiagnosticKind::DuplicateRegistration,
					err.to_string(),
				);
				Lookup::Missing(self.sentinel())
			}
			Err(_) => Lookup::Missing(self.sentinel()),
		}
	}

	/// Registers every valid candidate of `catalog` in table order.
	///
	/// Plugins that load the same catalog on every peer extend the table
	/// identically, regardless of how the catalog enumerates.
	pub fn add_catalog(&self, catalog: &dyn TypeCatalog) -> Vec<Result<Arc<StateDescriptor>, RegistryError>> {
		ordered_candidates(catalog)
			.into_iter()
			.map(|ty| self.add(ty))
			.collect()
	}

	/// Digest over all canonical names in index order.
	///
	/// Cached until the next successful insertion.
	pub fn compute_table_hash(&self) -> TableHash {
		let table = self.table.upgradable_read();
		if let Some(hash) = table.hash_cached() {
			return hash;
		}
		RwLockUpgradableReadGuard::upgrade(table).hash()
	}

	/// Returns true if the next [`Self::compute_table_hash`] call will rehash.
	pub fn is_hash_dirty(&self) -> bool {
		self.table.read().hash_cached().is_none()
	}

	pub(crate) fn report(&self, severity: Severity, kind: DiagnosticKind, message: String) {
		self.sink.report(&Diagnostic {
			severity,
			kind,
			message,
		});
	}

	fn report_faults(&self, ty: Option<&StateType>, faults: CandidateFaults) {
		let name = ty.map_or(NULL_TYPE_NAME, StateType::full_name);
		if faults.contains(CandidateFaults::NULL) {
			self.report(
				Severity::Error,
				DiagnosticKind::NullType,
				"state type was null".to_owned(),
			);
		}
		if faults.contains(CandidateFaults::NOT_STATE) {
			self.report(
				Severity::Error,
				DiagnosticKind::NotAState,
				format!("type {name} does not implement EntityState"),
			);
		}
		if faults.contains(CandidateFaults::ABSTRACT) {
			self.report(
				Severity::Error,
				DiagnosticKind::AbstractType,
				format!("type {name} is abstract"),
			);
		}
	}

	fn finish_insert(&self, inserted: Inserted) -> Arc<StateDescriptor> {
		if let Some(previous) = inserted.overwritten {
			self.report(
				Severity::Warning,
				DiagnosticKind::IndexOverwritten,
				format!(
					"state {} already had index {previous} on registration, it was overwritten with {}",
					inserted.descriptor.name(),
					inserted.descriptor.index()
				),
			);
		}
		inserted.descriptor
	}

	fn found_or_sentinel(&self, descriptor: Option<Arc<StateDescriptor>>) -> Lookup {
		match descriptor {
			Some(descriptor) => Lookup::Found(descriptor),
			None => Lookup::Missing(self.sentinel()),
		}
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("count", &self.count())
			.field("capacity", &self.capacity)
			.finish_non_exhaustive()
	}
}
