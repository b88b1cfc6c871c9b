//! Serializable handle to a registered state.
//!
//! A [`StateReference`] persists only the canonical name, so saved data and
//! config files stay valid across restarts even if indices shift. The name is
//! resolved through a [`Registry`] on every access; nothing is cached.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{
	CandidateFaults, DiagnosticKind, Lookup, LookupKey, Registry, RegistryError, Severity,
	StateDescriptor, StateType,
};
use crate::db;

/// Name-only reference to a state, resolved against a registry on demand.
///
/// Serializes as a bare string. Methods without an `_in` suffix use the
/// global registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateReference {
	name: String,
}

/// A reference built from a type that could not be resolved.
///
/// `reference` is still usable; it holds the empty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("state reference left unresolved: {error}")]
pub struct DegradedReference {
	pub reference: StateReference,
	#[source]
	pub error: RegistryError,
}

impl DegradedReference {
	pub fn into_reference(self) -> StateReference {
		self.reference
	}
}

impl StateReference {
	/// Stores `name` verbatim; it is checked only when resolved.
	pub fn from_name(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn from_type(ty: Option<StateType>) -> Result<Self, DegradedReference> {
		Self::from_type_in(db::global(), ty)
	}

	/// Resolves `ty` immediately and stores its canonical name.
	pub fn from_type_in(registry: &Registry, ty: Option<StateType>) -> Result<Self, DegradedReference> {
		let mut reference = Self::default();
		match reference.set_type_in(registry, ty) {
			Ok(()) => Ok(reference),
			Err(error) => Err(DegradedReference { reference, error }),
		}
	}

	pub fn from_index(index: i16) -> Result<Self, RegistryError> {
		Self::from_index_in(db::global(), index)
	}

	/// Resolves `index` immediately; an unassigned index is an error.
	pub fn from_index_in(registry: &Registry, index: i16) -> Result<Self, RegistryError> {
		let descriptor = registry.lookup_by_index(index)?;
		Ok(Self::from_name(descriptor.name()))
	}

	/// References the state described by a registered descriptor.
	pub fn from_descriptor(descriptor: &StateDescriptor) -> Result<Self, RegistryError> {
		if !descriptor.is_valid() {
			return Err(RegistryError::Unassigned {
				name: descriptor.name().to_owned(),
			});
		}
		Ok(Self::from_name(descriptor.name()))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_empty()
	}

	pub fn state_type(&self) -> Result<StateType, RegistryError> {
		self.state_type_in(db::global())
	}

	/// Looks the stored name up again and returns the live type.
	pub fn state_type_in(&self, registry: &Registry) -> Result<StateType, RegistryError> {
		registry.lookup_by_name(&self.name).map(|d| d.state_type())
	}

	pub fn resolve(&self) -> Lookup {
		self.resolve_in(db::global())
	}

	/// Non-failing resolution; a miss is reported and yields the sentinel.
	pub fn resolve_in(&self, registry: &Registry) -> Lookup {
		let lookup = registry.try_lookup_by_name(&self.name);
		if !lookup.is_found() {
			registry.report(
				Severity::Error,
				DiagnosticKind::UnresolvedReference,
				format!("could not find state for name {:?}", self.name),
			);
		}
		lookup
	}

	pub fn set_type(&mut self, ty: Option<StateType>) -> Result<(), RegistryError> {
		self.set_type_in(db::global(), ty)
	}

	/// Points the reference at `ty`. On failure the stored name is kept.
	pub fn set_type_in(&mut self, registry: &Registry, ty: Option<StateType>) -> Result<(), RegistryError> {
		if let Lookup::Found(descriptor) = registry.try_lookup_by_type(ty.as_ref()) {
			self.name = descriptor.name().to_owned();
			return Ok(());
		}

		let Some(ty) = ty else {
			registry.report(
				Severity::Error,
				DiagnosticKind::NullType,
				"state reference cannot be set to a null type".to_owned(),
			);
			return Err(RegistryError::InvalidCandidate {
				name: "<null>".to_owned(),
				faults: CandidateFaults::NULL,
			});
		};
		registry.report(
			Severity::Error,
			DiagnosticKind::UnresolvedReference,
			format!("unregistered or invalid state type {}", ty.full_name()),
		);
		Err(RegistryError::NotFound {
			key: LookupKey::Type(ty.full_name()),
		})
	}

	pub fn set_name(&mut self, name: &str) -> Result<(), RegistryError> {
		self.set_name_in(db::global(), name)
	}

	/// Points the reference at a registered name. On failure the stored name is kept.
	pub fn set_name_in(&mut self, registry: &Registry, name: &str) -> Result<(), RegistryError> {
		match registry.try_lookup_by_name(name) {
			Lookup::Found(descriptor) => {
				self.name = descriptor.name().to_owned();
				Ok(())
			}
			Lookup::Missing(_) => {
				registry.report(
					Severity::Error,
					DiagnosticKind::UnresolvedReference,
					format!("could not find state for name {name:?}"),
				);
				Err(RegistryError::NotFound {
					key: LookupKey::Name(name.to_owned()),
				})
			}
		}
	}
}

impl fmt::Display for StateReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
