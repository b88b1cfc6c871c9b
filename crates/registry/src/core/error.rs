use std::fmt;

bitflags::bitflags! {
	/// Conditions that disqualify a type from registration.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CandidateFaults: u8 {
		/// No type was supplied.
		const NULL = 1 << 0;
		/// The type does not implement the state capability.
		const NOT_STATE = 1 << 1;
		/// The type is an abstract base state.
		const ABSTRACT = 1 << 2;
	}
}

impl fmt::Display for CandidateFaults {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (label, fault) in [
			("null", Self::NULL),
			("not an entity state", Self::NOT_STATE),
			("abstract", Self::ABSTRACT),
		] {
			if self.contains(fault) {
				if !first {
					f.write_str(", ")?;
				}
				f.write_str(label)?;
				first = false;
			}
		}
		Ok(())
	}
}

/// Key used for a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
	Type(&'static str),
	Index(i16),
	Name(String),
}

impl fmt::Display for LookupKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Type(name) => write!(f, "type {name}"),
			Self::Index(index) => write!(f, "index {index}"),
			Self::Name(name) => write!(f, "name {name:?}"),
		}
	}
}

/// State registry error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("no state registered for {key}")]
	NotFound { key: LookupKey },

	#[error("invalid state candidate {name}: {faults}")]
	InvalidCandidate { name: String, faults: CandidateFaults },

	#[error("state {name} is already registered")]
	DuplicateRegistration { name: String },

	#[error("cannot add more than {capacity} states")]
	CapacityExceeded { capacity: i16 },

	#[error("state {name} was not registered and has no index")]
	Unassigned { name: String },

	#[error("global state registry is already initialized")]
	AlreadyInitialized,
}
