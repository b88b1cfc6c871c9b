//! State type identities and the registrable-state capability.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Capability implemented by every behavior that can be placed in the state table.
pub trait EntityState: Any + Send + Sync {}

bitflags::bitflags! {
	/// Introspection facts recorded for a [`StateType`] when the handle is created.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct StateFlags: u8 {
		/// The type implements [`EntityState`].
		const STATE = 1 << 0;
		/// The type is a base behavior and must never be registered.
		const ABSTRACT = 1 << 1;
	}
}

/// Runtime identity of a concrete Rust type that may be registered as a state.
///
/// Equality and hashing use the [`TypeId`] only; names are carried for
/// diagnostics and for deriving the default canonical name.
#[derive(Clone, Copy)]
pub struct StateType {
	id: TypeId,
	full_name: &'static str,
	flags: StateFlags,
}

impl StateType {
	/// Describes a registrable state type.
	pub fn of<T: EntityState>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			full_name: std::any::type_name::<T>(),
			flags: StateFlags::STATE,
		}
	}

	/// Describes a base state that carries the capability but must not be registered.
	pub fn abstract_of<T: EntityState>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			full_name: std::any::type_name::<T>(),
			flags: StateFlags::STATE | StateFlags::ABSTRACT,
		}
	}

	/// Describes an arbitrary type that does not implement [`EntityState`].
	pub fn foreign<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			full_name: std::any::type_name::<T>(),
			flags: StateFlags::empty(),
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.id
	}

	/// Fully-qualified type path, the default canonical name.
	pub fn full_name(&self) -> &'static str {
		self.full_name
	}

	/// Last path segment of the type name, with generic arguments stripped.
	pub fn display_name(&self) -> &'static str {
		let full: &'static str = self.full_name;
		let base = full.split('<').next().unwrap_or(full);
		base.rsplit("::").next().unwrap_or(base)
	}

	pub fn flags(&self) -> StateFlags {
		self.flags
	}

	pub fn is_state(&self) -> bool {
		self.flags.contains(StateFlags::STATE)
	}

	pub fn is_abstract(&self) -> bool {
		self.flags.contains(StateFlags::ABSTRACT)
	}

	/// Returns true if this handle identifies `T`.
	pub fn is<T: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for StateType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for StateType {}

impl Hash for StateType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for StateType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StateType")
			.field("name", &self.full_name)
			.field("flags", &self.flags)
			.finish()
	}
}

impl fmt::Display for StateType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.full_name)
	}
}
