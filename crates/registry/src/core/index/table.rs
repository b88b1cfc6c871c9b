//! Lock-protected storage behind [`super::Registry`].
//!
//! # Invariants
//!
//! - `defs[i].index() == i` for every slot.
//! - A descriptor is present in `by_type` iff it is present in `by_name`.
//! - `hash` is `None` whenever `defs` changed after the last digest.

use std::any::TypeId;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{RegistryError, StateDescriptor, TableHash};

#[derive(Default)]
pub(super) struct Table {
	defs: Vec<Arc<StateDescriptor>>,
	by_type: FxHashMap<TypeId, Arc<StateDescriptor>>,
	by_name: FxHashMap<Arc<str>, Arc<StateDescriptor>>,
	hash: Option<TableHash>,
}

/// A successful insertion.
pub(super) struct Inserted {
	pub descriptor: Arc<StateDescriptor>,
	/// Index the descriptor carried before the registry replaced it.
	pub overwritten: Option<i16>,
}

impl Table {
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn defs(&self) -> &[Arc<StateDescriptor>] {
		&self.defs
	}

	pub fn get_index(&self, index: i16) -> Option<&Arc<StateDescriptor>> {
		usize::try_from(index).ok().and_then(|i| self.defs.get(i))
	}

	pub fn get_type(&self, id: TypeId) -> Option<&Arc<StateDescriptor>> {
		self.by_type.get(&id)
	}

	pub fn get_name(&self, name: &str) -> Option<&Arc<StateDescriptor>> {
		self.by_name.get(name)
	}

	pub fn hash_cached(&self) -> Option<TableHash> {
		self.hash
	}

	/// Appends `descriptor` at the next free slot.
	pub fn insert(&mut self, mut descriptor: StateDescriptor, capacity: i16) -> Result<Inserted, RegistryError> {
		let next = match i16::try_from(self.defs.len()) {
			Ok(next) if next < capacity => next,
			_ => return Err(RegistryError::CapacityExceeded { capacity }),
		};

		if self.by_type.contains_key(&descriptor.state_type().type_id())
			|| self.by_name.contains_key(descriptor.name())
		{
			return Err(RegistryError::DuplicateRegistration {
				name: descriptor.name().to_owned(),
			});
		}

		let overwritten = descriptor.is_valid().then_some(descriptor.index());
		descriptor.assign(next);

		let descriptor = Arc::new(descriptor);
		self.defs.push(Arc::clone(&descriptor));
		self.by_type
			.insert(descriptor.state_type().type_id(), Arc::clone(&descriptor));
		self.by_name
			.insert(descriptor.shared_name(), Arc::clone(&descriptor));
		self.hash = None;

		Ok(Inserted {
			descriptor,
			overwritten,
		})
	}

	/// Returns the cached digest, recomputing it first if the table changed.
	pub fn hash(&mut self) -> TableHash {
		if let Some(hash) = self.hash {
			return hash;
		}
		let hash = TableHash::of_names(self.defs.iter().map(|d| d.name()));
		self.hash = Some(hash);
		hash
	}
}
