use std::sync::Arc;

use crate::core::{StateDescriptor, StateType};

/// Outcome of a non-failing lookup or insertion.
///
/// A miss still carries a descriptor: the registry's sentinel, which points at
/// the uninitialized state and has no index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
	Found(Arc<StateDescriptor>),
	Missing(Arc<StateDescriptor>),
}

impl Lookup {
	#[inline]
	pub fn is_found(&self) -> bool {
		matches!(self, Self::Found(_))
	}

	/// The found descriptor, or the sentinel on a miss.
	#[inline]
	pub fn descriptor(&self) -> &Arc<StateDescriptor> {
		match self {
			Self::Found(descriptor) | Self::Missing(descriptor) => descriptor,
		}
	}

	#[inline]
	pub fn state_type(&self) -> StateType {
		self.descriptor().state_type()
	}

	pub fn into_descriptor(self) -> Arc<StateDescriptor> {
		match self {
			Self::Found(descriptor) | Self::Missing(descriptor) => descriptor,
		}
	}

	pub fn into_option(self) -> Option<Arc<StateDescriptor>> {
		match self {
			Self::Found(descriptor) => Some(descriptor),
			Self::Missing(_) => None,
		}
	}
}
