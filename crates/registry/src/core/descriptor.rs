use std::sync::Arc;

use super::state::StateType;

/// Index carried by descriptors that have not been inserted into a registry.
pub const UNASSIGNED_INDEX: i16 = -1;

/// Upper bound on the number of registered states.
///
/// Index `MAX_STATES` itself is never handed out.
pub const MAX_STATES: i16 = i16::MAX;

/// Binds a state type to its canonical name and table index.
///
/// The index is written exactly once, by the registry, when the descriptor is
/// inserted. Descriptors handed out by a registry are shared and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDescriptor {
	state_type: StateType,
	name: Arc<str>,
	index: i16,
}

impl StateDescriptor {
	/// Creates an unassigned descriptor named after the type's full path.
	pub fn new(state_type: StateType) -> Self {
		Self::with_name(state_type, state_type.full_name())
	}

	/// Creates an unassigned descriptor with an explicit canonical name.
	pub fn with_name(state_type: StateType, name: impl Into<Arc<str>>) -> Self {
		Self {
			state_type,
			name: name.into(),
			index: UNASSIGNED_INDEX,
		}
	}

	pub(crate) fn sentinel(state_type: StateType) -> Self {
		Self::new(state_type)
	}

	pub fn state_type(&self) -> StateType {
		self.state_type
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn shared_name(&self) -> Arc<str> {
		Arc::clone(&self.name)
	}

	pub fn index(&self) -> i16 {
		self.index
	}

	/// Returns true once a registry has assigned this descriptor a slot.
	pub fn is_valid(&self) -> bool {
		self.index >= 0
	}

	pub(crate) fn assign(&mut self, index: i16) {
		self.index = index;
	}
}
