#![allow(dead_code, reason = "marker types are only used as type parameters")]

use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::core::{EntityState, MAX_STATES, MemorySink, Registry, StateType};

macro_rules! test_states {
	($($name:ident),+ $(,)?) => {
		$(
			#[derive(Debug)]
			pub(crate) struct $name;
			impl EntityState for $name {}
		)+
	};
}

test_states!(Alpha, Bravo, Charlie, Delta, Echo, Foxtrot);

/// Base state used to exercise the abstract check.
pub(crate) struct AbstractBase;
impl EntityState for AbstractBase {}

/// Type that does not carry the state capability.
pub(crate) struct NotAState;

/// Concrete states in declaration order.
pub(crate) fn pool() -> Vec<StateType> {
	vec![
		StateType::of::<Alpha>(),
		StateType::of::<Bravo>(),
		StateType::of::<Charlie>(),
		StateType::of::<Delta>(),
		StateType::of::<Echo>(),
		StateType::of::<Foxtrot>(),
	]
}

pub(crate) fn registry_with_capacity(capacity: i16) -> (Registry, Arc<MemorySink>) {
	let sink = Arc::new(MemorySink::new());
	let registry = Registry::with_sink(&RegistryConfig { capacity }, sink.clone());
	(registry, sink)
}

pub(crate) fn registry() -> (Registry, Arc<MemorySink>) {
	registry_with_capacity(MAX_STATES)
}
