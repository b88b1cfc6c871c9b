//! Deterministic seeding of a registry from a catalog.

use std::sync::Arc;

use crate::config::RegistryConfig;
use crate::core::{DiagnosticSink, Registry, StateType, TypeCatalog, ordered_candidates};

/// One-shot procedure that fills an empty registry from a [`TypeCatalog`].
///
/// Catalog enumeration order is unspecified, so candidates are filtered and
/// sorted by display name before insertion. Two processes linking the same
/// states therefore assign the same indices and compute the same hash.
pub struct BootstrapSeeder<'a> {
	catalog: &'a dyn TypeCatalog,
}

impl<'a> BootstrapSeeder<'a> {
	pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
		Self { catalog }
	}

	/// Valid candidates in the order they will be inserted.
	pub fn ordered(&self) -> Vec<StateType> {
		ordered_candidates(self.catalog)
	}

	/// Inserts the ordered candidates into `registry`, returning how many were added.
	///
	/// Stops at the first insertion failure; the registry has already
	/// reported it.
	pub fn seed(&self, registry: &Registry) -> usize {
		let mut seeded = 0;
		for ty in self.ordered() {
			if registry.add(ty).is_err() {
				break;
			}
			seeded += 1;
		}
		tracing::debug!(
			seeded,
			count = registry.count(),
			hash = %registry.compute_table_hash(),
			"seeded state table"
		);
		seeded
	}
}

impl Registry {
	/// Creates a registry seeded from `catalog`.
	pub fn bootstrap(catalog: &dyn TypeCatalog, config: &RegistryConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
		let registry = Self::with_sink(config, sink);
		BootstrapSeeder::new(catalog).seed(&registry);
		registry
	}
}
