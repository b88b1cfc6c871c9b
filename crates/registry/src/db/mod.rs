//! Process-wide registry and its bootstrap.

use std::sync::{Arc, OnceLock};

pub mod bootstrap;
pub mod builtins;

pub use bootstrap::BootstrapSeeder;

use crate::config::StatesConfig;
use crate::core::{Registry, RegistryError, TracingSink};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the global registry, seeding it with the default configuration on first use.
pub fn global() -> &'static Registry {
	REGISTRY.get_or_init(|| build(&StatesConfig::default()))
}

/// Seeds the global registry from `config`.
///
/// Fails if the registry was already initialized, either by an earlier call
/// or by [`global`].
pub fn init_global(config: &StatesConfig) -> Result<&'static Registry, RegistryError> {
	let mut initialized_here = false;
	let registry = REGISTRY.get_or_init(|| {
		initialized_here = true;
		build(config)
	});
	if initialized_here {
		Ok(registry)
	} else {
		Err(RegistryError::AlreadyInitialized)
	}
}

fn build(config: &StatesConfig) -> Registry {
	let catalog = config.bootstrap.catalog();
	Registry::bootstrap(&catalog, &config.registry, Arc::new(TracingSink))
}
