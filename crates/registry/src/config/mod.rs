//! Configuration for the state registry.
//!
//! Loaded from TOML. Every section and field is optional:
//!
//! ```toml
//! [registry]
//! capacity = 32767
//!
//! [bootstrap]
//! crates = ["estate_registry"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{InventoryCatalog, MAX_STATES};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("registry capacity {0} is outside 1..=32767")]
	Capacity(i16),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatesConfig {
	pub registry: RegistryConfig,
	pub bootstrap: BootstrapConfig,
}

/// Table limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Maximum number of registered states.
	pub capacity: i16,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self { capacity: MAX_STATES }
	}
}

/// Which link-time submissions seed the global table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
	/// Module roots whose [`register_state!`](crate::register_state) submissions are seeded.
	///
	/// Empty seeds every submission linked into the binary.
	pub crates: Vec<String>,
}

impl Default for BootstrapConfig {
	fn default() -> Self {
		Self {
			crates: vec![env!("CARGO_CRATE_NAME").to_owned()],
		}
	}
}

impl BootstrapConfig {
	pub fn catalog(&self) -> InventoryCatalog {
		InventoryCatalog::for_roots(self.crates.iter().cloned())
	}
}

impl StatesConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(1..=MAX_STATES).contains(&self.registry.capacity) {
			return Err(ConfigError::Capacity(self.registry.capacity));
		}
		Ok(())
	}
}
