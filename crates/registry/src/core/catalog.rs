//! Enumeration of candidate state types.
//!
//! Rust has no runtime type scanning, so candidates come from a
//! [`TypeCatalog`]. The built-in catalog is link-time: [`register_state!`]
//! submits a [`StateRegistration`] that [`InventoryCatalog`] iterates.
//!
//! [`register_state!`]: crate::register_state

use rustc_hash::FxHashSet;

use super::error::CandidateFaults;
use super::state::StateType;

/// Source of candidate state types.
pub trait TypeCatalog {
	/// Returns every candidate, in no particular order.
	fn candidates(&self) -> Vec<StateType>;

	/// Subtype check for the registrable-state capability.
	fn is_state(&self, ty: &StateType) -> bool {
		ty.is_state()
	}
}

/// Link-time submission of a state type, collected by [`InventoryCatalog`].
pub struct StateRegistration {
	/// Module path of the submitting code.
	pub module: &'static str,
	/// Produces the type handle.
	pub describe: fn() -> StateType,
}

inventory::collect!(StateRegistration);

impl StateRegistration {
	pub const fn new(module: &'static str, describe: fn() -> StateType) -> Self {
		Self { module, describe }
	}
}

/// Submits concrete state types to the link-time catalog.
#[macro_export]
macro_rules! register_state {
	($($ty:ty),+ $(,)?) => {
		$(
			$crate::inventory::submit! {
				$crate::StateRegistration::new(module_path!(), $crate::StateType::of::<$ty>)
			}
		)+
	};
}

/// Submits abstract base states to the link-time catalog.
///
/// They are enumerated like any other candidate and filtered out before
/// seeding.
#[macro_export]
macro_rules! register_abstract_state {
	($($ty:ty),+ $(,)?) => {
		$(
			$crate::inventory::submit! {
				$crate::StateRegistration::new(module_path!(), $crate::StateType::abstract_of::<$ty>)
			}
		)+
	};
}

/// Catalog backed by [`register_state!`] submissions.
///
/// [`register_state!`]: crate::register_state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryCatalog {
	roots: Vec<String>,
}

impl InventoryCatalog {
	/// Every submission linked into the binary.
	pub fn all() -> Self {
		Self::default()
	}

	/// Submissions made from inside the given module roots (usually crate names).
	pub fn for_roots<I, S>(roots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			roots: roots.into_iter().map(Into::into).collect(),
		}
	}

	fn admits(&self, module: &str) -> bool {
		self.roots.is_empty()
			|| self.roots.iter().any(|root| {
				module
					.strip_prefix(root.as_str())
					.is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
			})
	}
}

impl TypeCatalog for InventoryCatalog {
	fn candidates(&self) -> Vec<StateType> {
		inventory::iter::<StateRegistration>
			.into_iter()
			.filter(|registration| self.admits(registration.module))
			.map(|registration| (registration.describe)())
			.collect()
	}
}

/// Catalog over an explicit list of types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
	types: Vec<StateType>,
}

impl StaticCatalog {
	pub fn new(types: Vec<StateType>) -> Self {
		Self { types }
	}
}

impl FromIterator<StateType> for StaticCatalog {
	fn from_iter<I: IntoIterator<Item = StateType>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl TypeCatalog for StaticCatalog {
	fn candidates(&self) -> Vec<StateType> {
		self.types.clone()
	}
}

/// Returns the registrable candidates of `catalog` in table order.
///
/// Invalid candidates and repeated types are dropped. The rest are sorted by
/// display name, byte-wise, with the full path as tie-breaker, so every peer
/// linking the same set of states derives the same order.
pub fn ordered_candidates(catalog: &dyn TypeCatalog) -> Vec<StateType> {
	let mut seen = FxHashSet::default();
	let mut types: Vec<StateType> = catalog
		.candidates()
		.into_iter()
		.filter(|ty| catalog.is_state(ty) && candidate_faults(Some(ty)).is_empty())
		.filter(|ty| seen.insert(ty.type_id()))
		.collect();
	types.sort_by(|a, b| {
		a.display_name()
			.cmp(b.display_name())
			.then_with(|| a.full_name().cmp(b.full_name()))
	});
	types
}

/// Evaluates every registration condition independently.
pub fn candidate_faults(ty: Option<&StateType>) -> CandidateFaults {
	let Some(ty) = ty else {
		return CandidateFaults::NULL;
	};
	let mut faults = CandidateFaults::empty();
	if !ty.is_state() {
		faults |= CandidateFaults::NOT_STATE;
	}
	if ty.is_abstract() {
		faults |= CandidateFaults::ABSTRACT;
	}
	faults
}

#[cfg(test)]
mod tests;
