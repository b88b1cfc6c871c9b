#![allow(dead_code, reason = "marker types are only used as type parameters")]

use std::marker::PhantomData;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::core::EntityState;
use crate::core::test_fixtures::{AbstractBase, Alpha, Bravo, Charlie, NotAState};

struct Registered;
impl EntityState for Registered {}

struct RegisteredBase;
impl EntityState for RegisteredBase {}

struct Wrapper<T>(PhantomData<T>);
impl<T: Send + Sync + 'static> EntityState for Wrapper<T> {}

crate::register_state!(Registered);
crate::register_abstract_state!(RegisteredBase);

const THIS_MODULE: &str = module_path!();

fn display_names(types: &[StateType]) -> Vec<&'static str> {
	types.iter().map(StateType::display_name).collect()
}

proptest! {
	/// Discovery order never affects the seeded order.
	#[test]
	fn ordering_ignores_discovery_order(discovered in Just(vec![
		StateType::of::<Bravo>(),
		StateType::of::<Alpha>(),
		StateType::of::<Charlie>(),
	]).prop_shuffle()) {
		let ordered = ordered_candidates(&StaticCatalog::new(discovered));
		prop_assert_eq!(display_names(&ordered), vec!["Alpha", "Bravo", "Charlie"]);
	}
}

#[test]
fn ordering_drops_invalid_and_repeated_candidates() {
	let catalog = StaticCatalog::new(vec![
		StateType::of::<Charlie>(),
		StateType::foreign::<NotAState>(),
		StateType::of::<Alpha>(),
		StateType::abstract_of::<AbstractBase>(),
		StateType::of::<Charlie>(),
	]);

	assert_eq!(display_names(&ordered_candidates(&catalog)), vec!["Alpha", "Charlie"]);
}

#[test]
fn equal_display_names_fall_back_to_full_path() {
	let catalog: StaticCatalog = [
		StateType::of::<Wrapper<Bravo>>(),
		StateType::of::<Wrapper<Alpha>>(),
	]
	.into_iter()
	.collect();

	let ordered = ordered_candidates(&catalog);

	assert_eq!(display_names(&ordered), vec!["Wrapper", "Wrapper"]);
	assert!(ordered[0].full_name() < ordered[1].full_name());
	assert!(ordered[0].is::<Wrapper<Alpha>>());
}

#[test]
fn faults_are_collected_independently() {
	assert_eq!(candidate_faults(None), CandidateFaults::NULL);
	assert_eq!(candidate_faults(Some(&StateType::of::<Alpha>())), CandidateFaults::empty());
	assert_eq!(
		candidate_faults(Some(&StateType::abstract_of::<AbstractBase>())),
		CandidateFaults::ABSTRACT
	);
	assert_eq!(
		candidate_faults(Some(&StateType::foreign::<NotAState>())),
		CandidateFaults::NOT_STATE
	);
	assert_eq!(
		(CandidateFaults::NOT_STATE | CandidateFaults::ABSTRACT).to_string(),
		"not an entity state, abstract"
	);
}

#[test]
fn inventory_catalog_filters_by_module_root() {
	let local = InventoryCatalog::for_roots([THIS_MODULE]).candidates();
	assert_eq!(local.len(), 2);
	assert!(local.contains(&StateType::of::<Registered>()));
	assert!(local.iter().any(|ty| ty.is::<RegisteredBase>() && ty.is_abstract()));

	let ordered = ordered_candidates(&InventoryCatalog::for_roots([THIS_MODULE]));
	assert_eq!(ordered, vec![StateType::of::<Registered>()]);

	let partial_segment = &THIS_MODULE[..THIS_MODULE.len() - 2];
	assert!(InventoryCatalog::for_roots([partial_segment]).candidates().is_empty());

	let whole_crate = InventoryCatalog::for_roots([env!("CARGO_CRATE_NAME")]).candidates();
	assert!(whole_crate.contains(&StateType::of::<Registered>()));
	assert!(whole_crate.contains(&StateType::of::<crate::db::builtins::Idle>()));
	assert!(InventoryCatalog::all().candidates().len() >= whole_crate.len());
}

struct DenyBravo(StaticCatalog);

impl TypeCatalog for DenyBravo {
	fn candidates(&self) -> Vec<StateType> {
		self.0.candidates()
	}

	fn is_state(&self, ty: &StateType) -> bool {
		ty.is_state() && !ty.is::<Bravo>()
	}
}

#[test]
fn catalog_can_narrow_the_state_check() {
	let catalog = DenyBravo(StaticCatalog::new(vec![
		StateType::of::<Bravo>(),
		StateType::of::<Alpha>(),
	]));

	assert_eq!(ordered_candidates(&catalog), vec![StateType::of::<Alpha>()]);
}
