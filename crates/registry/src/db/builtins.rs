//! Built-in state catalog.
//!
//! These are the states the core itself links in; with the default
//! configuration they are the only states seeded into the global table.

use crate::core::EntityState;

/// State of an entity whose machine has not been started yet.
///
/// Failed lookups return a sentinel descriptor pointing here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Uninitialized;

/// State that does nothing until replaced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Idle;

/// Entry state of a freshly spawned entity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Spawn;

/// Terminal state of an entity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Death;

/// Common base of built-in states; never registered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BaseState;

impl EntityState for Uninitialized {}
impl EntityState for Idle {}
impl EntityState for Spawn {}
impl EntityState for Death {}
impl EntityState for BaseState {}

crate::register_state!(Uninitialized, Idle, Spawn, Death);
crate::register_abstract_state!(BaseState);
