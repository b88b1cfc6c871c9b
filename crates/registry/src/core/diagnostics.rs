//! Side channel for registry warnings and errors.
//!
//! The registry never aborts on bad input. It reports through a
//! [`DiagnosticSink`] and returns a failure or the sentinel descriptor.

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
	Warning,
	Error,
}

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
	/// A candidate type was missing.
	NullType,
	/// A candidate type does not implement the state capability.
	NotAState,
	/// A candidate type is an abstract base state.
	AbstractType,
	/// The type or name is already present in the table.
	DuplicateRegistration,
	/// The table is full.
	CapacityExceeded,
	/// A descriptor arrived with an index that the registry replaced.
	IndexOverwritten,
	/// A lookup was attempted with an empty name.
	EmptyName,
	/// A state reference could not be resolved against the table.
	UnresolvedReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	pub kind: DiagnosticKind,
	pub message: String,
}

/// Receiver for registry diagnostics.
pub trait DiagnosticSink: Send + Sync {
	fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&self, diagnostic: &Diagnostic) {
		match diagnostic.severity {
			Severity::Warning => {
				tracing::warn!(kind = ?diagnostic.kind, "{}", diagnostic.message)
			}
			Severity::Error => {
				tracing::error!(kind = ?diagnostic.kind, "{}", diagnostic.message)
			}
		}
	}
}

/// Buffers diagnostics in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
	entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Removes and returns everything reported so far.
	pub fn take(&self) -> Vec<Diagnostic> {
		std::mem::take(&mut *self.entries.lock())
	}

	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	/// Counts buffered diagnostics of one kind.
	pub fn count(&self, kind: DiagnosticKind) -> usize {
		self.entries.lock().iter().filter(|d| d.kind == kind).count()
	}
}

impl DiagnosticSink for MemorySink {
	fn report(&self, diagnostic: &Diagnostic) {
		self.entries.lock().push(diagnostic.clone());
	}
}
