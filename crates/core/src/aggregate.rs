//! Aggregate root trait for the registry.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the only object callers mutate directly; every
/// entity it owns is reached through it.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful mutating operation.
    fn version(&self) -> u64;
}
