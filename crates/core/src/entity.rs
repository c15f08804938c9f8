//! Registry entities and their natural keys.

use crate::error::DomainError;

/// A record the registry tracks by a key fixed at creation.
///
/// Keys are natural ones (hotel name, room number, payer number,
/// reservation number) rather than generated ids.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Noun used in log lines and error messages.
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Error for a second registration under the same key.
    fn duplicate(&self) -> DomainError {
        DomainError::state(format!("{} {} already exists", Self::KIND, self.id()))
    }
}
