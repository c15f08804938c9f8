//! `hotelchain-core`: domain building blocks for the reservation registry.
//!
//! This crate contains **pure domain** primitives: the error model, the
//! entity/aggregate/value-object traits and the validated value objects the
//! reservation registry consumes.

pub mod address;
pub mod aggregate;
pub mod credit_card;
pub mod entity;
pub mod error;
pub mod id;
pub mod identity;
pub mod money;
pub mod name;
pub mod stay;
pub mod value_object;

pub use address::Address;
pub use aggregate::AggregateRoot;
pub use credit_card::CreditCard;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ChainId;
pub use identity::{Identity, IdentityType};
pub use money::Money;
pub use name::Name;
pub use stay::{StayRange, dates_overlap, days_between};
pub use value_object::ValueObject;
