//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values, and two with the same values are equal. Every value
//! object in this crate validates in its constructor, so holding one is proof
//! that the input was well-formed.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (`Money { 100.00, USD }` equals any other `100.00 USD`)
/// - **Entity**: has identity (a `Room` is room 101 of one hotel, whatever its state)
///
/// Value objects are immutable; "changing" one means building a new one
/// (see `Money::add`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
