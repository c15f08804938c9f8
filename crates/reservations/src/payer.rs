use serde::Serialize;

use hotelchain_core::{CreditCard, DomainResult, Entity, Identity};

use crate::keys::PayerNumber;
use crate::reservation::Reservation;

/// The person who reserves and pays: card, identity document, and at most
/// one active reservation.
#[derive(Debug, Clone, Serialize)]
pub struct ReserverPayer {
    number: PayerNumber,
    card: CreditCard,
    identity: Identity,
    reservation: Option<Reservation>,
}

impl ReserverPayer {
    pub fn create(card: CreditCard, identity: Identity, number: u32) -> DomainResult<Self> {
        Ok(Self {
            number: PayerNumber::new(number)?,
            card,
            identity,
            reservation: None,
        })
    }

    pub fn number(&self) -> PayerNumber {
        self.number
    }

    pub fn card(&self) -> &CreditCard {
        &self.card
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        self.reservation.as_ref()
    }

    /// Stores `reservation` in the single slot. Returns whatever it replaced
    /// along with the newly linked reservation.
    pub(crate) fn link(&mut self, reservation: Reservation) -> (Option<Reservation>, &Reservation) {
        let previous = self.reservation.take();
        let linked: &Reservation = self.reservation.insert(reservation);
        (previous, linked)
    }

    pub(crate) fn unlink(&mut self) -> Option<Reservation> {
        self.reservation.take()
    }
}

impl Entity for ReserverPayer {
    type Id = PayerNumber;
    const KIND: &'static str = "reserver payer";

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

impl PartialEq for ReserverPayer {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.identity == other.identity
    }
}

impl Eq for ReserverPayer {}
