//! Adoption records — the append-only audit trail of completed adoptions.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::{
  adopter::Adopter,
  animal::{Animal, AnimalId, Fee, Species},
};

/// An immutable snapshot of one completed adoption.
///
/// The fee is frozen at adoption time: later changes to the animal (a new age
/// for a rabbit, say) never alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionRecord {
  animal_id:  AnimalId,
  species:    Species,
  adopter:    Adopter,
  adopted_at: DateTime<Utc>,
  fee:        Fee,
}

impl AdoptionRecord {
  pub(crate) fn new(animal: &Animal, adopter: Adopter, fee: Fee) -> Self {
    Self {
      animal_id: animal.id(),
      species: animal.species(),
      adopter,
      adopted_at: Utc::now(),
      fee,
    }
  }

  pub fn animal_id(&self) -> AnimalId { self.animal_id }

  pub fn species(&self) -> Species { self.species }

  pub fn adopter(&self) -> &Adopter { &self.adopter }

  pub fn adopted_at(&self) -> DateTime<Utc> { self.adopted_at }

  pub fn fee(&self) -> Fee { self.fee }
}

/// A record joined with the animal it refers to, for display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecordView<'a> {
  pub record: &'a AdoptionRecord,
  pub animal: &'a Animal,
}

/// `<adopter> adopted <name> (id=<id>, <Type>) @ <local yyyy-mm-dd HH:MM>`.
///
/// The fee is left to the caller, who owns currency formatting.
impl fmt::Display for RecordView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} adopted {} (id={}, {}) @ {}",
      self.record.adopter,
      self.animal.name(),
      self.animal.id(),
      self.record.species,
      self.record.adopted_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
    )
  }
}
