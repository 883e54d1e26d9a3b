//! [`SharedShelter`] — a cloneable, thread-safe handle over a [`Shelter`].
//!
//! Adoptions are serialised behind the write lock, so when two callers race
//! for the same animal exactly one succeeds and the other gets
//! [`Error::AlreadyAdopted`](crate::Error::AlreadyAdopted). Reads share the
//! read lock and return owned snapshots, never references into the shelter.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
  Result,
  adopter::Adopter,
  animal::{Animal, AnimalId, Fee, NewAnimal},
  query::AnimalQuery,
  record::AdoptionRecord,
  shelter::Shelter,
};

/// Cloning is cheap — the shelter is reference-counted.
#[derive(Debug, Clone, Default)]
pub struct SharedShelter {
  inner: Arc<RwLock<Shelter>>,
}

impl SharedShelter {
  pub fn new(shelter: Shelter) -> Self {
    Self { inner: Arc::new(RwLock::new(shelter)) }
  }

  // A panic while holding the lock cannot leave the shelter half-updated:
  // `Shelter::adopt` finishes every fallible step before mutating.
  fn read(&self) -> RwLockReadGuard<'_, Shelter> {
    self.inner.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, Shelter> {
    self.inner.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Run `f` against a consistent view of the shelter.
  pub fn with<T>(&self, f: impl FnOnce(&Shelter) -> T) -> T { f(&self.read()) }

  pub fn add_animal(&self, input: NewAnimal) -> Result<AnimalId> {
    self.write().add_animal(input)
  }

  pub fn animal(&self, id: AnimalId) -> Option<Animal> {
    self.read().animal(id).cloned()
  }

  pub fn list_available(&self) -> Vec<Animal> {
    self.read().list_available().into_iter().cloned().collect()
  }

  pub fn search(&self, query: &AnimalQuery) -> Vec<Animal> {
    self.read().search(query).into_iter().cloned().collect()
  }

  pub fn adopt(&self, animal_id: AnimalId, adopter: Adopter) -> Result<AdoptionRecord> {
    self.write().adopt(animal_id, adopter).cloned()
  }

  /// A copy of the adoption log; later adoptions do not show up in it.
  pub fn records(&self) -> Vec<AdoptionRecord> { self.read().records().to_vec() }

  pub fn total_fees(&self) -> Fee { self.read().total_fees() }
}

impl From<Shelter> for SharedShelter {
  fn from(shelter: Shelter) -> Self { Self::new(shelter) }
}
