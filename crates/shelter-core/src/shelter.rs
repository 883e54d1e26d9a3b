//! [`Shelter`] — the aggregate root owning every animal and adoption record.

use crate::{
  Error, Result,
  adopter::Adopter,
  animal::{Animal, AnimalId, Fee, NewAnimal},
  query::AnimalQuery,
  record::{AdoptionRecord, RecordView},
};

/// First id handed out by a default [`IdSequence`].
pub const DEFAULT_ID_BASE: u64 = 1000;

// ─── Id sequence ─────────────────────────────────────────────────────────────

/// Monotonic source of [`AnimalId`]s, owned by one shelter.
///
/// `u64::MAX` is the last id issued; after it the sequence is exhausted
/// rather than wrapping back below ids already in use.
#[derive(Debug, Clone)]
pub struct IdSequence {
  /// `None` once `u64::MAX` has been handed out.
  next: Option<u64>,
}

impl IdSequence {
  pub fn starting_at(base: u64) -> Self { Self { next: Some(base) } }

  /// Fails with [`Error::IdsExhausted`] once every id has been issued.
  pub fn next_id(&mut self) -> Result<AnimalId> {
    let raw = self.next.ok_or(Error::IdsExhausted)?;
    self.next = raw.checked_add(1);
    Ok(AnimalId::new(raw))
  }
}

impl Default for IdSequence {
  fn default() -> Self { Self::starting_at(DEFAULT_ID_BASE) }
}

// ─── Shelter ─────────────────────────────────────────────────────────────────

/// Owns all animals ever admitted (in admission order) and the append-only
/// adoption log (in chronological order).
///
/// Invariants:
/// - every record refers to an animal in `animals` whose `adopted` flag is set;
/// - an animal appears in at most one record.
///
/// [`Shelter::adopt`] is the only path that sets the flag or appends a record,
/// and it does both or neither.
#[derive(Debug, Default)]
pub struct Shelter {
  ids:     IdSequence,
  /// Sorted by id: ids are monotonic and animals are only ever appended.
  animals: Vec<Animal>,
  records: Vec<AdoptionRecord>,
}

impl Shelter {
  pub fn new() -> Self { Self::default() }

  /// A shelter whose first admitted animal gets id `base`.
  pub fn with_id_base(base: u64) -> Self {
    Self { ids: IdSequence::starting_at(base), ..Self::default() }
  }

  // ── Registration ──────────────────────────────────────────────────────────

  /// Admit an animal, assigning it the next id. There is no duplicate
  /// detection: admitting the same input twice yields two animals.
  ///
  /// Fails with [`Error::IdsExhausted`] when the id sequence has run out; the
  /// shelter is left unchanged.
  pub fn add_animal(&mut self, input: NewAnimal) -> Result<AnimalId> {
    let id = self.ids.next_id()?;
    let animal = Animal::admit(id, input);
    tracing::info!(
      animal_id = %id,
      species = animal.type_name(),
      name = animal.name(),
      "animal admitted"
    );
    self.animals.push(animal);
    Ok(id)
  }

  // ── Lookup ────────────────────────────────────────────────────────────────

  fn position(&self, id: AnimalId) -> Option<usize> {
    self.animals.binary_search_by_key(&id, Animal::id).ok()
  }

  /// Any animal ever admitted, adopted or not.
  pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
    self.position(id).map(|i| &self.animals[i])
  }

  /// Mutable access for the validated setters. The adopted flag is not
  /// reachable through this handle.
  pub fn animal_mut(&mut self, id: AnimalId) -> Option<&mut Animal> {
    self.position(id).map(|i| &mut self.animals[i])
  }

  /// Every animal ever admitted, in admission order.
  pub fn animals(&self) -> &[Animal] { &self.animals }

  // ── Availability & search ────────────────────────────────────────────────

  /// Animals not yet adopted, in admission order.
  pub fn list_available(&self) -> Vec<&Animal> {
    self.animals.iter().filter(|a| !a.is_adopted()).collect()
  }

  /// Available animals passing every filter in `query`, in admission order.
  pub fn search(&self, query: &AnimalQuery) -> Vec<&Animal> {
    self
      .animals
      .iter()
      .filter(|a| !a.is_adopted() && query.matches(a))
      .collect()
  }

  // ── Adoption ──────────────────────────────────────────────────────────────

  /// Adopt the animal with `animal_id`.
  ///
  /// Fails with [`Error::NotFound`] if no animal has that id and with
  /// [`Error::AlreadyAdopted`] if it has already left. On failure neither the
  /// animal nor the log is touched.
  pub fn adopt(
    &mut self,
    animal_id: AnimalId,
    adopter: Adopter,
  ) -> Result<&AdoptionRecord> {
    let Some(index) = self.position(animal_id) else {
      tracing::warn!(%animal_id, "adoption rejected: animal not found");
      return Err(Error::NotFound(animal_id));
    };

    let animal = &mut self.animals[index];
    if animal.is_adopted() {
      tracing::warn!(%animal_id, "adoption rejected: already adopted");
      return Err(Error::AlreadyAdopted(animal_id));
    }
    debug_assert!(
      self.records.iter().all(|r| r.animal_id() != animal_id),
      "record exists for an animal that is not flagged adopted"
    );

    let fee = animal.adoption_fee();
    animal.mark_adopted();
    let record = AdoptionRecord::new(animal, adopter, fee);

    tracing::info!(
      %animal_id,
      species = %record.species(),
      adopter = %record.adopter().id(),
      fee = fee.amount(),
      "animal adopted"
    );
    self.records.push(record);
    Ok(&self.records[self.records.len() - 1])
  }

  // ── Reporting ─────────────────────────────────────────────────────────────

  /// The adoption log, oldest first.
  pub fn records(&self) -> &[AdoptionRecord] { &self.records }

  /// Each record paired with its animal, oldest first.
  pub fn record_views(&self) -> impl Iterator<Item = RecordView<'_>> {
    self.records.iter().filter_map(|record| {
      self
        .animal(record.animal_id())
        .map(|animal| RecordView { record, animal })
    })
  }

  /// Sum of the fees frozen into the log.
  pub fn total_fees(&self) -> Fee { self.records.iter().map(AdoptionRecord::fee).sum() }
}
