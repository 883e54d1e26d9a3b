//! Animals — the entities the shelter offers for adoption.
//!
//! Every animal shares one attribute record; the [`Species`] tag selects the
//! adoption-fee rule. Callers never branch on the species to price an animal,
//! they ask for [`Animal::adoption_fee`].

use std::{fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Process-unique animal identifier, handed out by the shelter's
/// [`IdSequence`](crate::shelter::IdSequence).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AnimalId(u64);

impl AnimalId {
  pub const fn new(raw: u64) -> Self { Self(raw) }

  pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for AnimalId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Money ───────────────────────────────────────────────────────────────────

/// An adoption fee in whole currency units.
///
/// Formatting (symbol, grouping, decimals) belongs to the presentation layer.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct Fee(u64);

impl Fee {
  pub const ZERO: Fee = Fee(0);

  pub const fn new(amount: u64) -> Self { Self(amount) }

  pub const fn amount(self) -> u64 { self.0 }
}

impl Add for Fee {
  type Output = Fee;

  fn add(self, rhs: Fee) -> Fee { Fee(self.0 + rhs.0) }
}

impl Sum for Fee {
  fn sum<I: Iterator<Item = Fee>>(iter: I) -> Fee { iter.fold(Fee::ZERO, Add::add) }
}

impl fmt::Display for Fee {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Species ─────────────────────────────────────────────────────────────────

/// The kind of animal. The variant name doubles as the display/type name
/// accepted by [`AnimalQuery::species`](crate::query::AnimalQuery::species).
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Species {
  Dog,
  Cat,
  Rabbit,
}

impl Species {
  /// Parse a type name case-insensitively ("dog", "CAT", " Rabbit ").
  pub fn from_name(name: &str) -> Result<Self> {
    name
      .trim()
      .parse()
      .map_err(|_| Error::UnknownSpecies(name.to_owned()))
  }

  /// The stable type name, e.g. `"Dog"`.
  pub fn name(self) -> &'static str { self.into() }

  /// The fee rule for this species.
  ///
  /// Unvaccinated dogs and cats cost more because the shelter vaccinates them
  /// before they leave. Rabbits are priced by age alone.
  pub fn fee(self, age: u32, vaccinated: bool) -> Fee {
    match self {
      Self::Dog if vaccinated => Fee(1800),
      Self::Dog => Fee(2000),
      Self::Cat if vaccinated => Fee(900),
      Self::Cat => Fee(1200),
      Self::Rabbit => Fee(500 + u64::from(age) * 50),
    }
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

pub(crate) fn validated_name(raw: &str) -> Result<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(Error::InvalidName);
  }
  Ok(trimmed.to_owned())
}

pub(crate) fn validated_age(raw: i64) -> Result<u32> {
  u32::try_from(raw).map_err(|_| Error::InvalidAge(raw))
}

// ─── NewAnimal ───────────────────────────────────────────────────────────────

/// Validated input to [`Shelter::add_animal`](crate::shelter::Shelter::add_animal).
///
/// The id is always assigned by the shelter; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnimal {
  species:    Species,
  name:       String,
  age:        u32,
  sex:        String,
  breed:      String,
  vaccinated: bool,
}

impl NewAnimal {
  /// Validate the caller-supplied attributes.
  ///
  /// Fails with [`Error::InvalidName`] when `name` is blank after trimming and
  /// with [`Error::InvalidAge`] when `age` is negative.
  pub fn new(
    species: Species,
    name: &str,
    age: i64,
    sex: impl Into<String>,
    breed: impl Into<String>,
    vaccinated: bool,
  ) -> Result<Self> {
    Ok(Self {
      species,
      name: validated_name(name)?,
      age: validated_age(age)?,
      sex: sex.into(),
      breed: breed.into(),
      vaccinated,
    })
  }

  pub fn dog(
    name: &str,
    age: i64,
    sex: impl Into<String>,
    breed: impl Into<String>,
    vaccinated: bool,
  ) -> Result<Self> {
    Self::new(Species::Dog, name, age, sex, breed, vaccinated)
  }

  pub fn cat(
    name: &str,
    age: i64,
    sex: impl Into<String>,
    breed: impl Into<String>,
    vaccinated: bool,
  ) -> Result<Self> {
    Self::new(Species::Cat, name, age, sex, breed, vaccinated)
  }

  pub fn rabbit(
    name: &str,
    age: i64,
    sex: impl Into<String>,
    breed: impl Into<String>,
    vaccinated: bool,
  ) -> Result<Self> {
    Self::new(Species::Rabbit, name, age, sex, breed, vaccinated)
  }

  pub fn species(&self) -> Species { self.species }

  pub fn name(&self) -> &str { &self.name }

  /// The fee this animal would carry once admitted.
  pub fn adoption_fee(&self) -> Fee { self.species.fee(self.age, self.vaccinated) }
}

// ─── Animal ──────────────────────────────────────────────────────────────────

/// An animal registered with a [`Shelter`](crate::shelter::Shelter).
///
/// `name` and `age` change only through validated setters; `vaccinated` is
/// fixed at admission; `adopted` flips to `true` once, inside
/// [`Shelter::adopt`](crate::shelter::Shelter::adopt), and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
  id:         AnimalId,
  species:    Species,
  name:       String,
  age:        u32,
  sex:        String,
  breed:      String,
  vaccinated: bool,
  adopted:    bool,
}

impl Animal {
  pub(crate) fn admit(id: AnimalId, input: NewAnimal) -> Self {
    let NewAnimal { species, name, age, sex, breed, vaccinated } = input;
    Self { id, species, name, age, sex, breed, vaccinated, adopted: false }
  }

  pub fn id(&self) -> AnimalId { self.id }

  pub fn species(&self) -> Species { self.species }

  /// The variant name, e.g. `"Rabbit"`.
  pub fn type_name(&self) -> &'static str { self.species.name() }

  pub fn name(&self) -> &str { &self.name }

  pub fn age(&self) -> u32 { self.age }

  pub fn sex(&self) -> &str { &self.sex }

  pub fn breed(&self) -> &str { &self.breed }

  pub fn is_vaccinated(&self) -> bool { self.vaccinated }

  pub fn is_adopted(&self) -> bool { self.adopted }

  /// The fee for the animal's current state.
  pub fn adoption_fee(&self) -> Fee { self.species.fee(self.age, self.vaccinated) }

  /// Rename the animal. A blank name is rejected and leaves the old one.
  pub fn set_name(&mut self, name: &str) -> Result<()> {
    self.name = validated_name(name)?;
    Ok(())
  }

  /// Change the recorded age. A negative age is rejected and leaves the old one.
  pub fn set_age(&mut self, age: i64) -> Result<()> {
    self.age = validated_age(age)?;
    Ok(())
  }

  pub(crate) fn mark_adopted(&mut self) { self.adopted = true; }
}
