//! Search parameters over the available pool.

use crate::animal::{Animal, Species};

/// Parameters for [`Shelter::search`](crate::shelter::Shelter::search).
///
/// Every field is an independent, AND-combined filter. A `None` field never
/// excludes an animal on that dimension, so `AnimalQuery::default()` matches
/// the whole available pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
  /// Restrict to one species. Parse user input with [`Species::from_name`]
  /// for case-insensitive matching.
  pub species:         Option<Species>,
  /// `Some(true)` keeps only vaccinated animals. `Some(false)` is the same as
  /// `None`: there is no "unvaccinated only" filter.
  pub vaccinated_only: Option<bool>,
  /// Inclusive lower bound on age.
  pub min_age:         Option<u32>,
  /// Inclusive upper bound on age.
  pub max_age:         Option<u32>,
  /// Case-insensitive exact match on sex.
  pub sex:             Option<String>,
}

impl AnimalQuery {
  /// Whether `animal` passes every filter that is set. Adoption status is not
  /// considered here; the shelter only feeds available animals through.
  pub fn matches(&self, animal: &Animal) -> bool {
    self.species.is_none_or(|s| animal.species() == s)
      && (self.vaccinated_only != Some(true) || animal.is_vaccinated())
      && self.min_age.is_none_or(|min| animal.age() >= min)
      && self.max_age.is_none_or(|max| animal.age() <= max)
      && self
        .sex
        .as_deref()
        .is_none_or(|sex| animal.sex().to_lowercase() == sex.to_lowercase())
  }
}
