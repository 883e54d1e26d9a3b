//! Error types for `shelter-core`.

use thiserror::Error;

use crate::animal::AnimalId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("animal name is required")]
  InvalidName,

  #[error("animal age must not be negative (got {0})")]
  InvalidAge(i64),

  #[error("adopter full name is required")]
  InvalidAdopterName,

  #[error("unknown species: {0:?}")]
  UnknownSpecies(String),

  #[error("animal not found: {0}")]
  NotFound(AnimalId),

  #[error("animal {0} is already adopted")]
  AlreadyAdopted(AnimalId),

  #[error("animal ids exhausted")]
  IdsExhausted,
}

impl Error {
  /// Whether the error was caused by a rejected input value rather than by
  /// the state of the shelter.
  pub fn is_invalid_argument(&self) -> bool {
    matches!(
      self,
      Self::InvalidName
        | Self::InvalidAge(_)
        | Self::InvalidAdopterName
        | Self::UnknownSpecies(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
