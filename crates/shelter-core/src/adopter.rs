//! Adopter — the person completing an adoption.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::{Error, Result};

/// Identity of an adopter. Built per adoption and embedded in the resulting
/// [`AdoptionRecord`](crate::record::AdoptionRecord).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adopter {
  id:        Uuid,
  full_name: String,
  /// Empty when no phone number was given.
  phone:     String,
}

impl Adopter {
  /// Create an adopter with a fresh UUID.
  ///
  /// Fails with [`Error::InvalidAdopterName`] when `full_name` is blank after
  /// trimming. `phone` is trimmed and defaults to empty.
  pub fn new(full_name: &str, phone: Option<&str>) -> Result<Self> {
    Ok(Self {
      id:        Uuid::new_v4(),
      full_name: validated_full_name(full_name)?,
      phone:     phone.map(str::trim).unwrap_or_default().to_owned(),
    })
  }

  pub fn id(&self) -> Uuid { self.id }

  pub fn full_name(&self) -> &str { &self.full_name }

  pub fn phone(&self) -> &str { &self.phone }

  pub fn set_full_name(&mut self, full_name: &str) -> Result<()> {
    self.full_name = validated_full_name(full_name)?;
    Ok(())
  }
}

fn validated_full_name(raw: &str) -> Result<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(Error::InvalidAdopterName);
  }
  Ok(trimmed.to_owned())
}

/// `Full Name`, or `Full Name (phone)` when a phone number is on file.
impl fmt::Display for Adopter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.phone.is_empty() {
      write!(f, "{}", self.full_name)
    } else {
      write!(f, "{} ({})", self.full_name, self.phone)
    }
  }
}
