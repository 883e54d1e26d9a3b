//! Runtime configuration, deserialised from `shelter.toml` and `SHELTER_*`
//! environment variables.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;
use shelter_core::{DEFAULT_ID_BASE, NewAnimal, Shelter, Species};

// ─── Configuration ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ShelterConfig {
  /// First id handed out to an admitted animal.
  #[serde(default = "default_id_base")]
  pub id_base:           u64,
  #[serde(default = "default_currency_symbol")]
  pub currency_symbol:   String,
  #[serde(default = "default_currency_decimals")]
  pub currency_decimals: usize,
  /// Animals admitted at start-up, in order.
  #[serde(default = "default_roster")]
  pub roster:            Vec<RosterEntry>,
}

/// One animal in the start-up roster.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
  /// Type name, matched case-insensitively ("dog", "Cat", ...).
  pub species:    String,
  pub name:       String,
  pub age:        i64,
  #[serde(default)]
  pub sex:        String,
  #[serde(default)]
  pub breed:      String,
  #[serde(default)]
  pub vaccinated: bool,
}

fn default_id_base() -> u64 { DEFAULT_ID_BASE }

fn default_currency_symbol() -> String { "฿".to_owned() }

fn default_currency_decimals() -> usize { 2 }

fn default_roster() -> Vec<RosterEntry> {
  let entry = |species: &str, name: &str, age, sex: &str, breed: &str, vaccinated| {
    RosterEntry {
      species: species.to_owned(),
      name: name.to_owned(),
      age,
      sex: sex.to_owned(),
      breed: breed.to_owned(),
      vaccinated,
    }
  };
  vec![
    entry("Dog", "Taro", 3, "Male", "Thai Ridgeback", true),
    entry("Cat", "Milo", 2, "Male", "Mixed", false),
    entry("Rabbit", "Bunny", 1, "Female", "Netherland Dwarf", true),
    entry("Dog", "Bella", 5, "Female", "Labrador", true),
    entry("Cat", "Luna", 1, "Female", "Siamese", true),
  ]
}

impl Default for ShelterConfig {
  fn default() -> Self {
    Self {
      id_base:           default_id_base(),
      currency_symbol:   default_currency_symbol(),
      currency_decimals: default_currency_decimals(),
      roster:            default_roster(),
    }
  }
}

impl ShelterConfig {
  /// Layer the optional TOML file at `path` and `SHELTER_*` environment
  /// variables over the built-in defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = ::config::Config::builder()
      .add_source(::config::File::from(path).required(false))
      .add_source(::config::Environment::with_prefix("SHELTER"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise ShelterConfig")
  }

  /// Build a shelter and admit the roster.
  pub fn build_shelter(&self) -> anyhow::Result<Shelter> {
    let mut shelter = Shelter::with_id_base(self.id_base);
    for (i, entry) in self.roster.iter().enumerate() {
      let input = entry
        .to_new_animal()
        .with_context(|| format!("invalid roster entry #{} ({:?})", i + 1, entry.name))?;
      shelter
        .add_animal(input)
        .with_context(|| format!("cannot admit roster entry #{}", i + 1))?;
    }
    tracing::info!(
      animals = shelter.animals().len(),
      id_base = self.id_base,
      "shelter ready"
    );
    Ok(shelter)
  }
}

impl RosterEntry {
  fn to_new_animal(&self) -> shelter_core::Result<NewAnimal> {
    NewAnimal::new(
      Species::from_name(&self.species)?,
      &self.name,
      self.age,
      self.sex.clone(),
      self.breed.clone(),
      self.vaccinated,
    )
  }
}
