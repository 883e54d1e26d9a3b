//! Core domain types for the Shelter adoption workflow.
//!
//! This crate holds the entity model, the per-species fee policy, the search
//! engine over the available pool, and the adoption transaction. It performs
//! no I/O; presentation adapters (such as the `shelter` shell) call into it.

pub mod adopter;
pub mod animal;
pub mod error;
pub mod query;
pub mod record;
pub mod shared;
pub mod shelter;

pub use adopter::Adopter;
pub use animal::{Animal, AnimalId, Fee, NewAnimal, Species};
pub use error::{Error, Result};
pub use query::AnimalQuery;
pub use record::{AdoptionRecord, RecordView};
pub use shared::SharedShelter;
pub use shelter::{DEFAULT_ID_BASE, IdSequence, Shelter};
