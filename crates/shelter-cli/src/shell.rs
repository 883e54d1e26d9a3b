//! The interactive command shell: one clap-parsed command per input line.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use shelter_core::{
  Adopter, Animal, AnimalId, AnimalQuery, NewAnimal, Shelter, Species,
};

use crate::render::{Money, animal_table, record_line};

// ─── Commands ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "shelter", no_binary_name = true)]
struct Line {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show every animal still available for adoption.
  List {
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
  },

  /// Filter the available animals.
  Search {
    /// Dog, Cat or Rabbit (any case).
    #[arg(long = "type", value_parser = parse_species)]
    species:         Option<Species>,
    /// Male or Female (any case).
    #[arg(long)]
    sex:             Option<String>,
    #[arg(long)]
    min_age:         Option<u32>,
    #[arg(long)]
    max_age:         Option<u32>,
    /// Only vaccinated animals.
    #[arg(long)]
    vaccinated_only: bool,
    /// Print JSON instead of a table.
    #[arg(long)]
    json:            bool,
  },

  /// Admit a new animal: add <type> <name> <age> <sex> [breed...]
  Add {
    #[arg(value_parser = parse_species)]
    species:    Species,
    name:       String,
    #[arg(allow_negative_numbers = true)]
    age:        i64,
    sex:        String,
    breed:      Vec<String>,
    #[arg(long)]
    vaccinated: bool,
  },

  /// Adopt an animal: adopt <id> <full name...> [--phone P]
  Adopt {
    id:        u64,
    #[arg(required = true)]
    full_name: Vec<String>,
    #[arg(long)]
    phone:     Option<String>,
  },

  /// Show the adoption history and the fees collected.
  Records {
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
  },

  /// Leave the shell.
  #[command(alias = "exit")]
  Quit,
}

fn parse_species(s: &str) -> Result<Species, String> {
  Species::from_name(s).map_err(|e| e.to_string())
}

// ─── Shell ────────────────────────────────────────────────────────────────────

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

/// Translates command lines into [`Shelter`] calls and renders the results.
pub struct Shell {
  shelter: Shelter,
  money:   Money,
}

impl Shell {
  pub fn new(shelter: Shelter, money: Money) -> Self { Self { shelter, money } }

  pub fn shelter(&self) -> &Shelter { &self.shelter }

  /// Read commands from `input` until it ends or `quit` is entered.
  pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "Pet adoption shell. Type `help` for commands.")?;
    write!(output, "{}", animal_table(&self.shelter.list_available(), &self.money))?;

    for line in input.lines() {
      let line = line.context("reading command")?;
      if self.execute(&line, &mut output)? == Flow::Quit {
        break;
      }
    }
    output.flush()?;
    Ok(())
  }

  /// Run a single command line. Words are split with shell quoting rules, so
  /// `"Mr Whiskers"` is one argument. Domain and parse errors are written to
  /// `output` and do not end the session; only I/O errors are returned.
  pub fn execute(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
    let words = match shell_words::split(line) {
      Ok(words) => words,
      Err(e) => {
        writeln!(output, "Error: {e}")?;
        return Ok(Flow::Continue);
      }
    };
    if words.is_empty() {
      return Ok(Flow::Continue);
    }

    let command = match Line::try_parse_from(words) {
      Ok(parsed) => parsed.command,
      Err(e) => {
        write!(output, "{e}")?;
        return Ok(Flow::Continue);
      }
    };
    tracing::debug!(?command, "executing");

    match command {
      Command::List { json } => {
        let animals = self.shelter.list_available();
        self.print_animals(&animals, json, output)?;
      }
      Command::Search {
        species,
        sex,
        min_age,
        max_age,
        vaccinated_only,
        json,
      } => {
        let query = AnimalQuery {
          species,
          vaccinated_only: vaccinated_only.then_some(true),
          min_age,
          max_age,
          sex,
        };
        let found = self.shelter.search(&query);
        if !json {
          writeln!(output, "Results: {}", found.len())?;
        }
        self.print_animals(&found, json, output)?;
      }
      Command::Add {
        species,
        name,
        age,
        sex,
        breed,
        vaccinated,
      } => {
        let added =
          NewAnimal::new(species, &name, age, sex, breed.join(" "), vaccinated)
            .and_then(|input| self.shelter.add_animal(input));
        match added {
          Ok(id) => {
            if let Some(animal) = self.shelter.animal(id) {
              writeln!(
                output,
                "Added: {} {} (id={})",
                animal.type_name(),
                animal.name(),
                id
              )?;
            }
          }
          Err(e) => writeln!(output, "Error: {e}")?,
        }
      }
      Command::Adopt { id, full_name, phone } => {
        self.adopt(AnimalId::new(id), &full_name.join(" "), phone.as_deref(), output)?;
      }
      Command::Records { json } => self.print_records(json, output)?,
      Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
  }

  fn adopt(
    &mut self,
    id: AnimalId,
    full_name: &str,
    phone: Option<&str>,
    output: &mut impl Write,
  ) -> Result<()> {
    let outcome = Adopter::new(full_name, phone)
      .and_then(|adopter| self.shelter.adopt(id, adopter).map(|r| r.animal_id()));
    match outcome {
      Ok(animal_id) => {
        let view = self
          .shelter
          .record_views()
          .find(|v| v.record.animal_id() == animal_id);
        if let Some(view) = view {
          writeln!(output, "Adoption complete")?;
          writeln!(output, "{}", record_line(&view, &self.money))?;
        }
        writeln!(
          output,
          "Total fees collected: {}",
          self.money.format(self.shelter.total_fees())
        )?;
      }
      Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
  }

  fn print_animals(
    &self,
    animals: &[&Animal],
    json: bool,
    output: &mut impl Write,
  ) -> Result<()> {
    if json {
      writeln!(output, "{}", serde_json::to_string_pretty(animals)?)?;
    } else {
      write!(output, "{}", animal_table(animals, &self.money))?;
    }
    Ok(())
  }

  fn print_records(&self, json: bool, output: &mut impl Write) -> Result<()> {
    if json {
      let records = self.shelter.records();
      writeln!(output, "{}", serde_json::to_string_pretty(records)?)?;
      return Ok(());
    }

    if self.shelter.records().is_empty() {
      writeln!(output, "No adoptions yet.")?;
      return Ok(());
    }
    for view in self.shelter.record_views() {
      writeln!(output, "- {}", record_line(&view, &self.money))?;
    }
    writeln!(
      output,
      "\nTotal fees collected: {}",
      self.money.format(self.shelter.total_fees())
    )?;
    Ok(())
  }
}

#[cfg(test)]
mod tests;
