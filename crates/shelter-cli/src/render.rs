//! Text rendering for the shell: currency amounts, the animal table, and the
//! adoption history.

use std::fmt::Write as _;

use shelter_core::{Animal, Fee, RecordView};

// ─── Money ────────────────────────────────────────────────────────────────────

/// Currency formatting for fees, e.g. `฿1,800.00`.
#[derive(Debug, Clone)]
pub struct Money {
  pub symbol:   String,
  pub decimals: usize,
}

impl Money {
  pub fn format(&self, fee: Fee) -> String {
    let digits = fee.amount().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
      if i > 0 && (digits.len() - i) % 3 == 0 {
        grouped.push(',');
      }
      grouped.push(ch);
    }
    if self.decimals > 0 {
      grouped.push('.');
      grouped.extend(std::iter::repeat_n('0', self.decimals));
    }
    format!("{}{grouped}", self.symbol)
  }
}

// ─── Animal table ─────────────────────────────────────────────────────────────

const HEADERS: [&str; 8] =
  ["ID", "Type", "Name", "Age", "Sex", "Breed", "Vaccinated", "Fee"];

/// Render `animals` as an aligned table, one row per animal.
pub fn animal_table(animals: &[&Animal], money: &Money) -> String {
  let rows: Vec<[String; 8]> = animals
    .iter()
    .map(|a| {
      [
        a.id().to_string(),
        a.type_name().to_owned(),
        a.name().to_owned(),
        a.age().to_string(),
        a.sex().to_owned(),
        a.breed().to_owned(),
        if a.is_vaccinated() { "yes" } else { "no" }.to_owned(),
        money.format(a.adoption_fee()),
      ]
    })
    .collect();

  let mut widths = HEADERS.map(|h| h.chars().count());
  for row in &rows {
    for (w, cell) in widths.iter_mut().zip(row) {
      *w = (*w).max(cell.chars().count());
    }
  }

  let mut out = String::new();
  push_row(&mut out, &HEADERS, &widths);
  for row in &rows {
    push_row(&mut out, row, &widths);
  }
  out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 8], widths: &[usize; 8]) {
  let line = cells
    .iter()
    .zip(widths)
    .map(|(cell, w)| {
      let cell = cell.as_ref();
      let pad = w.saturating_sub(cell.chars().count());
      format!("{cell}{}", " ".repeat(pad))
    })
    .collect::<Vec<_>>()
    .join("  ");
  let _ = writeln!(out, "{}", line.trim_end());
}

// ─── History ──────────────────────────────────────────────────────────────────

/// `<record view>, fee=<amount>`.
pub fn record_line(view: &RecordView<'_>, money: &Money) -> String {
  format!("{view}, fee={}", money.format(view.record.fee()))
}
