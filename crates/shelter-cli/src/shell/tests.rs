//! Drives the shell with scripted input against the default roster.

use std::io::Cursor;

use shelter_core::{AnimalId, Shelter};

use super::{Flow, Shell};
use crate::{config::ShelterConfig, render::Money};

fn shell() -> Shell {
  let shelter = ShelterConfig::default().build_shelter().unwrap();
  Shell::new(shelter, Money { symbol: "฿".into(), decimals: 2 })
}

fn exec(shell: &mut Shell, line: &str) -> (Flow, String) {
  let mut out = Vec::new();
  let flow = shell.execute(line, &mut out).unwrap();
  (flow, String::from_utf8(out).unwrap())
}

#[test]
fn list_shows_the_roster() {
  let mut s = shell();
  let (flow, out) = exec(&mut s, "list");
  assert_eq!(flow, Flow::Continue);
  assert_eq!(out.lines().count(), 6, "{out}");
  assert!(out.contains("Thai Ridgeback"), "{out}");
  assert!(out.contains("฿550.00"), "{out}");
}

#[test]
fn search_combines_filters() {
  let mut s = shell();
  let (_, out) = exec(&mut s, "search --type cat --vaccinated-only --min-age 1 --max-age 5");
  assert!(out.starts_with("Results: 1\n"), "{out}");
  assert!(out.contains("Luna"), "{out}");
  assert!(!out.contains("Milo"), "{out}");

  let (_, out) = exec(&mut s, "search --sex female");
  assert!(out.starts_with("Results: 3\n"), "{out}");
}

#[test]
fn search_json_is_machine_readable() {
  let mut s = shell();
  let (_, out) = exec(&mut s, "search --type RABBIT --json");
  let value: serde_json::Value = serde_json::from_str(&out).unwrap();
  assert_eq!(value.as_array().unwrap().len(), 1);
  assert_eq!(value[0]["name"], "Bunny");
  assert_eq!(value[0]["species"], "Rabbit");
}

#[test]
fn adopt_prints_record_and_total() {
  let mut s = shell();
  let (_, out) = exec(&mut s, "adopt 1000 Somchai Jaidee --phone 081-234-5678");
  assert!(out.contains("Adoption complete"), "{out}");
  assert!(
    out.contains("Somchai Jaidee (081-234-5678) adopted Taro (id=1000, Dog) @ "),
    "{out}"
  );
  assert!(out.contains(", fee=฿1,800.00"), "{out}");
  assert!(out.contains("Total fees collected: ฿1,800.00"), "{out}");
  assert!(s.shelter().animal(AnimalId::new(1000)).unwrap().is_adopted());

  let (_, out) = exec(&mut s, "adopt 1000 Malee");
  assert_eq!(out, "Error: animal 1000 is already adopted\n");
  assert_eq!(s.shelter().records().len(), 1);
}

#[test]
fn adopt_unknown_id_reports_not_found() {
  let mut s = shell();
  let (_, out) = exec(&mut s, "adopt 42 Malee");
  assert_eq!(out, "Error: animal not found: 42\n");
}

#[test]
fn records_before_and_after_adoptions() {
  let mut s = shell();
  let (_, out) = exec(&mut s, "records");
  assert_eq!(out, "No adoptions yet.\n");

  exec(&mut s, "adopt 1001 Malee");
  exec(&mut s, "adopt 1002 Somchai");
  let (_, out) = exec(&mut s, "records");
  let lines: Vec<_> = out.lines().collect();
  assert!(lines[0].starts_with("- Malee adopted Milo (id=1001, Cat)"), "{out}");
  assert!(lines[1].starts_with("- Somchai adopted Bunny (id=1002, Rabbit)"), "{out}");
  assert_eq!(lines.last().copied(), Some("Total fees collected: ฿1,750.00"));
}

#[test]
fn add_validates_fields() {
  let mut s = shell();
  let (_, out) = exec(&mut s, "add rabbit Hop 3 Female Holland Lop");
  assert_eq!(out, "Added: Rabbit Hop (id=1005)\n");
  let hop = s.shelter().animal(AnimalId::new(1005)).unwrap();
  assert_eq!(hop.breed(), "Holland Lop");
  assert_eq!(hop.adoption_fee().amount(), 650);

  let (_, out) = exec(&mut s, "add dog Rex -1 Male");
  assert_eq!(out, "Error: animal age must not be negative (got -1)\n");

  let (_, out) = exec(&mut s, "add hamster Nibbles 1 Male");
  assert!(out.contains("unknown species"), "{out}");
  assert_eq!(s.shelter().animals().len(), 6);
}

#[test]
fn quoted_words_stay_together() {
  let mut s = shell();
  let (_, out) = exec(&mut s, r#"add cat "Mr Whiskers" 2 Male"#);
  assert_eq!(out, "Added: Cat Mr Whiskers (id=1005)\n");
  assert_eq!(s.shelter().animal(AnimalId::new(1005)).unwrap().name(), "Mr Whiskers");

  let (_, out) = exec(&mut s, r#"adopt 1005 Malee --phone "081 234 5678""#);
  assert!(out.contains("Malee (081 234 5678) adopted Mr Whiskers"), "{out}");
  assert_eq!(s.shelter().records()[0].adopter().phone(), "081 234 5678");
}

#[test]
fn quoted_blank_name_is_rejected() {
  let mut s = shell();
  let (_, out) = exec(&mut s, r#"add dog "  " 2 Male"#);
  assert_eq!(out, "Error: animal name is required\n");
  assert_eq!(s.shelter().animals().len(), 5);
}

#[test]
fn unbalanced_quote_is_reported() {
  let mut s = shell();
  let (flow, out) = exec(&mut s, r#"add cat "Mr Whiskers 2 Male"#);
  assert_eq!(flow, Flow::Continue);
  assert!(out.starts_with("Error: "), "{out}");
  assert_eq!(s.shelter().animals().len(), 5);
}

#[test]
fn add_reports_exhausted_ids() {
  let money = Money { symbol: "฿".into(), decimals: 2 };
  let mut s = Shell::new(Shelter::with_id_base(u64::MAX), money);
  let (_, out) = exec(&mut s, "add dog Rex 2 Male");
  assert_eq!(out, format!("Added: Dog Rex (id={})\n", u64::MAX));

  let (flow, out) = exec(&mut s, "add dog Max 2 Male");
  assert_eq!(flow, Flow::Continue);
  assert_eq!(out, "Error: animal ids exhausted\n");
  assert_eq!(s.shelter().animals().len(), 1);
}

#[test]
fn unknown_commands_do_not_end_the_session() {
  let mut s = shell();
  let (flow, out) = exec(&mut s, "feed everyone");
  assert_eq!(flow, Flow::Continue);
  assert!(!out.is_empty());
  assert_eq!(exec(&mut s, "   ").0, Flow::Continue);
}

#[test]
fn run_stops_at_quit() {
  let mut s = shell();
  let input = Cursor::new("adopt 1004 Malee\nexit\nadopt 1003 Somchai\n");
  let mut out = Vec::new();
  s.run(input, &mut out).unwrap();

  let out = String::from_utf8(out).unwrap();
  assert!(out.starts_with("Pet adoption shell."), "{out}");
  assert_eq!(s.shelter().records().len(), 1);
  assert_eq!(s.shelter().total_fees().amount(), 900);
}
