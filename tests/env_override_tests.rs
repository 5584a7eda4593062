//! Environment overlay on top of a config file
//!
//! Kept in its own test binary with a single test: the process environment
//! is shared by every test in a binary.
use std::io::Write;
use tco_compare::config::load_config;

const EXAMPLE: &str = include_str!("../tco.example.toml");

#[test]
fn test_env_variables_override_file_values() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(EXAMPLE.as_bytes())?;

    std::env::set_var("TCO__SCENARIO__VARIABLE_B", "30000");
    std::env::set_var("TCO__SWEEP__A__POINTS", "3");
    std::env::set_var("TCO__DISPLAY__CURRENCY", "SEK");
    let loaded = load_config(file.path());
    std::env::remove_var("TCO__SCENARIO__VARIABLE_B");
    std::env::remove_var("TCO__SWEEP__A__POINTS");
    std::env::remove_var("TCO__DISPLAY__CURRENCY");
    let cfg = loaded?;

    assert_eq!(cfg.scenario.variable_b, Some(30_000.0));
    assert_eq!(cfg.sweep.a.points, Some(3));
    assert_eq!(cfg.display.currency, "SEK");

    let (a_values, _) = cfg.sweep_values()?;
    assert_eq!(a_values, vec![80_000.0, 150_000.0, 220_000.0]);

    // Overlaid scenario value beats the sweep middle; an explicit override beats both
    let input = cfg.scenario_input(None, None)?;
    assert_eq!(input.variable_a_value, 150_000.0);
    assert_eq!(input.variable_b_value, 30_000.0);
    assert_eq!(cfg.scenario_input(None, Some(45_000.0))?.variable_b_value, 45_000.0);

    // Values not named in the environment still come from the file
    assert_eq!(cfg.vehicles.a.name, "Tesla Model Y");
    assert_eq!(cfg.sweep.b.points, Some(6));
    Ok(())
}
