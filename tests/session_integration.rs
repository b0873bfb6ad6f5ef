//! Session loop integration tests
//!
//! Drives the interactive loop with scripted input, end to end through the
//! metrics engine.

use bodymetrics::cli::Config;
use bodymetrics::metrics::{BmiCategory, BodyFatCategory, Gender};
use bodymetrics::repl::{ReplConfig, ReplSession, ScriptedInput};
use std::io::Write;
use tempfile::NamedTempFile;

fn config() -> ReplConfig {
    ReplConfig {
        show_banner: false,
        ..ReplConfig::default()
    }
}

#[test]
fn test_full_male_run_records_assessment() {
    let input = ScriptedInput::new(["170", "70", "80", "40", "M", "35", "n"]);
    let mut repl = ReplSession::new(input, config());

    repl.run().unwrap();

    let history = repl.session().get_history(10);
    assert_eq!(history.len(), 1);
    let record = history[0];
    assert_eq!(record.gender, Gender::Male);
    assert!((record.bmi - 24.22).abs() < 0.01);
    assert!((record.body_fat_percentage - 11.96).abs() < 0.01);
    assert_eq!(record.bmi_category, BmiCategory::Normal);
    assert_eq!(record.body_fat_category, BodyFatCategory::Athletes);
}

#[test]
fn test_full_female_run_uses_hip() {
    let input = ScriptedInput::new(["170", "70", "80", "40", "F", "95", "35", "n"]);
    let mut repl = ReplSession::new(input, config());

    repl.run().unwrap();

    let record = repl.session().get_history(1)[0].clone();
    assert_eq!(record.gender, Gender::Female);
    assert!((record.body_fat_percentage - 24.58).abs() < 0.01);
    assert_eq!(record.body_fat_category, BodyFatCategory::Obese);
}

#[test]
fn test_prompt_order() {
    let input = ScriptedInput::new(["165", "60", "70", "32", "f", "95", "28", "n"]);
    let mut repl = ReplSession::new(input, config());

    repl.run().unwrap();

    let prompts = repl.reader().prompts();
    let expected = ["height", "weight", "waist", "neck", "gender", "hip", "age", "again"];
    assert_eq!(prompts.len(), expected.len());
    for (prompt, word) in prompts.iter().zip(expected) {
        assert!(prompt.contains(word), "prompt '{}' should mention {}", prompt, word);
    }
}

#[test]
fn test_garbage_never_crashes() {
    let mut lines: Vec<String> = ["", "   ", "1e999", "--", "NaN", "/nope", "🙂"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    lines.extend(["170", "70", "80", "40", "M", "35", "n"].map(String::from));

    let mut repl = ReplSession::new(ScriptedInput::new(lines), config());

    assert!(repl.run().is_ok());
    assert_eq!(repl.session().run_count(), 1);
}

#[test]
fn test_multiple_runs_are_independent() {
    let input = ScriptedInput::new([
        "170", "70", "80", "40", "F", "95", "35", "y", "170", "70", "80", "40", "M", "35", "n",
    ]);
    let mut repl = ReplSession::new(input, config());

    repl.run().unwrap();

    let history = repl.session().get_history(2);
    assert_eq!(history[0].gender, Gender::Male);
    assert_eq!(history[1].gender, Gender::Female);
    assert!((history[0].body_fat_percentage - 11.96).abs() < 0.01);
}

#[test]
fn test_session_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[display]\nshow_banner = false\ndecimal_places = 1\n\n[session]\nprompt_retry = false\n"
    )
    .unwrap();

    let config = Config::load(Some(file.path().to_path_buf())).unwrap();
    let input = ScriptedInput::new(["170", "70", "80", "40", "M", "35"]);
    let mut repl = ReplSession::new(input, ReplConfig::from(&config));

    repl.run().unwrap();

    assert_eq!(repl.session().run_count(), 1);
    assert!(!repl
        .reader()
        .prompts()
        .iter()
        .any(|p| p.contains("again")));
}
