use age_gate::domain::data;
use age_gate::{
    AgeRegistry, CheckEngine, EligibilityChecker, EligibleRange, JsonReporter, Outcome,
    TestRoster, TextReporter,
};
use anyhow::Result;

const EXPECTED: &str = "Dias прошёл тест (возраст: 20)\n\
Timur найден, но возраст не подходит (возраст: 25)\n\
Sultan прошёл тест (возраст: 18)\n\
Ali не найден в словаре \n\
Amina найден, но возраст не подходит (возраст: 17)\n";

fn run_text(registry: AgeRegistry, roster: &TestRoster) -> Result<String> {
    let engine = CheckEngine::new(EligibilityChecker::new(registry, EligibleRange::default()));
    let mut reporter = TextReporter::new(Vec::new());
    engine.run(roster, &mut reporter)?;
    Ok(String::from_utf8(reporter.into_inner())?)
}

#[test]
fn test_builtin_data_produces_expected_lines() -> Result<()> {
    let output = run_text(data::people_ages(), &data::test_names())?;
    assert_eq!(output, EXPECTED);
    Ok(())
}

#[test]
fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let first = run_text(data::people_ages(), &data::test_names())?;
    for _ in 0..10 {
        assert_eq!(run_text(data::people_ages(), &data::test_names())?, first);
    }
    Ok(())
}

#[test]
fn test_line_count_and_order_follow_roster() -> Result<()> {
    let roster: TestRoster = ["Amina", "Ali", "Amina", "Zhanna", "Aruzhan"]
        .into_iter()
        .collect();
    let output = run_text(data::people_ages(), &roster)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), roster.len());
    for (line, name) in lines.iter().zip(roster.iter()) {
        assert!(line.starts_with(name), "{line:?} should start with {name:?}");
    }
    assert_eq!(lines[3], "Zhanna не найден в словаре ");
    assert_eq!(lines[4], "Aruzhan прошёл тест (возраст: 19)");
    Ok(())
}

#[test]
fn test_every_age_classifies_by_range() {
    let registry: AgeRegistry = (0u32..=40).map(|age| (format!("p{age}"), age)).collect();
    let checker = EligibilityChecker::new(registry, EligibleRange::default());

    for age in 0u32..=40 {
        let outcome = checker.classify(&format!("p{age}"));
        if (18..=24).contains(&age) {
            assert_eq!(outcome, Outcome::Passed { age });
        } else {
            assert_eq!(outcome, Outcome::Ineligible { age });
        }
    }
    assert_eq!(checker.classify("p41"), Outcome::NotFound);
}

#[test]
fn test_json_output_for_builtin_data() -> Result<()> {
    let engine = CheckEngine::new(EligibilityChecker::new(
        data::people_ages(),
        EligibleRange::default(),
    ));
    let mut reporter = JsonReporter::new(Vec::new());
    let summary = engine.run(&data::test_names(), &mut reporter)?;

    let output = String::from_utf8(reporter.into_inner())?;
    let outcomes: Vec<String> = output
        .lines()
        .map(|line| -> Result<String> {
            let value: serde_json::Value = serde_json::from_str(line)?;
            Ok(value["outcome"].as_str().unwrap_or_default().to_string())
        })
        .collect::<Result<_>>()?;

    assert_eq!(
        outcomes,
        vec!["passed", "ineligible", "passed", "not_found", "ineligible"]
    );
    assert_eq!(summary.total, 5);
    Ok(())
}
