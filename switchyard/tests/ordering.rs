//! First-match ordering, short-circuiting and the default path.

use switchyard::{
    prelude::*,
    testing::{CountingPredicate, RecordingAction},
};

mod common;
use common::{julia, mark};

#[test]
fn test_earlier_rule_wins_over_more_specific_rule() {
    // the general rule shadows the guarded one
    let table: DispatchTable<Value> = DispatchTable::builder()
        .rule(role_is(Role::Developer), respond("writes code"))
        .rule(
            role_is(Role::Developer).and(project(Value::birth_year, in_range(1980..=1989))),
            respond("listens to metal"),
        )
        .otherwise(respond("does something else"))
        .build()
        .unwrap();

    assert_eq!(table.evaluate(&julia()), "writes code");
    assert_eq!(table.matching_rule(&julia()), Some(0));
}

#[test]
fn test_exact_match_listed_after_range_is_shadowed() {
    let table: DispatchTable<Value> = DispatchTable::builder()
        .rule(in_range(1980..=1989), respond("heavy metal"))
        .rule(equals(1984_i64), respond("Read Orwell"))
        .otherwise(respond("dance"))
        .build()
        .unwrap();

    assert_eq!(table.evaluate(&Value::from(1984)), "heavy metal");
}

#[test]
fn test_later_predicates_are_not_evaluated() {
    let first = CountingPredicate::new(role_is(Role::Developer));
    let second = CountingPredicate::new(always());
    let first_count = first.clone();
    let second_count = second.clone();

    let table: DispatchTable<Value> = DispatchTable::builder()
        .rule(first, respond("developer"))
        .rule(second, respond("anyone"))
        .build()
        .unwrap();

    assert_eq!(table.evaluate(&julia()), "developer");
    assert_eq!(first_count.count(), 1);
    assert_eq!(second_count.count(), 0);

    assert_eq!(table.evaluate(&mark()), "anyone");
    assert_eq!(first_count.count(), 2);
    assert_eq!(second_count.count(), 1);
}

#[test]
fn test_exactly_one_action_runs() {
    let developer = RecordingAction::new("developer".to_string());
    let anyone = RecordingAction::new("anyone".to_string());
    let fallback = RecordingAction::new("fallback".to_string());
    let (developer_seen, anyone_seen, fallback_seen) =
        (developer.clone(), anyone.clone(), fallback.clone());

    let table: DispatchTable<Value> = DispatchTable::builder()
        .rule(role_is(Role::Developer), developer)
        .rule(role_is(Role::Developer).or(role_is(Role::Manager)), anyone)
        .otherwise(fallback)
        .build()
        .unwrap();

    table.evaluate(&julia());
    table.evaluate(&mark());
    table.evaluate(&Value::from("nobody"));

    assert_eq!(developer_seen.subjects(), vec![julia()]);
    assert_eq!(anyone_seen.subjects(), vec![mark()]);
    assert_eq!(fallback_seen.subjects(), vec![Value::from("nobody")]);
}

#[test]
fn test_no_rules_with_default_always_defaults() {
    let table: DispatchTable<Value> = DispatchTable::builder()
        .otherwise(respond("Watching TV"))
        .build()
        .unwrap();
    assert!(table.is_empty());
    assert_eq!(table.evaluate(&julia()), "Watching TV");
    assert_eq!(table.resolve(&julia()).branch, Branch::Default);
}

#[test]
fn test_no_rules_and_no_default_is_a_configuration_error() {
    let result: Result<DispatchTable<Value>, _> = DispatchTable::builder().build();
    assert_eq!(result.unwrap_err(), ConfigurationError::Empty);

    let result = DispatchTable::<Value, String>::new(Vec::new(), None);
    assert!(matches!(result, Err(ConfigurationError::Empty)));
}

#[test]
fn test_negated_guard() {
    let table: DispatchTable<Value> = DispatchTable::builder()
        .rule(role_is(Role::Manager).negate(), respond("not a manager"))
        .otherwise(respond("manager"))
        .build()
        .unwrap();
    assert_eq!(table.evaluate(&julia()), "not a manager");
    assert_eq!(table.evaluate(&Value::from(3)), "not a manager");
    assert_eq!(table.evaluate(&mark()), "manager");
}

#[test]
fn test_repeated_evaluation_is_deterministic() {
    let table = common::decade();
    let first: Vec<String> = (1970..2000)
        .map(|year: i64| table.evaluate(&Value::from(year)))
        .collect();
    let second: Vec<String> = (1970..2000)
        .map(|year: i64| table.evaluate(&Value::from(year)))
        .collect();
    assert_eq!(first, second);
}
