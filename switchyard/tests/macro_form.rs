//! The `dispatch_table!` expression form.

use switchyard::prelude::*;

mod common;
use common::{anna, julia, mark};

#[test]
fn test_macro_value_dispatch() {
    let table: DispatchTable<Value> = dispatch_table! {
        equals("Julia") => respond("Writing code"),
        equals("Thomas") => respond("Writing this blog post"),
        else => respond("Watching TV"),
    };
    assert_eq!(table.len(), 2);
    assert_eq!(table.evaluate(&Value::from("Julia")), "Writing code");
    assert_eq!(table.evaluate(&Value::from("Mark")), "Watching TV");
}

#[test]
fn test_macro_with_closure_actions() {
    let table: DispatchTable<Value> = dispatch_table! {
        role_is(Role::Developer) => |v: &Value| format!("{} writes code", v.name().unwrap_or_default()),
        role_is(Role::Manager) => respond("Create meetings"),
        else => respond("Listen to music")
    };
    assert_eq!(table.evaluate(&julia()), "Julia writes code");
    assert_eq!(table.evaluate(&mark()), "Create meetings");
    assert_eq!(table.evaluate(&anna()), "Listen to music");
}

#[test]
fn test_macro_over_plain_integers() {
    let table: DispatchTable<i64, &'static str> = dispatch_table! {
        equals(1984_i64) => respond("Read Orwell"),
        in_range(1980..=1989) => respond("heavy metal"),
        above(1989) => respond("emails"),
        else => respond("dance"),
    };
    assert_eq!(table.evaluate(&1984), "Read Orwell");
    assert_eq!(table.evaluate(&1981), "heavy metal");
    assert_eq!(table.evaluate(&2024), "emails");
    assert_eq!(table.evaluate(&1950), "dance");
}

#[test]
fn test_macro_default_only() {
    let table: DispatchTable<Value> = dispatch_table! {
        else => respond("dance"),
    };
    assert!(table.is_empty());
    assert_eq!(table.evaluate(&Value::from(1984)), "dance");
}
