#![allow(dead_code)]

use switchyard::prelude::*;

// ============================================================================
// Subjects
// ============================================================================

pub fn julia() -> Value {
    Value::from(Person::developer("Julia").born(1980))
}

pub fn thomas() -> Value {
    Value::from(Person::developer("Thomas").born(1992))
}

pub fn mark() -> Value {
    Value::from(Person::manager("Mark").born(1975))
}

pub fn anna() -> Value {
    Value::from(Person::new("Anna", Role::Person))
}

// ============================================================================
// Tables
// ============================================================================

/// Dispatch on a first name.
pub fn favorite_task() -> DispatchTable<Value> {
    DispatchTable::builder()
        .rule(equals("Julia"), respond("Writing code"))
        .rule(equals("Thomas"), respond("Writing this blog post"))
        .otherwise(respond("Watching TV"))
        .build()
        .expect("table has a default")
}

/// Dispatch on the role tag.
pub fn role_task() -> DispatchTable<Value> {
    DispatchTable::builder()
        .rule(role_is(Role::Developer), respond("Write code"))
        .rule(role_is(Role::Manager), respond("Create meetings"))
        .otherwise(respond("Listen to music"))
        .build()
        .expect("table has a default")
}

/// A guarded developer rule listed before the general developer rule.
pub fn developer_hobby() -> DispatchTable<Value> {
    DispatchTable::builder()
        .labeled(
            "eighties developer",
            role_is(Role::Developer).and(project(Value::birth_year, in_range(1980..=1989))),
            respond("listens to metal"),
        )
        .labeled("developer", role_is(Role::Developer), respond("writes code"))
        .otherwise(respond("does something else"))
        .build()
        .expect("table has a default")
}

/// Dispatch on a year.
pub fn decade() -> DispatchTable<Value> {
    DispatchTable::builder()
        .rule(equals(1984_i64), respond("Read Orwell"))
        .rule(in_range(1980..=1989), respond("heavy metal"))
        .rule(above(1989), respond("emails"))
        .otherwise(respond("dance"))
        .build()
        .expect("table has a default")
}
