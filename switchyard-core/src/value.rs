//! The bundled subject type: text, integers and person records.

use crate::{
    extract::{Discriminant, Numeric, Tagged},
    subject::Subject,
};
use bitflags::bitflags;
use std::fmt;

/// The role a [`Person`] is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Writes code.
    Developer,
    /// Creates meetings.
    Manager,
    /// Neither of the above.
    Person,
}

impl Role {
    /// The role's name as it appears in type-name dispatch.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Manager => "Manager",
            Role::Person => "Person",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of [`Role`]s, used for role-membership predicates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoleSet: u8 {
        /// [`Role::Developer`].
        const DEVELOPER = 1;
        /// [`Role::Manager`].
        const MANAGER = 1 << 1;
        /// [`Role::Person`].
        const PERSON = 1 << 2;
    }
}

impl RoleSet {
    /// Whether `role` is a member of this set.
    pub fn includes(self, role: Role) -> bool {
        self.contains(RoleSet::from(role))
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        match role {
            Role::Developer => RoleSet::DEVELOPER,
            Role::Manager => RoleSet::MANAGER,
            Role::Person => RoleSet::PERSON,
        }
    }
}

/// A person-like record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    /// First name.
    pub name: String,
    /// Year of birth, when known.
    pub birth_year: Option<i32>,
    /// Role tag.
    pub role: Role,
}

impl Person {
    /// Create a person with an unknown birth year.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            birth_year: None,
            role,
        }
    }

    /// Shorthand for a [`Role::Developer`].
    pub fn developer(name: impl Into<String>) -> Self {
        Self::new(name, Role::Developer)
    }

    /// Shorthand for a [`Role::Manager`].
    pub fn manager(name: impl Into<String>) -> Self {
        Self::new(name, Role::Manager)
    }

    /// Set the birth year.
    pub fn born(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }
}

/// Discriminator of a [`Value`]'s variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Text`].
    Text,
    /// [`Value::Integer`].
    Integer,
    /// [`Value::Person`].
    Person,
}

impl Kind {
    /// The variant's name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Text => "Text",
            Kind::Integer => "Integer",
            Kind::Person => "Person",
        }
    }
}

/// A heterogeneous subject: a string, an integer, or a person record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A string.
    Text(String),
    /// An integer.
    Integer(i64),
    /// A tagged person record.
    Person(Person),
}

impl Value {
    /// The variant discriminator.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Integer(_) => Kind::Integer,
            Value::Person(_) => Kind::Person,
        }
    }

    /// The variant's name; for a person, the name of its role.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Person(person) => person.role.as_str(),
            other => other.kind().as_str(),
        }
    }

    /// The text, if this is [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The integer, if this is [`Value::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The record, if this is [`Value::Person`].
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Value::Person(person) => Some(person),
            _ => None,
        }
    }

    /// The person's name.
    pub fn name(&self) -> Option<&str> {
        self.as_person().map(|p| p.name.as_str())
    }

    /// The person's birth year.
    pub fn birth_year(&self) -> Option<i32> {
        self.as_person().and_then(|p| p.birth_year)
    }

    /// The person's role.
    pub fn role(&self) -> Option<Role> {
        self.as_person().map(|p| p.role)
    }
}

impl Subject for Value {}
impl Subject for Person {}
impl Subject for Role {}
impl Subject for Kind {}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<Person> for Value {
    fn from(person: Person) -> Self {
        Value::Person(person)
    }
}

// Cross-type equality used by value-equality predicates.

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_integer() == Some(i64::from(*other))
    }
}

impl PartialEq<Person> for Value {
    fn eq(&self, other: &Person) -> bool {
        self.as_person() == Some(other)
    }
}

impl Numeric for Value {
    fn as_i64(&self) -> Option<i64> {
        self.as_integer()
    }
}

impl Tagged for Value {
    fn role(&self) -> Option<Role> {
        Value::role(self)
    }
}

impl Tagged for Person {
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
}

impl Tagged for Role {
    fn role(&self) -> Option<Role> {
        Some(*self)
    }
}

impl Discriminant for Value {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        Value::kind(self)
    }
}
