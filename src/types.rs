//! Core data model.
//!
//! A [`Record`] is a small three-field value (name, age, sex). Pipelines operate on ordered
//! sequences of records; [`sample_records`] builds the fixed four-record set used by the
//! demonstrations and tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single named record.
///
/// No invariant is enforced; every field may be changed at any time by the holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    age: i64,
    sex: String,
}

impl Record {
    /// Create a fully populated record.
    pub fn new(name: impl Into<String>, age: i64, sex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            sex: sex.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    /// Builder-style name setter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder-style age setter.
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    /// Builder-style sex setter.
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = sex.into();
        self
    }

    /// Update the name in place. Returns `&mut Self` so updates can be chained.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Update the age in place. Returns `&mut Self` so updates can be chained.
    pub fn set_age(&mut self, age: i64) -> &mut Self {
        self.age = age;
        self
    }

    /// Update the sex in place. Returns `&mut Self` so updates can be chained.
    pub fn set_sex(&mut self, sex: impl Into<String>) -> &mut Self {
        self.sex = sex.into();
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record(name={}, age={}, sex={})",
            self.name, self.age, self.sex
        )
    }
}

/// Name shared by every record in [`sample_records`].
pub const SAMPLE_NAME: &str = "liaohongyang";
/// Sex label carried by the first and last sample records.
pub const FEMALE: &str = "女";
/// Sex label carried by the second and third sample records.
pub const MALE: &str = "男";

/// Build the fixed four-record sequence: ages 1..=4, one shared name, sexes `女 男 男 女`.
///
/// A fresh `Vec` is returned on every call, so callers never share mutable state.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::default().with_age(1).with_name(SAMPLE_NAME).with_sex(FEMALE),
        Record::default().with_age(2).with_name(SAMPLE_NAME).with_sex(MALE),
        Record::default().with_age(3).with_name(SAMPLE_NAME).with_sex(MALE),
        Record::default().with_age(4).with_name(SAMPLE_NAME).with_sex(FEMALE),
    ]
}
