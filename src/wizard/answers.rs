//! Accumulated form answers.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Field keys recorded by the form steps.
pub mod field_keys {
    /// Single-choice selection on the priority step.
    pub const PRIORITY: &str = "priority";
    /// Multi-choice selection on the qualifications step.
    pub const QUALIFICATIONS: &str = "qualifications";
    pub const ADDRESS: &str = "address";
    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    /// Agreement checkbox on the terms step.
    pub const TERMS_AGREEMENT: &str = "terms_agreement";
}

/// A single recorded answer.
///
/// `Text` covers free-form inputs and single-choice selections (both are
/// plain strings on the wire), `Choices` a multi-choice selection, and
/// `Flag` an agreement checkbox. Serialized untagged so a full answer set
/// becomes the flat JSON object the submission endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    Choices(BTreeSet<String>),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Choices(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<BTreeSet<String>> for AnswerValue {
    fn from(value: BTreeSet<String>) -> Self {
        Self::Choices(value)
    }
}

/// Accumulated user-provided data across all visited steps.
///
/// Keys are upserted as the user interacts and never removed during a
/// session; data for unvisited steps is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) an answer.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Text value for `key`, if recorded as text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    /// Multi-choice selection for `key`, if recorded as one.
    pub fn choices(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.get(key).and_then(AnswerValue::as_choices)
    }

    /// Flag value for `key`; unrecorded flags read as false.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(AnswerValue::as_flag).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
