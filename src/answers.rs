use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A single survey answer: an option token, or a yes/no flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

/// Answers of one survey session, keyed by question input key
/// (`transportationType`, `dietType`, ...).
///
/// Keys may be missing; unknown keys are kept but never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyAnswer {
    values: BTreeMap<String, AnswerValue>,
}

impl SurveyAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a flat JSON object such as `{"dietType": "vegan", "renewableEnergy": true}`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Option token stored under `key`. Flags are not tokens.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(AnswerValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Truthiness of a yes/no answer.
    ///
    /// Radio questions submit their options as the strings `"true"` and
    /// `"false"`, so text values are interpreted too.
    pub fn flag(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(AnswerValue::Flag(value)) => *value,
            Some(AnswerValue::Text(value)) => {
                let value = value.trim();
                value.eq_ignore_ascii_case("true")
                    || value.eq_ignore_ascii_case("yes")
                    || value == "1"
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}
