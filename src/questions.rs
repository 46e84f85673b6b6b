use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::Error;

/// The survey question bank, bundled with the crate.
pub static QUESTIONS: Lazy<QuestionBank> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/questions.json"))
        .expect("bundled question bank is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// One choice from the option list
    Select,
    /// Yes/no
    Radio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub question: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Answer key this question fills in.
    ///
    /// The vehicle question is published as `transportation` but scored
    /// from `transportationType`.
    pub fn answer_key(&self) -> &str {
        match self.id.as_str() {
            "transportation" => "transportationType",
            id => id,
        }
    }

    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }

    /// Checks `value` against the option list.
    pub fn validate(&self, value: &str) -> Result<(), Error> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(Error::IllegalAnswer {
                question: self.id.clone(),
                value: value.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Looks a question up by its id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
