pub mod answers;
pub mod bulk;
pub mod logging;
pub mod progress;
pub mod questions;
pub mod sampler;
pub mod scoring;
pub mod tables;
pub mod tips;

pub use answers::{AnswerValue, SurveyAnswer};
pub use bulk::read_bulk;
pub use progress::{average_score, improved, points_awarded, CategoryShare, Streak};
pub use questions::{InputType, Question, QuestionBank, QuestionOption, QUESTIONS};
pub use sampler::{get_random_questions, random_questions_with};
pub use scoring::{calculate_carbon_score, Category, ImpactCategory, ScoreResult};
pub use tables::WeightTable;
pub use tips::{generate_tips, Tip};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The id column of a batch row is empty
    #[error("row {row} has no id")]
    MissingId { row: usize },
    /// The answer is not one of the question's options
    #[error("'{value}' is not an option of question '{question}'")]
    IllegalAnswer { question: String, value: String },
}
