use rand::seq::SliceRandom;
use rand::Rng;

use crate::questions::{Question, QuestionBank, QUESTIONS};

/// Fewest questions asked in one session.
pub const MIN_QUESTIONS: usize = 10;
/// Most questions asked in one session.
pub const MAX_QUESTIONS: usize = 12;

/// Draws a fresh survey selection from the bundled bank.
///
/// Every call shuffles anew; no question is guaranteed to appear.
pub fn get_random_questions() -> Vec<Question> {
    random_questions_with(&QUESTIONS, &mut rand::thread_rng())
}

/// Shuffles `bank` with `rng` and keeps a prefix of 10 to 12 questions.
pub fn random_questions_with<R: Rng + ?Sized>(bank: &QuestionBank, rng: &mut R) -> Vec<Question> {
    let mut questions = bank.questions().to_vec();
    questions.shuffle(rng);
    let count = rng.gen_range(MIN_QUESTIONS..=MAX_QUESTIONS);
    questions.truncate(count);
    tracing::debug!(count = questions.len(), "sampled survey questions");
    questions
}
