//! Quiz Evaluator.
//!
//! A quiz is an ordered list of multiple-choice questions. An attempt holds
//! one optional answer per question; it can only be scored once every
//! question has an answer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum options a question must offer.
pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

impl QuizQuestion {
    pub fn check(&self) -> Result<(), CoreError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(CoreError::Validation(format!(
                "Question '{}' needs at least {MIN_OPTIONS} options",
                self.prompt
            )));
        }
        if self.correct_option_index >= self.options.len() {
            return Err(CoreError::Validation(format!(
                "Question '{}' has correct option {} out of range",
                self.prompt, self.correct_option_index
            )));
        }
        Ok(())
    }
}

/// Check a whole quiz: non-empty, every question well formed.
pub fn validate_quiz(quiz: &[QuizQuestion]) -> Result<(), CoreError> {
    if quiz.is_empty() {
        return Err(CoreError::Validation(
            "A quiz must contain at least one question".into(),
        ));
    }
    quiz.iter().try_for_each(QuizQuestion::check)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Qualitative feedback label attached to a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Remark {
    Perfect,
    Great,
    PracticeMore,
}

impl Remark {
    /// `perfect` when everything is right, `great` at 80% or more,
    /// `practice-more` otherwise.
    pub fn for_score(correct: usize, total: usize) -> Self {
        if correct == total {
            Self::Perfect
        } else if correct * 5 >= total * 4 {
            Self::Great
        } else {
            Self::PracticeMore
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! Excellent work!",
            Self::Great => "Great job! Keep up the good work!",
            Self::PracticeMore => "Keep practicing to improve your score!",
        }
    }
}

/// Per-question outcome, for reviewing a submitted attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub selected_option_index: usize,
    pub correct_option_index: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total_count: usize,
    pub remark: Remark,
    pub results: Vec<QuestionResult>,
}

/// Count positions where the answer equals the correct option.
///
/// Unanswered positions never match. `answers` must be as long as `quiz`.
pub fn score(quiz: &[QuizQuestion], answers: &[Option<usize>]) -> Result<usize, CoreError> {
    check_lengths(quiz, answers)?;
    Ok(quiz
        .iter()
        .zip(answers)
        .filter(|(q, a)| **a == Some(q.correct_option_index))
        .count())
}

/// Score a complete attempt.
///
/// Fails with [`CoreError::IncompleteAnswers`] before any scoring when a
/// question is unanswered.
pub fn submit(quiz: &[QuizQuestion], answers: &[Option<usize>]) -> Result<ScoreReport, CoreError> {
    check_lengths(quiz, answers)?;

    let unanswered: Vec<usize> = answers
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_none())
        .map(|(idx, _)| idx)
        .collect();
    if !unanswered.is_empty() {
        return Err(CoreError::IncompleteAnswers { unanswered });
    }

    let correct_count = score(quiz, answers)?;
    let results = quiz
        .iter()
        .zip(answers.iter().flatten())
        .map(|(q, &selected)| QuestionResult {
            selected_option_index: selected,
            correct_option_index: q.correct_option_index,
            correct: selected == q.correct_option_index,
        })
        .collect();

    Ok(ScoreReport {
        correct_count,
        total_count: quiz.len(),
        remark: Remark::for_score(correct_count, quiz.len()),
        results,
    })
}

fn check_lengths(quiz: &[QuizQuestion], answers: &[Option<usize>]) -> Result<(), CoreError> {
    if answers.len() != quiz.len() {
        return Err(CoreError::Validation(format!(
            "Expected {} answers, got {}",
            quiz.len(),
            answers.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Attempt
// ---------------------------------------------------------------------------

/// A learner's in-flight attempt. Lives as long as the quiz view; never stored.
#[derive(Debug, Clone)]
pub struct QuizAttempt<'q> {
    quiz: &'q [QuizQuestion],
    answers: Vec<Option<usize>>,
    submitted: bool,
}

impl<'q> QuizAttempt<'q> {
    pub fn new(quiz: &'q [QuizQuestion]) -> Self {
        Self {
            quiz,
            answers: vec![None; quiz.len()],
            submitted: false,
        }
    }

    /// Record an answer. Ignored once the attempt has been submitted.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), CoreError> {
        if self.submitted {
            return Ok(());
        }
        let q = self.quiz.get(question).ok_or_else(|| {
            CoreError::Validation(format!("Question {question} does not exist"))
        })?;
        if option >= q.options.len() {
            return Err(CoreError::Validation(format!(
                "Option {option} does not exist for question {question}"
            )));
        }
        self.answers[question] = Some(option);
        Ok(())
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Submit the attempt. On `IncompleteAnswers` the attempt stays open.
    pub fn submit(&mut self) -> Result<ScoreReport, CoreError> {
        let report = submit(self.quiz, &self.answers)?;
        self.submitted = true;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn five_questions() -> Vec<QuizQuestion> {
        (0..5)
            .map(|i| QuizQuestion {
                prompt: format!("Question {i}"),
                options: vec!["a".into(), "b".into(), "c".into()],
                correct_option_index: i % 3,
            })
            .collect()
    }

    fn answers_with_correct(quiz: &[QuizQuestion], correct: usize) -> Vec<Option<usize>> {
        quiz.iter()
            .enumerate()
            .map(|(i, q)| {
                if i < correct {
                    Some(q.correct_option_index)
                } else {
                    Some((q.correct_option_index + 1) % q.options.len())
                }
            })
            .collect()
    }

    #[test]
    fn five_of_five_is_perfect() {
        let quiz = five_questions();
        let report = submit(&quiz, &answers_with_correct(&quiz, 5)).unwrap();
        assert_eq!(report.correct_count, 5);
        assert_eq!(report.total_count, 5);
        assert_eq!(report.remark, Remark::Perfect);
    }

    #[test]
    fn four_of_five_is_great() {
        let quiz = five_questions();
        let report = submit(&quiz, &answers_with_correct(&quiz, 4)).unwrap();
        assert_eq!(report.correct_count, 4);
        assert_eq!(report.remark, Remark::Great);
    }

    #[test]
    fn three_of_five_is_practice_more() {
        let quiz = five_questions();
        let report = submit(&quiz, &answers_with_correct(&quiz, 3)).unwrap();
        assert_eq!(report.correct_count, 3);
        assert_eq!(report.remark, Remark::PracticeMore);
    }

    #[test]
    fn remark_cutoff_is_exact() {
        // 8/10 is exactly 80%, 7/9 is just under.
        assert_eq!(Remark::for_score(8, 10), Remark::Great);
        assert_eq!(Remark::for_score(7, 9), Remark::PracticeMore);
        assert_eq!(Remark::for_score(0, 1), Remark::PracticeMore);
    }

    #[test]
    fn unanswered_question_blocks_submission() {
        let quiz = five_questions();
        let mut answers = answers_with_correct(&quiz, 5);
        answers[1] = None;
        answers[3] = None;

        assert_matches!(
            submit(&quiz, &answers),
            Err(CoreError::IncompleteAnswers { unanswered }) if unanswered == vec![1, 3]
        );
    }

    #[test]
    fn score_counts_unanswered_as_wrong() {
        let quiz = five_questions();
        let mut answers = answers_with_correct(&quiz, 5);
        answers[0] = None;
        assert_eq!(score(&quiz, &answers).unwrap(), 4);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let quiz = five_questions();
        assert_matches!(score(&quiz, &[Some(0)]), Err(CoreError::Validation(_)));
        assert_matches!(submit(&quiz, &[]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn results_mark_each_question() {
        let quiz = five_questions();
        let report = submit(&quiz, &answers_with_correct(&quiz, 3)).unwrap();
        let flags: Vec<bool> = report.results.iter().map(|r| r.correct).collect();
        assert_eq!(flags, vec![true, true, true, false, false]);
    }

    #[test]
    fn malformed_questions_fail_validation() {
        let mut quiz = five_questions();
        assert!(validate_quiz(&quiz).is_ok());

        quiz[0].correct_option_index = 3;
        assert!(validate_quiz(&quiz).is_err());

        quiz[0].correct_option_index = 0;
        quiz[0].options.truncate(1);
        assert!(validate_quiz(&quiz).is_err());

        assert!(validate_quiz(&[]).is_err());
    }

    #[test]
    fn attempt_locks_after_submit() {
        let quiz = five_questions();
        let mut attempt = QuizAttempt::new(&quiz);
        for (i, q) in quiz.iter().enumerate() {
            attempt.select(i, q.correct_option_index).unwrap();
        }
        assert!(attempt.is_complete());

        let report = attempt.submit().unwrap();
        assert_eq!(report.remark, Remark::Perfect);
        assert!(attempt.is_submitted());

        attempt.select(0, 2).unwrap();
        assert_eq!(attempt.answers()[0], Some(quiz[0].correct_option_index));
    }

    #[test]
    fn incomplete_attempt_stays_open() {
        let quiz = five_questions();
        let mut attempt = QuizAttempt::new(&quiz);
        attempt.select(0, 1).unwrap();

        assert_matches!(attempt.submit(), Err(CoreError::IncompleteAnswers { .. }));
        assert!(!attempt.is_submitted());
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let quiz = five_questions();
        let mut attempt = QuizAttempt::new(&quiz);
        assert!(attempt.select(9, 0).is_err());
        assert!(attempt.select(0, 3).is_err());
    }
}
