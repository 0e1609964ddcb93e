//! Quiz session - question index, selection and score for one category
//!
//! Phases run `AwaitingAnswer -> AnswerRevealed -> AwaitingAnswer(next) ...`
//! until the index reaches the category length, at which point the session
//! is `Complete`. A correct pick is credited when the revealed answer is
//! acknowledged with [`QuizSession::advance`], so the score never exceeds
//! the number of advances.

use std::sync::Arc;
use thiserror::Error;

use crate::content::{Catalog, QuizCategory, QuizQuestion};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {option} is out of range (question has {count} options)")]
    OptionOutOfRange { option: usize, count: usize },
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("question {index} has not been answered yet")]
    NotAnswered { index: usize },
    #[error("quiz is already complete")]
    Finished,
}

/// Observable state of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer { index: usize },
    AnswerRevealed { index: usize, correct: bool },
    Complete,
}

/// Result card shown once every question has been answered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub complete: bool,
}

impl QuizSummary {
    pub fn is_perfect(&self) -> bool {
        self.complete && self.total > 0 && self.score == self.total
    }
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    category: QuizCategory,
    questions: Arc<[QuizQuestion]>,
    index: usize,
    selected: Option<usize>,
    score: usize,
}

impl QuizSession {
    pub fn new(catalog: &Catalog, category: QuizCategory) -> Self {
        QuizSession {
            category,
            questions: catalog.questions_in(category),
            index: 0,
            selected: None,
            score: 0,
        }
    }

    pub fn category(&self) -> QuizCategory {
        self.category
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn phase(&self) -> QuizPhase {
        let Some(question) = self.questions.get(self.index) else {
            return QuizPhase::Complete;
        };
        match self.selected {
            None => QuizPhase::AwaitingAnswer { index: self.index },
            Some(option) => QuizPhase::AnswerRevealed {
                index: self.index,
                correct: question.is_correct(option),
            },
        }
    }

    /// (answered, total); an answer counts once it has been acknowledged
    pub fn progress(&self) -> (usize, usize) {
        (self.index.min(self.total()), self.total())
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Record a pick for the current question. Returns whether it was correct.
    ///
    /// The first pick stands: selecting again while the answer is revealed
    /// fails with [`QuizError::AlreadyAnswered`] and changes nothing.
    pub fn select_answer(&mut self, option: usize) -> Result<bool, QuizError> {
        let index = self.index;
        let question = self.questions.get(index).ok_or(QuizError::Finished)?;
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered { index });
        }
        if option >= question.option_count() {
            return Err(QuizError::OptionOutOfRange {
                option,
                count: question.option_count(),
            });
        }
        let correct = question.is_correct(option);
        self.selected = Some(option);
        tracing::debug!(category = self.category.slug(), index, option, correct, "answer selected");
        Ok(correct)
    }

    /// Move past a revealed answer, crediting it if correct
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        match self.phase() {
            QuizPhase::Complete => Err(QuizError::Finished),
            QuizPhase::AwaitingAnswer { index } => Err(QuizError::NotAnswered { index }),
            QuizPhase::AnswerRevealed { correct, .. } => {
                if correct {
                    self.score += 1;
                }
                self.index += 1;
                self.selected = None;
                let phase = self.phase();
                tracing::debug!(category = self.category.slug(), score = self.score, ?phase, "advanced");
                Ok(phase)
            }
        }
    }

    /// Abandon the current run and start `category` from the beginning
    pub fn change_category(&mut self, catalog: &Catalog, category: QuizCategory) {
        *self = QuizSession::new(catalog, category);
    }

    pub fn restart(&mut self, catalog: &Catalog) {
        self.change_category(catalog, self.category);
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            total: self.total(),
            complete: self.phase() == QuizPhase::Complete,
        }
    }
}
