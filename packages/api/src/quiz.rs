//! Multiple-choice quiz state and scoring.

use crate::articles::DEFAULT_ARTICLE_ID;
use crate::dictionary::Dictionary;
use crate::keywords::vocabulary_quiz;
use crate::types::{Article, ArticleId, Language};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub article_id: Option<ArticleId>,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
    pub points_earned: u32,
    pub percentage: f64,
}

impl QuizResult {
    fn score(correct: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };
        Self {
            correct,
            total,
            points_earned: correct as u32 * POINTS_PER_CORRECT,
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizPhase {
    InProgress,
    Submitted(QuizResult),
}

/// How an option should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    answers: Vec<Option<usize>>,
    phase: QuizPhase,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(quiz: Quiz, now: DateTime<Utc>) -> Self {
        let answers = vec![None; quiz.len()];
        Self {
            quiz,
            current: 0,
            answers,
            phase: QuizPhase::InProgress,
            started_at: now,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.questions.get(self.current)
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn result(&self) -> Option<QuizResult> {
        match self.phase {
            QuizPhase::Submitted(result) => Some(result),
            QuizPhase::InProgress => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, QuizPhase::Submitted(_))
    }

    /// Record an answer for the current question. Returns false when the
    /// selection was ignored.
    pub fn select(&mut self, option: usize) -> bool {
        if self.is_submitted() {
            return false;
        }
        let Some(question) = self.quiz.questions.get(self.current) else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        self.answers[self.current] = Some(option);
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.quiz.len()
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.quiz.len())
    }

    /// Score the quiz. Unanswered questions count as wrong; a second call
    /// returns the first result.
    pub fn submit(&mut self) -> QuizResult {
        if let QuizPhase::Submitted(result) = self.phase {
            return result;
        }
        let correct = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.correct))
            .count();
        let result = QuizResult::score(correct, self.quiz.len());
        tracing::info!(
            "quiz.submit: correct={} total={} points={}",
            result.correct,
            result.total,
            result.points_earned
        );
        self.phase = QuizPhase::Submitted(result);
        result
    }

    pub fn option_state(&self, question: usize, option: usize) -> OptionState {
        let chosen = self.answer(question);
        match self.phase {
            QuizPhase::InProgress => {
                if chosen == Some(option) {
                    OptionState::Selected
                } else {
                    OptionState::Idle
                }
            }
            QuizPhase::Submitted(_) => {
                let correct = self.quiz.questions.get(question).map(|q| q.correct);
                if correct == Some(option) {
                    OptionState::Correct
                } else if chosen == Some(option) {
                    OptionState::Incorrect
                } else {
                    OptionState::Idle
                }
            }
        }
    }

    pub fn restart(&mut self, now: DateTime<Utc>) {
        self.current = 0;
        self.answers = vec![None; self.quiz.len()];
        self.phase = QuizPhase::InProgress;
        self.started_at = now;
    }

    pub fn time_spent_secs(&self, now: DateTime<Utc>) -> u64 {
        (now - self.started_at).num_seconds().max(0) as u64
    }
}

/// Quiz shipped with the default article.
pub fn default_quiz() -> Quiz {
    let q = |question: &str, options: [&str; 4], correct: usize| QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
    };
    Quiz {
        article_id: Some(DEFAULT_ARTICLE_ID.into()),
        questions: vec![
            q(
                "¿Qué opinan los expertos sobre los lanzamientos aéreos?",
                ["Son muy efectivos", "No son efectivos", "Son la mejor solución", "Son baratos"],
                1,
            ),
            q(
                "Según el activista palestino, ¿qué son realmente estos lanzamientos?",
                ["Ayuda real", "Fotos que engañan", "Una solución perfecta", "Un programa exitoso"],
                1,
            ),
            q(
                "¿Cómo se describe la situación humanitaria en Gaza?",
                ["Está mejorando", "Es normal", "Es devastadora", "Es excelente"],
                2,
            ),
        ],
    }
}

/// Language vocabulary questions ask for: French, or Spanish for French articles.
pub fn vocabulary_target(article_language: Language) -> Language {
    match article_language {
        Language::Fr => Language::Es,
        _ => Language::Fr,
    }
}

/// The built-in article keeps its comprehension quiz; other articles get a
/// vocabulary quiz when they have enough known keywords.
pub fn quiz_for_article(article: &Article, dictionary: &Dictionary) -> Option<Quiz> {
    if article.id.as_str() == DEFAULT_ARTICLE_ID {
        return Some(default_quiz());
    }
    vocabulary_quiz(article, dictionary, vocabulary_target(article.language))
}
