//! Content store - courses, quiz bank, vocabulary and rosters
//!
//! The built-in catalog ships as an embedded YAML document and is validated
//! once at startup. Teacher-created courses and questions are appended for
//! the lifetime of the process through [`Catalog::add_course`] and
//! [`Catalog::add_question`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("content/catalog.yaml");

/// Buddy identifier
pub type BuddyId = u32;

/// Display language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Mr,
}

impl Locale {
    pub fn as_str(&self) -> &str {
        match self {
            Locale::En => "en",
            Locale::Mr => "mr",
        }
    }

    pub fn toggle(&self) -> Locale {
        match self {
            Locale::En => Locale::Mr,
            Locale::Mr => Locale::En,
        }
    }
}

/// Quiz topic grouping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizCategory {
    #[default]
    Basics,
    Numbers,
    Emotions,
    DailyLife,
    Intermediate,
    Advanced,
    Marathi,
    Practical,
}

impl QuizCategory {
    pub const ALL: [QuizCategory; 8] = [
        QuizCategory::Basics,
        QuizCategory::Numbers,
        QuizCategory::Emotions,
        QuizCategory::DailyLife,
        QuizCategory::Intermediate,
        QuizCategory::Advanced,
        QuizCategory::Marathi,
        QuizCategory::Practical,
    ];

    pub fn slug(&self) -> &str {
        match self {
            QuizCategory::Basics => "basics",
            QuizCategory::Numbers => "numbers",
            QuizCategory::Emotions => "emotions",
            QuizCategory::DailyLife => "daily-life",
            QuizCategory::Intermediate => "intermediate",
            QuizCategory::Advanced => "advanced",
            QuizCategory::Marathi => "marathi",
            QuizCategory::Practical => "practical",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> QuizCategory {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> QuizCategory {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Text in both locales. Marathi is optional and falls back to English.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mr: Option<String>,
}

impl Localized {
    pub fn new(en: impl Into<String>, mr: impl Into<String>) -> Self {
        let mr = mr.into();
        Localized {
            en: en.into(),
            mr: if mr.trim().is_empty() { None } else { Some(mr) },
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Mr => self
                .mr
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(&self.en),
        }
    }
}

/// A single multiple-choice question
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub category: QuizCategory,
    pub difficulty: Difficulty,
    pub prompt: Localized,
    /// English options; defines the option count.
    pub options: Vec<String>,
    #[serde(default)]
    pub options_mr: Vec<String>,
    pub correct: usize,
    #[serde(default)]
    pub image: Option<String>,
}

impl QuizQuestion {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Option text in the given locale. A missing or blank Marathi option
    /// falls back to the English text at the same index.
    pub fn option(&self, locale: Locale, index: usize) -> Option<&str> {
        let en = self.options.get(index)?;
        match locale {
            Locale::En => Some(en),
            Locale::Mr => Some(
                self.options_mr
                    .get(index)
                    .map(String::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or(en),
            ),
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    fn has_locale_mismatch(&self) -> bool {
        !self.options_mr.is_empty() && self.options_mr.len() != self.options.len()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: Localized,
    pub description: Localized,
    pub level: String,
    pub duration: String,
    #[serde(default)]
    pub lessons: u32,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub enrolled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: u32,
    pub word: Localized,
    pub translation: String,
    pub category: Localized,
    pub image: String,
}

/// A study buddy available for chat
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Buddy {
    pub id: BuddyId,
    pub name: String,
    pub avatar: String,
    pub online: bool,
    pub level: String,
    pub last_seen: String,
    pub progress: u8,
    pub email: String,
    pub courses_completed: u32,
    pub total_quizzes: u32,
    pub quiz_score: u32,
}

/// Student roster record shown on the teacher dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub progress: u8,
    pub level: String,
    pub total_quiz_score: u32,
    #[serde(default)]
    pub lessons_completed: u32,
    pub last_active: String,
}

/// Canned buddy replies per locale
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannedReplies {
    pub en: Vec<String>,
    pub mr: Vec<String>,
}

impl CannedReplies {
    pub fn for_locale(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => &self.en,
            Locale::Mr => &self.mr,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("question {id}: correct option {correct} is out of range ({count} options)")]
    CorrectOptionMissing { id: u32, correct: usize, count: usize },
    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),
    #[error("duplicate buddy id {0}")]
    DuplicateBuddy(BuddyId),
    #[error("no canned replies for locale '{0}'")]
    NoReplies(String),
}

/// All content the portal shows
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
    #[serde(default)]
    pub buddies: Vec<Buddy>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub replies: CannedReplies,
}

impl Catalog {
    /// Load the built-in catalog
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for q in &self.questions {
            if !seen.insert(q.id) {
                return Err(CatalogError::DuplicateQuestion(q.id));
            }
            if q.correct >= q.options.len() {
                return Err(CatalogError::CorrectOptionMissing {
                    id: q.id,
                    correct: q.correct,
                    count: q.options.len(),
                });
            }
            if q.has_locale_mismatch() {
                tracing::warn!(
                    id = q.id,
                    en = q.options.len(),
                    mr = q.options_mr.len(),
                    "option lists differ between locales, falling back to English"
                );
            }
        }

        let mut buddies = HashSet::new();
        for b in &self.buddies {
            if !buddies.insert(b.id) {
                return Err(CatalogError::DuplicateBuddy(b.id));
            }
        }

        for locale in [Locale::En, Locale::Mr] {
            if self.replies.for_locale(locale).is_empty() {
                return Err(CatalogError::NoReplies(locale.as_str().to_string()));
            }
        }
        Ok(())
    }

    /// Questions of one category in catalog order
    pub fn questions_in(&self, category: QuizCategory) -> Arc<[QuizQuestion]> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect()
    }

    pub fn category_len(&self, category: QuizCategory) -> usize {
        self.questions.iter().filter(|q| q.category == category).count()
    }

    pub fn buddy(&self, id: BuddyId) -> Option<&Buddy> {
        self.buddies.iter().find(|b| b.id == id)
    }

    /// Append a course, assigning the next free id
    pub fn add_course(&mut self, mut course: Course) -> u32 {
        let id = self.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        course.id = id;
        self.courses.push(course);
        id
    }

    /// Append a question, assigning the next free id
    pub fn add_question(&mut self, mut question: QuizQuestion) -> u32 {
        let id = self.questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        question.id = id;
        self.questions.push(question);
        id
    }
}
