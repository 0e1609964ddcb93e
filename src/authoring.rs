//! Teacher content-creation forms
//!
//! A draft is validated on submit and converted into a catalog entity; the
//! catalog assigns the id when the entity is added.

use thiserror::Error;

use crate::content::{Course, Difficulty, Localized, QuizCategory, QuizQuestion};

/// Option slots offered by the quiz form
pub const OPTION_SLOTS: usize = 5;

const COURSE_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("correct option {0} is empty")]
    CorrectOptionMissing(usize),
}

/// Which authoring form is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Course,
    Quiz,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub title_mr: String,
    pub description: String,
    pub description_mr: String,
    pub level: String,
    pub duration: String,
    pub video: String,
    pub image: String,
}

impl Default for CourseDraft {
    fn default() -> Self {
        CourseDraft {
            title: String::new(),
            title_mr: String::new(),
            description: String::new(),
            description_mr: String::new(),
            level: String::from(COURSE_LEVELS[0]),
            duration: String::from("2 weeks"),
            video: String::new(),
            image: String::new(),
        }
    }
}

impl CourseDraft {
    /// Editable text fields, in tab order
    pub const FIELDS: [&'static str; 7] = [
        "Title",
        "Title (Marathi)",
        "Description",
        "Description (Marathi)",
        "Duration",
        "Video URL",
        "Image URL",
    ];

    pub fn field(&self, index: usize) -> Option<&String> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.title_mr),
            2 => Some(&self.description),
            3 => Some(&self.description_mr),
            4 => Some(&self.duration),
            5 => Some(&self.video),
            6 => Some(&self.image),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.title),
            1 => Some(&mut self.title_mr),
            2 => Some(&mut self.description),
            3 => Some(&mut self.description_mr),
            4 => Some(&mut self.duration),
            5 => Some(&mut self.video),
            6 => Some(&mut self.image),
            _ => None,
        }
    }

    pub fn cycle_level(&mut self) {
        let pos = COURSE_LEVELS.iter().position(|l| *l == self.level).unwrap_or(0);
        self.level = COURSE_LEVELS[(pos + 1) % COURSE_LEVELS.len()].to_string();
    }

    pub fn to_course(&self) -> Result<Course, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::MissingField("description"));
        }
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Ok(Course {
            id: 0,
            title: Localized::new(self.title.trim(), self.title_mr.trim()),
            description: Localized::new(self.description.trim(), self.description_mr.trim()),
            level: self.level.clone(),
            duration: self.duration.trim().to_string(),
            lessons: 0,
            progress: 0,
            video: optional(&self.video),
            images: optional(&self.image).into_iter().collect(),
            rating: 0.0,
            enrolled: false,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizDraft {
    pub question: String,
    pub question_mr: String,
    pub options: [String; OPTION_SLOTS],
    pub options_mr: [String; OPTION_SLOTS],
    pub correct: usize,
    pub category: QuizCategory,
    pub difficulty: Difficulty,
}

impl QuizDraft {
    /// Question, question (Marathi), then English and Marathi option slots
    pub const FIELD_COUNT: usize = 2 + 2 * OPTION_SLOTS;

    pub fn field_label(index: usize) -> Option<String> {
        match index {
            0 => Some(String::from("Question")),
            1 => Some(String::from("Question (Marathi)")),
            i if i < 2 + OPTION_SLOTS => Some(format!("Option {}", i - 1)),
            i if i < Self::FIELD_COUNT => Some(format!("Option {} (Marathi)", i - 1 - OPTION_SLOTS)),
            _ => None,
        }
    }

    pub fn field(&self, index: usize) -> Option<&String> {
        match index {
            0 => Some(&self.question),
            1 => Some(&self.question_mr),
            i if i < 2 + OPTION_SLOTS => self.options.get(i - 2),
            i if i < Self::FIELD_COUNT => self.options_mr.get(i - 2 - OPTION_SLOTS),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.question),
            1 => Some(&mut self.question_mr),
            i if i < 2 + OPTION_SLOTS => self.options.get_mut(i - 2),
            i if i < Self::FIELD_COUNT => self.options_mr.get_mut(i - 2 - OPTION_SLOTS),
            _ => None,
        }
    }

    pub fn next_correct(&mut self) {
        self.correct = (self.correct + 1) % OPTION_SLOTS;
    }

    pub fn prev_correct(&mut self) {
        self.correct = (self.correct + OPTION_SLOTS - 1) % OPTION_SLOTS;
    }

    /// Blank option slots are dropped; the correct index is remapped onto the
    /// kept options.
    pub fn to_question(&self) -> Result<QuizQuestion, FormError> {
        if self.question.trim().is_empty() {
            return Err(FormError::MissingField("question"));
        }
        if self.options[0].trim().is_empty() {
            return Err(FormError::MissingField("option 1"));
        }
        if self.options[self.correct].trim().is_empty() {
            return Err(FormError::CorrectOptionMissing(self.correct + 1));
        }

        let kept: Vec<usize> = (0..OPTION_SLOTS)
            .filter(|&i| !self.options[i].trim().is_empty())
            .collect();
        let correct = kept.iter().position(|&i| i == self.correct).unwrap_or(0);
        let options = kept.iter().map(|&i| self.options[i].trim().to_string()).collect();
        let options_mr = if self.options_mr.iter().all(|o| o.trim().is_empty()) {
            Vec::new()
        } else {
            kept.iter().map(|&i| self.options_mr[i].trim().to_string()).collect()
        };

        Ok(QuizQuestion {
            id: 0,
            category: self.category,
            difficulty: self.difficulty,
            prompt: Localized::new(self.question.trim(), self.question_mr.trim()),
            options,
            options_mr,
            correct,
            image: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Locale;

    #[test]
    fn test_course_requires_title_and_description() {
        let mut draft = CourseDraft::default();
        assert_eq!(draft.to_course(), Err(FormError::MissingField("title")));
        draft.title = "Signs at Work".into();
        assert_eq!(draft.to_course(), Err(FormError::MissingField("description")));
        draft.description = "   ".into();
        assert_eq!(draft.to_course(), Err(FormError::MissingField("description")));
    }

    #[test]
    fn test_course_conversion() {
        let mut draft = CourseDraft::default();
        draft.title = "Signs at Work".into();
        draft.description = "Office vocabulary".into();
        draft.video = "https://example.com/v".into();
        draft.cycle_level();

        let course = draft.to_course().unwrap();
        assert_eq!(course.level, "Intermediate");
        assert_eq!(course.duration, "2 weeks");
        assert_eq!(course.title.get(Locale::Mr), "Signs at Work");
        assert_eq!(course.video.as_deref(), Some("https://example.com/v"));
        assert!(course.images.is_empty());
    }

    #[test]
    fn test_quiz_requires_question_and_first_option() {
        let mut draft = QuizDraft::default();
        assert_eq!(draft.to_question(), Err(FormError::MissingField("question")));
        draft.question = "Sign for tea?".into();
        assert_eq!(draft.to_question(), Err(FormError::MissingField("option 1")));
    }

    #[test]
    fn test_quiz_drops_blank_slots_and_remaps_correct() {
        let mut draft = QuizDraft::default();
        draft.question = "Sign for tea?".into();
        draft.options[0] = "Cup motion".into();
        draft.options[2] = "Stir".into();
        draft.options_mr[2] = "ढवळा".into();
        draft.correct = 2;
        draft.category = QuizCategory::DailyLife;

        let q = draft.to_question().unwrap();
        assert_eq!(q.options, vec!["Cup motion", "Stir"]);
        assert_eq!(q.correct, 1);
        assert_eq!(q.category, QuizCategory::DailyLife);
        assert_eq!(q.option(Locale::Mr, 0), Some("Cup motion"));
        assert_eq!(q.option(Locale::Mr, 1), Some("ढवळा"));
    }

    #[test]
    fn test_quiz_correct_slot_must_be_filled() {
        let mut draft = QuizDraft::default();
        draft.question = "Sign for tea?".into();
        draft.options[0] = "Cup motion".into();
        draft.prev_correct();
        assert_eq!(draft.correct, OPTION_SLOTS - 1);
        assert_eq!(draft.to_question(), Err(FormError::CorrectOptionMissing(OPTION_SLOTS)));
    }

    #[test]
    fn test_quiz_field_addressing() {
        let mut draft = QuizDraft::default();
        *draft.field_mut(3).unwrap() = "B".into();
        *draft.field_mut(2 + OPTION_SLOTS).unwrap() = "अ".into();
        assert_eq!(draft.options[1], "B");
        assert_eq!(draft.options_mr[0], "अ");
        assert!(draft.field_mut(QuizDraft::FIELD_COUNT).is_none());
        assert_eq!(QuizDraft::field_label(2).as_deref(), Some("Option 1"));
        assert_eq!(QuizDraft::field_label(7).as_deref(), Some("Option 1 (Marathi)"));
    }
}
