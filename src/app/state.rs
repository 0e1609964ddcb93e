//! App state - pure data structure with no I/O logic

use std::sync::Arc;

use crate::authoring::{CourseDraft, FormKind, QuizDraft};
use crate::chat::ChatEngine;
use crate::config::Config;
use crate::content::{Catalog, Locale, QuizCategory};
use crate::dashboard;
use crate::messages::render::BuddyStatus;
use crate::messages::ui_events::{InputMode, Tab};
use crate::messages::RenderState;
use crate::quiz::QuizSession;
use crate::session::{LoginField, LoginForm, Role, SessionUser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Blocking popup shown until the next key press
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub config: Config,
    /// Built-in content plus teacher additions
    pub catalog: Arc<Catalog>,

    // Navigation
    pub active_tab: Tab,
    pub locale: Locale,
    pub scroll: u16,

    // Session
    pub session: Option<SessionUser>,
    pub login: LoginForm,

    // Quiz
    pub quiz: QuizSession,
    pub quiz_cursor: usize,

    // Buddy chat
    pub chat: ChatEngine,
    pub buddy_cursor: usize,
    pub chat_input: String,

    // Teacher dashboard
    pub student_search: String,
    pub form: Option<FormKind>,
    pub course_form: CourseDraft,
    pub quiz_form: QuizDraft,
    pub form_field: usize,

    // Input
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Popups
    pub notice: Option<Notice>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<Catalog>, chat: ChatEngine) -> Self {
        let quiz = QuizSession::new(&catalog, QuizCategory::default());
        AppState {
            locale: config.default_locale,
            config,
            catalog,
            active_tab: Tab::Login,
            scroll: 0,
            session: None,
            login: LoginForm::default(),
            quiz,
            quiz_cursor: 0,
            chat,
            buddy_cursor: 0,
            chat_input: String::new(),
            student_search: String::new(),
            form: None,
            course_form: CourseDraft::default(),
            quiz_form: QuizDraft::default(),
            form_field: 0,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            notice: None,
            show_help: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|user| user.role)
    }

    pub fn visible_tabs(&self) -> &'static [Tab] {
        Tab::visible_for(self.role())
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        if self.active_tab == Tab::Login {
            return match self.login.field {
                LoginField::Email => &self.login.email,
                LoginField::Password => &self.login.password,
                LoginField::Role => "",
            };
        }
        match self.form {
            Some(FormKind::Course) => {
                return self.course_form.field(self.form_field).map_or("", String::as_str)
            }
            Some(FormKind::Quiz) => {
                return self.quiz_form.field(self.form_field).map_or("", String::as_str)
            }
            None => {}
        }
        match self.active_tab {
            Tab::BuddyChat => &self.chat_input,
            Tab::TeacherDashboard => &self.student_search,
            _ => "",
        }
    }

    /// Get mutable reference to current input field, if the view has one
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        if self.active_tab == Tab::Login {
            return match self.login.field {
                LoginField::Email => Some(&mut self.login.email),
                LoginField::Password => Some(&mut self.login.password),
                LoginField::Role => None,
            };
        }
        match self.form {
            Some(FormKind::Course) => return self.course_form.field_mut(self.form_field),
            Some(FormKind::Quiz) => return self.quiz_form.field_mut(self.form_field),
            None => {}
        }
        match self.active_tab {
            Tab::BuddyChat => Some(&mut self.chat_input),
            Tab::TeacherDashboard => Some(&mut self.student_search),
            _ => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let students = &self.catalog.students;
        let buddies = self
            .catalog
            .buddies
            .iter()
            .map(|buddy| BuddyStatus {
                buddy: buddy.clone(),
                typing: self.chat.is_typing(buddy.id),
            })
            .collect();
        let thread = self
            .chat
            .selected()
            .map(|id| self.chat.thread(id).to_vec())
            .unwrap_or_default();

        RenderState {
            active_tab: self.active_tab,
            tabs: self.visible_tabs().to_vec(),
            locale: self.locale,
            user: self.session.clone(),
            catalog: Arc::clone(&self.catalog),
            scroll: self.scroll,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            login: self.login.clone(),
            quiz: self.quiz.clone(),
            quiz_cursor: self.quiz_cursor,
            buddies,
            selected_buddy: self.chat.selected(),
            thread,
            chat_input: self.chat_input.clone(),
            dashboard: dashboard::stats(students),
            top_performers: dashboard::top_performers(students).into_iter().cloned().collect(),
            needing_help: dashboard::needing_help(students).into_iter().cloned().collect(),
            student_search: self.student_search.clone(),
            student_results: dashboard::search(students, &self.student_search)
                .into_iter()
                .cloned()
                .collect(),
            form: self.form,
            course_form: self.course_form.clone(),
            quiz_form: self.quiz_form.clone(),
            form_field: self.form_field,
            notice: self.notice.clone(),
            show_help: self.show_help,
        }
    }
}
