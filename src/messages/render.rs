//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use crate::app::state::Notice;
use crate::authoring::{CourseDraft, FormKind, QuizDraft};
use crate::chat::ChatMessage;
use crate::content::{Buddy, BuddyId, Catalog, Locale, QuizCategory, Student};
use crate::dashboard::DashboardStats;
use crate::messages::ui_events::{InputMode, Tab};
use crate::quiz::QuizSession;
use crate::session::{LoginForm, SessionUser};

/// Buddy list row
#[derive(Debug, Clone)]
pub struct BuddyStatus {
    pub buddy: Buddy,
    pub typing: bool,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub active_tab: Tab,
    pub tabs: Vec<Tab>,
    pub locale: Locale,
    pub user: Option<SessionUser>,
    pub catalog: Arc<Catalog>,
    pub scroll: u16,

    // Input
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub login: LoginForm,

    // Quiz
    pub quiz: QuizSession,
    pub quiz_cursor: usize,

    // Buddy chat
    pub buddies: Vec<BuddyStatus>,
    pub selected_buddy: Option<BuddyId>,
    pub thread: Vec<ChatMessage>,
    pub chat_input: String,

    // Teacher dashboard
    pub dashboard: DashboardStats,
    pub top_performers: Vec<Student>,
    pub needing_help: Vec<Student>,
    pub student_search: String,
    pub student_results: Vec<Student>,
    pub form: Option<FormKind>,
    pub course_form: CourseDraft,
    pub quiz_form: QuizDraft,
    pub form_field: usize,

    // Popups
    pub notice: Option<Notice>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        let catalog = Arc::new(Catalog::default());
        RenderState {
            active_tab: Tab::Login,
            tabs: vec![Tab::Login],
            locale: Locale::default(),
            user: None,
            quiz: QuizSession::new(&catalog, QuizCategory::default()),
            catalog,
            scroll: 0,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            login: LoginForm::default(),
            quiz_cursor: 0,
            buddies: Vec::new(),
            selected_buddy: None,
            thread: Vec::new(),
            chat_input: String::new(),
            dashboard: DashboardStats::default(),
            top_performers: Vec::new(),
            needing_help: Vec::new(),
            student_search: String::new(),
            student_results: Vec::new(),
            form: None,
            course_form: CourseDraft::default(),
            quiz_form: QuizDraft::default(),
            form_field: 0,
            notice: None,
            show_help: false,
        }
    }
}
