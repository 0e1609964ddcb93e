//! Command handlers - business logic for processing UI events

use chrono::Local;
use std::sync::Arc;

use crate::app::state::Notice;
use crate::app::AppState;
use crate::authoring::{CourseDraft, FormError, FormKind, QuizDraft};
use crate::content::{Locale, QuizCategory};
use crate::i18n::{label, Label};
use crate::messages::ui_events::{InputMode, Tab};
use crate::messages::{TimerCommand, TimerEvent};
use crate::quiz::{QuizPhase, QuizSession};
use crate::session::{LoginField, LoginForm, Role, SessionUser};

impl AppState {
    // ========================
    // Session
    // ========================

    /// Always succeeds; lands on Home
    pub fn login(&mut self, email: &str, password: &str, role: Role) {
        let user = SessionUser::login(email, password, role);
        tracing::info!(email = %user.email, role = role.as_str(), "logged in");
        self.session = Some(user);
        self.login = LoginForm::default();
        self.quiz = QuizSession::new(&self.catalog, QuizCategory::default());
        self.quiz_cursor = 0;
        self.input_mode = InputMode::Normal;
        self.cursor_position = 0;
        self.active_tab = Tab::Home;
        self.scroll = 0;
    }

    pub fn submit_login(&mut self) {
        let LoginForm { email, password, role, .. } = self.login.clone();
        self.login(email.trim(), &password, role);
    }

    /// Back to the landing view with nothing left of the session.
    /// Returns a command cancelling any outstanding reply timers.
    pub fn logout(&mut self) -> Option<TimerCommand> {
        let had_pending = self.chat.pending_count() > 0;
        if let Some(user) = self.session.take() {
            tracing::info!(email = %user.email, "logged out");
        }
        self.chat.clear();
        self.buddy_cursor = 0;
        self.chat_input.clear();
        self.quiz = QuizSession::new(&self.catalog, QuizCategory::default());
        self.quiz_cursor = 0;
        self.login = LoginForm::default();
        self.form = None;
        self.course_form = CourseDraft::default();
        self.quiz_form = QuizDraft::default();
        self.form_field = 0;
        self.student_search.clear();
        self.input_mode = InputMode::Normal;
        self.cursor_position = 0;
        self.notice = None;
        self.active_tab = Tab::Login;
        self.scroll = 0;
        had_pending.then_some(TimerCommand::CancelAll)
    }

    pub fn toggle_role(&mut self) {
        self.login.role = self.login.role.toggle();
    }

    // ========================
    // Navigation
    // ========================

    /// Switch view. Tabs the current role cannot see are ignored.
    ///
    /// Leaving the quiz discards the run in progress.
    /// Leaving the chat drops pending replies unless configured otherwise;
    /// the returned command tells the scheduler to do the same.
    pub fn set_tab(&mut self, tab: Tab) -> Option<TimerCommand> {
        if tab == self.active_tab || !self.visible_tabs().contains(&tab) {
            return None;
        }
        let leaving_chat = self.active_tab == Tab::BuddyChat;
        tracing::info!(from = ?self.active_tab, to = ?tab, "switching tab");

        // A quiz run does not outlive its view
        if self.active_tab == Tab::Quiz {
            self.quiz.restart(&self.catalog);
            self.quiz_cursor = 0;
        }

        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
        self.scroll = 0;
        self.form = None;

        if leaving_chat && self.config.chat.cancel_on_leave {
            let cancelled = self.chat.cancel_pending();
            if !cancelled.is_empty() {
                tracing::debug!(?cancelled, "dropping pending replies");
                return Some(TimerCommand::CancelAll);
            }
        }
        None
    }

    fn tab_position(&self) -> usize {
        self.visible_tabs()
            .iter()
            .position(|t| *t == self.active_tab)
            .unwrap_or(0)
    }

    pub fn next_tab(&mut self) -> Option<TimerCommand> {
        let tabs = self.visible_tabs();
        let tab = tabs[(self.tab_position() + 1) % tabs.len()];
        self.set_tab(tab)
    }

    pub fn prev_tab(&mut self) -> Option<TimerCommand> {
        let tabs = self.visible_tabs();
        let tab = tabs[(self.tab_position() + tabs.len() - 1) % tabs.len()];
        self.set_tab(tab)
    }

    pub fn jump_to_tab(&mut self, index: usize) -> Option<TimerCommand> {
        let tab = *self.visible_tabs().get(index)?;
        self.set_tab(tab)
    }

    pub fn set_language(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::info!(locale = locale.as_str(), "language changed");
            self.locale = locale;
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.locale.toggle());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        if self.on_role_field() {
            self.toggle_role();
            return;
        }
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.on_role_field() {
            self.toggle_role();
            return;
        }
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let Some(input) = self.current_input_mut() else {
            return;
        };
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let Some(input) = self.current_input_mut() else {
                return;
            };
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    fn on_role_field(&self) -> bool {
        self.active_tab == Tab::Login && self.login.field == LoginField::Role
    }

    /// Move focus on the login screen or inside an open form
    pub fn next_field(&mut self) {
        if self.active_tab == Tab::Login {
            self.login.field = self.login.field.next();
        } else if let Some(kind) = self.form {
            self.form_field = (self.form_field + 1) % form_field_count(kind);
        }
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        if self.active_tab == Tab::Login {
            self.login.field = self.login.field.prev();
        } else if let Some(kind) = self.form {
            let count = form_field_count(kind);
            self.form_field = (self.form_field + count - 1) % count;
        }
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Quiz
    // ========================

    fn quiz_option_count(&self) -> usize {
        self.quiz.current_question().map_or(0, |q| q.option_count())
    }

    pub fn quiz_cursor_up(&mut self) {
        let count = self.quiz_option_count();
        if count > 0 {
            self.quiz_cursor = (self.quiz_cursor + count - 1) % count;
        }
    }

    pub fn quiz_cursor_down(&mut self) {
        let count = self.quiz_option_count();
        if count > 0 {
            self.quiz_cursor = (self.quiz_cursor + 1) % count;
        }
    }

    /// Pick the highlighted option, move past a revealed answer, or start
    /// over from the result card.
    pub fn quiz_confirm(&mut self) {
        let result = match self.quiz.phase() {
            QuizPhase::AwaitingAnswer { .. } => self.quiz.select_answer(self.quiz_cursor).map(|_| ()),
            QuizPhase::AnswerRevealed { .. } => {
                self.quiz_cursor = 0;
                self.quiz.advance().map(|_| ())
            }
            QuizPhase::Complete => {
                self.restart_quiz();
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::debug!(error = %e, "quiz input ignored");
        }
    }

    pub fn next_category(&mut self) {
        let category = self.quiz.category().next();
        self.change_category(category);
    }

    pub fn prev_category(&mut self) {
        let category = self.quiz.category().prev();
        self.change_category(category);
    }

    pub fn change_category(&mut self, category: QuizCategory) {
        self.quiz.change_category(&self.catalog, category);
        self.quiz_cursor = 0;
        tracing::debug!(category = category.slug(), total = self.quiz.total(), "quiz category");
    }

    pub fn restart_quiz(&mut self) {
        self.quiz.restart(&self.catalog);
        self.quiz_cursor = 0;
    }

    // ========================
    // Buddy chat
    // ========================

    pub fn next_buddy(&mut self) {
        let count = self.catalog.buddies.len();
        if count == 0 {
            return;
        }
        self.buddy_cursor = match self.chat.selected() {
            None => 0,
            Some(_) => (self.buddy_cursor + 1) % count,
        };
        self.select_buddy_at_cursor();
    }

    pub fn prev_buddy(&mut self) {
        let count = self.catalog.buddies.len();
        if count == 0 {
            return;
        }
        self.buddy_cursor = match self.chat.selected() {
            None => count - 1,
            Some(_) => (self.buddy_cursor + count - 1) % count,
        };
        self.select_buddy_at_cursor();
    }

    fn select_buddy_at_cursor(&mut self) {
        if let Some(id) = self.catalog.buddies.get(self.buddy_cursor).map(|b| b.id) {
            self.chat.select_buddy(&self.catalog, id);
        }
    }

    /// Send the chat input to the selected buddy. Blank input or no selected
    /// buddy leaves everything as it was.
    pub fn send_message(&mut self) -> Option<TimerCommand> {
        let pending = self
            .chat
            .send_message(&self.chat_input, self.locale, Local::now())?;
        self.chat_input.clear();
        self.cursor_position = 0;
        Some(TimerCommand::Schedule {
            ticket: pending.ticket,
            buddy_id: pending.buddy_id,
            typing_after: self.config.chat.typing_delay(),
            reply_after: self.config.chat.reply_delay(),
        })
    }

    /// Apply a scheduler deadline. Unknown or cancelled tickets are ignored.
    pub fn handle_timer_event(&mut self, event: TimerEvent) {
        let applied = match event {
            TimerEvent::TypingStarted { ticket, .. } => self.chat.mark_typing(ticket),
            TimerEvent::ReplyDue { ticket, .. } => self
                .chat
                .deliver_reply(&self.catalog, ticket, Local::now())
                .is_some(),
        };
        if !applied {
            tracing::debug!(ticket = event.ticket(), buddy_id = event.buddy_id(), "stale timer event");
        }
    }

    // ========================
    // Teacher authoring
    // ========================

    fn is_teacher(&self) -> bool {
        self.session.as_ref().is_some_and(SessionUser::is_teacher)
    }

    pub fn open_form(&mut self, kind: FormKind) {
        if !self.is_teacher() {
            return;
        }
        self.form = Some(kind);
        self.form_field = 0;
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    /// F2: course level or quiz category
    pub fn cycle_form_choice(&mut self) {
        match self.form {
            Some(FormKind::Course) => self.course_form.cycle_level(),
            Some(FormKind::Quiz) => self.quiz_form.category = self.quiz_form.category.next(),
            None => {}
        }
    }

    pub fn cycle_difficulty(&mut self) {
        if self.form == Some(FormKind::Quiz) {
            self.quiz_form.difficulty = self.quiz_form.difficulty.next();
        }
    }

    pub fn next_correct_option(&mut self) {
        if self.form == Some(FormKind::Quiz) {
            self.quiz_form.next_correct();
        }
    }

    pub fn prev_correct_option(&mut self) {
        if self.form == Some(FormKind::Quiz) {
            self.quiz_form.prev_correct();
        }
    }

    /// Validate the open form and merge it into the catalog. On failure the
    /// catalog and the draft are left untouched and an error notice is shown.
    pub fn submit_form(&mut self) {
        match self.form {
            Some(FormKind::Course) => self.create_course(),
            Some(FormKind::Quiz) => self.create_quiz(),
            None => {}
        }
    }

    pub fn create_course(&mut self) {
        match self.course_form.to_course() {
            Ok(course) => {
                let id = Arc::make_mut(&mut self.catalog).add_course(course);
                tracing::info!(id, "course created");
                self.course_form = CourseDraft::default();
                self.finish_form(Label::CourseCreated);
            }
            Err(e) => {
                tracing::warn!(error = %e, "course form rejected");
                self.notice = Some(Notice::error(label(self.locale, Label::FillCourseFields)));
            }
        }
    }

    pub fn create_quiz(&mut self) {
        match self.quiz_form.to_question() {
            Ok(question) => {
                let category = question.category;
                let id = Arc::make_mut(&mut self.catalog).add_question(question);
                tracing::info!(id, category = category.slug(), "quiz question created");
                self.quiz_form = QuizDraft::default();
                self.finish_form(Label::QuizCreated);
            }
            Err(e) => {
                tracing::warn!(error = %e, "quiz form rejected");
                let text = match e {
                    FormError::CorrectOptionMissing(_) => Label::CorrectOptionEmpty,
                    FormError::MissingField(_) => Label::FillQuizFields,
                };
                self.notice = Some(Notice::error(label(self.locale, text)));
            }
        }
    }

    fn finish_form(&mut self, confirmation: Label) {
        self.form = None;
        self.form_field = 0;
        self.input_mode = InputMode::Normal;
        self.notice = Some(Notice::success(label(self.locale, confirmation)));
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

fn form_field_count(kind: FormKind) -> usize {
    match kind {
        FormKind::Course => CourseDraft::FIELDS.len(),
        FormKind::Quiz => QuizDraft::FIELD_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NoticeKind;
    use crate::chat::ChatEngine;
    use crate::config::Config;
    use crate::content::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> AppState {
        let catalog = Arc::new(Catalog::embedded().unwrap());
        AppState::new(Config::default(), catalog, ChatEngine::with_rng(StdRng::seed_from_u64(1)))
    }

    fn logged_in(role: Role) -> AppState {
        let mut state = state();
        state.login("x@y.com", "pw", role);
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_starts_on_login() {
        let state = state();
        assert_eq!(state.active_tab, Tab::Login);
        assert!(state.session.is_none());
        assert_eq!(state.visible_tabs(), &[Tab::Login]);
    }

    #[test]
    fn test_login_form_submit() {
        let mut state = state();
        type_text(&mut state, "asha@example.com");
        state.next_field();
        type_text(&mut state, "secret");
        state.next_field();
        state.move_cursor_right();
        assert_eq!(state.login.role, Role::Teacher);

        state.submit_login();
        let user = state.session.as_ref().unwrap();
        assert_eq!(user.email, "asha@example.com");
        assert!(user.is_teacher());
        assert_eq!(state.active_tab, Tab::Home);
        assert_eq!(state.login, LoginForm::default());
    }

    #[test]
    fn test_login_then_logout_returns_to_landing() {
        let mut state = logged_in(Role::Teacher);
        assert_eq!(state.session.as_ref().unwrap().total_quiz_score, 92);

        assert_eq!(state.logout(), None);
        assert!(state.session.is_none());
        assert_eq!(state.active_tab, Tab::Login);
        assert_eq!(state.quiz.score(), 0);
        assert_eq!(state.chat.selected(), None);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_role_limits_tabs() {
        let mut student = logged_in(Role::Student);
        assert_eq!(student.set_tab(Tab::TeacherDashboard), None);
        assert_eq!(student.active_tab, Tab::Home);
        student.set_tab(Tab::Quiz);
        assert_eq!(student.active_tab, Tab::Quiz);

        let mut teacher = logged_in(Role::Teacher);
        teacher.set_tab(Tab::Quiz);
        assert_eq!(teacher.active_tab, Tab::Home);
        teacher.jump_to_tab(4);
        assert_eq!(teacher.active_tab, Tab::TeacherDashboard);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut state = logged_in(Role::Student);
        state.prev_tab();
        assert_eq!(state.active_tab, Tab::BuddyChat);
        state.next_tab();
        assert_eq!(state.active_tab, Tab::Home);
    }

    #[test]
    fn test_toggle_language() {
        let mut state = state();
        state.toggle_language();
        assert_eq!(state.locale, Locale::Mr);
        state.set_language(Locale::En);
        assert_eq!(state.locale, Locale::En);
    }

    #[test]
    fn test_quiz_confirm_flow() {
        let mut state = logged_in(Role::Student);
        state.set_tab(Tab::Quiz);
        let correct = state.quiz.current_question().unwrap().correct;
        for _ in 0..correct {
            state.quiz_cursor_down();
        }
        state.quiz_confirm();
        assert_eq!(state.quiz.phase(), QuizPhase::AnswerRevealed { index: 0, correct: true });

        state.quiz_confirm();
        assert_eq!(state.quiz.score(), 1);
        assert_eq!(state.quiz_cursor, 0);

        state.next_category();
        assert_eq!(state.quiz.category(), QuizCategory::Numbers);
        assert_eq!((state.quiz.index(), state.quiz.score()), (0, 0));
    }

    #[test]
    fn test_leaving_quiz_discards_run() {
        let mut state = logged_in(Role::Student);
        state.set_tab(Tab::Quiz);
        state.next_category();
        let correct = state.quiz.current_question().unwrap().correct;
        for _ in 0..correct {
            state.quiz_cursor_down();
        }
        state.quiz_confirm();
        state.quiz_confirm();
        state.quiz_cursor_down();
        assert_eq!((state.quiz.index(), state.quiz.score()), (1, 1));

        state.set_tab(Tab::Home);
        state.set_tab(Tab::Quiz);
        assert_eq!((state.quiz.index(), state.quiz.score()), (0, 0));
        assert_eq!(state.quiz.selected(), None);
        assert_eq!(state.quiz_cursor, 0);
        assert_eq!(state.quiz.category(), QuizCategory::Numbers);
    }

    fn chat_ready() -> AppState {
        let mut state = logged_in(Role::Student);
        state.set_tab(Tab::BuddyChat);
        state.next_buddy();
        state.start_editing();
        state
    }

    #[test]
    fn test_send_schedules_reply_for_selected_buddy() {
        let mut state = chat_ready();
        type_text(&mut state, "hi");

        let Some(TimerCommand::Schedule { ticket, buddy_id, typing_after, reply_after }) =
            state.send_message()
        else {
            panic!("expected a schedule command");
        };
        assert_eq!(buddy_id, 1);
        assert_eq!(typing_after, std::time::Duration::from_millis(1000));
        assert_eq!(reply_after, std::time::Duration::from_millis(4000));
        assert!(state.chat_input.is_empty());

        state.handle_timer_event(TimerEvent::TypingStarted { ticket, buddy_id });
        assert!(state.chat.is_typing(1));
        state.handle_timer_event(TimerEvent::ReplyDue { ticket, buddy_id });

        let thread = state.chat.thread(1);
        assert_eq!(thread.len(), 2);
        assert!(thread[0].is_own);
        assert!(!thread[1].is_own);
        for other in state.catalog.buddies.iter().filter(|b| b.id != 1) {
            assert!(state.chat.thread(other.id).is_empty());
        }
    }

    #[test]
    fn test_blank_send_does_nothing() {
        let mut state = chat_ready();
        type_text(&mut state, "   ");
        assert_eq!(state.send_message(), None);
        assert!(state.chat.thread(1).is_empty());
    }

    #[test]
    fn test_leaving_chat_cancels_pending() {
        let mut state = chat_ready();
        type_text(&mut state, "hi");
        let ticket = match state.send_message() {
            Some(TimerCommand::Schedule { ticket, .. }) => ticket,
            other => panic!("unexpected {other:?}"),
        };

        assert_eq!(state.set_tab(Tab::Home), Some(TimerCommand::CancelAll));
        state.handle_timer_event(TimerEvent::ReplyDue { ticket, buddy_id: 1 });
        assert_eq!(state.chat.thread(1).len(), 1);
    }

    #[test]
    fn test_pending_survives_leaving_when_configured() {
        let mut state = chat_ready();
        state.config.chat.cancel_on_leave = false;
        type_text(&mut state, "hi");
        let ticket = match state.send_message() {
            Some(TimerCommand::Schedule { ticket, .. }) => ticket,
            other => panic!("unexpected {other:?}"),
        };

        assert_eq!(state.set_tab(Tab::Home), None);
        state.handle_timer_event(TimerEvent::ReplyDue { ticket, buddy_id: 1 });
        assert_eq!(state.chat.thread(1).len(), 2);
    }

    #[test]
    fn test_logout_cancels_pending() {
        let mut state = chat_ready();
        type_text(&mut state, "hi");
        state.send_message().unwrap();
        assert_eq!(state.logout(), Some(TimerCommand::CancelAll));
        assert_eq!(state.chat.pending_count(), 0);
    }

    #[test]
    fn test_invalid_course_form_does_not_mutate() {
        let mut state = logged_in(Role::Teacher);
        let before = state.catalog.courses.len();
        state.open_form(FormKind::Course);
        type_text(&mut state, "Only a title");
        state.submit_form();

        assert_eq!(state.catalog.courses.len(), before);
        assert_eq!(state.course_form.title, "Only a title");
        assert_eq!(state.form, Some(FormKind::Course));
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_course_form_creates_course() {
        let mut state = logged_in(Role::Teacher);
        state.open_form(FormKind::Course);
        type_text(&mut state, "Signs at Work");
        state.next_field();
        state.next_field();
        type_text(&mut state, "Office vocabulary");
        state.submit_form();

        assert_eq!(state.catalog.courses.len(), 9);
        let course = state.catalog.courses.last().unwrap();
        assert_eq!(course.id, 9);
        assert_eq!(course.title.en, "Signs at Work");
        assert_eq!(state.form, None);
        assert_eq!(state.course_form, CourseDraft::default());
        assert_eq!(
            state.notice,
            Some(Notice::success("Course created successfully!"))
        );
    }

    #[test]
    fn test_quiz_form_feeds_quiz_session() {
        let mut state = logged_in(Role::Teacher);
        state.open_form(FormKind::Quiz);
        type_text(&mut state, "Sign for tea?");
        state.next_field();
        state.next_field();
        type_text(&mut state, "Cup motion");
        state.submit_form();
        assert_eq!(state.catalog.category_len(QuizCategory::Basics), 6);

        state.restart_quiz();
        assert_eq!(state.quiz.total(), 6);
    }

    #[test]
    fn test_quiz_form_correct_slot_must_be_filled() {
        let mut state = logged_in(Role::Teacher);
        state.open_form(FormKind::Quiz);
        type_text(&mut state, "Sign for tea?");
        state.next_field();
        state.next_field();
        type_text(&mut state, "Cup motion");
        state.next_correct_option();
        state.submit_form();

        assert_eq!(state.catalog.questions.len(), 40);
        assert_eq!(
            state.notice,
            Some(Notice::error(label(Locale::En, Label::CorrectOptionEmpty)))
        );
    }

    #[test]
    fn test_students_cannot_open_forms() {
        let mut state = logged_in(Role::Student);
        state.open_form(FormKind::Quiz);
        assert_eq!(state.form, None);
    }

    #[test]
    fn test_dashboard_search_input() {
        let mut state = logged_in(Role::Teacher);
        state.set_tab(Tab::TeacherDashboard);
        state.start_editing();
        type_text(&mut state, "PRIYA");
        let render = state.to_render_state();
        assert_eq!(render.student_results.len(), 1);
        assert_eq!(render.dashboard.total_students, 5);
    }
}
