//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Role;

/// Portal views
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    Home,
    Courses,
    SignLanguage,
    Quiz,
    Vocabulary,
    Progress,
    TeacherDashboard,
    BuddyChat,
    #[default]
    Login,
}

const LANDING_TABS: [Tab; 1] = [Tab::Login];

const STUDENT_TABS: [Tab; 7] = [
    Tab::Home,
    Tab::Courses,
    Tab::SignLanguage,
    Tab::Quiz,
    Tab::Vocabulary,
    Tab::Progress,
    Tab::BuddyChat,
];

const TEACHER_TABS: [Tab; 6] = [
    Tab::Home,
    Tab::Courses,
    Tab::SignLanguage,
    Tab::Vocabulary,
    Tab::TeacherDashboard,
    Tab::BuddyChat,
];

impl Tab {
    /// Tabs shown in the navigation bar for a role (`None` = logged out)
    pub fn visible_for(role: Option<Role>) -> &'static [Tab] {
        match role {
            None => &LANDING_TABS,
            Some(Role::Student) => &STUDENT_TABS,
            Some(Role::Teacher) => &TEACHER_TABS,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Navigation
    NextTab,
    PrevTab,
    JumpToTab(usize),
    ToggleLanguage,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    NextField,
    PrevField,

    // Session
    SubmitLogin,
    ToggleRole,
    Logout,

    // Quiz
    QuizCursorUp,
    QuizCursorDown,
    QuizConfirm,
    NextCategory,
    PrevCategory,
    RestartQuiz,

    // Buddy chat
    NextBuddy,
    PrevBuddy,
    SendMessage,

    // Teacher authoring
    OpenCourseForm,
    OpenQuizForm,
    SubmitForm,
    CancelForm,
    CycleFormChoice,
    CycleDifficulty,
    NextCorrectOption,
    PrevCorrectOption,

    // Popups
    DismissNotice,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_tab: Tab,
    input_mode: InputMode,
    show_help: bool,
    notice_open: bool,
    form_open: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Popups swallow the next key
    if notice_open {
        return Some(UiEvent::DismissNotice);
    }
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if active_tab == Tab::Login {
        return handle_login_keys(key);
    }
    if form_open {
        return handle_form_keys(key);
    }

    match input_mode {
        InputMode::Editing => handle_editing_keys(key, active_tab),
        InputMode::Normal => {
            if let Some(event) = handle_global_keys(key) {
                return Some(event);
            }
            match active_tab {
                Tab::Quiz => handle_quiz_keys(key),
                Tab::BuddyChat => handle_chat_keys(key),
                Tab::TeacherDashboard => handle_dashboard_keys(key),
                _ => handle_scroll_keys(key),
            }
        }
    }
}

/// Login screen: every printable key edits the focused field
fn handle_login_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Enter => Some(UiEvent::SubmitLogin),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::F(2) => Some(UiEvent::ToggleRole),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::CancelForm),
        KeyCode::Enter => Some(UiEvent::SubmitForm),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::F(2) => Some(UiEvent::CycleFormChoice),
        KeyCode::F(3) => Some(UiEvent::CycleDifficulty),
        KeyCode::Up => Some(UiEvent::PrevCorrectOption),
        KeyCode::Down => Some(UiEvent::NextCorrectOption),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

fn handle_editing_keys(key: KeyEvent, active_tab: Tab) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Enter if active_tab == Tab::BuddyChat => Some(UiEvent::SendMessage),
        KeyCode::Enter => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

fn handle_global_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('l') => Some(UiEvent::ToggleLanguage),
        KeyCode::Char('o') => Some(UiEvent::Logout),
        KeyCode::Tab => Some(UiEvent::NextTab),
        KeyCode::BackTab => Some(UiEvent::PrevTab),
        KeyCode::Char(c @ '1'..='9') => Some(UiEvent::JumpToTab(c as usize - '1' as usize)),
        _ => None,
    }
}

fn handle_quiz_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::QuizCursorUp),
        KeyCode::Down => Some(UiEvent::QuizCursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::QuizConfirm),
        KeyCode::Left => Some(UiEvent::PrevCategory),
        KeyCode::Right => Some(UiEvent::NextCategory),
        KeyCode::Char('r') => Some(UiEvent::RestartQuiz),
        _ => None,
    }
}

fn handle_chat_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::PrevBuddy),
        KeyCode::Down => Some(UiEvent::NextBuddy),
        KeyCode::Char('e') | KeyCode::Char('i') | KeyCode::Enter => Some(UiEvent::StartEditing),
        _ => None,
    }
}

fn handle_dashboard_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('/') => Some(UiEvent::StartEditing),
        KeyCode::Char('n') => Some(UiEvent::OpenCourseForm),
        KeyCode::Char('m') => Some(UiEvent::OpenQuizForm),
        _ => handle_scroll_keys(key),
    }
}

fn handle_scroll_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::ScrollUp),
        KeyCode::Down => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn map(code: KeyCode, tab: Tab, mode: InputMode) -> Option<UiEvent> {
        key_to_ui_event(press(code), tab, mode, false, false, false)
    }

    #[test]
    fn test_login_screen_captures_text() {
        assert_eq!(
            map(KeyCode::Char('q'), Tab::Login, InputMode::Normal),
            Some(UiEvent::CharInput('q'))
        );
        assert_eq!(map(KeyCode::Enter, Tab::Login, InputMode::Normal), Some(UiEvent::SubmitLogin));
        assert_eq!(map(KeyCode::Esc, Tab::Login, InputMode::Normal), Some(UiEvent::Quit));
    }

    #[test]
    fn test_digit_jumps_to_tab() {
        assert_eq!(
            map(KeyCode::Char('3'), Tab::Home, InputMode::Normal),
            Some(UiEvent::JumpToTab(2))
        );
    }

    #[test]
    fn test_enter_sends_while_editing_chat() {
        assert_eq!(
            map(KeyCode::Enter, Tab::BuddyChat, InputMode::Editing),
            Some(UiEvent::SendMessage)
        );
        assert_eq!(
            map(KeyCode::Char('q'), Tab::BuddyChat, InputMode::Editing),
            Some(UiEvent::CharInput('q'))
        );
    }

    #[test]
    fn test_quiz_keys() {
        assert_eq!(map(KeyCode::Right, Tab::Quiz, InputMode::Normal), Some(UiEvent::NextCategory));
        assert_eq!(map(KeyCode::Enter, Tab::Quiz, InputMode::Normal), Some(UiEvent::QuizConfirm));
    }

    #[test]
    fn test_popups_take_precedence() {
        let key = press(KeyCode::Char('q'));
        assert_eq!(
            key_to_ui_event(key, Tab::Home, InputMode::Normal, true, true, false),
            Some(UiEvent::DismissNotice)
        );
        assert_eq!(
            key_to_ui_event(key, Tab::Home, InputMode::Normal, true, false, false),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_form_keys() {
        let key = press(KeyCode::Esc);
        assert_eq!(
            key_to_ui_event(key, Tab::TeacherDashboard, InputMode::Editing, false, false, true),
            Some(UiEvent::CancelForm)
        );
    }

    #[test]
    fn test_role_tabs() {
        assert_eq!(Tab::visible_for(None), &[Tab::Login]);
        assert!(Tab::visible_for(Some(Role::Student)).contains(&Tab::Quiz));
        assert!(!Tab::visible_for(Some(Role::Student)).contains(&Tab::TeacherDashboard));
        assert!(Tab::visible_for(Some(Role::Teacher)).contains(&Tab::TeacherDashboard));
    }
}
