//! SignLearn TUI - Actor-based sign-language learning portal
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Scheduler Layer (Tokio) - simulated buddy typing and replies

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use signlearn_tui::app::state::NoticeKind;
use signlearn_tui::app::{AppActor, AppState};
use signlearn_tui::authoring::{CourseDraft, FormKind, QuizDraft, OPTION_SLOTS};
use signlearn_tui::chat::ChatEngine;
use signlearn_tui::config::Config;
use signlearn_tui::constants::{APP_NAME, APP_VERSION};
use signlearn_tui::content::{Catalog, Student};
use signlearn_tui::i18n::{category_name, label, tab_name, Label};
use signlearn_tui::messages::ui_events::{key_to_ui_event, InputMode, Tab};
use signlearn_tui::messages::{RenderState, TimerCommand, TimerEvent, UiEvent};
use signlearn_tui::quiz::QuizPhase;
use signlearn_tui::scheduler::ReplyScheduler;
use signlearn_tui::session::{LoginField, Role};
use signlearn_tui::ui::{self, level_color, masked, place_cursor, progress_gauge, score_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .context("log_file must name a file")?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let catalog = Catalog::embedded().context("built-in catalog is invalid")?;
    tracing::info!(
        version = APP_VERSION,
        courses = catalog.courses.len(),
        questions = catalog.questions.len(),
        "starting {}",
        APP_NAME
    );
    let state = AppState::new(config, Arc::new(catalog), ChatEngine::new());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (timer_cmd_tx, timer_cmd_rx) = mpsc::unbounded_channel::<TimerCommand>();
    let (timer_event_tx, timer_event_rx) = mpsc::unbounded_channel::<TimerEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn reply scheduler
    let scheduler = ReplyScheduler::new(timer_event_tx);
    tokio::spawn(scheduler.run(timer_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(state, timer_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, timer_event_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_tab,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.notice.is_some(),
                    current_state.form.is_some(),
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Main layout with tab bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    let content = main_chunks[1];
    match state.active_tab {
        Tab::Login => draw_login(f, state, content),
        Tab::Home => draw_home(f, state, content),
        Tab::Courses => draw_courses(f, state, content),
        Tab::SignLanguage => draw_sign_language(f, state, content),
        Tab::Quiz => draw_quiz(f, state, content),
        Tab::Vocabulary => draw_vocabulary(f, state, content),
        Tab::Progress => draw_progress(f, state, content),
        Tab::TeacherDashboard => draw_dashboard(f, state, content),
        Tab::BuddyChat => draw_chat(f, state, content),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if state.form.is_some() {
        draw_form_popup(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(notice) = &state.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        draw_notice_popup(f, &notice.text, color, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(area);

    let titles = state
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| format!(" {}:{} ", i + 1, tab_name(state.locale, *tab)))
        .collect();
    let selected = state
        .tabs
        .iter()
        .position(|t| *t == state.active_tab)
        .unwrap_or(0);
    f.render_widget(ui::render_tabs(titles, selected), chunks[0]);

    let who = match &state.user {
        Some(user) => format!("{} ({}) ", user.name, user.role.as_str()),
        None => String::new(),
    };
    let right = Line::from(vec![
        Span::styled(who, Style::default().fg(Color::Gray)),
        Span::styled(
            format!("[{}]", state.locale.as_str().to_uppercase()),
            Style::default().fg(Color::Cyan).bold(),
        ),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(right), chunks[1]);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_login(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let form_area = centered_rect(60, 80, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(3), // Role
            Constraint::Min(0),
        ])
        .split(form_area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(label(locale, Label::AppTitle), Style::default().fg(Color::Cyan).bold())),
        Line::from(Span::styled(label(locale, Label::Subtitle), Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let field = state.login.field;
    let email_title = format!(" {} ", label(locale, Label::Email));
    f.render_widget(
        ui::render_input(&state.login.email, &email_title, field == LoginField::Email),
        chunks[1],
    );

    let password = masked(&state.login.password);
    let password_title = format!(" {} ", label(locale, Label::Password));
    f.render_widget(
        ui::render_input(&password, &password_title, field == LoginField::Password),
        chunks[2],
    );

    let role_label = match state.login.role {
        Role::Student => label(locale, Label::LoginAsStudent),
        Role::Teacher => label(locale, Label::LoginAsTeacher),
    };
    let role = Paragraph::new(format!("< {} >", role_label))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if field == LoginField::Role {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
    f.render_widget(role, chunks[3]);

    let hint = Paragraph::new(format!(
        "Enter: {}   Tab: next field   F2: role   Esc: quit",
        label(locale, Label::LoginBtn)
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[4]);

    match field {
        LoginField::Email => place_cursor(f, chunks[1], &state.login.email, state.cursor_position),
        LoginField::Password => {
            let typed = &state.login.password[..state.cursor_position.min(state.login.password.len())];
            place_cursor(f, chunks[2], &password, masked(typed).len());
        }
        LoginField::Role => {}
    }
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Welcome
            Constraint::Length(3), // Progress
            Constraint::Length(5), // Stats
            Constraint::Min(0),    // Enrolled courses
        ])
        .split(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(label(locale, Label::Welcome), Style::default().fg(Color::Cyan).bold())),
        Line::from(label(locale, Label::WelcomeDesc)),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(format!(" {} ", label(locale, Label::AppTitle))));
    f.render_widget(welcome, chunks[0]);

    let Some(user) = &state.user else {
        return;
    };

    let progress_title = format!(" {} ", label(locale, Label::TotalProgress));
    f.render_widget(progress_gauge(&progress_title, user.progress), chunks[1]);

    let stats = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{}: ", label(locale, Label::Level))),
            Span::styled(user.level.clone(), Style::default().fg(level_color(&user.level)).bold()),
        ]),
        Line::from(format!("{}: {}", label(locale, Label::LessonsCompleted), user.lessons_completed)),
        Line::from(vec![
            Span::raw(format!("{}: ", label(locale, Label::AverageQuizScore))),
            Span::styled(
                format!("{}%", user.total_quiz_score),
                Style::default().fg(score_color(user.total_quiz_score)),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(format!(" {} ", user.email)));
    f.render_widget(stats, chunks[2]);

    let items: Vec<ListItem> = state
        .catalog
        .courses
        .iter()
        .filter(|c| c.enrolled)
        .map(|c| ListItem::new(format!("{:>3}%  {}", c.progress, c.title.get(locale))))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", tab_name(locale, Tab::Courses))),
    );
    f.render_widget(list, chunks[3]);
}

fn draw_courses(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let mut lines: Vec<Line> = Vec::new();
    for course in &state.catalog.courses {
        lines.push(Line::from(vec![
            Span::styled(course.title.get(locale).to_string(), Style::default().fg(Color::Cyan).bold()),
            Span::raw("  "),
            Span::styled(course.level.clone(), Style::default().fg(level_color(&course.level))),
            Span::styled(format!("  ★ {:.1}", course.rating), Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(course.description.get(locale).to_string()));
        lines.push(Line::from(Span::styled(
            format!(
                "{}: {}  {}: {}  {}%",
                label(locale, Label::Duration),
                course.duration,
                label(locale, Label::Lessons),
                course.lessons,
                course.progress
            ),
            Style::default().fg(score_color(course.progress as u32)),
        )));
        lines.push(Line::from(""));
    }

    let courses = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (↑/↓ scroll) ", tab_name(locale, Tab::Courses))),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(courses, area);
}

fn draw_sign_language(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let mut lines: Vec<Line> = Vec::new();
    for course in state.catalog.courses.iter().filter(|c| c.video.is_some()) {
        lines.push(Line::from(Span::styled(
            course.title.get(locale).to_string(),
            Style::default().fg(Color::Cyan).bold(),
        )));
        if let Some(video) = &course.video {
            lines.push(Line::from(vec![
                Span::raw(format!("  {}: ", label(locale, Label::WatchVideo))),
                Span::styled(video.clone(), Style::default().fg(Color::Blue).underlined()),
            ]));
        }
        for image in &course.images {
            lines.push(Line::from(Span::styled(format!("  {}", image), Style::default().fg(Color::DarkGray))));
        }
        lines.push(Line::from(""));
    }

    let videos = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", tab_name(locale, Tab::SignLanguage))),
        )
        .scroll((state.scroll, 0));
    f.render_widget(videos, area);
}

fn draw_quiz(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let quiz = &state.quiz;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category + progress
            Constraint::Min(0),    // Question
        ])
        .split(area);

    let (answered, total) = quiz.progress();
    let header = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(category_name(locale, quiz.category()), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("   {} / {}", answered, total)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(format!(" {} ", tab_name(locale, Tab::Quiz))));
    f.render_widget(header, chunks[0]);

    let body = chunks[1];
    let phase = quiz.phase();
    let Some(question) = quiz.current_question() else {
        let summary = quiz.summary();
        let verdict = if summary.is_perfect() {
            label(locale, Label::PerfectScore)
        } else {
            label(locale, Label::KeepLearning)
        };
        let percent = if summary.total == 0 { 0 } else { summary.score * 100 / summary.total };
        let result = Paragraph::new(vec![
            Line::from(Span::styled(label(locale, Label::QuizComplete), Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {} / {}", label(locale, Label::YouScored), summary.score, summary.total),
                Style::default().fg(score_color(percent as u32)).bold(),
            )),
            Line::from(verdict),
            Line::from(""),
            Line::from(Span::styled(
                format!("Enter: {}", label(locale, Label::TryAgain)),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(result, body);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {} / {}", label(locale, Label::QuestionOf), quiz.index() + 1, total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(question.prompt.get(locale).to_string(), Style::default().bold())),
        Line::from(""),
    ];

    let revealed = matches!(phase, QuizPhase::AnswerRevealed { .. });
    for i in 0..question.option_count() {
        let text = question.option(locale, i).unwrap_or_default();
        let (marker, style) = if revealed && question.is_correct(i) {
            ("✓", Style::default().fg(Color::Green).bold())
        } else if revealed && quiz.selected() == Some(i) {
            ("✗", Style::default().fg(Color::Red))
        } else if !revealed && state.quiz_cursor == i {
            ("›", Style::default().fg(Color::Yellow).bold())
        } else {
            (" ", Style::default())
        };
        lines.push(Line::from(Span::styled(format!(" {} {}. {}", marker, i + 1, text), style)));
    }

    if let QuizPhase::AnswerRevealed { correct, .. } = phase {
        lines.push(Line::from(""));
        let (feedback, color) = if correct {
            (label(locale, Label::Correct), Color::Green)
        } else {
            (label(locale, Label::Incorrect), Color::Red)
        };
        lines.push(Line::from(Span::styled(feedback, Style::default().fg(color).bold())));
        lines.push(Line::from(Span::styled(
            format!("Enter: {}", label(locale, Label::NextQuestion)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let question_view = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", question.difficulty.as_str()))
                .title_bottom(Line::from(format!(" ✓ {} ", quiz.score())).right_aligned()),
        );
    f.render_widget(question_view, body);
}

fn draw_vocabulary(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let rows: Vec<Row> = state
        .catalog
        .vocabulary
        .iter()
        .skip(state.scroll as usize)
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.word.get(locale).to_string()).style(Style::default().fg(Color::Cyan)),
                Cell::from(entry.translation.clone()),
                Cell::from(entry.category.get(locale).to_string()).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Percentage(35), Constraint::Percentage(35), Constraint::Percentage(30)],
    )
    .header(Row::new(vec!["Word", "Translation", "Category"]).style(Style::default().bold()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", tab_name(locale, Tab::Vocabulary))),
    );
    f.render_widget(table, area);
}

fn draw_progress(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let Some(user) = &state.user else {
        return;
    };
    let courses = &state.catalog.courses;

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(4)];
    constraints.extend(courses.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let progress_title = format!(" {} ", label(locale, Label::TotalProgress));
    f.render_widget(progress_gauge(&progress_title, user.progress), chunks[0]);

    let summary = state.quiz.summary();
    let quiz_line = Paragraph::new(vec![
        Line::from(format!(
            "{}: {}   {}: {}",
            label(locale, Label::LessonsCompleted),
            user.lessons_completed,
            label(locale, Label::Level),
            user.level
        )),
        Line::from(format!(
            "{} ({}): {} / {}",
            tab_name(locale, Tab::Quiz),
            category_name(locale, state.quiz.category()),
            summary.score,
            summary.total
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(quiz_line, chunks[1]);

    let titles: Vec<String> = courses.iter().map(|c| format!(" {} ", c.title.get(locale))).collect();
    for (i, course) in courses.iter().enumerate() {
        f.render_widget(progress_gauge(&titles[i], course.progress), chunks[i + 2]);
    }
}

fn student_rows(students: &[Student]) -> Vec<Row<'static>> {
    students
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.name.clone()),
                Cell::from(s.email.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{}%", s.progress)).style(Style::default().fg(score_color(s.progress as u32))),
                Cell::from(s.level.clone()).style(Style::default().fg(level_color(&s.level))),
                Cell::from(s.total_quiz_score.to_string()),
                Cell::from(s.last_active.clone()),
            ])
        })
        .collect()
}

fn draw_dashboard(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats
            Constraint::Length(5), // Top / needs help
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Roster
        ])
        .split(area);

    let stats = &state.dashboard;
    let stat_line = Paragraph::new(format!(
        "{}: {}   {}: {}%   {}: {}%   {}: {}",
        label(locale, Label::TotalStudents),
        stats.total_students,
        label(locale, Label::AverageProgress),
        stats.average_progress,
        label(locale, Label::AverageQuizScore),
        stats.average_quiz_score,
        label(locale, Label::LessonsCompleted),
        stats.total_lessons
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", tab_name(locale, Tab::TeacherDashboard))),
    );
    f.render_widget(stat_line, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let top: Vec<ListItem> = state
        .top_performers
        .iter()
        .map(|s| ListItem::new(format!("{}  {}", s.name, s.total_quiz_score)).style(Style::default().fg(Color::Green)))
        .collect();
    f.render_widget(
        List::new(top).block(Block::default().borders(Borders::ALL).title(format!(" {} ", label(locale, Label::TopPerformers)))),
        panels[0],
    );

    let help_items: Vec<ListItem> = if state.needing_help.is_empty() {
        vec![ListItem::new(label(locale, Label::AllDoingWell)).style(Style::default().fg(Color::Green))]
    } else {
        state
            .needing_help
            .iter()
            .map(|s| ListItem::new(format!("{}  {}%", s.name, s.progress)).style(Style::default().fg(Color::Red)))
            .collect()
    };
    f.render_widget(
        List::new(help_items).block(Block::default().borders(Borders::ALL).title(format!(" {} ", label(locale, Label::NeedsAttention)))),
        panels[1],
    );

    let searching = state.form.is_none() && state.input_mode == InputMode::Editing;
    let search_title = format!(" {} ", label(locale, Label::SearchStudent));
    f.render_widget(ui::render_input(&state.student_search, &search_title, searching), chunks[2]);
    if searching {
        place_cursor(f, chunks[2], &state.student_search, state.cursor_position);
    }

    if state.student_results.is_empty() {
        let empty = Paragraph::new(label(locale, Label::NoStudents))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[3]);
        return;
    }

    let roster = Table::new(
        student_rows(&state.student_results),
        [
            Constraint::Percentage(22),
            Constraint::Percentage(26),
            Constraint::Percentage(10),
            Constraint::Percentage(14),
            Constraint::Percentage(10),
            Constraint::Percentage(18),
        ],
    )
    .header(Row::new(vec!["Name", "Email", "%", "Level", "Quiz", "Last active"]).style(Style::default().bold()))
    .block(Block::default().borders(Borders::ALL).title(" n: new course | m: new quiz | /: search "));
    f.render_widget(roster, chunks[3]);
}

fn draw_chat(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    // Buddy list
    let items: Vec<ListItem> = state
        .buddies
        .iter()
        .map(|row| {
            let presence = if row.buddy.online {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            };
            let mut spans = vec![presence, Span::raw(row.buddy.name.clone())];
            if row.typing {
                spans.push(Span::styled(
                    format!(" {}", label(locale, Label::Typing)),
                    Style::default().fg(Color::Yellow).italic(),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let selected = state
        .selected_buddy
        .and_then(|id| state.buddies.iter().position(|row| row.buddy.id == id));
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.input_mode == InputMode::Normal))
                .title(format!(" {} ", label(locale, Label::YourBuddies))),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold());
    let mut list_state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(chunks[1]);

    let Some(buddy) = selected.map(|i| &state.buddies[i].buddy) else {
        let hint = Paragraph::new(label(locale, Label::SelectBuddy))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(hint, chunks[1]);
        return;
    };

    let presence = if buddy.online {
        label(locale, Label::Online).to_string()
    } else {
        format!("{} · {}", label(locale, Label::Offline), buddy.last_seen)
    };
    let lines: Vec<Line> = state
        .thread
        .iter()
        .map(|m| {
            let color = if m.is_own { Color::Cyan } else { Color::Green };
            Line::from(vec![
                Span::styled(format!("[{}] ", m.timestamp.format("%H:%M")), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}: ", m.sender_name), Style::default().fg(color).bold()),
                Span::raw(m.body.clone()),
            ])
        })
        .collect();
    let visible = right[0].height.saturating_sub(2) as usize;
    let offset = lines.len().saturating_sub(visible) as u16;
    let thread = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} · {} · {} ", buddy.name, buddy.level, presence)),
        );
    f.render_widget(thread, right[0]);

    let editing = state.input_mode == InputMode::Editing;
    let input_title = format!(" {} ", label(locale, Label::TypeMessage));
    f.render_widget(ui::render_input(&state.chat_input, &input_title, editing), right[1]);
    if editing {
        place_cursor(f, right[1], &state.chat_input, state.cursor_position);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.active_tab == Tab::Login {
        " Tab:field | F2/←→:role | Enter:login | Esc:quit "
    } else if state.form.is_some() {
        " Tab:field | F2:level/category | F3:difficulty | ↑↓:correct option | Enter:save | Esc:cancel "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Enter:send "
    } else {
        match state.active_tab {
            Tab::Quiz => " ↑↓:option | Enter:answer/next | ←→:category | r:restart | l:language | ?:help | q:quit ",
            Tab::BuddyChat => " ↑↓:buddy | e:write | l:language | o:logout | ?:help | q:quit ",
            _ => " Tab:view | 1-9:jump | l:language | o:logout | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_form_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let locale = state.locale;
    let popup_area = centered_rect(70, 80, area);

    let mut lines: Vec<Line> = Vec::new();
    let field_line = |i: usize, name: String, value: &str| {
        let focused = i == state.form_field;
        let style = if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default()
        };
        let value = if focused {
            let cursor = state.cursor_position.min(value.len());
            format!("{}▏{}", &value[..cursor], &value[cursor..])
        } else {
            value.to_string()
        };
        Line::from(vec![Span::styled(format!("{:>22}: ", name), style), Span::raw(value)])
    };

    let title = match state.form {
        Some(FormKind::Course) => {
            let draft = &state.course_form;
            for (i, name) in CourseDraft::FIELDS.iter().enumerate() {
                lines.push(field_line(i, name.to_string(), draft.field(i).map_or("", String::as_str)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(format!("{:>22}: {}", label(locale, Label::Level), draft.level)));
            " New Course "
        }
        Some(FormKind::Quiz) => {
            let draft = &state.quiz_form;
            for i in 0..QuizDraft::FIELD_COUNT {
                let name = QuizDraft::field_label(i).unwrap_or_default();
                let name = if i >= 2 && i < 2 + OPTION_SLOTS && i - 2 == draft.correct {
                    format!("✓ {}", name)
                } else {
                    name
                };
                lines.push(field_line(i, name, draft.field(i).map_or("", String::as_str)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "{:>22}: {}   difficulty: {}",
                tab_name(locale, Tab::Quiz),
                category_name(locale, draft.category),
                draft.difficulty.as_str()
            )));
            " New Quiz Question "
        }
        None => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black));
    let form = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(form, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 SIGNLEARN - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Next / previous view
   1-9                Jump to view
   ↑ / ↓              Scroll
   l                  Switch English / Marathi
   o                  Logout

 QUIZ
   ↑ / ↓              Highlight option
   Enter / Space      Answer, then next question
   ← / →              Change category
   r                  Restart category

 STUDY BUDDIES
   ↑ / ↓              Choose buddy
   e / Enter          Write a message (Enter sends)

 TEACHER DASHBOARD
   /                  Search students
   n / m              New course / new quiz question

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_notice_popup(f: &mut Frame, text: &str, color: Color, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", APP_NAME))
        .style(Style::default().bg(Color::Black));

    let notice = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(text.to_string(), Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(Span::styled("Press any key", Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(block)
    .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(notice, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
