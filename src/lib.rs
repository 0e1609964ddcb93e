//! # SignLearn TUI
//!
//! A bilingual (English / Marathi) sign-language learning portal for the
//! terminal.
//!
//! ## Features
//! - Courses, sign-language videos and a vocabulary list
//! - Multiple-choice quizzes in eight categories with scoring
//! - Study-buddy chat with simulated typing and replies
//! - Teacher dashboard with roster statistics, student search and
//!   course/quiz authoring
//! - Mock login for students and teachers
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Scheduler Layer (Tokio timers for buddy replies)

pub mod constants;
pub mod config;
pub mod content;
pub mod i18n;
pub mod session;
pub mod quiz;
pub mod chat;
pub mod dashboard;
pub mod authoring;
pub mod ui;
pub mod messages;
pub mod app;
pub mod scheduler;

// Re-export commonly used types
pub use config::Config;
pub use content::{Catalog, Locale, QuizCategory};
pub use quiz::{QuizError, QuizPhase, QuizSession};
pub use chat::{ChatEngine, ChatMessage};
pub use session::{Role, SessionUser};
pub use messages::{UiEvent, TimerCommand, TimerEvent, RenderState};
pub use app::{AppState, AppActor};
pub use scheduler::ReplyScheduler;
