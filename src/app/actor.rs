//! App actor - message loop processing UI events and timer events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::authoring::FormKind;
use crate::messages::{RenderState, TimerCommand, TimerEvent, UiEvent};

/// App actor that processes UI events and scheduler deadlines
pub struct AppActor {
    state: AppState,
    timer_tx: mpsc::UnboundedSender<TimerCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        timer_tx: mpsc::UnboundedSender<TimerCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            timer_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.timer_tx.send(TimerCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(event) = timer_rx.recv() => {
                    self.state.handle_timer_event(event);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::NextTab => forward(&self.timer_tx, self.state.next_tab()),
            UiEvent::PrevTab => forward(&self.timer_tx, self.state.prev_tab()),
            UiEvent::JumpToTab(index) => forward(&self.timer_tx, self.state.jump_to_tab(index)),
            UiEvent::ToggleLanguage => self.state.toggle_language(),
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),

            // Session
            UiEvent::SubmitLogin => self.state.submit_login(),
            UiEvent::ToggleRole => self.state.toggle_role(),
            UiEvent::Logout => forward(&self.timer_tx, self.state.logout()),

            // Quiz
            UiEvent::QuizCursorUp => self.state.quiz_cursor_up(),
            UiEvent::QuizCursorDown => self.state.quiz_cursor_down(),
            UiEvent::QuizConfirm => self.state.quiz_confirm(),
            UiEvent::NextCategory => self.state.next_category(),
            UiEvent::PrevCategory => self.state.prev_category(),
            UiEvent::RestartQuiz => self.state.restart_quiz(),

            // Buddy chat
            UiEvent::NextBuddy => self.state.next_buddy(),
            UiEvent::PrevBuddy => self.state.prev_buddy(),
            UiEvent::SendMessage => forward(&self.timer_tx, self.state.send_message()),

            // Teacher authoring
            UiEvent::OpenCourseForm => self.state.open_form(FormKind::Course),
            UiEvent::OpenQuizForm => self.state.open_form(FormKind::Quiz),
            UiEvent::SubmitForm => self.state.submit_form(),
            UiEvent::CancelForm => self.state.cancel_form(),
            UiEvent::CycleFormChoice => self.state.cycle_form_choice(),
            UiEvent::CycleDifficulty => self.state.cycle_difficulty(),
            UiEvent::NextCorrectOption => self.state.next_correct_option(),
            UiEvent::PrevCorrectOption => self.state.prev_correct_option(),

            // Popups
            UiEvent::DismissNotice => self.state.dismiss_notice(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

/// Pass a state-produced command on to the reply scheduler
fn forward(timer_tx: &mpsc::UnboundedSender<TimerCommand>, cmd: Option<TimerCommand>) {
    if let Some(cmd) = cmd {
        let _ = timer_tx.send(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatEngine;
    use crate::config::Config;
    use crate::content::Catalog;
    use crate::messages::ui_events::Tab;
    use crate::scheduler::ReplyScheduler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;
    use std::time::Duration;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    impl Harness {
        fn start() -> Self {
            let catalog = Arc::new(Catalog::embedded().unwrap());
            let chat = ChatEngine::with_rng(StdRng::seed_from_u64(3));
            let state = AppState::new(Config::default(), catalog, chat);

            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (timer_cmd_tx, timer_cmd_rx) = mpsc::unbounded_channel();
            let (timer_event_tx, timer_event_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();

            tokio::spawn(ReplyScheduler::new(timer_event_tx).run(timer_cmd_rx));
            tokio::spawn(AppActor::new(state, timer_cmd_tx, render_tx).run(ui_rx, timer_event_rx));
            Harness { ui_tx, render_rx }
        }

        fn send(&self, events: &[UiEvent]) {
            for event in events {
                self.ui_tx.send(event.clone()).unwrap();
            }
        }

        fn type_text(&self, text: &str) {
            for c in text.chars() {
                self.ui_tx.send(UiEvent::CharInput(c)).unwrap();
            }
        }

        /// Latest snapshot once the actors have gone idle
        async fn settle(&mut self) -> RenderState {
            tokio::task::yield_now().await;
            let mut latest = self.render_rx.recv().await.unwrap();
            while let Ok(state) = self.render_rx.try_recv() {
                latest = state;
            }
            latest
        }
    }

    /// Log in as a student and open a thread with the first buddy
    fn open_chat(harness: &Harness) {
        harness.type_text("x@y.com");
        harness.send(&[UiEvent::SubmitLogin, UiEvent::JumpToTab(6), UiEvent::NextBuddy, UiEvent::StartEditing]);
        harness.type_text("hi");
        harness.send(&[UiEvent::SendMessage]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut harness = Harness::start();
        open_chat(&harness);

        let sent = harness.settle().await;
        assert_eq!(sent.active_tab, Tab::BuddyChat);
        assert_eq!(sent.selected_buddy, Some(1));
        assert_eq!(sent.thread.len(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let typing = harness.settle().await;
        assert!(typing.buddies[0].typing);
        assert_eq!(typing.thread.len(), 1);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        let replied = harness.settle().await;
        assert_eq!(replied.thread.len(), 2);
        assert!(!replied.thread[1].is_own);
        assert!(!replied.buddies[0].typing);
        assert!(replied.buddies[1..].iter().all(|b| !b.typing));
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_chat_drops_reply() {
        let mut harness = Harness::start();
        open_chat(&harness);
        harness.send(&[UiEvent::StopEditing, UiEvent::JumpToTab(0)]);
        harness.settle().await;

        tokio::time::sleep(Duration::from_secs(10)).await;
        harness.send(&[UiEvent::JumpToTab(6)]);
        let back = harness.settle().await;
        assert_eq!(back.active_tab, Tab::BuddyChat);
        assert_eq!(back.thread.len(), 1);
    }

    #[tokio::test]
    async fn test_logout_returns_to_landing() {
        let mut harness = Harness::start();
        harness.send(&[UiEvent::NextField, UiEvent::NextField, UiEvent::ToggleRole]);
        harness.type_text("ignored on role field");
        harness.send(&[UiEvent::SubmitLogin]);
        let teacher = harness.settle().await;
        assert!(teacher.user.as_ref().unwrap().is_teacher());
        assert_eq!(teacher.active_tab, Tab::Home);

        harness.send(&[UiEvent::Logout]);
        let landing = harness.settle().await;
        assert!(landing.user.is_none());
        assert_eq!(landing.active_tab, Tab::Login);
        assert_eq!(landing.tabs, vec![Tab::Login]);
    }
}
