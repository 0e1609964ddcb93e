//! Reply scheduler actor - runs one cancellable timer task per pending reply

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::chat::TicketId;
use crate::content::BuddyId;
use crate::messages::{TimerCommand, TimerEvent};

/// Scheduler actor that turns timer commands into timer events
pub struct ReplyScheduler {
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    timers: JoinSet<TicketId>,
    cancel_handles: HashMap<TicketId, oneshot::Sender<()>>,
}

impl ReplyScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        ReplyScheduler {
            event_tx,
            timers: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the scheduler message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<TimerCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(TimerCommand::Schedule { ticket, buddy_id, typing_after, reply_after }) => {
                            self.schedule(ticket, buddy_id, typing_after, reply_after);
                        }

                        Some(TimerCommand::CancelAll) => {
                            let count = self.cancel_all();
                            if count > 0 {
                                tracing::debug!(count, "cancelled all reply timers");
                            }
                        }

                        Some(TimerCommand::Shutdown) | None => {
                            self.cancel_all();
                            break;
                        }
                    }
                }

                // Forget finished timers
                Some(result) = self.timers.join_next() => {
                    if let Ok(ticket) = result {
                        self.cancel_handles.remove(&ticket);
                    }
                }
            }
        }
    }

    fn schedule(
        &mut self,
        ticket: TicketId,
        buddy_id: BuddyId,
        typing_after: Duration,
        reply_after: Duration,
    ) {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        if let Some(previous) = self.cancel_handles.insert(ticket, cancel_tx) {
            let _ = previous.send(());
        }

        let event_tx = self.event_tx.clone();
        tracing::debug!(ticket, buddy_id, ?typing_after, ?reply_after, "scheduling reply");

        self.timers.spawn(async move {
            let deadlines = async {
                tokio::time::sleep(typing_after).await;
                let _ = event_tx.send(TimerEvent::TypingStarted { ticket, buddy_id });
                tokio::time::sleep(reply_after.saturating_sub(typing_after)).await;
                let _ = event_tx.send(TimerEvent::ReplyDue { ticket, buddy_id });
            };

            tokio::select! {
                biased;

                _ = cancel_rx => {}
                _ = deadlines => {}
            }
            ticket
        });
    }

    fn cancel_all(&mut self) -> usize {
        let count = self.cancel_handles.len();
        for (_, cancel_tx) in self.cancel_handles.drain() {
            let _ = cancel_tx.send(());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn spawn_scheduler() -> (
        mpsc::UnboundedSender<TimerCommand>,
        mpsc::UnboundedReceiver<TimerEvent>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        tokio::spawn(ReplyScheduler::new(event_tx).run(cmd_rx));
        (cmd_tx, event_rx)
    }

    fn schedule(ticket: TicketId, buddy_id: BuddyId) -> TimerCommand {
        TimerCommand::Schedule {
            ticket,
            buddy_id,
            typing_after: Duration::from_millis(1000),
            reply_after: Duration::from_millis(4000),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_arrive_at_deadlines() {
        let (cmd_tx, mut event_rx) = spawn_scheduler();
        let start = Instant::now();
        cmd_tx.send(schedule(1, 2)).unwrap();

        let typing = event_rx.recv().await.unwrap();
        assert_eq!(typing, TimerEvent::TypingStarted { ticket: 1, buddy_id: 2 });
        let typed_at = start.elapsed();
        assert!(typed_at >= Duration::from_millis(1000));
        assert!(typed_at < Duration::from_millis(4000));

        let reply = event_rx.recv().await.unwrap();
        assert_eq!(reply, TimerEvent::ReplyDue { ticket: 1, buddy_id: 2 });
        assert!(start.elapsed() >= Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_drops_every_ticket() {
        let (cmd_tx, mut event_rx) = spawn_scheduler();
        cmd_tx.send(schedule(1, 1)).unwrap();
        cmd_tx.send(schedule(2, 3)).unwrap();
        cmd_tx.send(TimerCommand::CancelAll).unwrap();
        cmd_tx.send(schedule(3, 4)).unwrap();

        let mut seen = Vec::new();
        for _ in 0..2 {
            seen.push(event_rx.recv().await.unwrap());
        }
        assert!(seen.iter().all(|e| e.ticket() == 3 && e.buddy_id() == 4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_after_typing() {
        let (cmd_tx, mut event_rx) = spawn_scheduler();
        cmd_tx.send(schedule(7, 1)).unwrap();

        let typing = event_rx.recv().await.unwrap();
        assert!(matches!(typing, TimerEvent::TypingStarted { ticket: 7, .. }));
        cmd_tx.send(TimerCommand::CancelAll).unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_loop() {
        let (cmd_tx, mut event_rx) = spawn_scheduler();
        cmd_tx.send(schedule(1, 1)).unwrap();
        cmd_tx.send(TimerCommand::Shutdown).unwrap();

        // Sender side closes once the scheduler and its timers are gone
        assert!(event_rx.recv().await.is_none());
    }
}
