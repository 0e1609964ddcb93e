//! Timer messages - communication between App layer and reply scheduler

use std::time::Duration;

use crate::chat::TicketId;
use crate::content::BuddyId;

/// Commands sent from App layer to the reply scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    /// Arm the typing and reply deadlines for one sent message.
    /// Both durations are measured from the moment of scheduling.
    Schedule {
        ticket: TicketId,
        buddy_id: BuddyId,
        typing_after: Duration,
        reply_after: Duration,
    },
    /// Drop every pending reply
    CancelAll,
    /// Shutdown the scheduler
    Shutdown,
}

/// Deadlines reported back to the App layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Buddy should appear to be typing
    TypingStarted { ticket: TicketId, buddy_id: BuddyId },
    /// Buddy's reply is due
    ReplyDue { ticket: TicketId, buddy_id: BuddyId },
}

impl TimerEvent {
    pub fn ticket(&self) -> TicketId {
        match self {
            TimerEvent::TypingStarted { ticket, .. } => *ticket,
            TimerEvent::ReplyDue { ticket, .. } => *ticket,
        }
    }

    pub fn buddy_id(&self) -> BuddyId {
        match self {
            TimerEvent::TypingStarted { buddy_id, .. } => *buddy_id,
            TimerEvent::ReplyDue { buddy_id, .. } => *buddy_id,
        }
    }
}
