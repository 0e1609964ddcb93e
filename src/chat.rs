//! Buddy chat simulation
//!
//! Each buddy owns an append-only message log. Sending a message hands back a
//! [`PendingReply`] ticket; the reply scheduler later reports the typing and
//! reply deadlines for that ticket, which the engine turns into a typing flag
//! and a canned reply. Tickets can be cancelled in bulk when the chat view
//! goes away, after which late timer events are ignored.

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use std::collections::{HashMap, HashSet};

use crate::content::{BuddyId, Catalog, Locale};

const OWN_SENDER_NAME: &str = "You";
const OWN_SENDER_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=You";

/// Identifier of one scheduled reply
pub type TicketId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Video,
    Help,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: u64,
    pub buddy_id: BuddyId,
    pub sender_name: String,
    pub sender_avatar: String,
    pub body: String,
    pub timestamp: DateTime<Local>,
    pub is_own: bool,
    pub read: bool,
    pub kind: MessageKind,
}

/// A reply owed by a buddy, waiting on the scheduler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: TicketId,
    pub buddy_id: BuddyId,
    /// Locale at send time; picks the reply list
    pub locale: Locale,
}

pub struct ChatEngine {
    threads: HashMap<BuddyId, Vec<ChatMessage>>,
    typing: HashSet<BuddyId>,
    pending: HashMap<TicketId, PendingReply>,
    selected: Option<BuddyId>,
    next_message_id: u64,
    next_ticket: TicketId,
    rng: Box<dyn RngCore + Send>,
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("threads", &self.threads.len())
            .field("typing", &self.typing)
            .field("pending", &self.pending.len())
            .field("selected", &self.selected)
            .finish()
    }
}

impl ChatEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine with an explicit random source for reply selection
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        ChatEngine {
            threads: HashMap::new(),
            typing: HashSet::new(),
            pending: HashMap::new(),
            selected: None,
            next_message_id: 1,
            next_ticket: 1,
            rng: Box::new(rng),
        }
    }

    /// Focus a buddy's thread. Unknown ids are ignored.
    pub fn select_buddy(&mut self, catalog: &Catalog, id: BuddyId) -> bool {
        if catalog.buddy(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn selected(&self) -> Option<BuddyId> {
        self.selected
    }

    pub fn thread(&self, id: BuddyId) -> &[ChatMessage] {
        self.threads.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_typing(&self, id: BuddyId) -> bool {
        self.typing.contains(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn next_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    /// Append an own message to the selected buddy's thread.
    ///
    /// Returns `None` without touching any log when the text is blank or no
    /// buddy is selected.
    pub fn send_message(
        &mut self,
        text: &str,
        locale: Locale,
        now: DateTime<Local>,
    ) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        let buddy_id = self.selected?;

        let message = ChatMessage {
            id: self.next_message_id(),
            buddy_id,
            sender_name: OWN_SENDER_NAME.to_string(),
            sender_avatar: OWN_SENDER_AVATAR.to_string(),
            body: text.to_string(),
            timestamp: now,
            is_own: true,
            read: false,
            kind: MessageKind::Text,
        };
        self.threads.entry(buddy_id).or_default().push(message);

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let pending = PendingReply { ticket, buddy_id, locale };
        self.pending.insert(ticket, pending);
        tracing::debug!(buddy_id, ticket, "message sent, reply pending");
        Some(pending)
    }

    /// Typing deadline reached for `ticket`
    pub fn mark_typing(&mut self, ticket: TicketId) -> bool {
        match self.pending.get(&ticket) {
            Some(pending) => {
                self.typing.insert(pending.buddy_id);
                true
            }
            None => false,
        }
    }

    /// Reply deadline reached for `ticket`: append one canned reply.
    pub fn deliver_reply(
        &mut self,
        catalog: &Catalog,
        ticket: TicketId,
        now: DateTime<Local>,
    ) -> Option<&ChatMessage> {
        let pending = self.pending.remove(&ticket)?;
        let buddy_id = pending.buddy_id;
        self.typing.remove(&buddy_id);

        let Some(body) = catalog
            .replies
            .for_locale(pending.locale)
            .choose(&mut self.rng)
            .cloned()
        else {
            tracing::warn!(ticket, locale = pending.locale.as_str(), "no canned replies available");
            return None;
        };
        let (sender_name, sender_avatar) = match catalog.buddy(buddy_id) {
            Some(buddy) => (buddy.name.clone(), buddy.avatar.clone()),
            None => (format!("Buddy {buddy_id}"), String::new()),
        };

        let message = ChatMessage {
            id: self.next_message_id(),
            buddy_id,
            sender_name,
            sender_avatar,
            body,
            timestamp: now,
            is_own: false,
            read: true,
            kind: MessageKind::Text,
        };
        let thread = self.threads.entry(buddy_id).or_default();
        thread.push(message);
        tracing::debug!(buddy_id, ticket, "simulated reply delivered");
        thread.last()
    }

    /// Drop every pending reply and typing flag. Returns the dropped tickets.
    pub fn cancel_pending(&mut self) -> Vec<TicketId> {
        self.typing.clear();
        let mut tickets: Vec<TicketId> = self.pending.drain().map(|(t, _)| t).collect();
        tickets.sort_unstable();
        tickets
    }

    /// Forget all threads and the selection
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.threads.clear();
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, ChatEngine) {
        let catalog = Catalog::embedded().unwrap();
        let chat = ChatEngine::with_rng(StdRng::seed_from_u64(42));
        (catalog, chat)
    }

    #[test]
    fn test_send_appends_own_unread_message() {
        let (catalog, mut chat) = setup();
        assert!(chat.select_buddy(&catalog, 1));

        let pending = chat.send_message("hi", Locale::En, Local::now()).unwrap();
        assert_eq!(pending.buddy_id, 1);

        let thread = chat.thread(1);
        assert_eq!(thread.len(), 1);
        assert!(thread[0].is_own);
        assert!(!thread[0].read);
        assert_eq!(thread[0].body, "hi");
        assert_eq!(thread[0].kind, MessageKind::Text);
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let (catalog, mut chat) = setup();
        chat.select_buddy(&catalog, 2);
        assert!(chat.send_message("", Locale::En, Local::now()).is_none());
        assert!(chat.send_message("   \t", Locale::En, Local::now()).is_none());
        assert!(chat.thread(2).is_empty());
        assert_eq!(chat.pending_count(), 0);
    }

    #[test]
    fn test_send_without_buddy_is_ignored() {
        let (_, mut chat) = setup();
        assert!(chat.send_message("hello", Locale::En, Local::now()).is_none());
        assert_eq!(chat.pending_count(), 0);
    }

    #[test]
    fn test_unknown_buddy_not_selected() {
        let (catalog, mut chat) = setup();
        assert!(!chat.select_buddy(&catalog, 99));
        assert_eq!(chat.selected(), None);
    }

    #[test]
    fn test_reply_lands_only_in_owning_thread() {
        let (catalog, mut chat) = setup();
        chat.select_buddy(&catalog, 2);
        chat.send_message("earlier", Locale::En, Local::now()).unwrap();
        chat.select_buddy(&catalog, 1);
        let pending = chat.send_message("hi", Locale::En, Local::now()).unwrap();

        assert!(chat.mark_typing(pending.ticket));
        assert!(chat.is_typing(1));

        let reply = chat.deliver_reply(&catalog, pending.ticket, Local::now()).unwrap();
        assert!(!reply.is_own);
        assert!(reply.read);
        assert_eq!(reply.sender_name, "Priya Sharma");
        assert!(catalog.replies.en.contains(&reply.body));

        assert!(!chat.is_typing(1));
        assert_eq!(chat.thread(1).len(), 2);
        assert_eq!(chat.thread(2).len(), 1);
    }

    #[test]
    fn test_reply_uses_locale_at_send_time() {
        let (catalog, mut chat) = setup();
        chat.select_buddy(&catalog, 3);
        let pending = chat.send_message("नमस्कार", Locale::Mr, Local::now()).unwrap();
        let reply = chat.deliver_reply(&catalog, pending.ticket, Local::now()).unwrap();
        assert!(catalog.replies.mr.contains(&reply.body));
    }

    #[test]
    fn test_reply_selection_is_deterministic_with_seed() {
        let catalog = Catalog::embedded().unwrap();
        let bodies = |seed| {
            let mut chat = ChatEngine::with_rng(StdRng::seed_from_u64(seed));
            chat.select_buddy(&catalog, 1);
            (0..6)
                .map(|i| {
                    let p = chat.send_message(&format!("m{i}"), Locale::En, Local::now()).unwrap();
                    chat.deliver_reply(&catalog, p.ticket, Local::now()).unwrap().body.clone()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(bodies(9), bodies(9));
    }

    #[test]
    fn test_log_preserves_append_order() {
        let (catalog, mut chat) = setup();
        chat.select_buddy(&catalog, 4);
        let first = chat.send_message("one", Locale::En, Local::now()).unwrap();
        chat.send_message("two", Locale::En, Local::now()).unwrap();
        chat.deliver_reply(&catalog, first.ticket, Local::now()).unwrap();
        chat.send_message("three", Locale::En, Local::now()).unwrap();

        let thread = chat.thread(4);
        assert_eq!(thread[0].body, "one");
        assert_eq!(thread[1].body, "two");
        assert!(!thread[2].is_own);
        assert_eq!(thread[3].body, "three");
        assert!(thread.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_cancelled_ticket_is_ignored() {
        let (catalog, mut chat) = setup();
        chat.select_buddy(&catalog, 1);
        let pending = chat.send_message("hi", Locale::En, Local::now()).unwrap();
        chat.mark_typing(pending.ticket);

        assert_eq!(chat.cancel_pending(), vec![pending.ticket]);
        assert!(!chat.is_typing(1));
        assert!(!chat.mark_typing(pending.ticket));
        assert!(chat.deliver_reply(&catalog, pending.ticket, Local::now()).is_none());
        assert_eq!(chat.thread(1).len(), 1);
    }

    #[test]
    fn test_clear_forgets_threads() {
        let (catalog, mut chat) = setup();
        chat.select_buddy(&catalog, 1);
        chat.send_message("hi", Locale::En, Local::now()).unwrap();
        chat.clear();
        assert_eq!(chat.selected(), None);
        assert!(chat.thread(1).is_empty());
        assert_eq!(chat.pending_count(), 0);
    }
}
