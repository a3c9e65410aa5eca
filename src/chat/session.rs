use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use super::models::ChatMessage;
use super::{reply, selector};
use crate::error::SubmitError;

/// Ticket for the one reply a session may be waiting on.
#[derive(Debug, Clone)]
pub struct PendingReply {
    ticket: u64,
    query: ChatMessage,
}

impl PendingReply {
    pub fn query(&self) -> &str {
        &self.query.text
    }

    /// The user message this reply answers.
    pub fn user_message(&self) -> &ChatMessage {
        &self.query
    }
}

/// Message list and pending flag of one chat session.
///
/// The list is append-only and only changes through [`submit`](Self::submit)
/// and [`complete`](Self::complete).
#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
    issued_tickets: u64,
}

impl ChatSession {
    pub fn new(welcome: &str) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "chat session started");
        Self {
            id,
            messages: vec![ChatMessage::bot(1, welcome, None)],
            pending: None,
            issued_tickets: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn next_id(&self) -> u64 {
        self.messages.len() as u64 + 1
    }

    /// Appends the user's message and marks a reply as pending.
    pub fn submit(&mut self, text: &str) -> Result<PendingReply, SubmitError> {
        if text.trim().is_empty() {
            debug!(session = %self.id, "ignoring empty submission");
            return Err(SubmitError::EmptyInput);
        }
        if self.pending.is_some() {
            debug!(session = %self.id, "ignoring submission while a reply is pending");
            return Err(SubmitError::ReplyPending);
        }

        let message = ChatMessage::user(self.next_id(), text);
        info!(session = %self.id, message_id = message.id, "user message appended");
        self.messages.push(message.clone());

        self.issued_tickets += 1;
        let pending = PendingReply {
            ticket: self.issued_tickets,
            query: message,
        };
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Resolves the pending reply: selects a visualization and appends the bot message.
    ///
    /// Returns `None` when `reply` is no longer the pending one (it was cancelled).
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        reply: PendingReply,
        rng: &mut R,
    ) -> Option<&ChatMessage> {
        if self.pending.as_ref().map(|p| p.ticket) != Some(reply.ticket) {
            debug!(session = %self.id, "dropping stale reply");
            return None;
        }

        let visualization = selector::select(reply.query(), rng);
        let text = reply::compose(visualization.as_ref());
        let message = ChatMessage::bot(self.next_id(), text, visualization);
        info!(
            session = %self.id,
            message_id = message.id,
            visualization = message.visualization.as_ref().map(|v| v.kind.as_str()),
            "bot reply appended"
        );

        self.messages.push(message);
        self.pending = None;
        self.messages.last()
    }

    /// Abandons the pending reply, if any. The user's message stays.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            info!(session = %self.id, "pending reply cancelled");
        }
        cancelled
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(reply::WELCOME_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::{Role, VisualizationKind};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn stale_ticket_does_not_append() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = ChatSession::default();

        let first = session.submit("temperature").unwrap();
        assert!(session.cancel());
        let second = session.submit("salinity").unwrap();

        assert!(session.complete(first, &mut rng).is_none());
        assert!(session.is_pending());

        let reply = session.complete(second, &mut rng).unwrap();
        assert_eq!(reply.role, Role::Bot);
        assert_eq!(
            reply.visualization.as_ref().map(|v| v.kind),
            Some(VisualizationKind::Salinity)
        );
        assert_eq!(session.messages().len(), 4);
    }

    #[test]
    fn submitted_text_is_kept_as_typed() {
        let mut session = ChatSession::default();
        let pending = session.submit("  temp?  ").unwrap();
        assert_eq!(pending.query(), "  temp?  ");
        assert_eq!(session.messages()[1].text, "  temp?  ");
    }
}
