use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;
use uuid::Uuid;

use super::models::ChatMessage;
use super::session::ChatSession;
use crate::config::ChatConfig;
use crate::error::SubmitError;

/// Decides when a pending reply is produced.
#[async_trait]
pub trait ReplyScheduler: Send + Sync {
    async fn wait(&self);
}

/// Sleeps for a fixed simulated latency.
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ReplyScheduler for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Point-in-time copy of the session for rendering and the JSON API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub session_id: Uuid,
    pub pending: bool,
    pub messages: Vec<ChatMessage>,
}

/// Resolves to the bot message once the scheduled reply lands.
pub struct ReplyHandle {
    task: JoinHandle<Option<ChatMessage>>,
}

impl ReplyHandle {
    /// `None` if the reply was cancelled.
    pub async fn wait(self) -> Option<ChatMessage> {
        self.task.await.ok().flatten()
    }
}

/// Owns the single chat session and drives its reply task.
#[derive(Clone)]
pub struct ChatController {
    session: Arc<Mutex<ChatSession>>,
    rng: Arc<Mutex<StdRng>>,
    scheduler: Arc<dyn ReplyScheduler>,
    in_flight: Arc<Mutex<Option<AbortHandle>>>,
}

impl ChatController {
    pub fn new(config: &ChatConfig) -> Self {
        let scheduler = FixedDelay::new(Duration::from_millis(config.response_delay_ms));
        Self::with_scheduler(config, Arc::new(scheduler))
    }

    pub fn with_scheduler(config: &ChatConfig, scheduler: Arc<dyn ReplyScheduler>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            session: Arc::new(Mutex::new(ChatSession::new(&config.welcome_message))),
            rng: Arc::new(Mutex::new(rng)),
            scheduler,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Appends the user's message now and schedules the bot reply.
    ///
    /// Rejected while a reply is pending; the text is dropped, not queued.
    pub async fn submit(&self, text: &str) -> Result<(ChatMessage, ReplyHandle), SubmitError> {
        let pending = self.session.lock().await.submit(text)?;
        let user_message = pending.user_message().clone();

        let session = self.session.clone();
        let rng = self.rng.clone();
        let scheduler = self.scheduler.clone();

        let task = tokio::spawn(async move {
            scheduler.wait().await;
            // Lock order: rng, then session.
            let mut rng = rng.lock().await;
            let mut session = session.lock().await;
            session.complete(pending, &mut *rng).cloned()
        });

        *self.in_flight.lock().await = Some(task.abort_handle());
        Ok((user_message, ReplyHandle { task }))
    }

    /// Cancels the pending reply. Returns whether one was pending.
    pub async fn cancel(&self) -> bool {
        if let Some(handle) = self.in_flight.lock().await.take() {
            handle.abort();
        }
        let cancelled = self.session.lock().await.cancel();
        if !cancelled {
            debug!("cancel requested with no pending reply");
        }
        cancelled
    }

    pub async fn is_pending(&self) -> bool {
        self.session.lock().await.is_pending()
    }

    pub async fn transcript(&self) -> Transcript {
        let session = self.session.lock().await;
        Transcript {
            session_id: session.id(),
            pending: session.is_pending(),
            messages: session.messages().to_vec(),
        }
    }
}
