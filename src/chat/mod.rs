pub mod controller;
pub mod models;
pub mod reply;
pub mod samples;
pub mod selector;
pub mod session;

pub use controller::{ChatController, FixedDelay, ReplyHandle, ReplyScheduler, Transcript};
pub use models::{ChatMessage, Role, Series, VisualizationKind, VisualizationPayload};
pub use session::{ChatSession, PendingReply};
