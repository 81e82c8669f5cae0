//! Outgoing email.
//!
//! Every notification is best-effort: [`notify`] logs failures instead of returning them, so
//! a mail outage never fails the request that triggered it.

pub mod log;
pub mod ses;
pub mod template;

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::server::error::mail::MailError;

#[derive(Clone, Debug, PartialEq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: MailMessage) -> Result<(), MailError>;
}

/// Sends `message` and logs a warning if delivery fails.
pub async fn notify(mailer: &dyn Mailer, message: MailMessage) {
    let to = message.to.clone();
    let subject = message.subject.clone();

    if let Err(e) = mailer.send(message).await {
        tracing::warn!(to = %to, subject = %subject, "Failed to send email: {}", e);
    }
}
