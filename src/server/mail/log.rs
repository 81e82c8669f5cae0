use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::server::{
    error::mail::MailError,
    mail::{MailMessage, Mailer},
};

/// Mailer used when SES is not configured; writes each message to the log.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "Mail delivery disabled, would send:\n{}",
            message.body
        );
        Ok(())
    }
}
