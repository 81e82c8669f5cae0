use async_trait::async_trait;
use aws_sdk_sesv2::{
    types::{Body, Content, Destination, EmailContent, Message},
    Client as SesClient,
};
use dioxus_logger::tracing;

use crate::server::{
    error::mail::MailError,
    mail::{MailMessage, Mailer},
};

pub struct SesMailer {
    client: SesClient,
    from: String,
}

impl SesMailer {
    pub fn new(client: SesClient, from: String) -> Self {
        Self { client, from }
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        let subject = Content::builder()
            .data(message.subject)
            .charset("UTF-8")
            .build()
            .map_err(|e| MailError::Build(e.to_string()))?;

        let body = Body::builder()
            .text(
                Content::builder()
                    .data(message.body)
                    .charset("UTF-8")
                    .build()
                    .map_err(|e| MailError::Build(e.to_string()))?,
            )
            .build();

        let email = Message::builder().subject(subject).body(body).build();

        self.client
            .send_email()
            .from_email_address(&self.from)
            .destination(Destination::builder().to_addresses(&message.to).build())
            .content(EmailContent::builder().simple(email).build())
            .send()
            .await
            .map_err(|e| MailError::Send {
                to: message.to.clone(),
                message: e.to_string(),
            })?;

        tracing::info!(to = %message.to, "Email sent");
        Ok(())
    }
}
