use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("Failed to send email to {to}: {message}")]
    Send { to: String, message: String },
}
