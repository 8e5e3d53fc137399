use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("smtp transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
