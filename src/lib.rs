//! Shared SMTP transport for application email delivery.
//!
//! Connection parameters come from the `SMTP_HOST`, `SMTP_PORT`,
//! `SMTP_SECURE`, `SMTP_USER`, `SMTP_PASS` and `NODE_ENV` environment
//! variables. The intended usage is to build one [`SmtpMailer`] during
//! application bootstrap and pass it by reference to whatever needs to send
//! mail; nothing here touches the network until a send is attempted.

pub mod config;
pub mod error;
pub mod mailer;

pub use config::SmtpConfig;
pub use error::MailerError;
pub use mailer::{MailSender, SmtpMailer};
