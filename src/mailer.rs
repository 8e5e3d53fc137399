use async_trait::async_trait;
use lettre::{
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::{config::SmtpConfig, error::MailerError};

#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), MailerError>;
}

/// One reusable SMTP handle for the lifetime of the process.
///
/// Construction only assembles the transport; the host and credentials are
/// not validated until a send is attempted.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let host = config.host_or_default();

        let mut tls = TlsParameters::builder(host.to_string());
        if !config.tls_verify {
            // Self-signed certificates are common outside production
            // (Mailtrap, Mailpit, local relays).
            tls = tls.dangerous_accept_invalid_certs(true);
        }
        let tls = tls.build()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(config.port)
            .tls(if config.secure {
                Tls::Wrapper(tls)
            } else {
                Tls::Opportunistic(tls)
            });

        if config.user.is_some() || config.pass.is_some() {
            builder = builder.credentials(Credentials::new(
                config.user.clone().unwrap_or_default(),
                config.pass.clone().unwrap_or_default(),
            ));
        }

        debug!(
            host,
            port = config.port,
            secure = config.secure,
            "smtp transport ready"
        );

        Ok(Self {
            transport: builder.build(),
        })
    }

    /// The underlying transport, for callers that need lettre's full surface.
    pub fn transport(&self) -> &AsyncSmtpTransport<Tokio1Executor> {
        &self.transport
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, message: Message) -> Result<(), MailerError> {
        self.transport.send(message).await?;
        Ok(())
    }
}
