use std::env;

use tracing::debug;

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_HOST: &str = "localhost";

/// SMTP connection parameters, read once at bootstrap and passed by
/// reference to whatever component needs to send mail.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: u16,
    // Implicit TLS from the first byte (typically port 465). When false the
    // connection starts in plaintext and upgrades via STARTTLS if offered.
    pub secure: bool,
    pub user: Option<String>,
    pub pass: Option<String>,
    // Certificate validation is only enforced in production deployments.
    pub tls_verify: bool,
}

impl SmtpConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing rules as [`SmtpConfig::from_env`], against an arbitrary
    /// lookup. Keeps the rules testable without mutating process state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("SMTP_HOST");
        let port = parse_port(lookup("SMTP_PORT"));
        let secure = lookup("SMTP_SECURE").as_deref() == Some("true");
        // Credentials are forwarded verbatim, empty strings included. The
        // SMTP server is the authority on whether they are acceptable.
        let user = lookup("SMTP_USER");
        let pass = lookup("SMTP_PASS");
        let tls_verify = lookup("NODE_ENV").as_deref() == Some("production");

        debug!(
            host = host.as_deref().unwrap_or(DEFAULT_SMTP_HOST),
            port,
            secure,
            tls_verify,
            has_credentials = user.is_some() || pass.is_some(),
            "loaded smtp configuration"
        );

        Self {
            host,
            port,
            secure,
            user,
            pass,
            tls_verify,
        }
    }

    pub(crate) fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_SMTP_HOST)
    }
}

// Base-10 parse of the leading digit run; unset, empty, non-numeric or
// out-of-range values fall back to the mail submission port.
fn parse_port(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_SMTP_PORT;
    };
    let trimmed = raw.trim_start();
    let digits = trimmed.bytes().take_while(|b| b.is_ascii_digit()).count();
    trimmed[..digits].parse().unwrap_or(DEFAULT_SMTP_PORT)
}
