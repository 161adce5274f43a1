use async_trait::async_trait;
use lettre::message::{header, Mailbox, Mailboxes};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::error::MailError;
use crate::types::{Config, ContentType};

/// Async transport seam so the pipeline can be exercised without an
/// SMTP server.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send_email(&self, message: Message) -> Result<(), String>;
}

/// Production transport backed by the async SMTP client.
pub struct SmtpMailer {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from configuration. The insecure flag
    /// selects a plain connection; otherwise STARTTLS is required for
    /// the configured host. Nothing connects until the first send.
    pub fn from_config(cfg: &Config) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&cfg.smtp_host)
            .port(cfg.smtp_port);

        if !cfg.insecure {
            let params = TlsParameters::new(cfg.smtp_host.clone())
                .map_err(|e| MailError::Tls(e.to_string()))?;
            builder = builder.tls(Tls::Required(params));
        }

        if let (Some(user), Some(pass)) = (&cfg.smtp_username, &cfg.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            inner: builder.build(),
        })
    }
}

#[async_trait]
impl EmailTransport for SmtpMailer {
    async fn send_email(&self, message: Message) -> Result<(), String> {
        self.inner
            .send(message)
            .await
            .map(|response| {
                debug!("smtp server accepted message: {:?}", response.code());
            })
            .map_err(|e| e.to_string())
    }
}

/// Builds the message from the normalized recipient list and the two
/// rendered strings. All recipients share one To header in normalized
/// order; the body carries the configured content type.
pub fn compose_message(
    cfg: &Config,
    recipients: &str,
    subject: &str,
    body: &str,
) -> Result<Message, MailError> {
    if recipients.is_empty() {
        return Err(MailError::NoRecipients);
    }

    let from: Mailbox = cfg
        .from_email
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidMailbox {
            address: cfg.from_email.clone(),
            detail: e.to_string(),
        })?;

    let to: Mailboxes = recipients
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidMailbox {
            address: recipients.to_string(),
            detail: e.to_string(),
        })?;

    let mut builder = Message::builder().from(from).subject(subject);
    for mailbox in to {
        builder = builder.to(mailbox);
    }

    let content_type = match cfg.content_type {
        ContentType::PlainText => header::ContentType::TEXT_PLAIN,
        ContentType::Html => header::ContentType::TEXT_HTML,
    };

    builder
        .header(content_type)
        .body(body.to_string())
        .map_err(|e| MailError::Build(e.to_string()))
}
