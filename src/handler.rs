use tracing::{debug, info};

use crate::config::body_template_source;
use crate::error::{HandlerError, MailError};
use crate::mailer::{compose_message, EmailTransport};
use crate::recipients::normalize_recipients;
use crate::template::resolve_template;
use crate::types::{Config, ContentType, Event};

/// Runs the pipeline for one event: normalize recipients, resolve the
/// subject and body templates, compose, send. The first failure aborts;
/// a template error in particular means no SMTP traffic happens at all.
pub async fn handle_event(
    cfg: &Config,
    event: &Event,
    transport: &dyn EmailTransport,
) -> Result<(), HandlerError> {
    let recipients = normalize_recipients(&cfg.to_email);
    debug!("normalized recipients: {}", recipients);

    // The subject becomes a header, so it always renders as plain text
    // no matter which content type the body uses.
    let subject = resolve_template(&cfg.subject_template, event, ContentType::PlainText)?;

    let body_source = body_template_source(cfg)?;
    let body = resolve_template(&body_source, event, cfg.content_type)?;

    let message = compose_message(cfg, &recipients, &subject, &body)?;
    transport
        .send_email(message)
        .await
        .map_err(MailError::Transport)?;

    info!(
        "sent alert for {}/{} to {} recipient(s)",
        event.entity.metadata.name,
        event.check.metadata.name,
        recipients.split(',').count()
    );
    Ok(())
}
