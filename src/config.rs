use lettre::message::Mailbox;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::types::{Config, ContentType};

/// Validates parsed command-line arguments into a `Config`.
///
/// The from address must parse as a mailbox, credentials must be
/// provided as a pair, and the content type must be one of the two
/// supported values. Recipient tokens are carried through untouched;
/// they are normalized per event, not here.
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    if cli.smtp_host.trim().is_empty() {
        return Err(ConfigError::MissingHost);
    }
    if cli.to_email.is_empty() {
        return Err(ConfigError::NoRecipients);
    }

    cli.from_email
        .parse::<Mailbox>()
        .map_err(|e| ConfigError::InvalidFrom {
            address: cli.from_email.clone(),
            detail: e.to_string(),
        })?;

    if cli.smtp_username.is_some() != cli.smtp_password.is_some() {
        return Err(ConfigError::IncompleteCredentials);
    }

    let content_type: ContentType = cli.content_type.parse()?;

    Ok(Config {
        smtp_host: cli.smtp_host.clone(),
        smtp_port: cli.smtp_port,
        smtp_username: cli.smtp_username.clone(),
        smtp_password: cli.smtp_password.clone(),
        insecure: cli.insecure,
        from_email: cli.from_email.clone(),
        to_email: cli.to_email.clone(),
        subject_template: cli.subject_template.clone(),
        body_template: cli.body_template.clone(),
        body_template_file: cli.body_template_file.clone(),
        content_type,
    })
}

/// Returns the body template text, reading the template file when one
/// is configured. The file is read per event so edits take effect
/// without restarting anything.
pub fn body_template_source(cfg: &Config) -> Result<String, ConfigError> {
    match &cfg.body_template_file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| ConfigError::TemplateFile {
            path: path.display().to_string(),
            detail: e.to_string(),
        }),
        None => Ok(cfg.body_template.clone()),
    }
}
