use thiserror::Error;

/// Errors raised while validating command-line configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("smtp host must not be empty")]
    MissingHost,
    #[error("at least one recipient is required")]
    NoRecipients,
    #[error("invalid from address '{address}': {detail}")]
    InvalidFrom { address: String, detail: String },
    #[error("smtp username and password must be provided together")]
    IncompleteCredentials,
    #[error("unsupported content type '{0}', expected text/plain or text/html")]
    UnsupportedContentType(String),
    #[error("failed to read body template file '{path}': {detail}")]
    TemplateFile { path: String, detail: String },
}

/// Errors raised while resolving a subject or body template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template parse failed: {detail}")]
    Parse { detail: String },
    #[error("template render failed: {detail}")]
    Render { detail: String },
}

/// Errors raised while composing or transmitting the email.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("no recipients after normalization")]
    NoRecipients,
    #[error("invalid mailbox '{address}': {detail}")]
    InvalidMailbox { address: String, detail: String },
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("tls setup failed: {0}")]
    Tls(String),
    #[error("smtp send failed: {0}")]
    Transport(String),
}

/// Errors surfaced by the per-event pipeline.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("mail error: {0}")]
    Mail(#[from] MailError),
}
