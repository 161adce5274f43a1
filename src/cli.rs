use clap::Parser;
use std::path::PathBuf;

/// Subject used when no template is configured.
pub const DEFAULT_SUBJECT_TEMPLATE: &str = "Monitoring Alert - {{ Entity.Name }}/{{ Check.Name }}";

/// Body used when neither an inline template nor a template file is
/// configured.
pub const DEFAULT_BODY_TEMPLATE: &str =
    r#"{{ Check.Name }} on {{ Entity.Name }} at {{ UnixTime(Check.Executed).Format("2 Jan 2006 15:04:05") }}"#;

/// Sends an alert email for a monitoring event read from stdin.
#[derive(Parser, Debug)]
#[command(name = "alert-mailer")]
#[command(version)]
#[command(about = "Sends an alert email for a monitoring event read from stdin")]
pub struct Cli {
    /// SMTP server host.
    #[arg(short = 's', long = "smtp-host", env = "SMTP_HOST")]
    pub smtp_host: String,

    /// SMTP server port.
    #[arg(short = 'P', long = "smtp-port", env = "SMTP_PORT", default_value_t = 587)]
    pub smtp_port: u16,

    /// SMTP username, must be paired with --smtp-password.
    #[arg(short = 'u', long = "smtp-username", env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password, must be paired with --smtp-username.
    #[arg(short = 'p', long = "smtp-password", env = "SMTP_PASSWORD")]
    pub smtp_password: Option<String>,

    /// Use a plain connection instead of requiring STARTTLS.
    #[arg(short = 'i', long = "insecure", env = "SMTP_INSECURE")]
    pub insecure: bool,

    /// Sender address.
    #[arg(short = 'f', long = "from-email", env = "FROM_EMAIL")]
    pub from_email: String,

    /// Recipient address. Repeat the flag for several recipients; a
    /// single value may also hold a comma-separated list.
    #[arg(short = 't', long = "to-email", env = "TO_EMAIL", required = true)]
    pub to_email: Vec<String>,

    /// Template for the subject line.
    #[arg(
        long = "subject-template",
        env = "SUBJECT_TEMPLATE",
        default_value = DEFAULT_SUBJECT_TEMPLATE
    )]
    pub subject_template: String,

    /// Inline template for the body.
    #[arg(
        long = "body-template",
        env = "BODY_TEMPLATE",
        default_value = DEFAULT_BODY_TEMPLATE
    )]
    pub body_template: String,

    /// File holding the body template; wins over --body-template.
    #[arg(long = "body-template-file", env = "BODY_TEMPLATE_FILE")]
    pub body_template_file: Option<PathBuf>,

    /// Content type of the body, text/plain or text/html.
    #[arg(long = "content-type", env = "CONTENT_TYPE", default_value = "text/plain")]
    pub content_type: String,
}
