// Public modules
pub mod types;
pub mod error;
pub mod cli;
pub mod config;
pub mod recipients;
pub mod timefmt;
pub mod template;
pub mod mailer;
pub mod handler;

// Re-export commonly used items
pub use types::{Check, Config, ContentType, Entity, Event, ObjectMeta};
pub use error::{ConfigError, HandlerError, MailError, TemplateError};
pub use cli::Cli;
pub use config::{body_template_source, load_config};
pub use recipients::normalize_recipients;
pub use timefmt::{format_unix, layout_to_strftime};
pub use template::resolve_template;
pub use mailer::{compose_message, EmailTransport, SmtpMailer};
pub use handler::handle_event;
