use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub insecure: bool,
    pub from_email: String,
    pub to_email: Vec<String>,
    pub subject_template: String,
    pub body_template: String,
    pub body_template_file: Option<PathBuf>,
    pub content_type: ContentType,
}

/// Declared content type of the rendered body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
    Html,
}

impl ContentType {
    pub fn as_mime(&self) -> &'static str {
        match self {
            ContentType::PlainText => "text/plain",
            ContentType::Html => "text/html",
        }
    }
}

impl FromStr for ContentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text/plain" => Ok(ContentType::PlainText),
            "text/html" => Ok(ContentType::Html),
            other => Err(ConfigError::UnsupportedContentType(other.to_string())),
        }
    }
}

/// Monitoring event as delivered on stdin. Unknown fields are ignored,
/// missing ones default so partial events still parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub entity: Entity,
    #[serde(default)]
    pub check: Check,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Check {
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Unix timestamp of when the check ran.
    #[serde(default)]
    pub executed: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}
