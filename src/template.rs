use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use minijinja::value::{from_args, Object, ObjectRepr, Value};
use minijinja::{
    context, AutoEscape, Environment, Error as JinjaError, ErrorKind, State, UndefinedBehavior,
};

use crate::error::TemplateError;
use crate::timefmt;
use crate::types::{ContentType, Event};

/// Renders a template against the event.
///
/// The context exposes exactly `Entity.Name`, `Check.Name`,
/// `Check.Executed` and `Check.Annotations`; anything else is a render
/// error rather than a silent blank. With `ContentType::Html` every
/// interpolated value is HTML-escaped, while literal template text is
/// emitted untouched. A fresh environment is built per call, so
/// configuration changes between events always take effect.
pub fn resolve_template(
    source: &str,
    event: &Event,
    content_type: ContentType,
) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    if content_type == ContentType::Html {
        env.set_auto_escape_callback(|_| AutoEscape::Html);
    }
    env.add_function("UnixTime", unix_time);

    let template = env.template_from_str(source).map_err(|e| TemplateError::Parse {
        detail: e.to_string(),
    })?;

    template
        .render(event_context(event))
        .map_err(|e| TemplateError::Render {
            detail: e.to_string(),
        })
}

fn event_context(event: &Event) -> Value {
    context! {
        Entity => context! {
            Name => &event.entity.metadata.name,
        },
        Check => context! {
            Name => &event.check.metadata.name,
            Executed => event.check.executed,
            Annotations => &event.check.metadata.annotations,
        },
    }
}

fn unix_time(epoch: i64) -> Result<Value, JinjaError> {
    match Utc.timestamp_opt(epoch, 0).single() {
        Some(instant) => Ok(Value::from_object(TimeValue { instant })),
        None => Err(JinjaError::new(
            ErrorKind::InvalidOperation,
            format!("epoch {} is out of range", epoch),
        )),
    }
}

/// Time value returned by `UnixTime`. Its `Format` method takes a
/// reference-date layout and renders the instant in UTC.
#[derive(Debug)]
struct TimeValue {
    instant: DateTime<Utc>,
}

impl Object for TimeValue {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, JinjaError> {
        match method {
            "Format" => {
                let (layout,): (&str,) = from_args(args)?;
                Ok(Value::from(timefmt::format_instant(&self.instant, layout)))
            }
            _ => Err(JinjaError::new(
                ErrorKind::UnknownMethod,
                format!("time value has no method named {}", method),
            )),
        }
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: Sized + 'static,
    {
        write!(f, "{}", self.instant.to_rfc3339())
    }
}
