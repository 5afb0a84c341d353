use std::sync::Arc;

use crate::{
    Error, Event,
    config::non_blank,
    generator::{
        Emitter,
        text::{TextMode, escape_reserved, printable_text},
    },
    property::{ContentLine, ContentLineParams},
    types::Tz,
};

/// Everything of the configuration that ends up inside a VEVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EventContext {
    pub uid_prefix: String,
    pub dtstamp: String,
    pub organizer: String,
    pub timezone: Tz,
}

/// A fully rendered `BEGIN:VEVENT` .. `END:VEVENT` block.
///
/// Remembers the context it was rendered with so it only lands in a document with the same
/// UID prefix, DTSTAMP, organizer and timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBlock {
    uid: String,
    text: String,
    origin: Arc<EventContext>,
}

impl EventBlock {
    pub(crate) fn render(event: &Event, context: &Arc<EventContext>) -> Result<Self, Error> {
        event.validate()?;

        let uid = format!("{}{}", context.uid_prefix, event.id);
        let mut lines = vec![
            ContentLine::new("BEGIN", "VEVENT"),
            ContentLine::new("UID", escape_reserved(&uid)),
            ContentLine::new("DTSTAMP", context.dtstamp.as_str()),
            ContentLine::new("DTSTART", event.start.format_utc(&context.timezone)?),
            ContentLine::new("DTEND", event.end.format_utc(&context.timezone)?),
            ContentLine::new(
                "SUMMARY",
                printable_text(Some(event.summary.as_str()), TextMode::Plain),
            ),
        ];

        if let Some(description) = non_blank(event.description.as_deref()) {
            lines.push(ContentLine::new(
                "DESCRIPTION",
                printable_text(Some(description), TextMode::Plain),
            ));
            lines.push(
                ContentLine::new(
                    "X-ALT-DESC",
                    printable_text(Some(description), TextMode::Html),
                )
                .with_param("FMTTYPE", "text/html"),
            );
        }

        lines.push(ContentLine::new(
            "LOCATION",
            printable_text(Some(event.location.as_str()), TextMode::Plain),
        ));
        lines.push(ContentLine::params_only(
            "ORGANIZER",
            ContentLineParams::from(vec![("CN".to_owned(), context.organizer.clone())]),
        ));
        lines.push(ContentLine::new("CLASS", "PUBLIC"));
        lines.push(ContentLine::new("END", "VEVENT"));

        Ok(Self {
            uid,
            text: lines.generate(),
            origin: Arc::clone(context),
        })
    }

    pub(crate) fn rendered_with(&self, context: &Arc<EventContext>) -> bool {
        Arc::ptr_eq(&self.origin, context) || *self.origin == **context
    }

    /// The unescaped UID of the event.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
