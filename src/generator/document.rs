//! Accumulates VEVENT blocks into a publishable VCALENDAR document.
//!
//! # Examples
//!
//! ```rust
//! use calpublish::{CalendarConfig, CalendarDocumentBuilder, Event, types::Tz};
//!
//! let config = CalendarConfig::new("MyConference - Online Registry", "myevent-", "2024-05-01 08:00:00")
//!     .with_timezone(Tz::UTC);
//! let mut calendar = CalendarDocumentBuilder::new(config).unwrap();
//! calendar
//!     .append_event(
//!         &Event::new("1", "Keynote", "2024-05-02 09:00:00", "2024-05-02 10:00:00")
//!             .with_location("Hall A"),
//!     )
//!     .unwrap();
//!
//! let ics = calendar.render();
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
//! assert!(ics.contains("DTSTART:20240502T090000Z\r\n"));
//! ```

use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
    sync::Arc,
};

use crate::{
    CalendarConfig, ConfigurationError, Error, Event, PersistenceError, ValidationError,
    generator::{
        Emitter,
        event::{EventBlock, EventContext},
        text::escape_reserved,
    },
    property::ContentLine,
    types::DateTimeValue,
};

const ICAL_VERSION: &str = "2.0";
const METHOD: &str = "PUBLISH";

#[derive(Debug, Clone)]
pub struct CalendarDocumentBuilder {
    config: CalendarConfig,
    context: Arc<EventContext>,
    header: String,
    content: String,
    footer: String,
    event_count: usize,
}

impl CalendarDocumentBuilder {
    pub fn new(config: CalendarConfig) -> Result<Self, Error> {
        config.validate()?;

        let dtstamp = config
            .event_creation_date
            .format_utc(&config.timezone)
            .map_err(ConfigurationError::InvalidCreationDate)?;

        let header = vec![
            ContentLine::new("BEGIN", "VCALENDAR"),
            ContentLine::new("VERSION", ICAL_VERSION),
            ContentLine::new("PRODID", escape_reserved(&config.product_id)),
            ContentLine::new("METHOD", METHOD),
        ]
        .generate();
        let footer = ContentLine::new("END", "VCALENDAR").generate();

        let context = Arc::new(EventContext {
            uid_prefix: config.event_id_prefix.clone(),
            dtstamp,
            organizer: config.organizer_text(),
            timezone: config.timezone,
        });

        tracing::debug!(
            product_id = %config.product_id,
            dtstamp = %context.dtstamp,
            timezone = config.timezone.name(),
            "created calendar document"
        );

        Ok(Self {
            config,
            context,
            header,
            content: String::new(),
            footer,
            event_count: 0,
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Render an event without appending it.
    ///
    /// Does not touch the document, so events can be prepared on several threads and pushed in
    /// order afterwards.
    pub fn prepare(&self, event: &Event) -> Result<EventBlock, Error> {
        EventBlock::render(event, &self.context)
    }

    /// Append a block returned by [`Self::prepare`].
    ///
    /// Blocks prepared by a builder with a different configuration are rejected.
    pub fn push_block(&mut self, block: EventBlock) -> Result<(), Error> {
        if !block.rendered_with(&self.context) {
            return Err(ValidationError::ForeignBlock {
                uid: block.uid().to_owned(),
            }
            .into());
        }
        tracing::debug!(uid = block.uid(), "appending event");
        self.content.push_str(block.as_str());
        self.event_count += 1;
        Ok(())
    }

    /// Append an event. On error the document is left unchanged.
    pub fn append_event(&mut self, event: &Event) -> Result<(), Error> {
        let block = self.prepare(event)?;
        self.push_block(block)
    }

    /// Positional form of [`Self::append_event`].
    pub fn append(
        &mut self,
        id: &str,
        summary: &str,
        description: Option<&str>,
        location: &str,
        begin: impl Into<DateTimeValue>,
        end: impl Into<DateTimeValue>,
    ) -> Result<(), Error> {
        let mut event = Event::new(id, summary, begin, end).with_location(location);
        event.description = description.map(str::to_owned);
        self.append_event(&event)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// All VEVENT blocks appended so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn is_empty(&self) -> bool {
        self.event_count == 0
    }

    pub fn render(&self) -> String {
        [self.header.as_str(), self.content.as_str(), self.footer.as_str()].concat()
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.header.as_bytes())?;
        writer.write_all(self.content.as_bytes())?;
        writer.write_all(self.footer.as_bytes())?;
        writer.flush()
    }

    /// Write the rendered document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let rendered = self.render();

        fs::write(path, &rendered).map_err(|source| PersistenceError::Write {
            path: path.to_owned(),
            source,
        })?;

        let written = fs::metadata(path)
            .map_err(|_| PersistenceError::Missing(path.to_owned()))?
            .len();
        if written == 0 || rendered.is_empty() {
            return Err(PersistenceError::EmptyWrite(path.to_owned()));
        }

        tracing::info!(
            path = %path.display(),
            bytes = written,
            events = self.event_count,
            "saved calendar"
        );
        Ok(())
    }
}

impl Emitter for CalendarDocumentBuilder {
    fn generate(&self) -> String {
        self.render()
    }
}

impl fmt::Display for CalendarDocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.header)?;
        f.write_str(&self.content)?;
        f.write_str(&self.footer)
    }
}
