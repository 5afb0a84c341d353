//! Settings shared by every event of an exported calendar.
//!
//! With the `serde` feature the configuration can be read from any serde format using the
//! camelCase keys `productId`, `eventIdPrefix`, `eventCreationDate`, `organizerName`,
//! `organizerEmail` and `timezone`.
//!
//! ```rust
//! use calpublish::{CalendarConfig, types::Tz};
//!
//! let config = CalendarConfig::new("-//Example//Registry//EN", "example-", "2024-05-01 09:00:00")
//!     .with_organizer_name("The organizer")
//!     .with_organizer_email("organizer@example.com")
//!     .with_timezone(Tz::UTC);
//! assert_eq!(config.organizer_text(), "\"The organizer\":MAILTO:organizer@example.com");
//! ```

use crate::{
    ConfigurationError,
    generator::text::escape_reserved,
    types::{DateTimeValue, Tz},
};

const ORGANIZER_MAILTO: &str = ":MAILTO:";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalendarConfig {
    pub product_id: String,
    pub event_id_prefix: String,
    pub event_creation_date: DateTimeValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub organizer_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub organizer_email: Option<String>,
    /// Zone used for creation, start and end times that carry no offset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timezone: Tz,
}

impl CalendarConfig {
    pub fn new(
        product_id: impl Into<String>,
        event_id_prefix: impl Into<String>,
        event_creation_date: impl Into<DateTimeValue>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            event_id_prefix: event_id_prefix.into(),
            event_creation_date: event_creation_date.into(),
            organizer_name: None,
            organizer_email: None,
            timezone: Tz::default(),
        }
    }

    #[must_use]
    pub fn with_organizer_name(mut self, name: impl Into<String>) -> Self {
        self.organizer_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_organizer_email(mut self, email: impl Into<String>) -> Self {
        self.organizer_email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// The event id prefix may be empty, the product identifier may not.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if is_blank(&self.product_id) {
            return Err(ConfigurationError::MissingField("productId"));
        }
        Ok(())
    }

    /// Value of the `CN` parameter of the ORGANIZER line, with `,` and `;` escaped.
    pub fn organizer_text(&self) -> String {
        let name = non_blank(self.organizer_name.as_deref()).map(escape_reserved);
        let email = non_blank(self.organizer_email.as_deref()).map(escape_reserved);

        match (name, email) {
            (Some(name), Some(email)) => format!("\"{name}\"{ORGANIZER_MAILTO}{email}"),
            (Some(name), None) => format!("\"{name}\""),
            (None, Some(email)) => email.into_owned(),
            (None, None) => String::new(),
        }
    }
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !is_blank(text))
}
