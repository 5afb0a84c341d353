use crate::{ValidationError, config::is_blank, types::DateTimeValue};

/// One calendar entry to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Combined with the configured prefix to form the UID.
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: String,
    pub start: DateTimeValue,
    pub end: DateTimeValue,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        summary: impl Into<String>,
        start: impl Into<DateTimeValue>,
        end: impl Into<DateTimeValue>,
    ) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            description: None,
            location: String::new(),
            start: start.into(),
            end: end.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.id) {
            return Err(ValidationError::MissingField("id"));
        }
        if is_blank(&self.summary) {
            return Err(ValidationError::MissingField("summary"));
        }
        Ok(())
    }
}
