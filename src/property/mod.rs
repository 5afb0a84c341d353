//! Logical content lines.
//!
//! A content line is one `NAME[;PARAM=VALUE]*[:VALUE]` line before folding. Parameter values
//! and the value are written untouched, so everything handed in here must already be escaped.

use std::fmt;

use crate::{LINE_BREAK, PARAM_DELIMITER, PARAM_NAME_DELIMITER, VALUE_DELIMITER};
use crate::generator::{Emitter, fold_line};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, derive_more::From)]
pub struct ContentLineParams(pub(crate) Vec<(String, String)>);

impl ContentLineParams {
    pub fn replace_param(&mut self, name: String, value: String) {
        if let Some(pos) = self.0.iter().position(|(n, _)| n == &name) {
            self.0[pos] = (name, value);
        } else {
            self.0.push((name, value));
        }
    }
}

/// A VEVENT/VCALENDAR property.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLine {
    /// Property name.
    pub name: String,
    /// Property list of parameters.
    pub params: ContentLineParams,
    /// Property value. `None` omits the value delimiter altogether.
    pub value: Option<String>,
}

impl ContentLine {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_owned(),
            params: ContentLineParams::default(),
            value: Some(value.into()),
        }
    }

    /// A line carrying only parameters, e.g. `ORGANIZER;CN="Name"`.
    pub fn params_only(name: &str, params: ContentLineParams) -> Self {
        Self {
            name: name.to_owned(),
            params,
            value: None,
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.replace_param(name.to_owned(), value.into());
        self
    }
}

impl fmt::Display for ContentLine {
    /// The unfolded line without line break.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)?;
        for (key, value) in &self.params.0 {
            write!(f, "{PARAM_DELIMITER}{key}{PARAM_NAME_DELIMITER}{value}")?;
        }
        if let Some(value) = &self.value {
            write!(f, "{VALUE_DELIMITER}{value}")?;
        }
        Ok(())
    }
}

impl Emitter for ContentLine {
    fn generate(&self) -> String {
        fold_line(&self.to_string()) + LINE_BREAK
    }
}

impl Emitter for Vec<ContentLine> {
    fn generate(&self) -> String {
        self.iter().map(Emitter::generate).collect()
    }
}
