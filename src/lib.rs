const LINE_BREAK: &str = "\r\n";
const FOLD_BREAK: &str = "\r\n ";
const FOLD_WIDTH: usize = 70;
const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';

pub mod config;
pub use config::CalendarConfig;

pub mod error;
pub use error::{ConfigurationError, Error, PersistenceError, TimestampParseError, ValidationError};

pub mod event;
pub use event::Event;

pub mod generator;
pub use generator::{CalendarDocumentBuilder, Emitter, EventBlock};

pub mod property;

pub mod types;
