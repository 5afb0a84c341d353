mod document;
pub use document::CalendarDocumentBuilder;

mod event;
pub use event::EventBlock;

mod fold;
pub use fold::fold_line;

pub mod text;

pub trait Emitter {
    /// Wire representation, CRLF terminated.
    fn generate(&self) -> String;
}
