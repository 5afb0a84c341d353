//! Turns raw field text into iCalendar TEXT values.
//!
//! Two renderings exist for every text field:
//! - plain: markup stripped, self-closing `<br />` tags and raw line breaks turned into the
//!   escaped `\n` sequence. Used by `SUMMARY`, `DESCRIPTION` and `LOCATION`.
//! - HTML: line breaks turned into `<br />` and the text wrapped into a minimal HTML 3.2
//!   document. Used by `X-ALT-DESC;FMTTYPE=text/html`, which Outlook and others render instead
//!   of the plain description.
//!
//! Both renderings escape `,` and `;`. Absent text renders like empty text.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

const HTML_PREFIX: &str = "<!DOCTYPE HTML PUBLIC \"\"-//W3C//DTD HTML 3.2//EN\"\"><HTML><BODY>";
const HTML_SUFFIX: &str = "</BODY></HTML>";
const HTML_LINE_BREAK: &str = "<br />";
const ESCAPED_NEWLINE: &str = "\\n";

lazy_static! {
    static ref BR_TAG: Regex = Regex::new(r"<br\W*?/>").unwrap();
    static ref MARKUP_TAG: Regex = Regex::new(r"<[A-Za-z/!?][^>]*>").unwrap();
    static ref LINE_BREAKS: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Plain,
    Html,
}

pub fn printable_text(text: Option<&str>, mode: TextMode) -> String {
    let text = text.unwrap_or_default();
    match mode {
        TextMode::Plain => plain_text(text),
        TextMode::Html => html_text(text),
    }
}

pub fn plain_text(text: &str) -> String {
    let text = BR_TAG.replace_all(text, ESCAPED_NEWLINE);
    let text = MARKUP_TAG.replace_all(&text, "");
    let text = LINE_BREAKS.replace_all(&text, ESCAPED_NEWLINE);
    escape_reserved(&text).into_owned()
}

pub fn html_text(text: &str) -> String {
    let text = escape_reserved(text);
    let text = BR_TAG.replace_all(&text, HTML_LINE_BREAK);
    let text = text.replace('\r', "").replace('\n', HTML_LINE_BREAK);
    format!("{HTML_PREFIX}{text}{HTML_SUFFIX}")
}

/// Escape `,` and `;` with a backslash.
pub fn escape_reserved(text: &str) -> Cow<'_, str> {
    if !text.contains([',', ';']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if matches!(c, ',' | ';') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
