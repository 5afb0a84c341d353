use itertools::Itertools;

use crate::{FOLD_BREAK, FOLD_WIDTH};

/// Splits a logical line into segments of at most 70 characters joined by CRLF and a space.
///
/// Segments are counted in `char`s, never bytes, so multi-byte text is never cut apart.
/// The result carries no trailing line break.
pub fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * FOLD_BREAK.len());
    for (i, chunk) in line.chars().chunks(FOLD_WIDTH).into_iter().enumerate() {
        if i > 0 {
            folded.push_str(FOLD_BREAK);
        }
        folded.extend(chunk);
    }
    if folded.len() > line.len() {
        tracing::trace!(chars = line.chars().count(), "folded long content line");
    }
    folded
}
