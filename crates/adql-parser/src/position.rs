// Line/column lookup for diagnostics.
//
// Counts newlines with memchr rather than walking char by char.

use memchr::{memchr_iter, memrchr};

/// Map a byte offset into `src` to a 1-based (line, column) pair.
///
/// The line is one plus the number of `\n` bytes before the offset; the
/// column is the byte distance from the last newline (or input start).
/// Offsets past the end of the input are clamped to it.
#[must_use]
pub fn line_col(src: &str, offset: usize) -> (u32, u32) {
    let offset = offset.min(src.len());
    let before = &src.as_bytes()[..offset];
    let line = memchr_iter(b'\n', before).count() as u32 + 1;
    let col = match memrchr(b'\n', before) {
        Some(newline) => offset - newline,
        None => offset + 1,
    };
    (line, col as u32)
}
