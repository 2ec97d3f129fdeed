//! Sliding-window text chunker
//!
//! The inference backend has a bounded input length, so long journals
//! are scored as overlapping fixed-size windows. Windows are measured
//! in characters, not bytes, so multi-byte text never splits a
//! codepoint.

/// Split `text` into overlapping windows of `window` characters,
/// advancing `stride` characters each step.
///
/// Chunk *i* covers characters `[i*stride, i*stride + window)`. The
/// sequence ends with the first chunk whose end reaches the text
/// length, so text no longer than `window` yields exactly one chunk.
/// Whitespace-only windows are dropped; they consume no backend call.
/// Empty or whitespace-only text yields no chunks at all.
pub fn chunk_text(text: &str, window: usize, stride: usize) -> Vec<&str> {
    debug_assert!(window > 0, "window must be positive");
    debug_assert!(stride > 0 && stride <= window, "stride must be in 1..=window");

    // Byte offset of every char boundary, plus the end of the text
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < char_len {
        let end = (start + window).min(char_len);
        let chunk = &text[boundaries[start]..boundaries[end]];
        if !chunk.trim().is_empty() {
            chunks.push(chunk);
        }
        if start + window >= char_len {
            break;
        }
        start += stride;
    }
    chunks
}
