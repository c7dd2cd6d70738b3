//! Character-window text chunking with overlap.

/// Splits text into windows of at most `size` characters, stepping by
/// `size - overlap` so adjacent chunks share `overlap` characters.
///
/// Counts characters, not bytes, so multi-byte text never splits inside a
/// code point. Degenerate arguments are clamped: a zero `size` becomes one,
/// and an `overlap` of `size` or more is reduced so the window always
/// advances.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let size = size.max(1);
    let step = size.saturating_sub(overlap).max(1);

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += step;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(chunk_text("short", 200, 50), vec!["short".to_string()]);
    }

    #[test]
    fn test_chunks_overlap_by_requested_amount() {
        let text = "a".repeat(10);
        let chunks = chunk_text(&text, 6, 2);
        assert_eq!(chunks[0].len(), 6);
        // Step is size - overlap = 4, so chunk 1 starts at char 4.
        assert_eq!(chunks[1], "aaaaaa");
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_all_content_is_covered() {
        let text: String = ('a'..='z').collect();
        let chunks = chunk_text(&text, 10, 3);
        assert!(chunks.first().unwrap().starts_with('a'));
        assert!(chunks.last().unwrap().ends_with('z'));
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundaries() {
        let text = "₹".repeat(8);
        let chunks = chunk_text(&text, 5, 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 5));
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(chunk_text("", 200, 50).is_empty());
    }

    #[test]
    fn test_degenerate_arguments_are_clamped_not_panicking() {
        // Overlap >= size: the step clamps to one, so chunking terminates
        // and still covers the whole text.
        let chunks = chunk_text("abcdef", 3, 5);
        assert!(chunks.iter().all(|c| c.chars().count() <= 3));
        assert!(chunks.first().unwrap().starts_with('a'));
        assert!(chunks.last().unwrap().ends_with('f'));

        // Zero size clamps to one character per chunk.
        let chunks = chunk_text("ab", 0, 0);
        assert_eq!(chunks, vec!["a".to_string(), "b".to_string()]);
    }
}
