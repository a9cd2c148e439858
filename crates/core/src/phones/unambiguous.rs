//! Greedy segmentation for transliterations with no ambiguous runs.

use super::tables;

/// Segment a transliteration that contains no ambiguous marker.
///
/// Each character is its own phone unless the next character is a
/// modifier (`^` or `:`), in which case the two form one phone.
/// Returns `None` if any ambiguous marker occurs; the caller must then
/// use the ambiguous segmenter instead.
pub fn segment(transliteration: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = transliteration.chars().collect();
    if chars.len() <= 1 {
        return Some(chars.iter().map(|c| c.to_string()).collect());
    }

    if tables::has_ambiguous_marker(transliteration) {
        return None;
    }

    let mut phones = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() && tables::is_modifier(chars[i + 1]) {
            phones.push(chars[i..i + 2].iter().collect());
            i += 2;
        } else {
            phones.push(chars[i].to_string());
            i += 1;
        }
    }

    Some(phones)
}
