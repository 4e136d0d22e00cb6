//! Text segmentation
//!
//! Two unrelated chunking concepts share this module:
//!
//! 1. [`segment_by_language`] splits mixed-script text into maximal runs of
//!    one detected language, so a caller can route each run through the
//!    translation pipeline separately. Concatenating the chunk texts in
//!    order reproduces the input byte-for-byte.
//! 2. [`segment_by_size`] splits text into fragments that fit an external
//!    API's request-size ceiling, preferring sentence boundaries and
//!    falling back to word boundaries. It knows nothing about language.

use crate::detect::{UNKNOWN_TAG, detect_language};
use regex::Regex;

/// A maximal contiguous run of one detected language.
///
/// `start` and `end` are byte offsets into the original input; chunks tile
/// the input exactly, so `text == &input[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChunk {
    pub text: String,
    pub language: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Split `text` into language-homogeneous chunks.
///
/// The text is tokenized into alternating word and whitespace runs, and
/// each word is classified with [`detect_language`]. Whitespace and
/// unclassifiable tokens attach to the currently open chunk and never draw
/// a boundary on their own; a boundary only appears between two words of
/// differing language. Leading whitespace attaches to the first chunk.
///
/// Returns an empty vector for empty input. Input containing no
/// classifiable word at all (whitespace or punctuation only) yields a
/// single chunk tagged [`UNKNOWN_TAG`].
///
/// # Example
///
/// ```
/// use brahmi_translate::chunk::segment_by_language;
///
/// let chunks = segment_by_language("hello नमस्ते");
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].language, "en");
/// assert_eq!(chunks[1].language, "hi");
/// ```
pub fn segment_by_language(text: &str) -> Vec<LanguageChunk> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_language: Option<&'static str> = None;
    let mut chunk_start = 0usize;

    for (token_start, token) in whitespace_tokens(text) {
        let is_whitespace = token.chars().all(char::is_whitespace);
        let language = if is_whitespace {
            UNKNOWN_TAG
        } else {
            detect_language(token)
        };

        // Whitespace and unclassifiable tokens never open or close a chunk.
        if is_whitespace || language == UNKNOWN_TAG {
            current.push_str(token);
            continue;
        }

        match current_language {
            Some(open) if open != language => {
                chunks.push(LanguageChunk {
                    text: std::mem::take(&mut current),
                    language: open,
                    start: chunk_start,
                    end: token_start,
                });
                chunk_start = token_start;
                current.push_str(token);
                current_language = Some(language);
            }
            _ => {
                current.push_str(token);
                current_language = Some(language);
            }
        }
    }

    if !current.is_empty() {
        chunks.push(LanguageChunk {
            text: current,
            language: current_language.unwrap_or(UNKNOWN_TAG),
            start: chunk_start,
            end: text.len(),
        });
    }

    chunks
}

/// Split `text` into fragments of at most `max_size` scalar values.
///
/// The primary pass splits on sentence terminators (`.`, `!`, `?`, danda,
/// double danda, with any trailing whitespace kept on the sentence) and
/// greedily packs sentences into chunks. Any chunk still over the limit is
/// re-split on whitespace and word-packed the same way. Emitted chunks are
/// trimmed and never empty.
///
/// Every chunk is within `max_size` unless it is a single indivisible word
/// that alone exceeds the limit, in which case it is emitted whole rather
/// than split mid-word.
///
/// # Example
///
/// ```
/// use brahmi_translate::chunk::segment_by_size;
///
/// let chunks = segment_by_size("One. Two. Three.", 6);
/// assert_eq!(chunks, vec!["One.", "Two.", "Three."]);
/// ```
pub fn segment_by_size(text: &str, max_size: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= max_size {
        return vec![text.to_string()];
    }

    let terminator = Regex::new(r"[.!?।॥]\s*").unwrap();
    let mut sentences: Vec<&str> = Vec::new();
    let mut last = 0usize;
    for m in terminator.find_iter(text) {
        sentences.push(&text[last..m.end()]);
        last = m.end();
    }
    if last < text.len() {
        sentences.push(&text[last..]);
    }

    let mut packed: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for sentence in sentences {
        let sentence_len = sentence.chars().count();
        if current_len + sentence_len > max_size && current_len > 0 {
            push_trimmed(&mut packed, &current);
            current.clear();
            current_len = 0;
        }
        current.push_str(sentence);
        current_len += sentence_len;
    }
    push_trimmed(&mut packed, &current);

    // Second pass: a single overlong sentence gets re-split on words.
    let mut chunks = Vec::new();
    for chunk in packed {
        if chunk.chars().count() <= max_size {
            chunks.push(chunk);
            continue;
        }
        let mut current = String::new();
        let mut current_len = 0usize;
        for (_, token) in whitespace_tokens(&chunk) {
            let token_len = token.chars().count();
            if current_len + token_len > max_size && current_len > 0 {
                push_trimmed(&mut chunks, &current);
                current.clear();
                current_len = 0;
            }
            current.push_str(token);
            current_len += token_len;
        }
        push_trimmed(&mut chunks, &current);
    }

    chunks
}

/// Tokenize into alternating whitespace and non-whitespace runs, keeping
/// the byte offset where each run begins.
fn whitespace_tokens(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_whitespace: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let ws = c.is_whitespace();
        match in_whitespace {
            Some(prev) if prev != ws => {
                tokens.push((start, &text[start..i]));
                start = i;
                in_whitespace = Some(ws);
            }
            None => in_whitespace = Some(ws),
            _ => {}
        }
    }
    if start < text.len() {
        tokens.push((start, &text[start..]));
    }
    tokens
}

fn push_trimmed(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(chunks: &[LanguageChunk]) -> String {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    // ========== Language Segmentation Tests ==========

    #[test]
    fn test_single_language_single_chunk() {
        let chunks = segment_by_language("hello wonderful world");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].language, "en");
        assert_eq!(chunks[0].text, "hello wonderful world");
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, "hello wonderful world".len());
    }

    #[test]
    fn test_two_languages_two_chunks() {
        let input = "hello नमस्ते";
        let chunks = segment_by_language(input);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].language, "en");
        assert_eq!(chunks[0].text, "hello ");
        assert_eq!(chunks[1].language, "hi");
        assert_eq!(chunks[1].text, "नमस्ते");
    }

    #[test]
    fn test_whitespace_does_not_draw_boundary() {
        // The space between the two English words stays inside one chunk.
        let chunks = segment_by_language("one  two");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "one  two");
    }

    #[test]
    fn test_punctuation_token_attaches_to_open_chunk() {
        // "..." detects as unknown and must not split the English run.
        let chunks = segment_by_language("well ... yes");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].language, "en");
    }

    #[test]
    fn test_lossless_concatenation() {
        let inputs = [
            "hello नमस्ते world",
            "  leading whitespace first",
            "trailing whitespace  ",
            "नमस्ते 𑀦𑀫𑀲𑁆𑀓𑀸𑀭 hello ಕನ್ನಡ",
            "tabs\tand\nnewlines नहीं",
            "!!! ??? ...",
            "a",
        ];
        for input in inputs {
            let chunks = segment_by_language(input);
            assert_eq!(reassemble(&chunks), input, "input {:?} was not lossless", input);
        }
    }

    #[test]
    fn test_offsets_tile_the_input() {
        let input = "hello नमस्ते 𑀦𑀫 back";
        let chunks = segment_by_language(input);
        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, expected_start);
            assert_eq!(&input[chunk.start..chunk.end], chunk.text);
            expected_start = chunk.end;
        }
        assert_eq!(expected_start, input.len());
    }

    #[test]
    fn test_empty_input_no_chunks() {
        assert!(segment_by_language("").is_empty());
    }

    #[test]
    fn test_unclassifiable_input_single_unknown_chunk() {
        let chunks = segment_by_language("   !!! ...  ");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].language, UNKNOWN_TAG);
        assert_eq!(chunks[0].text, "   !!! ...  ");
    }

    #[test]
    fn test_leading_whitespace_attaches_to_first_chunk() {
        let chunks = segment_by_language("  hello नमस्ते");
        assert_eq!(chunks[0].text, "  hello ");
        assert_eq!(chunks[0].start, 0);
    }

    #[test]
    fn test_three_scripts() {
        let chunks = segment_by_language("hello नमस्ते ಕನ್ನಡ");
        let languages: Vec<_> = chunks.iter().map(|c| c.language).collect();
        assert_eq!(languages, vec!["en", "hi", "kn"]);
    }

    // ========== Size Segmentation Tests ==========

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(segment_by_size("short text", 100), vec!["short text"]);
    }

    #[test]
    fn test_empty_text_no_chunks() {
        assert!(segment_by_size("", 100).is_empty());
    }

    #[test]
    fn test_splits_on_sentence_boundaries() {
        let chunks = segment_by_size("One. Two. Three.", 6);
        assert_eq!(chunks, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_packs_sentences_greedily() {
        // Two short sentences fit together, the third starts a new chunk.
        let chunks = segment_by_size("Aa. Bb. Cccccc.", 9);
        assert_eq!(chunks, vec!["Aa. Bb.", "Cccccc."]);
    }

    #[test]
    fn test_hindi_danda_is_a_sentence_boundary() {
        let chunks = segment_by_size("नमस्ते। धन्यवाद।", 8);
        assert_eq!(chunks, vec!["नमस्ते।", "धन्यवाद।"]);
    }

    #[test]
    fn test_long_sentence_falls_back_to_words() {
        let chunks = segment_by_size("one two three four five six", 10);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 10, "chunk {:?} over limit", chunk);
        }
        assert_eq!(chunks.join(" "), "one two three four five six");
    }

    #[test]
    fn test_size_bound_holds() {
        let text = "कखग घङच छजझ. Hello world again! एक दो तीन चार पांच॥ done";
        for max in [5usize, 8, 12, 20, 40] {
            for chunk in segment_by_size(text, max) {
                assert!(
                    chunk.chars().count() <= max
                        || !chunk.contains(char::is_whitespace),
                    "chunk {:?} breaks the {} bound",
                    chunk,
                    max
                );
            }
        }
    }

    #[test]
    fn test_indivisible_word_emitted_whole() {
        let chunks = segment_by_size("supercalifragilistic", 5);
        assert_eq!(chunks, vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_indivisible_word_among_short_words() {
        let chunks = segment_by_size("a extraordinarily b", 6);
        assert!(chunks.contains(&"extraordinarily".to_string()));
        for chunk in &chunks {
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_limit_counts_scalars_not_bytes() {
        // Five Devanagari scalars are 15 bytes; a scalar budget of 5 keeps
        // them in one chunk.
        let chunks = segment_by_size("कखगघङ and more text here now", 5);
        assert_eq!(chunks[0], "कखगघङ");
    }

    #[test]
    fn test_no_empty_chunks() {
        let chunks = segment_by_size("One.   Two.   Three.   ", 6);
        for chunk in &chunks {
            assert!(!chunk.trim().is_empty());
        }
    }
}
