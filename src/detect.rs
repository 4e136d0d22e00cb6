//! Heuristic language detection from Unicode block frequencies
//!
//! Classifies a text span into the language tag of its dominant script by
//! counting scalar values per recognized Unicode block. This is a cheap
//! frequency heuristic, not a real classifier: short or evenly mixed
//! strings can come out ambiguous, and that is accepted.

/// Tag returned when nothing classifiable is present.
pub const UNKNOWN_TAG: &str = "unknown";

/// Recognized script blocks, in scan order. The tag is the language most
/// commonly written in that block; Devanagari text is reported as `hi`
/// even though Sanskrit, Marathi and Nepali share the block.
const BLOCKS: [(&str, u32, u32); 11] = [
    ("hi", 0x0900, 0x097F),      // Devanagari
    ("bn", 0x0980, 0x09FF),      // Bengali
    ("pa", 0x0A00, 0x0A7F),      // Gurmukhi
    ("gu", 0x0A80, 0x0AFF),      // Gujarati
    ("or", 0x0B00, 0x0B7F),      // Oriya
    ("ta", 0x0B80, 0x0BFF),      // Tamil
    ("te", 0x0C00, 0x0C7F),      // Telugu
    ("kn", 0x0C80, 0x0CFF),      // Kannada
    ("ml", 0x0D00, 0x0D7F),      // Malayalam
    ("brahmi", 0x11000, 0x1107F),
    ("en", 0x0041, 0x007A),      // Latin letters, ranges checked exactly below
];

const LATIN_INDEX: usize = 10;

/// Detect the dominant language tag of `text`.
///
/// Whitespace and ASCII punctuation are ignored. ASCII digits carry no
/// script signal of their own: they are folded into whichever block has
/// the highest raw count, and digit-only input defaults to `en`. The
/// first block whose share of significant characters exceeds 30% wins;
/// if none does, the block with the highest absolute count wins.
///
/// Returns [`UNKNOWN_TAG`] for empty or whitespace/punctuation-only input.
///
/// # Example
///
/// ```
/// use brahmi_translate::detect::detect_language;
///
/// assert_eq!(detect_language("नमस्ते दुनिया"), "hi");
/// assert_eq!(detect_language("hello"), "en");
/// assert_eq!(detect_language("12345"), "en");
/// assert_eq!(detect_language(""), "unknown");
/// ```
pub fn detect_language(text: &str) -> &'static str {
    let mut counts = [0usize; BLOCKS.len()];
    let mut digits = 0usize;
    let mut total = 0usize;

    for c in text.chars() {
        let cp = c as u32;
        if is_ignored(cp) {
            continue;
        }
        total += 1;

        if (0x0030..=0x0039).contains(&cp) {
            digits += 1;
        } else if (0x0041..=0x005A).contains(&cp) || (0x0061..=0x007A).contains(&cp) {
            counts[LATIN_INDEX] += 1;
        } else {
            for (i, &(_, lo, hi)) in BLOCKS.iter().enumerate().take(LATIN_INDEX) {
                if (lo..=hi).contains(&cp) {
                    counts[i] += 1;
                    break;
                }
            }
        }
    }

    if total == 0 {
        return UNKNOWN_TAG;
    }
    if digits == total {
        return "en";
    }

    // Digits inherit the script of their surroundings: fold them into the
    // block with the highest raw count before shares are computed.
    let mut dominant = LATIN_INDEX;
    let mut max_count = counts[LATIN_INDEX];
    for (i, &count) in counts.iter().enumerate() {
        if count > max_count {
            max_count = count;
            dominant = i;
        }
    }
    counts[dominant] += digits;

    let mut best = None;
    let mut best_share = 0.3f64;
    for (i, &count) in counts.iter().enumerate() {
        let share = count as f64 / total as f64;
        if share > best_share {
            best_share = share;
            best = Some(i);
        }
    }
    if let Some(i) = best {
        return BLOCKS[i].0;
    }

    // Plurality fallback when nothing clears the threshold.
    let mut plurality = LATIN_INDEX;
    let mut plurality_count = 0usize;
    for (i, &count) in counts.iter().enumerate() {
        if count > plurality_count {
            plurality_count = count;
            plurality = i;
        }
    }
    BLOCKS[plurality].0
}

/// Whitespace, control characters, and ASCII punctuation carry no script
/// signal and are excluded from the denominator.
fn is_ignored(cp: u32) -> bool {
    cp <= 0x0020
        || (0x0021..=0x002F).contains(&cp)
        || (0x003A..=0x0040).contains(&cp)
        || (0x005B..=0x0060).contains(&cp)
        || (0x007B..=0x007F).contains(&cp)
}

/// Human-readable name for a detector tag, used by diagnostics output.
/// Sanskrit, Marathi and Nepali never come out of the detector (they share
/// the Devanagari block with Hindi) but callers may pass them explicitly.
pub fn language_name(tag: &str) -> &'static str {
    match tag {
        "en" => "English",
        "hi" => "Hindi",
        "bn" => "Bengali",
        "pa" => "Punjabi",
        "gu" => "Gujarati",
        "or" => "Odia",
        "ta" => "Tamil",
        "te" => "Telugu",
        "kn" => "Kannada",
        "ml" => "Malayalam",
        "sa" => "Sanskrit",
        "mr" => "Marathi",
        "ne" => "Nepali",
        "brahmi" => "Brahmi",
        _ => "Unknown",
    }
}
