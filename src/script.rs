//! Devanagari ↔ Brahmi script conversion
//!
//! Pure codepoint-level conversion between the Devanagari block
//! (U+0900–U+097F) and the Brahmi block (U+11000–U+1107F). The mapping
//! covers candrabindu, anusvara, the independent vowels, the consonants,
//! the dependent vowel signs, virama, danda/double danda, and the decimal
//! digits; every scalar outside that set (whitespace, punctuation, Latin,
//! other scripts) passes through unchanged, so conversion is total and
//! never fails.
//!
//! Brahmi lies outside the Basic Multilingual Plane. Iteration here is by
//! `char`, i.e. by Unicode scalar value, so astral codepoints need no
//! surrogate handling.
//!
//! The one lossy case: Devanagari nukta (U+093C) has no Brahmi
//! counterpart and is dropped by [`to_brahmi`]. Everything else in the
//! mapped set round-trips exactly.

/// Devanagari nukta, dropped on conversion to Brahmi.
const NUKTA: char = '\u{093C}';

/// Convert Devanagari text to Brahmi.
///
/// Unmapped characters are copied through unchanged; nukta is dropped.
///
/// # Example
///
/// ```
/// use brahmi_translate::script::to_brahmi;
///
/// assert_eq!(to_brahmi("नमस्कार"), "𑀦𑀫𑀲𑁆𑀓𑀸𑀭");
/// assert_eq!(to_brahmi("hello"), "hello");
/// ```
pub fn to_brahmi(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if c == NUKTA {
            continue;
        }
        result.push(devanagari_to_brahmi_char(c).unwrap_or(c));
    }
    result
}

/// Convert Brahmi text to Devanagari.
///
/// Unmapped characters are copied through unchanged.
///
/// # Example
///
/// ```
/// use brahmi_translate::script::to_devanagari;
///
/// assert_eq!(to_devanagari("𑀦𑀫𑀲𑁆𑀓𑀸𑀭"), "नमस्कार");
/// ```
pub fn to_devanagari(text: &str) -> String {
    text.chars()
        .map(|c| brahmi_to_devanagari_char(c).unwrap_or(c))
        .collect()
}

/// Forward table: Devanagari scalar → Brahmi scalar.
fn devanagari_to_brahmi_char(c: char) -> Option<char> {
    let mapped = match c {
        '\u{0901}' => '\u{11000}', // candrabindu
        '\u{0902}' => '\u{11001}', // anusvara
        '\u{0905}' => '\u{11005}', // A
        '\u{0906}' => '\u{11006}', // AA
        '\u{0907}' => '\u{11007}', // I
        '\u{0908}' => '\u{11008}', // II
        '\u{0909}' => '\u{11009}', // U
        '\u{090A}' => '\u{1100A}', // UU
        '\u{090B}' => '\u{1100B}', // vocalic R
        '\u{090C}' => '\u{1100D}', // vocalic L
        '\u{090F}' => '\u{1100F}', // E
        '\u{0910}' => '\u{11010}', // AI
        '\u{0913}' => '\u{11011}', // O
        '\u{0914}' => '\u{11012}', // AU
        '\u{0915}' => '\u{11013}', // KA
        '\u{0916}' => '\u{11014}', // KHA
        '\u{0917}' => '\u{11015}', // GA
        '\u{0918}' => '\u{11016}', // GHA
        '\u{0919}' => '\u{11017}', // NGA
        '\u{091A}' => '\u{11018}', // CA
        '\u{091B}' => '\u{11019}', // CHA
        '\u{091C}' => '\u{1101A}', // JA
        '\u{091D}' => '\u{1101B}', // JHA
        '\u{091E}' => '\u{1101C}', // NYA
        '\u{091F}' => '\u{1101D}', // TTA
        '\u{0920}' => '\u{1101E}', // TTHA
        '\u{0921}' => '\u{1101F}', // DDA
        '\u{0922}' => '\u{11020}', // DDHA
        '\u{0923}' => '\u{11021}', // NNA
        '\u{0924}' => '\u{11022}', // TA
        '\u{0925}' => '\u{11023}', // THA
        '\u{0926}' => '\u{11024}', // DA
        '\u{0927}' => '\u{11025}', // DHA
        '\u{0928}' => '\u{11026}', // NA
        '\u{092A}' => '\u{11027}', // PA
        '\u{092B}' => '\u{11028}', // PHA
        '\u{092C}' => '\u{11029}', // BA
        '\u{092D}' => '\u{1102A}', // BHA
        '\u{092E}' => '\u{1102B}', // MA
        '\u{092F}' => '\u{1102C}', // YA
        '\u{0930}' => '\u{1102D}', // RA
        '\u{0932}' => '\u{1102E}', // LA
        '\u{0933}' => '\u{11034}', // LLA
        '\u{0935}' => '\u{1102F}', // VA
        '\u{0936}' => '\u{11030}', // SHA
        '\u{0937}' => '\u{11031}', // SSA
        '\u{0938}' => '\u{11032}', // SA
        '\u{0939}' => '\u{11033}', // HA
        '\u{093E}' => '\u{11038}', // AA sign
        '\u{093F}' => '\u{1103A}', // I sign
        '\u{0940}' => '\u{1103B}', // II sign
        '\u{0941}' => '\u{1103C}', // U sign
        '\u{0942}' => '\u{1103D}', // UU sign
        '\u{0943}' => '\u{1103E}', // vocalic R sign
        '\u{0944}' => '\u{1103F}', // vocalic RR sign
        '\u{0947}' => '\u{11042}', // E sign
        '\u{0948}' => '\u{11043}', // AI sign
        '\u{094B}' => '\u{11044}', // O sign
        '\u{094C}' => '\u{11045}', // AU sign
        '\u{094D}' => '\u{11046}', // virama
        '\u{0962}' => '\u{11040}', // vocalic L sign
        '\u{0963}' => '\u{11041}', // vocalic LL sign
        '\u{0964}' => '\u{11047}', // danda
        '\u{0965}' => '\u{11048}', // double danda
        '\u{0966}' => '\u{11066}', // 0
        '\u{0967}' => '\u{11067}', // 1
        '\u{0968}' => '\u{11068}', // 2
        '\u{0969}' => '\u{11069}', // 3
        '\u{096A}' => '\u{1106A}', // 4
        '\u{096B}' => '\u{1106B}', // 5
        '\u{096C}' => '\u{1106C}', // 6
        '\u{096D}' => '\u{1106D}', // 7
        '\u{096E}' => '\u{1106E}', // 8
        '\u{096F}' => '\u{1106F}', // 9
        _ => return None,
    };
    Some(mapped)
}

/// Reverse table: Brahmi scalar → Devanagari scalar.
fn brahmi_to_devanagari_char(c: char) -> Option<char> {
    let mapped = match c {
        '\u{11000}' => '\u{0901}', // candrabindu
        '\u{11001}' => '\u{0902}', // anusvara
        '\u{11005}' => '\u{0905}', // A
        '\u{11006}' => '\u{0906}', // AA
        '\u{11007}' => '\u{0907}', // I
        '\u{11008}' => '\u{0908}', // II
        '\u{11009}' => '\u{0909}', // U
        '\u{1100A}' => '\u{090A}', // UU
        '\u{1100B}' => '\u{090B}', // vocalic R
        '\u{1100D}' => '\u{090C}', // vocalic L
        '\u{1100F}' => '\u{090F}', // E
        '\u{11010}' => '\u{0910}', // AI
        '\u{11011}' => '\u{0913}', // O
        '\u{11012}' => '\u{0914}', // AU
        '\u{11013}' => '\u{0915}', // KA
        '\u{11014}' => '\u{0916}', // KHA
        '\u{11015}' => '\u{0917}', // GA
        '\u{11016}' => '\u{0918}', // GHA
        '\u{11017}' => '\u{0919}', // NGA
        '\u{11018}' => '\u{091A}', // CA
        '\u{11019}' => '\u{091B}', // CHA
        '\u{1101A}' => '\u{091C}', // JA
        '\u{1101B}' => '\u{091D}', // JHA
        '\u{1101C}' => '\u{091E}', // NYA
        '\u{1101D}' => '\u{091F}', // TTA
        '\u{1101E}' => '\u{0920}', // TTHA
        '\u{1101F}' => '\u{0921}', // DDA
        '\u{11020}' => '\u{0922}', // DDHA
        '\u{11021}' => '\u{0923}', // NNA
        '\u{11022}' => '\u{0924}', // TA
        '\u{11023}' => '\u{0925}', // THA
        '\u{11024}' => '\u{0926}', // DA
        '\u{11025}' => '\u{0927}', // DHA
        '\u{11026}' => '\u{0928}', // NA
        '\u{11027}' => '\u{092A}', // PA
        '\u{11028}' => '\u{092B}', // PHA
        '\u{11029}' => '\u{092C}', // BA
        '\u{1102A}' => '\u{092D}', // BHA
        '\u{1102B}' => '\u{092E}', // MA
        '\u{1102C}' => '\u{092F}', // YA
        '\u{1102D}' => '\u{0930}', // RA
        '\u{1102E}' => '\u{0932}', // LA
        '\u{11034}' => '\u{0933}', // LLA
        '\u{1102F}' => '\u{0935}', // VA
        '\u{11030}' => '\u{0936}', // SHA
        '\u{11031}' => '\u{0937}', // SSA
        '\u{11032}' => '\u{0938}', // SA
        '\u{11033}' => '\u{0939}', // HA
        '\u{11038}' => '\u{093E}', // AA sign
        '\u{1103A}' => '\u{093F}', // I sign
        '\u{1103B}' => '\u{0940}', // II sign
        '\u{1103C}' => '\u{0941}', // U sign
        '\u{1103D}' => '\u{0942}', // UU sign
        '\u{1103E}' => '\u{0943}', // vocalic R sign
        '\u{1103F}' => '\u{0944}', // vocalic RR sign
        '\u{11040}' => '\u{0962}', // vocalic L sign
        '\u{11041}' => '\u{0963}', // vocalic LL sign
        '\u{11042}' => '\u{0947}', // E sign
        '\u{11043}' => '\u{0948}', // AI sign
        '\u{11044}' => '\u{094B}', // O sign
        '\u{11045}' => '\u{094C}', // AU sign
        '\u{11046}' => '\u{094D}', // virama
        '\u{11047}' => '\u{0964}', // danda
        '\u{11048}' => '\u{0965}', // double danda
        '\u{11066}' => '\u{0966}', // 0
        '\u{11067}' => '\u{0967}', // 1
        '\u{11068}' => '\u{0968}', // 2
        '\u{11069}' => '\u{0969}', // 3
        '\u{1106A}' => '\u{096A}', // 4
        '\u{1106B}' => '\u{096B}', // 5
        '\u{1106C}' => '\u{096C}', // 6
        '\u{1106D}' => '\u{096D}', // 7
        '\u{1106E}' => '\u{096E}', // 8
        '\u{1106F}' => '\u{096F}', // 9
        _ => return None,
    };
    Some(mapped)
}
