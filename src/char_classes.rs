// src/char_classes.rs
//
// Character-class registry: the Unicode range tables every matcher is built
// on. Each table is a list of inclusive (start, end) code point ranges;
// membership queries go through a sorted copy and binary search, and the
// regex patterns in `pattern.rs` are assembled from the same tables via
// `class_fragment`, so there is a single source of truth per class.

use once_cell::sync::Lazy;

/// White_Space code points plus the control-range aliases U+0009..U+000D.
pub const UNICODE_SPACES: &[(char, char)] = &[
    ('\u{0009}', '\u{000D}'), // <control-0009>..<control-000D>
    ('\u{0020}', '\u{0020}'), // SPACE
    ('\u{0085}', '\u{0085}'), // <control-0085>
    ('\u{00A0}', '\u{00A0}'), // NO-BREAK SPACE
    ('\u{1680}', '\u{1680}'), // OGHAM SPACE MARK
    ('\u{180E}', '\u{180E}'), // MONGOLIAN VOWEL SEPARATOR
    ('\u{2000}', '\u{200A}'), // EN QUAD..HAIR SPACE
    ('\u{2028}', '\u{2028}'), // LINE SEPARATOR
    ('\u{2029}', '\u{2029}'), // PARAGRAPH SEPARATOR
    ('\u{202F}', '\u{202F}'), // NARROW NO-BREAK SPACE
    ('\u{205F}', '\u{205F}'), // MEDIUM MATHEMATICAL SPACE
    ('\u{3000}', '\u{3000}'), // IDEOGRAPHIC SPACE
];

pub const CONTROL_CHARS: &[(char, char)] = &[
    ('\u{0000}', '\u{001F}'),
    ('\u{007F}', '\u{007F}'),
];

/// Bidi override marks and noncharacters that never belong to an entity.
pub const INVALID_CHARS: &[(char, char)] = &[
    ('\u{FFFE}', '\u{FFFE}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFFF}', '\u{FFFF}'),
    ('\u{202A}', '\u{202E}'), // LRE..RLO
];

/// ASCII punctuation as used by the URL and cashtag grammars. Backslash is
/// deliberately absent, matching the historical separator set.
pub const PUNCTUATION: &[(char, char)] = &[
    ('\u{0021}', '\u{002F}'), // ! " # $ % & ' ( ) * + , - . /
    ('\u{003A}', '\u{0040}'), // : ; < = > ? @
    ('\u{005B}', '\u{005B}'), // [
    ('\u{005D}', '\u{0060}'), // ] ^ _ `
    ('\u{007B}', '\u{007E}'), // { | } ~
];

pub const LATIN_ACCENT_CHARS: &[(char, char)] = &[
    ('\u{00C0}', '\u{00D6}'), // Latin-1 supplement
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{00FF}'),
    ('\u{0100}', '\u{024F}'), // Latin Extended A and B
    ('\u{0253}', '\u{0254}'), // IPA Extensions
    ('\u{0256}', '\u{0257}'),
    ('\u{0259}', '\u{0259}'),
    ('\u{025B}', '\u{025B}'),
    ('\u{0263}', '\u{0263}'),
    ('\u{0268}', '\u{0268}'),
    ('\u{026F}', '\u{026F}'),
    ('\u{0272}', '\u{0272}'),
    ('\u{0289}', '\u{0289}'),
    ('\u{028B}', '\u{028B}'),
    ('\u{02BB}', '\u{02BB}'), // Hawaiian okina
    ('\u{0300}', '\u{036F}'), // Combining diacritics
    ('\u{1E00}', '\u{1EFF}'), // Latin Extended Additional (mostly Vietnamese)
];

/// Alphabetic code points a hashtag may be built from. ASCII is stored
/// lowercase only; membership folds case and the compiled patterns carry
/// `(?i)`.
pub const HASHTAG_ALPHA_CHARS: &[(char, char)] = &[
    ('a', 'z'),
    // Latin accents, same ranges as LATIN_ACCENT_CHARS
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{00FF}'),
    ('\u{0100}', '\u{024F}'),
    ('\u{0253}', '\u{0254}'),
    ('\u{0256}', '\u{0257}'),
    ('\u{0259}', '\u{0259}'),
    ('\u{025B}', '\u{025B}'),
    ('\u{0263}', '\u{0263}'),
    ('\u{0268}', '\u{0268}'),
    ('\u{026F}', '\u{026F}'),
    ('\u{0272}', '\u{0272}'),
    ('\u{0289}', '\u{0289}'),
    ('\u{028B}', '\u{028B}'),
    ('\u{02BB}', '\u{02BB}'),
    ('\u{0300}', '\u{036F}'),
    ('\u{1E00}', '\u{1EFF}'),
    ('\u{0400}', '\u{04FF}'), // Cyrillic
    ('\u{0500}', '\u{0527}'),
    ('\u{2DE0}', '\u{2DFF}'), // Cyrillic Extended A/B
    ('\u{A640}', '\u{A69F}'),
    ('\u{0591}', '\u{05BF}'), // Hebrew
    ('\u{05C1}', '\u{05C2}'),
    ('\u{05C4}', '\u{05C5}'),
    ('\u{05C7}', '\u{05C7}'),
    ('\u{05D0}', '\u{05EA}'),
    ('\u{05F0}', '\u{05F4}'),
    ('\u{FB1D}', '\u{FB28}'), // Hebrew presentation forms
    ('\u{FB2A}', '\u{FB36}'),
    ('\u{FB38}', '\u{FB3C}'),
    ('\u{FB3E}', '\u{FB3E}'),
    ('\u{FB40}', '\u{FB41}'),
    ('\u{FB43}', '\u{FB44}'),
    ('\u{FB46}', '\u{FB4F}'),
    ('\u{0610}', '\u{061A}'), // Arabic
    ('\u{0620}', '\u{065F}'),
    ('\u{066E}', '\u{06D3}'),
    ('\u{06D5}', '\u{06DC}'),
    ('\u{06DE}', '\u{06E8}'),
    ('\u{06EA}', '\u{06EF}'),
    ('\u{06FA}', '\u{06FC}'),
    ('\u{06FF}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'), // Arabic Supplement and Extended A
    ('\u{08A0}', '\u{08A0}'),
    ('\u{08A2}', '\u{08AC}'),
    ('\u{08E4}', '\u{08FE}'),
    ('\u{FB50}', '\u{FBB1}'), // Arabic presentation forms A
    ('\u{FBD3}', '\u{FD3D}'),
    ('\u{FD50}', '\u{FD8F}'),
    ('\u{FD92}', '\u{FDC7}'),
    ('\u{FDF0}', '\u{FDFB}'),
    ('\u{FE70}', '\u{FE74}'), // Arabic presentation forms B
    ('\u{FE76}', '\u{FEFC}'),
    ('\u{200C}', '\u{200C}'), // Zero-Width Non-Joiner
    ('\u{0E01}', '\u{0E3A}'), // Thai
    ('\u{0E40}', '\u{0E4E}'),
    ('\u{1100}', '\u{11FF}'), // Hangul
    ('\u{3130}', '\u{3185}'),
    ('\u{A960}', '\u{A97F}'),
    ('\u{AC00}', '\u{D7AF}'),
    ('\u{D7B0}', '\u{D7FF}'),
    ('\u{3041}', '\u{309F}'), // Hiragana
    ('\u{30A1}', '\u{30FA}'), // Katakana (full-width)
    ('\u{30FC}', '\u{30FE}'),
    ('\u{FF66}', '\u{FF9F}'), // Katakana (half-width)
    ('\u{FF10}', '\u{FF19}'), // Latin (full-width)
    ('\u{FF21}', '\u{FF3A}'),
    ('\u{FF41}', '\u{FF5A}'),
    ('\u{3400}', '\u{4DBF}'), // CJK Extension A
    ('\u{4E00}', '\u{9FFF}'), // CJK Unified
    ('\u{20000}', '\u{2A6DF}'), // CJK Extension B
    ('\u{2A700}', '\u{2B73F}'), // CJK Extension C
    ('\u{2B740}', '\u{2B81F}'), // CJK Extension D
    ('\u{2F800}', '\u{2FA1F}'), // CJK supplement
    ('\u{3003}', '\u{3003}'), // Han iteration marks
    ('\u{3005}', '\u{3005}'),
    ('\u{303B}', '\u{303B}'),
    ('\u{FFA1}', '\u{FFDC}'), // half-width Hangul
];

/// Digits and joiners hashtags accept in addition to the alphabetic set.
pub const HASHTAG_NUMERIC_CHARS: &[(char, char)] = &[
    ('0', '9'),
    ('_', '_'),
    ('\u{FF10}', '\u{FF19}'), // full-width digits
];

/// Right-to-left scripts, used only for the informational `contains_rtl`
/// flag on extracted entities.
pub const RTL_CHARS: &[(char, char)] = &[
    ('\u{0590}', '\u{05FF}'), // Hebrew
    ('\u{0600}', '\u{06FF}'), // Arabic
    ('\u{0750}', '\u{077F}'), // Arabic Supplement
    ('\u{FE70}', '\u{FEFF}'), // Arabic presentation forms B
];

/// Renders a range table into a character-class fragment, each range as
/// `\u{..}` or `\u{..}-\u{..}`. Emitting explicit escapes sidesteps any
/// in-class metacharacter escaping.
pub fn class_fragment(ranges: &[(char, char)]) -> String {
    let mut out = String::with_capacity(ranges.len() * 16);
    for &(lo, hi) in ranges {
        if lo == hi {
            out.push_str(&format!(r"\u{{{:X}}}", lo as u32));
        } else {
            out.push_str(&format!(r"\u{{{:X}}}-\u{{{:X}}}", lo as u32, hi as u32));
        }
    }
    out
}

/// Like `class_fragment`, but with individual code points removed. Only
/// used on the small punctuation table, so per-code-point expansion is fine.
pub fn class_fragment_without(ranges: &[(char, char)], excluded: &[char]) -> String {
    let mut out = String::new();
    for &(lo, hi) in ranges {
        for cp in (lo as u32)..=(hi as u32) {
            if let Some(c) = char::from_u32(cp) {
                if !excluded.contains(&c) {
                    out.push_str(&format!(r"\u{{{:X}}}", cp));
                }
            }
        }
    }
    out
}

fn sorted_ranges(ranges: &[(char, char)]) -> Vec<(u32, u32)> {
    let mut v: Vec<(u32, u32)> = ranges.iter().map(|&(a, b)| (a as u32, b as u32)).collect();
    v.sort_unstable();
    v.dedup();
    v
}

fn in_ranges(sorted: &[(u32, u32)], c: char) -> bool {
    let cp = c as u32;
    let idx = sorted.partition_point(|&(lo, _)| lo <= cp);
    idx > 0 && cp <= sorted[idx - 1].1
}

static SORTED_SPACES: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(UNICODE_SPACES));
static SORTED_CONTROL: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(CONTROL_CHARS));
static SORTED_INVALID: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(INVALID_CHARS));
static SORTED_PUNCTUATION: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(PUNCTUATION));
static SORTED_LATIN_ACCENT: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(LATIN_ACCENT_CHARS));
static SORTED_HASHTAG_ALPHA: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(HASHTAG_ALPHA_CHARS));
static SORTED_HASHTAG_NUMERIC: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(HASHTAG_NUMERIC_CHARS));
static SORTED_RTL: Lazy<Vec<(u32, u32)>> = Lazy::new(|| sorted_ranges(RTL_CHARS));

pub fn is_unicode_space(c: char) -> bool {
    in_ranges(&SORTED_SPACES, c)
}

pub fn is_control(c: char) -> bool {
    in_ranges(&SORTED_CONTROL, c)
}

pub fn is_invalid(c: char) -> bool {
    in_ranges(&SORTED_INVALID, c)
}

pub fn is_punctuation(c: char) -> bool {
    in_ranges(&SORTED_PUNCTUATION, c)
}

pub fn is_latin_accent(c: char) -> bool {
    in_ranges(&SORTED_LATIN_ACCENT, c)
}

pub fn is_hashtag_alpha(c: char) -> bool {
    in_ranges(&SORTED_HASHTAG_ALPHA, c.to_ascii_lowercase())
}

pub fn is_hashtag_alphanumeric(c: char) -> bool {
    is_hashtag_alpha(c) || in_ranges(&SORTED_HASHTAG_NUMERIC, c)
}

pub fn is_rtl(c: char) -> bool {
    in_ranges(&SORTED_RTL, c)
}

/// True if any code point of `text` belongs to a right-to-left script.
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(is_rtl)
}
