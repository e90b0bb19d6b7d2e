// src/pattern.rs
//
// Assembles every scan and validation pattern from the character-class
// registry and the TLD vocabulary, and compiles each exactly once. The
// plain `regex` engine covers the linear scan patterns; `fancy_regex` is
// used where a trailing-boundary lookahead is required so the boundary
// character stays available to the next match.

use lazy_static::lazy_static;

use crate::char_classes as cc;
use crate::tld;

/// Negated class of characters a domain label may be built from:
/// everything except punctuation, whitespace, control and formatting
/// marks. `allowed_punct` re-admits individual separators (`_`, `-`) for
/// label-interior positions.
fn url_valid_chars(allowed_punct: &[char]) -> String {
    format!(
        "[^{}[:space:][:cntrl:]{}{}]",
        cc::class_fragment_without(cc::PUNCTUATION, allowed_punct),
        cc::class_fragment(cc::INVALID_CHARS),
        cc::class_fragment(cc::UNICODE_SPACES),
    )
}

fn tld_alternation() -> String {
    format!(
        "(?:{}|{}|{})",
        tld::gtld_alternation(),
        tld::cctld_alternation(),
        tld::PUNYCODE_PATTERN,
    )
}

fn hashtag_pattern() -> String {
    let alpha = format!("[{}]", cc::class_fragment(cc::HASHTAG_ALPHA_CHARS));
    let alnum = format!(
        "[{}{}]",
        cc::class_fragment(cc::HASHTAG_NUMERIC_CHARS),
        cc::class_fragment(cc::HASHTAG_ALPHA_CHARS),
    );
    // at least one alphabetic code point: "#123" is not a hashtag
    format!(r"(?i)(?P<hash>[#＃])(?P<tag>{alnum}*{alpha}{alnum}*)")
}

fn mention_pattern() -> String {
    r"(?i)(?:[^a-zA-Z0-9_!#$%&*@＠]|\A|\A\s*RT:?)(?P<ats>[@＠]+)(?P<user>[a-z0-9_]{1,20})(?P<list>/[a-z][a-z0-9_-]{0,24})?"
        .to_string()
}

fn reply_pattern() -> String {
    let sp = cc::class_fragment(cc::UNICODE_SPACES);
    format!(r"(?i)\A[{sp}]*(?:RT:?[{sp}]*)?(?P<at>[@＠])(?P<user>[a-zA-Z0-9_]{{1,20}})")
}

fn url_pattern() -> String {
    let x = url_valid_chars(&[]);
    let xu = url_valid_chars(&['_', '-']);
    let xd = url_valid_chars(&['-']);
    let subdomain = format!(r"(?:{x}(?:{xu}*{x})?\.)");
    let domain_name = format!(r"(?:{x}(?:{xd}*{x})?\.)");
    let domain = format!("(?:{subdomain}*{domain_name}{})", tld_alternation());
    let latin = cc::class_fragment(cc::LATIN_ACCENT_CHARS);
    let path_char = format!(r"[a-z0-9!\*';:=\+,\.\$/%#\[\]\-_~\|&@{latin}]");
    let parens = format!(r"\({path_char}+\)");
    let path_end = format!(r"(?:[a-z0-9=_#/\-\+{latin}]|{parens})");
    let path_unit =
        format!(r"(?:(?:{path_char}*(?:{parens}{path_char}*)*{path_end})|(?:@{path_char}+/))");
    let query_char = r"[a-z0-9!\?\*'\(\);:&=\+\$/%#\[\]\-_\.,~\|@]";
    let query_end = r"[a-z0-9_&=#/]";
    // The path section may open with `/` or with a bare `#fragment`, so a
    // fragment hanging directly off the host stays inside the URL span.
    format!(
        r"(?i)(?:(?P<before>[^[:alnum:]@＠$#＃\u{{202A}}-\u{{202E}}])|\A)(?P<url>(?P<proto>https?://)?(?P<domain>{domain})(?::(?P<port>[0-9]+))?(?P<path>[/#]{path_unit}*)?(?:\?(?P<query>{query_char}*{query_end}))?)(?:[^[:alnum:]@]|\z)"
    )
}

fn ascii_domain_pattern() -> String {
    let latin = cc::class_fragment(cc::LATIN_ACCENT_CHARS);
    format!(
        r"(?i)\A(?:[[:alnum:]][[:alnum:]_\-{latin}]*\.)+{}\z",
        tld_alternation()
    )
}

fn short_domain_pattern(tld_alt: &str) -> String {
    let x = url_valid_chars(&[]);
    let xd = url_valid_chars(&['-']);
    format!(r"(?i)\A{x}(?:{xd}*{x})?\.{tld_alt}\z")
}

fn cashtag_pattern() -> String {
    let sp = cc::class_fragment(cc::UNICODE_SPACES);
    let punct = cc::class_fragment(cc::PUNCTUATION);
    format!(
        r"(?i)(?:\A|[{sp}])(?P<dollar>\$)(?P<sym>[a-z]{{1,6}}(?:[._][a-z]{{1,2}})?)(?=\z|[{sp}]|[{punct}])"
    )
}

fn mention_end_pattern() -> String {
    let latin = cc::class_fragment(cc::LATIN_ACCENT_CHARS);
    format!(r"(?i)\A(?:[@＠{latin}]|://)")
}

lazy_static! {
    pub static ref VALID_HASHTAG: regex::Regex =
        regex::Regex::new(&hashtag_pattern()).expect("hashtag pattern");
    pub static ref INVALID_HASHTAG_MATCH_END: regex::Regex =
        regex::Regex::new(r"\A(?:[#＃]|://)").expect("hashtag end pattern");
    pub static ref VALID_MENTION_OR_LIST: regex::Regex =
        regex::Regex::new(&mention_pattern()).expect("mention pattern");
    pub static ref INVALID_MENTION_MATCH_END: regex::Regex =
        regex::Regex::new(&mention_end_pattern()).expect("mention end pattern");
    pub static ref VALID_REPLY: regex::Regex =
        regex::Regex::new(&reply_pattern()).expect("reply pattern");
    pub static ref VALID_URL: regex::Regex =
        regex::Regex::new(&url_pattern()).expect("url pattern");
    pub static ref VALID_TCO_URL: regex::Regex =
        regex::Regex::new(r"(?i)\Ahttps?://t\.co/[a-z0-9]+").expect("t.co pattern");
    pub static ref VALID_ASCII_DOMAIN: regex::Regex =
        regex::Regex::new(&ascii_domain_pattern()).expect("ascii domain pattern");
    pub static ref INVALID_SHORT_DOMAIN: regex::Regex =
        regex::Regex::new(&short_domain_pattern(&tld::cctld_alternation()))
            .expect("short domain pattern");
    pub static ref VALID_SPECIAL_SHORT_DOMAIN: regex::Regex =
        regex::Regex::new(&short_domain_pattern(&tld::special_short_cctld_alternation()))
            .expect("special short domain pattern");
    pub static ref VALID_CASHTAG: fancy_regex::Regex =
        fancy_regex::Regex::new(&cashtag_pattern()).expect("cashtag pattern");
}
