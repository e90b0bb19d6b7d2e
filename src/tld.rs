// src/tld.rs
//
// Domain vocabulary: the static TLD word lists the URL matcher recognizes,
// plus the punycode label shape and the short-ccTLD exception list. The
// lists are a versioned snapshot; freshness is an external concern.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Generic top-level domains, including the internationalized ones.
pub static GTLDS: &[&str] = &[
    "academy", "accountants", "active", "actor", "aero", "agency", "airforce", "archi", "army",
    "arpa", "asia", "associates", "attorney", "audio", "autos", "axa", "bar", "bargains", "bayern",
    "beer", "berlin", "best", "bid", "bike", "bio", "biz", "black", "blackfriday", "blue", "bmw",
    "boutique", "brussels", "build", "builders", "buzz", "bzh", "cab", "camera", "camp",
    "cancerresearch", "capetown", "capital", "cards", "care", "career", "careers", "cash", "cat",
    "catering", "center", "ceo", "cheap", "christmas", "church", "citic", "claims", "cleaning",
    "clinic", "clothing", "club", "codes", "coffee", "college", "cologne", "com", "community",
    "company", "computer", "condos", "construction", "consulting", "contractors", "cooking",
    "cool", "coop", "country", "credit", "creditcard", "cruises", "cuisinella", "dance", "dating",
    "degree", "democrat", "dental", "dentist", "desi", "diamonds", "digital", "direct",
    "directory", "discount", "dnp", "domains", "durban", "edu", "education", "email", "engineer",
    "engineering", "enterprises", "equipment", "estate", "eus", "events", "exchange", "expert",
    "exposed", "fail", "farm", "feedback", "finance", "financial", "fish", "fishing", "fitness",
    "flights", "florist", "foo", "foundation", "frogans", "fund", "furniture", "futbol", "gal",
    "gallery", "gift", "gives", "glass", "global", "globo", "gmo", "gop", "gov", "graphics",
    "gratis", "green", "gripe", "guide", "guitars", "guru", "hamburg", "haus", "hiphop", "hiv",
    "holdings", "holiday", "homes", "horse", "host", "house", "immobilien", "industries", "info",
    "ink", "institute", "insure", "int", "international", "investments", "jetzt", "jobs",
    "joburg", "juegos", "kaufen", "kim", "kitchen", "kiwi", "koeln", "kred", "land", "lawyer",
    "lease", "lgbt", "life", "lighting", "limited", "limo", "link", "loans", "london", "lotto",
    "luxe", "luxury", "maison", "management", "mango", "market", "marketing", "media", "meet",
    "menu", "miami", "mil", "mini", "mobi", "moda", "moe", "monash", "mortgage", "moscow",
    "motorcycles", "museum", "nagoya", "name", "navy", "net", "neustar", "nhk", "ninja", "nyc",
    "okinawa", "onl", "org", "organic", "ovh", "paris", "partners", "parts", "photo",
    "photography", "photos", "physio", "pics", "pictures", "pink", "place", "plumbing", "post",
    "press", "pro", "productions", "properties", "pub", "qpon", "quebec", "recipes", "red",
    "rehab", "reise", "reisen", "ren", "rentals", "repair", "report", "republican", "rest",
    "reviews", "rich", "rio", "rocks", "rodeo", "ruhr", "ryukyu", "saarland", "schmidt",
    "schule", "scot", "services", "sexy", "shiksha", "shoes", "singles", "social", "software",
    "sohu", "solar", "solutions", "soy", "space", "spiegel", "supplies", "supply", "support",
    "surf", "surgery", "suzuki", "systems", "tattoo", "tax", "technology", "tel", "tienda",
    "tips", "tirol", "today", "tokyo", "tools", "town", "toys", "trade", "training", "travel",
    "university", "uno", "vacations", "vegas", "ventures", "versicherung", "vet", "viajes",
    "villas", "vision", "vlaanderen", "vodka", "vote", "voting", "voto", "voyage", "wang",
    "watch", "webcam", "website", "wed", "wien", "wiki", "works", "wtc", "wtf", "xxx", "xyz",
    "yachts", "yokohama", "zone", "дети", "москва", "онлайн", "орг", "сайт", "بازار", "شبكة",
    "موقع", "संगठन", "みんな", "世界", "中信", "中文网", "公司", "公益", "商城", "商标", "在线",
    "我爱你", "政务", "机构", "游戏", "移动", "组织机构", "网址", "网络", "集团", "삼성",
];

/// Country-code top-level domains, ASCII and internationalized.
pub static CCTLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au",
    "aw", "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bl", "bm", "bn",
    "bo", "bq", "br", "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch",
    "ci", "ck", "cl", "cm", "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj",
    "dk", "dm", "do", "dz", "ec", "ee", "eg", "eh", "er", "es", "et", "eu", "fi", "fj", "fk",
    "fm", "fo", "fr", "ga", "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp",
    "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie",
    "il", "im", "in", "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh",
    "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls",
    "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mf", "mg", "mh", "mk", "ml", "mm", "mn",
    "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne",
    "nf", "ng", "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph",
    "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw",
    "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr",
    "ss", "st", "su", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl",
    "tm", "tn", "to", "tp", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk", "um", "us", "uy",
    "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw",
    "мкд", "мон", "рф", "срб", "укр", "қаз", "الاردن", "الجزائر", "السعودية", "المغرب",
    "امارات", "ایران", "بھارت", "تونس", "سودان", "سورية", "عمان", "فلسطين", "قطر", "مصر",
    "مليسيا", "پاکستان", "भारत", "বাংলা", "ভারত", "ਭਾਰਤ", "ભારત", "இந்தியா", "இலங்கை",
    "சிங்கப்பூர்", "భారత్", "ලංකා", "ไทย", "გე", "中国", "中國", "台湾", "台灣", "新加坡",
    "香港", "한국",
];

/// Two-letter ccTLDs allowed to form a bare `label.tld` domain without a
/// protocol. Everything else that short is presumed prose.
pub static SPECIAL_SHORT_CCTLDS: &[&str] = &["co", "tv"];

/// Shape of an ASCII-compatible internationalized label.
pub const PUNYCODE_PATTERN: &str = "(?:xn--[0-9a-z]+)";

static GTLD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| GTLDS.iter().copied().collect());
static CCTLD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| CCTLDS.iter().copied().collect());

pub fn is_gtld(label: &str) -> bool {
    GTLD_SET.contains(label.to_lowercase().as_str())
}

pub fn is_cctld(label: &str) -> bool {
    CCTLD_SET.contains(label.to_lowercase().as_str())
}

pub fn is_special_short_cctld(label: &str) -> bool {
    SPECIAL_SHORT_CCTLDS
        .iter()
        .any(|s| label.eq_ignore_ascii_case(s))
}

/// True for labels of the form `xn--` + one or more ASCII alphanumerics.
pub fn is_punycode_label(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    match lower.strip_prefix("xn--") {
        Some(rest) => {
            !rest.is_empty()
                && rest
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        }
        None => false,
    }
}

/// Alternation of every generic TLD, for embedding in the URL pattern.
pub fn gtld_alternation() -> String {
    format!("(?:{})", GTLDS.join("|"))
}

/// Alternation of every country-code TLD.
pub fn cctld_alternation() -> String {
    format!("(?:{})", CCTLDS.join("|"))
}

/// Alternation of the short ccTLDs exempt from the bare-domain rejection.
pub fn special_short_cctld_alternation() -> String {
    format!("(?:{})", SPECIAL_SHORT_CCTLDS.join("|"))
}
