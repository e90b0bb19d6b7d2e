// src/extract.rs
//
// Runs the compiled patterns over input text, applies the post-match
// validation each entity kind needs, resolves overlaps, and converts the
// winning byte spans into code-point spans.

use std::cmp::Reverse;

use log::{debug, trace};

use crate::char_classes as cc;
use crate::pattern;
use crate::{Entity, EntityData};

/// A candidate entity with byte offsets into the source text. Spans stay
/// in bytes until overlap resolution is done, then a single pass over the
/// text converts them to code-point offsets.
#[derive(Debug, Clone)]
struct RawEntity {
    start: usize,
    end: usize,
    data: EntityData,
}

fn span_overlaps(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> bool {
    a_start < b_end && b_start < a_end
}

/// A hashtag may not follow a hashtag-alphanumeric character or `&` (the
/// latter keeps HTML entities like `&#x27;` out).
fn hashtag_boundary_ok(text: &str, hash_start: usize) -> bool {
    match text[..hash_start].chars().next_back() {
        None => true,
        Some(ch) => !(cc::is_hashtag_alphanumeric(ch) || ch == '&'),
    }
}

fn hashtag_candidates(text: &str) -> Vec<RawEntity> {
    let mut out = Vec::new();
    for caps in pattern::VALID_HASHTAG.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let hash = caps.name("hash").unwrap();
        let tag = caps.name("tag").unwrap();
        if !hashtag_boundary_ok(text, hash.start()) {
            continue;
        }
        // a hashtag immediately followed by `#` or `://` is not one
        if pattern::INVALID_HASHTAG_MATCH_END.is_match(&text[whole.end()..]) {
            trace!("hashtag candidate at {} rejected by trailing text", hash.start());
            continue;
        }
        out.push(RawEntity {
            start: hash.start(),
            end: tag.end(),
            data: EntityData::Hashtag {
                tag: tag.as_str().to_string(),
            },
        });
    }
    out
}

fn mention_candidates(text: &str) -> Vec<RawEntity> {
    let mut out = Vec::new();
    for caps in pattern::VALID_MENTION_OR_LIST.captures_iter(text) {
        let ats = caps.name("ats").unwrap();
        let user = caps.name("user").unwrap();
        let list = caps.name("list");
        let end = list.map_or(user.end(), |l| l.end());
        if pattern::INVALID_MENTION_MATCH_END.is_match(&text[end..]) {
            trace!("mention candidate at {} rejected by trailing text", ats.start());
            continue;
        }
        out.push(RawEntity {
            start: ats.start(),
            end,
            data: EntityData::Mention {
                username: user.as_str().to_string(),
                list: list.map(|l| l.as_str().trim_start_matches('/').to_string()),
            },
        });
    }
    out
}

fn reply_candidate(text: &str) -> Option<RawEntity> {
    let caps = pattern::VALID_REPLY.captures(text)?;
    let at = caps.name("at").unwrap();
    let user = caps.name("user").unwrap();
    if pattern::INVALID_MENTION_MATCH_END.is_match(&text[user.end()..]) {
        return None;
    }
    Some(RawEntity {
        start: at.start(),
        end: user.end(),
        data: EntityData::Reply {
            username: user.as_str().to_string(),
        },
    })
}

fn url_candidates(text: &str) -> Vec<RawEntity> {
    let mut out = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let caps = match pattern::VALID_URL.captures_at(text, pos) {
            Some(caps) => caps,
            None => break,
        };
        let url = caps.name("url").unwrap();
        let domain = caps.name("domain").unwrap();
        let proto = caps.name("proto");
        // resume after the URL group, not the whole match: the trailing
        // boundary character must stay visible to the next candidate
        pos = url.end();

        if proto.is_none() {
            // protocol-less URLs take the conservative road: clean left
            // boundary, fully ASCII domain, no bare short ccTLD domains
            // apart from the special two, and never bare t.co
            if let Some(before) = caps.name("before") {
                if matches!(before.as_str(), "-" | "_" | "." | "/") {
                    trace!("url candidate at {} rejected by preceding char", url.start());
                    continue;
                }
            }
            if !pattern::VALID_ASCII_DOMAIN.is_match(domain.as_str()) {
                continue;
            }
            if domain.as_str().eq_ignore_ascii_case("t.co") {
                continue;
            }
            if pattern::INVALID_SHORT_DOMAIN.is_match(domain.as_str())
                && !pattern::VALID_SPECIAL_SHORT_DOMAIN.is_match(domain.as_str())
            {
                continue;
            }
        }

        let start = url.start();
        let mut end = url.end();
        let mut data = EntityData::Url {
            protocol_present: proto.is_some(),
            domain: domain.as_str().to_string(),
            port: caps.name("port").map(|m| m.as_str().to_string()),
            path: caps.name("path").map(|m| m.as_str().to_string()),
            query: caps.name("query").map(|m| m.as_str().to_string()),
        };

        // t.co links carry exactly one slug; anything past it is noise
        if let Some(proto) = proto {
            if let Some(m) = pattern::VALID_TCO_URL.find(url.as_str()) {
                let truncated = &url.as_str()[..m.end()];
                end = start + truncated.len();
                let slug_start = proto.as_str().len() + "t.co".len();
                data = EntityData::Url {
                    protocol_present: true,
                    domain: "t.co".to_string(),
                    port: None,
                    path: Some(truncated[slug_start..].to_string()),
                    query: None,
                };
            }
        }

        out.push(RawEntity { start, end, data });
    }
    out
}

fn cashtag_candidates(text: &str) -> Vec<RawEntity> {
    pattern::VALID_CASHTAG
        .captures_iter(text)
        .filter_map(Result::ok)
        .map(|caps| {
            let dollar = caps.name("dollar").unwrap();
            let sym = caps.name("sym").unwrap();
            RawEntity {
                start: dollar.start(),
                end: sym.end(),
                data: EntityData::Cashtag {
                    symbol: sym.as_str().to_string(),
                },
            }
        })
        .collect()
}

/// Maps each byte offset in `targets` (sorted, all on char boundaries) to
/// its code-point offset in one pass over the text.
fn byte_to_char_offsets(text: &str, targets: &[usize]) -> Vec<usize> {
    let mut map = Vec::with_capacity(targets.len());
    let mut ti = 0;
    let mut chars = 0;
    for (byte, _) in text.char_indices() {
        while ti < targets.len() && targets[ti] == byte {
            map.push(chars);
            ti += 1;
        }
        chars += 1;
    }
    while ti < targets.len() {
        map.push(chars);
        ti += 1;
    }
    map
}

/// Sorts candidates, drops later overlapping spans, and materialises the
/// survivors with code-point offsets, sliced text and the RTL flag.
fn finalize(text: &str, mut raws: Vec<RawEntity>) -> Vec<Entity> {
    raws.sort_by_key(|r| (r.start, Reverse(r.end)));
    let mut kept: Vec<RawEntity> = Vec::with_capacity(raws.len());
    for raw in raws {
        if let Some(last) = kept.last() {
            if span_overlaps(last.start, last.end, raw.start, raw.end) {
                continue;
            }
        }
        kept.push(raw);
    }

    let mut targets = Vec::with_capacity(kept.len() * 2);
    for raw in &kept {
        targets.push(raw.start);
        targets.push(raw.end);
    }
    let char_offsets = byte_to_char_offsets(text, &targets);

    kept.into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let slice = &text[raw.start..raw.end];
            Entity {
                start: char_offsets[i * 2],
                end: char_offsets[i * 2 + 1],
                text: slice.to_string(),
                contains_rtl: cc::contains_rtl(slice),
                data: raw.data,
            }
        })
        .collect()
}

pub(crate) fn extract_all(text: &str) -> Vec<Entity> {
    let urls = url_candidates(text);
    let reply = reply_candidate(text);
    let mut others = hashtag_candidates(text);
    others.extend(mention_candidates(text));
    others.extend(cashtag_candidates(text));

    // URLs beat every other kind on overlap
    others.retain(|o| {
        !urls
            .iter()
            .any(|u| span_overlaps(u.start, u.end, o.start, o.end))
    });

    // A reply claims the leading mention only when its span covers it;
    // a wider mention (a list, say) survives and the reply is dropped.
    let mut keep_reply = match &reply {
        Some(r) => !urls
            .iter()
            .any(|u| span_overlaps(u.start, u.end, r.start, r.end)),
        None => false,
    };
    if let Some(r) = &reply {
        others.retain(|o| {
            if !matches!(o.data, EntityData::Mention { .. })
                || !span_overlaps(r.start, r.end, o.start, o.end)
            {
                return true;
            }
            if r.start <= o.start && o.end <= r.end {
                false
            } else {
                keep_reply = false;
                true
            }
        });
    }

    let mut raws = urls;
    raws.extend(others);
    if keep_reply {
        if let Some(r) = reply {
            raws.push(r);
        }
    }

    let entities = finalize(text, raws);
    debug!("extracted {} entities from {} bytes", entities.len(), text.len());
    entities
}

pub(crate) fn extract_hashtags_only(text: &str) -> Vec<Entity> {
    finalize(text, hashtag_candidates(text))
}

pub(crate) fn extract_mentions_only(text: &str) -> Vec<Entity> {
    finalize(text, mention_candidates(text))
}

pub(crate) fn extract_reply_only(text: &str) -> Option<Entity> {
    let raw = reply_candidate(text)?;
    finalize(text, vec![raw]).into_iter().next()
}

pub(crate) fn extract_urls_only(text: &str) -> Vec<Entity> {
    finalize(text, url_candidates(text))
}

pub(crate) fn extract_cashtags_only(text: &str) -> Vec<Entity> {
    finalize(text, cashtag_candidates(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityKind;

    fn kinds(entities: &[Entity]) -> Vec<EntityKind> {
        entities.iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn hashtag_simple() {
        let entities = extract_all("#go is fun");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].start, 0);
        assert_eq!(entities[0].end, 3);
        assert_eq!(entities[0].text, "#go");
        assert_eq!(
            entities[0].data,
            EntityData::Hashtag { tag: "go".to_string() }
        );
    }

    #[test]
    fn no_entities() {
        assert!(extract_all("just setting up my account").is_empty());
        assert!(extract_all("").is_empty());
    }

    #[test]
    fn hashtag_needs_boundary_and_letter() {
        assert!(extract_all("word#tag").is_empty());
        assert!(extract_all("&#x27;").is_empty());
        assert!(extract_all("#123").is_empty());
    }

    #[test]
    fn chained_hashtags_reject_each_other() {
        // "#a" is followed by "#", "#b" is preceded by a letter
        assert!(extract_all("#a#b").is_empty());
        let spaced = extract_all("#a #b");
        assert_eq!(spaced.len(), 2);
        assert_eq!(spaced[0].text, "#a");
        assert_eq!(spaced[1].text, "#b");
    }

    #[test]
    fn url_fragment_suppresses_hashtag() {
        let entities = extract_all("http://example.com#frag");
        assert_eq!(kinds(&entities), vec![EntityKind::Url]);
        assert_eq!(entities[0].text, "http://example.com#frag");
        match &entities[0].data {
            EntityData::Url { domain, path, .. } => {
                assert_eq!(domain, "example.com");
                assert_eq!(path.as_deref(), Some("#frag"));
            }
            other => panic!("expected url, got {other:?}"),
        }
    }

    #[test]
    fn retweet_reply_and_mention() {
        let entities = extract_all("RT @alice: hi @bob");
        assert_eq!(
            kinds(&entities),
            vec![EntityKind::Reply, EntityKind::Mention]
        );
        assert_eq!(
            entities[0].data,
            EntityData::Reply { username: "alice".to_string() }
        );
        assert_eq!(
            entities[1].data,
            EntityData::Mention { username: "bob".to_string(), list: None }
        );
    }

    #[test]
    fn list_mention_beats_reply() {
        let entities = extract_all("@alice/team hi");
        assert_eq!(kinds(&entities), vec![EntityKind::MentionList]);
        assert_eq!(
            entities[0].data,
            EntityData::Mention {
                username: "alice".to_string(),
                list: Some("team".to_string()),
            }
        );
        assert!(extract_reply_only("@alice hi").is_some());
        assert!(extract_reply_only("hi @alice").is_none());
    }

    #[test]
    fn cashtag_simple() {
        let entities = extract_all("$AAPL up 2%");
        assert_eq!(kinds(&entities), vec![EntityKind::Cashtag]);
        assert_eq!(entities[0].text, "$AAPL");
    }

    #[test]
    fn adjacent_cashtags() {
        let entities = extract_all("$A $B");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "$A");
        assert_eq!(entities[1].text, "$B");
    }

    #[test]
    fn bare_tco_rejected_special_cctld_accepted() {
        assert!(extract_all("visit t.co").is_empty());
        let entities = extract_all("visit go.co");
        assert_eq!(kinds(&entities), vec![EntityKind::Url]);
        assert_eq!(entities[0].text, "go.co");
    }

    #[test]
    fn tco_url_truncated_to_slug() {
        let entities = extract_all("go https://t.co/abc?x=1");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "https://t.co/abc");
        match &entities[0].data {
            EntityData::Url { domain, path, query, .. } => {
                assert_eq!(domain, "t.co");
                assert_eq!(path.as_deref(), Some("/abc"));
                assert!(query.is_none());
            }
            other => panic!("expected url, got {other:?}"),
        }
    }

    #[test]
    fn email_address_yields_nothing() {
        assert!(extract_all("user@example.com").is_empty());
    }

    #[test]
    fn protocol_less_url_with_path() {
        let entities = extract_all("check example.com/path");
        assert_eq!(kinds(&entities), vec![EntityKind::Url]);
        assert_eq!(entities[0].text, "example.com/path");
        match &entities[0].data {
            EntityData::Url { protocol_present, .. } => assert!(!protocol_present),
            other => panic!("expected url, got {other:?}"),
        }
    }

    #[test]
    fn multibyte_offsets_are_code_points() {
        let entities = extract_all("日本語 #tag");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].start, 4);
        assert_eq!(entities[0].end, 8);
        assert_eq!(entities[0].text, "#tag");
    }

    #[test]
    fn fullwidth_hash_and_at() {
        let entities = extract_all("＃テスト and ＠user");
        assert_eq!(
            kinds(&entities),
            vec![EntityKind::Hashtag, EntityKind::Mention]
        );
        assert_eq!(entities[0].text, "＃テスト");
        assert_eq!(entities[1].text, "＠user");
    }

    #[test]
    fn rtl_flag_set_for_arabic_hashtag() {
        let entities = extract_all("#مرحبا hi");
        assert_eq!(entities.len(), 1);
        assert!(entities[0].contains_rtl);
        let latin = extract_all("#hello");
        assert!(!latin[0].contains_rtl);
    }

    #[test]
    fn adjacent_urls_both_found() {
        let entities = extract_all("http://a.com http://b.org");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "http://a.com");
        assert_eq!(entities[1].text, "http://b.org");
    }

    #[test]
    fn narrow_extractors_only_see_their_kind() {
        let text = "RT @alice: #tag $AAPL example.com";
        assert_eq!(extract_hashtags_only(text).len(), 1);
        assert_eq!(extract_mentions_only(text).len(), 1);
        assert_eq!(extract_cashtags_only(text).len(), 1);
        assert_eq!(extract_urls_only(text).len(), 1);
    }
}
