use entitext::{
    extract_cashtags, extract_entities, extract_entities_batch, extract_hashtags,
    extract_mentions, extract_reply, extract_urls, Entity, EntityData, EntityKind,
};

/// Every result must be sorted, non-overlapping, inside the text, and
/// its `text` field must equal the code-point slice its span names.
fn check_invariants(text: &str, entities: &[Entity]) {
    let char_count = text.chars().count();
    let mut prev_end = 0;
    for entity in entities {
        assert!(
            entity.start < entity.end,
            "empty or inverted span in {text:?}: {entity:?}"
        );
        assert!(
            entity.end <= char_count,
            "span past end of {text:?}: {entity:?}"
        );
        assert!(
            entity.start >= prev_end,
            "unsorted or overlapping spans in {text:?}: {entity:?}"
        );
        let slice: String = text
            .chars()
            .skip(entity.start)
            .take(entity.end - entity.start)
            .collect();
        assert_eq!(slice, entity.text, "span/text mismatch in {text:?}");
        prev_end = entity.end;
    }
}

#[test]
fn invariants_hold_over_corpus() {
    let corpus = [
        "",
        "   \t\n",
        "just plain text with no entities at all",
        "#go is fun",
        "#a#b #c",
        "RT @alice: hi @bob and @carol/friends",
        "http://example.com#frag and example.com/path?q=1",
        "$AAPL $BRK.A price$X",
        "＃テスト ＠user ｟fullwidth｠",
        "مرحبا #مرحبا @user",
        "🔥 #fire 🔥 $HOT",
        "see http://example.com/path_(wiki)_(again) ok",
        "visit t.co or go.co or https://t.co/abc123?tail",
        "user@example.com is not a mention",
        "@alice check example.com #tag $X",
    ];
    for text in corpus {
        let entities = extract_entities(text);
        check_invariants(text, &entities);
        // deterministic: a second pass returns the same entities
        assert_eq!(entities, extract_entities(text));
    }
}

#[test]
fn mixed_text_orders_all_kinds() {
    let entities = extract_entities("@alice check example.com #tag $X");
    let kinds: Vec<_> = entities.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Reply,
            EntityKind::Url,
            EntityKind::Hashtag,
            EntityKind::Cashtag,
        ]
    );
}

#[test]
fn emoji_before_hashtag_counts_code_points() {
    let entities = extract_entities("🔥 #fire");
    assert_eq!(entities.len(), 1);
    assert_eq!((entities[0].start, entities[0].end), (2, 7));
    assert_eq!(entities[0].text, "#fire");
}

#[test]
fn url_with_parenthesised_path() {
    let entities = extract_urls("see http://example.com/path_(wiki)_(again) ok");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, "http://example.com/path_(wiki)_(again)");
}

#[test]
fn url_query_stored_without_question_mark() {
    let entities = extract_urls("example.com/search?q=rust&lang=en done");
    assert_eq!(entities.len(), 1);
    match &entities[0].data {
        EntityData::Url { path, query, protocol_present, .. } => {
            assert!(!protocol_present);
            assert_eq!(path.as_deref(), Some("/search"));
            assert_eq!(query.as_deref(), Some("q=rust&lang=en"));
        }
        other => panic!("expected url, got {other:?}"),
    }
}

#[test]
fn url_with_port() {
    let entities = extract_urls("http://example.com:8080/x");
    assert_eq!(entities.len(), 1);
    match &entities[0].data {
        EntityData::Url { port, .. } => assert_eq!(port.as_deref(), Some("8080")),
        other => panic!("expected url, got {other:?}"),
    }
}

#[test]
fn tco_slug_truncation() {
    let entities = extract_urls("go https://t.co/abc123?utm=1 now");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, "https://t.co/abc123");
    check_invariants("go https://t.co/abc123?utm=1 now", &entities);
}

#[test]
fn bare_tco_is_not_a_url() {
    assert!(extract_urls("visit t.co today").is_empty());
    assert_eq!(extract_urls("visit go.co today").len(), 1);
}

#[test]
fn reply_versus_mention_precedence() {
    // plain leading mention: the reply claims it
    let entities = extract_entities("@alice hello");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind(), EntityKind::Reply);

    // leading list mention is wider than the reply, so it survives
    let entities = extract_entities("@alice/team hello");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind(), EntityKind::MentionList);

    // not at the start: never a reply
    assert!(extract_reply("well @alice").is_none());
    assert_eq!(extract_mentions("well @alice").len(), 1);
}

#[test]
fn retweet_marker_before_reply() {
    let reply = extract_reply("RT @alice: morning").unwrap();
    assert_eq!(
        reply.data,
        EntityData::Reply { username: "alice".to_string() }
    );
    assert_eq!(reply.text, "@alice");
}

#[test]
fn hashtag_requires_a_letter() {
    assert!(extract_hashtags("#123 #456").is_empty());
    assert_eq!(extract_hashtags("#1a2").len(), 1);
}

#[test]
fn cashtag_with_suffix() {
    let entities = extract_cashtags("long $BRK.A short $F");
    assert_eq!(entities.len(), 2);
    assert_eq!(
        entities[0].data,
        EntityData::Cashtag { symbol: "BRK.A".to_string() }
    );
    assert_eq!(
        entities[1].data,
        EntityData::Cashtag { symbol: "F".to_string() }
    );
}

#[test]
fn rtl_flag_tracks_script() {
    let entities = extract_entities("#שלום #hello");
    assert_eq!(entities.len(), 2);
    assert!(entities[0].contains_rtl);
    assert!(!entities[1].contains_rtl);
}

#[test]
fn batch_matches_single_calls() {
    let texts = ["#a one", "two $B", "RT @c: three example.com"];
    let batched = extract_entities_batch(&texts);
    assert_eq!(batched.len(), texts.len());
    for (text, got) in texts.iter().zip(&batched) {
        assert_eq!(got, &extract_entities(text));
    }
}

#[test]
fn mention_guard_boundaries() {
    // email-like: the sigil follows a letter, so no mention starts there
    assert!(extract_mentions("user@example.com").is_empty());
    // trailing `://` marks the candidate as part of something else
    assert!(extract_mentions("ping @proto://thing").is_empty());
    // trailing latin-accent letter is outside the username alphabet
    assert!(extract_mentions("hi @andré").is_empty());
    assert_eq!(extract_mentions("hi @andre").len(), 1);
}

#[test]
fn long_parenthesised_path_completes() {
    let long = format!("http://example.com/{}", "(a)".repeat(2000));
    let entities = extract_urls(&long);
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, long);
}

#[test]
fn entity_serialisation_shape() {
    let entities = extract_entities("#go is fun");
    let value = serde_json::to_value(&entities[0]).unwrap();
    assert_eq!(value["kind"], "hashtag");
    assert_eq!(value["tag"], "go");
    assert_eq!(value["start"], 0);
    assert_eq!(value["end"], 3);
    assert_eq!(value["text"], "#go");
    assert_eq!(value["contains_rtl"], false);

    let back: Entity = serde_json::from_value(value).unwrap();
    assert_eq!(back, entities[0]);
}
