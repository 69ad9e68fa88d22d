//! Render Workflow Integration Tests
//!
//! Submit-time tweet URL validation followed by entry rendering.

use super::common::fixtures::{EmbedHarness, TWEET_HTML, TWEET_URL};
use social_fields_core::embed::{validate_tweet_url, RenderContext, TweetUrlError};

const NO_PARAMS: [&str; 0] = [];

fn viewer(_: &str) -> bool {
    false
}

/// Test: Valid tweet is accepted, embedded on first view, cached afterwards
#[test]
fn test_submit_then_render_workflow() {
    let h = EmbedHarness::new();
    h.oembed_html(TWEET_URL, TWEET_HTML);

    assert_eq!(validate_tweet_url(TWEET_URL), Ok(()));

    let context = RenderContext {
        entry_id: Some(100),
        form_id: 5,
        field_id: 2,
        value: TWEET_URL,
        embed_enabled: true,
    };
    let link = format!("<a href=\"{0}\">{0}</a>", TWEET_URL);

    for _ in 0..5 {
        let rendered = h.resolver.render(&context, &link, &viewer, &NO_PARAMS);
        assert_eq!(rendered, TWEET_HTML);
    }

    assert_eq!(h.client.request_count(), 1);
    assert_eq!(h.meta.form_of(100, "tweet_output_5:2"), Some(5));

    // Host deletes the form; its cached embeds go with it
    assert_eq!(h.meta.remove_form(5), 1);
    assert!(h.meta.is_empty());
}

/// Test: Non-tweet URLs are rejected at submit time
#[test]
fn test_submit_rejects_profile_url() {
    assert_eq!(
        validate_tweet_url("https://twitter.com/jack"),
        Err(TweetUrlError::NotATweet)
    );
    assert_eq!(
        TweetUrlError::NotATweet.to_string(),
        "Not a valid Tweet URL."
    );
}
