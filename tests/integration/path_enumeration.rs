//! Path enumeration against the in-memory content store.

use super::support::{self, post, Failure, FakeContentStore};
use cms_content::content::catalog::LIST_PAGE_SIZE;
use cms_content::paths::{FallbackPolicy, PathEnumerator, RouteResolution};
use cms_content::{enumerate_detail_paths, ContentError, ContentMode, FetchError, Locale};
use serde_json::json;
use std::collections::HashSet;

fn seed(store: &FakeContentStore) {
    store.add_post("en", post("1", "hello-world", "Hello world", None));
    store.add_post("en", post("2", "second-post", "Second", None));
    store.add_post("fr", post("3", "bonjour", "Bonjour", None));
    store.add_post("fr", post("4", "deuxieme", "Deuxième", None));
    store.add_post("fr", post("5", "troisieme", "Troisième", None));
}

#[tokio::test]
async fn test_enumerates_every_locale() {
    let store = FakeContentStore::new();
    seed(&store);
    let client = support::client(&store);

    let paths = enumerate_detail_paths(&client).await.unwrap();
    assert_eq!(paths.len(), 5);
    assert_eq!(paths.fallback, FallbackPolicy::OnDemand);
    assert!(paths
        .entries
        .iter()
        .all(|e| e.locale.as_str() == "en" || e.locale.as_str() == "fr"));
    assert_eq!(
        paths.entries.iter().filter(|e| e.locale.as_str() == "fr").count(),
        3
    );

    let locales: Vec<String> = store.requests().iter().map(|r| r.locale.clone()).collect();
    assert_eq!(locales, vec!["en", "fr"], "one listing per locale, in order");
}

#[tokio::test]
async fn test_every_enumerated_path_resolves() {
    let store = FakeContentStore::new();
    seed(&store);
    let client = support::client(&store);

    let paths = enumerate_detail_paths(&client).await.unwrap();
    for entry in &paths.entries {
        let found = client
            .post_by_slug(ContentMode::Published, &entry.locale, &entry.slug)
            .await
            .unwrap();
        assert!(
            found.is_some(),
            "{}/{} should resolve",
            entry.locale,
            entry.slug
        );
    }
}

#[tokio::test]
async fn test_listing_is_published_only() {
    let store = FakeContentStore::new();
    seed(&store);
    let client = support::client(&store);

    enumerate_detail_paths(&client).await.unwrap();
    assert!(store
        .requests()
        .iter()
        .all(|r| r.url == support::ENDPOINT && r.operation == "PostSlugs"));
}

#[tokio::test]
async fn test_one_failing_locale_aborts_enumeration() {
    let store = FakeContentStore::new();
    seed(&store);
    store.fail_locale("fr", Failure::Status(502));
    let client = support::client(&store);

    let err = enumerate_detail_paths(&client).await.unwrap_err();
    match err {
        ContentError::Enumeration(e) => {
            assert_eq!(e.content_type, "posts");
            assert_eq!(e.locale, Locale::new("fr"));
            assert!(matches!(e.source, FetchError::Status { status: 502, .. }));
        }
        other => panic!("expected Enumeration error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_records_without_slug_are_skipped() {
    let store = FakeContentStore::new();
    store.add_post("en", post("1", "hello-world", "Hello world", None));
    store.add_post("en", json!({ "id": "2", "slug": null, "title": "Draft" }));
    store.add_post("en", json!({ "id": "3", "slug": "  ", "title": "Blank" }));
    let client = support::client_with_locales(&store, &["en"]);

    let paths = enumerate_detail_paths(&client).await.unwrap();
    let slugs: Vec<&str> = paths.entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["hello-world"]);
}

#[tokio::test]
async fn test_listing_pages_past_the_page_size() {
    let store = FakeContentStore::new();
    let total = LIST_PAGE_SIZE + 7;
    for i in 0..total {
        store.add_post("en", post(&i.to_string(), &format!("post-{}", i), "Post", None));
    }
    let client = support::client_with_locales(&store, &["en"]);

    let paths = enumerate_detail_paths(&client).await.unwrap();
    assert_eq!(paths.len(), total);
    let unique: HashSet<&str> = paths.entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(unique.len(), total);
    assert_eq!(store.request_count(), 2);
    assert_eq!(store.requests()[1].variables["skip"], LIST_PAGE_SIZE);
}

#[tokio::test]
async fn test_listing_stops_when_skip_is_ignored() {
    let store = FakeContentStore::new();
    store.ignore_skip();
    for i in 0..LIST_PAGE_SIZE * 2 {
        store.add_post("en", post(&i.to_string(), &format!("post-{}", i), "Post", None));
    }
    let client = support::client_with_locales(&store, &["en"]);

    let paths = enumerate_detail_paths(&client).await.unwrap();
    assert_eq!(paths.len(), LIST_PAGE_SIZE);
    assert_eq!(store.request_count(), 2);
}

#[tokio::test]
async fn test_no_content_yields_empty_paths() {
    let store = FakeContentStore::new();
    let client = support::client(&store);

    let paths = enumerate_detail_paths(&client).await.unwrap();
    assert!(paths.is_empty());
}

#[tokio::test]
async fn test_unlisted_paths_follow_fallback() {
    let store = FakeContentStore::new();
    seed(&store);
    let client = support::client(&store);
    let en = Locale::new("en");

    let on_demand = enumerate_detail_paths(&client).await.unwrap();
    assert_eq!(
        on_demand.resolve("posts", &en, "hello-world"),
        RouteResolution::Prebuilt
    );
    assert_eq!(
        on_demand.resolve("posts", &en, "published-later"),
        RouteResolution::OnDemand
    );

    let mut served = on_demand.clone();
    assert!(served.record_generated("posts", &en, "published-later"));
    assert!(!served.record_generated("posts", &en, "published-later"));
    assert_eq!(
        served.resolve("posts", &en, "published-later"),
        RouteResolution::Prebuilt
    );

    let exhaustive = PathEnumerator::new(&client)
        .with_fallback(FallbackPolicy::Exhaustive)
        .enumerate()
        .await
        .unwrap();
    assert_eq!(
        exhaustive.resolve("posts", &en, "published-later"),
        RouteResolution::NotFound
    );
    let mut exhaustive = exhaustive;
    assert!(!exhaustive.record_generated("posts", &en, "published-later"));
    assert_eq!(
        exhaustive.resolve("posts", &en, "published-later"),
        RouteResolution::NotFound
    );
}
