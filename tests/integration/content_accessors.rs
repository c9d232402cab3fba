//! Accessors against the in-memory content store.

use super::support::{self, post, responsive_image, Failure, FakeContentStore, ENDPOINT};
use cms_content::content::dispatch::AccessorArgs;
use cms_content::content::{AccessorKind, PageOutcome};
use cms_content::{ContentError, ContentMode, FetchError, Locale};
use serde_json::json;

fn en() -> Locale {
    Locale::new("en")
}

#[tokio::test]
async fn test_post_by_slug_found_and_missing() {
    let store = FakeContentStore::new();
    store.add_post("en", post("1", "hello-world", "Hello world", Some("t1")));
    let client = support::client(&store);

    let found = client
        .post_by_slug(ContentMode::Published, &en(), "hello-world")
        .await
        .unwrap()
        .expect("post should exist");
    assert_eq!(found.slug.as_deref(), Some("hello-world"));
    assert_eq!(found.title.as_deref(), Some("Hello world"));
    assert_eq!(found.primary_tag().map(|t| t.id.as_str()), Some("t1"));

    let missing = client
        .post_by_slug(ContentMode::Published, &en(), "missing")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_responsive_image_fields_survive_decoding() {
    let store = FakeContentStore::new();
    store.add_post("en", post("1", "hello-world", "Hello world", None));
    let client = support::client(&store);

    let found = client
        .post_by_slug(ContentMode::Published, &en(), "hello-world")
        .await
        .unwrap()
        .unwrap();
    let image = found
        .hero_cover
        .and_then(|c| c.responsive_image)
        .expect("responsive image");
    assert_eq!(image.src, "https://img.test/hello-world.jpg");
    assert_eq!(image.width, 800);
    assert_eq!(image.height, 600);
    assert_eq!(image.alt.as_deref(), Some("cover"));
    assert!(image.src_set.is_some());
    assert!(image.webp_src_set.is_some());
    assert!(image.base64.is_some());
}

#[tokio::test]
async fn test_list_order_is_stable_across_calls() {
    let store = FakeContentStore::new();
    store.set_data(
        "AllReferences",
        "en",
        json!({ "allReferences": [
            { "id": "3", "title": "Newest", "subtitle": null, "slug": "newest", "cardCover": null },
            { "id": "1", "title": "Oldest", "subtitle": null, "slug": "oldest", "cardCover": null },
            { "id": "2", "title": "Middle", "subtitle": null, "slug": "middle", "cardCover": null }
        ]}),
    );
    let client = support::client(&store);

    let first = client
        .all_references(ContentMode::Published, &en())
        .await
        .unwrap()
        .unwrap();
    let second = client
        .all_references(ContentMode::Published, &en())
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"], "CMS order must not be re-sorted");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_null_title_post_is_listed_and_found() {
    let store = FakeContentStore::new();
    let mut untitled = post("1", "hello-world", "unused", None);
    untitled["title"] = serde_json::Value::Null;
    store.add_post("en", untitled);
    let client = support::client(&store);

    let paths = cms_content::enumerate_detail_paths(&client).await.unwrap();
    assert_eq!(paths.len(), 1);
    for entry in &paths.entries {
        let found = client
            .post_by_slug(ContentMode::Published, &entry.locale, &entry.slug)
            .await
            .unwrap()
            .expect("every listed slug resolves");
        assert_eq!(found.title, None);
    }
}

#[tokio::test]
async fn test_reference_without_slug_keeps_the_list() {
    let store = FakeContentStore::new();
    store.set_data(
        "AllReferences",
        "en",
        json!({ "allReferences": [
            { "id": "1", "title": "Draft", "subtitle": null, "slug": null, "cardCover": null },
            { "id": "2", "title": null, "subtitle": null, "slug": "published", "cardCover": null }
        ]}),
    );
    let client = support::client(&store);

    let references = client
        .all_references(ContentMode::Published, &en())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(references.len(), 2);
    assert_eq!(references[0].slug, None);
    assert_eq!(references[1].slug.as_deref(), Some("published"));
}

#[tokio::test]
async fn test_supported_locale_without_content_is_none() {
    let store = FakeContentStore::new();
    store.set_data(
        "HomeTestimonials",
        "en",
        json!({ "home": { "temoignages": [
            { "id": "1", "content": "Great team", "footer": "A client", "img": null }
        ]}}),
    );
    let client = support::client(&store);

    let en_items = client
        .home_testimonials(ContentMode::Published, &en())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(en_items.len(), 1);

    let fr_items = client
        .home_testimonials(ContentMode::Published, &Locale::new("fr"))
        .await
        .unwrap();
    assert!(fr_items.is_none());
}

#[tokio::test]
async fn test_unsupported_locale_is_rejected_before_any_request() {
    let store = FakeContentStore::new();
    let client = support::client(&store);

    let err = client
        .legal_pages(ContentMode::Published, &Locale::new("de"))
        .await
        .unwrap_err();
    match err {
        ContentError::UnsupportedLocale { locale, supported } => {
            assert_eq!(locale, "de");
            assert!(supported.contains("en"));
        }
        other => panic!("expected UnsupportedLocale, got {:?}", other),
    }
    assert_eq!(store.request_count(), 0);
}

#[tokio::test]
async fn test_each_failure_kind_is_one_fetch_error() {
    let cases = [
        (Failure::Status(503), "status"),
        (Failure::Malformed, "decode"),
        (Failure::GraphqlErrors, "api"),
        (Failure::Transport, "transport"),
    ];
    for (failure, expected) in cases {
        let store = FakeContentStore::new();
        store.fail_locale("en", failure);
        let client = support::client(&store);

        let err = client
            .contact_details(ContentMode::Published, &en())
            .await
            .unwrap_err();
        let kind = match err {
            ContentError::Fetch(FetchError::Status { status, .. }) => {
                assert_eq!(status, 503);
                "status"
            }
            ContentError::Fetch(FetchError::Decode(_)) => "decode",
            ContentError::Fetch(FetchError::Api { errors }) => {
                assert_eq!(errors[0].message, "Invalid locale");
                "api"
            }
            ContentError::Fetch(FetchError::Transport(_)) => "transport",
            other => panic!("unexpected error {:?}", other),
        };
        assert_eq!(kind, expected);
        assert_eq!(store.request_count(), 1, "no retry for {}", expected);
    }
}

#[tokio::test]
async fn test_preview_mode_uses_preview_endpoint() {
    let store = FakeContentStore::new();
    let client = support::client(&store);

    client
        .legal_pages(ContentMode::Preview, &en())
        .await
        .unwrap();
    client
        .legal_pages(ContentMode::Published, &en())
        .await
        .unwrap();

    let requests = store.requests();
    assert_eq!(requests[0].url, format!("{}/preview", ENDPOINT));
    assert_eq!(requests[1].url, ENDPOINT);
    assert!(requests.iter().all(|r| r.token == "test-token"));
    assert!(requests.iter().all(|r| r.operation == "LegalPages"));
}

#[tokio::test]
async fn test_locale_is_sent_as_variable() {
    let store = FakeContentStore::new();
    let client = support::client(&store);

    client
        .expertises_by_field(ContentMode::Published, &Locale::new("fr"), "conseil")
        .await
        .unwrap();

    let request = &store.requests()[0];
    assert_eq!(request.locale, "fr");
    assert_eq!(request.variables["pattern"], "conseil");
}

#[tokio::test]
async fn test_post_page_with_related_posts() {
    let store = FakeContentStore::new();
    store.add_post("en", post("1", "hello-world", "Hello world", Some("t1")));
    store.add_post("en", post("2", "second", "Second", Some("t1")));
    store.add_post("en", post("3", "unrelated", "Unrelated", Some("t2")));
    let client = support::client(&store);

    let outcome = client
        .post_page(ContentMode::Published, &en(), "hello-world")
        .await
        .unwrap();
    let page = outcome.into_option().expect("page");
    let related: Vec<&str> = page
        .last_posts
        .iter()
        .filter_map(|p| p.slug.as_deref())
        .collect();
    assert_eq!(related, vec!["second"]);

    let last = store.requests().pop().unwrap();
    assert_eq!(last.operation, "LastPosts");
    assert_eq!(last.variables["tagIds"], json!(["t1"]));
    assert_eq!(last.variables["excludeId"], "1");
}

#[tokio::test]
async fn test_post_page_not_found_skips_related_query() {
    let store = FakeContentStore::new();
    let client = support::client(&store);

    let outcome = client
        .post_page(ContentMode::Published, &en(), "missing")
        .await
        .unwrap();
    assert_eq!(outcome, PageOutcome::NotFound);
    assert_eq!(store.request_count(), 1);
}

#[tokio::test]
async fn test_page_loads_fail_as_a_whole() {
    let store = FakeContentStore::new();
    store.set_data(
        "LegalPages",
        "en",
        json!({ "allLegalPages": [{ "title": "Mentions", "slug": "mentions" }] }),
    );
    let client = support::client(&store);

    let footer = client.footer(ContentMode::Published, &en()).await.unwrap();
    assert_eq!(footer.legal_pages.len(), 1);

    store.fail_locale("en", Failure::Status(500));
    assert!(client.footer(ContentMode::Published, &en()).await.is_err());
}

#[tokio::test]
async fn test_agency_page_reads_nested_roots() {
    let store = FakeContentStore::new();
    store.set_data(
        "GalleryImages",
        "en",
        json!({ "agence": { "gallerie": [
            { "responsiveImage": responsive_image("https://img.test/office.jpg") }
        ]}}),
    );
    let client = support::client(&store);

    let page = client.agency_page(ContentMode::Published, &en()).await.unwrap();
    assert_eq!(page.gallery.len(), 1);
    assert!(page.members.is_empty());
    assert!(page.memberships.is_empty());
}

#[tokio::test]
async fn test_dispatch_requires_arguments() {
    let store = FakeContentStore::new();
    let client = support::client(&store);

    let err = AccessorKind::PostBySlug
        .run(&client, ContentMode::Published, &en(), &AccessorArgs::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ContentError::MissingArgument {
            argument: "slug",
            ..
        }
    ));

    let value = AccessorKind::PostBySlug
        .run(
            &client,
            ContentMode::Published,
            &en(),
            &AccessorArgs {
                slug: Some("missing".to_string()),
                ..AccessorArgs::default()
            },
        )
        .await
        .unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_pass_cache_shares_identical_calls() {
    let store = FakeContentStore::new();
    let executor = cms_content::executor::QueryExecutor::new(
        store.clone(),
        cms_content::executor::Endpoint::new(ENDPOINT, "/preview"),
        cms_content::executor::ApiToken::new("test-token"),
    )
    .with_pass_cache();
    let client = cms_content::ContentClient::new(
        std::sync::Arc::new(executor),
        support::locales(&["en", "fr"]),
    );

    client.legal_pages(ContentMode::Published, &en()).await.unwrap();
    client.legal_pages(ContentMode::Published, &en()).await.unwrap();
    assert_eq!(store.request_count(), 1);

    client.begin_pass();
    client.legal_pages(ContentMode::Published, &en()).await.unwrap();
    assert_eq!(store.request_count(), 2);
}
