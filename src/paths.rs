//! Path Enumerator
//!
//! Collects every known `(locale, slug)` pair of every content type that has
//! detail pages, ahead of a build. Each locale is listed by its own query; one
//! failing locale aborts the whole enumeration, because a silently shorter route
//! list would hide an availability problem.
//!
//! The resulting [`StaticPaths`] is declared partial: a path that was not listed
//! at build time is still routable and gets generated on its first request.

use crate::content::catalog::{QuerySpec, POST_SLUGS};
use crate::content::ContentClient;
use crate::error::{ContentError, EnumerationError};
use crate::locale::Locale;
use crate::query::ContentMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A content type whose records each get a detail page.
#[derive(Debug)]
pub struct DetailRoute {
    pub content_type: &'static str,
    pub slugs: &'static QuerySpec,
}

/// Blog posts, rendered under `/blog/{slug}`.
pub static POSTS: DetailRoute = DetailRoute {
    content_type: "posts",
    slugs: &POST_SLUGS,
};

/// Content types with detail pages.
pub static DETAIL_ROUTES: &[&DetailRoute] = &[&POSTS];

/// One detail page to pre-render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathEntry {
    pub content_type: String,
    pub locale: Locale,
    pub slug: String,
}

/// What to do with a path that was not enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Unknown paths are generated on first request, then served from that result.
    OnDemand,
    /// The enumerated set is exhaustive; unknown paths are not found.
    Exhaustive,
}

/// How a request path is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteResolution {
    Prebuilt,
    OnDemand,
    NotFound,
}

/// Enumerated paths plus the fallback policy for everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticPaths {
    pub entries: Vec<PathEntry>,
    pub fallback: FallbackPolicy,
}

impl StaticPaths {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, content_type: &str, locale: &Locale, slug: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.content_type == content_type && &e.locale == locale && e.slug == slug)
    }

    /// Record a path generated on its first request so later requests are
    /// served as prebuilt. Returns `false` when the set is exhaustive (such a
    /// path is never generated) or the path is already listed.
    pub fn record_generated(&mut self, content_type: &str, locale: &Locale, slug: &str) -> bool {
        if self.fallback == FallbackPolicy::Exhaustive
            || slug.trim().is_empty()
            || self.contains(content_type, locale, slug)
        {
            return false;
        }
        debug!(content_type, %locale, slug, "Recorded on-demand path");
        self.entries.push(PathEntry {
            content_type: content_type.to_string(),
            locale: locale.clone(),
            slug: slug.to_string(),
        });
        true
    }

    /// Two-tier routing: listed paths are prebuilt, others follow the fallback policy.
    pub fn resolve(&self, content_type: &str, locale: &Locale, slug: &str) -> RouteResolution {
        if self.contains(content_type, locale, slug) {
            return RouteResolution::Prebuilt;
        }
        match self.fallback {
            FallbackPolicy::OnDemand => RouteResolution::OnDemand,
            FallbackPolicy::Exhaustive => RouteResolution::NotFound,
        }
    }
}

/// Walks every detail route across every supported locale.
pub struct PathEnumerator<'a> {
    client: &'a ContentClient,
    routes: &'static [&'static DetailRoute],
    fallback: FallbackPolicy,
}

impl<'a> PathEnumerator<'a> {
    pub fn new(client: &'a ContentClient) -> Self {
        Self {
            client,
            routes: DETAIL_ROUTES,
            fallback: FallbackPolicy::OnDemand,
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// List published slugs for every route and locale, in configuration order.
    pub async fn enumerate(&self) -> Result<StaticPaths, ContentError> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for route in self.routes {
            for locale in self.client.locales().iter() {
                let records = self
                    .client
                    .list_slugs(route.slugs, ContentMode::Published, locale)
                    .await
                    .map_err(|e| match e {
                        ContentError::Fetch(source) => {
                            warn!(
                                content_type = route.content_type,
                                %locale,
                                error = %source,
                                "Path enumeration failed"
                            );
                            ContentError::Enumeration(EnumerationError {
                                content_type: route.content_type.to_string(),
                                locale: locale.clone(),
                                source,
                            })
                        }
                        other => other,
                    })?;

                let mut added = 0usize;
                for record in records {
                    let slug = match record.slug {
                        Some(slug) if !slug.trim().is_empty() => slug,
                        _ => {
                            warn!(
                                content_type = route.content_type,
                                %locale,
                                "Skipping record without slug"
                            );
                            continue;
                        }
                    };
                    let entry = PathEntry {
                        content_type: route.content_type.to_string(),
                        locale: locale.clone(),
                        slug,
                    };
                    if seen.insert(entry.clone()) {
                        entries.push(entry);
                        added += 1;
                    }
                }
                debug!(content_type = route.content_type, %locale, added, "Enumerated locale");
            }
        }

        info!(
            paths = entries.len(),
            routes = self.routes.len(),
            locales = self.client.locales().len(),
            "Detail paths enumerated"
        );

        Ok(StaticPaths {
            entries,
            fallback: self.fallback,
        })
    }
}

/// Enumerate detail paths with the default routes and on-demand fallback.
pub async fn enumerate_detail_paths(client: &ContentClient) -> Result<StaticPaths, ContentError> {
    PathEnumerator::new(client).enumerate().await
}
