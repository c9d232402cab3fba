//! Blog accessors and the blog post page.

use super::catalog::{QuerySpec, BLOG_INDEX, LAST_POSTS, LIST_PAGE_SIZE, POST_BY_SLUG, POST_SLUGS};
use super::model::{BlogIndex, Post, PostSummary, SlugRecord, Tag};
use super::{variables, ContentClient};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Result of a page-level content load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "content", rename_all = "snake_case")]
pub enum PageOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> PageOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, PageOutcome::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            PageOutcome::Found(content) => Some(content),
            PageOutcome::NotFound => None,
        }
    }
}

/// Content of a blog post detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostPage {
    pub post: Post,
    pub last_posts: Vec<PostSummary>,
}

impl ContentClient {
    /// Every post (newest first) and every tag.
    pub async fn blog_index(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<BlogIndex>, ContentError> {
        let envelope = self
            .fetch_envelope(&BLOG_INDEX, mode, locale, variables!())
            .await?;
        let posts: Option<Vec<PostSummary>> = envelope.root("allPosts")?;
        let tags: Option<Vec<Tag>> = envelope.root("allTags")?;
        if posts.is_none() && tags.is_none() {
            return Ok(None);
        }
        Ok(Some(BlogIndex {
            posts: posts.unwrap_or_default(),
            tags: tags.unwrap_or_default(),
        }))
    }

    /// One post by slug; `None` when no post has that slug in `locale`.
    pub async fn post_by_slug(
        &self,
        mode: ContentMode,
        locale: &Locale,
        slug: &str,
    ) -> Result<Option<Post>, ContentError> {
        self.fetch(&POST_BY_SLUG, mode, locale, variables!("slug" => slug))
            .await
    }

    /// Slugs of every post in `locale`.
    pub async fn post_slugs(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Vec<SlugRecord>, ContentError> {
        self.list_slugs(&POST_SLUGS, mode, locale).await
    }

    /// Up to three other posts sharing `tag_id`, newest first.
    pub async fn last_posts(
        &self,
        mode: ContentMode,
        locale: &Locale,
        tag_id: &str,
        exclude_post_id: &str,
    ) -> Result<Option<Vec<PostSummary>>, ContentError> {
        self.fetch(
            &LAST_POSTS,
            mode,
            locale,
            variables!("tagIds" => [tag_id], "excludeId" => exclude_post_id),
        )
        .await
    }

    /// Blog post page: the post plus related posts from its first tag.
    pub async fn post_page(
        &self,
        mode: ContentMode,
        locale: &Locale,
        slug: &str,
    ) -> Result<PageOutcome<BlogPostPage>, ContentError> {
        let Some(post) = self.post_by_slug(mode, locale, slug).await? else {
            return Ok(PageOutcome::NotFound);
        };

        let last_posts = match post.primary_tag() {
            Some(tag) => self
                .last_posts(mode, locale, &tag.id, &post.id)
                .await?
                .unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(PageOutcome::Found(BlogPostPage { post, last_posts }))
    }

    /// Page through a slug listing (`$first` / `$skip`) until a short page, or
    /// until a full page brings no slug not already seen.
    pub(crate) async fn list_slugs(
        &self,
        spec: &QuerySpec,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Vec<SlugRecord>, ContentError> {
        let mut records = Vec::new();
        let mut seen: HashSet<Option<String>> = HashSet::new();
        let mut skip = 0usize;
        loop {
            let page: Vec<SlugRecord> = self
                .fetch(
                    spec,
                    mode,
                    locale,
                    variables!("first" => LIST_PAGE_SIZE, "skip" => skip),
                )
                .await?
                .unwrap_or_default();
            let count = page.len();
            let fresh = page
                .iter()
                .filter(|record| seen.insert(record.slug.clone()))
                .count();
            records.extend(page);
            if count < LIST_PAGE_SIZE {
                break;
            }
            if fresh == 0 {
                warn!(
                    operation = spec.name,
                    %locale,
                    skip,
                    "Slug listing repeated a full page, stopping"
                );
                break;
            }
            skip += count;
        }
        Ok(records)
    }
}
