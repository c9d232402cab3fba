//! Name-based accessor dispatch, for callers that pick an accessor at runtime
//! (the `fetch` CLI command).

use super::ContentClient;
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    HomeTestimonials,
    LastReferences,
    AllReferences,
    AllRegies,
    TeamMembers,
    GalleryImages,
    Memberships,
    BlogIndex,
    ExpertisesByField,
    PostBySlug,
    PostSlugs,
    LastPosts,
    LegalPages,
    ContactDetails,
    HomePage,
    AgencyPage,
    Footer,
}

/// Extra parameters some accessors need.
#[derive(Debug, Clone, Default)]
pub struct AccessorArgs {
    pub pattern: Option<String>,
    pub slug: Option<String>,
    pub tag_id: Option<String>,
    pub exclude_id: Option<String>,
}

impl AccessorKind {
    pub const ALL: &'static [AccessorKind] = &[
        AccessorKind::HomeTestimonials,
        AccessorKind::LastReferences,
        AccessorKind::AllReferences,
        AccessorKind::AllRegies,
        AccessorKind::TeamMembers,
        AccessorKind::GalleryImages,
        AccessorKind::Memberships,
        AccessorKind::BlogIndex,
        AccessorKind::ExpertisesByField,
        AccessorKind::PostBySlug,
        AccessorKind::PostSlugs,
        AccessorKind::LastPosts,
        AccessorKind::LegalPages,
        AccessorKind::ContactDetails,
        AccessorKind::HomePage,
        AccessorKind::AgencyPage,
        AccessorKind::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccessorKind::HomeTestimonials => "home-testimonials",
            AccessorKind::LastReferences => "last-references",
            AccessorKind::AllReferences => "all-references",
            AccessorKind::AllRegies => "all-regies",
            AccessorKind::TeamMembers => "team-members",
            AccessorKind::GalleryImages => "gallery-images",
            AccessorKind::Memberships => "memberships",
            AccessorKind::BlogIndex => "blog-index",
            AccessorKind::ExpertisesByField => "expertises-by-field",
            AccessorKind::PostBySlug => "post-by-slug",
            AccessorKind::PostSlugs => "post-slugs",
            AccessorKind::LastPosts => "last-posts",
            AccessorKind::LegalPages => "legal-pages",
            AccessorKind::ContactDetails => "contact-details",
            AccessorKind::HomePage => "home-page",
            AccessorKind::AgencyPage => "agency-page",
            AccessorKind::Footer => "footer",
        }
    }

    /// Run the accessor and return its result as JSON (`null` when absent).
    pub async fn run(
        self,
        client: &ContentClient,
        mode: ContentMode,
        locale: &Locale,
        args: &AccessorArgs,
    ) -> Result<Value, ContentError> {
        match self {
            AccessorKind::HomeTestimonials => to_json(client.home_testimonials(mode, locale).await?),
            AccessorKind::LastReferences => to_json(client.last_references(mode, locale).await?),
            AccessorKind::AllReferences => to_json(client.all_references(mode, locale).await?),
            AccessorKind::AllRegies => to_json(client.all_regies(mode, locale).await?),
            AccessorKind::TeamMembers => to_json(client.team_members(mode, locale).await?),
            AccessorKind::GalleryImages => to_json(client.gallery_images(mode, locale).await?),
            AccessorKind::Memberships => to_json(client.memberships(mode, locale).await?),
            AccessorKind::BlogIndex => to_json(client.blog_index(mode, locale).await?),
            AccessorKind::ExpertisesByField => {
                let pattern = self.require(args.pattern.as_deref(), "pattern")?;
                to_json(client.expertises_by_field(mode, locale, pattern).await?)
            }
            AccessorKind::PostBySlug => {
                let slug = self.require(args.slug.as_deref(), "slug")?;
                to_json(client.post_by_slug(mode, locale, slug).await?)
            }
            AccessorKind::PostSlugs => to_json(client.post_slugs(mode, locale).await?),
            AccessorKind::LastPosts => {
                let tag_id = self.require(args.tag_id.as_deref(), "tag-id")?;
                let exclude_id = self.require(args.exclude_id.as_deref(), "exclude-id")?;
                to_json(client.last_posts(mode, locale, tag_id, exclude_id).await?)
            }
            AccessorKind::LegalPages => to_json(client.legal_pages(mode, locale).await?),
            AccessorKind::ContactDetails => to_json(client.contact_details(mode, locale).await?),
            AccessorKind::HomePage => to_json(client.home_page(mode, locale).await?),
            AccessorKind::AgencyPage => to_json(client.agency_page(mode, locale).await?),
            AccessorKind::Footer => to_json(client.footer(mode, locale).await?),
        }
    }

    fn require<'a>(self, value: Option<&'a str>, argument: &'static str) -> Result<&'a str, ContentError> {
        value.ok_or(ContentError::MissingArgument {
            accessor: self.name(),
            argument,
        })
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ContentError> {
    Ok(serde_json::to_value(value)?)
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccessorKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ContentError::UnknownAccessor(s.to_string()))
    }
}
