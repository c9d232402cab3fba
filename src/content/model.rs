//! Typed content shapes returned by the accessors.
//!
//! Field names follow the CMS schema (camelCase on the wire). Models only carry
//! what the queries in [`super::catalog`] select. Apart from record ids, every
//! scalar the editors fill in is nullable in the CMS, so it is optional here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields selected by `responsiveImageFragment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt: Option<String>,
    pub src_set: Option<String>,
    pub webp_src_set: Option<String>,
    pub sizes: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub title: Option<String>,
    pub bg_color: Option<String>,
    pub base64: Option<String>,
}

/// An image field wrapping its responsive variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageField {
    pub responsive_image: Option<ResponsiveImage>,
}

/// Fields selected by `svgFieldFragment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileField {
    pub url: String,
    pub alt: Option<String>,
    pub filename: Option<String>,
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Fields selected by `ReferenceRecordFragment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSummary {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub slug: Option<String>,
    pub card_cover: Option<ImageField>,
}

/// Home page testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub content: Option<String>,
    pub footer: Option<String>,
    pub img: Option<ImageField>,
}

/// Client the agency worked with under a managed-services contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regie {
    pub id: String,
    pub mission: Option<String>,
    pub nom_entreprise: Option<String>,
    pub img: Option<ImageField>,
}

/// Agency team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub citation: Option<String>,
    pub card_cover: Option<ImageField>,
}

/// Partner association the agency belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo: Option<FileField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Blog post as listed on the blog index and the "last posts" strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: Option<String>,
    pub author: Option<Author>,
    pub hero_cover: Option<ImageField>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Full blog post for its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
    pub hero_cover: Option<ImageField>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub seo: Option<SeoFields>,
}

impl Post {
    /// First tag, used to pick related posts.
    pub fn primary_tag(&self) -> Option<&Tag> {
        self.tags.first()
    }
}

/// SEO metadata attached to a post; consumed by the page head, not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoFields {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Slug-only projection used for path enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugRecord {
    pub slug: Option<String>,
}

/// Blog index: every post plus every tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogIndex {
    pub posts: Vec<PostSummary>,
    pub tags: Vec<Tag>,
}

/// Expertise card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<FileField>,
}

/// Legal page link shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalPage {
    pub title: Option<String>,
    pub slug: Option<String>,
}

/// Contact block shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub adresse: Option<String>,
    pub ville: Option<String>,
    pub pays: Option<String>,
}
