//! Query catalog
//!
//! Every content-bearing operation the accessors run, in one place. Each entry
//! binds `$locale` (and any filter value) as a typed variable; nothing from the
//! caller is ever spliced into query text. Ordering is declared here and left to
//! the CMS.

use crate::fragment::{Fragment, QueryDocument, FILE_FIELD, REFERENCE_RECORD, RESPONSIVE_IMAGE};
use crate::locale::Locale;
use crate::query::{ContentMode, QueryRequest};

/// Page size used when listing every record of a model.
pub const LIST_PAGE_SIZE: usize = 100;

/// One named operation plus the root path its payload is read from.
#[derive(Debug)]
pub struct QuerySpec {
    pub name: &'static str,
    pub root: &'static [&'static str],
    pub operation: &'static str,
    pub fragments: &'static [&'static Fragment],
}

impl QuerySpec {
    pub fn document(&self) -> QueryDocument {
        QueryDocument::new(self.operation).with_fragments(self.fragments)
    }

    /// Fresh request for this operation, scoped to `locale`.
    pub fn request(&self, mode: ContentMode, locale: &Locale) -> QueryRequest {
        QueryRequest::new(&self.document(), mode).with_locale(locale)
    }
}

pub static HOME_TESTIMONIALS: QuerySpec = QuerySpec {
    name: "HomeTestimonials",
    root: &["home", "temoignages"],
    operation: r#"query HomeTestimonials($locale: SiteLocale) {
  home(locale: $locale) {
    temoignages {
      id
      footer
      content
      img {
        responsiveImage {
          ...responsiveImageFragment
        }
      }
    }
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

pub static LAST_REFERENCES: QuerySpec = QuerySpec {
    name: "LastReferences",
    root: &["allReferences"],
    operation: r#"query LastReferences($locale: SiteLocale) {
  allReferences(locale: $locale, orderBy: _createdAt_DESC, first: 3) {
    ...ReferenceRecordFragment
  }
}"#,
    fragments: &[&REFERENCE_RECORD],
};

pub static ALL_REFERENCES: QuerySpec = QuerySpec {
    name: "AllReferences",
    root: &["allReferences"],
    operation: r#"query AllReferences($locale: SiteLocale) {
  allReferences(locale: $locale, orderBy: _createdAt_DESC) {
    ...ReferenceRecordFragment
  }
}"#,
    fragments: &[&REFERENCE_RECORD],
};

pub static ALL_REGIES: QuerySpec = QuerySpec {
    name: "AllRegies",
    root: &["allRegies"],
    operation: r#"query AllRegies($locale: SiteLocale) {
  allRegies(locale: $locale, orderBy: _createdAt_ASC) {
    id
    mission
    nomEntreprise
    img {
      responsiveImage {
        ...responsiveImageFragment
      }
    }
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

pub static TEAM_MEMBERS: QuerySpec = QuerySpec {
    name: "TeamMembers",
    root: &["agence", "membres"],
    operation: r#"query TeamMembers($locale: SiteLocale) {
  agence(locale: $locale) {
    membres {
      id
      subtitle
      title
      citation
      cardCover {
        responsiveImage {
          ...responsiveImageFragment
        }
      }
    }
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

pub static GALLERY_IMAGES: QuerySpec = QuerySpec {
    name: "GalleryImages",
    root: &["agence", "gallerie"],
    operation: r#"query GalleryImages($locale: SiteLocale) {
  agence(locale: $locale) {
    gallerie {
      responsiveImage {
        ...responsiveImageFragment
      }
    }
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

pub static MEMBERSHIPS: QuerySpec = QuerySpec {
    name: "Memberships",
    root: &["agence", "adhesionAssociation"],
    operation: r#"query Memberships($locale: SiteLocale) {
  agence(locale: $locale) {
    adhesionAssociation {
      id
      name
      url
      logo {
        ...svgFieldFragment
      }
    }
  }
}"#,
    fragments: &[&FILE_FIELD],
};

/// Two roots: `allPosts` and `allTags`.
pub static BLOG_INDEX: QuerySpec = QuerySpec {
    name: "BlogIndex",
    root: &["allPosts"],
    operation: r#"query BlogIndex($locale: SiteLocale) {
  allPosts(locale: $locale, orderBy: date_DESC) {
    date
    slug
    title
    content
    author {
      name
    }
    heroCover {
      responsiveImage {
        ...responsiveImageFragment
      }
    }
    tags {
      id
      name
      slug
    }
  }
  allTags(locale: $locale) {
    id
    name
    slug
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

pub static EXPERTISES_BY_FIELD: QuerySpec = QuerySpec {
    name: "ExpertisesByField",
    root: &["allExpertises"],
    operation: r#"query ExpertisesByField($locale: SiteLocale, $pattern: String!) {
  allExpertises(locale: $locale, filter: { expertise: { matches: { pattern: $pattern } } }) {
    id
    title
    description
    icon {
      ...svgFieldFragment
    }
  }
}"#,
    fragments: &[&FILE_FIELD],
};

pub static POST_BY_SLUG: QuerySpec = QuerySpec {
    name: "PostBySlug",
    root: &["post"],
    operation: r#"query PostBySlug($locale: SiteLocale, $slug: String) {
  post(locale: $locale, filter: { slug: { eq: $slug } }) {
    id
    slug
    title
    date
    excerpt
    content
    author {
      name
    }
    heroCover {
      responsiveImage {
        ...responsiveImageFragment
      }
    }
    tags {
      id
      name
      slug
    }
    seo {
      title
      description
    }
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

/// Paged with `$first` / `$skip`; see [`LIST_PAGE_SIZE`].
pub static POST_SLUGS: QuerySpec = QuerySpec {
    name: "PostSlugs",
    root: &["allPosts"],
    operation: r#"query PostSlugs($locale: SiteLocale, $first: IntType, $skip: IntType) {
  allPosts(locale: $locale, orderBy: date_DESC, first: $first, skip: $skip) {
    slug
  }
}"#,
    fragments: &[],
};

pub static LAST_POSTS: QuerySpec = QuerySpec {
    name: "LastPosts",
    root: &["allPosts"],
    operation: r#"query LastPosts($locale: SiteLocale, $tagIds: [ItemId], $excludeId: ItemId) {
  allPosts(
    locale: $locale
    orderBy: date_DESC
    first: 3
    filter: { tags: { anyIn: $tagIds }, id: { neq: $excludeId } }
  ) {
    date
    slug
    title
    heroCover {
      responsiveImage {
        ...responsiveImageFragment
      }
    }
    tags {
      id
      name
      slug
    }
  }
}"#,
    fragments: &[&RESPONSIVE_IMAGE],
};

pub static LEGAL_PAGES: QuerySpec = QuerySpec {
    name: "LegalPages",
    root: &["allLegalPages"],
    operation: r#"query LegalPages($locale: SiteLocale) {
  allLegalPages(locale: $locale, orderBy: _createdAt_ASC) {
    title
    slug
  }
}"#,
    fragments: &[],
};

pub static CONTACT_DETAILS: QuerySpec = QuerySpec {
    name: "ContactDetails",
    root: &["coordonnee"],
    operation: r#"query ContactDetails($locale: SiteLocale) {
  coordonnee(locale: $locale) {
    telephone
    email
    adresse
    ville
    pays
  }
}"#,
    fragments: &[],
};

/// Every operation in the catalog.
pub static CATALOG: &[&QuerySpec] = &[
    &HOME_TESTIMONIALS,
    &LAST_REFERENCES,
    &ALL_REFERENCES,
    &ALL_REGIES,
    &TEAM_MEMBERS,
    &GALLERY_IMAGES,
    &MEMBERSHIPS,
    &BLOG_INDEX,
    &EXPERTISES_BY_FIELD,
    &POST_BY_SLUG,
    &POST_SLUGS,
    &LAST_POSTS,
    &LEGAL_PAGES,
    &CONTACT_DETAILS,
];
