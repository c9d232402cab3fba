//! Home page accessors.

use super::catalog::{HOME_TESTIMONIALS, LAST_REFERENCES};
use super::model::{ReferenceSummary, Testimonial};
use super::{variables, ContentClient};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;
use serde::Serialize;

/// Everything the home page pulls from the CMS.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomePage {
    pub testimonials: Vec<Testimonial>,
    pub last_references: Vec<ReferenceSummary>,
}

impl ContentClient {
    /// Testimonials attached to the home page record.
    pub async fn home_testimonials(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<Testimonial>>, ContentError> {
        self.fetch(&HOME_TESTIMONIALS, mode, locale, variables!()).await
    }

    /// Three most recently created references.
    pub async fn last_references(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<ReferenceSummary>>, ContentError> {
        self.fetch(&LAST_REFERENCES, mode, locale, variables!()).await
    }

    /// Home page content; both lists are optional and default to empty.
    pub async fn home_page(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<HomePage, ContentError> {
        let (testimonials, last_references) = futures::try_join!(
            self.home_testimonials(mode, locale),
            self.last_references(mode, locale),
        )?;
        Ok(HomePage {
            testimonials: testimonials.unwrap_or_default(),
            last_references: last_references.unwrap_or_default(),
        })
    }
}
