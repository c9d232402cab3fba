//! References page accessors.

use super::catalog::{ALL_REFERENCES, ALL_REGIES};
use super::model::{ReferenceSummary, Regie};
use super::{variables, ContentClient};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;

impl ContentClient {
    /// Every reference, newest first.
    pub async fn all_references(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<ReferenceSummary>>, ContentError> {
        self.fetch(&ALL_REFERENCES, mode, locale, variables!()).await
    }

    /// Every managed-services client, oldest first.
    pub async fn all_regies(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<Regie>>, ContentError> {
        self.fetch(&ALL_REGIES, mode, locale, variables!()).await
    }
}
