//! Expertise accessors.

use super::catalog::EXPERTISES_BY_FIELD;
use super::model::Expertise;
use super::{variables, ContentClient};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;

impl ContentClient {
    /// Expertises whose `expertise` field matches `pattern`.
    ///
    /// The pattern is sent as the `$pattern` variable, so the CMS treats it as a
    /// value and never as query syntax.
    pub async fn expertises_by_field(
        &self,
        mode: ContentMode,
        locale: &Locale,
        pattern: &str,
    ) -> Result<Option<Vec<Expertise>>, ContentError> {
        self.fetch(
            &EXPERTISES_BY_FIELD,
            mode,
            locale,
            variables!("pattern" => pattern),
        )
        .await
    }
}
