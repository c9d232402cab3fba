//! Site-wide content (footer).

use super::catalog::{CONTACT_DETAILS, LEGAL_PAGES};
use super::model::{ContactDetails, LegalPage};
use super::{variables, ContentClient};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Footer {
    pub legal_pages: Vec<LegalPage>,
    pub contact: ContactDetails,
}

impl ContentClient {
    pub async fn legal_pages(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<LegalPage>>, ContentError> {
        self.fetch(&LEGAL_PAGES, mode, locale, variables!()).await
    }

    pub async fn contact_details(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<ContactDetails>, ContentError> {
        self.fetch(&CONTACT_DETAILS, mode, locale, variables!()).await
    }

    pub async fn footer(&self, mode: ContentMode, locale: &Locale) -> Result<Footer, ContentError> {
        let (legal_pages, contact) = futures::try_join!(
            self.legal_pages(mode, locale),
            self.contact_details(mode, locale),
        )?;
        Ok(Footer {
            legal_pages: legal_pages.unwrap_or_default(),
            contact: contact.unwrap_or_default(),
        })
    }
}
