//! Agency page accessors.

use super::catalog::{GALLERY_IMAGES, MEMBERSHIPS, TEAM_MEMBERS};
use super::model::{ImageField, Membership, TeamMember};
use super::{variables, ContentClient};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::query::ContentMode;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgencyPage {
    pub members: Vec<TeamMember>,
    pub gallery: Vec<ImageField>,
    pub memberships: Vec<Membership>,
}

impl ContentClient {
    pub async fn team_members(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<TeamMember>>, ContentError> {
        self.fetch(&TEAM_MEMBERS, mode, locale, variables!()).await
    }

    pub async fn gallery_images(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<ImageField>>, ContentError> {
        self.fetch(&GALLERY_IMAGES, mode, locale, variables!()).await
    }

    pub async fn memberships(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<Option<Vec<Membership>>, ContentError> {
        self.fetch(&MEMBERSHIPS, mode, locale, variables!()).await
    }

    /// Agency page content. The three queries are independent and run concurrently.
    pub async fn agency_page(
        &self,
        mode: ContentMode,
        locale: &Locale,
    ) -> Result<AgencyPage, ContentError> {
        let (members, gallery, memberships) = futures::try_join!(
            self.team_members(mode, locale),
            self.gallery_images(mode, locale),
            self.memberships(mode, locale),
        )?;
        Ok(AgencyPage {
            members: members.unwrap_or_default(),
            gallery: gallery.unwrap_or_default(),
            memberships: memberships.unwrap_or_default(),
        })
    }
}
