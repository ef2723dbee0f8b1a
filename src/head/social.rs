//! Open Graph and Twitter Card derivation.
//!
//! Fills in social tags from the stored title and description right before
//! rendering. Each tag is gated on its key being absent, so running the pass
//! again never duplicates anything and never overrides explicit values.

use crate::debug;
use crate::utils::text::truncate;

use super::HeaderBuilder;
use super::group::Group;

/// Platform length limits, in code points.
pub const OG_TITLE_MAX: usize = 60;
pub const OG_DESCRIPTION_MAX: usize = 65;
pub const TWITTER_TITLE_MAX: usize = 55;
pub const TWITTER_DESCRIPTION_MAX: usize = 50;

/// Default `twitter:card` type.
pub const TWITTER_CARD: &str = "summary";

impl HeaderBuilder {
    /// Derive missing `og:*` and `twitter:*` tags from title and description.
    pub(crate) fn derive_social(&mut self) {
        let title = self.title.clone();
        let description = self.description.clone();

        if !self.tags.contains(Group::Og, "og:title")
            && let Some(title) = &title
        {
            debug!("head"; "derived og:title");
            self.og("title", &truncate(title, OG_TITLE_MAX));
        }

        if !self.tags.contains(Group::Og, "og:description")
            && let Some(description) = &description
        {
            debug!("head"; "derived og:description");
            self.og("description", &truncate(description, OG_DESCRIPTION_MAX));
        }

        if !self.tags.contains(Group::Twitter, "twitter:card") {
            self.twitter("card", TWITTER_CARD);
        }

        // Gated on twitter:description: an explicit twitter:description also
        // suppresses the derived twitter:title. The own-key check keeps
        // repeated renders from appending a second title.
        if !self.tags.contains(Group::Twitter, "twitter:description")
            && !self.tags.contains(Group::Twitter, "twitter:title")
            && let Some(title) = &title
        {
            debug!("head"; "derived twitter:title");
            self.twitter("title", &truncate(title, TWITTER_TITLE_MAX));
        }

        if !self.tags.contains(Group::Twitter, "twitter:description")
            && let Some(description) = &description
        {
            debug!("head"; "derived twitter:description");
            self.twitter(
                "description",
                &truncate(description, TWITTER_DESCRIPTION_MAX),
            );
        }
    }
}
