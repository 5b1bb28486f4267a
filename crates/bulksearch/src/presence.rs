//! Checking whether a search site is likely to have a book.

use crate::api::{libgen, Client};

/// Decides whether a search for an identifier is worth opening.
pub trait PresenceCheck {
    /// Returns the URL of the results page when it appears to have matches.
    fn check_presence(&self, identifier: &str) -> Option<String>;
}

/// Presence check against the Library Genesis search page.
///
/// The page has no structured API so the check looks for the "no files" message in the returned
/// HTML, see [`libgen::search`]. A missing message is taken as a hit.
pub struct Libgen<'c, C: Client> {
    client: &'c C,
}

impl<'c, C: Client> Libgen<'c, C> {
    /// Creates a presence check that sends its requests with `client`.
    pub const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

impl<C: Client> PresenceCheck for Libgen<'_, C> {
    fn check_presence(&self, identifier: &str) -> Option<String> {
        libgen::search(self.client, identifier)
    }
}
