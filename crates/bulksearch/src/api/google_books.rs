use log::{debug, info, trace};
use serde::Deserialize;

use crate::NOT_AVAILABLE;

use super::{url_with_query, Client, Error, ErrorKind};

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// A book found by searching the title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleMatch {
    /// The title that was searched for.
    pub title: String,
    /// The first identifier listed for the book, or [`NOT_AVAILABLE`].
    pub identifier: String,
}

/// Looks up the title of the book with the `isbn`.
///
/// Returns `None` for anything other than a successful response with at least one item.
pub(crate) fn title_by_isbn<C: Client>(client: &C, isbn: &str) -> Option<String> {
    // remove hypen from ISBN-13 (if applicable)
    let isbn = isbn.replace('-', "");
    info!("Searching for ISBN '{isbn}' using Google Books API");

    first_volume(client, &format!("isbn:{isbn}"))
        .map(|volume_info| volume_info.title.unwrap_or_else(|| NOT_AVAILABLE.to_owned()))
        .map_err(|e| debug!("ISBN lookup for '{isbn}' found nothing: {e}"))
        .ok()
}

/// Looks up a book by `title` and takes the first identifier it lists.
///
/// Returns `None` for anything other than a successful response with at least one item.
pub(crate) fn isbn_by_title<C: Client>(client: &C, title: &str) -> Option<TitleMatch> {
    info!("Searching for title '{title}' using Google Books API");

    first_volume(client, &format!("intitle:{title}"))
        .map(|volume_info| {
            let identifier = volume_info
                .industry_identifiers
                .into_iter()
                .next()
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |i| i.identifier);

            TitleMatch {
                title: title.to_owned(),
                identifier,
            }
        })
        .map_err(|e| debug!("Title lookup for '{title}' found nothing: {e}"))
        .ok()
}

fn first_volume<C: Client>(client: &C, query: &str) -> Result<VolumeInfo, Error> {
    let url = url_with_query(GOOGLE_BOOKS_URL, "q", query)?;
    let GoogleModel { items } = client.get_json(url.as_str())?;

    trace!("Request was successful");

    items
        .into_iter()
        .next()
        .map(|item| item.volume_info)
        .ok_or_else(|| Error::new(ErrorKind::NoValue, "No books found!"))
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    // The API leaves out `items` entirely when nothing matches.
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

/// Volume information from the Google Book API
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumeInfo {
    title: Option<String>,
    #[serde(rename = "industryIdentifiers", default)]
    industry_identifiers: Vec<IndustryIdentifier>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct IndustryIdentifier {
    identifier: String,
}
