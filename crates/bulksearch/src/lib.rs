#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bulksearch
//!
//! bulksearch reads a list of books from a plain text file, matches each one against the Google
//! Books API by ISBN or title and checks whether Library Genesis is likely to have the matches.
//!
//! Remote lookups are best effort: anything other than a clear result is reported as `None`
//! rather than as an [`Error`].

mod api;
pub mod enrich;
mod error;
pub mod file;
pub mod presence;

pub use api::{google_books::TitleMatch, http_client, Client};
pub use error::{Error, ErrorKind};

use log::trace;

/// Placeholder used when a book has no identifier to report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Search the title of a book by `isbn` using the Google Books API.
///
/// Hyphens in `isbn` are ignored.
#[inline]
pub fn title_by_isbn<C: Client>(client: &C, isbn: &str) -> Option<String> {
    trace!("Search title by ISBN of '{isbn}'");
    api::google_books::title_by_isbn(client, isbn)
}

/// Search a book by `title` using the Google Books API.
///
/// The match keeps `title` and takes the first identifier listed for the book, or
/// [`NOT_AVAILABLE`] when there is none.
#[inline]
pub fn isbn_by_title<C: Client>(client: &C, title: &str) -> Option<TitleMatch> {
    trace!("Search ISBN by title of '{title}'");
    api::google_books::isbn_by_title(client, title)
}
