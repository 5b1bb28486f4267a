//! Matching bulk search records to books.
//!
//! Every record is looked up twice, first by ISBN and then by title, and the two results are
//! combined by [`resolve`].

use log::trace;

use crate::{
    file::{Line, Record},
    Client, TitleMatch,
};

/// Which lookup a [`Resolved`] entry came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Found by the ISBN in the record.
    Isbn,
    /// Found by the title in the record.
    Title,
}

/// A record matched to a book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Title reported by the lookup.
    pub title: String,
    /// ISBN used for the presence check.
    pub identifier: String,
    /// The lookup that matched.
    pub source: Source,
}

/// A record neither lookup could match, holding the values from the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unresolved {
    /// Title as written in the file.
    pub label: String,
    /// ISBN as written in the file.
    pub identifier: String,
}

/// The result of enriching every record, each list in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Entries matched by either lookup.
    pub resolved: Vec<Resolved>,
    /// Entries neither lookup matched.
    pub unresolved: Vec<Unresolved>,
}

impl Session {
    /// The total number of entries across both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }

    /// Returns `true` if neither list has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Combines the two lookup results for a `record`.
///
/// The ISBN lookup wins whenever it found a title and the record has an ISBN, in which case the
/// record's own ISBN is kept. The title lookup is only used otherwise.
pub fn resolve(
    record: Record,
    by_isbn: Option<String>,
    by_title: Option<TitleMatch>,
) -> Result<Resolved, Unresolved> {
    let Record { identifier, label } = record;

    match (by_isbn, by_title) {
        (Some(title), _) if !title.is_empty() && !identifier.is_empty() => Ok(Resolved {
            title,
            identifier,
            source: Source::Isbn,
        }),
        (_, Some(TitleMatch { title, identifier }))
            if !title.is_empty() && !identifier.is_empty() =>
        {
            Ok(Resolved {
                title,
                identifier,
                source: Source::Title,
            })
        }
        _ => Err(Unresolved { label, identifier }),
    }
}

/// Something worth telling the user while [`enrich`] works through the lines.
#[derive(Debug, PartialEq, Eq)]
pub enum Progress<'a> {
    /// A line that is not a record, which is passed over.
    Skipped(&'a str),
    /// A record that has just been resolved.
    Resolved(&'a Resolved),
}

/// Looks up every record in file order.
///
/// `on_progress` hears about each skipped line and each resolved entry as soon as it is reached,
/// so the notices come out in the same order as the file.
pub fn enrich<C, F>(client: &C, lines: Vec<Line>, mut on_progress: F) -> Session
where
    C: Client,
    F: FnMut(Progress<'_>),
{
    let mut session = Session::default();

    for line in lines {
        let record = match line {
            Line::Record(record) => record,
            Line::Invalid(text) => {
                on_progress(Progress::Skipped(&text));
                continue;
            }
        };

        let by_isbn = if record.identifier.is_empty() {
            trace!("No ISBN for '{}' - skipping ISBN lookup", record.label);
            None
        } else {
            crate::title_by_isbn(client, &record.identifier)
        };
        let by_title = crate::isbn_by_title(client, &record.label);

        match resolve(record, by_isbn, by_title) {
            Ok(resolved) => {
                on_progress(Progress::Resolved(&resolved));
                session.resolved.push(resolved);
            }
            Err(unresolved) => session.unresolved.push(unresolved),
        }
    }

    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RouteClient;

    const GOOGLE_BOOK_JSON: &str = include_str!("../tests/data/google_book_json.txt");
    const NO_ITEMS_JSON: &str = r#"{ "kind": "books#volumes", "totalItems": 0 }"#;

    fn record(identifier: &str, label: &str) -> Record {
        Record {
            identifier: identifier.to_owned(),
            label: label.to_owned(),
        }
    }

    fn line(identifier: &str, label: &str) -> Line {
        Line::Record(record(identifier, label))
    }

    fn title_match(title: &str, identifier: &str) -> Option<TitleMatch> {
        Some(TitleMatch {
            title: title.to_owned(),
            identifier: identifier.to_owned(),
        })
    }

    #[test]
    fn isbn_lookup_keeps_original_identifier_even_when_title_lookup_succeeds() {
        let res = resolve(
            record("978-0735619678", "code complete"),
            Some("Code Complete".to_owned()),
            title_match("code complete", "0735619670"),
        );

        assert_eq!(
            Ok(Resolved {
                title: "Code Complete".to_owned(),
                identifier: "978-0735619678".to_owned(),
                source: Source::Isbn,
            }),
            res
        );
    }

    #[test]
    fn title_lookup_used_when_isbn_lookup_fails() {
        let res = resolve(
            record("bad isbn", "Dune"),
            None,
            title_match("Dune", "0441013597"),
        );

        assert_eq!(
            Ok(Resolved {
                title: "Dune".to_owned(),
                identifier: "0441013597".to_owned(),
                source: Source::Title,
            }),
            res
        );
    }

    #[test]
    fn empty_identifier_cannot_resolve_by_isbn() {
        let res = resolve(
            record("", "Dune"),
            Some("Dune".to_owned()),
            title_match("Dune", crate::NOT_AVAILABLE),
        );

        assert_eq!(Some(Source::Title), res.ok().map(|r| r.source));
    }

    #[test]
    fn both_lookups_failing_keeps_original_values() {
        let res = resolve(record("123", "Unknown, Vol. 2"), None, None);

        assert_eq!(
            Err(Unresolved {
                label: "Unknown, Vol. 2".to_owned(),
                identifier: "123".to_owned(),
            }),
            res
        );
    }

    #[test]
    fn enrich_classifies_every_record_in_order() {
        let client = RouteClient::default()
            .route("q=isbn%3A0735619670", Some(GOOGLE_BOOK_JSON))
            .route("q=isbn%3A", Some(NO_ITEMS_JSON))
            .route("q=intitle%3ARefactoring", Some(GOOGLE_BOOK_JSON))
            .route("q=intitle%3A", None);

        let lines = vec![
            line("0735619670", "Whatever"),
            line("0000000000", "Nothing Here"),
            line("", "Refactoring"),
        ];

        let mut progress = vec![];
        let session = enrich(&client, lines, |p| {
            if let Progress::Resolved(r) = p {
                progress.push(r.clone());
            }
        });

        assert_eq!(
            vec![
                Resolved {
                    title: "Code Complete".to_owned(),
                    identifier: "0735619670".to_owned(),
                    source: Source::Isbn,
                },
                Resolved {
                    title: "Refactoring".to_owned(),
                    identifier: "0735619670".to_owned(),
                    source: Source::Title,
                },
            ],
            session.resolved
        );
        assert_eq!(
            vec![Unresolved {
                label: "Nothing Here".to_owned(),
                identifier: "0000000000".to_owned(),
            }],
            session.unresolved
        );
        assert_eq!(session.resolved, progress);
        assert_eq!(3, session.len());
    }

    #[test]
    fn enrich_runs_title_lookup_even_after_isbn_hit_and_skips_empty_isbn() {
        let client = RouteClient::default()
            .route("q=isbn%3A", Some(GOOGLE_BOOK_JSON))
            .route("q=intitle%3A", Some(GOOGLE_BOOK_JSON));

        enrich(
            &client,
            vec![line("0735619670", "Code"), line("", "Dune")],
            |_| {},
        );

        assert_eq!(
            vec![
                "https://www.googleapis.com/books/v1/volumes?q=isbn%3A0735619670".to_owned(),
                "https://www.googleapis.com/books/v1/volumes?q=intitle%3ACode".to_owned(),
                "https://www.googleapis.com/books/v1/volumes?q=intitle%3ADune".to_owned(),
            ],
            client.requested()
        );
    }

    #[test]
    fn unreachable_service_leaves_everything_unresolved() {
        let client = RouteClient::default();
        let session = enrich(&client, vec![line("1", "a"), line("2", "b")], |_| {
            panic!("nothing should resolve")
        });

        assert!(session.resolved.is_empty());
        assert_eq!(2, session.unresolved.len());
    }

    #[test]
    fn skipped_lines_are_reported_between_resolved_entries_in_file_order() {
        let client = RouteClient::default()
            .route("q=isbn%3A", Some(GOOGLE_BOOK_JSON))
            .route("q=intitle%3A", None);

        let lines = vec![
            line("1", "first"),
            Line::Invalid("no comma".to_owned()),
            line("2", "second"),
        ];

        let mut notices = vec![];
        let session = enrich(&client, lines, |p| {
            notices.push(match p {
                Progress::Skipped(text) => format!("skipped {text}"),
                Progress::Resolved(r) => format!("resolved {}", r.identifier),
            });
        });

        assert_eq!(
            vec!["resolved 1", "skipped no comma", "resolved 2"],
            notices
        );
        assert_eq!(2, session.len());
        assert_eq!(
            vec![
                "https://www.googleapis.com/books/v1/volumes?q=isbn%3A1".to_owned(),
                "https://www.googleapis.com/books/v1/volumes?q=intitle%3Afirst".to_owned(),
                "https://www.googleapis.com/books/v1/volumes?q=isbn%3A2".to_owned(),
                "https://www.googleapis.com/books/v1/volumes?q=intitle%3Asecond".to_owned(),
            ],
            client.requested()
        );
    }
}
