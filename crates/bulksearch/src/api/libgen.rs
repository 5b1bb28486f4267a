use log::{debug, info};

use super::{url_with_query, Client, Error, ErrorKind};

const LIBGEN_SEARCH_URL: &str = "http://libgen.is/search.php";

/// Text shown by the search page when it has no results.
///
/// There is no structured API behind this, so a change to the page wording will make every
/// search look like a hit.
const NO_RESULTS_MARKER: &str = "No files were found";

/// Searches Library Genesis for the `identifier` and returns the results page URL when the page
/// looks like it lists at least one file.
pub(crate) fn search<C: Client>(client: &C, identifier: &str) -> Option<String> {
    info!("Searching for '{identifier}' on Library Genesis");

    results_page(client, identifier)
        .map_err(|e| debug!("No Library Genesis results for '{identifier}': {e}"))
        .ok()
}

fn results_page<C: Client>(client: &C, identifier: &str) -> Result<String, Error> {
    let url = url_with_query(LIBGEN_SEARCH_URL, "req", identifier)?;
    let body = client.get_text(url.as_str())?;

    if body.contains(NO_RESULTS_MARKER) {
        Err(Error::new(ErrorKind::NoValue, "Search page reported no files"))
    } else {
        Ok(url.into())
    }
}
