use std::time::Duration;

use log::trace;
use reqwest::{blocking::Response, StatusCode, Url};
use serde::de::DeserializeOwned;

pub(crate) mod google_books;
pub(crate) mod libgen;

/// The blocking HTTP seam used by every remote lookup.
///
/// Implementations only ever hand back the body of a `200 OK` response, anything else is an
/// [`Error`] which callers downgrade to "not found".
pub trait Client {
    /// Returns the body of the response as text, which may be empty.
    ///
    /// # Errors
    /// When the request fails or the status is not `200 OK`.
    fn get_text(&self, url: &str) -> Result<String, Error>;

    /// Returns the body of the response deserialized from JSON.
    ///
    /// # Errors
    /// When the request fails, the status is not `200 OK` or the body is not valid JSON for `T`.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_text(&self, url: &str) -> Result<String, Error> {
        send_expecting_ok(self, url)
            .and_then(|r| r.text().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }

    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        send_expecting_ok(self, url)
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

fn send_expecting_ok(client: &reqwest::blocking::Client, url: &str) -> Result<Response, Error> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

    let status = resp.status();
    trace!("'{url}' responded with {status}");

    if status == StatusCode::OK {
        Ok(resp)
    } else {
        Err(Error::new(
            ErrorKind::Status,
            format!("'{url}' responded with {status}"),
        ))
    }
}

/// Builds the blocking client shared by all lookups in a run.
///
/// A `timeout` of `None` leaves requests unbounded.
///
/// # Errors
/// When the underlying TLS backend cannot be initialised.
pub fn http_client(timeout: Option<Duration>) -> Result<reqwest::blocking::Client, Error> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::wrap(ErrorKind::IO, e))
}

/// Joins `base` and a single query parameter, percent-encoding the value.
pub(crate) fn url_with_query(base: &str, key: &str, value: &str) -> Result<Url, Error> {
    Url::parse_with_params(base, &[(key, value)]).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, EmptyTextProducer, MockClient, NetworkErrorProducer, Producer,
    RouteClient, URL_SINK,
};

use crate::{Error, ErrorKind};
