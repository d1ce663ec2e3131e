// Shared resource client: one configured reqwest::Client plus a base URL
// scoped to a single resource path, with a single error-normalization
// path. Every accessor (v2 and v3) composes this instead of duplicating
// constructor + error handler.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;

/// Characters escaped the way JavaScript's `encodeURIComponent` does:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query-parameter value, `encodeURIComponent` style.
///
/// A space becomes `%20`, never `+`.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

// ── Error response shape from the Hyperspeed API ─────────────────────

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

// ── Client ───────────────────────────────────────────────────────────

/// HTTP client scoped to one resource sub-path (e.g. `…/v2/collections`).
///
/// Holds a clone of the facade's `reqwest::Client` (default headers
/// already attached, connection pool shared), so it is cheap to clone
/// and safe to use concurrently.
#[derive(Debug, Clone)]
pub(crate) struct ResourceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ResourceClient {
    /// Scope `http` to `<base>/<resource>`.
    pub(crate) fn new(http: reqwest::Client, base: &str, resource: &str) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("{}/{resource}", base.trim_end_matches('/')))?;
        Ok(Self { http, base_url })
    }

    /// Join a relative path onto the scoped base URL. An empty path
    /// addresses the resource root itself.
    fn url(&self, path: &str) -> Result<Url, Error> {
        if path.is_empty() {
            return Ok(self.base_url.clone());
        }
        let joined = Url::parse(&format!("{}/{path}", self.base_url.as_str()))?;
        Ok(joined)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    /// GET with a caller-assembled query string attached verbatim.
    ///
    /// Used where a parameter value is already percent-encoded and must
    /// not be encoded a second time (the `q` search term).
    pub(crate) async fn get_with_raw_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, Error> {
        let mut url = self.url(path)?;
        url.set_query(Some(query));
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // Truncate on a char boundary; a byte slice can split a
                // multi-byte character and panic.
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Normalize a non-2xx response.
    ///
    /// A body carrying `{ "error": … }` becomes `Error::Api` with the
    /// server's message verbatim; anything else falls back to the
    /// status-derived transport error.
    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let status_err = resp.error_for_status_ref().err();
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(body) = serde_json::from_str::<ErrorBody>(&raw) {
            return Error::Api {
                message: body.error,
                status: status.as_u16(),
            };
        }

        match status_err {
            Some(e) => Error::Transport(e),
            None => Error::Api {
                message: status.to_string(),
                status: status.as_u16(),
            },
        }
    }
}
