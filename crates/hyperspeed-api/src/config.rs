// Caller-supplied configuration for the Hyperspeed facades.
//
// No environment variables, no config files: everything the client needs
// is passed into the constructor.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;
use crate::transport::TransportConfig;

const V2_BASE_URL: &str = "https://hyperspeedcms.com/api/v2";
const V3_BASE_URL: &str = "https://hyperspeedcms.com/api/v3";

/// Which Hyperspeed API surface a facade talks to.
///
/// v2 is the REST-style surface; v3 forwards Prisma-like query
/// descriptions. v3 is the default in current Hyperspeed deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    V2,
    #[default]
    V3,
}

/// Configuration for a Hyperspeed client.
///
/// Built with [`HyperspeedConfig::new`] plus the consuming `with_*`
/// setters; immutable once handed to a facade constructor.
#[derive(Debug, Clone)]
pub struct HyperspeedConfig {
    /// API key, sent as `Authorization: Bearer <key>`.
    pub api_key: SecretString,
    /// Organization (tenant) id scoping every call.
    pub organization: u64,
    /// Overrides the version-specific default base URL entirely.
    pub base_url: Option<String>,
    /// API version [`Hyperspeed::new`](crate::Hyperspeed::new) dispatches on.
    pub version: ApiVersion,
    pub transport: TransportConfig,
}

impl HyperspeedConfig {
    pub fn new(api_key: impl Into<SecretString>, organization: u64) -> Self {
        Self {
            api_key: api_key.into(),
            organization,
            base_url: None,
            version: ApiVersion::default(),
            transport: TransportConfig::default(),
        }
    }

    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Point the client at a different server root (e.g. a staging
    /// deployment or a mock server in tests). Replaces the entire
    /// version-specific default, path included.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }

    /// The effective base URL for `version`: the caller's override if
    /// set, else the hosted default.
    pub(crate) fn base_url_for(&self, version: ApiVersion) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            match version {
                ApiVersion::V2 => V2_BASE_URL,
                ApiVersion::V3 => V3_BASE_URL,
            }
            .to_owned()
        })
    }

    /// The three headers every Hyperspeed request carries.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        let bearer = format!("Bearer {}", self.api_key.expose_secret());
        let mut auth_value = HeaderValue::from_str(&bearer).map_err(|e| Error::InvalidApiKey {
            message: format!("invalid Authorization header value: {e}"),
        })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let org_value = HeaderValue::from_str(&self.organization.to_string()).map_err(|e| {
            Error::InvalidApiKey {
                message: format!("invalid Organization-Id header value: {e}"),
            }
        })?;
        headers.insert("Organization-Id", org_value);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}
