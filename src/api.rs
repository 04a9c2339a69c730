use serde::Deserialize;

use crate::config::Credentials;
use crate::errors::SstvError;

pub const AUTH_BASE_URL: &str = "http://auth.smoothstreams.tv/hash_api.php";
pub const SITE_ID: &str = "viewstvn";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Opaque signed token (`wmsAuthSign`) issued by the auth endpoint.
/// Embedded verbatim into every stream URL, never printed.
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Deserialize)]
struct HashResponse {
    hash: Option<String>,
}

/// Extract the token from an auth response body. A missing or empty
/// `hash` means the credentials were not accepted.
pub fn token_from_body(body: &str) -> Result<AuthToken, SstvError> {
    let response: HashResponse =
        serde_json::from_str(body).map_err(|e| SstvError::ParseError(e.to_string()))?;
    match response.hash {
        Some(hash) if !hash.is_empty() => Ok(AuthToken(hash)),
        _ => Err(SstvError::AuthenticationFailed(
            "no token in server response".to_string(),
        )),
    }
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new() -> Result<Self, SstvError> {
        Self::with_base_url(AUTH_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, SstvError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    /// Request a signed token for the account. Both failure modes are
    /// fatal to the pipeline; there is no retry.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, SstvError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("site", SITE_ID),
            ])
            .send()
            .await?;
        let body = response.text().await?;
        token_from_body(&body)
    }
}
