//! Document store endpoint

use heapless::String;

use super::{required, required_token, ConfigError, RawParams};

/// Maximum base URL length
pub const MAX_URL_LEN: usize = 128;

/// Maximum credential length
pub const MAX_SECRET_LEN: usize = 64;

/// Remote document store endpoint and credential
///
/// The credential is carried out-of-band by the store adapter; it never
/// appears in documents.
#[derive(Clone)]
pub struct StoreParams {
    /// Base URL, without trailing slash
    pub url: String<MAX_URL_LEN>,
    /// Database secret
    pub secret: String<MAX_SECRET_LEN>,
}

/// URL-unreserved characters; the secret is sent as a query parameter
fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

impl StoreParams {
    pub(crate) fn load(raw: &RawParams<'_>) -> Result<Self, ConfigError> {
        let url = raw.store_url.trim().trim_end_matches('/');
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid("STORE_URL"));
        }

        Ok(Self {
            url: required("STORE_URL", url)?,
            secret: required_token("STORE_SECRET", raw.store_secret, is_secret_char)?,
        })
    }
}

impl core::fmt::Debug for StoreParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StoreParams")
            .field("url", &self.url)
            .field("secret", &"<hidden>")
            .finish()
    }
}
