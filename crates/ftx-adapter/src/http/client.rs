/*
[INPUT]:  HTTP configuration (base URL, timeouts), credentials, typed payloads
[OUTPUT]: Configured reqwest client and the generic signed-request dispatcher
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::http::signature::{Clock, RequestSigner, SystemClock};
use crate::http::wallet::WalletService;
use crate::http::{FtxError, Result};

/// Base URL for the FTX REST API
pub const DEFAULT_BASE_URL: &str = "https://ftx.com/api";
const USER_AGENT: &str = concat!("ftx-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(6),
            connect_timeout: Duration::from_secs(6),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// API key, secret and optional sub-account used to sign private requests
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: String,
    api_secret: Box<[u8]>,
    sub_account: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("sub_account", &self.sub_account)
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into().into_bytes().into_boxed_slice(),
            sub_account: String::new(),
        }
    }

    /// Select a sub-account; the label is form-escaped once here
    pub fn with_sub_account(mut self, label: &str) -> Self {
        self.sub_account = form_urlencoded::byte_serialize(label.as_bytes()).collect();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Escaped sub-account label, `None` when unset
    pub fn sub_account(&self) -> Option<&str> {
        (!self.sub_account.is_empty()).then_some(self.sub_account.as_str())
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.api_secret
    }
}

/// Whether a request is signed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

/// Main HTTP client for the FTX API
#[derive(Debug, Clone)]
pub struct FtxClient {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
    clock: Arc<dyn Clock>,
}

impl FtxClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            http_client,
            base_url,
            credentials: Credentials::default(),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used for signature timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set the API key and secret, keeping any configured sub-account
    pub fn set_auth(&mut self, api_key: impl Into<String>, api_secret: impl Into<String>) {
        let sub_account = std::mem::take(&mut self.credentials.sub_account);
        self.credentials = Credentials::new(api_key, api_secret);
        self.credentials.sub_account = sub_account;
    }

    /// Select a sub-account; an empty label clears it
    pub fn set_sub_account(&mut self, label: &str) {
        let credentials = std::mem::take(&mut self.credentials);
        self.credentials = credentials.with_sub_account(label);
    }

    /// Replace the whole credential set
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wallet endpoints
    pub fn wallet(&self) -> WalletService<'_> {
        WalletService::new(self)
    }

    /// Build the absolute URL for an endpoint path such as `/wallet/coins`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Unsigned request decoded into `O`
    pub async fn do_public<I, O>(&self, method: Method, url: Url, input: Option<&I>) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.execute(method, url, input, Access::Public).await
    }

    /// Signed request decoded into `O`
    pub async fn do_private<I, O>(&self, method: Method, url: Url, input: Option<&I>) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.execute(method, url, input, Access::Private).await
    }

    /// Run one request and decode a 2xx body into `O`.
    ///
    /// The input is serialized before signing so the signature covers the
    /// exact bytes sent. Non-2xx responses become [`FtxError::Api`] with the
    /// raw body; transport failures stay [`FtxError::Http`].
    pub async fn execute<I, O>(
        &self,
        method: Method,
        url: Url,
        input: Option<&I>,
        access: Access,
    ) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let body = self.round_trip(method, url, input, access).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Run one request and ignore the body of a 2xx response
    pub async fn execute_discard<I>(
        &self,
        method: Method,
        url: Url,
        input: Option<&I>,
        access: Access,
    ) -> Result<()>
    where
        I: Serialize + ?Sized,
    {
        self.round_trip(method, url, input, access).await?;
        Ok(())
    }

    /// Build the request and, when private, attach auth headers
    pub(crate) fn build_request<I>(
        &self,
        method: Method,
        url: Url,
        input: Option<&I>,
        access: Access,
    ) -> Result<Request>
    where
        I: Serialize + ?Sized,
    {
        let mut builder = self.http_client.request(method, url);
        if let Some(input) = input {
            let body = serde_json::to_vec(input)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }
        let mut request = builder.build()?;

        if access == Access::Private {
            let path_with_query = match request.url().query() {
                Some(query) => format!("{}?{}", request.url().path(), query),
                None => request.url().path().to_string(),
            };
            let body = request.body().and_then(reqwest::Body::as_bytes);
            let signer = RequestSigner::with_clock(self.credentials.clone(), self.clock.clone());
            let headers = signer.sign(request.method().as_str(), &path_with_query, body);
            headers.apply(request.headers_mut())?;
        }

        Ok(request)
    }

    async fn round_trip<I>(
        &self,
        method: Method,
        url: Url,
        input: Option<&I>,
        access: Access,
    ) -> Result<Vec<u8>>
    where
        I: Serialize + ?Sized,
    {
        let request = self.build_request(method, url, input, access)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%method, %path, status = status.as_u16(), bytes = body.len(), "ftx response");

        if !status.is_success() {
            warn!(%method, %path, status = status.as_u16(), "ftx request rejected");
            return Err(FtxError::api_error(
                status,
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok(body.to_vec())
    }
}
