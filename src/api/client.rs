//! The single HTTP client every resource group goes through.

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::ApiError;
use crate::config::ApiConfig;
use crate::session::Session;

/// Storefront API gateway.
///
/// Cloning is cheap: the underlying connection pool and the session's store are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(http, &config.base_url, session))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str, session: Session) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path such as `/product/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Starts a request and attaches `Authorization: Bearer <token>` whenever a token
    /// is stored. Validity is deliberately not checked here; the service rejects
    /// stale tokens itself.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(Method::GET, path, |b| b).await?;
        read_json(response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, |b| b.json(body)).await?;
        read_json(response).await
    }

    /// Like [`ApiClient::send_json`] but the response body is ignored.
    pub(crate) async fn send_json_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, |b| b.json(body)).await?;
        Ok(())
    }

    pub(crate) async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<(), ApiError> {
        self.dispatch(method, path, |b| b.multipart(form)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(Method::DELETE, path, |b| b).await?;
        Ok(())
    }

    /// Sends once and maps non-success statuses to [`ApiError::Status`].
    /// No retries and no timeout beyond the transport's default.
    async fn dispatch<F>(&self, method: Method, path: &str, prepare: F) -> Result<Response, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        debug!("{} {}", method, path);
        let response = prepare(self.request(method.clone(), path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("{} {} failed with status {}", method, path, status);
        Err(ApiError::from_response(status, &body))
    }
}

/// Decodes a JSON body. An empty body reads as JSON `null`, which suits optional results.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    let slice: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    serde_json::from_slice(slice).map_err(ApiError::Decode)
}
