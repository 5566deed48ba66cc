//! Document API implementation using reqwest.
//!
//! This adapter implements the `DocumentApi` port against the generator
//! service's JSON endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;
use svetlana_application::{ApplicationError, ApplicationResult, DocumentApi};
use svetlana_domain::{ClientSettings, Document, DocumentMetadata, DomainError};
use url::Url;

const DOCUMENTS_PATH: &str = "/api/documents";
const TEMPLATES_PATH: &str = "/api/templates";

/// Generator API client using reqwest.
///
/// Wraps `reqwest::Client` and resolves every endpoint against the
/// configured base URL.
pub struct ReqwestDocumentApi {
    client: Client,
    base_url: Url,
}

impl ReqwestDocumentApi {
    /// Creates a client from settings.
    ///
    /// Configuration:
    /// - Base URL: `settings.api_base_url`
    /// - Request timeout: `settings.request_timeout_secs`
    /// - User-Agent: "Svetlana/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be
    /// created.
    pub fn new(settings: &ClientSettings) -> ApplicationResult<Self> {
        let base_url = settings.api_base_url()?;
        let client = Client::builder()
            .user_agent(concat!("Svetlana/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Resolves an API path against the base URL.
    ///
    /// The base URL's own path is kept as a prefix, so a service mounted at
    /// `https://host/svetlana` is reached at `https://host/svetlana/api/...`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> ApplicationResult<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }

        base.join(path.trim_start_matches('/'))
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {path}")).into())
    }

    /// URL serving the generated file described by `metadata`.
    ///
    /// The file name becomes a single percent-encoded path segment under the
    /// base path, so `?`, `#` and `/` in it cannot leave `/api/download/`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the base URL cannot carry a path
    /// or the file name is empty, `.` or `..`.
    pub fn download_url(&self, metadata: &DocumentMetadata) -> ApplicationResult<Url> {
        let filename = metadata.doc_filename.as_str();
        if matches!(filename, "" | "." | "..") {
            return Err(DomainError::InvalidUrl(format!("bad file name: {filename:?}")).into());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::InvalidUrl(format!("cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(metadata.download_segments());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApplicationResult<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApplicationError::Decode(e.to_string()))
    }

    /// Maps reqwest errors to `ApplicationError`.
    fn map_error(error: reqwest::Error) -> ApplicationError {
        if error.is_timeout() {
            ApplicationError::Timeout
        } else if error.is_decode() {
            ApplicationError::Decode(error.to_string())
        } else {
            ApplicationError::Http(error.to_string())
        }
    }
}

impl DocumentApi for ReqwestDocumentApi {
    async fn list_documents(&self) -> ApplicationResult<Vec<Document>> {
        self.get_json(DOCUMENTS_PATH).await
    }

    async fn list_templates(&self) -> ApplicationResult<Vec<String>> {
        self.get_json(TEMPLATES_PATH).await
    }
}
