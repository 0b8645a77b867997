//! HTTP collaborators.
//!
//! Pages that need remote data go through an [`HttpClient`]. The only service
//! is [`UserService`], a `GET /User` lookup.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default API root.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Errors surfaced to callers of the HTTP collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),
	/// The server answered with a non-2xx status.
	#[error("unexpected status {status} for {url}")]
	Status { status: u16, url: String },
	/// The body could not be decoded into the expected type.
	#[error("failed to decode response: {0}")]
	Decode(#[from] serde_json::Error),
	/// Base URL or path did not form a valid URL.
	#[error("invalid url: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

/// A raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub url: String,
	pub body: String,
}

impl HttpResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Decodes the body, or fails with [`ApiError::Status`] on a non-2xx
	/// status.
	pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
		if !self.is_success() {
			return Err(ApiError::Status {
				status: self.status,
				url: self.url.clone(),
			});
		}
		Ok(serde_json::from_str(&self.body)?)
	}
}

/// Request-by-path HTTP client.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HttpClient {
	async fn get(&self, path: &str) -> Result<HttpResponse, ApiError>;
}

/// [`HttpClient`] over `reqwest`, rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
	base: Url,
	client: reqwest::Client,
}

impl ReqwestClient {
	pub fn new(base_url: &str) -> Result<Self, ApiError> {
		Self::with_client(base_url, reqwest::Client::new())
	}

	pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, ApiError> {
		Ok(Self {
			base: directory_url(base_url)?,
			client,
		})
	}

	/// `path` appended to the base URL's path.
	pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
		Ok(self.base.join(path.trim_start_matches('/'))?)
	}
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HttpClient for ReqwestClient {
	async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
		let url = self.url_for(path)?;
		tracing::debug!(%url, "GET");

		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;

		Ok(HttpResponse {
			status,
			url: url.to_string(),
			body,
		})
	}
}

// Joining onto `http://host/api` would replace `api`; a trailing slash makes
// the base a directory.
fn directory_url(base_url: &str) -> Result<Url, url::ParseError> {
	let mut url = Url::parse(base_url)?;
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	Ok(url)
}

/// A site user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: u64,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
}

/// User lookups.
#[derive(Debug, Clone)]
pub struct UserService<C> {
	client: C,
}

impl<C: HttpClient> UserService<C> {
	pub fn new(client: C) -> Self {
		Self { client }
	}

	/// `GET /User`.
	pub async fn get_user(&self) -> Result<User, ApiError> {
		self.client.get("/User").await?.json()
	}
}
