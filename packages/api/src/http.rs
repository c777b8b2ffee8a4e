//! # HTTP collaborator seam
//!
//! Services never talk to a concrete HTTP library. They build an [`ApiRequest`]
//! and hand it to an [`HttpClient`]; the response comes back untouched as an
//! [`ApiResponse`]. [`crate::ReqwestClient`] is the production implementation,
//! `testing::MockHttp` the recording fake.

use std::collections::BTreeMap;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Header name to value.
pub type Headers = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A single file sent as `multipart/form-data`.
#[derive(Clone, Debug, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(FilePart),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Body,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: Body::Empty,
        }
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Precondition(e.to_string()))?;
        self.body = Body::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = Body::Multipart(part);
        self
    }
}

/// The raw response: status code and body bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response whose body is `value` encoded as JSON.
    pub fn with_json(status: u16, value: &impl Serialize) -> Self {
        Self::new(status, serde_json::to_vec(value).unwrap_or_default())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// The external request/response library.
pub trait HttpClient {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Send `request` and reject non-2xx responses with [`ApiError::Status`].
pub(crate) async fn execute<H: HttpClient>(
    http: &H,
    request: ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let method = request.method;
    let url = request.url.clone();
    tracing::debug!("{:?} {}", method, url);

    let response = http.send(request).await?;
    if response.is_success() {
        Ok(response)
    } else {
        tracing::debug!("{:?} {} -> {}", method, url, response.status);
        Err(ApiError::Status {
            status: response.status,
            body: response.text(),
        })
    }
}

/// `base` with `pairs` appended as a query string.
pub(crate) fn with_query(base: &str, pairs: &[(&str, String)]) -> Result<String, ApiError> {
    if pairs.is_empty() {
        return Ok(base.to_string());
    }
    reqwest::Url::parse_with_params(base, pairs)
        .map(String::from)
        .map_err(|e| ApiError::Precondition(format!("Invalid URL {base}: {e}")))
}
