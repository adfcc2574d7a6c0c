//! HTTP client with security attachment
//!
//! One reqwest-based client drives every operation. Each call site hands
//! over a [`RequestSpec`] whose `secure` flag is fixed at the operation's
//! definition site; when it is set, the current bearer credential is
//! resolved through the [`SecuritySource`] hook and attached as an
//! authorization header before dispatch. A secured request with no
//! credential available is still attempted; the server is authoritative
//! on rejecting it.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Credential resolution hook.
///
/// Supplied by the session layer; the client never reads session state
/// directly. Returning `None` means "no credential right now".
pub trait SecuritySource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Request payload encoding
pub enum Payload<B> {
    None,
    Json(B),
    Form(B),
}

/// One operation against the FastShip API.
///
/// Method, path, query and payload encoding mirror the server contract;
/// `secure` is a static per-operation marker, not runtime data.
pub struct RequestSpec<'a, B = ()> {
    method: Method,
    path: &'a str,
    query: Vec<(&'static str, String)>,
    secure: bool,
    payload: Payload<&'a B>,
}

impl<'a> RequestSpec<'a> {
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            secure: false,
            payload: Payload::None,
        }
    }

    pub fn get(path: &'a str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &'a str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: &'a str) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &'a str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize>(self, body: &'a B) -> RequestSpec<'a, B> {
        RequestSpec {
            method: self.method,
            path: self.path,
            query: self.query,
            secure: self.secure,
            payload: Payload::Json(body),
        }
    }

    /// Attach a urlencoded form body
    pub fn form<B: Serialize>(self, body: &'a B) -> RequestSpec<'a, B> {
        RequestSpec {
            method: self.method,
            path: self.path,
            query: self.query,
            secure: self.secure,
            payload: Payload::Form(body),
        }
    }
}

impl<'a, B> RequestSpec<'a, B> {
    /// Mark the operation as secured (bearer credential required)
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Add a query parameter
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

/// HTTP client for making network requests to the FastShip server
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    security: Option<Arc<dyn SecuritySource>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            security: None,
        })
    }

    /// Install the credential resolution hook
    pub fn with_security_source(mut self, source: Arc<dyn SecuritySource>) -> Self {
        self.security = Some(source);
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.security
            .as_ref()
            .and_then(|source| source.bearer_token())
            .map(|token| format!("Bearer {}", token))
    }

    /// Dispatch one operation and deserialize its typed payload
    pub async fn request<T, B>(&self, spec: RequestSpec<'_, B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut req = self.client.request(spec.method.clone(), &url);

        if !spec.query.is_empty() {
            req = req.query(&spec.query);
        }

        match spec.payload {
            Payload::None => {}
            Payload::Json(body) => req = req.json(body),
            Payload::Form(body) => req = req.form(body),
        }

        if spec.secure {
            if let Some(auth) = self.auth_header() {
                req = req.header(reqwest::header::AUTHORIZATION, auth);
            }
        }

        tracing::debug!(method = %spec.method, path = %spec.path, secure = spec.secure, "Dispatching request");

        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Map the HTTP response onto the uniform error taxonomy
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::NOT_ACCEPTABLE => ClientError::NoCapacity,
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    // Server validation detail passes through verbatim
                    let detail = serde_json::from_str(&text).unwrap_or_default();
                    ClientError::Validation(detail)
                }
                _ => ClientError::Internal {
                    status: status.as_u16(),
                    message: text,
                },
            });
        }

        // Some operations answer with an empty body; a unit or Value
        // target still deserializes from null.
        let text = response.text().await?;
        if text.is_empty() {
            serde_json::from_str("null").map_err(Into::into)
        } else {
            serde_json::from_str(&text).map_err(Into::into)
        }
    }

    /// Server hello, usable as a reachability probe (public)
    pub async fn root(&self) -> ClientResult<serde_json::Value> {
        self.request(RequestSpec::get("/")).await
    }

    // ========== Resource groups ==========

    /// Shipment operations
    pub fn shipment(&self) -> crate::api::ShipmentApi<'_> {
        crate::api::ShipmentApi::new(self)
    }

    /// Seller account operations
    pub fn seller(&self) -> crate::api::SellerApi<'_> {
        crate::api::SellerApi::new(self)
    }

    /// Delivery partner account operations
    pub fn partner(&self) -> crate::api::PartnerApi<'_> {
        crate::api::PartnerApi::new(self)
    }

    /// Resolve a role tag once to its own bound operation set
    pub fn for_role(&self, role: shared::Role) -> crate::api::RoleApi<'_> {
        crate::api::RoleApi::new(self, role)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("security", &self.security.is_some())
            .finish()
    }
}
