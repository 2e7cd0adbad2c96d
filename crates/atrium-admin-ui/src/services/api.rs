//! HTTP client for the admin REST API.
//!
//! # Design
//! - One client per app boot; the bearer token lives behind interior
//!   mutability so sign-in never rebuilds the client.
//! - Non-2xx responses become typed `ApiError`s carrying the backend's own
//!   message when the body provides one, so validation text reaches the
//!   screen verbatim.

use crate::core::error::ApiError;
use crate::core::logic::{bearer, list_path, record_path};
use atrium_api_models::{
    DetailEnvelope, ErrorBody, ListEnvelope, ListQuery, LoginRequest, LoginResponse, Record,
};
use gloo_net::http::{Request, Response};
use std::cell::RefCell;

/// Client for `/admin/login`, `/admin/logout`, and `/admin/v1/*` resources.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
        }
    }

    /// Replace the bearer token used by subsequent requests.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    /// Current bearer token, cloned so the caller can hold it across local
    /// session teardown.
    pub(crate) fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) => request.header("Authorization", &bearer(token)),
            None => request,
        }
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let body = response.json::<ErrorBody>().await.ok();
        Err(ApiError::from_status(response.status(), body.as_ref()))
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(self.authorize(Request::get(&self.url(path)))).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Exchange credentials for a session token.
    pub(crate) async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = Request::post(&self.url("/admin/login"))
            .json(&body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = self.send(request).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Invalidate the session server-side. Takes the token explicitly: the
    /// caller clears local state before this future is first polled, so the
    /// client's own token slot is already empty by then. Callers treat
    /// failure as best-effort.
    pub(crate) async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.send(Request::post(&self.url("/admin/logout")).header("Authorization", &bearer(token)))
            .await?;
        Ok(())
    }

    /// Fetch one page of a resource collection.
    pub(crate) async fn list(
        &self,
        api_path: &str,
        query: &ListQuery,
    ) -> Result<ListEnvelope, ApiError> {
        self.get_json(&list_path(api_path, query)).await
    }

    /// Fetch a single record by id.
    pub(crate) async fn get_by_id(&self, api_path: &str, id: &str) -> Result<Record, ApiError> {
        let envelope: DetailEnvelope = self.get_json(&record_path(api_path, id)).await?;
        Ok(envelope.data)
    }

    /// Create a record from the submitted draft.
    pub(crate) async fn create(&self, api_path: &str, draft: &Record) -> Result<(), ApiError> {
        let request = Request::post(&self.url(&format!("/admin/v1/{api_path}")))
            .json(draft)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        self.send(self.authorize(request)).await?;
        Ok(())
    }

    /// Replace a record with the submitted draft.
    pub(crate) async fn update(
        &self,
        api_path: &str,
        id: &str,
        draft: &Record,
    ) -> Result<(), ApiError> {
        let request = Request::put(&self.url(&record_path(api_path, id)))
            .json(draft)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        self.send(self.authorize(request)).await?;
        Ok(())
    }

    /// Delete a record by id.
    pub(crate) async fn delete(&self, api_path: &str, id: &str) -> Result<(), ApiError> {
        self.send(self.authorize(Request::delete(&self.url(&record_path(api_path, id)))))
            .await?;
        Ok(())
    }
}
