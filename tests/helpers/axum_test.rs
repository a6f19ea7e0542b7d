// ABOUTME: In-process request harness for the triage router
// ABOUTME: Drives a Router through tower's oneshot and buffers the whole response

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;

const JSON: &str = "application/json";

/// Request under construction
pub struct AxumTestRequest {
    builder: axum::http::request::Builder,
    body: Body,
}

impl AxumTestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    /// Serialize `data` as the body
    pub fn json<T: Serialize>(self, data: &T) -> Self {
        self.raw_json(&serde_json::to_string(data).unwrap())
    }

    /// Send `body` as-is under a JSON content type
    pub fn raw_json(mut self, body: &str) -> Self {
        self.builder = self.builder.header(header::CONTENT_TYPE, JSON);
        self.body = Body::from(body.to_owned());
        self
    }

    pub async fn send(self, app: Router) -> AxumTestResponse {
        let response = app
            .oneshot(self.builder.body(self.body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        AxumTestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Buffered response
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl AxumTestResponse {
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response body is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(self) -> String {
        String::from_utf8(self.body).unwrap()
    }
}
