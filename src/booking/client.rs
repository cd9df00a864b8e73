use crate::booking::models::{BookingReply, BookingRequest};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Response body was null")]
    NullBody,
}

/// Interpret a reply body. Anything that is not JSON, or is JSON `null`,
/// is an error; every other JSON value is a reply.
pub fn parse_reply(body: &str) -> Result<BookingReply, BookingError> {
    let value: Value = serde_json::from_str(body)?;
    BookingReply::from_value(value).ok_or(BookingError::NullBody)
}

/// Anything that can take a booking request to the server.
///
/// Futures are not `Send` so the browser client can implement this.
#[async_trait(?Send)]
pub trait BookingBackend {
    async fn book(&self, request: &BookingRequest) -> Result<BookingReply, BookingError>;
}

#[derive(Clone, Debug)]
pub struct BookingClient {
    client: Client,
    url: String,
}

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

impl BookingClient {
    pub fn new(config: &Config) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Self {
            client,
            url: resolve_url(config.booking_url()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl BookingBackend for BookingClient {
    /// POST the request and parse whatever body comes back.
    ///
    /// The HTTP status code is not consulted: the server reports refusals in
    /// the body, so any parseable reply is handed back to the caller.
    async fn book(&self, request: &BookingRequest) -> Result<BookingReply, BookingError> {
        info!(
            "📡 Booking API: POST {} for {} at {}",
            self.url, request.date, request.time
        );

        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        let reply = parse_reply(&body).map_err(|e| {
            warn!("✗ Booking API returned an unusable body ({}): {}", status, e);
            e
        })?;

        if reply.is_confirmed() {
            info!("✓ Booking confirmed");
        } else {
            warn!(
                "✗ Booking refused with status {} ({})",
                reply.status_text(),
                reply.message_text().unwrap_or_default()
            );
        }

        Ok(reply)
    }
}

/// The browser client needs absolute URLs, so same-origin paths are joined
/// onto the page origin.
#[cfg(target_arch = "wasm32")]
fn resolve_url(url: String) -> String {
    if !url.starts_with('/') {
        return url;
    }
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => format!("{}{}", origin, url),
        None => url,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_url(url: String) -> String {
    if url.starts_with('/') {
        warn!(
            "No booking base URL configured; {} cannot be reached outside a browser",
            url
        );
    }
    url
}
