//! HTTP client for the expenses service.
//!
//! This module wraps `reqwest` with the fixed request headers the service
//! expects and turns every unsuccessful outcome into a `LoadError`.

use super::LoadError;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

/// Header identifying the requester to the expenses service.
///
const USERNAME_HEADER: &str = "Username";

/// Makes requests to the expenses service and tries to conform response data
/// to the given type.
///
pub struct Client {
    pub(crate) endpoint: String,
    pub(crate) username: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given endpoint URL and requester name.
    ///
    pub fn new(endpoint: &str, username: &str) -> Self {
        Client {
            endpoint: endpoint.to_owned(),
            username: username.to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Issue a GET to the endpoint and deserialize the body or return error.
    ///
    pub async fn get<T: DeserializeOwned>(&self) -> Result<T, LoadError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(USERNAME_HEADER, &self.username)
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            return Err(LoadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                log::debug!(
                    "Undecodable response body: {}",
                    String::from_utf8_lossy(&bytes)
                );
                Err(e.into())
            }
        }
    }
}
