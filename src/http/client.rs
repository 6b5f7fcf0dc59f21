//! Thin JSON-over-HTTP client.
//!
//! Every method issues exactly one request and propagates transport or
//! HTTP-status failures unchanged to the caller. There is no retry,
//! timeout policy, or local recovery here.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client wrapping a shared reqwest Client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status()?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }

    /// Performs a POST request with a JSON body and deserializes the JSON response.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}...", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status()?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }

    /// Performs a PUT request with a JSON body and deserializes the JSON response.
    #[tracing::instrument(skip(self, body))]
    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PUT {}...", url);

        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status()?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }

    /// Performs a DELETE request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn delete_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("DELETE {}...", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status()?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }
}
