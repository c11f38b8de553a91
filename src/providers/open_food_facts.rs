use crate::config::{AppConfig, DEFAULT_PRODUCT_API_BASE};
use crate::error::{FridgeError, Result};
use crate::model::ProductRecord;
use crate::providers::{ProductLookup, USER_AGENT};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Open Food Facts product API (`{base}/{barcode}.json`)
pub struct OpenFoodFactsClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<ProductRecord>,
}

impl OpenFoodFactsClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_base_url(config.product_api_base.clone(), Some(config.timeout()))
    }

    pub fn with_base_url(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(OpenFoodFactsClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        OpenFoodFactsClient {
            client: Client::new(),
            base_url: DEFAULT_PRODUCT_API_BASE.to_string(),
        }
    }
}

#[async_trait]
impl ProductLookup for OpenFoodFactsClient {
    fn provider_name(&self) -> &str {
        "openfoodfacts"
    }

    async fn lookup(&self, barcode: &str) -> Result<Option<ProductRecord>> {
        let url = format!("{}/{}.json", self.base_url, barcode);
        debug!("Looking up product: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FridgeError::UpstreamStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        let payload: ProductResponse = serde_json::from_str(&body)?;

        if payload.status != 1 {
            debug!("Product {} not found (status {})", barcode, payload.status);
            return Ok(None);
        }
        Ok(payload.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_lookup_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/5000112637922.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "status": 1,
                    "product": {
                        "product_name": "Coca-Cola",
                        "brands": "Coca-Cola, The Coca-Cola Company",
                        "categories_tags": ["en:beverages", "en:sodas"],
                        "ingredients_text": null
                    }
                }"#,
            )
            .create_async()
            .await;

        let client = OpenFoodFactsClient::with_base_url(server.url(), None).unwrap();
        let product = client.lookup("5000112637922").await.unwrap().unwrap();
        assert_eq!(product.product_name, "Coca-Cola");
        assert_eq!(product.categories_tags.len(), 2);
        assert!(product.ingredients_text.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/012345678905.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": 0, "status_verbose": "product not found"}"#)
            .create_async()
            .await;

        let client = OpenFoodFactsClient::with_base_url(server.url(), None).unwrap();
        let result = client.lookup("012345678905").await.unwrap();
        assert!(result.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_http_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/12345678.json")
            .with_status(503)
            .create_async()
            .await;

        let client = OpenFoodFactsClient::with_base_url(server.url(), None).unwrap();
        let result = client.lookup("12345678").await;
        assert!(matches!(result, Err(FridgeError::UpstreamStatus(503))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/12345678.json")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = OpenFoodFactsClient::with_base_url(server.url(), None).unwrap();
        let result = client.lookup("12345678").await;
        assert!(matches!(result, Err(FridgeError::Parse(_))));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(OpenFoodFactsClient::default().provider_name(), "openfoodfacts");
    }
}
