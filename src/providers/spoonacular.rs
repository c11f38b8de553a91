use crate::config::AppConfig;
use crate::error::{FridgeError, Result};
use crate::model::RecipeCandidate;
use crate::providers::{RecipeSource, USER_AGENT};
use crate::recipes::QuerySpec;
use async_trait::async_trait;
use config::ConfigError;
use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RecipeCandidate>,
}

impl SpoonacularClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        // Try config first, then fall back to environment variable
        let api_key = config.recipe_api_key().ok_or_else(|| {
            FridgeError::Config(ConfigError::NotFound(
                "recipe_api_key (or SPOONACULAR_API_KEY)".to_string(),
            ))
        })?;

        Self::with_base_url(api_key, config.recipe_api_base.clone(), Some(config.timeout()))
    }

    pub fn with_base_url(api_key: String, base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FridgeError::UpstreamStatus(response.status().as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(&self, query: &QuerySpec) -> Result<Vec<RecipeCandidate>> {
        let url = query.url(&self.base_url, &self.api_key);
        debug!("Searching recipes ({})", query.mode.name());

        let body = self.get(&url).await?.text().await?;
        let payload: SearchResponse = serde_json::from_str(&body)?;
        debug!("Recipe search returned {} results", payload.results.len());
        Ok(payload.results)
    }

    async fn details(&self, id: i64) -> Result<RecipeCandidate> {
        let url = format!(
            "{}/{}/information?includeNutrition=false&apiKey={}",
            self.base_url,
            id,
            urlencoding::encode(&self.api_key)
        );
        debug!("Fetching recipe {}", id);

        let body = self.get(&url).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
