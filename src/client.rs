use anyhow::{Context, Result};
use reqwest::{Client, Url};

use crate::constants::{PREDICT_PATH, USER_AGENT};
use crate::error::PredictionError;
use crate::models::PredictionResponse;

/// HTTP access to the prediction backend
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: Url,
}

impl PredictionClient {
    /// Creates a client for the backend rooted at `base_url`
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/api/predict/<city>` with the city percent-encoded as one segment
    pub fn predict_url(&self, city: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(PREDICT_PATH).push(city);
        }
        url
    }

    /// Issues the single prediction request and interprets the reply
    pub async fn fetch_prediction(&self, city: &str) -> Result<PredictionResponse, PredictionError> {
        let url = self.predict_url(city);
        tracing::debug!(%url, "requesting prediction");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PredictionError::from_error_body(status.as_u16(), &body));
        }

        serde_json::from_str::<PredictionResponse>(&body)
            .map_err(|e| PredictionError::MalformedResponse(e.to_string()))
    }
}
