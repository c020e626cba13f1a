use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::env;

use crate::constants::DEFAULT_API_BASE;

pub const API_BASE_ENV: &str = "AQI_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let raw = env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::from_base_url(&raw)
    }

    pub fn from_base_url(raw: &str) -> Result<Self> {
        let api_base_url = Url::parse(raw.trim())
            .with_context(|| format!("{} is not a valid URL: {:?}", API_BASE_ENV, raw))?;
        if api_base_url.cannot_be_a_base() {
            bail!("{} must be a hierarchical URL, got {:?}", API_BASE_ENV, raw);
        }

        Ok(Self { api_base_url })
    }
}
