//! Page state and its pure projection into a [`PageView`].

use reqwest::Url;

use crate::category::category_color;
use crate::constants::{CITY_LABEL_PREFIX, ERROR_PREFIX};
use crate::error::PredictionError;
use crate::models::PredictionResponse;

/// Everything the prediction page shows, owned by the controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Result container shell has been revealed
    pub revealed: bool,
    pub loading: bool,
    pub result: Option<PredictionResponse>,
    /// Full message as displayed, prefix included
    pub error: Option<String>,
    /// Generation of the most recent request
    pub generation: u64,
}

impl UiState {
    /// Enters the loading state for a new request and returns its generation
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.result = None;
        self.revealed = true;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn show_result(&mut self, response: PredictionResponse) {
        self.result = Some(response);
    }

    pub fn show_error(&mut self, err: &PredictionError) {
        self.result = None;
        self.error = Some(error_message(err));
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}

/// Text shown for a failed request
pub fn error_message(err: &PredictionError) -> String {
    format!("{}: {}", ERROR_PREFIX, err)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub container_visible: bool,
    pub loader_visible: bool,
    /// Visible iff present
    pub error: Option<String>,
    /// Visible iff present
    pub content: Option<ContentView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub city_label: String,
    pub image_src: String,
    pub aqi_text: String,
    pub category_text: String,
    pub advice_text: String,
    /// Applied to both the AQI and the category text
    pub accent_color: &'static str,
}

/// Maps state to what the page displays. Relative image URLs are resolved
/// against `base_url`, the host the backend serves images from.
pub fn render(state: &UiState, base_url: &Url) -> PageView {
    let content = state.result.as_ref().map(|r| ContentView {
        city_label: format!("{}: {}", CITY_LABEL_PREFIX, r.city),
        image_src: resolve_image_url(base_url, &r.image_url),
        aqi_text: r.predicted_aqi.to_string(),
        category_text: r.category.clone(),
        advice_text: r.health_advice.clone(),
        accent_color: category_color(&r.category),
    });

    PageView {
        container_visible: state.revealed,
        loader_visible: state.loading,
        error: state.error.clone(),
        content,
    }
}

fn resolve_image_url(base_url: &Url, image_url: &str) -> String {
    base_url
        .join(image_url)
        .map(String::from)
        .unwrap_or_else(|_| image_url.to_string())
}
