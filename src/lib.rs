pub mod category;
pub mod client;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;
pub mod state;

pub use client::PredictionClient;
pub use config::AppConfig;
pub use controller::{PageRenderer, PredictionController, PredictionReport, TracingRenderer};
pub use error::{ErrorKind, PredictionError};
pub use models::{AqiValue, ErrorResponse, PredictionResponse};
pub use service::AirQuality;
pub use state::{ContentView, PageView, UiState};
