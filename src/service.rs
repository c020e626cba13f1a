use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::PredictionClient;
use crate::config::AppConfig;
use crate::controller::{PageRenderer, PredictionController, TracingRenderer};
use crate::formatters::format_page;
use crate::models::GetPredictionRequest;

/// MCP service exposing the air quality prediction page as a tool
#[derive(Clone)]
pub struct AirQuality {
    controller: Arc<PredictionController>,
    tool_router: ToolRouter<Self>,
}

impl AirQuality {
    /// Creates a service talking to the configured prediction backend
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_renderer(config, Arc::new(TracingRenderer))
    }

    pub fn with_renderer(config: &AppConfig, renderer: Arc<dyn PageRenderer>) -> Result<Self> {
        let client = PredictionClient::new(config.api_base_url.clone())?;

        Ok(Self {
            controller: Arc::new(PredictionController::new(client, renderer)),
            tool_router: Self::tool_router(),
        })
    }

    pub fn controller(&self) -> &PredictionController {
        &self.controller
    }
}

#[tool_handler]
impl ServerHandler for AirQuality {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-aqi-client".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Air quality prediction client. Asks the AQI prediction backend for a city's \
                next-day forecast and shows the AQI, its category and health advice."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl AirQuality {
    /// Requests the predicted air quality for a city
    #[tool(description = "Get the predicted air quality index for a city. Provide the city identifier offered by the backend (e.g., 'chicago'). Returns the AQI, its category with display colour, health advice and an illustrative image URL.")]
    async fn predict_air_quality(
        &self,
        Parameters(request): Parameters<GetPredictionRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting air quality prediction for city: {}", request.city);

        let report = self.controller.request_prediction(&request.city).await;
        if report.superseded {
            tracing::info!("Prediction for {} was superseded by a newer request", request.city);
        }
        let view = report.view;
        let formatted = format_page(&view);

        if view.error.is_some() {
            Ok(CallToolResult::error(vec![Content::text(formatted)]))
        } else {
            Ok(CallToolResult::success(vec![Content::text(formatted)]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
    use serde_json::json;
    use std::time::Duration;

    async fn mock_predict(Path(city): Path<String>) -> axum::response::Response {
        let (delay_ms, name, category) = match city.as_str() {
            "chicago" => (0, "Chicago", "Moderate"),
            "first" => (200, "First", "Good"),
            "second" => (600, "Second", "Hazardous"),
            _ => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "city not found" })),
                )
                    .into_response()
            }
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Json(json!({
            "city": name,
            "predicted_aqi": 57,
            "category": category,
            "health_advice": "Limit prolonged outdoor exertion.",
            "image_url": "/images/moderate.png"
        }))
        .into_response()
    }

    async fn service() -> AirQuality {
        let app = Router::new().route("/api/predict/{city}", get(mock_predict));
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = AppConfig::from_base_url(&format!("http://{}", addr)).unwrap();
        AirQuality::new(&config).unwrap()
    }

    async fn call(service: &AirQuality, city: &str) -> CallToolResult {
        service
            .predict_air_quality(Parameters(GetPredictionRequest {
                city: city.to_string(),
            }))
            .await
            .unwrap()
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text())
            .map(|t| t.text.as_str())
            .collect()
    }

    #[tokio::test]
    async fn successful_prediction_is_a_tool_success() {
        let service = service().await;

        let result = call(&service, "chicago").await;

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.contains("城市: Chicago\n"), "{text}");
        assert!(text.contains("  AQI: 57\n"), "{text}");
        assert!(text.contains("  Category: Moderate\n"), "{text}");
        assert!(text.contains("  Color: #ffc107\n"), "{text}");
        assert!(!text.contains("Loading"), "{text}");
    }

    #[tokio::test]
    async fn unknown_city_is_a_tool_error() {
        let service = service().await;

        let result = call(&service, "atlantis").await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "无法获取预测结果: city not found\n");
    }

    #[tokio::test]
    async fn overtaken_call_still_answers_for_its_city() {
        let service = service().await;

        // "first" resolves while "second" is still pending.
        let (first, second) = tokio::join!(call(&service, "first"), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            call(&service, "second").await
        });

        assert_eq!(first.is_error, Some(false));
        let first_text = text_of(&first);
        assert!(first_text.contains("城市: First\n"), "{first_text}");
        assert!(first_text.contains("  Color: #28a745\n"), "{first_text}");
        assert!(!first_text.contains("Loading"), "{first_text}");

        assert_eq!(second.is_error, Some(false));
        assert!(text_of(&second).contains("城市: Second\n"));

        let page = service.controller().view().await;
        assert!(!page.loader_visible);
        assert_eq!(page.content.unwrap().city_label, "城市: Second");
    }
}
