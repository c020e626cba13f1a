use reqwest::Url;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::PredictionClient;
use crate::error::PredictionError;
use crate::models::PredictionResponse;
use crate::state::{render, PageView, UiState};

/// Receives the page after every state transition
pub trait PageRenderer: Send + Sync {
    fn render(&self, view: &PageView);
}

/// Logs each page transition
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl PageRenderer for TracingRenderer {
    fn render(&self, view: &PageView) {
        tracing::debug!(
            loader = view.loader_visible,
            error = view.error.as_deref(),
            has_result = view.content.is_some(),
            "page updated"
        );
    }
}

/// What one `request_prediction` call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionReport {
    /// This call's own outcome, loader cleared
    pub view: PageView,
    /// A newer request owned the page when this one resolved, so `view` was
    /// not rendered
    pub superseded: bool,
}

/// Drives one prediction page: loading, fetch, result or error, loaded.
pub struct PredictionController {
    client: PredictionClient,
    state: Mutex<UiState>,
    renderer: Arc<dyn PageRenderer>,
}

impl PredictionController {
    pub fn new(client: PredictionClient, renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            client,
            state: Mutex::new(UiState::default()),
            renderer,
        }
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// Current page without changing anything
    pub async fn view(&self) -> PageView {
        let state = self.state.lock().await;
        render(&state, self.client.base_url())
    }

    /// Requests a prediction for `city` and renders the outcome. Failures end
    /// up on the page, never in the return type.
    ///
    /// Overlapping calls are not serialised; only the most recent call may
    /// update the page. An earlier call still reports its own outcome, marked
    /// as superseded.
    pub async fn request_prediction(&self, city: &str) -> PredictionReport {
        let generation = {
            let mut state = self.state.lock().await;
            let generation = state.begin_request();
            self.publish(&state);
            generation
        };

        tracing::debug!(city, generation, "requesting air quality prediction");
        let outcome = self.client.fetch_prediction(city).await;

        let mut state = self.state.lock().await;
        if !state.is_current(generation) {
            drop(state);
            tracing::debug!(city, generation, "prediction superseded, leaving page untouched");

            let mut own = UiState::default();
            own.begin_request();
            self.apply_outcome(&mut own, city, outcome);
            own.finish_loading();
            return PredictionReport {
                view: render(&own, self.client.base_url()),
                superseded: true,
            };
        }

        self.apply_outcome(&mut state, city, outcome);
        self.publish(&state);

        state.finish_loading();
        PredictionReport {
            view: self.publish(&state),
            superseded: false,
        }
    }

    fn apply_outcome(
        &self,
        state: &mut UiState,
        city: &str,
        outcome: Result<PredictionResponse, PredictionError>,
    ) {
        match outcome {
            Ok(response) => {
                tracing::info!(
                    city,
                    aqi = %response.predicted_aqi,
                    category = %response.category,
                    "prediction received"
                );
                state.show_result(response);
            }
            Err(err) => {
                tracing::error!(city, kind = ?err.kind(), status = ?err.status(), "prediction failed: {}", err);
                state.show_error(&err);
            }
        }
    }

    fn publish(&self, state: &UiState) -> PageView {
        let view = render(state, self.client.base_url());
        self.renderer.render(&view);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(std::sync::Mutex<Vec<PageView>>);

    impl PageRenderer for Recorder {
        fn render(&self, view: &PageView) {
            self.0.lock().unwrap().push(view.clone());
        }
    }

    #[tokio::test]
    async fn transport_failure_clears_loader() {
        // Port is released before the request, so the connect is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{}", addr)).unwrap();
        let recorder = Arc::new(Recorder::default());
        let controller = PredictionController::new(PredictionClient::new(base).unwrap(), recorder.clone());

        let report = controller.request_prediction("chicago").await;
        assert!(!report.superseded);
        let view = report.view;
        assert!(!view.loader_visible);
        assert!(view.content.is_none());
        assert!(view.error.unwrap().starts_with("无法获取预测结果: "));

        let views = recorder.0.lock().unwrap();
        assert_eq!(views.len(), 3);
        assert!(views[0].loader_visible);
        assert!(views[1].loader_visible);
        assert!(!views[2].loader_visible);
    }

    #[tokio::test]
    async fn fresh_controller_renders_empty_page() {
        let base = Url::parse("http://127.0.0.1:5000").unwrap();
        let controller =
            PredictionController::new(PredictionClient::new(base).unwrap(), Arc::new(TracingRenderer));
        let view = controller.view().await;
        assert!(!view.container_visible);
        assert!(view.error.is_none());
    }
}
