//! Dashboard HTTP server and routing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Form, State, rejection::FormRejection},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use rust_embed::RustEmbed;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use house_price_config::DashboardConfig;
use house_price_protocols::PredictionRequest;

use crate::client::{ApiClient, ApiReply};
use crate::error::DashboardError;
use crate::form::PredictionForm;
use crate::render::{Outcome, render_page};
use crate::view::PredictionView;

/// Embedded static assets.
#[derive(RustEmbed)]
#[folder = "src/static/"]
struct StaticAssets;

/// Shared dashboard state.
pub struct DashboardState {
    client: ApiClient,
}

impl DashboardState {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Send one request and turn whatever happens into a renderable outcome.
    pub async fn submit(&self, request: &PredictionRequest) -> Outcome {
        match self.client.predict(request).await {
            Ok(ApiReply::Success(value)) => Outcome::Prediction(PredictionView::from_value(&value)),
            Ok(ApiReply::Malformed(body)) => Outcome::Malformed(body),
            Ok(ApiReply::Failure { status, body }) => Outcome::ApiError { status, body },
            Err(e) => Outcome::from(e),
        }
    }
}

/// Create the Axum router for the dashboard.
pub fn create_router(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(serve_form).post(submit_form))
        .route("/style.css", get(serve_css))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the empty form with default values.
async fn serve_form(State(state): State<Arc<DashboardState>>) -> Html<String> {
    Html(render_page(
        &state.client.predict_url(),
        &PredictionForm::default(),
        None,
    ))
}

/// Handle a form submission.
///
/// Input outside the widget bounds is reported on the page and never reaches
/// the API.
async fn submit_form(
    State(state): State<Arc<DashboardState>>,
    form: Result<Form<PredictionForm>, FormRejection>,
) -> Html<String> {
    let predict_url = state.client.predict_url();

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Rejected form submission: {}", rejection.body_text());
            let outcome = Outcome::InvalidInput(rejection.body_text());
            return Html(render_page(&predict_url, &PredictionForm::default(), Some(&outcome)));
        }
    };

    let outcome = match form.to_request() {
        Ok(request) => {
            debug!("Submitting prediction for {} sqft", request.sqft);
            state.submit(&request).await
        }
        Err(message) => Outcome::InvalidInput(message),
    };

    Html(render_page(&predict_url, &form, Some(&outcome)))
}

/// Serve the CSS stylesheet.
async fn serve_css() -> impl IntoResponse {
    let css = match StaticAssets::get("style.css") {
        Some(content) => String::from_utf8_lossy(content.data.as_ref()).to_string(),
        None => default_style_css().to_string(),
    };
    ([(header::CONTENT_TYPE, "text/css")], css)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

fn default_style_css() -> &'static str {
    r#"body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    max-width: 900px;
    margin: 2rem auto;
    padding: 0 1rem;
}

.error { color: #b00020; }
.warning { color: #8a6d00; }
"#
}

/// The dashboard server.
pub struct DashboardServer {
    host: String,
    port: u16,
    state: Arc<DashboardState>,
}

impl DashboardServer {
    pub fn new(host: impl Into<String>, port: u16, state: Arc<DashboardState>) -> Self {
        Self {
            host: host.into(),
            port,
            state,
        }
    }

    /// Build the server and its API client from configuration.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let client = ApiClient::new(
            &config.api_url,
            Duration::from_secs(config.timeout_seconds),
        )?;
        Ok(Self::new(
            config.host.clone(),
            config.port,
            Arc::new(DashboardState::new(client)),
        ))
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(
        &self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state.clone());

        info!(
            "Dashboard listening on {} (API at {})",
            listener.local_addr()?,
            self.state.client.base_url()
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Dashboard stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
