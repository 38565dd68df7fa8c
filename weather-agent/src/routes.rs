use axum::{
    extract::{Host, State},
    response::Html,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::dispatcher::TaskDispatcher;
use a2a_task::{AgentCard, SendResponse};

/// State shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<TaskDispatcher>,
    pub card: Arc<AgentCard>,
}

/// Create all agent routes.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing).post(message_send))
        .route("/.well-known/agent.json", get(agent_card))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Handler for the landing page.
async fn landing() -> Html<&'static str> {
    Html(r#"<p style="font-size:30px">Current Weather Agent</p>"#)
}

/// Handler for message submission.
///
/// The body is taken raw so the dispatcher can report parse failures as
/// protocol error envelopes; the transport status is always 200.
async fn message_send(State(state): State<AppState>, body: String) -> Json<SendResponse> {
    Json(state.dispatcher.submit(&body))
}

/// Handler for the discovery document, reshaped per request host.
async fn agent_card(State(state): State<AppState>, Host(host): Host) -> Json<AgentCard> {
    Json(state.card.for_base_url(&format!("http://{host}")))
}
