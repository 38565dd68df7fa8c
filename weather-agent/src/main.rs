use std::sync::Arc;

use weather_agent::{
    card, create_routes, AppState, Config, TaskDispatcher, WeatherClient, WebhookNotifier,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let http = reqwest::Client::new();
    let weather = WeatherClient::new(
        http.clone(),
        config.weather_api_url.clone(),
        config.weather_api_key.clone(),
    );
    let dispatcher = Arc::new(TaskDispatcher::new(weather, WebhookNotifier::new(http)));

    let state = AppState {
        dispatcher,
        card: Arc::new(card::agent_card()),
    };
    let app = create_routes(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Current Weather Agent listening at http://{local_addr}");
    tracing::info!(
        "Agent card available at http://{local_addr}/.well-known/agent.json"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
